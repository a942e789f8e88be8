//! Implementation of the `promptgrid run` command.
//!
//! Responsibility: load the candidates and dataset files, build the
//! optimizer from the selected adapters, and print the leaderboard.

use tracing::{debug, info, instrument};

use promptgrid_adapters::{
    EchoModel, ExactMatchScorer, SimilarityScorer, SimulatedModel, load_candidates, load_dataset,
};
use promptgrid_core::{
    application::{Generator, OptimizerService, Scorer},
    domain::{CandidateSet, Dataset},
};

use crate::{
    cli::{ModelKind, ReportArgs, ReportFormat, RunArgs, ScorerKind},
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
    report::RunReport,
};

/// Execute the `promptgrid run` command.
#[instrument(skip_all, fields(candidates = %args.candidates.display(), dataset = %args.dataset.display()))]
pub fn execute(args: RunArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let candidates = load_candidates(&args.candidates)?;
    let dataset = load_dataset(&args.dataset)?;

    info!(
        candidates = candidates.len(),
        examples = dataset.len(),
        "Inputs loaded"
    );

    evaluate_and_report(&candidates, &dataset, &args.report, &config, &output)
}

/// Effective run options after merging flags over config.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSettings {
    pub model: ModelKind,
    pub scorer: ScorerKind,
    pub top: Option<u64>,
    pub format: ReportFormat,
}

impl RunSettings {
    /// CLI flags win over config values.
    pub fn resolve(args: &ReportArgs, config: &AppConfig) -> Self {
        Self {
            model: args.model.unwrap_or(config.defaults.model),
            scorer: args.scorer.unwrap_or(config.defaults.scorer),
            top: args.top.or(config.defaults.top),
            format: args.format.unwrap_or(config.output.format),
        }
    }
}

/// Evaluate every candidate and print the report.  Shared with `demo`.
pub fn evaluate_and_report(
    candidates: &CandidateSet,
    dataset: &Dataset,
    args: &ReportArgs,
    config: &AppConfig,
    output: &OutputManager,
) -> CliResult<()> {
    let settings = RunSettings::resolve(args, config);
    debug!(?settings, "Run settings resolved");

    let service = build_service(settings.model, settings.scorer);

    let spinner = output.spinner(&format!(
        "Evaluating {} candidates over {} examples...",
        candidates.len(),
        dataset.len()
    ));
    let result = service.evaluate(candidates, dataset);
    spinner.finish_and_clear();

    let evaluation = result?;
    let report = RunReport::new(&evaluation, settings.model, settings.scorer, settings.top);
    report.render(settings.format, output)
}

/// Wire the chosen adapters into an [`OptimizerService`].
pub fn build_service(model: ModelKind, scorer: ScorerKind) -> OptimizerService {
    let generator: Box<dyn Generator> = match model {
        ModelKind::Simulated => Box::new(SimulatedModel::new()),
        ModelKind::Echo => Box::new(EchoModel::new()),
    };
    let scorer: Box<dyn Scorer> = match scorer {
        ScorerKind::Similarity => Box::new(SimilarityScorer::new()),
        ScorerKind::Exact => Box::new(ExactMatchScorer::new()),
    };
    OptimizerService::new(generator, scorer)
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use promptgrid_core::domain::PromptCandidate;

    fn no_flags() -> ReportArgs {
        ReportArgs {
            model: None,
            scorer: None,
            top: None,
            format: None,
        }
    }

    #[test]
    fn settings_fall_back_to_config() {
        let mut config = AppConfig::default();
        config.defaults.scorer = ScorerKind::Exact;
        config.defaults.top = Some(2);

        let settings = RunSettings::resolve(&no_flags(), &config);
        assert_eq!(settings.scorer, ScorerKind::Exact);
        assert_eq!(settings.top, Some(2));
        assert_eq!(settings.model, ModelKind::Simulated);
        assert_eq!(settings.format, ReportFormat::Table);
    }

    #[test]
    fn flags_override_config() {
        let mut config = AppConfig::default();
        config.output.format = ReportFormat::Csv;

        let args = ReportArgs {
            model: Some(ModelKind::Echo),
            format: Some(ReportFormat::Json),
            ..no_flags()
        };
        let settings = RunSettings::resolve(&args, &config);
        assert_eq!(settings.model, ModelKind::Echo);
        assert_eq!(settings.format, ReportFormat::Json);
    }

    #[test]
    fn echo_with_exact_rewards_identity_template() {
        let service = build_service(ModelKind::Echo, ScorerKind::Exact);
        let candidates = CandidateSet::new()
            .with(PromptCandidate::new("Q: {input}"))
            .with(PromptCandidate::new("{input}"));
        let dataset = Dataset::from_pairs([("hello", "hello")]);

        let selection = service.best(&candidates, &dataset).unwrap();
        assert_eq!(selection.index(), Some(1));
        assert_eq!(selection.score(), 1.0);
    }
}

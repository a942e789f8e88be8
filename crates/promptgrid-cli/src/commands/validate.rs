//! `promptgrid validate`: check files without running a model.

use std::path::Path;

use tracing::{info, instrument};

use promptgrid_adapters::{load_candidates, load_dataset};
use promptgrid_core::domain::{CandidateSet, DomainValidator};

use crate::{
    cli::ValidateArgs,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Check every template, then the dataset if one was given.
///
/// All template problems are reported together rather than stopping at the
/// first.
#[instrument(skip_all, fields(candidates = %args.candidates.display()))]
pub fn execute(args: ValidateArgs, output: OutputManager) -> CliResult<()> {
    let candidates = load_candidates(&args.candidates)?;
    check_candidates(&args.candidates, &candidates)?;

    if candidates.is_empty() {
        output.warning(&format!("{} contains no candidates", args.candidates.display()))?;
    } else {
        output.success(&format!(
            "{} candidate(s) in {} are valid",
            candidates.len(),
            args.candidates.display()
        ))?;
    }

    if let Some(path) = &args.dataset {
        let dataset = load_dataset(path)?;
        info!(examples = dataset.len(), "Dataset parsed");

        if dataset.is_empty() {
            output.warning(&format!(
                "{} contains no examples; every candidate would score 0.0",
                path.display()
            ))?;
        } else {
            output.success(&format!(
                "{} example(s) in {} parsed",
                dataset.len(),
                path.display()
            ))?;
        }
    }

    Ok(())
}

fn check_candidates(path: &Path, candidates: &CandidateSet) -> CliResult<()> {
    let problems = DomainValidator::candidate_problems(candidates);
    if problems.is_empty() {
        return Ok(());
    }
    Err(CliError::InvalidCandidates {
        path: path.to_path_buf(),
        count: problems.len(),
        problems,
    })
}

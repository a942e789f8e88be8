//! Leaderboard rendering for `run` and `demo`.
//!
//! [`RunReport`] is built once from an [`Evaluation`] and rendered in one of
//! three formats.  Table output goes through [`OutputManager`] styling; JSON
//! and CSV are plain payloads.

use chrono::{DateTime, Utc};
use owo_colors::OwoColorize;
use serde::Serialize;

use promptgrid_core::domain::{CandidateParams, CandidateScore, Evaluation};

use crate::{
    cli::{ModelKind, ReportFormat, ScorerKind},
    error::{CliResult, IntoCli},
    output::OutputManager,
};

/// One leaderboard row.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportRow {
    /// 1-based position after ranking.
    pub rank: usize,
    /// Position in the candidates file.
    pub index: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    pub template: String,
    #[serde(skip_serializing_if = "CandidateParams::is_empty")]
    pub params: CandidateParams,
    pub mean_score: f64,
}

impl ReportRow {
    fn from_score(rank: usize, score: &CandidateScore) -> Self {
        Self {
            rank,
            index: score.index,
            label: score.candidate.label().map(str::to_owned),
            template: score.candidate.template().to_string(),
            params: score.candidate.params().clone(),
            mean_score: score.mean_score,
        }
    }
}

/// Result of one evaluation run, ready to print.
#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    pub generated_at: DateTime<Utc>,
    pub model: ModelKind,
    pub scorer: ScorerKind,
    /// Dataset size.
    pub examples: usize,
    /// Number of candidates evaluated (before `--top`).
    pub candidates: usize,
    /// The winner, or `None` for an empty candidate set.
    pub best: Option<ReportRow>,
    /// Best first, truncated to `--top`.
    pub ranking: Vec<ReportRow>,
}

impl RunReport {
    pub fn new(
        evaluation: &Evaluation,
        model: ModelKind,
        scorer: ScorerKind,
        top: Option<u64>,
    ) -> Self {
        let ranked = evaluation.ranked();
        let limit = top
            .and_then(|n| usize::try_from(n).ok())
            .unwrap_or(ranked.len());

        let ranking: Vec<ReportRow> = ranked
            .iter()
            .take(limit)
            .enumerate()
            .map(|(i, score)| ReportRow::from_score(i + 1, score))
            .collect();

        Self {
            generated_at: Utc::now(),
            model,
            scorer,
            examples: evaluation.example_count(),
            candidates: evaluation.len(),
            best: ranked.first().map(|s| ReportRow::from_score(1, s)),
            ranking,
        }
    }

    /// Print in the requested format.
    pub fn render(&self, format: ReportFormat, output: &OutputManager) -> CliResult<()> {
        match format {
            ReportFormat::Table => self.render_table(output),
            ReportFormat::Json => {
                let json = serde_json::to_string_pretty(self)
                    .with_cli_context(|| "serialising JSON report")?;
                output.data(&json)?;
                Ok(())
            }
            ReportFormat::Csv => {
                output.data(&self.to_csv())?;
                Ok(())
            }
        }
    }

    fn render_table(&self, output: &OutputManager) -> CliResult<()> {
        output.header(&format!(
            "Leaderboard ({} candidates x {} examples, model={}, scorer={})",
            self.candidates, self.examples, self.model, self.scorer
        ))?;

        if self.ranking.is_empty() {
            output.warning("No candidates to evaluate")?;
            return Ok(());
        }

        if self.examples == 0 {
            output.warning("Dataset is empty; every candidate scores 0.0")?;
        }

        for row in &self.ranking {
            let score = format!("{:.4}", row.mean_score);
            let score = if output.supports_color() {
                score.bold().to_string()
            } else {
                score
            };
            let label = row
                .label
                .as_deref()
                .map(|l| format!("  ({l})"))
                .unwrap_or_default();
            output.print(&format!(
                "  {:>3}. [{}] #{} {}{}",
                row.rank, score, row.index, row.template, label
            ))?;
        }

        if let Some(best) = &self.best {
            output.print("")?;
            output.success(&format!(
                "Best: {} (score {:.4})",
                best.template, best.mean_score
            ))?;
        }

        Ok(())
    }

    /// `rank,index,label,mean_score,template` with a header row.
    pub fn to_csv(&self) -> String {
        let mut out = String::from("rank,index,label,mean_score,template\n");
        for row in &self.ranking {
            out.push_str(&format!(
                "{},{},{},{},{}\n",
                row.rank,
                row.index,
                csv_field(row.label.as_deref().unwrap_or_default()),
                row.mean_score,
                csv_field(&row.template),
            ));
        }
        out
    }
}

/// Quote a CSV field when it contains a separator, quote, or newline.
fn csv_field(value: &str) -> String {
    if value.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_owned()
    }
}

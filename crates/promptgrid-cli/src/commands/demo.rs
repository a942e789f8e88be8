//! `promptgrid demo`: run the built-in suite.

use tracing::instrument;

use promptgrid_adapters::builtin_suite;

use crate::{
    cli::{DemoArgs, ReportFormat},
    commands::run::{RunSettings, evaluate_and_report},
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
};

#[instrument(skip_all)]
pub fn execute(args: DemoArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let candidates = builtin_suite::demo_candidates();
    let dataset = builtin_suite::demo_dataset();

    // machine formats must stay parseable
    if RunSettings::resolve(&args.report, &config).format == ReportFormat::Table {
        output.info(&format!(
            "Built-in suite: {} candidates, {} examples",
            candidates.len(),
            dataset.len()
        ))?;
    }

    evaluate_and_report(&candidates, &dataset, &args.report, &config, &output)
}

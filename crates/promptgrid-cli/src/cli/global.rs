//! Flags shared by every subcommand.
//!
//! Flattened into [`super::Cli`] with `global = true`, so `promptgrid -v demo`
//! and `promptgrid demo -v` mean the same thing.

use std::path::PathBuf;

use clap::{Args, builder::FalseyValueParser};

#[derive(Debug, Args)]
pub struct GlobalArgs {
    /// Logging verbosity: `-v` info, `-vv` debug, `-vvv` trace.
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        global = true,
        help = "Increase verbosity (-v, -vv, -vvv)",
        long_help = "Increase logging verbosity:
    (none)  - Only warnings and errors
    -v      - Info level (run summary, winner)
    -vv     - Debug level (per-candidate scores)
    -vvv    - Trace level (every generation and score)"
    )]
    pub verbose: u8,

    #[arg(
        short = 'q',
        long = "quiet",
        global = true,
        conflicts_with = "verbose",
        help = "Only print reports and errors"
    )]
    pub quiet: bool,

    /// Plain output without ANSI styling.
    ///
    /// `NO_COLOR` with any non-empty value other than `0`, `false`, `no`,
    /// `n`, or `off` turns this on (<https://no-color.org>).
    #[arg(
        long = "no-color",
        global = true,
        env = "NO_COLOR",
        value_parser = FalseyValueParser::new(),
        help = "Disable colored output"
    )]
    pub no_color: bool,

    /// Config file; defaults to the platform config directory.
    #[arg(
        short = 'c',
        long = "config",
        global = true,
        value_name = "FILE",
        help = "Configuration file path"
    )]
    pub config: Option<PathBuf>,
}

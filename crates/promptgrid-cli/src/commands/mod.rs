//! Command handlers, one module per subcommand.
//!
//! Handlers translate parsed arguments into core calls and print results.
//! No evaluation logic lives here.

pub mod completions;
pub mod config;
pub mod demo;
pub mod init;
pub mod run;
pub mod validate;

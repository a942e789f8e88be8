//! Application layer for Promptgrid.
//!
//! This layer contains:
//! - **Services**: Use case orchestration (evaluate, rank, select)
//! - **Ports**: Interface definitions (traits) for generation and scoring
//! - **Errors**: Application-specific error types
//!
//! The application layer coordinates the domain layer but contains no
//! template or ranking rules itself. Those live in `crate::domain`.

pub mod error;
pub mod ports;
pub mod services;

// Re-export main services
pub use services::{OptimizerService, best, evaluate, rank};

// Re-export port traits (for adapter implementation)
pub use ports::{Generator, Scorer};

pub use error::{ApplicationError, PortError};

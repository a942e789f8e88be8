//! Infrastructure adapters for Promptgrid.
//!
//! This crate implements the ports defined in `promptgrid-core::application::ports`
//! and owns the file formats for candidates and datasets.

pub mod builtin_suite;
pub mod generator;
pub mod loader;
pub mod scorer;

// Re-export commonly used adapters
pub use generator::{EchoModel, SimulatedModel};
pub use loader::{FileFormat, load_candidates, load_dataset};
pub use scorer::{ExactMatchScorer, SimilarityScorer};

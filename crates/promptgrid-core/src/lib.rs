//! Promptgrid Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for Promptgrid,
//! an exhaustive prompt-candidate evaluator, following hexagonal (ports and
//! adapters) architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │          promptgrid-cli (CLI)           │
//! │     (Implements Driving Ports)          │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │  (OptimizerService, evaluate, best)     │
//! │         Orchestrates Use Cases          │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │       (Driven: Generator, Scorer)       │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │  promptgrid-adapters (Infrastructure)   │
//! │ (SimulatedModel, SimilarityScorer, etc) │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Domain Layer (Pure Logic)       │
//! │  (PromptTemplate, Candidate, Dataset)   │
//! │         No External Dependencies        │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use promptgrid_core::prelude::*;
//!
//! // 1. Describe the grid
//! let candidates = CandidateSet::new()
//!     .with(PromptCandidate::new("Summarize: {input}"))
//!     .with(PromptCandidate::new("Explain in detail: {input}").with_param("temperature", 0.2));
//! let dataset = Dataset::from_pairs([("Data A", "short summary")]);
//!
//! // 2. Inject a model and a metric (closures or adapters)
//! let model = |prompt: &str, _: &CandidateParams| {
//!     if prompt.starts_with("Summarize") { "short summary".to_string() } else { prompt.to_string() }
//! };
//! let metric = |output: &str, expected: &str| if output == expected { 1.0 } else { 0.0 };
//!
//! // 3. Pick the winner
//! let selection = best(&candidates, &dataset, &model, &metric).unwrap();
//! assert_eq!(selection.index(), Some(0));
//! assert_eq!(selection.score(), 1.0);
//! ```

pub mod domain;

pub mod application;

pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        OptimizerService, PortError, best, evaluate, rank,
        ports::{Generator, Scorer},
    };
    pub use crate::domain::{
        CandidateParams, CandidateScore, CandidateSet, Dataset, DomainValidator, Evaluation,
        Example, PromptCandidate, PromptTemplate, Selection,
    };
    pub use crate::error::{PromptgridError, PromptgridResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

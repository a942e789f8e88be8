//! Core domain layer for Promptgrid.
//!
//! This module contains pure evaluation logic with no I/O. Generation and
//! scoring are reached only through the ports defined in the application
//! layer.
//!
//! ## Hexagonal Architecture Compliance
//!
//! - **No async**: Domain logic is synchronous
//! - **No I/O**: No filesystem, network, or model calls
//! - **Immutable entities**: Candidates and examples never change after construction
//! - **Rich domain model**: Rendering and ranking live in entities, not services
//!
// Public API - what the world sees
pub mod entities;
pub mod error;

// Private implementation details - not visible outside domain
mod validation;

// Re-exports for convenience
pub use entities::{
    CandidateParams, CandidateScore, CandidateSet, Dataset, Evaluation, Example,
    INPUT_PLACEHOLDER, PromptCandidate, PromptTemplate, Selection,
};

pub use error::{DomainError, ErrorCategory};

pub use validation::DomainValidator;

//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the evaluator needs from the outside world.
//! The `promptgrid-adapters` crate provides implementations, and plain
//! closures work too:
//!
//! ```rust
//! use promptgrid_core::prelude::*;
//!
//! let generator = |prompt: &str, _params: &CandidateParams| prompt.to_uppercase();
//! let scorer = |output: &str, expected: &str| if output == expected { 1.0 } else { 0.0 };
//!
//! let candidates = CandidateSet::new().with(PromptCandidate::new("say {input}"));
//! let dataset = Dataset::from_pairs([("hi", "SAY HI")]);
//!
//! let evaluation = evaluate(&candidates, &dataset, &generator, &scorer).unwrap();
//! assert_eq!(evaluation.scores()[0].mean_score, 1.0);
//! ```

use crate::application::error::PortError;
use crate::domain::CandidateParams;

/// Port for text generation.
///
/// Implemented by:
/// - `promptgrid_adapters::generator::SimulatedModel` (keyword rules)
/// - `promptgrid_adapters::generator::EchoModel` (returns the prompt)
/// - any `Fn(&str, &CandidateParams) -> String`
///
/// Errors are propagated to the caller untouched; the evaluator never
/// retries.
#[cfg_attr(test, mockall::automock)]
pub trait Generator: Send + Sync {
    /// Produce output for a fully rendered prompt.
    fn generate(&self, prompt: &str, params: &CandidateParams) -> Result<String, PortError>;
}

/// Port for scoring generated output against the expected text.
///
/// Implemented by:
/// - `promptgrid_adapters::scorer::SimilarityScorer` (reference, [0, 1])
/// - `promptgrid_adapters::scorer::ExactMatchScorer`
/// - any `Fn(&str, &str) -> f64`
///
/// Higher is better. The value must be finite.
#[cfg_attr(test, mockall::automock)]
pub trait Scorer: Send + Sync {
    fn score(&self, output: &str, expected: &str) -> Result<f64, PortError>;
}

impl<F> Generator for F
where
    F: Fn(&str, &CandidateParams) -> String + Send + Sync,
{
    fn generate(&self, prompt: &str, params: &CandidateParams) -> Result<String, PortError> {
        Ok(self(prompt, params))
    }
}

impl<F> Scorer for F
where
    F: Fn(&str, &str) -> f64 + Send + Sync,
{
    fn score(&self, output: &str, expected: &str) -> Result<f64, PortError> {
        Ok(self(output, expected))
    }
}

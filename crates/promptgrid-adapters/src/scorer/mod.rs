//! Scoring adapters.
//!
//! Both scorers compare trimmed text and return a value in `[0, 1]`.

mod exact;
mod similarity;

pub use exact::ExactMatchScorer;
pub use similarity::SimilarityScorer;

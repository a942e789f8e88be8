pub mod candidate;
pub mod dataset;
pub mod evaluation;
pub mod template;

pub use crate::domain::DomainError;
pub use candidate::{CandidateParams, CandidateSet, PromptCandidate};
pub use dataset::{Dataset, Example};
pub use evaluation::{CandidateScore, Evaluation, Selection};
pub use template::{INPUT_PLACEHOLDER, PromptTemplate};

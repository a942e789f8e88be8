use crate::domain::{
    entities::CandidateSet,
    error::DomainError,
};

/// Centralized domain validation.
///
/// All validation logic lives here, not scattered across callers.
pub struct DomainValidator;

impl DomainValidator {
    /// Every template problem, for reporting rather than failing fast.
    pub fn candidate_problems(candidates: &CandidateSet) -> Vec<DomainError> {
        candidates.problems()
    }
}

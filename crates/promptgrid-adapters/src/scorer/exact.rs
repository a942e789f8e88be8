use promptgrid_core::application::{PortError, Scorer};

/// `1.0` when the trimmed strings are equal, otherwise `0.0`.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExactMatchScorer;

impl ExactMatchScorer {
    pub fn new() -> Self {
        Self
    }
}

impl Scorer for ExactMatchScorer {
    fn score(&self, output: &str, expected: &str) -> Result<f64, PortError> {
        Ok(if output.trim() == expected.trim() { 1.0 } else { 0.0 })
    }
}

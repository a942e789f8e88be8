//! Reference similarity scorer.

use promptgrid_core::application::{PortError, Scorer};
use similar::{DiffTag, TextDiff};
use tracing::trace;

/// Character-level similarity ratio.
///
/// Computes `2 * matches / (len(a) + len(b))` over the trimmed strings, where
/// `matches` is the number of characters kept by a minimal diff. The result
/// is symmetric, lies in `[0, 1]`, and is `1.0` for equal strings (including
/// two empty ones).
#[derive(Debug, Clone, Copy, Default)]
pub struct SimilarityScorer;

impl SimilarityScorer {
    pub fn new() -> Self {
        Self
    }

    /// Similarity of two strings without going through the port.
    pub fn ratio(a: &str, b: &str) -> f64 {
        let (a, b) = (a.trim(), b.trim());
        if a.is_empty() && b.is_empty() {
            return 1.0;
        }

        // `TextDiff::ratio` is f32; count matches here to keep f64 precision.
        let matched: usize = TextDiff::from_chars(a, b)
            .ops()
            .iter()
            .map(|op| op.as_tag_tuple())
            .filter(|(tag, _, _)| *tag == DiffTag::Equal)
            .map(|(_, old, _)| old.len())
            .sum();
        let total = a.chars().count() + b.chars().count();

        2.0 * matched as f64 / total as f64
    }
}

impl Scorer for SimilarityScorer {
    fn score(&self, output: &str, expected: &str) -> Result<f64, PortError> {
        let score = Self::ratio(output, expected);
        trace!(score, "similarity");
        Ok(score)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identical_strings_score_one() {
        assert_eq!(SimilarityScorer::ratio("short summary", "short summary"), 1.0);
        assert_eq!(SimilarityScorer::ratio("", ""), 1.0);
    }

    #[test]
    fn surrounding_whitespace_is_ignored() {
        assert_eq!(SimilarityScorer::ratio("  Paris\n", "Paris"), 1.0);
    }

    #[test]
    fn disjoint_strings_score_zero() {
        assert_eq!(SimilarityScorer::ratio("abc", "xyz"), 0.0);
        assert_eq!(SimilarityScorer::ratio("", "xyz"), 0.0);
    }

    #[test]
    fn partial_overlap_is_between_bounds() {
        // three of four characters kept on each side
        let score = SimilarityScorer::ratio("abcd", "abxd");
        assert!((score - 0.75).abs() < 1e-6);
    }

    #[test]
    fn keeps_full_precision() {
        assert_eq!(SimilarityScorer::ratio("abc", "abd"), 4.0 / 6.0);
        assert_eq!(
            SimilarityScorer::ratio("short summary", "summary"),
            2.0 * 7.0 / 20.0
        );
    }

    #[test]
    fn counts_characters_not_bytes() {
        assert_eq!(SimilarityScorer::ratio("café", "cafe"), 6.0 / 8.0);
    }

    #[test]
    fn is_symmetric() {
        let scorer = SimilarityScorer::new();
        let ab = scorer.score("detailed explanation", "Paris").unwrap();
        let ba = scorer.score("Paris", "detailed explanation").unwrap();
        assert_eq!(ab, ba);
    }
}

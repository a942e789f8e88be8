//! Evaluation results and selection.

use std::cmp::Ordering;

use serde::Serialize;

use crate::domain::entities::candidate::PromptCandidate;

/// Mean score of one candidate, tagged with its input position.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CandidateScore {
    pub index: usize,
    pub candidate: PromptCandidate,
    pub mean_score: f64,
}

impl CandidateScore {
    pub fn new(index: usize, candidate: PromptCandidate, mean_score: f64) -> Self {
        Self {
            index,
            candidate,
            mean_score,
        }
    }
}

/// Per-candidate mean scores in candidate input order.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Evaluation {
    scores: Vec<CandidateScore>,
    examples: usize,
}

impl Evaluation {
    pub fn new(scores: Vec<CandidateScore>, examples: usize) -> Self {
        Self { scores, examples }
    }

    pub fn scores(&self) -> &[CandidateScore] {
        &self.scores
    }

    pub fn iter(&self) -> std::slice::Iter<'_, CandidateScore> {
        self.scores.iter()
    }

    pub fn len(&self) -> usize {
        self.scores.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }

    /// Number of dataset examples each mean was taken over.
    pub fn example_count(&self) -> usize {
        self.examples
    }

    /// Scores sorted best first.
    ///
    /// The sort is stable, so equal scores keep input order and the earliest
    /// candidate ranks first. NaN ranks last.
    pub fn ranked(&self) -> Vec<CandidateScore> {
        let mut ranked = self.scores.clone();
        ranked.sort_by(|a, b| by_score_descending(a.mean_score, b.mean_score));
        ranked
    }

    /// Top-ranked candidate, or the empty selection.
    pub fn best(&self) -> Selection {
        Selection {
            winner: self.ranked().into_iter().next(),
        }
    }
}

impl<'a> IntoIterator for &'a Evaluation {
    type Item = &'a CandidateScore;
    type IntoIter = std::slice::Iter<'a, CandidateScore>;

    fn into_iter(self) -> Self::IntoIter {
        self.scores.iter()
    }
}

fn by_score_descending(a: f64, b: f64) -> Ordering {
    fn key(score: f64) -> f64 {
        if score.is_nan() { f64::NEG_INFINITY } else { score }
    }
    key(b).partial_cmp(&key(a)).unwrap_or(Ordering::Equal)
}

/// Outcome of selection.
///
/// Empty when there were no candidates; callers must check
/// [`candidate`](Self::candidate) before using it. The score of an empty
/// selection is `0.0`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Selection {
    winner: Option<CandidateScore>,
}

impl Selection {
    pub fn candidate(&self) -> Option<&PromptCandidate> {
        self.winner.as_ref().map(|w| &w.candidate)
    }

    pub fn index(&self) -> Option<usize> {
        self.winner.as_ref().map(|w| w.index)
    }

    pub fn score(&self) -> f64 {
        self.winner.as_ref().map_or(0.0, |w| w.mean_score)
    }

    pub fn is_none(&self) -> bool {
        self.winner.is_none()
    }

    pub fn winner(&self) -> Option<&CandidateScore> {
        self.winner.as_ref()
    }

    /// Tuple form: `(candidate_or_none, score)`.
    pub fn into_parts(self) -> (Option<PromptCandidate>, f64) {
        let score = self.score();
        (self.winner.map(|w| w.candidate), score)
    }
}

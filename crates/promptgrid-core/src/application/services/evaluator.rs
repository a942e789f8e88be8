//! Exhaustive evaluation and selection.
//!
//! For every candidate (input order) and every example (dataset order):
//! 1. Render the template with the example's input
//! 2. Generate output with the candidate's params
//! 3. Score the output against the expected text
//!
//! The candidate's score is the arithmetic mean, or `0.0` for an empty
//! dataset. `generate` and `score` each run exactly once per
//! (candidate, example) pair. Nothing here logs, retries, or caches.

use crate::{
    application::{
        ApplicationError,
        ports::{Generator, Scorer},
    },
    domain::{
        CandidateScore, CandidateSet, Dataset, DomainError, Evaluation, PromptCandidate, Selection,
    },
    error::PromptgridResult,
};

/// Mean score of every candidate, in candidate input order.
///
/// The first template, generator, or scorer failure aborts the run.
pub fn evaluate<G, S>(
    candidates: &CandidateSet,
    dataset: &Dataset,
    generator: &G,
    scorer: &S,
) -> PromptgridResult<Evaluation>
where
    G: Generator + ?Sized,
    S: Scorer + ?Sized,
{
    let mut scores = Vec::with_capacity(candidates.len());

    for (index, candidate) in candidates.iter().enumerate() {
        let mean_score = mean_score(index, candidate, dataset, generator, scorer)?;
        scores.push(CandidateScore::new(index, candidate.clone(), mean_score));
    }

    Ok(Evaluation::new(scores, dataset.len()))
}

/// Every candidate, best first; ties keep input order.
pub fn rank<G, S>(
    candidates: &CandidateSet,
    dataset: &Dataset,
    generator: &G,
    scorer: &S,
) -> PromptgridResult<Vec<CandidateScore>>
where
    G: Generator + ?Sized,
    S: Scorer + ?Sized,
{
    Ok(evaluate(candidates, dataset, generator, scorer)?.ranked())
}

/// The top candidate, or an empty [`Selection`] (score `0.0`) when there
/// are no candidates.
pub fn best<G, S>(
    candidates: &CandidateSet,
    dataset: &Dataset,
    generator: &G,
    scorer: &S,
) -> PromptgridResult<Selection>
where
    G: Generator + ?Sized,
    S: Scorer + ?Sized,
{
    Ok(evaluate(candidates, dataset, generator, scorer)?.best())
}

fn mean_score<G, S>(
    index: usize,
    candidate: &PromptCandidate,
    dataset: &Dataset,
    generator: &G,
    scorer: &S,
) -> PromptgridResult<f64>
where
    G: Generator + ?Sized,
    S: Scorer + ?Sized,
{
    if dataset.is_empty() {
        return Ok(0.0);
    }

    let mut total = 0.0;

    for example in dataset {
        let prompt = candidate
            .render(&example.input)
            .map_err(|reason| DomainError::substitution(index, candidate, reason))?;

        let output = generator
            .generate(&prompt, candidate.params())
            .map_err(|source| ApplicationError::generation(index, source))?;

        let score = scorer
            .score(&output, &example.expected)
            .map_err(|source| ApplicationError::scoring(index, source))?;

        if !score.is_finite() {
            return Err(ApplicationError::NonFiniteScore { index, score }.into());
        }

        total += score;
    }

    Ok(total / dataset.len() as f64)
}

//! Optimizer Service - main application orchestrator.
//!
//! Binds the evaluator to one generator and one scorer, chosen once by the
//! caller:
//! 1. Evaluate every candidate against the dataset
//! 2. Rank by mean score (stable, ties keep input order)
//! 3. Report the winner
//!
//! It implements the driving port (incoming) and uses driven ports (outgoing).

use tracing::{debug, info, instrument, warn};
use uuid::Uuid;

use crate::{
    application::{
        ports::{Generator, Scorer},
        services::evaluator,
    },
    domain::{CandidateScore, CandidateSet, Dataset, Evaluation, Selection},
    error::PromptgridResult,
};

/// Exhaustive prompt optimizer.
pub struct OptimizerService {
    generator: Box<dyn Generator>,
    scorer: Box<dyn Scorer>,
}

impl OptimizerService {
    /// Create a new optimizer with the given adapters.
    ///
    /// # Example
    ///
    /// ```rust
    /// use promptgrid_core::prelude::*;
    ///
    /// let model = |prompt: &str, _: &CandidateParams| prompt.len().to_string();
    /// let scorer = |output: &str, expected: &str| (output == expected) as u8 as f64;
    /// let service = OptimizerService::new(Box::new(model), Box::new(scorer));
    ///
    /// let candidates = CandidateSet::new()
    ///     .with(PromptCandidate::new("{input}"))
    ///     .with(PromptCandidate::new(">{input}"));
    /// let dataset = Dataset::from_pairs([("ab", "3")]);
    ///
    /// let selection = service.best(&candidates, &dataset).unwrap();
    /// assert_eq!(selection.index(), Some(1));
    /// ```
    pub fn new(generator: Box<dyn Generator>, scorer: Box<dyn Scorer>) -> Self {
        Self { generator, scorer }
    }

    /// Mean score per candidate, in input order.
    #[instrument(
        skip_all,
        fields(
            run_id = %Uuid::new_v4(),
            candidates = candidates.len(),
            examples = dataset.len()
        )
    )]
    pub fn evaluate(
        &self,
        candidates: &CandidateSet,
        dataset: &Dataset,
    ) -> PromptgridResult<Evaluation> {
        info!(
            "Evaluating {} candidates over {} examples",
            candidates.len(),
            dataset.len()
        );

        if dataset.is_empty() {
            warn!("Dataset is empty; every candidate scores 0.0");
        }

        let evaluation = evaluator::evaluate(
            candidates,
            dataset,
            self.generator.as_ref(),
            self.scorer.as_ref(),
        )?;

        for scored in &evaluation {
            debug!(
                index = scored.index,
                score = scored.mean_score,
                template = %scored.candidate.template(),
                "Candidate evaluated"
            );
        }

        Ok(evaluation)
    }

    /// Every candidate, best first.
    pub fn rank(
        &self,
        candidates: &CandidateSet,
        dataset: &Dataset,
    ) -> PromptgridResult<Vec<CandidateScore>> {
        Ok(self.evaluate(candidates, dataset)?.ranked())
    }

    /// The winning candidate, or the empty selection for an empty set.
    pub fn best(&self, candidates: &CandidateSet, dataset: &Dataset) -> PromptgridResult<Selection> {
        let selection = self.evaluate(candidates, dataset)?.best();

        match selection.winner() {
            Some(winner) => info!(
                index = winner.index,
                score = winner.mean_score,
                template = %winner.candidate.template(),
                "Best candidate selected"
            ),
            None => warn!("No candidates to select from"),
        }

        Ok(selection)
    }
}

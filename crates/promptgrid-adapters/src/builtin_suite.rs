//! Built-in demo suite.
//!
//! Three candidates and two small datasets that exercise every keyword rule
//! of [`SimulatedModel`](crate::SimulatedModel). Used by `promptgrid demo`
//! and as a smoke test for the evaluator.

use promptgrid_core::domain::{CandidateSet, Dataset, PromptCandidate};

/// The three reference candidates, in a fixed order.
pub fn demo_candidates() -> CandidateSet {
    CandidateSet::new()
        .with(
            PromptCandidate::new("Summarize: {input}")
                .with_label("summarize")
                .with_param("temperature", 0.2),
        )
        .with(
            PromptCandidate::new("Explain in detail: {input}")
                .with_label("explain")
                .with_param("temperature", 0.7),
        )
        .with(
            PromptCandidate::new("Answer in one word: {input}")
                .with_label("one-word")
                .with_param("temperature", 0.0),
        )
}

/// One example per candidate style.
pub fn demo_dataset() -> Dataset {
    Dataset::from_pairs([
        (
            "This is a long paragraph that needs to be summarized.",
            "short summary",
        ),
        ("Why is the sky blue?", "detailed explanation"),
        ("Hello world example", "Hello"),
    ])
}

/// Two examples that both expect a summary.
pub fn summary_dataset() -> Dataset {
    Dataset::from_pairs([("Data A", "short summary"), ("Data B", "short summary")])
}

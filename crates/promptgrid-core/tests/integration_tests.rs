//! Integration tests for promptgrid-core, wired to the reference adapters.

use promptgrid_adapters::{EchoModel, ExactMatchScorer, SimilarityScorer, SimulatedModel};
use promptgrid_core::{application::Scorer, prelude::*};

fn reference_candidates() -> CandidateSet {
    CandidateSet::new()
        .with(PromptCandidate::new("Summarize: {input}").with_param("temperature", 0.2))
        .with(PromptCandidate::new("Explain in detail: {input}").with_param("temperature", 0.7))
        .with(PromptCandidate::new("Answer in one word: {input}").with_param("temperature", 0.0))
}

fn reference_service() -> OptimizerService {
    OptimizerService::new(Box::new(SimulatedModel::new()), Box::new(SimilarityScorer::new()))
}

#[test]
fn summary_dataset_selects_summarize() {
    let dataset = Dataset::from_pairs([("Data A", "short summary"), ("Data B", "short summary")]);

    let selection = reference_service()
        .best(&reference_candidates(), &dataset)
        .unwrap();

    assert_eq!(
        selection.candidate().unwrap().template().as_str(),
        "Summarize: {input}"
    );
    assert!(selection.score() > 0.5);
    assert_eq!(selection.score(), 1.0);
}

#[test]
fn mixed_dataset_ranks_explain_first() {
    let dataset = Dataset::from_pairs([
        (
            "This is a long paragraph that needs to be summarized.",
            "short summary",
        ),
        ("Why is the sky blue?", "detailed explanation"),
        ("Hello world example", "Hello"),
    ]);

    let ranked = reference_service()
        .rank(&reference_candidates(), &dataset)
        .unwrap();

    assert_eq!(ranked.len(), 3);
    assert_eq!(ranked[0].candidate.template().as_str(), "Explain in detail: {input}");
    assert!(ranked.windows(2).all(|w| w[0].mean_score >= w[1].mean_score));
    // each candidate matches exactly one example, so every mean is at least a third
    assert!(ranked.iter().all(|s| s.mean_score >= 1.0 / 3.0));
    assert!(ranked[0].mean_score > 0.5);
}

#[test]
fn one_word_answer_scores_on_matching_example() {
    let candidates = CandidateSet::new().with(PromptCandidate::new("Answer in one word: {input}"));
    let dataset = Dataset::from_pairs([("Paris is the capital", "Paris")]);

    let eval = evaluate(&candidates, &dataset, &SimulatedModel::new(), &ExactMatchScorer::new())
        .unwrap();
    assert_eq!(eval.scores()[0].mean_score, 1.0);
}

#[test]
fn echo_model_rewards_templates_closest_to_expected() {
    let candidates = CandidateSet::new()
        .with(PromptCandidate::new("Please kindly consider: {input}"))
        .with(PromptCandidate::new("{input}!"));
    let dataset = Dataset::from_pairs([("hello", "hello!")]);

    let selection = best(&candidates, &dataset, &EchoModel::new(), &SimilarityScorer::new()).unwrap();
    assert_eq!(selection.index(), Some(1));
    assert_eq!(selection.score(), 1.0);
}

#[test]
fn similarity_is_symmetric_and_bounded() {
    let scorer = SimilarityScorer::new();
    let pairs = [
        ("short summary", "detailed explanation"),
        ("Paris", "Answer in one word: Capital of France?"),
        ("", "something"),
        ("abc", "abc"),
    ];

    for (a, b) in pairs {
        let ab = scorer.score(a, b).unwrap();
        let ba = scorer.score(b, a).unwrap();
        assert_eq!(ab, ba, "asymmetric for {a:?} / {b:?}");
        assert!((0.0..=1.0).contains(&ab));
    }
}

#[test]
fn broken_candidate_stops_the_run() {
    let candidates = reference_candidates().with(PromptCandidate::new("Summarize: {text}"));
    let dataset = Dataset::from_pairs([("Data A", "short summary")]);

    let err = reference_service().best(&candidates, &dataset).unwrap_err();
    assert!(err.to_string().contains("#3"));
    assert!(!err.suggestions().is_empty());
}

#[test]
fn empty_inputs_are_not_errors() {
    let service = reference_service();

    let none = service
        .best(&CandidateSet::new(), &Dataset::from_pairs([("a", "b")]))
        .unwrap();
    assert!(none.is_none());

    let zeros = service.evaluate(&reference_candidates(), &Dataset::new()).unwrap();
    assert!(zeros.iter().all(|s| s.mean_score == 0.0));
    assert_eq!(zeros.best().index(), Some(0));
}

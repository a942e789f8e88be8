//! Keyword-rule model used by the demo suite.
//!
//! | Prompt contains        | Output                                       |
//! |------------------------|----------------------------------------------|
//! | `Summarize`            | `short summary`                              |
//! | `Explain`              | `detailed explanation`                       |
//! | `Answer in one word`   | first word after the marker (`:` dropped)    |
//! | anything else          | the prompt itself                            |
//!
//! Rules are checked top to bottom. Params are ignored.

use promptgrid_core::{
    application::{Generator, PortError},
    domain::CandidateParams,
};
use tracing::trace;

const SUMMARIZE: &str = "Summarize";
const EXPLAIN: &str = "Explain";
const ONE_WORD: &str = "Answer in one word";

/// Deterministic stand-in for a language model.
#[derive(Debug, Clone, Copy, Default)]
pub struct SimulatedModel;

impl SimulatedModel {
    pub fn new() -> Self {
        Self
    }

    /// Apply the keyword rules to a prompt.
    pub fn respond(prompt: &str) -> String {
        if prompt.contains(SUMMARIZE) {
            "short summary".to_string()
        } else if prompt.contains(EXPLAIN) {
            "detailed explanation".to_string()
        } else if let Some(at) = prompt.find(ONE_WORD) {
            let rest = &prompt[at + ONE_WORD.len()..];
            let rest = rest.trim_start();
            let rest = rest.strip_prefix(':').unwrap_or(rest);
            rest.split_whitespace().next().unwrap_or_default().to_string()
        } else {
            prompt.to_string()
        }
    }
}

impl Generator for SimulatedModel {
    fn generate(&self, prompt: &str, _params: &CandidateParams) -> Result<String, PortError> {
        let output = Self::respond(prompt);
        trace!(%prompt, %output, "simulated generation");
        Ok(output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summarize_rule() {
        assert_eq!(SimulatedModel::respond("Summarize: Data A"), "short summary");
    }

    #[test]
    fn explain_rule() {
        assert_eq!(
            SimulatedModel::respond("Explain in detail: Why is the sky blue?"),
            "detailed explanation"
        );
    }

    #[test]
    fn one_word_takes_first_word_of_input() {
        assert_eq!(
            SimulatedModel::respond("Answer in one word: Capital of France?"),
            "Capital"
        );
        assert_eq!(SimulatedModel::respond("Answer in one word:Paris rocks"), "Paris");
    }

    #[test]
    fn one_word_with_nothing_after_marker_is_empty() {
        assert_eq!(SimulatedModel::respond("Answer in one word: "), "");
        assert_eq!(SimulatedModel::respond("Answer in one word"), "");
    }

    #[test]
    fn unknown_prompt_is_echoed() {
        assert_eq!(SimulatedModel::respond("Translate: hola"), "Translate: hola");
    }

    #[test]
    fn earlier_rules_win() {
        assert_eq!(
            SimulatedModel::respond("Answer in one word: Summarize this"),
            "short summary"
        );
    }

    #[test]
    fn params_do_not_change_output() {
        let mut params = CandidateParams::new();
        params.insert("temperature".into(), serde_json::json!(1.5));
        let model = SimulatedModel::new();
        assert_eq!(
            model.generate("Summarize: x", &params).unwrap(),
            model.generate("Summarize: x", &CandidateParams::new()).unwrap()
        );
    }
}

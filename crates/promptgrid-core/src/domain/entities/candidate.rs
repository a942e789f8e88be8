//! Prompt candidates and the ordered candidate store.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::{entities::template::PromptTemplate, error::DomainError};

/// Auxiliary parameters attached to a candidate.
///
/// Opaque to the evaluator: handed to the generator exactly as given.
pub type CandidateParams = BTreeMap<String, serde_json::Value>;

/// One unit under evaluation: a template plus its parameters.
///
/// Immutable once built; the `with_*` methods consume and return a new value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PromptCandidate {
    template: PromptTemplate,

    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    params: CandidateParams,

    /// Display name; purely cosmetic.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    label: Option<String>,
}

impl PromptCandidate {
    /// Create a candidate without checking the template.
    pub fn new(template: impl Into<PromptTemplate>) -> Self {
        Self {
            template: template.into(),
            params: CandidateParams::new(),
            label: None,
        }
    }

    /// Create a candidate, rejecting a template without a usable `{input}`.
    pub fn try_new(template: impl Into<PromptTemplate>) -> Result<Self, DomainError> {
        let candidate = Self::new(template);
        candidate.template.validate()?;
        Ok(candidate)
    }

    pub fn with_param(mut self, key: impl Into<String>, value: impl Into<serde_json::Value>) -> Self {
        self.params.insert(key.into(), value.into());
        self
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn template(&self) -> &PromptTemplate {
        &self.template
    }

    pub fn params(&self) -> &CandidateParams {
        &self.params
    }

    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    /// Label if present, template text otherwise.
    pub fn display_name(&self) -> &str {
        self.label.as_deref().unwrap_or(self.template.as_str())
    }

    /// Format the prompt for one dataset input.
    pub fn render(&self, input: &str) -> Result<String, DomainError> {
        self.template.render(input)
    }
}

impl fmt::Display for PromptCandidate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Ordered collection of candidates.
///
/// A candidate's identity is its index here; two candidates with identical
/// templates are still distinct entries.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CandidateSet {
    #[serde(default)]
    candidates: Vec<PromptCandidate>,
}

impl CandidateSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a candidate; its index is the previous length.
    pub fn with(mut self, candidate: PromptCandidate) -> Self {
        self.candidates.push(candidate);
        self
    }

    pub fn get(&self, index: usize) -> Option<&PromptCandidate> {
        self.candidates.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, PromptCandidate> {
        self.candidates.iter()
    }

    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }

    /// Every template problem in the set, in candidate order.
    pub fn problems(&self) -> Vec<DomainError> {
        self.candidates
            .iter()
            .enumerate()
            .filter_map(|(index, candidate)| {
                candidate
                    .template()
                    .validate()
                    .err()
                    .map(|reason| DomainError::substitution(index, candidate, reason))
            })
            .collect()
    }
}

impl From<Vec<PromptCandidate>> for CandidateSet {
    fn from(candidates: Vec<PromptCandidate>) -> Self {
        Self { candidates }
    }
}

impl FromIterator<PromptCandidate> for CandidateSet {
    fn from_iter<I: IntoIterator<Item = PromptCandidate>>(iter: I) -> Self {
        Self {
            candidates: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a CandidateSet {
    type Item = &'a PromptCandidate;
    type IntoIter = std::slice::Iter<'a, PromptCandidate>;

    fn into_iter(self) -> Self::IntoIter {
        self.candidates.iter()
    }
}

impl IntoIterator for CandidateSet {
    type Item = PromptCandidate;
    type IntoIter = std::vec::IntoIter<PromptCandidate>;

    fn into_iter(self) -> Self::IntoIter {
        self.candidates.into_iter()
    }
}

//! Prompt templates and `{input}` substitution.
//!
//! ## Substitution rules
//!
//! | Source text | Rendered as |
//! |-------------|-------------|
//! | `{input}`   | the dataset entry's input (every occurrence) |
//! | `{{`        | a literal `{` |
//! | `}}`        | a literal `}` |
//! | `{name}`    | error: unknown placeholder |
//! | lone `{` / `}` | error: malformed template |
//!
//! A template that never mentions `{input}` is rejected. Rendering never
//! falls back to echoing the template text.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::error::DomainError;

/// Name of the only placeholder a prompt template may contain.
pub const INPUT_PLACEHOLDER: &str = "input";

/// A prompt template containing the `{input}` placeholder.
///
/// Construction is unchecked so that templates can be loaded first and
/// reported on later; use [`PromptTemplate::validate`] or
/// `PromptCandidate::try_new` for eager checking.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PromptTemplate(String);

/// One parsed piece of a template.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Literal(String),
    Input,
}

impl PromptTemplate {
    /// Wrap template text without checking it.
    pub fn new(source: impl Into<String>) -> Self {
        Self(source.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Check the template accepts an input substitution.
    pub fn validate(&self) -> Result<(), DomainError> {
        self.segments().map(|_| ())
    }

    /// Substitute `input` at every `{input}` placeholder.
    pub fn render(&self, input: &str) -> Result<String, DomainError> {
        let segments = self.segments()?;
        let mut rendered = String::with_capacity(self.0.len() + input.len());

        for segment in &segments {
            match segment {
                Segment::Literal(text) => rendered.push_str(text),
                Segment::Input => rendered.push_str(input),
            }
        }

        Ok(rendered)
    }

    fn segments(&self) -> Result<Vec<Segment>, DomainError> {
        let mut segments = Vec::new();
        let mut literal = String::new();
        let mut chars = self.0.char_indices().peekable();

        while let Some((pos, c)) = chars.next() {
            match c {
                '{' if matches!(chars.peek(), Some((_, '{'))) => {
                    chars.next();
                    literal.push('{');
                }
                '{' => {
                    let mut field = String::new();
                    let mut closed = false;

                    for (_, c) in chars.by_ref() {
                        match c {
                            '}' => {
                                closed = true;
                                break;
                            }
                            '{' => return Err(self.malformed(format!("nested '{{' in field opened at byte {pos}"))),
                            other => field.push(other),
                        }
                    }

                    if !closed {
                        return Err(self.malformed(format!("unclosed '{{' at byte {pos}")));
                    }

                    if field != INPUT_PLACEHOLDER {
                        return Err(DomainError::UnknownPlaceholder {
                            template: self.0.clone(),
                            field,
                        });
                    }

                    if !literal.is_empty() {
                        segments.push(Segment::Literal(std::mem::take(&mut literal)));
                    }
                    segments.push(Segment::Input);
                }
                '}' if matches!(chars.peek(), Some((_, '}'))) => {
                    chars.next();
                    literal.push('}');
                }
                '}' => return Err(self.malformed(format!("single '}}' at byte {pos}"))),
                other => literal.push(other),
            }
        }

        if !literal.is_empty() {
            segments.push(Segment::Literal(literal));
        }

        if !segments.iter().any(|s| matches!(s, Segment::Input)) {
            return Err(DomainError::MissingPlaceholder {
                template: self.0.clone(),
            });
        }

        Ok(segments)
    }

    fn malformed(&self, reason: String) -> DomainError {
        DomainError::MalformedTemplate {
            template: self.0.clone(),
            reason,
        }
    }
}

impl fmt::Display for PromptTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for PromptTemplate {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for PromptTemplate {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

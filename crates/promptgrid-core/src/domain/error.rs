// ============================================================================
// domain/error.rs - TEMPLATE AND CANDIDATE ERRORS
// ============================================================================

use thiserror::Error;

use crate::domain::entities::candidate::PromptCandidate;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable (reported more than once by `validate` and the CLI)
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    // ========================================================================
    // Template Errors
    // ========================================================================
    #[error("template '{template}' has no {{input}} placeholder")]
    MissingPlaceholder { template: String },

    #[error("template '{template}' uses unknown placeholder '{{{field}}}'")]
    UnknownPlaceholder { template: String, field: String },

    #[error("template '{template}' is malformed: {reason}")]
    MalformedTemplate { template: String, reason: String },

    /// A candidate's template could not take the input substitution.
    #[error("candidate #{index} ('{template}') cannot be rendered: {source}")]
    TemplateSubstitution {
        index: usize,
        template: String,
        #[source]
        source: Box<DomainError>,
    },
}

impl DomainError {
    /// Tag a template error with the candidate it came from.
    pub fn substitution(index: usize, candidate: &PromptCandidate, reason: DomainError) -> Self {
        Self::TemplateSubstitution {
            index,
            template: candidate.template().to_string(),
            source: Box::new(reason),
        }
    }

    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::MissingPlaceholder { .. } => vec![
                "Every template needs an {input} placeholder".into(),
                "Example: \"Summarize: {input}\"".into(),
            ],
            Self::UnknownPlaceholder { field, .. } => vec![
                format!("'{{{}}}' is not a known placeholder", field),
                "Only {input} is substituted".into(),
                "Write {{ and }} for literal braces".into(),
            ],
            Self::MalformedTemplate { .. } => vec![
                "Check the template for unbalanced braces".into(),
                "Write {{ and }} for literal braces".into(),
            ],
            Self::TemplateSubstitution { index, source, .. } => {
                let mut suggestions = vec![format!("Fix candidate #{} in the candidates file", index)];
                suggestions.extend(source.suggestions());
                suggestions
            }
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::TemplateSubstitution { source, .. } => source.category(),
            Self::MissingPlaceholder { .. } | Self::UnknownPlaceholder { .. } => {
                ErrorCategory::Validation
            }
            Self::MalformedTemplate { .. } => ErrorCategory::Syntax,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// The template parses but has the wrong placeholders.
    Validation,
    /// The template does not parse.
    Syntax,
}

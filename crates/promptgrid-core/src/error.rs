//! Unified error handling for Promptgrid Core.
//!
//! This module provides a unified error type that wraps domain and application
//! errors, with rich context and user-actionable suggestions.

use thiserror::Error;

use crate::application::ApplicationError;
use crate::domain::DomainError;

/// Root error type for Promptgrid Core operations.
///
/// This enum wraps all possible errors that can occur when using promptgrid-core,
/// providing a unified interface for error handling.
#[derive(Debug, Error, Clone)]
pub enum PromptgridError {
    /// Errors from the domain layer (template problems).
    #[error("Template error: {0}")]
    Domain(#[from] DomainError),

    /// Errors from the application layer (ports, loading).
    #[error("{0}")]
    Application(#[from] ApplicationError),
}

impl PromptgridError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Domain(e) => e.suggestions(),
            Self::Application(e) => e.suggestions(),
        }
    }

    /// Get error category for display/styling purposes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Domain(e) => match e.category() {
                crate::domain::ErrorCategory::Validation => ErrorCategory::Validation,
                crate::domain::ErrorCategory::Syntax => ErrorCategory::Validation,
            },
            Self::Application(e) => e.category(),
        }
    }
}

/// Error categories for UI display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Bad template or unreadable input file.
    Validation,
    NotFound,
    /// A generator or scorer failed.
    External,
}

/// Convenient result type alias.
pub type PromptgridResult<T> = Result<T, PromptgridError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn template_errors_are_validation() {
        let err: PromptgridError = DomainError::MissingPlaceholder {
            template: "x".into(),
        }
        .into();
        assert_eq!(err.category(), ErrorCategory::Validation);
        assert!(err.to_string().starts_with("Template error:"));
    }

    #[test]
    fn missing_file_is_not_found() {
        let err: PromptgridError = ApplicationError::FileNotFound {
            path: PathBuf::from("nope.toml"),
        }
        .into();
        assert_eq!(err.category(), ErrorCategory::NotFound);
    }

    #[test]
    fn unreadable_files_are_validation() {
        for err in [
            ApplicationError::LoadFailed {
                path: PathBuf::from("c.toml"),
                reason: "missing field `template`".into(),
            },
            ApplicationError::UnsupportedFormat {
                path: PathBuf::from("c.yaml"),
            },
        ] {
            let err = PromptgridError::from(err);
            assert_eq!(err.category(), ErrorCategory::Validation);
            assert!(!err.suggestions().is_empty());
        }
    }

    #[test]
    fn port_failures_are_external() {
        let err: PromptgridError = ApplicationError::generation(0, "boom".into()).into();
        assert_eq!(err.category(), ErrorCategory::External);
        assert!(std::error::Error::source(&err).is_some());
    }
}

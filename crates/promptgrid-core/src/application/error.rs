//! Application layer errors.
//!
//! These errors represent failures in orchestration and in the injected
//! ports, not template problems. Template problems are `DomainError` from
//! `crate::domain`.

use std::error::Error as StdError;
use std::path::PathBuf;
use std::sync::Arc;

use thiserror::Error;

use crate::error::ErrorCategory;

/// Error raised by a port implementation, carried through unchanged.
pub type PortError = Box<dyn StdError + Send + Sync + 'static>;

/// Shared form of [`PortError`] so application errors stay `Clone`.
pub type SharedPortError = Arc<dyn StdError + Send + Sync + 'static>;

/// Errors that occur during application orchestration.
#[derive(Debug, Error, Clone)]
pub enum ApplicationError {
    /// The generator failed for a candidate. The original error is the source.
    #[error("Generation failed for candidate #{index}: {source}")]
    Generation {
        index: usize,
        #[source]
        source: SharedPortError,
    },

    /// The scorer failed for a candidate. The original error is the source.
    #[error("Scoring failed for candidate #{index}: {source}")]
    Scoring {
        index: usize,
        #[source]
        source: SharedPortError,
    },

    /// The scorer returned NaN or an infinity.
    #[error("Scorer returned a non-finite score ({score}) for candidate #{index}")]
    NonFiniteScore { index: usize, score: f64 },

    /// A candidates or dataset file does not exist.
    #[error("File not found: {path}")]
    FileNotFound { path: PathBuf },

    /// A candidates or dataset file could not be read or parsed.
    #[error("Failed to load {path}: {reason}")]
    LoadFailed { path: PathBuf, reason: String },

    /// The file extension does not name a known format.
    #[error("Unsupported file format for {path} (expected .toml or .json)")]
    UnsupportedFormat { path: PathBuf },
}

impl ApplicationError {
    pub fn generation(index: usize, source: PortError) -> Self {
        Self::Generation {
            index,
            source: Arc::from(source),
        }
    }

    pub fn scoring(index: usize, source: PortError) -> Self {
        Self::Scoring {
            index,
            source: Arc::from(source),
        }
    }

    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Generation { index, .. } => vec![
                format!("The model failed while running candidate #{}", index),
                "Check the generator's own error above".into(),
            ],
            Self::Scoring { .. } | Self::NonFiniteScore { .. } => vec![
                "The scorer must return a finite number for every example".into(),
                "Try: --scorer similarity".into(),
            ],
            Self::FileNotFound { path } => vec![
                format!("No such file: {}", path.display()),
                "Check the path passed to --candidates / --dataset".into(),
            ],
            Self::LoadFailed { path, .. } => vec![
                format!("Could not parse {}", path.display()),
                "Candidates files need [[candidates]] entries with a `template`".into(),
                "Dataset files need [[examples]] entries with `input` and `expected`".into(),
            ],
            Self::UnsupportedFormat { .. } => vec![
                "Use a .toml or .json file".into(),
            ],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Generation { .. } | Self::Scoring { .. } | Self::NonFiniteScore { .. } => {
                ErrorCategory::External
            }
            Self::FileNotFound { .. } => ErrorCategory::NotFound,
            Self::LoadFailed { .. } | Self::UnsupportedFormat { .. } => ErrorCategory::Validation,
        }
    }
}

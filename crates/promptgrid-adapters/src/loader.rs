//! Candidate and dataset file loading.
//!
//! Files are TOML or JSON, chosen by extension.
//!
//! # Candidates file
//!
//! ```toml
//! [[candidates]]
//! template = "Summarize: {input}"
//! label    = "summary"            # optional
//!
//! [candidates.params]             # optional, any values
//! temperature = 0.2
//! ```
//!
//! # Dataset file
//!
//! ```toml
//! [[examples]]
//! input    = "Why is the sky blue?"
//! expected = "detailed explanation"
//! ```
//!
//! Loading only parses. Templates are checked by the evaluator (or
//! [`DomainValidator`](promptgrid_core::domain::DomainValidator)), so a
//! file with a broken template still loads and the error names the
//! candidate index.

use std::{
    fs,
    path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize, de::DeserializeOwned};
use tracing::{debug, instrument};

use promptgrid_core::{
    application::ApplicationError,
    domain::{CandidateSet, Dataset, Example, PromptCandidate},
};

/// Supported on-disk formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileFormat {
    Toml,
    Json,
}

impl FileFormat {
    /// Detect the format from a path's extension (case-insensitive).
    pub fn from_path(path: &Path) -> Result<Self, ApplicationError> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase);

        match ext.as_deref() {
            Some("toml") => Ok(Self::Toml),
            Some("json") => Ok(Self::Json),
            _ => Err(ApplicationError::UnsupportedFormat {
                path: path.to_path_buf(),
            }),
        }
    }
}

// ── File layouts ──────────────────────────────────────────────────────────────

/// Top-level layout of a candidates file.
#[derive(Debug, Deserialize, Serialize)]
pub struct CandidatesFile {
    #[serde(default)]
    pub candidates: Vec<PromptCandidate>,
}

/// Top-level layout of a dataset file.
#[derive(Debug, Deserialize, Serialize)]
pub struct DatasetFile {
    #[serde(default)]
    pub examples: Vec<Example>,
}

// ── Loading ───────────────────────────────────────────────────────────────────

/// Load a candidate set from a `.toml` or `.json` file.
///
/// # Errors
///
/// - [`ApplicationError::FileNotFound`] if `path` does not exist
/// - [`ApplicationError::UnsupportedFormat`] for any other extension
/// - [`ApplicationError::LoadFailed`] if the file cannot be read or parsed
#[instrument(fields(path = %path.display()))]
pub fn load_candidates(path: &Path) -> Result<CandidateSet, ApplicationError> {
    let (raw, format) = read_file(path)?;
    let candidates = parse_candidates(&raw, format).map_err(|reason| load_failed(path, reason))?;
    debug!(count = candidates.len(), "loaded candidates");
    Ok(candidates)
}

/// Load a dataset from a `.toml` or `.json` file.
///
/// Errors as for [`load_candidates`].
#[instrument(fields(path = %path.display()))]
pub fn load_dataset(path: &Path) -> Result<Dataset, ApplicationError> {
    let (raw, format) = read_file(path)?;
    let dataset = parse_dataset(&raw, format).map_err(|reason| load_failed(path, reason))?;
    debug!(count = dataset.len(), "loaded dataset");
    Ok(dataset)
}

/// Parse candidates from a string in the given format.
pub fn parse_candidates(raw: &str, format: FileFormat) -> Result<CandidateSet, String> {
    parse::<CandidatesFile>(raw, format).map(|f| CandidateSet::from(f.candidates))
}

/// Parse a dataset from a string in the given format.
pub fn parse_dataset(raw: &str, format: FileFormat) -> Result<Dataset, String> {
    parse::<DatasetFile>(raw, format).map(|f| Dataset::from(f.examples))
}

/// Raw contents plus the format implied by the extension.
fn read_file(path: &Path) -> Result<(String, FileFormat), ApplicationError> {
    if !path.exists() {
        return Err(ApplicationError::FileNotFound {
            path: path.to_path_buf(),
        });
    }

    let format = FileFormat::from_path(path)?;
    let raw = fs::read_to_string(path).map_err(|e| load_failed(path, e.to_string()))?;
    Ok((raw, format))
}

fn parse<T: DeserializeOwned>(raw: &str, format: FileFormat) -> Result<T, String> {
    match format {
        FileFormat::Toml => toml::from_str(raw).map_err(|e| e.to_string()),
        FileFormat::Json => serde_json::from_str(raw).map_err(|e| e.to_string()),
    }
}

fn load_failed(path: &Path, reason: String) -> ApplicationError {
    ApplicationError::LoadFailed {
        path: PathBuf::from(path),
        reason: reason.trim().to_string(),
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write(dir: &TempDir, name: &str, content: &str) -> PathBuf {
        let path = dir.path().join(name);
        fs::write(&path, content).unwrap();
        path
    }

    const CANDIDATES_TOML: &str = r#"
[[candidates]]
template = "Summarize: {input}"
label = "summary"

[candidates.params]
temperature = 0.2

[[candidates]]
template = "Explain in detail: {input}"
"#;

    #[test]
    fn loads_toml_candidates_in_order() {
        let dir = TempDir::new().unwrap();
        let path = write(&dir, "candidates.toml", CANDIDATES_TOML);

        let set = load_candidates(&path).unwrap();
        assert_eq!(set.len(), 2);

        let first = set.get(0).unwrap();
        assert_eq!(first.template().as_str(), "Summarize: {input}");
        assert_eq!(first.label(), Some("summary"));
        assert_eq!(first.params().get("temperature"), Some(&serde_json::json!(0.2)));

        let second = set.get(1).unwrap();
        assert!(second.params().is_empty());
        assert_eq!(second.label(), None);
    }

    #[test]
    fn loads_json_dataset() {
        let dir = TempDir::new().unwrap();
        let path = write(
            &dir,
            "dataset.JSON",
            r#"{"examples": [{"input": "Capital of France?", "expected": "Paris"}]}"#,
        );

        let dataset = load_dataset(&path).unwrap();
        assert_eq!(dataset.len(), 1);
        assert_eq!(dataset.iter().next().unwrap().expected, "Paris");
    }

    #[test]
    fn empty_file_is_empty_collection() {
        let dir = TempDir::new().unwrap();
        let path = write(&dir, "empty.toml", "");
        assert!(load_dataset(&path).unwrap().is_empty());
    }

    #[test]
    fn missing_file_is_not_found() {
        let err = load_candidates(Path::new("/absolutely/does/not/exist.toml")).unwrap_err();
        assert!(matches!(err, ApplicationError::FileNotFound { .. }));
    }

    #[test]
    fn unknown_extension_is_rejected() {
        let dir = TempDir::new().unwrap();
        let path = write(&dir, "candidates.yaml", "candidates: []");
        assert!(matches!(
            load_candidates(&path),
            Err(ApplicationError::UnsupportedFormat { .. })
        ));
    }

    #[test]
    fn missing_field_is_load_failure() {
        let dir = TempDir::new().unwrap();
        let path = write(&dir, "dataset.toml", "[[examples]]\ninput = \"x\"\n");
        match load_dataset(&path) {
            Err(ApplicationError::LoadFailed { reason, .. }) => {
                assert!(reason.contains("expected"), "reason: {reason}");
            }
            other => panic!("expected LoadFailed, got {other:?}"),
        }
    }

    #[test]
    fn broken_template_still_loads() {
        let set = parse_candidates("[[candidates]]\ntemplate = \"no placeholder\"\n", FileFormat::Toml)
            .unwrap();
        assert_eq!(set.len(), 1);
        assert_eq!(set.problems().len(), 1);
    }

    #[test]
    fn dataset_parses_from_either_format() {
        let toml = parse_dataset("[[examples]]\ninput = \"a\"\nexpected = \"b\"\n", FileFormat::Toml)
            .unwrap();
        let json = parse_dataset(r#"{"examples": [{"input": "a", "expected": "b"}]}"#, FileFormat::Json)
            .unwrap();
        assert_eq!(toml, json);
        assert!(parse_dataset("{", FileFormat::Json).is_err());
    }

    #[test]
    fn format_detection() {
        assert_eq!(FileFormat::from_path(Path::new("a.toml")).unwrap(), FileFormat::Toml);
        assert_eq!(FileFormat::from_path(Path::new("a.Json")).unwrap(), FileFormat::Json);
        assert!(FileFormat::from_path(Path::new("a")).is_err());
    }
}

//! Tests for error handling, suggestions, and exit codes.

use std::fs;
use std::path::PathBuf;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const DATASET: &str = "[[examples]]\ninput = \"Data A\"\nexpected = \"short summary\"\n";

fn promptgrid() -> Command {
    let mut cmd = Command::cargo_bin("promptgrid").unwrap();
    cmd.env_remove("RUST_LOG").env("NO_COLOR", "1");
    cmd
}

fn write(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).unwrap();
    path
}

#[test]
fn test_error_missing_candidates_file() {
    let dir = TempDir::new().unwrap();
    let dataset = write(&dir, "dataset.toml", DATASET);

    promptgrid()
        .arg("run")
        .arg("--candidates")
        .arg(dir.path().join("nope.toml"))
        .arg("--dataset")
        .arg(&dataset)
        .assert()
        .failure()
        .code(3)
        .stderr(predicate::str::contains("nope.toml"))
        .stderr(predicate::str::contains("Suggestions:"));
}

#[test]
fn test_error_template_without_placeholder() {
    let dir = TempDir::new().unwrap();
    let candidates = write(
        &dir,
        "candidates.toml",
        "[[candidates]]\ntemplate = \"Summarize: {input}\"\n\n[[candidates]]\ntemplate = \"Summarize\"\n",
    );
    let dataset = write(&dir, "dataset.toml", DATASET);

    promptgrid()
        .arg("run")
        .arg("--candidates")
        .arg(&candidates)
        .arg("--dataset")
        .arg(&dataset)
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("#1"))
        .stdout(predicate::str::contains("Best").not());
}

#[test]
fn test_validate_reports_every_bad_template() {
    let dir = TempDir::new().unwrap();
    let candidates = write(
        &dir,
        "candidates.toml",
        "[[candidates]]\ntemplate = \"Summarize\"\n\n[[candidates]]\ntemplate = \"Q: {question}\"\n",
    );

    promptgrid()
        .arg("validate")
        .arg("--candidates")
        .arg(&candidates)
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("2 invalid candidate template(s)"))
        .stderr(predicate::str::contains("{input} placeholder"));
}

#[test]
fn test_error_unsupported_extension() {
    let dir = TempDir::new().unwrap();
    let candidates = write(&dir, "candidates.yaml", "candidates: []\n");
    let dataset = write(&dir, "dataset.toml", DATASET);

    promptgrid()
        .arg("run")
        .arg("--candidates")
        .arg(&candidates)
        .arg("--dataset")
        .arg(&dataset)
        .assert()
        .failure()
        .code(2);
}

#[test]
fn test_error_malformed_dataset() {
    let dir = TempDir::new().unwrap();
    let candidates = write(&dir, "candidates.toml", "[[candidates]]\ntemplate = \"{input}\"\n");
    let dataset = write(&dir, "dataset.json", "{\"examples\": [{\"input\": \"x\"}]}");

    promptgrid()
        .arg("run")
        .arg("--candidates")
        .arg(&candidates)
        .arg("--dataset")
        .arg(&dataset)
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("dataset.json"));
}

#[test]
fn test_error_missing_explicit_config() {
    let dir = TempDir::new().unwrap();

    promptgrid()
        .arg("--config")
        .arg(dir.path().join("missing.toml"))
        .arg("demo")
        .assert()
        .failure()
        .code(4)
        .stderr(predicate::str::contains("Configuration error"));
}

#[test]
fn test_error_invalid_config_value() {
    let dir = TempDir::new().unwrap();
    let config = write(&dir, "cfg.toml", "[defaults]\nmodel = \"gpt\"\n");

    promptgrid()
        .arg("--config")
        .arg(&config)
        .arg("demo")
        .assert()
        .failure()
        .code(4);
}

#[test]
fn test_error_unknown_config_key() {
    promptgrid()
        .args(["config", "get", "bad.key"])
        .assert()
        .failure()
        .code(4)
        .stderr(predicate::str::contains("Unknown config key"));
}

#[test]
fn test_error_init_refuses_overwrite() {
    let dir = TempDir::new().unwrap();
    let config = write(&dir, "cfg.toml", "# mine\n");

    promptgrid()
        .arg("--config")
        .arg(&config)
        .arg("init")
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("--force"));
    assert_eq!(fs::read_to_string(&config).unwrap(), "# mine\n");

    promptgrid()
        .arg("--config")
        .arg(&config)
        .args(["init", "--force"])
        .assert()
        .success();
    assert!(fs::read_to_string(&config).unwrap().contains("[defaults]"));
}

#[test]
fn test_error_bad_flag_value() {
    promptgrid()
        .args(["demo", "--model", "gpt-9"])
        .assert()
        .failure()
        .code(2);
}

#[test]
fn test_verbose_shows_cause_chain() {
    let dir = TempDir::new().unwrap();

    promptgrid()
        .args(["-v", "--config"])
        .arg(dir.path().join("missing.toml"))
        .arg("demo")
        .assert()
        .failure()
        .stderr(predicate::str::contains("--verbose for more details").not());
}

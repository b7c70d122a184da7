//! Integration tests for the `jarl` binary.
//!
//! Only non-interactive paths are exercised: argument validation,
//! completions, and the `--list` mode against a mock index.

use std::path::PathBuf;
use std::process::{Command, Output};

const SEARCH_PAGE: &str = include_str!("fixtures/search.html");
const ARTIFACT_PAGE: &str = include_str!("fixtures/artifact.html");

/// Empty config file so a developer's `~/.jarl.toml` never leaks in.
fn empty_config(dir: &tempfile::TempDir) -> PathBuf {
    let path = dir.path().join("jarl.toml");
    std::fs::write(&path, "").expect("Failed to write config");
    path
}

fn jarl(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_jarl"))
        .args(args)
        .env_remove("JARL_BASE_URL")
        .env_remove("JARL_TOOL")
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to run jarl")
}

#[test]
fn test_requires_search_term() {
    let output = jarl(&[]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("QUERY"), "stderr: {stderr}");
}

#[test]
fn test_help_lists_options() {
    let output = jarl(&["--help"]);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    for flag in ["--tool", "--page", "--list", "--no-copy", "completion"] {
        assert!(stdout.contains(flag), "missing {flag} in help");
    }
}

#[test]
fn test_unknown_tool_is_rejected() {
    let output = jarl(&["reactor", "--tool", "bazel"]);
    assert!(!output.status.success());
}

#[test]
fn test_bash_completion() {
    let output = jarl(&["completion", "bash"]);
    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).contains("_jarl"));
}

#[test]
fn test_list_search_results_as_json() {
    let dir = tempfile::tempdir().unwrap();
    let config = empty_config(&dir);
    let mut server = mockito::Server::new();
    let _mock = server
        .mock("GET", "/search")
        .match_query(mockito::Matcher::Any)
        .with_status(200)
        .with_body(SEARCH_PAGE)
        .create();

    let output = jarl(&[
        "reactor-core",
        "--list",
        "--json",
        "--base-url",
        &server.url(),
        "--config",
        config.to_str().unwrap(),
    ]);
    assert!(output.status.success(), "{output:?}");

    let stdout = String::from_utf8_lossy(&output.stdout);
    let json_start = stdout.find('{').expect("JSON in output");
    let value: serde_json::Value = serde_json::from_str(&stdout[json_start..]).unwrap();
    assert_eq!(value["total"], 263);
    assert_eq!(value["artifacts"].as_array().unwrap().len(), 3);
    assert_eq!(value["artifacts"][0]["id"], "reactor-core");
}

#[test]
fn test_list_versions_of_artifact() {
    let dir = tempfile::tempdir().unwrap();
    let config = empty_config(&dir);
    let mut server = mockito::Server::new();
    let _mock = server
        .mock("GET", "/artifact/io.projectreactor/reactor-core")
        .with_status(200)
        .with_body(ARTIFACT_PAGE)
        .create();

    let output = jarl(&[
        "--artifact",
        "io.projectreactor:reactor-core",
        "--list",
        "--base-url",
        &server.url(),
        "--config",
        config.to_str().unwrap(),
    ]);
    assert!(output.status.success(), "{output:?}");

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Apache 2.0"));
    assert!(stdout.contains("3.2.12.RELEASE"));
    assert!(stdout.contains("2.0.0.RC1"));
}

#[test]
fn test_missing_artifact_fails_with_message() {
    let dir = tempfile::tempdir().unwrap();
    let config = empty_config(&dir);
    let mut server = mockito::Server::new();
    let _mock = server
        .mock("GET", "/artifact/com.example/nope")
        .with_status(404)
        .create();

    let output = jarl(&[
        "--artifact",
        "com.example:nope",
        "--list",
        "--base-url",
        &server.url(),
        "--config",
        config.to_str().unwrap(),
    ]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("'com.example:nope' was not found"), "stderr: {stderr}");
}

#[test]
fn test_missing_explicit_config_is_an_error() {
    let output = jarl(&["x", "--list", "--config", "/nonexistent/jarl.toml"]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("configuration"), "stderr: {stderr}");
}

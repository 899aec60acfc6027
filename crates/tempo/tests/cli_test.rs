//! Integration tests for the `tempo` CLI binary.
//!
//! These tests validate argument parsing, help output, shell completions,
//! and error handling — all without requiring a live server.
#![allow(clippy::unwrap_used)]

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;

// ── Helpers ─────────────────────────────────────────────────────────

/// Build a [`Command`] for the `tempo` binary with env isolation.
///
/// Clears all `TEMPO_*` env vars and points config directories at a
/// nonexistent path so tests never touch the user's real configuration.
fn tempo_cmd() -> assert_cmd::Command {
    let mut cmd = cargo_bin_cmd!("tempo");
    cmd.env("HOME", "/tmp/tempo-cli-test-nonexistent")
        .env("XDG_CONFIG_HOME", "/tmp/tempo-cli-test-nonexistent")
        .env_remove("TEMPO_PROFILE")
        .env_remove("TEMPO_SERVER")
        .env_remove("TEMPO_ORG")
        .env_remove("TEMPO_TOKEN")
        .env_remove("TEMPO_OUTPUT")
        .env_remove("TEMPO_INSECURE")
        .env_remove("TEMPO_TIMEOUT")
        .env_remove("TEMPO_EMAIL")
        .env_remove("TEMPO_PASSWORD");
    cmd
}

/// Concatenate stdout + stderr from a command output for flexible matching.
fn combined_output(output: &std::process::Output) -> String {
    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);
    format!("{stdout}{stderr}")
}

// ── Basic invocation ────────────────────────────────────────────────

#[test]
fn test_no_args_shows_help() {
    let output = tempo_cmd().output().unwrap();
    assert_eq!(output.status.code(), Some(2), "Expected exit code 2");
    let text = combined_output(&output);
    assert!(text.contains("Usage"), "Expected 'Usage' in output:\n{text}");
}

#[test]
fn test_help_flag() {
    tempo_cmd().arg("--help").assert().success().stdout(
        predicate::str::contains("projects")
            .and(predicate::str::contains("timer"))
            .and(predicate::str::contains("entries"))
            .and(predicate::str::contains("clients")),
    );
}

#[test]
fn test_version_flag() {
    tempo_cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("tempo"));
}

// ── Shell completions ───────────────────────────────────────────────

#[test]
fn test_completions_bash() {
    tempo_cmd()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty().not());
}

#[test]
fn test_completions_zsh() {
    tempo_cmd()
        .args(["completions", "zsh"])
        .assert()
        .success()
        .stdout(predicate::str::contains("#compdef"));
}

#[test]
fn test_completions_fish() {
    tempo_cmd()
        .args(["completions", "fish"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty().not());
}

// ── Error cases ─────────────────────────────────────────────────────

#[test]
fn test_invalid_subcommand() {
    let output = tempo_cmd().arg("foobar").output().unwrap();
    assert!(
        !output.status.success(),
        "Expected failure for invalid subcommand"
    );
    let text = combined_output(&output);
    assert!(
        text.contains("invalid") || text.contains("unrecognized") || text.contains("foobar"),
        "Expected error mentioning invalid subcommand:\n{text}"
    );
}

#[test]
fn test_projects_list_no_config() {
    tempo_cmd()
        .args(["projects", "list"])
        .assert()
        .failure()
        .stderr(
            predicate::str::contains("config")
                .or(predicate::str::contains("Configuration"))
                .or(predicate::str::contains("server"))
                .or(predicate::str::contains("profile")),
        );
}

#[test]
fn test_config_show_no_config() {
    // `config show` uses load_config_or_default() so it succeeds even
    // when no config file exists — it just renders the default config.
    tempo_cmd().args(["config", "show"]).assert().success();
}

#[test]
fn test_config_path_prints_a_path() {
    tempo_cmd()
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains("config.toml"));
}

#[test]
fn test_invalid_output_format() {
    let output = tempo_cmd()
        .args(["--output", "invalid", "projects", "list"])
        .output()
        .unwrap();
    assert!(
        !output.status.success(),
        "Expected failure for invalid output format"
    );
    let text = combined_output(&output);
    assert!(
        text.contains("invalid")
            || text.contains("possible values")
            || text.contains("valid value"),
        "Expected error about valid output formats:\n{text}"
    );
}

#[test]
fn test_global_flags_parsing() {
    // All flags should parse correctly — the failure should be about
    // missing server config, not about argument parsing.
    tempo_cmd()
        .args([
            "--output",
            "json",
            "--verbose",
            "--insecure",
            "--timeout",
            "60",
            "projects",
            "list",
        ])
        .assert()
        .failure()
        .stderr(
            predicate::str::contains("config")
                .or(predicate::str::contains("Configuration"))
                .or(predicate::str::contains("server"))
                .or(predicate::str::contains("profile")),
        );
}

#[test]
fn test_server_without_token_reports_credentials() {
    tempo_cmd()
        .args(["--server", "https://tempo.example.com", "projects", "list"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("credentials"));
}

// ── Subcommand help discovery ───────────────────────────────────────

#[test]
fn test_projects_subcommands_exist() {
    tempo_cmd()
        .args(["projects", "--help"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("list")
                .and(predicate::str::contains("get"))
                .and(predicate::str::contains("create"))
                .and(predicate::str::contains("archive"))
                .and(predicate::str::contains("delete")),
        );
}

#[test]
fn test_timer_subcommands_exist() {
    tempo_cmd()
        .args(["timer", "--help"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("status")
                .and(predicate::str::contains("start"))
                .and(predicate::str::contains("stop")),
        );
}

#[test]
fn test_entries_subcommands_exist() {
    tempo_cmd()
        .args(["entries", "--help"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("list")
                .and(predicate::str::contains("bulk-update"))
                .and(predicate::str::contains("bulk-delete"))
                .and(predicate::str::contains("pickers")),
        );
}

#[test]
fn test_org_subcommands_exist() {
    tempo_cmd()
        .args(["org", "--help"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("switch")
                .and(predicate::str::contains("members"))
                .and(predicate::str::contains("invite")),
        );
}

#[test]
fn test_config_subcommands_exist() {
    tempo_cmd()
        .args(["config", "--help"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("init")
                .and(predicate::str::contains("show"))
                .and(predicate::str::contains("profiles"))
                .and(predicate::str::contains("set-token")),
        );
}

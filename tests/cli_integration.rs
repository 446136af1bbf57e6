//! Integration tests for the gitsim binary.
//!
//! These tests exercise the full CLI: argument parsing, config loading,
//! and transcript output.

use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// Get a command for running gitsim with no ambient config.
fn gitsim(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("gitsim").unwrap();
    cmd.env("HOME", home.path())
        .env("XDG_CONFIG_HOME", home.path().join("xdg"))
        .env_remove("GITSIM_CONFIG")
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn version_flag_works() {
    let home = TempDir::new().unwrap();
    gitsim(&home)
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("gitsim"));
}

#[test]
fn run_prints_transcript() {
    let home = TempDir::new().unwrap();
    gitsim(&home)
        .args(["run", "git init", "git add .", "git status"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Initialized empty Git repository in .git/",
        ))
        .stdout(predicate::str::contains("Added 1 file(s) to staging area"))
        .stdout(predicate::str::contains("Changes to be committed:\n  added: README.md"));
}

#[test]
fn simulated_errors_go_to_stderr() {
    let home = TempDir::new().unwrap();
    gitsim(&home)
        .args(["-q", "run", "git status", "help"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("fatal: not a git repository"));
}

#[test]
fn run_reads_script_file_and_dumps_json() {
    let home = TempDir::new().unwrap();
    let script = home.path().join("lesson.txt");
    fs::write(&script, "# a lesson\ngit init\n\ngit checkout -b feature\n").unwrap();

    gitsim(&home)
        .args(["-q", "run", "--json", "--file"])
        .arg(&script)
        .assert()
        .success()
        .stdout(predicate::str::contains("\"current_branch\": \"feature\""));
}

#[test]
fn missing_script_fails() {
    let home = TempDir::new().unwrap();
    gitsim(&home)
        .args(["run", "--file", "nope.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read script"));
}

#[test]
fn config_file_changes_default_branch() {
    let home = TempDir::new().unwrap();
    let config = home.path().join("gitsim.toml");
    fs::write(
        &config,
        "[repository]\ndefault_branch = \"trunk\"\n\n[session]\ndeterministic_ids = true\n",
    )
    .unwrap();

    gitsim(&home)
        .arg("--config")
        .arg(&config)
        .args(["run", "git init", "git add .", "git commit -m one", "git branch"])
        .assert()
        .success()
        .stdout(predicate::str::contains("* trunk"))
        .stdout(predicate::str::contains("[trunk ] one"));
}

#[test]
fn invalid_config_is_reported() {
    let home = TempDir::new().unwrap();
    let config = home.path().join("bad.toml");
    fs::write(&config, "[repository]\nunknown_key = 1\n").unwrap();

    gitsim(&home)
        .arg("--config")
        .arg(&config)
        .args(["run", "help"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load config"));
}

#[test]
fn config_show_prints_defaults() {
    let home = TempDir::new().unwrap();
    gitsim(&home)
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("default_branch = \"main\""))
        .stdout(predicate::str::contains("history_limit = 10"));
}

#[test]
fn config_path_lists_candidates() {
    let home = TempDir::new().unwrap();
    gitsim(&home)
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains(".gitsim/config.toml"));
}

#[test]
fn repl_reads_until_exit() {
    let home = TempDir::new().unwrap();
    gitsim(&home)
        .arg("repl")
        .write_stdin("git init\ngit branch\nexit\ngit status\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("user@computer:~$ "))
        .stdout(predicate::str::contains("user@repo:(main)$ "))
        .stdout(predicate::str::contains("* main"))
        .stdout(predicate::str::contains("nothing to commit").not());
}

#[test]
fn completion_generates_script() {
    let home = TempDir::new().unwrap();
    gitsim(&home)
        .args(["completion", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("gitsim"));
}

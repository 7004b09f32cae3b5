//! Binary-level tests for flows that need no network
//!
//! Account management, listing, and the demo plan all run fully offline.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn vp() -> Command {
    Command::cargo_bin("vp").expect("vp binary")
}

/// Write a config pointing storage at a temp database
fn write_config(dir: &TempDir) -> std::path::PathBuf {
    let config_path = dir.path().join("voiceplan.yml");
    let db_path = dir.path().join("planner.db");
    std::fs::write(
        &config_path,
        format!("storage:\n  db-path: {}\n", db_path.display()),
    )
    .expect("write config");
    config_path
}

#[test]
fn test_help_lists_subcommands() {
    vp().arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("plan"))
        .stdout(predicate::str::contains("transcribe"))
        .stdout(predicate::str::contains("register"));
}

#[test]
fn test_register_and_duplicate() {
    let dir = TempDir::new().unwrap();
    let config = write_config(&dir);

    vp().args(["--config", config.to_str().unwrap(), "register", "-u", "ada", "-p", "pw"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Registration successful"));

    vp().args(["--config", config.to_str().unwrap(), "register", "-u", "ada", "-p", "other"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Username already exists"));
}

#[test]
fn test_plans_empty_listing() {
    let dir = TempDir::new().unwrap();
    let config = write_config(&dir);

    vp().args(["--config", config.to_str().unwrap(), "register", "-u", "ada", "-p", "pw"])
        .assert()
        .success();

    vp().args(["--config", config.to_str().unwrap(), "plans", "-u", "ada", "-p", "pw"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No saved plans yet."));
}

#[test]
fn test_plans_rejects_bad_credentials() {
    let dir = TempDir::new().unwrap();
    let config = write_config(&dir);

    vp().args(["--config", config.to_str().unwrap(), "register", "-u", "ada", "-p", "pw"])
        .assert()
        .success();

    vp().args(["--config", config.to_str().unwrap(), "plans", "-u", "ada", "-p", "wrong"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid username or password"));
}

#[test]
fn test_demo_renders_plan_sections() {
    vp().arg("demo")
        .assert()
        .success()
        .stdout(predicate::str::contains("To-Do List"))
        .stdout(predicate::str::contains("Focus Blocks"))
        .stdout(predicate::str::contains("Finalize proposal deck for client review"));
}

#[test]
fn test_demo_json_round_trips() {
    let output = vp().args(["demo", "--format", "json"]).assert().success();
    let stdout = String::from_utf8(output.get_output().stdout.clone()).unwrap();

    let plan: serde_json::Value = serde_json::from_str(&stdout).expect("demo output is valid JSON");
    assert!(plan["tasks"].is_array());
    assert!(plan["schedule"].is_object());
    assert!(plan["blocks"].is_array());
    assert_eq!(plan["tasks"].as_array().unwrap().len(), 6);
}

//! Smoke tests for the deporder binary

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

const SHOP: &str = r#"{
    "projects": [
        { "name": "WebApp", "project_references": ["Logger", "Services", "Squiggly"] },
        { "name": "Services", "project_references": ["Logger", "DomainModels"] },
        { "name": "DomainModels", "project_references": ["VariousAbstractions"] },
        { "name": "PublicApi", "project_references": ["Services"] },
        { "name": "Logger" },
        { "name": "VariousAbstractions" }
    ]
}"#;

/// Binary running in `dir` with no inherited configuration
fn deporder(dir: &TempDir) -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("deporder"));
    cmd.current_dir(dir.path())
        .env_remove("DEPORDER_WORKDIR")
        .env_remove("DEPORDER_LOG_LEVEL")
        .env_remove("DEPORDER_LOG_FORMAT")
        .env_remove("DEPORDER_LOG_OUTPUT")
        .env_remove("RUST_LOG")
        .env("DEPORDER_COLOR", "never");
    cmd
}

#[test]
fn test_no_args_shows_banner() {
    let dir = TempDir::new().unwrap();
    deporder(&dir)
        .assert()
        .success()
        .stdout(predicate::str::contains("deporder - dependency ordering"))
        .stdout(predicate::str::contains("deporder --help"));
}

#[test]
fn test_help_lists_commands() {
    let dir = TempDir::new().unwrap();
    deporder(&dir)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("order"))
        .stdout(predicate::str::contains("reverse"))
        .stdout(predicate::str::contains("analyze"));
}

#[test]
fn test_order_relative_manifest() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("shop.deps.json"), SHOP).unwrap();

    deporder(&dir)
        .args(["order", "shop.deps.json"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "Logger\nVariousAbstractions\nDomainModels\nServices\nPublicApi\nWebApp\n",
        ))
        .stdout(predicate::str::contains("Unrecognized reference: Squiggly"));
}

#[test]
fn test_workdir_flag_resolves_manifest() {
    let dir = TempDir::new().unwrap();
    let nested = dir.path().join("solutions");
    fs::create_dir(&nested).unwrap();
    fs::write(nested.join("shop.deps.json"), SHOP).unwrap();

    deporder(&dir)
        .args(["--workdir", "solutions", "reverse", "shop.deps.json", "--key", "Logger"])
        .assert()
        .success()
        .stdout("WebApp\nServices\n");
}

#[test]
fn test_cycle_exits_non_zero() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("loop.deps.yaml"),
        "projects:\n  - name: A\n    project_references: [B, C, D]\n  - name: D\n    project_references: [E, F, A]\n",
    )
    .unwrap();

    deporder(&dir)
        .args(["order", "loop.deps.yaml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Circular reference found: A"))
        .stderr(predicate::str::contains("A → D → A"));
}

#[test]
fn test_analyze_missing_directory_fails() {
    let dir = TempDir::new().unwrap();
    deporder(&dir)
        .args(["analyze", "nowhere"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Path not found"));
}

#[test]
fn test_version_command() {
    let dir = TempDir::new().unwrap();
    deporder(&dir)
        .arg("version")
        .assert()
        .success()
        .stdout(predicate::str::contains(concat!(
            "deporder ",
            env!("CARGO_PKG_VERSION")
        )));
}

/// End-to-end tests for config file loading and CLI option merging.
///
/// These tests exercise the full flow from config file on disk through CLI invocation
/// to correct output, using `assert_cmd` and `tempfile` for isolated test environments.
use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

// ============================================================================
// Helper Functions
// ============================================================================

/// Write a compose file with one published port per service.
fn write_compose(dir: &Path, services: &[(&str, u16)]) {
    fs::create_dir_all(dir).unwrap();
    let mut content = String::from("services:\n");
    for (name, port) in services {
        content.push_str(&format!("  {}:\n    ports:\n      - \"{}:{}\"\n", name, port, port));
    }
    fs::write(dir.join("docker-compose.yml"), content).unwrap();
}

/// Write a config file at the specified path.
fn write_config(path: &Path, content: &str) {
    fs::write(path, content).unwrap();
}

/// Workspace with `db` on 3306 and 3308 and `postgres` on 3307.
fn create_workspace() -> TempDir {
    let temp_dir = TempDir::new().unwrap();
    write_compose(&temp_dir.path().join("one"), &[("db", 3306), ("postgres", 3307)]);
    write_compose(&temp_dir.path().join("two"), &[("db", 3308)]);
    temp_dir
}

// ============================================================================
// Auto-discovery
// ============================================================================

#[test]
fn test_config_is_discovered_in_scanned_directory() {
    let workspace = create_workspace();
    write_config(
        &workspace.path().join("compose-port-finder.config.yml"),
        "services:\n  - db\n  - postgres\n",
    );

    cargo_bin_cmd!("compose-port-finder")
        .arg(workspace.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Next free PORT: 3309"));
}

#[test]
fn test_without_config_defaults_apply() {
    let workspace = create_workspace();

    cargo_bin_cmd!("compose-port-finder")
        .arg(workspace.path())
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Patch a hole with the free PORT: 3307",
        ));
}

// ============================================================================
// Explicit --config
// ============================================================================

#[test]
fn test_explicit_config_path() {
    let workspace = create_workspace();
    let config_dir = TempDir::new().unwrap();
    let config_path = config_dir.path().join("custom.yml");
    write_config(&config_path, "services: [postgres]\n");

    cargo_bin_cmd!("compose-port-finder")
        .arg(workspace.path())
        .arg("--config")
        .arg(&config_path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Next free PORT: 3308"));
}

#[test]
fn test_missing_explicit_config_fails() {
    let workspace = create_workspace();

    cargo_bin_cmd!("compose-port-finder")
        .arg(workspace.path())
        .args(["--config", "/nonexistent/custom.yml"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Failed to read config file"));
}

#[test]
fn test_invalid_yaml_config_fails() {
    let workspace = create_workspace();
    write_config(
        &workspace.path().join("compose-port-finder.config.yml"),
        "services: [[[broken",
    );

    cargo_bin_cmd!("compose-port-finder")
        .arg(workspace.path())
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Failed to parse config file"));
}

// ============================================================================
// Merging with CLI options
// ============================================================================

#[test]
fn test_cli_services_override_config() {
    let workspace = create_workspace();
    write_config(
        &workspace.path().join("compose-port-finder.config.yml"),
        "services: [postgres]\n",
    );

    cargo_bin_cmd!("compose-port-finder")
        .arg(workspace.path())
        .args(["--services", "db"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Patch a hole with the free PORT: 3307",
        ));
}

#[test]
fn test_config_start_is_validated() {
    let workspace = create_workspace();
    write_config(
        &workspace.path().join("compose-port-finder.config.yml"),
        "start: 1024\n",
    );

    cargo_bin_cmd!("compose-port-finder")
        .arg(workspace.path())
        .assert()
        .code(1)
        .stdout(predicate::str::contains(
            "Given PORT [1024] needs to be a number >= 3306.",
        ));

    // A valid CLI value wins over the invalid config value
    cargo_bin_cmd!("compose-port-finder")
        .arg(workspace.path())
        .args(["--start", "3400"])
        .assert()
        .success();
}

#[test]
fn test_config_depth() {
    let workspace = create_workspace();
    write_compose(workspace.path(), &[("db", 3320)]);
    write_config(
        &workspace.path().join("compose-port-finder.config.yml"),
        "depth: \"0\"\n",
    );

    cargo_bin_cmd!("compose-port-finder")
        .arg(workspace.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Next free PORT: 3321"));
}

#[test]
fn test_config_exclude_dirs() {
    let workspace = create_workspace();
    write_config(
        &workspace.path().join("compose-port-finder.config.yml"),
        "exclude_dirs:\n  - two\n",
    );

    cargo_bin_cmd!("compose-port-finder")
        .arg(workspace.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Next free PORT: 3307"));
}

#[test]
fn test_config_format_json() {
    let workspace = create_workspace();
    write_config(
        &workspace.path().join("compose-port-finder.config.yml"),
        "format: json\n",
    );

    let output = cargo_bin_cmd!("compose-port-finder")
        .arg(workspace.path())
        .output()
        .unwrap();
    assert!(output.status.success());

    let report: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("stdout should be a JSON report");
    assert_eq!(report["recommendation"]["kind"], "hole");

    // The CLI flag wins over the config file
    cargo_bin_cmd!("compose-port-finder")
        .arg(workspace.path())
        .args(["-f", "text"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[OK] Patch a hole"));
}

#[test]
fn test_unknown_config_fields_warn() {
    let workspace = create_workspace();
    write_config(
        &workspace.path().join("compose-port-finder.config.yml"),
        "services: [db]\nverbose: true\n",
    );

    cargo_bin_cmd!("compose-port-finder")
        .arg(workspace.path())
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Unknown config field 'verbose' will be ignored.",
        ));
}

//! End-to-end tests for the `ac` binary

use std::fs;
use std::path::PathBuf;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const HISTORY: &str = "\
periodico,fecha,cantidad
El Sol,2024-01-01,10
El Sol,2024-01-02,10
El Sol,2024-01-03,10
El Sol,2024-01-04,10
El Sol,2024-01-05,10
El Sol,2024-01-06,10
La Gaceta,2024-01-01,100
La Gaceta,2024-01-02,100
La Gaceta,2024-01-03,100
La Gaceta,2024-01-04,100
La Gaceta,2024-01-05,10
";

// =============================================================================
// Helpers
// =============================================================================

fn fixture() -> (TempDir, PathBuf) {
    let temp = TempDir::new().expect("Failed to create temp dir");
    let path = temp.path().join("historico.csv");
    fs::write(&path, HISTORY).expect("Failed to write fixture");
    (temp, path)
}

fn ac(temp: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("ac").expect("binary not built");
    cmd.current_dir(temp.path())
        .env("HOME", temp.path())
        .env("XDG_CONFIG_HOME", temp.path())
        .env("RUST_LOG", "off");
    cmd
}

// =============================================================================
// validate
// =============================================================================

#[test]
fn test_validate_accepts_modal_count() {
    let (temp, data) = fixture();
    ac(&temp)
        .args(["validate", "-p", "El Sol", "-n", "10", "-d"])
        .arg(&data)
        .assert()
        .success()
        .stdout(predicate::str::contains("accepted"))
        .stdout(predicate::str::contains("El Sol"));
}

#[test]
fn test_validate_rejects_with_exit_code_2() {
    let (temp, data) = fixture();
    ac(&temp)
        .args(["validate", "-p", "El Sol", "-n", "9", "-d"])
        .arg(&data)
        .assert()
        .code(2)
        .stdout(predicate::str::contains("most frequent count (10)"));
}

#[test]
fn test_validate_json_below_q1() {
    let (temp, data) = fixture();
    ac(&temp)
        .args(["validate", "-p", "La Gaceta", "-n", "80", "--format", "json", "-d"])
        .arg(&data)
        .assert()
        .code(2)
        .stdout(predicate::str::contains("\"decision\": \"rejected-below-q1\""));
}

#[test]
fn test_validate_invalid_input() {
    let (temp, data) = fixture();
    ac(&temp)
        .args(["validate", "-p", "El Sol", "-n", "abc", "-d"])
        .arg(&data)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Invalid article count 'abc'"));
}

#[test]
fn test_validate_unknown_publication() {
    let (temp, data) = fixture();
    ac(&temp)
        .args(["validate", "-p", "El Mundo", "-n", "10", "-d"])
        .arg(&data)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("No historical data for El Mundo"));
}

#[test]
fn test_validate_respects_config_rules() {
    let (temp, data) = fixture();
    let config = temp.path().join("ac.yml");
    fs::write(&config, "validation:\n  high-variability-cv: 0.9\n").unwrap();

    // With a high cutoff La Gaceta counts as stable, so only the mode passes
    ac(&temp)
        .arg("--config")
        .arg(&config)
        .args(["validate", "-p", "La Gaceta", "-n", "150", "-d"])
        .arg(&data)
        .assert()
        .code(2)
        .stdout(predicate::str::contains("most frequent count (100)"));
}

// =============================================================================
// loading and reports
// =============================================================================

#[test]
fn test_missing_columns_reported() {
    let temp = TempDir::new().unwrap();
    let data = temp.path().join("bad.csv");
    fs::write(&data, "periodico,cantidad\nEl Sol,10\n").unwrap();

    ac(&temp)
        .args(["publications", "-d"])
        .arg(&data)
        .assert()
        .failure()
        .stderr(predicate::str::contains("missing: fecha"));
}

#[test]
fn test_publications_listed() {
    let (temp, data) = fixture();
    ac(&temp)
        .args(["publications", "-d"])
        .arg(&data)
        .assert()
        .success()
        .stdout(predicate::str::contains("El Sol").and(predicate::str::contains("La Gaceta")));
}

#[test]
fn test_history_grid() {
    let (temp, data) = fixture();
    ac(&temp)
        .args(["history", "--weeks", "2", "-d"])
        .arg(&data)
        .assert()
        .success()
        .stdout(predicate::str::contains("S2 Do"))
        .stdout(predicate::str::contains("S3 Lu").not());
}

#[test]
fn test_history_grid_weeks_out_of_range() {
    let (temp, data) = fixture();
    for weeks in ["0", "18446744073709551615"] {
        ac(&temp)
            .args(["history", "--weeks", weeks, "-d"])
            .arg(&data)
            .assert()
            .code(1)
            .stderr(predicate::str::contains("Grid weeks must be between 1 and 520"));
    }
}

#[test]
fn test_report_is_seeded() {
    let (temp, data) = fixture();
    let run = || {
        ac(&temp)
            .args(["report", "--seed", "11", "-d"])
            .arg(&data)
            .assert()
            .success()
            .stdout(predicate::str::contains("Lunes"))
            .get_output()
            .stdout
            .clone()
    };
    assert_eq!(run(), run());
}

#[test]
fn test_predict() {
    let (temp, data) = fixture();
    ac(&temp)
        .args(["predict", "--seed", "5", "-d"])
        .arg(&data)
        .assert()
        .success()
        .stdout(predicate::str::contains("Predicción de Artículos"))
        .stdout(predicate::str::contains("10.00"));
}

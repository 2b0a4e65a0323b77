//! End-to-end tests for the rif binary.

use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn test_parse_bradesco_narrative_to_json() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("narrativa.txt");
    std::fs::write(
        &input,
        "Entre 01.01.2023 e 31.01.2023, os créditos somaram R$ 10.000,00. \
Os débitos, em igual período, totalizaram R$ 4.000,00.",
    )
    .unwrap();

    Command::cargo_bin("rif")
        .unwrap()
        .args(["parse", "--institution", "Banco Bradesco S.A."])
        .arg(&input)
        .assert()
        .success()
        .stdout(predicate::str::contains("\"saldo_periodo\": 6000.0"));
}

#[test]
fn test_parse_unknown_bank_discloses_generic_fallback() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("narrativa.txt");
    std::fs::write(&input, "créditos no total de R$ 500,00").unwrap();

    Command::cargo_bin("rif")
        .unwrap()
        .args(["parse", "--institution", "Banco XYZ"])
        .arg(&input)
        .assert()
        .success()
        .stdout(predicate::str::contains("parser genérico"));
}

#[test]
fn test_empty_narrative_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("vazio.txt");
    std::fs::write(&input, "   \n").unwrap();

    Command::cargo_bin("rif")
        .unwrap()
        .args(["parse", "--institution", "Bradesco"])
        .arg(&input)
        .assert()
        .failure()
        .stderr(predicate::str::contains("empty"));
}

#[test]
fn test_missing_file_fails() {
    Command::cargo_bin("rif")
        .unwrap()
        .args(["parse", "--institution", "Bradesco", "/nonexistent/file.txt"])
        .assert()
        .failure();
}

//! Integration tests for the dniscan binary.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;

const FRONT: &str = "APELLIDO\nPEREZ\nNOMBRE\nJUAN CARLOS\n12345678\n15/03/1985";
const BACK: &str =
    "DOMICILIO: AV SIEMPREVIVA 742\nCUIL 20-12345678-1\nLUGAR DE NACIMIENTO\nBUENOS AIRES";

fn dniscan() -> Command {
    Command::cargo_bin("dniscan").unwrap()
}

#[test]
fn scan_front_only_outputs_json() {
    let dir = tempfile::tempdir().unwrap();
    let front = dir.path().join("front.txt");
    fs::write(&front, FRONT).unwrap();

    dniscan()
        .arg("scan")
        .arg(&front)
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""surname": "Perez""#))
        .stdout(predicate::str::contains(r#""idNumber": "12345678""#))
        .stdout(predicate::str::contains(r#""birthDate": "15/03/1985""#))
        .stdout(predicate::str::contains("taxId").not());
}

#[test]
fn scan_with_back_side_merges_fields() {
    let dir = tempfile::tempdir().unwrap();
    let front = dir.path().join("front.txt");
    let back = dir.path().join("back.txt");
    fs::write(&front, FRONT).unwrap();
    fs::write(&back, BACK).unwrap();

    dniscan()
        .arg("scan")
        .arg(&front)
        .arg("--back")
        .arg(&back)
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""surname": "Perez""#))
        .stdout(predicate::str::contains(r#""taxId": "20-12345678-1""#))
        .stdout(predicate::str::contains(r#""address": "Av Siempreviva 742""#))
        .stdout(predicate::str::contains(r#""birthplace": "Buenos Aires""#));
}

#[test]
fn scan_text_format() {
    let dir = tempfile::tempdir().unwrap();
    let front = dir.path().join("front.txt");
    fs::write(&front, FRONT).unwrap();

    dniscan()
        .arg("scan")
        .arg(&front)
        .arg("--format")
        .arg("text")
        .assert()
        .success()
        .stdout(predicate::str::contains("Surname"))
        .stdout(predicate::str::contains("Perez"));
}

#[test]
fn scan_empty_front_fails() {
    let dir = tempfile::tempdir().unwrap();
    let front = dir.path().join("front.txt");
    fs::write(&front, "").unwrap();

    dniscan()
        .arg("scan")
        .arg(&front)
        .assert()
        .failure()
        .stderr(predicate::str::contains("empty"));
}

#[test]
fn scan_missing_file_fails() {
    dniscan()
        .arg("scan")
        .arg("no-such-file.txt")
        .assert()
        .failure()
        .stderr(predicate::str::contains("not found"));
}

#[test]
fn inspect_shows_normalized_lines() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("front.txt");
    fs::write(&input, "APELLIDO:   «GOMEZ»\n\n12.345.678").unwrap();

    dniscan()
        .arg("inspect")
        .arg(&input)
        .assert()
        .success()
        .stdout(predicate::str::contains("APELLIDO GOMEZ"))
        .stdout(predicate::str::contains("12.345.678"))
        .stdout(predicate::str::contains("2 lines"));
}

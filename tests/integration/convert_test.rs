//! End-to-end tests for the convert command.

use std::fs;

use serde_json::{json, Value};
use tempfile::TempDir;

use crate::helpers::{fixture_path, run_fasta2af3};

fn convert(fixture: &str, out: &TempDir) -> (String, String, i32) {
    let input = fixture_path(fixture);
    run_fasta2af3(&[
        "convert",
        input.to_str().unwrap(),
        out.path().to_str().unwrap(),
    ])
}

// ============================================================================
// Happy Path
// ============================================================================

#[test]
fn convert_simple_writes_one_json_file() {
    let out = TempDir::new().unwrap();
    let (stdout, _, exit_code) = convert("simple.fasta", &out);

    assert_eq!(exit_code, 0);
    assert!(stdout.contains("Generated JSON:"));
    assert!(stdout.contains("job1.json"));
    assert!(stdout.contains("Generated 1 of 1 job file(s)"));

    let text = fs::read_to_string(out.path().join("job1.json")).unwrap();
    let value: Value = serde_json::from_str(&text).unwrap();
    assert_eq!(
        value,
        json!({
            "name": "job1",
            "modelSeeds": [1],
            "sequences": [
                {"protein": {"id": ["A"], "sequence": "MKTAYIAK"}},
                {"dna": {"id": ["B"], "sequence": "ACGT"}},
                {"ligand": {"id": ["C", "D"], "smiles": "CCO"}}
            ],
            "dialect": "alphafold3",
            "version": 2
        })
    );
}

#[test]
fn convert_multi_writes_one_file_per_record() {
    let out = TempDir::new().unwrap();
    let (stdout, _, exit_code) = convert("multi.fasta", &out);

    assert_eq!(exit_code, 0);
    assert!(stdout.contains("Generated 2 of 2 job file(s)"));

    let alpha: Value =
        serde_json::from_str(&fs::read_to_string(out.path().join("alpha.json")).unwrap()).unwrap();
    let beta: Value =
        serde_json::from_str(&fs::read_to_string(out.path().join("beta.json")).unwrap()).unwrap();

    assert_eq!(alpha["name"], json!("alpha"));
    assert_eq!(alpha["sequences"][1]["rna"]["id"], json!(["B"]));
    assert_eq!(beta["sequences"][0]["dna"]["id"], json!(["A", "B"]));
    assert_eq!(beta["sequences"][1]["ligand"]["ccd"], json!("HEM"));
}

#[test]
fn convert_is_idempotent() {
    let out = TempDir::new().unwrap();
    convert("multi.fasta", &out);
    let first = fs::read(out.path().join("alpha.json")).unwrap();

    let (_, _, exit_code) = convert("multi.fasta", &out);
    assert_eq!(exit_code, 0);
    let second = fs::read(out.path().join("alpha.json")).unwrap();
    assert_eq!(first, second);
}

#[test]
fn convert_creates_the_output_directory() {
    let out = TempDir::new().unwrap();
    let nested = out.path().join("nested").join("jobs");
    let input = fixture_path("simple.fasta");
    let (_, _, exit_code) = run_fasta2af3(&[
        "convert",
        input.to_str().unwrap(),
        nested.to_str().unwrap(),
    ]);

    assert_eq!(exit_code, 0);
    assert!(nested.join("job1.json").exists());
}

#[test]
fn convert_sanitizes_the_output_file_name() {
    let out = TempDir::new().unwrap();
    let (_, _, exit_code) = convert("unusual.fasta", &out);

    assert_eq!(exit_code, 0);
    let text = fs::read_to_string(out.path().join("messyname.json")).unwrap();
    let value: Value = serde_json::from_str(&text).unwrap();
    // The document keeps the raw name; only the filename is sanitized.
    assert_eq!(value["name"], json!("messy name!"));
}

// ============================================================================
// Name Override
// ============================================================================

#[test]
fn convert_name_override_applies_to_single_record_inputs() {
    let out = TempDir::new().unwrap();
    let input = fixture_path("simple.fasta");
    let (_, _, exit_code) = run_fasta2af3(&[
        "convert",
        input.to_str().unwrap(),
        out.path().to_str().unwrap(),
        "--name",
        "renamed",
    ]);

    assert_eq!(exit_code, 0);
    assert!(out.path().join("renamed.json").exists());
    assert!(!out.path().join("job1.json").exists());

    let value: Value =
        serde_json::from_str(&fs::read_to_string(out.path().join("renamed.json")).unwrap())
            .unwrap();
    assert_eq!(value["name"], json!("renamed"));
}

#[test]
fn convert_name_override_is_ignored_for_multi_record_inputs() {
    let out = TempDir::new().unwrap();
    let input = fixture_path("multi.fasta");
    let (_, _, exit_code) = run_fasta2af3(&[
        "convert",
        input.to_str().unwrap(),
        out.path().to_str().unwrap(),
        "-n",
        "forced",
    ]);

    assert_eq!(exit_code, 0);
    assert!(out.path().join("alpha.json").exists());
    assert!(out.path().join("beta.json").exists());
    assert!(!out.path().join("forced.json").exists());
}

// ============================================================================
// Failure Modes
// ============================================================================

#[test]
fn convert_missing_input_fails() {
    let out = TempDir::new().unwrap();
    let (_, stderr, exit_code) = run_fasta2af3(&[
        "convert",
        "no-such-file.fasta",
        out.path().to_str().unwrap(),
    ]);

    assert_eq!(exit_code, 1);
    assert!(stderr.contains("Error reading input file"));
}

#[test]
fn convert_input_without_records_fails() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("empty.fasta");
    fs::write(&input, "nothing resembling a record\n").unwrap();

    let out = TempDir::new().unwrap();
    let (_, stderr, exit_code) = run_fasta2af3(&[
        "convert",
        input.to_str().unwrap(),
        out.path().to_str().unwrap(),
    ]);

    assert_eq!(exit_code, 1);
    assert!(stderr.contains("No records found in FASTA file."));
}

#[test]
fn convert_reports_per_file_write_failures_and_continues() {
    let out = TempDir::new().unwrap();
    // A directory squatting on the target path makes that one write fail.
    fs::create_dir(out.path().join("job1.json")).unwrap();

    let (stdout, _, exit_code) = convert("simple.fasta", &out);

    assert_eq!(exit_code, 0);
    assert!(stdout.contains("Error writing JSON to"));
    assert!(stdout.contains("Generated 0 of 1 job file(s)"));
}

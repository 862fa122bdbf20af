use std::path::{Path, PathBuf};

use assert_cmd::Command;

const LISTINGS: &str = "\
region,price,year,manufacturer,condition,odometer
A,1000,2010,X,good,50000
B,,2012,Y,fair,30000
C,2500.5,2015,Y,fair,12000
";

fn write_input(dir: &Path, body: &str) -> PathBuf {
    let path = dir.join("vehicles.csv");
    std::fs::write(&path, body).expect("write input");
    path
}

fn bin() -> Command {
    Command::cargo_bin("vehicle-score").expect("binary available")
}

#[test]
fn prints_summary_for_valid_input() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_input(dir.path(), LISTINGS);

    let output = bin()
        .args(["--input", input.to_str().unwrap(), "--workers", "8", "--seed", "1"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let text = String::from_utf8_lossy(&output);

    assert!(text.contains("Processed 2 records in "), "got:\n{text}");
    assert!(text.contains("Real: $1000.00 | Predicho: "), "got:\n{text}");
    assert!(text.contains("Real: $2500.50 | Predicho: "), "got:\n{text}");
    assert_eq!(text.lines().filter(|l| l.starts_with("Real: $")).count(), 2);
}

#[test]
fn same_seed_gives_same_output_scores() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_input(dir.path(), LISTINGS);
    let run = || {
        let out = bin()
            .args(["--input", input.to_str().unwrap(), "--seed", "42", "--workers", "3"])
            .assert()
            .success()
            .get_output()
            .stdout
            .clone();
        String::from_utf8_lossy(&out)
            .lines()
            .filter(|l| l.starts_with("Real: $"))
            .map(str::to_owned)
            .collect::<Vec<_>>()
    };
    assert_eq!(run(), run());
}

#[test]
fn reads_stdin_when_input_is_dash() {
    bin()
        .args(["--input", "-", "--seed", "5"])
        .write_stdin(LISTINGS)
        .assert()
        .success();
}

#[test]
fn missing_input_fails_with_diagnostic() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("absent.csv");
    let output = bin()
        .args(["--input", missing.to_str().unwrap()])
        .assert()
        .failure()
        .get_output()
        .stderr
        .clone();
    let text = String::from_utf8_lossy(&output);
    assert!(text.contains("cannot open input"), "got:\n{text}");
}

#[test]
fn header_only_input_fails_as_empty() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_input(dir.path(), "region,price,year,manufacturer,condition,odometer\n");
    let output = bin()
        .args(["--input", input.to_str().unwrap()])
        .assert()
        .failure()
        .get_output()
        .stderr
        .clone();
    let text = String::from_utf8_lossy(&output);
    assert!(text.contains("no usable data rows"), "got:\n{text}");
}

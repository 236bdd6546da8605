use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::tempdir;

#[test]
fn shows_help() {
    Command::new(env!("CARGO_BIN_EXE_histmerge"))
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("histmerge"));
}

#[test]
fn merge_writes_combined_file_and_confirms() {
    let temp_dir = tempdir().expect("temporary directory");
    let first = temp_dir.path().join("det8.txt");
    let second = temp_dir.path().join("det9.txt");
    let output = temp_dir.path().join("combined.txt");
    fs::write(&first, "1.0 5\n2.0 3\n").expect("input written");
    fs::write(&second, "1.0 7\n").expect("input written");

    Command::new(env!("CARGO_BIN_EXE_histmerge"))
        .arg("merge")
        .arg(&first)
        .arg(&second)
        .arg("--output")
        .arg(&output)
        .assert()
        .success()
        .stdout(predicate::str::contains("Combined result written to"));

    let combined = fs::read_to_string(&output).expect("output read");
    assert_eq!(combined, "1\t12\n2\t3\n");
}

#[test]
fn quiet_suppresses_confirmation() {
    let temp_dir = tempdir().expect("temporary directory");
    let input = temp_dir.path().join("det8.txt");
    let output = temp_dir.path().join("combined.txt");
    fs::write(&input, "1.0 5\n").expect("input written");

    Command::new(env!("CARGO_BIN_EXE_histmerge"))
        .arg("--quiet")
        .arg("merge")
        .arg(&input)
        .arg("--output")
        .arg(&output)
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

#[test]
fn missing_input_exits_nonzero() {
    let temp_dir = tempdir().expect("temporary directory");
    let output = temp_dir.path().join("combined.txt");

    Command::new(env!("CARGO_BIN_EXE_histmerge"))
        .arg("merge")
        .arg(temp_dir.path().join("absent.txt"))
        .arg("--output")
        .arg(&output)
        .assert()
        .failure()
        .stderr(predicate::str::contains("input file not found"));
}

#[test]
fn malformed_line_exits_nonzero_with_location() {
    let temp_dir = tempdir().expect("temporary directory");
    let input = temp_dir.path().join("bad.txt");
    let output = temp_dir.path().join("combined.txt");
    fs::write(&input, "1.0 5\noops\n").expect("input written");

    Command::new(env!("CARGO_BIN_EXE_histmerge"))
        .arg("merge")
        .arg(&input)
        .arg("--output")
        .arg(&output)
        .assert()
        .failure()
        .stderr(predicate::str::contains("bad.txt:2"));
}

#[test]
fn integrate_prints_window_total() {
    let temp_dir = tempdir().expect("temporary directory");
    let input = temp_dir.path().join("det8.txt");
    fs::write(&input, "1.0 5\n2.0 3\n3.0 9\n").expect("input written");

    Command::new(env!("CARGO_BIN_EXE_histmerge"))
        .arg("integrate")
        .arg(&input)
        .arg("--lower")
        .arg("1.5")
        .arg("--upper")
        .arg("3.0")
        .assert()
        .success()
        .stdout(predicate::str::contains("12"));
}

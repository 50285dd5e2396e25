//! Integration tests running the actual crate binary: Test the full E2E path including the summary on stdout.

use std::path::Path;
use std::process::{Command, Output};

use crate::FILE_NAMES;

fn binary() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_json-fixture-gen"));
    cmd.env_remove("FIXTURE_OUTPUT_DIR")
        .env_remove("FIXTURE_SEED")
        .env("RUST_LOG", "warn");
    cmd
}

fn assert_success(output: &Output) {
    assert!(
        output.status.success(),
        "binary exited with non-zero status.\nstderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
}

/// Parses the CSV summary printed on stdout into (artifact, records) pairs.
fn summary_rows(stdout: &[u8]) -> Vec<(String, usize)> {
    let mut rdr = csv::Reader::from_reader(stdout);
    let headers: Vec<String> = rdr
        .headers()
        .expect("summary has a header")
        .iter()
        .map(str::to_string)
        .collect();
    assert_eq!(headers, ["artifact", "file", "records", "bytes"]);

    rdr.records()
        .map(|row| {
            let row = row.expect("well-formed summary row");
            (row[0].to_string(), row[2].parse().expect("numeric record count"))
        })
        .collect()
}

fn assert_all_files(dir: &Path) {
    for name in FILE_NAMES {
        assert!(dir.join(name).is_file(), "{name} missing in {}", dir.display());
    }
}

#[test]
fn writes_into_directory_given_as_argument() {
    let dir = tempfile::tempdir().unwrap();

    let output = binary()
        .arg(dir.path())
        .env("FIXTURE_SEED", "7")
        .output()
        .expect("failed to execute binary");

    assert_success(&output);
    assert_all_files(dir.path());

    let rows = summary_rows(&output.stdout);
    let expected = [
        ("users_array", 10),
        ("product_object", 1),
        ("invalid", 0),
        ("large_data", 10_000),
        ("nested_data", 1),
    ]
    .map(|(name, records)| (name.to_string(), records));
    assert_eq!(rows, expected);
}

#[test]
fn defaults_to_testdata_in_working_directory() {
    let dir = tempfile::tempdir().unwrap();

    let output = binary()
        .current_dir(dir.path())
        .output()
        .expect("failed to execute binary");

    assert_success(&output);
    assert_all_files(&dir.path().join("testdata"));
}

#[test]
fn output_directory_from_environment() {
    let dir = tempfile::tempdir().unwrap();
    let target = dir.path().join("from_env");

    let output = binary()
        .env("FIXTURE_OUTPUT_DIR", &target)
        .output()
        .expect("failed to execute binary");

    assert_success(&output);
    assert_all_files(&target);
}

#[test]
fn seeded_runs_are_reproducible() {
    let a = tempfile::tempdir().unwrap();
    let b = tempfile::tempdir().unwrap();

    for dir in [&a, &b] {
        let output = binary()
            .arg(dir.path())
            .env("FIXTURE_SEED", "123")
            .output()
            .expect("failed to execute binary");
        assert_success(&output);
    }

    for name in FILE_NAMES {
        assert_eq!(
            std::fs::read(a.path().join(name)).unwrap(),
            std::fs::read(b.path().join(name)).unwrap(),
            "{name} differs"
        );
    }
}

#[test]
fn malformed_seed_fails_without_writing() {
    let dir = tempfile::tempdir().unwrap();
    let target = dir.path().join("out");

    let output = binary()
        .arg(&target)
        .env("FIXTURE_SEED", "not-a-number")
        .output()
        .expect("failed to execute binary");

    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("FIXTURE_SEED"));
    assert!(!target.exists());
}

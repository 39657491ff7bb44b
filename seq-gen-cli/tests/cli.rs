//! End-to-end tests for the `seq-gen` binary.

use assert_cmd::Command;
use assert_fs::prelude::*;
use predicates::prelude::*;

const SMALL_CONFIG: &str = r#"
target_length = 8
seed = 9
highlight = 4
quota = [2, 2, 2, 2]

[domain]
min = 1
max = 4
"#;

fn seq_gen() -> Command {
    Command::cargo_bin("seq-gen").unwrap()
}

#[test]
fn help_flag_works() {
    seq_gen()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("no adjacent repeats"));
}

#[test]
fn writes_sequence_and_reports_highlights() {
    let temp = assert_fs::TempDir::new().unwrap();
    let config = temp.child("seq-gen.toml");
    config.write_str(SMALL_CONFIG).unwrap();
    let output = temp.child("run.output");

    seq_gen()
        .arg("--config")
        .arg(config.path())
        .arg("--output")
        .arg(output.path())
        .assert()
        .success()
        .stdout("4\n4\n");

    output.assert("1\n3\n4\n2\n1\n3\n4\n2\n");
}

#[test]
fn repeated_runs_append() {
    let temp = assert_fs::TempDir::new().unwrap();
    let config = temp.child("seq-gen.toml");
    config.write_str(SMALL_CONFIG).unwrap();
    let output = temp.child("run.output");

    for _ in 0..2 {
        seq_gen()
            .arg("--config")
            .arg(config.path())
            .arg("--output")
            .arg(output.path())
            .arg("--no-highlight")
            .assert()
            .success()
            .stdout("");
    }

    output.assert("1\n3\n4\n2\n1\n3\n4\n2\n".repeat(2));
}

#[test]
fn abort_on_exhaustion_fails_without_output() {
    let temp = assert_fs::TempDir::new().unwrap();
    let config = temp.child("seq-gen.toml");
    config.write_str(SMALL_CONFIG).unwrap();
    let output = temp.child("run.output");

    seq_gen()
        .arg("--config")
        .arg(config.path())
        .arg("--output")
        .arg(output.path())
        .args(["--length", "10", "--on-exhaustion", "abort"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("quota exhausted after 8 of 10 values"));

    output.assert(predicate::path::missing());
}

#[test]
fn skip_on_exhaustion_writes_short_output() {
    let temp = assert_fs::TempDir::new().unwrap();
    let config = temp.child("seq-gen.toml");
    config.write_str(SMALL_CONFIG).unwrap();
    let output = temp.child("run.output");

    seq_gen()
        .arg("--config")
        .arg(config.path())
        .arg("--output")
        .arg(output.path())
        .args(["--length", "10"])
        .assert()
        .success()
        .stderr(predicate::str::contains("skipped 2 of 10 slots"));

    output.assert("1\n3\n4\n2\n1\n3\n4\n2\n");
}

#[test]
fn unwritable_output_is_reported() {
    let temp = assert_fs::TempDir::new().unwrap();
    let config = temp.child("seq-gen.toml");
    config.write_str(SMALL_CONFIG).unwrap();

    seq_gen()
        .arg("--config")
        .arg(config.path())
        .arg("--output")
        .arg(temp.child("missing/run.output").path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to write output"));
}

#[test]
fn invalid_config_is_reported() {
    let temp = assert_fs::TempDir::new().unwrap();
    let config = temp.child("seq-gen.toml");
    config.write_str("quota = [1, 2]\n").unwrap();

    seq_gen()
        .arg("--config")
        .arg(config.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("quota has 2 entries"));
}

//! End-to-end CLI integration tests.

use assert_cmd::Command;
use predicates::prelude::*;

fn pical() -> Command {
    Command::cargo_bin("pical").expect("binary not found")
}

#[test]
fn help_flag() {
    pical()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("intervals"));
}

#[test]
fn version_flag() {
    pical()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("pical"));
}

#[test]
fn single_interval() {
    pical()
        .args(["1", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Time elapsed: "))
        .stdout(predicate::str::contains(
            "pi is approximately = 3.20000000000000017764",
        ))
        .stdout(predicate::str::contains("Error               = 0.0584"));
}

#[test]
fn output_layout() {
    let out = pical().args(["1000", "2"]).output().unwrap();
    assert!(out.status.success());
    let stdout = String::from_utf8(out.stdout).unwrap();
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 4, "{stdout}");
    assert!(lines[0].starts_with("Time elapsed: ") && lines[0].ends_with(" seconds"));
    assert_eq!(lines[1], "");
    assert!(lines[2].starts_with("pi is approximately = 3.141592"));
    assert!(lines[3].starts_with("Error               = 0.0000000833"));
}

#[test]
fn parallel_run() {
    pical()
        .args(["1000000", "4"])
        .assert()
        .success()
        .stdout(predicate::str::contains("pi is approximately = 3.14159265358"));
}

#[test]
fn threads_default_to_one() {
    pical()
        .arg("100")
        .assert()
        .success()
        .stdout(predicate::str::contains("pi is approximately = 3.14160098692"));
}

#[test]
fn more_threads_than_intervals() {
    pical()
        .args(["3", "8"])
        .assert()
        .success()
        .stdout(predicate::str::contains("pi is approximately = 3.15084920986"));
}

#[test]
fn zero_intervals_rejected() {
    pical()
        .args(["0", "1"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains(
            "The number of intervals must be between 1 and 2147483647",
        ));
}

#[test]
fn intervals_above_i32_max_rejected() {
    pical()
        .args(["2147483648", "1"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("2147483647"));
}

#[test]
fn negative_intervals_rejected() {
    pical().args(["-10"]).assert().code(1);
}

#[test]
fn zero_threads_rejected() {
    pical()
        .args(["100", "0"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains(
            "The number of threads must be greater than 0",
        ));
}

#[test]
fn non_numeric_rejected() {
    pical()
        .args(["lots"])
        .assert()
        .code(1)
        .stderr(predicate::str::is_empty().not());
}

#[test]
fn extra_argument_rejected() {
    pical().args(["10", "2", "3"]).assert().code(1);
}

#[test]
fn spawn_failure_exits_with_worker_index() {
    pical()
        .args(["1000", "4"])
        .env("RUST_MIN_STACK", "1125899906842624")
        .assert()
        .code(1)
        .stdout(predicate::str::contains("pi is approximately").not())
        .stderr(predicate::str::contains("failed to spawn worker 0"));
}

#[test]
fn serial_run_ignores_thread_stack_limit() {
    pical()
        .args(["1000", "1"])
        .env("RUST_MIN_STACK", "1125899906842624")
        .assert()
        .success();
}

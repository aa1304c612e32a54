mod support;

use std::io::Write;
use std::process::{Command, Output, Stdio};

fn run_cli(args: &[&str], input: &str) -> Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_cfg-sets"))
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("failed to start cfg-sets");
    child
        .stdin
        .take()
        .expect("stdin is piped")
        .write_all(input.as_bytes())
        .expect("failed to write grammar");
    child.wait_with_output().expect("cfg-sets did not finish")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

#[test]
fn test_first_task() {
    let output = run_cli(&["2"], support::SIMPLE);
    assert!(output.status.success());
    assert_eq!(
        stdout(&output),
        "FIRST(S) = { a, b }\nFIRST(A) = { #, a }\nFIRST(B) = { b }\n"
    );
}

#[test]
fn test_follow_task_by_name() {
    let output = run_cli(&["follow"], support::SIMPLE);
    assert!(output.status.success());
    assert_eq!(
        stdout(&output),
        "FOLLOW(S) = { $ }\nFOLLOW(A) = { b }\nFOLLOW(B) = { $ }\n"
    );
}

#[test]
fn test_useless_flag() {
    let output = run_cli(&["one-token", "--useless"], support::NULLABLE_CYCLE);
    assert!(output.status.success());
    assert_eq!(
        stdout(&output),
        "S: YES\nA: YES\nB: YES\nU: NO\nU: unreachable, unproductive\n"
    );
}

#[test]
fn test_load_error() {
    let output = run_cli(&["1"], "S #\nS -> a #\n");
    assert!(!output.status.success());
    assert_eq!(stdout(&output), "Error: incomplete grammar at line 3\n");
}

use std::io::Write;
use std::process::{Command, Output, Stdio};
use tempfile::TempDir;

/// Run the binary in an empty directory with `input` on stdin.
fn run(args: &[&str], input: impl AsRef<[u8]>) -> Output {
    let temp_dir = TempDir::new().unwrap();
    let mut child = Command::new(env!("CARGO_BIN_EXE_seqreduce"))
        .args(args)
        .current_dir(temp_dir.path())
        .env_remove("RUST_LOG")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("Failed to spawn seqreduce");

    child
        .stdin
        .take()
        .unwrap()
        .write_all(input.as_ref())
        .unwrap();

    child.wait_with_output().unwrap()
}

fn stdout(output: &Output) -> String {
    String::from_utf8(output.stdout.clone()).unwrap()
}

#[test]
fn test_factorial_of_five() {
    let output = run(&["factorial"], "5\n");
    assert!(output.status.success());
    assert_eq!(stdout(&output), "120\n");
}

#[test]
fn test_factorial_of_zero() {
    let output = run(&["factorial"], "0");
    assert!(output.status.success());
    assert_eq!(stdout(&output), "1\n");
}

#[test]
fn test_factorial_of_negative() {
    let output = run(&["factorial"], "-3\n");
    assert_eq!(output.status.code(), Some(1));
    assert_eq!(
        stdout(&output),
        "Factorial is not defined for negative numbers.\n"
    );
}

#[test]
fn test_counted_sum() {
    let output = run(&["sum"], "4\n1 2 3 4\n");
    assert!(output.status.success());
    assert_eq!(stdout(&output), "10\n");
}

#[test]
fn test_reverse_three() {
    let output = run(&["reverse"], "7 2 9\n");
    assert!(output.status.success());
    assert_eq!(stdout(&output), "9 2 7\n");
}

#[test]
fn test_reverse_too_few() {
    let output = run(&["reverse"], "1 2\n");
    assert_eq!(output.status.code(), Some(1));
    assert_eq!(stdout(&output), "Input must contain exactly 3 integers\n");
}

#[test]
fn test_reverse_custom_length() {
    let output = run(&["reverse", "--length", "4"], "1 2 3 4");
    assert!(output.status.success());
    assert_eq!(stdout(&output), "4 3 2 1\n");
}

#[test]
fn test_unparseable_token() {
    let output = run(&["sum"], "3 1 oops 3");
    assert_eq!(output.status.code(), Some(1));
    assert!(stdout(&output).contains("'oops'"));
}

#[test]
fn test_negative_count_rejected() {
    let output = run(&["sum"], "-5");
    assert_eq!(output.status.code(), Some(1));
    assert!(stdout(&output).contains("out of range"));
}

#[test]
fn test_fixed_pair_sum() {
    let output = run(&["sum", "--fixed", "2"], "40 2\n");
    assert!(output.status.success());
    assert_eq!(stdout(&output), "42\n");

    let output = run(&["sum", "--fixed", "2"], "40\n");
    assert_eq!(output.status.code(), Some(1));
    assert_eq!(stdout(&output), "Input must contain exactly 2 integers\n");
}

#[test]
fn test_empty_input_is_parse_error() {
    let output = run(&["factorial"], "");
    assert_eq!(output.status.code(), Some(1));
    assert!(stdout(&output).starts_with("Invalid input"));
}

#[test]
fn test_json_envelope() {
    let output = run(&["--json", "reverse"], "7 2 9");
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(value["type"], "result");
    assert_eq!(value["code"], "OK");
    assert_eq!(value["data"]["value"], serde_json::json!([9, 2, 7]));

    let output = run(&["factorial", "--json"], "-1");
    assert_eq!(output.status.code(), Some(1));
    let value: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(value["status"], "error");
    assert_eq!(value["code"], "DOMAIN_ERROR");
}

#[test]
fn test_quiet_stderr_by_default() {
    let output = run(&["sum"], "2 1 1");
    assert!(output.status.success());
    assert!(output.stderr.is_empty());
}

#[test]
fn test_invalid_bytes_are_parse_errors() {
    let output = run(&["factorial"], b"\xff\n");
    assert_eq!(output.status.code(), Some(1));
    assert!(stdout(&output).starts_with("Invalid input"));

    // Trailing garbage after the declared values is never read.
    let output = run(&["sum"], b"2 1 1 \xff\n");
    assert!(output.status.success());
    assert_eq!(stdout(&output), "2\n");
}

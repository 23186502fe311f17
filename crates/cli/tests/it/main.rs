//! End-to-end tests for the `rlpe` binary.

use std::{
    io::Write,
    process::{Command, Output, Stdio},
};

fn rlpe(args: &[&str], stdin: Option<&str>) -> Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_rlpe"))
        .args(args)
        .env_remove("RLPE_ABSENT")
        .env_remove("RLPE_SCRATCH_CAPACITY")
        .env("RLPE_CONFIG", "rlpe-test-does-not-exist.toml")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap();
    let mut input = child.stdin.take().unwrap();
    if let Some(stdin) = stdin {
        input.write_all(stdin.as_bytes()).unwrap();
    }
    drop(input);
    child.wait_with_output().unwrap()
}

fn stdout(output: &Output) -> &str {
    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));
    std::str::from_utf8(&output.stdout).unwrap()
}

#[test]
fn encode_arg() {
    let output = rlpe(&["encode", "[\"0x646f67\",\"0x636174\"]"], None);
    assert_eq!(stdout(&output), "0xc883646f6783636174\n");
}

#[test]
fn encode_stdin() {
    let output = rlpe(&["encode", "--absent", "empty-string"], Some("[1024, null]\n"));
    assert_eq!(stdout(&output), "0xc482040080\n");
}

#[test]
fn encode_raw() {
    let output = rlpe(&["encode", "--raw", "[]"], None);
    assert!(output.status.success());
    assert_eq!(output.stdout, [0xc0]);
}

#[test]
fn header() {
    let output = rlpe(&["header", "60", "--list"], None);
    assert_eq!(stdout(&output), "0xf83c\n");
}

#[test]
fn show_stdin() {
    let output = rlpe(&["show"], Some("[\"dog\"]"));
    assert!(!output.status.success());

    let output = rlpe(&["show"], Some("[\"646f67\", []]"));
    assert_eq!(stdout(&output), "[\"0x646f67\",[]]\n");
}

#[test]
fn invalid_input() {
    let output = rlpe(&["encode", "{\"a\": 1}"], None);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("objects"), "{stderr}");
}

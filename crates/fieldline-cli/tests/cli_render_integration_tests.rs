//! CLI integration tests
//!
//! These tests run the built binary and check the lines it prints.

use std::process::{Command, Output};

fn run_cli(args: &[&str]) -> Output {
    let cli_bin = env!("CARGO_BIN_EXE_fieldline-cli");

    Command::new(cli_bin)
        .args(args)
        .env_remove("RUST_LOG")
        .env_remove("FIELDLINE_MIN_LEVEL")
        .env_remove("FIELDLINE_PROFILE")
        .env_remove("FIELDLINE_SOURCE_CONTEXT")
        .output()
        .expect("Failed to execute CLI")
}

fn stdout_of(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

#[test]
fn test_cli_render_operation_status_and_field() {
    let output = run_cli(&[
        "render",
        "--operation",
        "StartUp",
        "--status",
        "Started",
        "--field",
        "TestKey=teeest",
    ]);

    assert!(output.status.success());
    assert_eq!(
        stdout_of(&output),
        "Operation=StartUp,OperationStatus=STARTED,TestKey=teeest\n"
    );
}

#[test]
fn test_cli_render_message_fields_and_extra() {
    let output = run_cli(&[
        "render",
        "-m",
        "testudo",
        "-f",
        "TestKey=teeest",
        "--extra",
        "TestKey2=teeest2",
    ]);

    assert!(output.status.success());
    assert_eq!(
        stdout_of(&output),
        "Message=testudo,TestKey=teeest,TestKey2=teeest2\n"
    );
}

#[test]
fn test_cli_render_exception_without_message() {
    let output = run_cli(&["render", "-o", "StartUp", "--exception-type", "Exception"]);

    assert!(output.status.success());
    assert_eq!(
        stdout_of(&output),
        "Operation=StartUp,Message=An exception has occurred,Exception=Exception\n"
    );
}

#[test]
fn test_cli_render_nothing_prints_empty_line() {
    let output = run_cli(&["render"]);

    assert!(output.status.success());
    assert_eq!(stdout_of(&output), "\n");
}

#[test]
fn test_cli_render_rejects_malformed_field() {
    let output = run_cli(&["render", "--field", "novalue"]);

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Malformed field 'novalue'"));
}

#[test]
fn test_cli_emit_writes_line_through_tracing() {
    let output = run_cli(&[
        "emit",
        "--level",
        "warn",
        "--profile",
        "production",
        "--operation",
        "ShutDown",
        "--status",
        "Success",
    ]);

    assert!(output.status.success());
    let stdout = stdout_of(&output);
    assert!(stdout.contains("Operation=ShutDown,OperationStatus=SUCCESS"));
    assert!(stdout.contains("WARN"));
}

#[test]
fn test_cli_emit_below_min_level_prints_nothing() {
    let output = Command::new(env!("CARGO_BIN_EXE_fieldline-cli"))
        .args(["emit", "--level", "debug", "--profile", "production", "-m", "quiet"])
        .env_remove("RUST_LOG")
        .env("FIELDLINE_MIN_LEVEL", "error")
        .output()
        .expect("Failed to execute CLI");

    assert!(output.status.success());
    assert!(!stdout_of(&output).contains("Message=quiet"));
}

#[test]
fn test_cli_emit_rejects_unknown_level() {
    let output = run_cli(&["emit", "--level", "loud", "-m", "x"]);

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Unknown log level"));
}

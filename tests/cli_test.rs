use std::fs;
use std::io::Write;
use std::process::{Command, Output, Stdio};
use tempfile::TempDir;

fn ohmtrace(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_ohmtrace"))
        .args(args)
        .stdin(Stdio::null())
        .output()
        .expect("Failed to execute command")
}

fn ohmtrace_with_stdin(args: &[&str], input: &str) -> Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_ohmtrace"))
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("Failed to spawn command");
    child
        .stdin
        .take()
        .unwrap()
        .write_all(input.as_bytes())
        .unwrap();
    child.wait_with_output().expect("Failed to wait for command")
}

#[test]
fn test_cli_help() {
    let output = ohmtrace(&["--help"]);

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("ohmtrace"));
    assert!(stdout.contains("--measured"));
    assert!(stdout.contains("--format"));
    assert!(stdout.contains("Notation:"));
}

#[test]
fn test_cli_missing_circuit() {
    let output = ohmtrace(&[]);

    assert!(!output.status.success());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("required") || stderr.contains("CIRCUIT"));
}

#[test]
fn test_cli_rejects_unframed_circuit() {
    let output = ohmtrace(&["+10_20"]);

    assert!(!output.status.success());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("Invalid arguments"));
    assert!(stderr.contains("terminator"));
}

#[test]
fn test_cli_series_circuit() {
    let output = ohmtrace(&["+10_20-"]);

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("Known equivalent resistance (Req_known): 30.00 Ohm"));
}

#[test]
fn test_cli_solves_series_unknown_as_json() {
    let output = ohmtrace(&["+10_x-", "--measured", "35", "--format", "json"]);

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    let report: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(report["req_known"], 10.0);
    assert_eq!(report["solution"]["mode"], "series");
    assert_eq!(report["solution"]["rx"], 25.0);
}

#[test]
fn test_cli_ohms_law() {
    let output = ohmtrace(&["+10*20||20=*-", "--voltage", "10"]);

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("Current: 0.50 A"));
    assert!(stdout.contains("Analysis complete."));
}

#[test]
fn test_cli_retries_exhausted() {
    let output = ohmtrace(&["+10_x-", "-m", "-1", "-m", "5", "-m", "8", "-m", "35"]);

    assert!(!output.status.success());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("no valid measurement after 3 attempts"));
}

#[test]
fn test_cli_prompts_for_measurement() {
    let output = ohmtrace_with_stdin(&["+*x||20=*-", "-f", "json"], "abc\n10\n");

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    let report: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(report["solution"]["mode"], "parallel");
    assert_eq!(report["solution"]["rx"], 20.0);
    assert_eq!(report["solution"]["attempts"], 2);
}

#[test]
fn test_cli_two_unknowns() {
    let output = ohmtrace(&["+x_x-"]);

    assert!(!output.status.success());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("2 unknown resistors"));
}

#[test]
fn test_cli_config_limits_attempts() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("ohmtrace.yaml");
    fs::write(&config_path, "max_attempts: 1\n").unwrap();

    let output = ohmtrace(&[
        "+10_x-",
        "--config",
        config_path.to_str().unwrap(),
        "-m",
        "-1",
        "-m",
        "35",
    ]);

    assert!(!output.status.success());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("measured resistance must be positive"));
}

#[test]
fn test_cli_output_file() {
    let temp_dir = TempDir::new().unwrap();
    let out_path = temp_dir.path().join("report.json");

    let output = ohmtrace(&[
        "+10_20-",
        "-f",
        "json",
        "-O",
        out_path.to_str().unwrap(),
    ]);

    assert!(output.status.success());
    let content = fs::read_to_string(&out_path).unwrap();
    let report: serde_json::Value = serde_json::from_str(&content).unwrap();
    assert_eq!(report["simple"], true);
    assert_eq!(report["equivalent_resistance"], 30.0);
}

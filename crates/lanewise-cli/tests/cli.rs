//! End-to-end tests for the `lanewise` binary.

use std::process::{Command, Output};

fn lanewise(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_lanewise"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to spawn lanewise")
}

const DEMO_SUMS: [u32; 16] = [3, 3, 7, 7, 11, 11, 15, 15, 19, 19, 23, 23, 27, 27, 31, 31];

fn demo_lines() -> Vec<String> {
    DEMO_SUMS
        .iter()
        .enumerate()
        .map(|(i, sum)| format!("result[{}] = {}.00 == {}", i, sum, sum))
        .collect()
}

fn result_lines(output: &Output) -> Vec<String> {
    String::from_utf8_lossy(&output.stdout)
        .lines()
        .filter(|line| line.starts_with("result["))
        .map(str::to_string)
        .collect()
}

#[test]
fn test_default_mode_prints_demo_sums() {
    let output = lanewise(&[]);
    assert!(output.status.success());
    assert_eq!(result_lines(&output), demo_lines());
    assert_eq!(result_lines(&output)[2], "result[2] = 7.00 == 7");
}

#[test]
fn test_every_mode_token_prints_identical_output() {
    for token in ["narrow", "sse", "medium", "avx2", "wide", "avx512"] {
        let output = lanewise(&[token]);
        assert!(output.status.success(), "token {}", token);
        assert_eq!(result_lines(&output), demo_lines(), "token {}", token);
    }
}

#[test]
fn test_invalid_mode_fails_without_results() {
    let output = lanewise(&["bogus"]);
    assert!(!output.status.success());
    assert!(result_lines(&output).is_empty());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("invalid algorithm: bogus"),
        "stderr was: {}",
        stderr
    );
}

#[test]
fn test_verbose_reports_chunking() {
    let output = lanewise(&["medium", "--verbose"]);
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Mode: medium"));
    assert!(stdout.contains("Width: 8 lanes"));
    assert!(stdout.contains("Kernel calls: 2"));
    assert_eq!(result_lines(&output), demo_lines());
}

#[test]
fn test_list_modes_skips_computation() {
    let output = lanewise(&["--list-modes"]);
    assert!(output.status.success());
    assert!(result_lines(&output).is_empty());

    let stdout = String::from_utf8_lossy(&output.stdout);
    for name in ["narrow", "medium", "wide", "sse", "avx2", "avx512"] {
        assert!(stdout.contains(name), "missing {} in {}", name, stdout);
    }
}

#[test]
fn test_list_modes_still_rejects_invalid_mode() {
    let output = lanewise(&["bogus", "--list-modes"]);
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    assert!(String::from_utf8_lossy(&output.stderr).contains("invalid algorithm: bogus"));
}

#[test]
fn test_list_modes_flags_portable_fallbacks() {
    let output = lanewise(&["-l"]);
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    for line in stdout.lines() {
        assert_eq!(
            line.contains("portable"),
            line.ends_with("[not compiled in]"),
            "line: {}",
            line
        );
    }
}

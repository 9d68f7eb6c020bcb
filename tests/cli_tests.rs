//! End-to-end tests for the `ledgerforge` binary

use std::process::{Command, Output};

fn ledgerforge(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_ledgerforge"))
        .args(args)
        .env("NO_COLOR", "1")
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to spawn ledgerforge")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

#[test]
fn test_default_invocation_runs_suite() {
    let output = ledgerforge(&[]);
    let out = stdout(&output);

    assert!(output.status.success(), "stdout: {}", out);
    assert!(out.contains("collected 2 item(s)"));
    assert!(out.contains("test_ledgerforge::test_initialization PASSED"));
    assert!(out.contains("test_ledgerforge::test_run_method PASSED"));
    assert!(out.contains("2 passed in"));
    assert!(!out.contains('\x1b'));
}

#[test]
fn test_test_subcommand_with_filter() {
    let output = ledgerforge(&["test", "-k", "initialization"]);
    let out = stdout(&output);

    assert!(output.status.success());
    assert!(out.contains("collected 1 item(s)"));
    assert!(!out.contains("test_run_method"));
}

#[test]
fn test_filter_matching_nothing_is_not_a_failure() {
    let output = ledgerforge(&["test", "-k", "no_such_test"]);
    assert!(output.status.success());
    assert!(stdout(&output).contains("No tests collected"));
}

#[test]
fn test_collect_only_lists_tests() {
    let output = ledgerforge(&["test", "--collect-only"]);
    let out = stdout(&output);

    assert!(output.status.success());
    assert!(out.contains("  test_ledgerforge::test_initialization\n"));
    assert!(out.contains("  test_ledgerforge::test_run_method\n"));
    assert!(out.contains("2 test(s) collected in"));
    assert!(!out.contains("PASSED"));
}

#[test]
fn test_json_format() {
    let output = ledgerforge(&["test", "--format", "json"]);
    assert!(output.status.success());

    let events: Vec<serde_json::Value> = stdout(&output)
        .lines()
        .map(|line| serde_json::from_str(line).expect("each line is a JSON object"))
        .collect();

    assert_eq!(events.first().unwrap()["event"], "collected");
    let summary = events.last().unwrap();
    assert_eq!(summary["event"], "summary");
    assert_eq!(summary["passed"], 2);
    assert_eq!(summary["failed"], 0);
    assert_eq!(summary["success"], true);
}

#[test]
fn test_run_subcommand_prints_true() {
    let output = ledgerforge(&["run"]);
    assert!(output.status.success());
    assert_eq!(stdout(&output).trim(), "true");
}

#[test]
fn test_version_subcommand() {
    let output = ledgerforge(&["version"]);
    assert!(output.status.success());
    assert_eq!(stdout(&output).trim(), format!("ledgerforge {}", env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_usage_error_exit_code() {
    let output = ledgerforge(&["test", "--format", "tap"]);
    assert_eq!(output.status.code(), Some(2));
}

#[test]
fn test_json_summary_terminates_empty_and_collect_only_runs() {
    let runs: [&[&str]; 2] = [
        &["test", "--format", "json", "-k", "no_such_test"],
        &["test", "--format", "json", "--collect-only"],
    ];
    for args in runs {
        let output = ledgerforge(args);
        assert!(output.status.success());

        let out = stdout(&output);
        let last: serde_json::Value = serde_json::from_str(out.lines().last().unwrap()).unwrap();
        assert_eq!(last["event"], "summary", "args: {:?}", args);
        assert_eq!(last["total"], 0);
        assert_eq!(last["success"], true);
    }
}

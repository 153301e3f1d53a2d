//! End-to-end tests that run the `deskcalc` binary.

#![allow(clippy::expect_used, clippy::unwrap_used)]

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn deskcalc() -> Command {
    let mut cmd = Command::cargo_bin("deskcalc").expect("binary builds");
    cmd.env_remove("RUST_LOG").env_remove("DESKCALC_HISTORY_LIMIT");
    cmd
}

#[test]
fn test_eval_prints_result() {
    deskcalc()
        .args(["eval", "(1+2)*3"])
        .assert()
        .success()
        .stdout("9\n");
}

#[test]
fn test_eval_leading_minus() {
    deskcalc()
        .args(["eval", "-2**2"])
        .assert()
        .success()
        .stdout("-4\n");
}

#[test]
fn test_eval_divide_by_zero_fails() {
    deskcalc()
        .args(["eval", "1/0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Cannot divide by zero!"));
}

#[test]
fn test_eval_json_error_goes_to_stdout() {
    deskcalc()
        .args(["--format", "json", "eval", "3+*2"])
        .assert()
        .failure()
        .stdout(predicate::str::contains(r#""error":"invalid_expression""#));
}

#[test]
fn test_eval_deep_nesting_fails_cleanly() {
    let expression = format!("{}1{}", "(".repeat(5_000), ")".repeat(5_000));
    deskcalc()
        .args(["eval", &expression])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Invalid Expression!"));
}

#[test]
fn test_session_script_with_long_sign_run() {
    let temp_dir = TempDir::new().unwrap();
    let script = temp_dir.path().join("keys.txt");
    std::fs::write(&script, format!("{}1=\n2+2=\n", "-".repeat(100_000))).unwrap();

    deskcalc()
        .args(["session", "--script"])
        .arg(&script)
        .assert()
        .success()
        .stdout("Error: Invalid Expression!\n> \n  2+2 = 4\n> 4\n");
}

#[test]
fn test_press_renders_history_and_display() {
    deskcalc()
        .args(["press", "2+2", "=", "sqrt"])
        .assert()
        .success()
        .stdout("  2+2 = 4\n> 2.0\n");
}

#[test]
fn test_press_unknown_button_fails() {
    deskcalc()
        .args(["press", "sin"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown button: sin"));
}

#[test]
fn test_buttons_lists_keypad() {
    deskcalc()
        .arg("buttons")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("[ MC ]"))
        .stdout(predicate::str::contains("[ =  ]"));
}

#[test]
fn test_session_reads_stdin() {
    deskcalc()
        .write_stdin("1+1=\n2+2=\nquit\n3+3=\n")
        .assert()
        .success()
        .stdout("  1+1 = 2\n> 2\n  1+1 = 2\n  2+2 = 4\n> 4\n");
}

#[test]
fn test_session_script_with_history_limit() {
    let temp_dir = TempDir::new().unwrap();
    let script = temp_dir.path().join("keys.txt");
    std::fs::write(&script, "c 1+1=\nc 2+2=\n").unwrap();

    deskcalc()
        .args(["--history-limit", "1", "session", "--script"])
        .arg(&script)
        .assert()
        .success()
        .stdout("  1+1 = 2\n> 2\n  2+2 = 4\n> 4\n");
}

#[test]
fn test_zero_history_limit_rejected() {
    deskcalc()
        .args(["--history-limit", "0", "buttons"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("history limit"));
}

//! End-to-end CLI integration tests.

use assert_cmd::Command;
use predicates::prelude::*;

fn fibfactor() -> Command {
    let mut cmd = Command::cargo_bin("fibfactor").expect("binary not found");
    // Keep the self-test timeout case short and the output uncolored.
    cmd.env("NO_COLOR", "1")
        .env_remove("FIBFACTOR_MODULUS")
        .env_remove("FIBFACTOR_BUDGET")
        .arg("--self-test-budget")
        .arg("100ms");
    cmd
}

#[test]
fn help_flag() {
    fibfactor()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Fibonacci"));
}

#[test]
fn version_flag() {
    fibfactor()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("fibfactor"));
}

#[test]
fn three_and_four_narration() {
    fibfactor()
        .args(["3", "4"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Running self-tests..."))
        .stdout(predicate::str::contains("[OK] fibonacci_10"))
        .stdout(predicate::str::contains(
            "All tests passed! Proceeding to computations:",
        ))
        .stdout(predicate::str::contains(
            "Step 1: Adding numbers 3 + 4\nResult: 7\n",
        ))
        .stdout(predicate::str::contains(
            "Step 2: Multiplying numbers 3 * 4\nResult: 12\n",
        ))
        .stdout(predicate::str::contains(
            "Step 3: Multiplying added result by multiplied result\nResult: 84\n",
        ))
        .stdout(predicate::str::contains(
            "Step 4: Computing Fibonacci number at reduced index 84\nResult: 160500643816367088\n",
        ))
        .stdout(predicate::str::contains(
            "Step 5: Finding prime factors of Fibonacci number 160500643816367088\n\
             Result: [2, 2, 2, 2, 3, 3, 13, 29, 83, 211, 281, 421, 1427]\n",
        ));
}

#[test]
fn prompts_when_operands_missing() {
    fibfactor()
        .write_stdin("3\n4\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Enter first number: "))
        .stdout(predicate::str::contains("Enter second number: "))
        .stdout(predicate::str::contains("Result: 84"));
}

#[test]
fn prompts_when_only_one_operand_given() {
    fibfactor()
        .arg("3")
        .write_stdin("2\n5\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Adding numbers 2 + 5"));
}

#[test]
fn non_integer_prompt_input_fails() {
    fibfactor()
        .write_stdin("abc\n4\n")
        .assert()
        .code(4)
        .stderr(predicate::str::contains("not an integer"));
}

#[test]
fn non_integer_argument_fails() {
    fibfactor().args(["three", "4"]).assert().failure();
}

#[test]
fn quiet_hides_self_tests() {
    fibfactor()
        .args(["-q", "3", "4"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Running self-tests").not())
        .stdout(predicate::str::contains("[OK]").not())
        .stdout(predicate::str::contains("Result: 84"));
}

#[test]
fn index_override() {
    fibfactor()
        .args(["--index", "10", "3", "4"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Computing Fibonacci number at index 10\nResult: 55",
        ))
        .stdout(predicate::str::contains("Result: [5, 11]"));
}

#[test]
fn custom_modulus() {
    fibfactor()
        .args(["--modulus", "50", "3", "4"])
        .assert()
        .success()
        .stdout(predicate::str::contains("reduced index 34\nResult: 5702887"));
}

#[test]
fn zero_modulus_is_invalid() {
    fibfactor()
        .args(["--modulus", "0", "3", "4"])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("modulus must be greater than zero"));
}

#[test]
fn memoized_method() {
    fibfactor()
        .args(["--method", "memoized", "3", "4"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Result: 160500643816367088"));
}

#[test]
fn fibonacci_zero_has_no_factors() {
    // (10 + 20) * 200 = 6000 -> index 0 -> F(0) = 0
    fibfactor()
        .args(["10", "20"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Step 5: Finding prime factors of Fibonacci number 0\nResult: []\n",
        ))
        .stdout(predicate::str::contains("Failed gracefully").not());
}

#[test]
fn timeout_fails_gracefully() {
    fibfactor()
        .args(["--index", "999", "--budget", "50ms", "1", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Failed gracefully: factorization taking too long",
        ));
}

#[test]
fn negative_operands() {
    // (-1 + -1) * (-1 * -1) = -2 -> index 998
    fibfactor()
        .args(["--budget", "50ms", "-1", "-1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Result: -2\n"))
        .stdout(predicate::str::contains("reduced index 998"));
}

#[test]
fn json_output() {
    let output = fibfactor()
        .args(["--format", "json", "3", "4"])
        .output()
        .expect("failed to run");
    assert!(output.status.success());
    let json: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("stdout is not JSON");
    assert_eq!(json["sum"], "7");
    assert_eq!(json["product"], "12");
    assert_eq!(json["combined"], "84");
    assert_eq!(json["fib_index"], 84);
    assert_eq!(json["method"], "iterative");
    assert_eq!(json["fib_value"], "160500643816367088");
    assert_eq!(json["factors"]["status"], "factored");
    assert_eq!(json["factors"]["factors"].as_array().map(Vec::len), Some(13));
}

#[test]
fn invalid_budget_rejected() {
    fibfactor()
        .args(["--budget", "soon", "3", "4"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid duration"));
}

#[test]
fn overflowing_budget_rejected() {
    fibfactor()
        .args(["--budget", "307445734561825861m", "3", "4"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("invalid duration"));
}

#[test]
fn bash_completion() {
    fibfactor()
        .args(["--completion", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("fibfactor"));
}

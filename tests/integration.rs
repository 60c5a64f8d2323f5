//! End-to-end tests: a source file is written to a temp directory, run
//! through the real file runner, and its captured value/output checked.

use lea::object::Object;
use lea::runner::{run_file, RunOutcome, RunnerError};
use std::io::Write;
use tempfile::NamedTempFile;

/// Writes `source` to a temp `.lea` file and runs it through the real
/// file runner, returning the final value.
fn run_and_eval(source: &str) -> Object {
    let mut file = NamedTempFile::new().expect("failed to create temp file");
    write!(file, "{source}").expect("failed to write temp file");

    match run_file(file.path()) {
        RunOutcome::Value(value) => value,
        RunOutcome::Failed(err) => panic!("expected a value, got runner failure: {err}"),
    }
}

fn run_and_expect_parse_error(source: &str) -> Vec<String> {
    let mut file = NamedTempFile::new().expect("failed to create temp file");
    write!(file, "{source}").expect("failed to write temp file");

    match run_file(file.path()) {
        RunOutcome::Failed(RunnerError::Parse(errors)) => {
            errors.into_iter().map(|e| e.message).collect()
        }
        other => panic!("expected parse errors, got {:?}", other.describe()),
    }
}

trait DescribeOutcome {
    fn describe(&self) -> &'static str;
}

impl DescribeOutcome for RunOutcome {
    fn describe(&self) -> &'static str {
        match self {
            RunOutcome::Value(_) => "a value",
            RunOutcome::Failed(RunnerError::Io { .. }) => "an io failure",
            RunOutcome::Failed(RunnerError::Parse(_)) => "a parse failure",
        }
    }
}

// ===================
// End-to-end scenarios
// ===================

#[test]
fn test_arithmetic_precedence() {
    assert!(matches!(run_and_eval("5 + 5 * 2"), Object::Integer(15)));
}

#[test]
fn test_factorial_via_recursion() {
    let source = "\
        var factorial = fun(n) {\
            if (n == 0) { 1 } else { n * factorial(n - 1) }\
        };\
        factorial(6);";
    assert!(matches!(run_and_eval(source), Object::Integer(720)));
}

#[test]
fn test_closures_capture_and_reuse_state() {
    let source = "\
        var make_counter = fun() {\
            var count = 0;\
            fun() { count }\
        };\
        var c = make_counter();\
        c();";
    assert!(matches!(run_and_eval(source), Object::Integer(0)));
}

#[test]
fn test_map_and_index_expressions() {
    let source = r#"var book = {"title": "lea", "pages": 42}; book["pages"];"#;
    assert!(matches!(run_and_eval(source), Object::Integer(42)));
}

#[test]
fn test_array_builtins_compose() {
    let source = "push([1, 2, 3], len([1, 2, 3]))[3];";
    assert!(matches!(run_and_eval(source), Object::Integer(3)));
}

#[test]
fn test_empty_program_evaluates_to_null() {
    assert!(matches!(run_and_eval(""), Object::Null));
}

#[test]
fn test_last_statement_value_is_program_result() {
    let source = "var a = 1; var b = 2; a + b;";
    assert!(matches!(run_and_eval(source), Object::Integer(3)));
}

#[test]
fn test_runtime_error_propagates_as_error_object() {
    match run_and_eval("1 + true;") {
        Object::Error(message) => assert_eq!(message, "type mismatch: INTEGER + BOOLEAN"),
        other => panic!("expected an error object, got {other}"),
    }
}

// ===================
// Parse failure tests
// ===================

#[test]
fn test_malformed_var_statement_is_a_parse_error() {
    let errors = run_and_expect_parse_error("var = 5;");
    assert!(!errors.is_empty());
}

#[test]
fn test_missing_closing_paren_is_a_parse_error() {
    let errors = run_and_expect_parse_error("(1 + 2;");
    assert!(!errors.is_empty());
}

// ===================
// Host-boundary tests
// ===================

#[test]
fn test_missing_file_is_an_io_error() {
    match run_file("/nonexistent/path/that/does/not/exist.lea") {
        RunOutcome::Failed(RunnerError::Io { .. }) => {}
        other => panic!("expected an io failure, got {}", other.describe()),
    }
}

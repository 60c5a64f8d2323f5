//! The file runner: reads a source file, runs it once through the
//! pipeline, and maps any failure onto a process exit code.

use crate::environment::Environment;
use crate::evaluator::eval_program;
use crate::object::Object;
use crate::parser::{ParseError, Parser};
use std::fmt;
use std::path::Path;

/// A failure at the host boundary: reading the file, or parsing it.
/// Runtime failures stay in-band as `Object::Error` and are reported by
/// the caller, not wrapped in this type.
#[derive(Debug)]
pub enum RunnerError {
    Io { path: String, source: std::io::Error },
    Parse(Vec<ParseError>),
}

impl fmt::Display for RunnerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RunnerError::Io { path, source } => {
                write!(f, "cant open file error: message: can't open file: {path} ({source})")
            }
            RunnerError::Parse(errors) => {
                for (i, error) in errors.iter().enumerate() {
                    if i > 0 {
                        writeln!(f)?;
                    }
                    write!(f, "parse error: message: {error}")?;
                }
                Ok(())
            }
        }
    }
}

impl std::error::Error for RunnerError {}

/// Exit code convention for [`run_file`]'s caller: `0` success, `1`
/// file-open failure, `2` parse failure, `3` a runtime error reaching
/// the top level.
pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_IO_ERROR: i32 = 1;
pub const EXIT_PARSE_ERROR: i32 = 2;
pub const EXIT_RUNTIME_ERROR: i32 = 3;

/// The outcome of running one source file: either the program's final
/// value, or a host-boundary failure.
pub enum RunOutcome {
    Value(Object),
    Failed(RunnerError),
}

/// Reads `path`, parses it, and evaluates it once against a fresh
/// environment.
pub fn run_file(path: impl AsRef<Path>) -> RunOutcome {
    let path = path.as_ref();
    let source = match std::fs::read_to_string(path) {
        Ok(source) => source,
        Err(source) => {
            return RunOutcome::Failed(RunnerError::Io {
                path: path.display().to_string(),
                source,
            });
        }
    };

    run_source(&source)
}

/// Parses and evaluates `source` directly, without touching the
/// filesystem — the core of [`run_file`], split out so tests and the
/// REPL can drive it without writing a temp file.
pub fn run_source(source: &str) -> RunOutcome {
    let mut parser = Parser::new(source);
    let program = parser.parse_program();

    if !parser.errors.is_empty() {
        return RunOutcome::Failed(RunnerError::Parse(parser.errors));
    }

    let env = Environment::new();
    RunOutcome::Value(eval_program(&program, &env))
}

/// Maps a [`RunOutcome`] onto the exit code convention documented on
/// [`EXIT_SUCCESS`] and friends.
///
/// Prints diagnostics to stderr as a side effect, except for
/// [`RunnerError::Parse`]: the caller is expected to have already
/// rendered those (e.g. via `ariadne`, per the CLI driver) before
/// computing the exit code, so this never prints them a second time.
pub fn exit_code_for(outcome: &RunOutcome) -> i32 {
    match outcome {
        RunOutcome::Value(Object::Error(message)) => {
            eprintln!("error: {message}");
            EXIT_RUNTIME_ERROR
        }
        RunOutcome::Value(_) => EXIT_SUCCESS,
        RunOutcome::Failed(error @ RunnerError::Io { .. }) => {
            eprintln!("{error}");
            EXIT_IO_ERROR
        }
        RunOutcome::Failed(RunnerError::Parse(_)) => EXIT_PARSE_ERROR,
    }
}

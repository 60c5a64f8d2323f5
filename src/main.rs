//! The `lea` command-line driver.
//!
//! # Usage
//!
//! ```text
//! lea                 # start the REPL
//! lea <file>          # run a source file
//! ```

use ariadne::{Color, Label, Report, ReportKind, Source};
use clap::Parser as ClapParser;
use lea::parser::ParseError;
use lea::runner::{self, RunOutcome, RunnerError};

/// Command-line interface for the `lea` interpreter.
#[derive(ClapParser)]
#[command(name = "lea")]
#[command(about = "The lea programming language", long_about = None)]
struct Cli {
    /// Source file to run. Omit to start the REPL.
    file: Option<String>,
}

fn main() {
    let cli = Cli::parse();

    let exit_code = match cli.file {
        None => {
            if let Err(e) = lea::repl::run() {
                eprintln!("error: {e}");
                1
            } else {
                0
            }
        }
        Some(path) => run_file(&path),
    };

    std::process::exit(exit_code);
}

fn run_file(path: &str) -> i32 {
    let outcome = runner::run_file(path);

    if let RunOutcome::Failed(RunnerError::Parse(errors)) = &outcome {
        if let Ok(source) = std::fs::read_to_string(path) {
            report_parse_errors(path, &source, errors);
        } else {
            eprintln!("{}", RunnerError::Parse(errors.clone()));
        }
    }

    runner::exit_code_for(&outcome)
}

/// Renders each parse error with `ariadne`, matching the teacher's
/// `report_error` — falls back to the plain prefixed line if the
/// report fails to print (e.g. output is not a real terminal stream).
fn report_parse_errors(filename: &str, source: &str, errors: &[ParseError]) {
    for error in errors {
        let span = error.span.start..error.span.end;
        let report = Report::build(ReportKind::Error, (filename, span.clone()))
            .with_message(&error.message)
            .with_label(
                Label::new((filename, span))
                    .with_message(&error.message)
                    .with_color(Color::Red),
            )
            .finish()
            .eprint((filename, Source::from(source)));

        if report.is_err() {
            eprintln!("parse error: message: {error}");
        }
    }
}

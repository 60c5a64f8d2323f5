//! The interactive prompt: a persistent environment, one line of input
//! per evaluation, parse errors printed without aborting the session.

use crate::environment::Environment;
use crate::evaluator::eval_program;
use crate::object::Object;
use crate::parser::Parser;
use std::io::{self, BufRead, Write};

const PROMPT: &str = ">> ";

/// Runs the REPL loop against `input`/`output` until `input` reaches
/// EOF. Parse errors are printed to `output` one per line, prefixed
/// `"parse error: "`; a non-void result is printed via its `Display`
/// (`inspect()`-equivalent) form.
pub fn start(input: impl BufRead, mut output: impl Write) -> io::Result<()> {
    let env = Environment::new();

    writeln!(output, "lea -- press ctrl-d to exit")?;

    let mut lines = input.lines();
    loop {
        write!(output, "{PROMPT}")?;
        output.flush()?;

        let Some(line) = lines.next() else {
            return Ok(());
        };
        let line = line?;

        let mut parser = Parser::new(&line);
        let program = parser.parse_program();

        if !parser.errors.is_empty() {
            for error in &parser.errors {
                writeln!(output, "parse error: {error}")?;
            }
            continue;
        }

        match eval_program(&program, &env) {
            Object::Void => {}
            result => writeln!(output, "{result}")?,
        }
    }
}

/// Runs the REPL against the real process stdin/stdout.
pub fn run() -> io::Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    start(stdin.lock(), stdout.lock())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_transcript(input: &str) -> String {
        let mut output = Vec::new();
        start(input.as_bytes(), &mut output).unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn test_prints_integer_result() {
        let transcript = run_transcript("5 + 5\n");
        assert!(transcript.contains("10"));
    }

    #[test]
    fn test_var_statement_prints_nothing_extra() {
        let transcript = run_transcript("var a = 5;\na\n");
        assert!(!transcript.contains("null"));
        assert!(transcript.contains("5"));
    }

    #[test]
    fn test_environment_persists_across_lines() {
        let transcript = run_transcript("var a = 5;\nvar b = a + 1;\nb\n");
        assert!(transcript.contains("6"));
    }

    #[test]
    fn test_parse_error_is_reported_with_prefix() {
        let transcript = run_transcript("var = 5;\n");
        assert!(transcript.contains("parse error: "));
    }

    #[test]
    fn test_parse_error_does_not_abort_session() {
        let transcript = run_transcript("var = 5;\n1 + 1\n");
        assert!(transcript.contains("2"));
    }
}

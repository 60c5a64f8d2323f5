//! lea: a small dynamically-typed, expression-oriented scripting
//! language.
//!
//! # Architecture
//!
//! The interpreter is a straight line pipeline:
//!
//! 1. **Lexing** ([`lexer`]) - converts source text into [`token`]s.
//! 2. **Parsing** ([`parser`]) - a Pratt parser builds an [`ast`] from
//!    the token stream, accumulating [`parser::ParseError`]s rather
//!    than stopping at the first one.
//! 3. **Evaluation** ([`evaluator`]) - a tree-walking evaluator runs
//!    the AST directly against an [`environment::Environment`],
//!    producing [`object::Object`] values.
//!
//! There is no bytecode, no separate type-checking pass, and no
//! compilation step: parsing and evaluation both operate on the same
//! AST, and a program's types are only ever checked by the evaluator as
//! it runs.

pub mod ast;
pub mod environment;
pub mod evaluator;
pub mod lexer;
pub mod object;
pub mod parser;
pub mod repl;
pub mod runner;
pub mod token;

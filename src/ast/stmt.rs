//! Statement nodes.

use super::expr::Expr;
use std::fmt;

/// A top-level or nested statement.
#[derive(Debug, Clone)]
pub enum Stmt {
    Var { name: String, value: Expr },
    Ret(Expr),
    Expression(Expr),
}

/// A brace-delimited sequence of statements; appears only inside `if`
/// and `fun` bodies.
#[derive(Debug, Clone, Default)]
pub struct Block {
    pub statements: Vec<Stmt>,
}

impl fmt::Display for Stmt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stmt::Var { name, value } => write!(f, "var {name} = {value};"),
            Stmt::Ret(value) => write!(f, "ret {value};"),
            Stmt::Expression(expr) => write!(f, "{expr}"),
        }
    }
}

impl fmt::Display for Block {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rendered: Vec<String> = self.statements.iter().map(|s| s.to_string()).collect();
        write!(f, "{}", rendered.join(" "))
    }
}

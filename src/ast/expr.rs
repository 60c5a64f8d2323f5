//! Expression nodes.

use super::stmt::Block;
use std::fmt;

/// An expression node produced by the parser.
#[derive(Debug, Clone)]
pub enum Expr {
    Identifier(String),
    IntegerLiteral(i64),
    StringLiteral(String),
    BooleanLiteral(bool),
    ArrayLiteral(Vec<Expr>),
    MapLiteral(Vec<(Expr, Expr)>),
    Index {
        left: Box<Expr>,
        index: Box<Expr>,
    },
    Prefix {
        operator: String,
        right: Box<Expr>,
    },
    Infix {
        operator: String,
        left: Box<Expr>,
        right: Box<Expr>,
    },
    If {
        condition: Box<Expr>,
        consequence: Block,
        alternative: Option<Block>,
    },
    FunctionLiteral {
        parameters: Vec<String>,
        body: Block,
    },
    Call {
        function: Box<Expr>,
        arguments: Vec<Expr>,
    },
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Identifier(name) => write!(f, "{name}"),
            Expr::IntegerLiteral(value) => write!(f, "{value}"),
            Expr::StringLiteral(value) => write!(f, "{value}"),
            Expr::BooleanLiteral(value) => write!(f, "{value}"),
            Expr::ArrayLiteral(elements) => {
                let rendered: Vec<String> = elements.iter().map(|e| e.to_string()).collect();
                write!(f, "[{}]", rendered.join(", "))
            }
            Expr::MapLiteral(pairs) => {
                let rendered: Vec<String> = pairs
                    .iter()
                    .map(|(k, v)| format!("{k}:{v}"))
                    .collect();
                write!(f, "{{{}}}", rendered.join(", "))
            }
            Expr::Index { left, index } => write!(f, "({left}[{index}])"),
            Expr::Prefix { operator, right } => write!(f, "({operator}{right})"),
            Expr::Infix {
                operator,
                left,
                right,
            } => write!(f, "({left} {operator} {right})"),
            Expr::If {
                condition,
                consequence,
                alternative,
            } => {
                write!(f, "if{condition} {consequence}")?;
                if let Some(alt) = alternative {
                    write!(f, " else {alt}")?;
                }
                Ok(())
            }
            Expr::FunctionLiteral { parameters, body } => {
                write!(f, "fun({}) {body}", parameters.join(", "))
            }
            Expr::Call {
                function,
                arguments,
            } => {
                let rendered: Vec<String> = arguments.iter().map(|a| a.to_string()).collect();
                write!(f, "{function}({})", rendered.join(", "))
            }
        }
    }
}

//! The runtime value model.
//!
//! Objects are shared (`Rc`) and immutable from user code: there is no
//! in-place mutation operator anywhere in the language, so cloning an
//! `Object` is always just bumping a reference count, never a deep copy.

mod hash_key;

pub use hash_key::{HashKey, Hashable};

use crate::ast::Block;
use crate::environment::Environment;
use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt;
use std::rc::Rc;

/// A native function exposed through the builtin registry.
pub type BuiltinFn = fn(&[Object]) -> Object;

/// A tagged runtime value.
///
/// `ReturnValue` and `Error` are control-flow carriers: they are
/// produced internally by the evaluator to short-circuit evaluation and
/// are never something user code constructs directly. `Void` is the
/// non-value produced by a `var` statement — "no observable value", per
/// the language's binding semantics — and exists only so the REPL can
/// tell "evaluated to nothing worth printing" apart from "evaluated to
/// `null`".
#[derive(Clone)]
pub enum Object {
    Null,
    Void,
    Integer(i64),
    Str(Rc<String>),
    Boolean(bool),
    Array(Rc<Vec<Object>>),
    Map(Rc<HashMap<HashKey, (Object, Object)>>),
    ReturnValue(Box<Object>),
    Function {
        parameters: Rc<Vec<String>>,
        body: Rc<Block>,
        env: Rc<RefCell<Environment>>,
    },
    Builtin(BuiltinFn),
    Error(String),
}

impl Object {
    /// The stable type name used in `"unknown operator"` and
    /// `"type mismatch"` diagnostics.
    pub fn type_name(&self) -> &'static str {
        match self {
            Object::Null => "NULL",
            Object::Void => "VOID",
            Object::Integer(_) => "INTEGER",
            Object::Str(_) => "STRING",
            Object::Boolean(_) => "BOOLEAN",
            Object::Array(_) => "ARRAY",
            Object::Map(_) => "MAP",
            Object::ReturnValue(_) => "RETURN_VALUE",
            Object::Function { .. } => "FUNCTION",
            Object::Builtin(_) => "BUILTIN",
            Object::Error(_) => "ERROR",
        }
    }

    /// Truthiness: `null` is false, a boolean is its own value, an
    /// integer is true iff non-zero, everything else is false.
    pub fn is_truthy(&self) -> bool {
        match self {
            Object::Null | Object::Void => false,
            Object::Boolean(b) => *b,
            Object::Integer(n) => *n != 0,
            _ => false,
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Object::Error(_))
    }

    pub fn error(message: impl Into<String>) -> Object {
        Object::Error(message.into())
    }
}

impl fmt::Display for Object {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Object::Null | Object::Void => write!(f, "null"),
            Object::Integer(n) => write!(f, "{n}"),
            Object::Str(s) => write!(f, "{s}"),
            Object::Boolean(b) => write!(f, "{b}"),
            Object::Array(elements) => {
                write!(f, "[")?;
                for element in elements.iter() {
                    write!(f, "{element}, ")?;
                }
                write!(f, "]")
            }
            Object::Map(entries) => {
                write!(f, "[")?;
                for (key, value) in entries.values() {
                    write!(f, "{key}: {value}, ")?;
                }
                write!(f, "]")
            }
            Object::ReturnValue(inner) => write!(f, "{inner}"),
            Object::Function { parameters, body, .. } => {
                write!(f, "fun({}) {{\n{}\n}}", parameters.join(", "), body)
            }
            Object::Builtin(_) => write!(f, "builtin function"),
            Object::Error(message) => write!(f, "error: {message}"),
        }
    }
}

//! The tree-walking evaluator.
//!
//! Evaluation is a plain recursive descent over the AST, threading an
//! [`Environment`] reference and a depth counter through every call. The
//! counter is the only protection against host-stack overflow: there is
//! no explicit CPS transform, so the interpreter runs on the host
//! thread's own stack.

mod builtins;

pub use builtins::lookup_builtin;

use crate::ast::{Block, Expr, Program, Stmt};
use crate::environment::Environment;
use crate::object::{Hashable, Object};
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

/// The recursion ceiling mentioned in the language's design notes: an
/// arbitrary but named bound, chosen so a runaway recursive function
/// fails with a language-level error instead of a host stack overflow.
pub const MAX_EVAL_DEPTH: usize = 7000;

const RECURSION_ERROR: &str = "recursion depth exceeded";

/// Evaluates a whole program against `env`, unwrapping a top-level
/// `ret` exactly once and returning the last statement's value
/// otherwise (or `null` for an empty program).
pub fn eval_program(program: &Program, env: &Rc<RefCell<Environment>>) -> Object {
    let mut result = Object::Null;

    for stmt in &program.statements {
        result = eval_statement(stmt, env, 1);

        match result {
            Object::ReturnValue(value) => return *value,
            Object::Error(_) => return result,
            _ => {}
        }
    }

    result
}

/// Evaluates a block's statements in order *without* unwrapping a
/// `return-wrapper`, so that an enclosing function call can unwrap it
/// exactly once at the function boundary.
fn eval_block(block: &Block, env: &Rc<RefCell<Environment>>, depth: usize) -> Object {
    let mut result = Object::Null;

    for stmt in &block.statements {
        result = eval_statement(stmt, env, depth);

        if matches!(result, Object::ReturnValue(_) | Object::Error(_)) {
            return result;
        }
    }

    result
}

fn eval_statement(stmt: &Stmt, env: &Rc<RefCell<Environment>>, depth: usize) -> Object {
    match stmt {
        Stmt::Var { name, value } => {
            let value = eval_expr(value, env, depth + 1);
            if value.is_error() {
                return value;
            }
            env.borrow_mut().set(name.clone(), value);
            Object::Void
        }
        Stmt::Ret(value) => {
            let value = eval_expr(value, env, depth + 1);
            if value.is_error() {
                value
            } else {
                Object::ReturnValue(Box::new(value))
            }
        }
        Stmt::Expression(expr) => eval_expr(expr, env, depth + 1),
    }
}

fn eval_expr(expr: &Expr, env: &Rc<RefCell<Environment>>, depth: usize) -> Object {
    if depth > MAX_EVAL_DEPTH {
        return Object::error(RECURSION_ERROR);
    }

    match expr {
        Expr::IntegerLiteral(value) => Object::Integer(*value),
        Expr::StringLiteral(value) => Object::Str(Rc::new(value.clone())),
        Expr::BooleanLiteral(value) => Object::Boolean(*value),
        Expr::Identifier(name) => eval_identifier(name, env),
        Expr::Prefix { operator, right } => {
            let right = eval_expr(right, env, depth + 1);
            if right.is_error() {
                return right;
            }
            eval_prefix_expression(operator, right)
        }
        Expr::Infix {
            operator,
            left,
            right,
        } => {
            let left = eval_expr(left, env, depth + 1);
            if left.is_error() {
                return left;
            }
            let right = eval_expr(right, env, depth + 1);
            if right.is_error() {
                return right;
            }
            eval_infix_expression(operator, left, right)
        }
        Expr::If {
            condition,
            consequence,
            alternative,
        } => eval_if_expression(condition, consequence, alternative.as_ref(), env, depth),
        Expr::ArrayLiteral(elements) => eval_array_literal(elements, env, depth),
        Expr::MapLiteral(pairs) => eval_map_literal(pairs, env, depth),
        Expr::Index { left, index } => eval_index_expression(left, index, env, depth),
        Expr::FunctionLiteral { parameters, body } => Object::Function {
            parameters: Rc::new(parameters.clone()),
            body: Rc::new(body.clone()),
            env: env.clone(),
        },
        Expr::Call {
            function,
            arguments,
        } => eval_call_expression(function, arguments, env, depth),
    }
}

fn eval_identifier(name: &str, env: &Rc<RefCell<Environment>>) -> Object {
    if let Some(value) = env.borrow().get(name) {
        return value;
    }
    if let Some(builtin) = lookup_builtin(name) {
        return Object::Builtin(builtin);
    }
    Object::error(format!("identifier not found: {name}"))
}

fn eval_prefix_expression(operator: &str, right: Object) -> Object {
    match operator {
        "!" => Object::Boolean(!right.is_truthy()),
        "-" => match right {
            Object::Integer(n) => Object::Integer(n.wrapping_neg()),
            other => Object::error(format!("unknown operator: -{}", other.type_name())),
        },
        other => Object::error(format!(
            "unknown operator: {other}{}",
            right.type_name()
        )),
    }
}

fn eval_infix_expression(operator: &str, left: Object, right: Object) -> Object {
    match (&left, &right) {
        (Object::Integer(l), Object::Integer(r)) => eval_integer_infix(operator, *l, *r),
        (Object::Str(l), Object::Str(r)) => eval_string_infix(operator, l, r),
        (Object::Boolean(l), Object::Boolean(r)) => eval_boolean_infix(operator, *l, *r),
        _ if left.type_name() != right.type_name() => Object::error(format!(
            "type mismatch: {} {operator} {}",
            left.type_name(),
            right.type_name()
        )),
        _ => Object::error(format!(
            "unknown operator: {} {operator} {}",
            left.type_name(),
            right.type_name()
        )),
    }
}

fn eval_integer_infix(operator: &str, left: i64, right: i64) -> Object {
    match operator {
        "+" => Object::Integer(left.wrapping_add(right)),
        "-" => Object::Integer(left.wrapping_sub(right)),
        "*" => Object::Integer(left.wrapping_mul(right)),
        "/" => {
            if right == 0 {
                Object::error("division by zero")
            } else {
                Object::Integer(left.wrapping_div(right))
            }
        }
        "<" => Object::Boolean(left < right),
        ">" => Object::Boolean(left > right),
        "==" => Object::Boolean(left == right),
        "!=" => Object::Boolean(left != right),
        other => Object::error(format!("unknown operator: INTEGER {other} INTEGER")),
    }
}

fn eval_string_infix(operator: &str, left: &str, right: &str) -> Object {
    match operator {
        "+" => Object::Str(Rc::new(format!("{left}{right}"))),
        other => Object::error(format!("unknown operator: STRING {other} STRING")),
    }
}

/// Boolean infix operators other than `==`/`!=` are an error: the
/// spec's own design notes flag the alternative (returning `null`) as
/// less consistent, and leave the choice to the implementer.
fn eval_boolean_infix(operator: &str, left: bool, right: bool) -> Object {
    match operator {
        "==" => Object::Boolean(left == right),
        "!=" => Object::Boolean(left != right),
        other => Object::error(format!("unknown operator: BOOLEAN {other} BOOLEAN")),
    }
}

fn eval_if_expression(
    condition: &Expr,
    consequence: &Block,
    alternative: Option<&Block>,
    env: &Rc<RefCell<Environment>>,
    depth: usize,
) -> Object {
    let condition = eval_expr(condition, env, depth + 1);
    if condition.is_error() {
        return condition;
    }

    if condition.is_truthy() {
        eval_block(consequence, env, depth + 1)
    } else if let Some(alternative) = alternative {
        eval_block(alternative, env, depth + 1)
    } else {
        Object::Null
    }
}

fn eval_array_literal(elements: &[Expr], env: &Rc<RefCell<Environment>>, depth: usize) -> Object {
    match eval_expressions(elements, env, depth) {
        Ok(values) => Object::Array(Rc::new(values)),
        Err(error) => error,
    }
}

fn eval_map_literal(
    pairs: &[(Expr, Expr)],
    env: &Rc<RefCell<Environment>>,
    depth: usize,
) -> Object {
    let mut entries = HashMap::with_capacity(pairs.len());

    for (key_expr, value_expr) in pairs {
        let key = eval_expr(key_expr, env, depth + 1);
        if key.is_error() {
            return key;
        }
        let Some(hash_key) = key.hash_key() else {
            return Object::error(format!("type {} not hashable", key.type_name()));
        };

        let value = eval_expr(value_expr, env, depth + 1);
        if value.is_error() {
            return value;
        }

        entries.insert(hash_key, (key, value));
    }

    Object::Map(Rc::new(entries))
}

fn eval_index_expression(
    left: &Expr,
    index: &Expr,
    env: &Rc<RefCell<Environment>>,
    depth: usize,
) -> Object {
    let left = eval_expr(left, env, depth + 1);
    if left.is_error() {
        return left;
    }
    let index = eval_expr(index, env, depth + 1);
    if index.is_error() {
        return index;
    }

    match (&left, &index) {
        (Object::Array(elements), Object::Integer(i)) => {
            if *i < 0 || *i as usize >= elements.len() {
                Object::Null
            } else {
                elements[*i as usize].clone()
            }
        }
        (Object::Map(entries), key) => match key.hash_key() {
            Some(hash_key) => entries
                .get(&hash_key)
                .map(|(_, value)| value.clone())
                .unwrap_or(Object::Null),
            None => Object::error(format!("type {} not hashable", key.type_name())),
        },
        (other, _) => Object::error(format!(
            "index operator not supported for: {}",
            other.type_name()
        )),
    }
}

fn eval_call_expression(
    function: &Expr,
    arguments: &[Expr],
    env: &Rc<RefCell<Environment>>,
    depth: usize,
) -> Object {
    let function = eval_expr(function, env, depth + 1);
    if function.is_error() {
        return function;
    }

    let arguments = match eval_expressions(arguments, env, depth) {
        Ok(values) => values,
        Err(error) => return error,
    };

    apply_function(function, &arguments, depth)
}

fn eval_expressions(
    exprs: &[Expr],
    env: &Rc<RefCell<Environment>>,
    depth: usize,
) -> Result<Vec<Object>, Object> {
    let mut values = Vec::with_capacity(exprs.len());
    for expr in exprs {
        let value = eval_expr(expr, env, depth + 1);
        if value.is_error() {
            return Err(value);
        }
        values.push(value);
    }
    Ok(values)
}

fn apply_function(function: Object, arguments: &[Object], depth: usize) -> Object {
    match function {
        Object::Function {
            parameters,
            body,
            env,
        } => {
            if parameters.len() != arguments.len() {
                return Object::error(format!(
                    "wrong number of arguments: expected {}, got {}",
                    parameters.len(),
                    arguments.len()
                ));
            }

            let call_env = Environment::enclosed(env);
            for (name, value) in parameters.iter().zip(arguments.iter()) {
                call_env.borrow_mut().set(name.clone(), value.clone());
            }

            match eval_block(&body, &call_env, depth + 1) {
                Object::ReturnValue(value) => *value,
                other => other,
            }
        }
        Object::Builtin(builtin) => builtin(arguments),
        other => Object::error(format!(
            "expression is not a function: {}",
            other.type_name()
        )),
    }
}

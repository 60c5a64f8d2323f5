use super::*;

#[test]
fn test_var_statement_to_string() {
    let stmt = Stmt::Var {
        name: "x".to_string(),
        value: Expr::IntegerLiteral(5),
    };
    assert_eq!(stmt.to_string(), "var x = 5;");
}

#[test]
fn test_ret_statement_to_string() {
    let stmt = Stmt::Ret(Expr::IntegerLiteral(10));
    assert_eq!(stmt.to_string(), "ret 10;");
}

#[test]
fn test_prefix_expr_to_string() {
    let expr = Expr::Prefix {
        operator: "-".to_string(),
        right: Box::new(Expr::IntegerLiteral(5)),
    };
    assert_eq!(expr.to_string(), "(-5)");
}

#[test]
fn test_infix_expr_to_string() {
    let expr = Expr::Infix {
        operator: "+".to_string(),
        left: Box::new(Expr::IntegerLiteral(1)),
        right: Box::new(Expr::IntegerLiteral(2)),
    };
    assert_eq!(expr.to_string(), "(1 + 2)");
}

#[test]
fn test_index_expr_to_string() {
    let expr = Expr::Index {
        left: Box::new(Expr::Identifier("a".to_string())),
        index: Box::new(Expr::IntegerLiteral(0)),
    };
    assert_eq!(expr.to_string(), "(a[0])");
}

#[test]
fn test_block_joins_statements_with_space() {
    let block = Block {
        statements: vec![
            Stmt::Expression(Expr::IntegerLiteral(1)),
            Stmt::Expression(Expr::IntegerLiteral(2)),
        ],
    };
    assert_eq!(block.to_string(), "1 2");
}

#[test]
fn test_program_concatenates_without_separators() {
    let program = Program {
        statements: vec![
            Stmt::Var {
                name: "x".to_string(),
                value: Expr::IntegerLiteral(5),
            },
            Stmt::Ret(Expr::Identifier("x".to_string())),
        ],
    };
    assert_eq!(program.to_string(), "var x = 5;ret x;");
}

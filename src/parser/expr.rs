//! Expression parsing: the Pratt prefix/infix dispatch, plus the
//! productions that only ever appear inside expressions (blocks, `if`,
//! function literals, call/array/map literals).

use super::{Parser, ParseError, Precedence};
use crate::ast::{Block, Expr};
use crate::token::TokenKind;

impl<'a> Parser<'a> {
    /// `parse_expression(min_precedence)`: looks up a prefix handler for
    /// `current`, runs it, then repeatedly looks up an infix handler for
    /// `peek` while `peek` is not `;` and `min_precedence <
    /// precedence(peek)`.
    pub(super) fn parse_expression(&mut self, min_precedence: Precedence) -> Option<Expr> {
        let mut left = self.parse_prefix()?;

        while !matches!(self.peek_kind(), TokenKind::Semicolon)
            && min_precedence < precedence_of(self.peek_kind())
        {
            if !has_infix(self.peek_kind()) {
                return Some(left);
            }
            self.advance();
            left = self.parse_infix(left)?;
        }

        Some(left)
    }

    fn parse_prefix(&mut self) -> Option<Expr> {
        match self.current_kind().clone() {
            TokenKind::Identifier(name) => Some(Expr::Identifier(name)),
            TokenKind::Integer(literal) => match literal.parse::<i64>() {
                Ok(value) => Some(Expr::IntegerLiteral(value)),
                Err(_) => {
                    self.errors.push(ParseError::new(
                        format!("could not parse {literal:?} as integer"),
                        self.current.span,
                    ));
                    None
                }
            },
            TokenKind::String(value) => Some(Expr::StringLiteral(value)),
            TokenKind::True => Some(Expr::BooleanLiteral(true)),
            TokenKind::False => Some(Expr::BooleanLiteral(false)),
            TokenKind::Bang | TokenKind::Minus => self.parse_prefix_expression(),
            TokenKind::LParen => self.parse_grouped_expression(),
            TokenKind::LBracket => self.parse_array_literal(),
            TokenKind::LBrace => self.parse_map_literal(),
            TokenKind::If => self.parse_if_expression(),
            TokenKind::Fun => self.parse_function_literal(),
            other => {
                self.errors.push(ParseError::new(
                    format!("no prefix parse function found for {other:?}"),
                    self.current.span,
                ));
                None
            }
        }
    }

    fn parse_infix(&mut self, left: Expr) -> Option<Expr> {
        match self.current_kind() {
            TokenKind::LParen => self.parse_call_expression(left),
            TokenKind::LBracket => self.parse_index_expression(left),
            _ => self.parse_infix_expression(left),
        }
    }

    fn parse_prefix_expression(&mut self) -> Option<Expr> {
        let operator = self.current_kind().literal();
        self.advance();
        let right = self.parse_expression(Precedence::Prefix)?;
        Some(Expr::Prefix {
            operator,
            right: Box::new(right),
        })
    }

    fn parse_infix_expression(&mut self, left: Expr) -> Option<Expr> {
        let operator = self.current_kind().literal();
        let precedence = precedence_of(self.current_kind());
        self.advance();
        let right = self.parse_expression(precedence)?;
        Some(Expr::Infix {
            operator,
            left: Box::new(left),
            right: Box::new(right),
        })
    }

    fn parse_grouped_expression(&mut self) -> Option<Expr> {
        self.advance();
        let expr = self.parse_expression(Precedence::Lowest)?;
        if !self.expect_peek(TokenKind::RParen) {
            return None;
        }
        Some(expr)
    }

    /// `[ expr (',' expr)* ]`.
    fn parse_array_literal(&mut self) -> Option<Expr> {
        let elements = self.parse_expression_list(TokenKind::RBracket)?;
        Some(Expr::ArrayLiteral(elements))
    }

    /// `{ [ key ':' value (',' key ':' value)* ] }`.
    fn parse_map_literal(&mut self) -> Option<Expr> {
        let mut pairs = Vec::new();

        while !matches!(self.peek_kind(), TokenKind::RBrace) {
            self.advance();
            let key = self.parse_expression(Precedence::Lowest)?;

            if !self.expect_peek(TokenKind::Colon) {
                return None;
            }
            self.advance();
            let value = self.parse_expression(Precedence::Lowest)?;
            pairs.push((key, value));

            if !matches!(self.peek_kind(), TokenKind::RBrace) && !self.expect_peek(TokenKind::Comma) {
                return None;
            }
        }

        if !self.expect_peek(TokenKind::RBrace) {
            return None;
        }
        Some(Expr::MapLiteral(pairs))
    }

    /// `if '(' expr ')' '{' block '}' [ else '{' block '}' ]`.
    fn parse_if_expression(&mut self) -> Option<Expr> {
        if !self.expect_peek(TokenKind::LParen) {
            return None;
        }
        self.advance();
        let condition = self.parse_expression(Precedence::Lowest)?;

        if !self.expect_peek(TokenKind::RParen) {
            return None;
        }
        if !self.expect_peek(TokenKind::LBrace) {
            return None;
        }
        let consequence = self.parse_block()?;

        let alternative = if matches!(self.peek_kind(), TokenKind::Else) {
            self.advance();
            if !self.expect_peek(TokenKind::LBrace) {
                return None;
            }
            Some(self.parse_block()?)
        } else {
            None
        };

        Some(Expr::If {
            condition: Box::new(condition),
            consequence,
            alternative,
        })
    }

    /// `fun '(' [params] ')' '{' block '}'`.
    fn parse_function_literal(&mut self) -> Option<Expr> {
        if !self.expect_peek(TokenKind::LParen) {
            return None;
        }
        let parameters = self.parse_function_parameters()?;

        if !self.expect_peek(TokenKind::LBrace) {
            return None;
        }
        let body = self.parse_block()?;

        Some(Expr::FunctionLiteral { parameters, body })
    }

    fn parse_function_parameters(&mut self) -> Option<Vec<String>> {
        let mut parameters = Vec::new();

        if matches!(self.peek_kind(), TokenKind::RParen) {
            self.advance();
            return Some(parameters);
        }

        self.advance();
        loop {
            match self.current_kind() {
                TokenKind::Identifier(name) => parameters.push(name.clone()),
                other => {
                    self.errors.push(ParseError::new(
                        format!("expected identifier in parameter list, got {other:?}"),
                        self.current.span,
                    ));
                    return None;
                }
            }

            if matches!(self.peek_kind(), TokenKind::Comma) {
                self.advance();
                self.advance();
            } else {
                break;
            }
        }

        if !self.expect_peek(TokenKind::RParen) {
            return None;
        }
        Some(parameters)
    }

    fn parse_call_expression(&mut self, function: Expr) -> Option<Expr> {
        let arguments = self.parse_expression_list(TokenKind::RParen)?;
        Some(Expr::Call {
            function: Box::new(function),
            arguments,
        })
    }

    fn parse_index_expression(&mut self, left: Expr) -> Option<Expr> {
        self.advance();
        let index = self.parse_expression(Precedence::Lowest)?;
        if !self.expect_peek(TokenKind::RBracket) {
            return None;
        }
        Some(Expr::Index {
            left: Box::new(left),
            index: Box::new(index),
        })
    }

    /// Comma-separated expressions terminated by `terminator`; empty if
    /// the next token is already the terminator. Used for call
    /// arguments and array elements.
    fn parse_expression_list(&mut self, terminator: TokenKind) -> Option<Vec<Expr>> {
        let mut list = Vec::new();

        if std::mem::discriminant(self.peek_kind()) == std::mem::discriminant(&terminator) {
            self.advance();
            return Some(list);
        }

        self.advance();
        list.push(self.parse_expression(Precedence::Lowest)?);

        while matches!(self.peek_kind(), TokenKind::Comma) {
            self.advance();
            self.advance();
            list.push(self.parse_expression(Precedence::Lowest)?);
        }

        if !self.expect_peek(terminator) {
            return None;
        }
        Some(list)
    }

    pub(super) fn parse_block(&mut self) -> Option<Block> {
        let mut statements = Vec::new();
        self.advance();

        while !matches!(self.current_kind(), TokenKind::RBrace | TokenKind::Eof) {
            if let Some(stmt) = self.parse_statement() {
                statements.push(stmt);
            }
            self.advance();
        }

        Some(Block { statements })
    }
}

/// Infix handlers exist for every token kind that carries a binding
/// power above [`Precedence::Lowest`].
fn has_infix(kind: &TokenKind) -> bool {
    !matches!(precedence_of(kind), Precedence::Lowest)
}

fn precedence_of(kind: &TokenKind) -> Precedence {
    super::precedence_of(kind)
}

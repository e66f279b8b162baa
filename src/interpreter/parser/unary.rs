use std::iter::Peekable;

use crate::{
    ast::{Expr, UnaryOperator},
    error::ParseError,
    interpreter::{
        lexer::{Token, TokenKind},
        parser::core::{ParseResult, expect, parse_expression},
    },
};

/// Parses a unary expression.
///
/// Supports the prefix signs:
/// - `-` (numeric negation)
/// - `+` (identity)
///
/// Unary operators are right-associative, so an input like `--x` is parsed
/// as `-(-x)`. If no sign is present, the function delegates to the factor
/// level.
///
/// Grammar:
/// ```text
///     unary := ("+" | "-") unary
///            | factor
/// ```
///
/// # Parameters
/// - `tokens`: Token iterator with lookahead.
///
/// # Returns
/// An [`Expr::UnaryOp`] or a factor expression.
pub(crate) fn parse_unary<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token> + Clone
{
    match tokens.peek().map(|token| token.kind) {
        Some(TokenKind::Plus) => {
            tokens.next();
            let expr = parse_unary(tokens)?;
            Ok(Expr::UnaryOp { op:   UnaryOperator::Plus,
                               expr: Box::new(expr), })
        },
        Some(TokenKind::Minus) => {
            tokens.next();
            let expr = parse_unary(tokens)?;
            Ok(Expr::UnaryOp { op:   UnaryOperator::Minus,
                               expr: Box::new(expr), })
        },
        _ => parse_factor(tokens),
    }
}

/// Parses a factor, the atomic level of the expression grammar.
///
/// Factors are:
/// - numeric literals
/// - variable references
/// - parenthesized expressions
///
/// Grammar:
/// ```text
///     factor := NUMBER
///             | IDENTIFIER
///             | "(" expression ")"
/// ```
///
/// # Parameters
/// - `tokens`: Token iterator positioned at the start of a factor.
///
/// # Returns
/// The parsed [`Expr`], or a `ParseError` if the current token cannot start
/// a factor.
fn parse_factor<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token> + Clone
{
    let Some(&token) = tokens.peek() else {
        return Err(ParseError::UnexpectedEndOfInput);
    };

    match token.kind {
        TokenKind::Number => {
            tokens.next();
            match token.text.parse() {
                Ok(value) => Ok(Expr::Number(value)),
                Err(_) => Err(ParseError::InvalidNumber { text:   token.text.clone(),
                                                          line:   token.line,
                                                          column: token.column, }),
            }
        },

        TokenKind::Identifier => {
            tokens.next();
            Ok(Expr::Variable(token.text.clone()))
        },

        TokenKind::LParen => {
            tokens.next();
            let expr = parse_expression(tokens)?;
            expect(tokens, TokenKind::RParen)?;
            Ok(expr)
        },

        _ => Err(ParseError::UnexpectedToken { found:  token.kind,
                                               line:   token.line,
                                               column: token.column, }),
    }
}

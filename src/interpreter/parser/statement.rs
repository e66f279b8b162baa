use std::iter::Peekable;

use crate::{
    ast::Statement,
    interpreter::{
        lexer::{Token, TokenKind},
        parser::core::{ParseResult, expect, parse_expression},
    },
};

/// Parses a single statement.
///
/// A statement may be one of:
/// - a read statement (`leia(x)`).
/// - a print statement (`imprima(expr)`).
/// - an assignment (`x = expr`).
/// - an expression used as a statement.
///
/// The keyword statements are recognized by their leading token. An
/// assignment is recognized by a two-token lookahead, identifier followed
/// by `=`, that consumes nothing when it does not match, so a leading
/// identifier can still begin an expression statement such as `x + 1`.
///
/// # Parameters
/// - `tokens`: Token iterator with lookahead.
///
/// # Returns
/// A parsed [`Statement`] node.
pub fn parse_statement<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Statement>
    where I: Iterator<Item = &'a Token> + Clone
{
    match tokens.peek().map(|token| token.kind) {
        Some(TokenKind::Read) => parse_read(tokens),
        Some(TokenKind::Print) => parse_print(tokens),
        _ => {
            if let Some(statement) = parse_assignment(tokens)? {
                return Ok(statement);
            }

            let expr = parse_expression(tokens)?;
            Ok(Statement::Expression { expr })
        },
    }
}

/// Parses a read statement.
///
/// The form is `leia "(" IDENTIFIER ")"`: the keyword has already been
/// recognized by the caller, and the parenthesized variable name follows.
///
/// # Errors
/// Returns a `ParseError` if a parenthesis or the variable name is missing.
fn parse_read<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Statement>
    where I: Iterator<Item = &'a Token> + Clone
{
    expect(tokens, TokenKind::Read)?;
    expect(tokens, TokenKind::LParen)?;
    let name = expect(tokens, TokenKind::Identifier)?.text.clone();
    expect(tokens, TokenKind::RParen)?;

    Ok(Statement::Read { name })
}

/// Parses a print statement.
///
/// The form is `imprima "(" expression ")"`; any expression can be printed,
/// not just a variable.
///
/// # Errors
/// Returns a `ParseError` if a parenthesis is missing or the inner
/// expression fails to parse.
fn parse_print<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Statement>
    where I: Iterator<Item = &'a Token> + Clone
{
    expect(tokens, TokenKind::Print)?;
    expect(tokens, TokenKind::LParen)?;
    let expr = parse_expression(tokens)?;
    expect(tokens, TokenKind::RParen)?;

    Ok(Statement::Print { expr })
}

/// Parses an assignment statement if one begins at the current position.
///
/// The function performs a limited lookahead on a cloned iterator: if the
/// next token is an identifier and the one after it is `=`, an assignment
/// is parsed. Otherwise `Ok(None)` is returned and no input is consumed.
///
/// # Parameters
/// - `tokens`: Token iterator positioned at a potential identifier.
///
/// # Returns
/// - `Ok(Some(Statement::Assignment))` if an assignment is parsed,
/// - `Ok(None)` if no assignment is present.
///
/// # Errors
/// Returns a `ParseError` if the assigned expression fails to parse.
fn parse_assignment<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Option<Statement>>
    where I: Iterator<Item = &'a Token> + Clone
{
    if let Some(token) = tokens.peek()
       && token.kind == TokenKind::Identifier
    {
        let mut lookahead = tokens.clone();
        lookahead.next();

        if let Some(next) = lookahead.peek()
           && next.kind == TokenKind::Equals
        {
            let name = expect(tokens, TokenKind::Identifier)?.text.clone();
            expect(tokens, TokenKind::Equals)?;
            let value = parse_expression(tokens)?;

            return Ok(Some(Statement::Assignment { name, value }));
        }
    }

    Ok(None)
}

use std::iter::Peekable;

use crate::{
    ast::{Expr, Program},
    error::ParseError,
    interpreter::{
        lexer::{Token, TokenKind},
        parser::{binary::parse_additive, statement::parse_statement},
    },
};

/// Result type used by the parser.
pub type ParseResult<T> = Result<T, ParseError>;

/// Parses a complete token sequence into a [`Program`].
///
/// This is the parser's entry point. Statements are collected until the
/// end-of-file token; after each statement, at most one `;` is consumed,
/// followed by any run of newlines. No separator is required between
/// statements: the grammar alone decides where one statement ends and the
/// next begins.
///
/// Grammar: `program := newline* (statement (";")? newline*)*`
///
/// # Parameters
/// - `tokens`: The token sequence produced by the lexer, ending in `Eof`.
///
/// # Returns
/// The parsed program with its statements in source order.
///
/// # Errors
/// Propagates the first `ParseError` raised while parsing a statement.
///
/// # Example
/// ```
/// use contar::interpreter::{lexer::tokenize, parser::core::parse};
///
/// let tokens = tokenize("x = 2 + 2; imprima(x)").unwrap();
/// let program = parse(&tokens).unwrap();
/// assert_eq!(program.statements.len(), 2);
/// ```
pub fn parse(tokens: &[Token]) -> ParseResult<Program> {
    let mut iter = tokens.iter().peekable();
    let mut statements = Vec::new();

    skip_newlines(&mut iter);
    while let Some(token) = iter.peek()
          && token.kind != TokenKind::Eof
    {
        statements.push(parse_statement(&mut iter)?);

        if let Some(token) = iter.peek()
           && token.kind == TokenKind::Semicolon
        {
            iter.next();
        }
        skip_newlines(&mut iter);
    }

    Ok(Program { statements })
}

/// Parses a full expression.
///
/// This is the entry point for expression parsing. It begins at the
/// lowest-precedence level, addition and subtraction, and recursively
/// descends through the precedence hierarchy.
///
/// Grammar: `expression := term (("+" | "-") term)*`
///
/// # Parameters
/// - `tokens`: Token iterator with lookahead.
///
/// # Returns
/// The parsed expression node.
pub fn parse_expression<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token> + Clone
{
    parse_additive(tokens)
}

/// Consumes the next token, requiring a specific kind.
///
/// # Parameters
/// - `tokens`: Token iterator to advance by one.
/// - `expected`: The kind the grammar requires at this position.
///
/// # Returns
/// The consumed token when it matches.
///
/// # Errors
/// `ExpectedToken` when the next token has a different kind, or
/// `UnexpectedEndOfInput` when the sequence is exhausted.
pub(in crate::interpreter::parser) fn expect<'a, I>(tokens: &mut Peekable<I>,
                                                    expected: TokenKind)
                                                    -> ParseResult<&'a Token>
    where I: Iterator<Item = &'a Token>
{
    match tokens.next() {
        Some(token) if token.kind == expected => Ok(token),

        Some(token) => Err(ParseError::ExpectedToken { expected,
                                                       found: token.kind,
                                                       line: token.line,
                                                       column: token.column, }),

        None => Err(ParseError::UnexpectedEndOfInput),
    }
}

/// Skips a run of newline tokens between statements.
fn skip_newlines<'a, I>(tokens: &mut Peekable<I>)
    where I: Iterator<Item = &'a Token>
{
    while let Some(token) = tokens.peek()
          && token.kind == TokenKind::Newline
    {
        tokens.next();
    }
}

use crate::interpreter::lexer::TokenKind;

#[derive(Debug)]
/// Represents all errors that can occur during parsing.
pub enum ParseError {
    /// A specific token was required but something else was found.
    ExpectedToken {
        /// The token kind the grammar required.
        expected: TokenKind,
        /// The token kind actually encountered.
        found:    TokenKind,
        /// The source line where the error occurred.
        line:     usize,
        /// The source column where the error occurred.
        column:   usize,
    },
    /// Found a token that cannot start the construct being parsed.
    UnexpectedToken {
        /// The token kind encountered.
        found:  TokenKind,
        /// The source line where the error occurred.
        line:   usize,
        /// The source column where the error occurred.
        column: usize,
    },
    /// A number token's text could not be converted to a value.
    InvalidNumber {
        /// The literal text of the token.
        text:   String,
        /// The source line where the error occurred.
        line:   usize,
        /// The source column where the error occurred.
        column: usize,
    },
    /// Reached the end of the token sequence unexpectedly.
    UnexpectedEndOfInput,
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ExpectedToken { expected,
                                  found,
                                  line,
                                  column, } => {
                write!(f,
                       "Syntax error on line {line}, column {column}: Expected {expected}, found {found}.")
            },

            Self::UnexpectedToken { found, line, column } => {
                write!(f,
                       "Syntax error on line {line}, column {column}: Unexpected token: {found}.")
            },

            Self::InvalidNumber { text, line, column } => {
                write!(f,
                       "Syntax error on line {line}, column {column}: Invalid number literal: '{text}'.")
            },

            Self::UnexpectedEndOfInput => write!(f, "Syntax error: Unexpected end of input."),
        }
    }
}

impl std::error::Error for ParseError {}

/// Raw classification of a lexical failure.
///
/// This is the error type the generated lexer itself produces, before any
/// position information is attached. `logos` requires the type to be
/// `Default`: the default stands for the catch-all invalid-character case,
/// while the malformed-number case is raised explicitly by a number-pattern
/// callback. `tokenize` converts both into a position-carrying [`LexError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LexErrorKind {
    /// A character that starts no token.
    #[default]
    InvalidCharacter,
    /// Digits followed by a decimal point with no fractional digits.
    MalformedNumber,
}

#[derive(Debug)]
/// Represents all errors that can occur during lexing.
pub enum LexError {
    /// Found a character that starts no token.
    InvalidCharacter {
        /// The offending character.
        character: char,
        /// The source line where the error occurred.
        line:      usize,
        /// The source column where the error occurred.
        column:    usize,
    },
    /// A number literal ended in a decimal point with no fractional digits,
    /// such as `12.`.
    MalformedNumber {
        /// The source line where the error occurred.
        line:   usize,
        /// The source column where the error occurred.
        column: usize,
    },
}

impl std::fmt::Display for LexError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidCharacter { character,
                                     line,
                                     column, } => {
                write!(f,
                       "Lexical error on line {line}, column {column}: Invalid character: '{character}'.")
            },

            Self::MalformedNumber { line, column } => {
                write!(f,
                       "Lexical error on line {line}, column {column}: Malformed decimal number.")
            },
        }
    }
}

impl std::error::Error for LexError {}

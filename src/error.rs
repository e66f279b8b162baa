/// Lexical errors.
///
/// Defines the error types that can occur while the lexer turns source text
/// into tokens: invalid characters and malformed number literals. Every
/// lexical error carries the line and column of the offending lexeme.
pub mod lex_error;
/// Parsing errors.
///
/// Defines all error types that can occur while building the syntax tree
/// from tokens. Parse errors include unexpected tokens, missing expected
/// tokens, invalid literals, and any other issues detected before
/// evaluation.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised during evaluation and
/// execution. Runtime errors include things like division by zero, unknown
/// variables, and failed reads from the console.
pub mod runtime_error;

pub use lex_error::LexError;
pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;

#[derive(Debug)]
/// Any failure the pipeline can report, tagged by the stage that raised it.
///
/// The three stages fail with their own structured error types; the driver
/// collapses them into this enum so callers handle a single error surface.
pub enum Error {
    /// The lexer rejected the source text.
    Lex(LexError),
    /// The parser rejected the token sequence.
    Parse(ParseError),
    /// Evaluation of the program failed.
    Runtime(RuntimeError),
}

impl From<LexError> for Error {
    fn from(error: LexError) -> Self {
        Self::Lex(error)
    }
}

impl From<ParseError> for Error {
    fn from(error: ParseError) -> Self {
        Self::Parse(error)
    }
}

impl From<RuntimeError> for Error {
    fn from(error: RuntimeError) -> Self {
        Self::Runtime(error)
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Lex(error) => write!(f, "{error}"),
            Self::Parse(error) => write!(f, "{error}"),
            Self::Runtime(error) => write!(f, "{error}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Lex(error) => Some(error),
            Self::Parse(error) => Some(error),
            Self::Runtime(error) => Some(error),
        }
    }
}

use logos::Logos;

use crate::error::{LexError, lex_error::LexErrorKind};

/// Result type used by the lexer.
///
/// Tokenization either produces a value of type `T` or the first
/// [`LexError`] encountered in the source.
pub type LexResult<T> = Result<T, LexError>;

/// Classifies a lexical token.
///
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// The variants are payload-free so the parser can compare and copy kinds
/// cheaply; the lexeme text and its position travel in [`Token`].
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
#[logos(extras = LexerExtras)]
#[logos(error = LexErrorKind)]
pub enum TokenKind {
    /// Numeric literal tokens, such as `42`, `3.14` or `120.5`.
    ///
    /// The second pattern catches digits ending in a bare decimal point
    /// (`12.`); its callback always fails, and longest-match makes it win
    /// over the plain integer prefix, so `12.` is a lexical error rather
    /// than the number `12` followed by a stray `.`.
    #[regex(r"[0-9]+(\.[0-9]+)?")]
    #[regex(r"[0-9]+\.", malformed_number)]
    Number,
    /// `leia`, the read keyword. Matched case-insensitively.
    #[token("leia", ignore(ascii_case))]
    Read,
    /// `imprima`, the print keyword. Matched case-insensitively.
    #[token("imprima", ignore(ascii_case))]
    Print,
    /// Identifier tokens; variable names such as `x`, `média` or `total_2`.
    ///
    /// Names start with a Unicode letter or `_` and continue with letters,
    /// digits or `_`.
    #[regex(r"[\p{L}_][\p{L}0-9_]*")]
    Identifier,
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `^`
    #[token("^")]
    Caret,
    /// `=`
    #[token("=")]
    Equals,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `;`
    #[token(";")]
    Semicolon,
    /// Line breaks separate statements, so they are tokens rather than
    /// trivia.
    #[token("\n", newline)]
    Newline,
    /// Spaces, tabs and carriage returns.
    #[regex(r"[ \t\r]+", logos::skip)]
    Ignored,
    /// End of input. Appended once by [`tokenize`]; never matched.
    Eof,
}

impl std::fmt::Display for TokenKind {
    /// Formats the kind as the description used in diagnostics.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let description = match self {
            Self::Number => "number",
            Self::Read => "'leia'",
            Self::Print => "'imprima'",
            Self::Identifier => "identifier",
            Self::Plus => "'+'",
            Self::Minus => "'-'",
            Self::Star => "'*'",
            Self::Slash => "'/'",
            Self::Caret => "'^'",
            Self::Equals => "'='",
            Self::LParen => "'('",
            Self::RParen => "')'",
            Self::Semicolon => "';'",
            Self::Newline => "newline",
            Self::Ignored => "whitespace",
            Self::Eof => "end of file",
        };
        write!(f, "{description}")
    }
}

/// A lexical token: a classified lexeme together with its source position.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    /// The token's classification.
    pub kind:   TokenKind,
    /// The exact source text of the lexeme. Empty for the end-of-file token.
    pub text:   String,
    /// 1-based line of the lexeme's first character.
    pub line:   usize,
    /// 1-based column of the lexeme's first character. Columns count
    /// characters, not bytes.
    pub column: usize,
}

/// Additional information carried by the lexer during tokenization.
///
/// Tracks the current 1-based line number and the byte offset at which that
/// line starts, so a token's column is the number of characters between the
/// line start and the token's span start, plus one.
#[derive(Debug, Clone, Copy)]
pub struct LexerExtras {
    /// The current line number in the source being tokenized.
    pub line:       usize,
    /// Byte offset of the first character of the current line.
    pub line_start: usize,
}

/// Tokenizes an entire source string.
///
/// Drives the generated lexer over `source`, attaching the lexeme text and
/// source position to every token, and appends the end-of-file token. The
/// first lexical error aborts tokenization.
///
/// # Parameters
/// - `source`: The raw source text.
///
/// # Returns
/// The token sequence, always terminated by exactly one `Eof` token.
///
/// # Example
/// ```
/// use contar::interpreter::lexer::{TokenKind, tokenize};
///
/// let tokens = tokenize("x = 2").unwrap();
/// let kinds: Vec<TokenKind> = tokens.iter().map(|t| t.kind).collect();
/// assert_eq!(kinds,
///            vec![TokenKind::Identifier,
///                 TokenKind::Equals,
///                 TokenKind::Number,
///                 TokenKind::Eof]);
/// ```
pub fn tokenize(source: &str) -> LexResult<Vec<Token>> {
    let mut tokens = Vec::new();
    let mut lexer = TokenKind::lexer_with_extras(source,
                                                 LexerExtras { line:       1,
                                                               line_start: 0, });

    loop {
        // The newline callback advances the bookkeeping past the matched
        // line break, so the token's own position must come from the state
        // before this step.
        let before = lexer.extras;
        let Some(result) = lexer.next() else {
            break;
        };
        let span = lexer.span();
        let line = before.line;
        let column = column_at(source, before.line_start, span.start);

        match result {
            Ok(kind) => tokens.push(Token { kind,
                                            text: lexer.slice().to_owned(),
                                            line,
                                            column }),

            Err(LexErrorKind::InvalidCharacter) => {
                let character = lexer.slice().chars().next().unwrap_or(' ');
                return Err(LexError::InvalidCharacter { character,
                                                        line,
                                                        column });
            },

            Err(LexErrorKind::MalformedNumber) => {
                return Err(LexError::MalformedNumber { line, column });
            },
        }
    }

    tokens.push(Token { kind:   TokenKind::Eof,
                        text:   String::new(),
                        line:   lexer.extras.line,
                        column: column_at(source, lexer.extras.line_start, source.len()), });

    Ok(tokens)
}

/// Computes a 1-based column, counting characters from the line start.
fn column_at(source: &str, line_start: usize, offset: usize) -> usize {
    source[line_start..offset].chars().count() + 1
}

/// Advances the line bookkeeping when a line break is matched.
fn newline(lex: &mut logos::Lexer<'_, TokenKind>) {
    lex.extras.line += 1;
    lex.extras.line_start = lex.span().end;
}

/// Rejects a number literal that ends in a bare decimal point.
fn malformed_number(_lex: &mut logos::Lexer<'_, TokenKind>) -> Result<(), LexErrorKind> {
    Err(LexErrorKind::MalformedNumber)
}

//! Property-based tests for the lexer.
//!
//! These use `proptest` to verify tokenizer invariants over generated inputs:
//!
//! 1. Tokenization never panics on arbitrary input.
//! 2. A successful token sequence ends with exactly one end-of-file token.
//! 3. Token texts rebuild the source, minus skipped whitespace.
//! 4. Token positions strictly increase in source order.
//! 5. Tokenization is deterministic.
//! 6. Known-valid fragments and generated number literals always tokenize.
//! 7. Digits ending in a bare decimal point are always rejected.

use contar::{
    error::LexError,
    interpreter::lexer::{TokenKind, tokenize},
};
use proptest::prelude::*;

/// Known-valid fragments that must always tokenize cleanly.
const VALID_FRAGMENTS: &[&str] = &[
    "42",
    "3.14",
    "x",
    "total_2",
    "_tmp",
    "média",
    "π",
    "leia",
    "LEIA",
    "imprima",
    "Imprima",
    "+",
    "-",
    "*",
    "/",
    "^",
    "=",
    "(",
    ")",
    ";",
    "x = 10",
    "y = x + 5",
    "imprima(x * y)",
    "leia(z)",
    "2 ^ 3 ^ 2",
    "a = -2 ^ 2; b = a / 4",
];

fn valid_fragment() -> impl Strategy<Value = String> {
    prop::sample::select(VALID_FRAGMENTS).prop_map(std::string::ToString::to_string)
}

proptest! {
    /// Property 1: tokenization never panics, whatever the input.
    #[test]
    fn tokenization_never_panics(input in "\\PC{0,500}") {
        let _result = tokenize(&input);
    }

    /// Property 2: a successful sequence ends with exactly one EOF token.
    #[test]
    fn eof_terminates_token_sequence(input in "\\PC{0,300}") {
        if let Ok(tokens) = tokenize(&input) {
            prop_assert!(!tokens.is_empty());
            prop_assert_eq!(tokens.last().unwrap().kind, TokenKind::Eof);

            let eof_count = tokens.iter().filter(|t| t.kind == TokenKind::Eof).count();
            prop_assert_eq!(eof_count, 1, "expected exactly one EOF for {:?}", input);
        }
    }

    /// Property 3: concatenated token texts equal the source with the
    /// skipped whitespace removed. The input sticks to the token alphabet so
    /// most cases take the successful path.
    #[test]
    fn token_texts_rebuild_source(input in "[a-zéç0-9 \t\r\n+*/^=();._-]{0,120}") {
        if let Ok(tokens) = tokenize(&input) {
            let rebuilt: String = tokens.iter().map(|t| t.text.as_str()).collect();
            let expected: String =
                input.chars().filter(|c| !matches!(c, ' ' | '\t' | '\r')).collect();

            prop_assert_eq!(rebuilt, expected, "for input {:?}", input);
        }
    }

    /// Property 4: every token starts strictly after the one before it.
    #[test]
    fn token_positions_increase(input in "[a-zéç0-9 \t\r\n+*/^=();._-]{0,120}") {
        if let Ok(tokens) = tokenize(&input) {
            for token in &tokens {
                prop_assert!(token.line >= 1 && token.column >= 1,
                             "position not 1-based: {:?} for input {:?}", token, input);
            }

            for window in tokens.windows(2) {
                let prev = &window[0];
                let next = &window[1];
                prop_assert!((next.line, next.column) > (prev.line, prev.column),
                             "positions not increasing: {:?} then {:?} for input {:?}",
                             prev, next, input);
            }
        }
    }

    /// Property 5: the same input always produces the same outcome.
    #[test]
    fn tokenization_is_deterministic(input in "\\PC{0,200}") {
        match (tokenize(&input), tokenize(&input)) {
            (Ok(first), Ok(second)) => prop_assert_eq!(first, second),
            (Err(first), Err(second)) => {
                prop_assert_eq!(format!("{first:?}"), format!("{second:?}"));
            },
            (first, second) => {
                prop_assert!(false, "outcomes differ: {:?} vs {:?}", first, second);
            },
        }
    }

    /// Property 6a: known-valid fragments tokenize cleanly.
    #[test]
    fn valid_fragments_tokenize(input in valid_fragment()) {
        let tokens = tokenize(&input).unwrap();
        prop_assert!(tokens.len() >= 2, "expected at least one token for {:?}", input);
    }

    /// Property 6b: generated number literals become a single number token
    /// whose text parses as a value.
    #[test]
    fn number_literals_tokenize_and_parse(text in "[0-9]{1,10}(\\.[0-9]{1,10})?") {
        let tokens = tokenize(&text).unwrap();

        prop_assert_eq!(tokens.len(), 2, "expected number + eof for {:?}", &text);
        prop_assert_eq!(tokens[0].kind, TokenKind::Number);
        prop_assert_eq!(&tokens[0].text, &text);
        prop_assert!(tokens[0].text.parse::<f64>().is_ok(),
                     "number text {:?} must parse", &text);
    }

    /// Property 7: digits ending in a bare decimal point are a lexical
    /// error, not a number followed by a stray dot.
    #[test]
    fn bare_decimal_point_is_rejected(digits in "[0-9]{1,8}") {
        let text = format!("{digits}.");
        let result = tokenize(&text);

        prop_assert!(matches!(result, Err(LexError::MalformedNumber { line: 1, column: 1 })),
                     "expected malformed-number error for {:?}, got {:?}", text, result);
    }
}

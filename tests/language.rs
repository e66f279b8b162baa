use std::fs;

use contar::{
    ast::{BinaryOperator, Expr, Statement},
    error::{Error, LexError, ParseError, RuntimeError},
    interpreter::{
        console::Console,
        evaluator::core::{Context, EvalResult},
        lexer::{TokenKind, tokenize},
        parser::core::parse,
    },
    run_source,
};
use walkdir::WalkDir;

/// Console double that feeds canned input lines and records all output.
///
/// Inputs are stored reversed so `pop` hands them out in script order.
struct ScriptedConsole {
    inputs:  Vec<String>,
    prompts: Vec<String>,
    outputs: Vec<String>,
}

impl ScriptedConsole {
    fn new(inputs: &[&str]) -> Self {
        Self { inputs:  inputs.iter().rev().map(|s| (*s).to_string()).collect(),
               prompts: Vec::new(),
               outputs: Vec::new() }
    }
}

impl Console for ScriptedConsole {
    fn read_line(&mut self, prompt: &str) -> EvalResult<String> {
        self.prompts.push(prompt.to_string());
        self.inputs.pop().ok_or(RuntimeError::InputClosed)
    }

    fn write_line(&mut self, text: &str) {
        self.outputs.push(text.to_string());
    }
}

fn run_script(src: &str, inputs: &[&str]) -> (Context, ScriptedConsole, Result<(), Error>) {
    let mut context = Context::new();
    let mut console = ScriptedConsole::new(inputs);
    let result = run_source(src, &mut context, &mut console);
    (context, console, result)
}

fn assert_success(src: &str) -> (Context, ScriptedConsole) {
    let (context, console, result) = run_script(src, &[]);
    if let Err(e) = result {
        panic!("Script failed: {e}");
    }
    (context, console)
}

fn assert_failure(src: &str) -> Error {
    let (_context, _console, result) = run_script(src, &[]);
    match result {
        Ok(()) => panic!("Script succeeded but was expected to fail"),
        Err(e) => e,
    }
}

fn assert_var(src: &str, name: &str, expected: f64) {
    let (context, _console) = assert_success(src);
    assert_eq!(context.get(name), Some(expected), "variable '{name}' after {src:?}");
}

fn assert_output(src: &str, expected: &[&str]) {
    let (_context, console) = assert_success(src);
    assert_eq!(console.outputs, expected, "output of {src:?}");
}

#[test]
fn assignment_and_basic_arithmetic() {
    assert_var("x = 1 + 2", "x", 3.0);
    assert_var("x = 7 * 9", "x", 63.0);
    assert_var("x = 8 - 5", "x", 3.0);
    assert_var("x = 10 / 2", "x", 5.0);
    assert_var("x = 12.5 + 0.25", "x", 12.75);
}

#[test]
fn operator_precedence() {
    assert_var("x = 2 + 3 * 4", "x", 14.0);
    assert_var("x = (2 + 3) * 4", "x", 20.0);
    assert_var("x = 10 - 4 - 3", "x", 3.0);
    assert_var("x = 8 / 4 / 2", "x", 1.0);
    assert_var("x = 2 * 3 ^ 2", "x", 18.0);
}

#[test]
fn exponentiation() {
    assert_var("x = 2 ^ 10", "x", 1024.0);
    assert_var("x = 2 ^ 3 ^ 2", "x", 512.0);
    assert_var("x = 2 ^ -3", "x", 0.125);
    // The sign binds to the base, so this is (-2) squared.
    assert_var("x = -2 ^ 2", "x", 4.0);
}

#[test]
fn unary_sign_chains() {
    assert_var("x = --5", "x", 5.0);
    assert_var("x = +-+2", "x", -2.0);
    assert_var("x = 10 - -3", "x", 13.0);
}

#[test]
fn assignment_prints_notification() {
    assert_output("x = 5", &["x = 5"]);
    assert_output("taxa = 0.5 + 0.25", &["taxa = 0.75"]);
}

#[test]
fn print_statement_prints_bare_value() {
    assert_output("imprima(2 ^ 10)", &["1024"]);
    assert_output("x = 3\nimprima(x * x)", &["x = 3", "9"]);
}

#[test]
fn bare_expression_prints_result_line() {
    assert_output("2 + 2", &["Result: 4"]);
    assert_output("x = 10\nx / 4", &["x = 10", "Result: 2.5"]);
}

#[test]
fn variables_persist_across_runs() {
    let mut context = Context::new();
    let mut console = ScriptedConsole::new(&[]);

    run_source("x = 10", &mut context, &mut console).unwrap();
    run_source("y = x + 5", &mut context, &mut console).unwrap();

    assert_eq!(context.get("x"), Some(10.0));
    assert_eq!(context.get("y"), Some(15.0));
}

#[test]
fn read_statement_binds_input() {
    let (context, console, result) = run_script("leia(z)\nimprima(z * 2)", &["21"]);

    assert!(result.is_ok(), "read script failed: {result:?}");
    assert_eq!(context.get("z"), Some(21.0));
    assert_eq!(console.prompts, &["Enter a value for z: "]);
    assert_eq!(console.outputs, &["z = 21", "42"]);
}

#[test]
fn read_statement_rejects_non_numeric_input() {
    let (context, _console, result) = run_script("leia(z)", &["abc"]);

    assert!(matches!(result, Err(Error::Runtime(RuntimeError::InvalidInput))));
    assert_eq!(context.get("z"), None);
}

#[test]
fn read_statement_fails_on_closed_input() {
    let (_context, _console, result) = run_script("leia(z)", &[]);

    assert!(matches!(result, Err(Error::Runtime(RuntimeError::InputClosed))));
}

/// Console whose reads always report a user interrupt.
struct InterruptingConsole;

impl Console for InterruptingConsole {
    fn read_line(&mut self, _prompt: &str) -> EvalResult<String> {
        Err(RuntimeError::Interrupted)
    }

    fn write_line(&mut self, _text: &str) {}
}

#[test]
fn interrupted_read_aborts_without_binding() {
    let mut context = Context::new();
    let mut console = InterruptingConsole;

    let result = run_source("x = 1\nleia(y)", &mut context, &mut console);

    assert!(matches!(result, Err(Error::Runtime(RuntimeError::Interrupted))));
    assert_eq!(context.get("x"), Some(1.0));
    assert_eq!(context.get("y"), None);
}

#[test]
fn division_by_zero_is_error() {
    let e = assert_failure("x = 1 / 0");
    assert_eq!(e.to_string(), "Runtime error: Division by zero.");

    assert_failure("x = 0\ny = 1 / x");
}

#[test]
fn failing_line_keeps_prior_bindings() {
    let (context, console, result) = run_script("x = 1\ny = x / 0\nz = 3", &[]);

    assert!(matches!(result, Err(Error::Runtime(RuntimeError::DivisionByZero))));
    assert_eq!(context.get("x"), Some(1.0));
    assert_eq!(context.get("y"), None);
    assert_eq!(context.get("z"), None, "statements after the failure must not run");
    assert_eq!(console.outputs, &["x = 1"]);
}

#[test]
fn unknown_variable_is_error() {
    let e = assert_failure("y = x + 1");
    assert_eq!(e.to_string(), "Runtime error: Unknown variable 'x'.");
}

#[test]
fn lexical_errors_carry_positions() {
    let e = assert_failure("x = 12.");
    assert!(matches!(e, Error::Lex(LexError::MalformedNumber { line: 1, column: 5 })),
            "got {e:?}");
    assert_eq!(e.to_string(), "Lexical error on line 1, column 5: Malformed decimal number.");

    let e = assert_failure("x = $");
    assert!(matches!(e,
                     Error::Lex(LexError::InvalidCharacter { character: '$',
                                                             line:      1,
                                                             column:    5, })),
            "got {e:?}");

    // A second dot ends the number; the dot itself is the invalid character.
    let e = assert_failure("x = 12.5.6");
    assert!(matches!(e,
                     Error::Lex(LexError::InvalidCharacter { character: '.',
                                                             line:      1,
                                                             column:    9, })),
            "got {e:?}");

    let e = assert_failure("x = 1\ny = 3 $");
    assert!(matches!(e,
                     Error::Lex(LexError::InvalidCharacter { character: '$',
                                                             line:      2,
                                                             column:    7, })),
            "got {e:?}");

    let e = assert_failure("x = .5");
    assert!(matches!(e, Error::Lex(LexError::InvalidCharacter { character: '.', .. })),
            "got {e:?}");
}

#[test]
fn syntax_errors_carry_positions() {
    let e = assert_failure("imprima(2");
    assert!(matches!(e,
                     Error::Parse(ParseError::ExpectedToken { expected: TokenKind::RParen,
                                                              found: TokenKind::Eof,
                                                              line: 1,
                                                              column: 10, })),
            "got {e:?}");
    assert_eq!(e.to_string(),
               "Syntax error on line 1, column 10: Expected ')', found end of file.");

    let e = assert_failure("x = ;");
    assert!(matches!(e,
                     Error::Parse(ParseError::UnexpectedToken { found: TokenKind::Semicolon,
                                                                line: 1,
                                                                column: 5, })),
            "got {e:?}");
    assert_eq!(e.to_string(), "Syntax error on line 1, column 5: Unexpected token: ';'.");

    let e = assert_failure("leia(2)");
    assert!(matches!(e,
                     Error::Parse(ParseError::ExpectedToken { expected: TokenKind::Identifier,
                                                              found: TokenKind::Number,
                                                              .. })),
            "got {e:?}");
}

#[test]
fn newline_inside_expression_is_error() {
    let e = assert_failure("x = 1 +\n2");
    assert!(matches!(e,
                     Error::Parse(ParseError::UnexpectedToken { found: TokenKind::Newline, .. })),
            "got {e:?}");
}

#[test]
fn keywords_ignore_case() {
    assert_output("IMPRIMA(2)", &["2"]);
    assert_output("Imprima(2 + 2)", &["4"]);

    let (context, _console, result) = run_script("LEIA(x)", &["7"]);
    assert!(result.is_ok(), "read script failed: {result:?}");
    assert_eq!(context.get("x"), Some(7.0));
}

#[test]
fn identifiers_accept_unicode_letters() {
    assert_var("média = 7", "média", 7.0);
    assert_var("π = 3.14", "π", 3.14);
    assert_output("média = 7\nimprima(média * 2)", &["média = 7", "14"]);

    // Columns count characters, so the '$' after the accented name sits at
    // column 9, not at its byte offset.
    let e = assert_failure("média = $");
    assert!(matches!(e,
                     Error::Lex(LexError::InvalidCharacter { character: '$',
                                                             line:      1,
                                                             column:    9, })),
            "got {e:?}");
}

#[test]
fn statement_separators_are_optional() {
    assert_output("x = 1; imprima(x)", &["x = 1", "1"]);
    assert_output("x = 1 imprima(x)", &["x = 1", "1"]);
    assert_output("\n\nx = 1\n\n\nimprima(x)\n", &["x = 1", "1"]);

    let e = assert_failure("x = 1;; imprima(x)");
    assert!(matches!(e,
                     Error::Parse(ParseError::UnexpectedToken { found: TokenKind::Semicolon, .. })),
            "got {e:?}");

    let e = assert_failure("; x = 1");
    assert!(matches!(e,
                     Error::Parse(ParseError::UnexpectedToken { found: TokenKind::Semicolon, .. })),
            "got {e:?}");
}

#[test]
fn empty_source_runs_to_nothing() {
    let (_context, console) = assert_success("");
    assert!(console.outputs.is_empty());

    let (_context, console) = assert_success("\n\n\n");
    assert!(console.outputs.is_empty());
}

#[test]
fn parser_builds_precedence_tree() {
    let tokens = tokenize("2 + 3 * 4").unwrap();
    let program = parse(&tokens).unwrap();

    let expected =
        Statement::Expression { expr: Expr::BinaryOp { left:  Box::new(Expr::Number(2.0)),
                                                       op:    BinaryOperator::Add,
                                                       right: Box::new(Expr::BinaryOp {
                                                           left:  Box::new(Expr::Number(3.0)),
                                                           op:    BinaryOperator::Mul,
                                                           right: Box::new(Expr::Number(4.0)),
                                                       }), }, };

    assert_eq!(program.statements, vec![expected]);
}

#[test]
fn exponent_tree_nests_to_the_right() {
    let tokens = tokenize("2 ^ 3 ^ 2").unwrap();
    let program = parse(&tokens).unwrap();

    let expected =
        Statement::Expression { expr: Expr::BinaryOp { left:  Box::new(Expr::Number(2.0)),
                                                       op:    BinaryOperator::Pow,
                                                       right: Box::new(Expr::BinaryOp {
                                                           left:  Box::new(Expr::Number(3.0)),
                                                           op:    BinaryOperator::Pow,
                                                           right: Box::new(Expr::Number(2.0)),
                                                       }), }, };

    assert_eq!(program.statements, vec![expected]);
}

#[test]
fn parsing_is_deterministic() {
    let source = "x = 1 + 2 * 3\nimprima(x ^ 2)\nleia(y)\nx - y";

    let first = parse(&tokenize(source).unwrap()).unwrap();
    let second = parse(&tokenize(source).unwrap()).unwrap();

    assert_eq!(first, second);
}

#[test]
fn script_corpus_works() {
    let mut count = 0;

    for entry in
        WalkDir::new("tests/scripts").into_iter()
                                     .filter_map(Result::ok)
                                     .filter(|e| {
                                         e.path().extension().is_some_and(|ext| ext == "calc")
                                     })
    {
        let path = entry.path();
        let content =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));

        count += 1;
        let (_context, _console, result) = run_script(&content, &[]);
        if let Err(e) = result {
            panic!("Script {path:?} failed:\n{content}\nError: {e:?}");
        }
    }

    assert!(count > 0, "No scripts found in tests/scripts");
}

#[test]
fn interest_script_computes_compound_amount() {
    let script = fs::read_to_string("tests/scripts/interest.calc").expect("missing file");
    let (context, console, result) = run_script(&script, &[]);

    assert!(result.is_ok(), "script failed: {result:?}");
    // Mirrors the script's own evaluation order, so the comparison is exact.
    assert_eq!(context.get("amount"), Some(1000.0 * (1.0 + 0.05_f64).powf(3.0)));
    assert!(!console.outputs.is_empty());
}

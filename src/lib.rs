//! # contar
//!
//! contar is a calculator-language interpreter written in Rust.
//! It lexes, parses, and evaluates line-oriented calculator programs with
//! variables, the usual arithmetic operators, and statements for reading
//! input and printing results, either from script files or interactively.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use tracing::{debug, trace};

use crate::{
    error::Error,
    interpreter::{
        console::Console,
        evaluator::core::Context,
        lexer::tokenize,
        parser::core::parse,
    },
};

/// Defines the structure of parsed code.
///
/// This module declares the `Expr` and `Statement` types that represent the
/// syntactic structure of source code as a tree. The AST is built by the
/// parser and traversed by the evaluator.
///
/// # Responsibilities
/// - Defines expression and statement types for all language constructs.
/// - Defines the operator enums shared by the parser and the evaluator.
/// - Enables extensible and robust handling of parsed code.
pub mod ast;
/// Provides unified error types for lexing, parsing, and evaluation.
///
/// This module defines all errors that can be raised during lexing, parsing,
/// or evaluating code. It standardizes error reporting and carries detailed
/// information about failures, including error kinds, descriptions, and source
/// locations for debugging and user feedback.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (lexer, parser, evaluator).
/// - Attaches line and column numbers where the failing stage knows them.
/// - Supports integration with standard error handling traits and reporting
///   utilities.
pub mod error;
/// Orchestrates the entire process of code execution.
///
/// This module ties together lexing, parsing, evaluation, console access,
/// error handling, and all supporting infrastructure to provide a complete
/// runtime for source code evaluation. It exposes the core components used for
/// interpreting and executing programs.
///
/// # Responsibilities
/// - Coordinates all core components: lexer, parser, evaluator, and console.
/// - Provides the building blocks for parsing and evaluating user code.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;
/// Provides the interactive session.
///
/// This module implements the read-eval-print loop: it reads one line at a
/// time from the terminal, runs it through the interpreter against a
/// persistent context, and reports results or errors before prompting again.
///
/// # Responsibilities
/// - Runs the line-by-line interactive loop with history and line editing.
/// - Keeps one evaluation context alive across the whole session.
/// - Recognizes the exit words that end a session.
pub mod repl;

/// Runs source text through the whole pipeline against an existing context.
///
/// The source is tokenized, parsed into a program, and executed statement by
/// statement. The context carries the variable environment, so consecutive
/// calls against the same context see each other's bindings; the console
/// receives every prompt and notification the program produces.
///
/// # Errors
/// Returns an error if lexing, parsing, or evaluation fails; the error names
/// the stage that failed and, for lexing and parsing, the source position.
///
/// # Examples
/// ```
/// use contar::{
///     interpreter::{console::StdinConsole, evaluator::core::Context},
///     run_source,
/// };
///
/// let mut context = Context::new();
/// let mut console = StdinConsole;
///
/// // The binding persists in the context after the run.
/// run_source("x = 2 + 2", &mut context, &mut console).unwrap();
/// assert_eq!(context.get("x"), Some(4.0));
///
/// // Example with an intentional error (unknown variable).
/// let result = run_source("y = z + 1", &mut context, &mut console);
/// assert!(result.is_err());
/// ```
pub fn run_source<C: Console>(source: &str,
                              context: &mut Context,
                              console: &mut C)
                              -> Result<(), Error> {
    let tokens = tokenize(source)?;
    debug!("lexed {} tokens", tokens.len());
    for token in &tokens {
        trace!(?token);
    }

    let program = parse(&tokens)?;
    debug!("parsed {} statements", program.statements.len());

    context.run(&program, console)?;
    Ok(())
}

/// Runs source text and reports any failure on standard error.
///
/// This is the reporting wrapper around [`run_source`] used by both the file
/// runner and the interactive session: a failure at any stage is printed as a
/// single `ERROR: ...` diagnostic line and execution of the remaining source
/// stops. The context keeps every binding made before the failure.
///
/// # Returns
/// `true` when the source ran to completion, `false` when an error was
/// reported.
///
/// # Examples
/// ```
/// use contar::{
///     compile_and_run,
///     interpreter::{console::StdinConsole, evaluator::core::Context},
/// };
///
/// let mut context = Context::new();
/// let mut console = StdinConsole;
///
/// assert!(compile_and_run("imprima(2 ^ 10)", &mut context, &mut console));
/// assert!(!compile_and_run("1 / 0", &mut context, &mut console));
/// ```
pub fn compile_and_run<C: Console>(source: &str, context: &mut Context, console: &mut C) -> bool {
    match run_source(source, context, console) {
        Ok(()) => true,
        Err(e) => {
            eprintln!("ERROR: {e}");
            false
        },
    }
}

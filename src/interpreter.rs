/// The console module connects the interpreter to the outside world.
///
/// Statements that read input or announce results do so through the `Console`
/// trait declared here, which keeps the evaluator free of any direct terminal
/// dependency. The standard-stream implementation lives alongside the trait;
/// interactive sessions and tests supply their own.
///
/// # Responsibilities
/// - Declares the `Console` trait used by statement evaluation.
/// - Provides `StdinConsole`, the plain standard input/output implementation.
pub mod console;
/// The evaluator module executes AST nodes and computes results.
///
/// The evaluator traverses the AST, evaluates expressions and statements,
/// performs arithmetic operations, manages variable state, and produces
/// results. It is the core execution engine of the interpreter.
///
/// # Responsibilities
/// - Evaluates AST nodes, performing all supported operations.
/// - Handles the variable environment and statement side effects.
/// - Reports runtime errors such as division by zero or unknown variables.
pub mod evaluator;
/// The lexer module tokenizes source code for further parsing.
///
/// The lexer (tokenizer) reads the raw source text and produces a stream of
/// tokens, each corresponding to meaningful language elements such as numbers,
/// identifiers, operators, delimiters, and keywords. This is the first stage of
/// interpretation.
///
/// # Responsibilities
/// - Converts the input character stream into tokens with type and source
///   location.
/// - Handles numeric literals, identifiers, keywords, and operators.
/// - Reports lexical errors for invalid or malformed input.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// The parser processes the token stream produced by the lexer and constructs
/// an AST that represents the syntactic structure of expressions and
/// statements. This enables later phases to analyze and execute user code.
///
/// # Responsibilities
/// - Converts tokens into structured AST nodes (expressions, statements).
/// - Validates correct grammar and syntax, reporting errors with location info.
/// - Supports arithmetic, assignments, and the read and print statements.
pub mod parser;

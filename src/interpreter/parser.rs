/// Parser entry points and shared plumbing.
///
/// Contains the program-level parse loop, the expression entry point, and
/// the token-consumption helpers the other parser modules share.
pub mod core;

/// Unary and atomic expression parsing.
///
/// Handles the prefix signs and the factor level: literals, variable
/// references, and parenthesized expressions.
pub mod unary;

/// Binary expression parsing.
///
/// Implements the precedence levels for the arithmetic operators, from
/// additive down to exponentiation.
pub mod binary;

/// Statement parsing.
///
/// Implements logic for parsing top-level statements: reads, prints,
/// assignments, and expression statements.
pub mod statement;

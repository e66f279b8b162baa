/// Binary operator evaluation logic.
///
/// Handles the execution of the arithmetic binary operations, including the
/// division-by-zero guard and exponentiation.
pub mod binary;

/// Unary operator evaluation logic.
///
/// Implements the prefix signs: arithmetic negation and the identity plus.
pub mod unary;

/// Core evaluation logic and context management.
///
/// Contains the main evaluation engine, the runtime context with its
/// variable environment, statement side effects, and error propagation.
pub mod core;

#[derive(Debug)]
/// Represents all errors that can occur during evaluation and runtime.
///
/// Runtime errors carry no source position: by the time the tree walker
/// runs, statements have already been validated, and the reported condition
/// (an unbound name, a zero divisor, a failed read) is a property of the
/// program state rather than of a source location.
pub enum RuntimeError {
    /// Tried to use a variable that has no binding.
    UnknownVariable {
        /// The name of the variable.
        name: String,
    },
    /// Attempted division by zero.
    DivisionByZero,
    /// A read statement received input that is not a number.
    InvalidInput,
    /// The input stream ended before a read statement got a value.
    InputClosed,
    /// The user interrupted a read statement.
    Interrupted,
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownVariable { name } => {
                write!(f, "Runtime error: Unknown variable '{name}'.")
            },
            Self::DivisionByZero => write!(f, "Runtime error: Division by zero."),
            Self::InvalidInput => {
                write!(f, "Runtime error: Invalid input: expected a number.")
            },
            Self::InputClosed => {
                write!(f, "Runtime error: Input closed before a value could be read.")
            },
            Self::Interrupted => write!(f, "Runtime error: Interrupted while reading a value."),
        }
    }
}

impl std::error::Error for RuntimeError {}

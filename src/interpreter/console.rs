use std::io::{self, Write};

use crate::{error::RuntimeError, interpreter::evaluator::core::EvalResult};

/// The interpreter's console collaborator.
///
/// Read and print statements do their I/O through this trait, which keeps
/// the evaluator independent of the process's standard streams. File mode
/// uses [`StdinConsole`]; the interactive session and the tests supply
/// their own implementations.
pub trait Console {
    /// Prompts for and reads one line of input.
    ///
    /// The prompt is written without a trailing newline. Implementations
    /// report a closed input stream or an interrupted read as runtime
    /// errors.
    fn read_line(&mut self, prompt: &str) -> EvalResult<String>;

    /// Writes one line of program output.
    fn write_line(&mut self, text: &str);
}

/// Console backed by the process's standard streams, used in file mode.
pub struct StdinConsole;

impl Console for StdinConsole {
    fn read_line(&mut self, prompt: &str) -> EvalResult<String> {
        print!("{prompt}");
        // flush the prompt before blocking
        let _ = io::stdout().flush();

        let mut line = String::new();
        match io::stdin().read_line(&mut line) {
            Ok(0) | Err(_) => Err(RuntimeError::InputClosed),
            Ok(_) => Ok(line),
        }
    }

    fn write_line(&mut self, text: &str) {
        println!("{text}");
    }
}

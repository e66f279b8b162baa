use rustyline::{DefaultEditor, error::ReadlineError};
use tracing::debug;

use crate::{
    error::{Error, RuntimeError},
    interpreter::{
        console::Console,
        evaluator::core::{Context, EvalResult},
    },
    run_source,
};

/// Words that end an interactive session, compared case-insensitively.
const EXIT_WORDS: [&str; 8] = ["quit", "exit", "sair", "end", "fim", "stop", "break", "return"];

/// Prompt shown for every input line.
const PROMPT: &str = "calc> ";

/// Console implementation backed by the session's line editor.
///
/// Read statements executed during an interactive session prompt through the
/// same editor as the main loop, so the user keeps history and line editing
/// while answering. An interrupt during such a read maps to
/// [`RuntimeError::Interrupted`], which the session loop turns into a clean
/// shutdown; end of input maps to [`RuntimeError::InputClosed`].
struct ReplConsole {
    editor: DefaultEditor,
}

impl Console for ReplConsole {
    fn read_line(&mut self, prompt: &str) -> EvalResult<String> {
        match self.editor.readline(prompt) {
            Ok(line) => Ok(line),
            Err(ReadlineError::Interrupted) => Err(RuntimeError::Interrupted),
            Err(_) => Err(RuntimeError::InputClosed),
        }
    }

    fn write_line(&mut self, text: &str) {
        println!("{text}");
    }
}

/// Runs an interactive calculator session until the user leaves.
///
/// The session greets the user, then reads one line at a time from the
/// `calc> ` prompt. Each non-empty line runs through the full pipeline against
/// the supplied context, which lives for the whole session, so variables bound
/// on one line stay visible on later ones. A caller that already ran a script
/// can pass the script's context to make its variables available
/// interactively. Errors are reported and the loop continues with the
/// environment intact; the session ends on an exit word, on end of input, or
/// on an interrupt.
///
/// # Errors
/// Returns an error only if the line editor itself fails; language errors
/// raised inside the session are reported to the user and never escape this
/// function.
pub fn run(context: &mut Context) -> rustyline::Result<()> {
    let mut console = ReplConsole { editor: DefaultEditor::new()? };

    banner();
    debug!("interactive session started");

    loop {
        match console.editor.readline(PROMPT) {
            Ok(line) => {
                let line = line.trim();

                if line.is_empty() {
                    continue;
                }

                if EXIT_WORDS.contains(&line.to_lowercase().as_str()) {
                    println!("Goodbye!");
                    break;
                }

                let _ = console.editor.add_history_entry(line);

                match run_source(line, context, &mut console) {
                    Ok(()) => {},
                    Err(Error::Runtime(RuntimeError::Interrupted)) => {
                        println!("Interrupted.");
                        break;
                    },
                    Err(e) => eprintln!("ERROR: {e}"),
                }
            },
            Err(ReadlineError::Interrupted | ReadlineError::Eof) => {
                println!("Goodbye!");
                break;
            },
            Err(e) => return Err(e),
        }
    }

    debug!("interactive session ended");
    Ok(())
}

/// Prints the greeting shown when a session starts.
fn banner() {
    println!("contar {} interactive calculator", env!("CARGO_PKG_VERSION"));
    println!("Type 'sair' (or quit, exit, end, fim, stop, break, return) to leave.");
    println!("Examples:");
    println!("  x = 10");
    println!("  y = x + 5");
    println!("  imprima(x * y)");
    println!("  leia(z)");
    println!();
}

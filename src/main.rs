use std::{fs, io};

use clap::Parser;
use contar::{
    compile_and_run,
    interpreter::{console::StdinConsole, evaluator::core::Context},
    repl,
};
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// contar is a line-oriented calculator language with variables, arithmetic
/// expressions, and statements for reading input and printing results.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Script file to execute; without one, an interactive session starts.
    file: Option<String>,

    /// Continue in an interactive session after the script, keeping its
    /// variables; without a file this is simply the default mode.
    #[arg(short, long)]
    interactive: bool,
}

fn main() {
    let args = Args::parse();

    tracing_subscriber::fmt().with_env_filter(EnvFilter::from_default_env())
                             .with_writer(io::stderr)
                             .init();

    match args.file {
        Some(path) => run_file(&path, args.interactive),
        None => run_session(&mut Context::new()),
    }
}

/// Runs a script file, optionally continuing into an interactive session.
fn run_file(path: &str, continue_interactive: bool) {
    let source = fs::read_to_string(path).unwrap_or_else(|_| {
        eprintln!("Failed to read the script file '{path}'. Perhaps this file does not exist?");
        std::process::exit(1);
    });

    debug!("running script file '{path}'");

    let mut context = Context::new();
    let mut console = StdinConsole;
    let succeeded = compile_and_run(&source, &mut context, &mut console);

    if continue_interactive {
        run_session(&mut context);
    } else if !succeeded {
        std::process::exit(1);
    }
}

/// Starts an interactive session over the given context.
fn run_session(context: &mut Context) {
    if let Err(e) = repl::run(context) {
        eprintln!("ERROR: {e}");
        std::process::exit(1);
    }
}

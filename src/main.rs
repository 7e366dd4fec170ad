use std::{
    fs,
    io::{self, BufRead, IsTerminal, Write},
    process::ExitCode,
};

use calcite::{Interpreter, run_script};
use clap::Parser;
use tracing::Level;

/// calcite evaluates arithmetic expressions and remembers the variables you
/// assign.
///
/// Without arguments it reads one expression per line from standard input.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Treat the argument as a file holding one expression per line.
    #[arg(short, long, value_name = "FILE", conflicts_with = "expressions")]
    file: Option<String>,

    /// Log each evaluation step to stderr.
    #[arg(short, long)]
    verbose: bool,

    /// Expressions to evaluate in order, sharing their variables.
    expressions: Vec<String>,
}

fn main() -> ExitCode {
    let args = Args::parse();

    if args.verbose {
        tracing_subscriber::fmt().with_max_level(Level::DEBUG)
                                 .with_writer(io::stderr)
                                 .init();
    }

    if let Some(path) = &args.file {
        let Ok(script) = fs::read_to_string(path) else {
            eprintln!("Failed to read the input file '{path}'. Perhaps this file does not exist?");
            return ExitCode::FAILURE;
        };
        return match run_script(&script, true) {
            Ok(_) => ExitCode::SUCCESS,
            Err(e) => {
                eprintln!("{e}");
                ExitCode::FAILURE
            },
        };
    }

    if args.expressions.is_empty() {
        return repl();
    }

    let mut interpreter = Interpreter::new();
    for expression in &args.expressions {
        match interpreter.evaluate(expression) {
            Ok(Some(value)) => println!("{value}"),
            Ok(None) => {},
            Err(e) => {
                eprintln!("{e}");
                return ExitCode::FAILURE;
            },
        }
    }
    ExitCode::SUCCESS
}

/// Reads lines from stdin until end of input, printing each result.
///
/// Errors are reported and the session continues with its variables intact.
fn repl() -> ExitCode {
    let stdin = io::stdin();
    let interactive = stdin.is_terminal();
    let mut interpreter = Interpreter::new();
    let mut lines = stdin.lock().lines();

    loop {
        if interactive {
            print!("> ");
            if io::stdout().flush().is_err() {
                return ExitCode::FAILURE;
            }
        }

        let line = match lines.next() {
            Some(Ok(line)) => line,
            Some(Err(e)) => {
                eprintln!("Failed to read input: {e}");
                return ExitCode::FAILURE;
            },
            None => return ExitCode::SUCCESS,
        };

        match interpreter.evaluate(&line) {
            Ok(Some(value)) => println!("{value}"),
            Ok(None) => {},
            Err(e) => eprintln!("{e}"),
        }
    }
}

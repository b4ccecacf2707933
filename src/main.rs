use std::{
    fs,
    io::{self, BufRead, Write},
    process::ExitCode,
};

use clap::Parser;
use monkey::interpreter::{lexer::Lexer, parser::core::Parser as MonkeyParser, session::Interpreter};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

const PROMPT: &str = ">> ";

/// monkey runs programs written in the Monkey scripting language.
///
/// Without a script it starts an interactive prompt.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells monkey to look at a file instead of a script.
    #[arg(short, long)]
    file: bool,

    /// Prints the token stream instead of evaluating.
    #[arg(short, long)]
    tokens: bool,

    /// Prints the parsed program instead of evaluating.
    #[arg(short, long)]
    ast: bool,

    /// Enables debug logging on stderr.
    #[arg(short, long)]
    verbose: bool,

    contents: Option<String>,
}

/// Installs the log subscriber when `RUST_LOG` is set or `--verbose` is
/// passed. Otherwise logging stays disabled.
fn init_tracing(verbose: bool) {
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else if verbose {
        EnvFilter::new("monkey=debug")
    } else {
        return;
    };

    tracing_subscriber::registry().with(fmt::layer().with_writer(io::stderr)
                                                   .with_target(true)
                                                   .with_level(true))
                                  .with(filter)
                                  .init();
}

fn print_tokens(source: &str) {
    for token in Lexer::new(source) {
        println!("{token} line {}", token.line);
    }
}

/// Prints the rendering of the parsed program, or the syntax errors.
/// Returns `false` if there were errors.
fn print_ast(source: &str) -> bool {
    let mut parser = MonkeyParser::new(source);
    let program = parser.parse_program();

    if parser.errors().is_empty() {
        println!("{program}");
        true
    } else {
        eprintln!("{}", parser.take_errors());
        false
    }
}

fn run_script(source: &str) -> ExitCode {
    match Interpreter::default().run(source) {
        Ok(value) => {
            if !value.is_null() {
                println!("{value}");
            }
            ExitCode::SUCCESS
        },
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        },
    }
}

/// Reads one line at a time and evaluates it in a single session, so
/// bindings persist between lines. An empty line or end of input exits.
fn repl(args: &Args) -> io::Result<()> {
    let session = Interpreter::default();
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        print!("{PROMPT}");
        io::stdout().flush()?;

        let Some(line) = lines.next().transpose()? else {
            return Ok(());
        };
        if line.trim().is_empty() {
            return Ok(());
        }

        if args.tokens {
            print_tokens(&line);
            continue;
        }
        if args.ast {
            print_ast(&line);
            continue;
        }

        match session.run(&line) {
            Ok(value) => println!("{value}"),
            Err(e) => println!("{e}"),
        }
    }
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_tracing(args.verbose);

    let Some(contents) = &args.contents else {
        return match repl(&args) {
            Ok(()) => ExitCode::SUCCESS,
            Err(e) => {
                eprintln!("{e}");
                ExitCode::FAILURE
            },
        };
    };

    let script = if args.file {
        match fs::read_to_string(contents) {
            Ok(script) => script,
            Err(_) => {
                eprintln!("Failed to read the input file '{contents}'. Perhaps this file does not exist?");
                return ExitCode::FAILURE;
            },
        }
    } else {
        contents.clone()
    };

    if args.tokens {
        print_tokens(&script);
        return ExitCode::SUCCESS;
    }
    if args.ast {
        return if print_ast(&script) { ExitCode::SUCCESS } else { ExitCode::FAILURE };
    }

    run_script(&script)
}

use std::{fs, process::ExitCode};

use clap::Parser;
use spy::{interpreter::evaluator::core::Context, run_source};
use tracing::Level;
use tracing_subscriber::EnvFilter;

mod repl;

/// spy runs scripts in a small language where every variable carries a
/// declared type.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells spy to look at a file instead of a script.
    #[arg(short, long)]
    file: bool,

    /// Logs scanner, parser and evaluator activity to stderr.
    #[arg(short, long)]
    debug: bool,

    /// Skips printing the variables and symbol table after the script runs.
    #[arg(short, long)]
    quiet: bool,

    /// The script to run, or its path with `--file`. Without it an
    /// interactive prompt starts.
    contents: Option<String>,
}

/// Installs the log subscriber. `RUST_LOG` takes precedence over `--debug`.
fn init_tracing(debug: bool) {
    let level = if debug { Level::DEBUG } else { Level::WARN };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level.as_str()));

    tracing_subscriber::fmt().with_env_filter(filter)
                             .with_target(false)
                             .with_writer(std::io::stderr)
                             .init();
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_tracing(args.debug);

    let Some(contents) = args.contents else {
        return repl::run();
    };

    let script = if args.file {
        match fs::read_to_string(&contents) {
            Ok(script) => script,
            Err(e) => {
                eprintln!("Failed to read the input file '{contents}': {e}");
                return ExitCode::FAILURE;
            },
        }
    } else {
        contents
    };

    let mut context = Context::new();
    if let Err(e) = run_source(&script, &mut context) {
        eprintln!("{e}");
        return ExitCode::FAILURE;
    }

    if !args.quiet {
        println!("{}", context.memory());
        println!("{}", context.symbols());
    }
    ExitCode::SUCCESS
}

use std::{fs, io, process::ExitCode};

use clap::Parser;
use exprtree::{get_result, read_lines};
use tracing::{Level, debug, info};

/// exprtree builds an expression tree from whitespace-separated integer
/// arithmetic, evaluates it and prints it in prefix, infix and postfix order.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells exprtree to read expressions from a file, one per line.
    #[arg(short, long)]
    file: bool,

    /// Rejects unrecognized tokens instead of skipping them.
    #[arg(short, long)]
    strict: bool,

    /// Shows more in logs; may be provided multiple times.
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// The expression, or a path when `--file` is given. Without it,
    /// expressions are read from stdin, one per line.
    contents: Option<String>,
}

fn main() -> ExitCode {
    let args = Args::parse();

    let level = match args.verbose {
        0 => Level::WARN,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt().with_max_level(level)
                             .with_writer(io::stderr)
                             .init();

    let mut failed = false;

    let lines: Vec<String> = match (&args.contents, args.file) {
        (Some(path), true) => match fs::read_to_string(path) {
            Ok(script) => script.lines().map(str::to_string).collect(),
            Err(_) => {
                eprintln!("Failed to read the input file '{path}'. Perhaps this file does not exist?");
                return ExitCode::FAILURE;
            },
        },
        (Some(expression), false) => vec![expression.clone()],
        (None, _) => {
            let (lines, errors) = read_lines(io::stdin().lock());
            for e in &errors {
                eprintln!("Failed to read from stdin: {e}");
            }
            failed = !errors.is_empty();
            lines
        },
    };

    for line in lines.iter().filter(|line| !line.trim().is_empty()) {
        debug!(expression = %line, "evaluating");
        match get_result(line, args.strict) {
            Ok(report) => {
                info!(size = report.size, "evaluated");
                println!("{report}");
            },
            Err(e) => {
                eprintln!("{e}");
                failed = true;
            },
        }
    }

    if failed { ExitCode::FAILURE } else { ExitCode::SUCCESS }
}

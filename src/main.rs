use std::{
    fs::File,
    io::{BufReader, BufWriter},
    path::PathBuf,
    process::ExitCode,
};

use clap::Parser;
use log::{error, info, LevelFilter};
use simple_logger::SimpleLogger;

use lazytree::prelude::*;

/// Runs the commands from INPUT against a fresh lazy tree, writing one reply
/// per command to OUTPUT.
#[derive(Debug, Parser)]
#[clap(version, about)]
struct Opts {
    /// File holding one command per line; must exist
    input: PathBuf,

    /// File receiving the replies; truncated if it already exists
    output: PathBuf,

    /// Log more (repeat for debug output)
    #[clap(short, long, parse(from_occurrences))]
    verbose: u64,
}

fn run(opts: &Opts) -> Result<Stats> {
    if !opts.input.is_file() {
        return Err(Error::Io(format!(
            "input file does not exist: {}",
            opts.input.display()
        )));
    }

    let input = BufReader::new(File::open(&opts.input)?);
    let output = BufWriter::new(File::create(&opts.output)?);

    Interpreter::new().run(input, output)
}

fn main() -> ExitCode {
    let opts = Opts::parse();

    let level = match opts.verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        _ => LevelFilter::Debug,
    };
    if let Err(e) = SimpleLogger::new().with_level(level).init() {
        eprintln!("failed to install logger: {}", e);
    }

    info!("input: {}", opts.input.display());
    info!("output: {}", opts.output.display());

    match run(&opts) {
        Ok(stats) => {
            info!(
                "processed {} lines ({} error replies)",
                stats.lines, stats.errors
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

//! pyspell CLI binary.
//!
//! Prints every correction of each name, one per line. Names come from the
//! command line or, when none are given, from stdin (one per line).

use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use pyspell::{CheckerConfig, PinyinChecker};

#[derive(Parser, Debug)]
#[command(name = "pyspell")]
#[command(about = "Check and correct pinyin names against a syllable list")]
#[command(version = env!("CARGO_PKG_VERSION"))]
struct Args {
    /// Syllable list, one syllable per line
    #[arg(short, long, value_name = "FILE")]
    dict: PathBuf,

    /// Names to check (read from stdin when omitted)
    #[arg(value_name = "NAME")]
    names: Vec<String>,

    /// Longest syllable considered by the segmenters
    #[arg(long, default_value_t = CheckerConfig::default().max_token_len)]
    max_token_len: usize,

    /// Most space-separated parts a corrected name may have
    #[arg(long, default_value_t = CheckerConfig::default().max_name_tokens)]
    max_name_tokens: usize,

    /// Prefix each correction with the name it came from
    #[arg(long)]
    show_input: bool,

    /// Verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() {
    let args = Args::parse();

    let level = match args.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level)),
        )
        .with_writer(io::stderr)
        .init();

    if let Err(e) = run(&args) {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

fn run(args: &Args) -> pyspell::Result<()> {
    let config = CheckerConfig::default()
        .with_max_token_len(args.max_token_len)
        .with_max_name_tokens(args.max_name_tokens);
    let checker = PinyinChecker::from_path_with_config(&args.dict, config)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();

    if args.names.is_empty() {
        for line in io::stdin().lock().lines() {
            print_corrections(&checker, &line?, args.show_input, &mut out)?;
        }
    } else {
        for name in &args.names {
            print_corrections(&checker, name, args.show_input, &mut out)?;
        }
    }
    Ok(())
}

fn print_corrections<W: Write>(
    checker: &PinyinChecker,
    name: &str,
    show_input: bool,
    out: &mut W,
) -> io::Result<()> {
    for corrected in checker.check_name(name) {
        if show_input {
            writeln!(out, "{name}\t{corrected}")?;
        } else {
            writeln!(out, "{corrected}")?;
        }
    }
    Ok(())
}

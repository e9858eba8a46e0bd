//! `ssha` command: print the SHA-256 digest of a string or file.

mod hashing;
mod report;
mod transcript;

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

use crate::hashing::{load_message, sha256_message, Input};
use crate::report::Report;
use crate::transcript::Transcript;

/// CLI arguments for the digest command.
#[derive(Parser, Debug)]
#[command(
    name = "ssha",
    version,
    about = "Compute a SHA-256 digest from first principles"
)]
struct Args {
    /// String to hash (encoded as UTF-8)
    #[arg(required_unless_present = "file", conflicts_with = "file")]
    input: Option<String>,

    /// Hash the contents of a file instead of a string
    #[arg(long, value_name = "PATH")]
    file: Option<PathBuf>,

    /// Print padding and per-block state to stderr
    #[arg(long)]
    verbose: bool,

    /// Print a JSON report instead of the bare digest
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    run(args)
}

/// Hash the selected input and write the digest to stdout.
fn run(args: Args) -> Result<()> {
    let input = match (args.input, args.file) {
        (_, Some(path)) => Input::File(path),
        (Some(text), None) => Input::Text(text),
        (None, None) => Input::Text(String::new()),
    };
    let mut transcript = Transcript::new(args.verbose);

    let message = load_message(&input)?;
    let state = sha256_message(&message, &mut transcript)?;

    if args.json {
        println!("{}", Report::new(&message, &state)?.to_json()?);
    } else {
        println!("{}", state.to_hex());
    }
    Ok(())
}

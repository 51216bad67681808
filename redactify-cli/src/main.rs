//! ReDactify command-line interface

use clap::Parser;
use redactify_cli::commands::Commands;

/// PII redaction demo driven by an external detection engine
#[derive(Debug, Parser)]
#[command(name = "redactify", version, about, propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() {
    let cli = Cli::parse();

    if let Err(err) = cli.command.execute() {
        eprintln!("error: {err:#}");
        std::process::exit(1);
    }
}

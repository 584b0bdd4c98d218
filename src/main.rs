use anyhow::{Context, Result};
use clap::Parser;
use colored::*;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "lsl", version, about = "Print the long-format listing of the current directory")]
struct Cli {
    /// Increase log output (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn default_filter(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    }
}

fn init_tracing(verbose: u8) {
    // RUST_LOG wins over -v.
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter(verbose)));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: Cli) -> Result<()> {
    init_tracing(cli.verbose);
    let listing = lsl::run_listing().context("Failed to list directory")?;
    print!("{}", listing);
    Ok(())
}

fn main() {
    if let Err(e) = run(Cli::parse()) {
        eprintln!("{} {:#}", "Error:".red(), e);
        std::process::exit(1);
    }
}

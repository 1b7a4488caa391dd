//! Tally shell entry point.

use clap::Parser;

mod commands;
mod logging;
mod output;
mod shell;

use commands::Cli;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    if let Err(e) = cli.execute().await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

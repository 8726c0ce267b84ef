// Entrypoint for the CLI application.
// - Keeps `main` small: parse arguments, build the address client and
//   hand both to `commands::run`.
// - Any error is reported on stderr and the process exits with status 1.

use anyhow::Context;
use clap::Parser;
use coa_nft::{api::AddressDataClient, cli::Cli, commands, ui::TerminalPrompter};
use std::process;

fn run() -> anyhow::Result<()> {
    // Missing required flags make clap exit here, before any record work.
    let cli = Cli::parse();

    // Built eagerly, but only contacted when address validation is on.
    let source = AddressDataClient::from_env().context("Failed to set up address service client")?;
    log::debug!("address data service: {}", source.country_url(""));

    let mut prompter = TerminalPrompter;
    let stdout = std::io::stdout();
    commands::run(&cli, &source, &mut prompter, &mut stdout.lock())?;
    Ok(())
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    if let Err(e) = run() {
        eprintln!("Error: {:#}", e);
        process::exit(1);
    }
}

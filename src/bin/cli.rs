// src/bin/cli.rs
use clap::Parser;
use league_scrape::{cli, log};

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    log::init();

    let args = cli::Args::parse();
    cli::run(&args)?;
    Ok(())
}

mod cli;
mod commands;
mod config;
mod logging;

use anyhow::Result;
use clap::Parser;
use cli::Cli;
use config::Settings;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let settings = Settings::load(cli.log_level.clone())?;
    logging::init(&settings.log_level)?;
    commands::run(cli, &settings)
}

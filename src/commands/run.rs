use anyhow::Result;
use tracing::info;

use ib2d::solver::Report;

use crate::cli::{OutputFormat, RunArgs};
use crate::config::Settings;

pub fn run(args: RunArgs, settings: &Settings) -> Result<()> {
    let path = super::input_path(&args.input)?;
    let stdout = std::io::stdout().lock();

    let mut solver = match args.output.unwrap_or(settings.output) {
        OutputFormat::Text => Report::text(stdout),
        OutputFormat::Json => Report::json(stdout),
    };
    let structure = ib2d::run_with(&path, &mut solver)?;

    if !structure.exists() {
        tracing::warn!(structure = %structure.display(), "structure file does not exist");
    }
    info!("hand-off complete");
    Ok(())
}

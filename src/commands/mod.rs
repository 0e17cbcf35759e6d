mod check;
mod fmt;
mod run;

use anyhow::{Result, bail};
use std::io::Write;
use std::path::PathBuf;

use crate::cli::{Cli, Commands, InputArgs};
use crate::config::Settings;

pub fn run(cli: Cli, settings: &Settings) -> Result<()> {
    match cli.command {
        Commands::Run(args) => run::run(args, settings),
        Commands::Check(args) => check::run(args),
        Commands::Fmt(args) => fmt::run(args),
    }
}

/// Resolve the input2d location from `--path`, or ask for it with `--fdiag`.
fn input_path(args: &InputArgs) -> Result<PathBuf> {
    if let Some(path) = &args.path {
        return Ok(path.clone());
    }
    prompt_for_path()
}

fn prompt_for_path() -> Result<PathBuf> {
    eprint!("Path to input2d: ");
    std::io::stderr().flush()?;

    let mut line = String::new();
    std::io::stdin().read_line(&mut line)?;
    let path = line.trim();
    if path.is_empty() {
        bail!("No input2d file selected");
    }
    Ok(PathBuf::from(path))
}

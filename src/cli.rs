use clap::{ArgGroup, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// IB2d front end – read an input2d file and hand the run to the solver.
#[derive(Parser, Debug)]
#[command(name = "ib2d", version, about)]
pub struct Cli {
    /// Log filter, e.g. "debug" or "ib2d=trace" [env: IB2D_LOG]
    #[arg(long, env = "IB2D_LOG", global = true, value_name = "LEVEL")]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Build the run configuration and hand it to the solver.
    Run(RunArgs),
    /// Parse and validate an input2d file without running anything.
    Check(CheckArgs),
    /// Print the input2d file back out with canonical names and layout.
    Fmt(InputArgs),
}

/// Where the input2d file comes from.  Exactly one source is required.
#[derive(clap::Args, Debug)]
#[command(group(ArgGroup::new("source").required(true).args(["path", "fdiag"])))]
pub struct InputArgs {
    /// Path to the input2d file.  Geometry files (.vertex, .spring, …)
    /// are looked up in the same directory.
    #[arg(long, short, value_name = "FILE")]
    pub path: Option<PathBuf>,

    /// Ask for the input2d path interactively.
    #[arg(long, short = 'd')]
    pub fdiag: bool,
}

#[derive(clap::Args, Debug)]
pub struct RunArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Hand-off format.  Falls back to the config file, then text.
    #[arg(long, value_enum)]
    pub output: Option<OutputFormat>,
}

#[derive(clap::Args, Debug)]
pub struct CheckArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Treat schema warnings as errors.
    #[arg(long, default_value_t = false)]
    pub strict: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable coloured summary (default).
    Text,
    /// A single JSON document with the full solver input.
    Json,
}

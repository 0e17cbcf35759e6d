use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

use crate::cli::OutputFormat;

const DEFAULT_LOG_LEVEL: &str = "warn";

/// User defaults for the front end.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub log_level: String,
    pub output: OutputFormat,
}

/// Config file schema (`~/.config/ib2d/config.yaml`).
#[derive(serde::Deserialize, Default)]
struct SettingsFile {
    log_level: Option<String>,
    output: Option<OutputFormat>,
}

impl Settings {
    /// Priority: CLI flag > env var (handled by clap) > config file > default.
    pub fn load(cli_log_level: Option<String>) -> Result<Self> {
        let file = match config_file_path() {
            Some(path) if path.exists() => read_settings_file(&path)?,
            _ => SettingsFile::default(),
        };
        Ok(Self::merge(cli_log_level, file))
    }

    fn merge(cli_log_level: Option<String>, file: SettingsFile) -> Self {
        let log_level = cli_log_level
            .or(file.log_level)
            .filter(|l| !l.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string());

        Settings {
            log_level,
            output: file.output.unwrap_or(OutputFormat::Text),
        }
    }
}

fn read_settings_file(path: &Path) -> Result<SettingsFile> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Cannot read config file '{}'", path.display()))?;
    // An empty file deserializes to unit, not a mapping.
    if content.trim().is_empty() {
        return Ok(SettingsFile::default());
    }
    serde_yaml::from_str(&content)
        .with_context(|| format!("Invalid config file '{}'", path.display()))
}

fn config_file_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("ib2d").join("config.yaml"))
}

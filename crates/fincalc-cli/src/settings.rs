//! Settings resolution.
//!
//! Each setting is taken from the first source that provides it: command-line
//! flag, environment variable (both handled by clap), the JSON config file,
//! then the built-in default.

use std::path::{Path, PathBuf};

use fincalc_core::investment::{DEFAULT_RETURN_RATE_PCT, INFLATION_RATE_PCT};
use fincalc_core::Rate;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::cli::{CommonArgs, InvestmentCli, OutputFormat};
use crate::error::{CliError, CliResult};

/// Contents of the config file. Every key is optional.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileSettings {
    /// Expected return rate (%) used for a blank answer.
    pub expected_return_rate: Option<f64>,
    /// Inflation rate (%) for the real value.
    pub inflation_rate: Option<f64>,
    /// Output format.
    pub format: Option<OutputFormat>,
}

impl FileSettings {
    /// Loads settings from `path`.
    pub fn load(path: &Path) -> CliResult<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| CliError::config(path, e.to_string()))?;
        serde_json::from_str(&content).map_err(|e| CliError::config(path, e.to_string()))
    }

    /// Loads the explicitly requested file, or the default file if it exists.
    ///
    /// A missing explicit file is an error; a missing default file is not.
    pub fn discover(explicit: Option<&Path>) -> CliResult<Self> {
        if let Some(path) = explicit {
            debug!(path = %path.display(), "loading config file");
            return Self::load(path);
        }

        match default_config_path() {
            Some(path) if path.exists() => {
                debug!(path = %path.display(), "loading default config file");
                Self::load(&path)
            }
            _ => {
                debug!("no config file, using defaults");
                Ok(Self::default())
            }
        }
    }
}

/// Default config file location: `<config dir>/fincalc/config.json`.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir()
        .or_else(dirs::home_dir)
        .map(|dir| dir.join("fincalc").join("config.json"))
}

/// Settings shared by both tools.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Settings {
    /// Output format.
    pub format: OutputFormat,
    /// Whether prompts are printed.
    pub show_prompts: bool,
}

impl Settings {
    /// Resolves shared settings against a loaded file.
    pub fn resolve(common: &CommonArgs, file: &FileSettings) -> Self {
        Self {
            format: common.format.or(file.format).unwrap_or_default(),
            show_prompts: !common.quiet,
        }
    }
}

/// Settings specific to the investment projector.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProjectorSettings {
    /// Shared settings.
    pub common: Settings,
    /// Return rate used when the rate prompt is left blank.
    pub default_return_rate: Rate,
    /// Inflation used to compute the real value.
    pub inflation: Rate,
}

impl ProjectorSettings {
    /// Resolves projector settings against a loaded file.
    pub fn resolve(cli: &InvestmentCli, file: &FileSettings) -> Self {
        let return_rate = cli
            .return_rate
            .or(file.expected_return_rate)
            .unwrap_or(DEFAULT_RETURN_RATE_PCT);
        let inflation = cli
            .inflation_rate
            .or(file.inflation_rate)
            .unwrap_or(INFLATION_RATE_PCT);

        Self {
            common: Settings::resolve(&cli.common, file),
            default_return_rate: Rate::from_percentage(return_rate),
            inflation: Rate::from_percentage(inflation),
        }
    }
}

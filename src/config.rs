//! Configuration for the analyzer binary
//!
//! Values are layered: built-in defaults, then an optional TOML file, then
//! `TICKET_ANALYZER_*` environment variables, then command line flags.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::analysis::Route;
use crate::error::{Error, Result};
use crate::report::OutputFormat;

pub const DEFAULT_TICKETS_PATH: &str = "tickets.json";
pub const DEFAULT_ORIGIN: &str = "Владивосток";
pub const DEFAULT_DESTINATION: &str = "Тель-Авив";

pub const ENV_TICKETS: &str = "TICKET_ANALYZER_TICKETS";
pub const ENV_ORIGIN: &str = "TICKET_ANALYZER_ORIGIN";
pub const ENV_DESTINATION: &str = "TICKET_ANALYZER_DESTINATION";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AnalyzerConfig {
    pub tickets_path: PathBuf,
    pub origin: String,
    pub destination: String,
    pub format: OutputFormat,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            tickets_path: PathBuf::from(DEFAULT_TICKETS_PATH),
            origin: DEFAULT_ORIGIN.to_string(),
            destination: DEFAULT_DESTINATION.to_string(),
            format: OutputFormat::default(),
        }
    }
}

/// Values given explicitly on the command line
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub tickets_path: Option<PathBuf>,
    pub origin: Option<String>,
    pub destination: Option<String>,
    pub format: Option<OutputFormat>,
}

impl AnalyzerConfig {
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        debug!("Loaded configuration from {}", path.display());
        Self::from_toml_str(&content)
    }

    /// Build the effective configuration from every layer
    pub fn load(config_path: Option<&Path>, overrides: ConfigOverrides) -> Result<Self> {
        let mut config = match config_path {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        config.merge_env_vars();
        config.apply_overrides(overrides);
        config.validate()?;
        Ok(config)
    }

    pub fn merge_env_vars(&mut self) {
        self.merge_vars(|key| std::env::var(key).ok());
    }

    fn merge_vars(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(path) = lookup(ENV_TICKETS) {
            self.tickets_path = PathBuf::from(path);
        }

        if let Some(origin) = lookup(ENV_ORIGIN) {
            self.origin = origin;
        }

        if let Some(destination) = lookup(ENV_DESTINATION) {
            self.destination = destination;
        }
    }

    pub fn apply_overrides(&mut self, overrides: ConfigOverrides) {
        if let Some(path) = overrides.tickets_path {
            self.tickets_path = path;
        }
        if let Some(origin) = overrides.origin {
            self.origin = origin;
        }
        if let Some(destination) = overrides.destination {
            self.destination = destination;
        }
        if let Some(format) = overrides.format {
            self.format = format;
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.origin.is_empty() {
            return Err(Error::Config("origin city name is empty".to_string()));
        }
        if self.destination.is_empty() {
            return Err(Error::Config("destination city name is empty".to_string()));
        }
        if self.tickets_path.as_os_str().is_empty() {
            return Err(Error::Config("tickets path is empty".to_string()));
        }
        Ok(())
    }

    pub fn route(&self) -> Route {
        Route::new(self.origin.clone(), self.destination.clone())
    }
}

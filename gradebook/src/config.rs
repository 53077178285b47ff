//! Configuration management with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. Environment variables: `GRADEBOOK_*` prefix
//!
//! No config file is read; the tool performs no file I/O.

use config::{Config, ConfigError, Environment};
use serde::{Deserialize, Serialize};

use crate::application::{ApplicationError, ApplicationResult};
use crate::domain::{DEFAULT_PRECISION, MAX_PRECISION, MIN_PRECISION};

/// Environment variable prefix for overrides.
pub const ENV_PREFIX: &str = "GRADEBOOK";

/// Unified configuration for gradebook.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// Significant digits for averages (default: 6, range: 3..=15)
    pub precision: usize,
    /// Colored terminal output (default: true; `NO_COLOR` also disables it)
    pub color: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            precision: DEFAULT_PRECISION,
            color: true,
        }
    }
}

impl Settings {
    /// Load settings: defaults overridden by `GRADEBOOK_*` environment variables.
    pub fn load() -> ApplicationResult<Self> {
        Self::load_from(Environment::with_prefix(ENV_PREFIX).try_parsing(true))
    }

    /// Load settings from an explicit environment source.
    ///
    /// Separated from [`Settings::load`] so tests can inject variables
    /// without touching the process environment.
    pub fn load_from(env: Environment) -> ApplicationResult<Self> {
        let defaults = Self::default();
        let config = Config::builder()
            .set_default("precision", defaults.precision as u64)
            .map_err(config_err)?
            .set_default("color", defaults.color)
            .map_err(config_err)?
            .add_source(env)
            .build()
            .map_err(config_err)?;

        let mut settings: Self = config.try_deserialize().map_err(config_err)?;
        settings.precision = settings.precision.clamp(MIN_PRECISION, MAX_PRECISION);
        Ok(settings)
    }

    /// Apply the color preference to the terminal output layer.
    pub fn apply(&self) {
        if !self.color {
            colored::control::set_override(false);
        }
    }
}

fn config_err(e: ConfigError) -> ApplicationError {
    ApplicationError::Config {
        message: e.to_string(),
    }
}

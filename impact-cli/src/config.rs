//! Session configuration loaded from a TOML file.
//!
//! ```toml
//! require_brand = true
//! log_level = "info"
//! log_file = "shopimpact.log"
//!
//! [multipliers]
//! "Electronics" = 0.40
//! "Garden Tools" = 0.07
//! ```
//!
//! Every key is optional. Multipliers override the seeded table; names the
//! table does not know are added as new categories. Values given on the
//! command line win over the file.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use impact_core::{CategoryMultiplierTable, Session, ValidationError, ValidationPolicy};
use rust_decimal::Decimal;
use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

/// Log filter used when neither the environment, the command line nor the
/// config file sets one.
pub const DEFAULT_LOG_LEVEL: &str = "info";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config file '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid multiplier: {0}")]
    Multiplier(#[from] ValidationError),
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    /// Reject purchases without a brand. Defaults to `true`.
    pub require_brand: Option<bool>,
    pub log_level: Option<String>,
    /// Append log output to this file in addition to stderr.
    pub log_file: Option<PathBuf>,
    pub multipliers: BTreeMap<String, Decimal>,
}

/// Settings given on the command line, applied after the config file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionOverrides {
    pub require_brand: Option<bool>,
    pub multipliers: Vec<(String, Decimal)>,
}

impl AppConfig {
    pub fn from_toml_str(input: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(input)?)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&contents)?;
        debug!(path = %path.display(), overrides = config.multipliers.len(), "loaded config");
        Ok(config)
    }

    /// Loads `path` if given, otherwise returns the defaults.
    pub fn load_optional(path: Option<&Path>) -> Result<Self, ConfigError> {
        path.map_or_else(|| Ok(Self::default()), Self::load)
    }

    /// Effective log filter: command line, then config file, then default.
    pub fn log_level<'a>(
        &'a self,
        cli_level: Option<&'a str>,
    ) -> &'a str {
        cli_level
            .or(self.log_level.as_deref())
            .unwrap_or(DEFAULT_LOG_LEVEL)
    }

    /// Builds a fresh session from the seeded table, this config and the
    /// command-line overrides.
    ///
    /// # Errors
    ///
    /// [`ConfigError::Multiplier`] if any multiplier is negative or names a
    /// blank category.
    pub fn session(
        &self,
        overrides: &SessionOverrides,
    ) -> Result<Session, ConfigError> {
        let mut table = CategoryMultiplierTable::seeded();
        for (category, value) in &self.multipliers {
            table.set(category, *value)?;
        }
        for (category, value) in &overrides.multipliers {
            table.set(category, *value)?;
        }

        let defaults = ValidationPolicy::default();
        let policy = ValidationPolicy {
            require_brand: overrides
                .require_brand
                .or(self.require_brand)
                .unwrap_or(defaults.require_brand),
        };

        Ok(Session::new(table, policy))
    }
}

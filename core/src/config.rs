// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::path::PathBuf;
use std::str::FromStr;

use eventmi_client::{ClientError, EndpointConfig, EventId};
use eventmi_store::{StoreConfig, StoreError};

/// The name of the application, also the config directory name.
pub const APP_NAME: &str = "eventmi-verify";

const BASE_URL_ENV: &str = "EVENTMI_BASE_URL";
const DATABASE_URL_ENV: &str = "EVENTMI_DATABASE_URL";

/// Configuration of a verification run.
#[derive(Debug, Clone, Default, serde::Deserialize, serde::Serialize)]
#[serde(default)]
pub struct Config {
    /// The HTTP endpoint surface.
    pub endpoint: EndpointConfig,

    /// The store behind the endpoints.
    pub store: StoreConfig,

    /// How scenarios obtain the records they work on.
    pub fixture: FixtureConfig,
}

impl Config {
    /// Applies `EVENTMI_BASE_URL` and `EVENTMI_DATABASE_URL` from the process
    /// environment.
    pub fn apply_env(&mut self) {
        self.apply_env_with(|key| std::env::var(key).ok());
    }

    /// Applies environment overrides read through `lookup`. Empty values are
    /// ignored.
    pub fn apply_env_with(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if let Some(url) = get(BASE_URL_ENV) {
            tracing::debug!(env = BASE_URL_ENV, "base URL taken from environment");
            self.endpoint.base_url = url;
        }
        if let Some(url) = get(DATABASE_URL_ENV) {
            tracing::debug!(env = DATABASE_URL_ENV, "database URL taken from environment");
            self.store.database_url = url;
        }
    }

    /// Checks that both connection targets are set.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Missing`] naming the first unset target.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.endpoint.base_url.trim().is_empty() {
            return Err(ConfigError::Missing {
                field: "endpoint.base_url",
                env: BASE_URL_ENV,
            });
        }
        if self.store.database_url.trim().is_empty() {
            return Err(ConfigError::Missing {
                field: "store.database_url",
                env: DATABASE_URL_ENV,
            });
        }
        Ok(())
    }

    /// Renders the configuration as TOML with the database password masked.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_toml_masked(&self) -> Result<String, ConfigError> {
        let mut config = self.clone();
        config.store.database_url = self.store.masked_url();
        Ok(toml::to_string_pretty(&config)?)
    }
}

impl FromStr for Config {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(toml::from_str(s)?)
    }
}

/// Fixture settings.
#[derive(Debug, Clone, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
pub struct FixtureConfig {
    /// Run against this record instead of seeding one per scenario.
    pub existing_id: Option<EventId>,

    /// Delete seeded records after each scenario.
    pub cleanup: bool,

    /// Append a random suffix to the names of created records.
    pub unique_names: bool,

    /// Name prefix of seeded records.
    pub prefix: String,
}

impl Default for FixtureConfig {
    fn default() -> Self {
        Self {
            existing_id: None,
            cleanup: true,
            unique_names: true,
            prefix: APP_NAME.to_string(),
        }
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The config file could not be read.
    #[error("Failed to read config file at {}: {source}", path.display())]
    Read {
        /// Path of the file.
        path: PathBuf,
        /// Underlying IO error.
        source: std::io::Error,
    },

    /// The config file is not valid TOML or has unexpected values.
    #[error("Invalid config: {0}")]
    Parse(#[from] toml::de::Error),

    /// The configuration could not be rendered.
    #[error("Failed to render config: {0}")]
    Render(#[from] toml::ser::Error),

    /// A required value is unset after all layers were applied.
    #[error("Missing {field}: set it in the config file or via {env}")]
    Missing {
        /// Dotted path of the value.
        field: &'static str,
        /// Environment variable that can provide it.
        env: &'static str,
    },

    /// The user config directory could not be determined.
    #[error("User-specific config directory not found")]
    NoConfigDir,

    /// The endpoint settings were rejected.
    #[error(transparent)]
    Endpoint(#[from] ClientError),

    /// The store settings were rejected.
    #[error(transparent)]
    Store(#[from] StoreError),
}

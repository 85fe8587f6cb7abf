// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::path::PathBuf;

use clap::{Arg, ArgMatches, ValueHint, arg, value_parser};
use eventmi_verify_core::{APP_NAME, Config, ConfigError};
use tokio::fs;

const CONFIG_ENV: &str = "EVENTMI_CONFIG";

/// Where the configuration comes from, and the command-line overrides on top.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigArgs {
    pub config: Option<PathBuf>,
    pub base_url: Option<String>,
    pub database_url: Option<String>,
}

impl ConfigArgs {
    pub fn args() -> [Arg; 3] {
        [
            arg!(-c --config [CONFIG] "Path to the configuration file")
                .long_help(
                    "\
Path to the configuration file. Defaults to $EVENTMI_CONFIG, then \
$XDG_CONFIG_HOME/eventmi-verify/config.toml on Linux and MacOS, \
%LOCALAPPDATA%/eventmi-verify/config.toml on Windows.",
                )
                .value_parser(value_parser!(PathBuf))
                .value_hint(ValueHint::FilePath)
                .global(true),
            arg!(--"base-url" <URL> "Base URL of the application, overrides every other source")
                .required(false)
                .value_hint(ValueHint::Url)
                .global(true),
            arg!(--"database-url" <URL> "Store connection URL, overrides every other source")
                .required(false)
                .global(true),
        ]
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            config: matches.get_one("config").cloned(),
            base_url: matches.get_one("base-url").cloned(),
            database_url: matches.get_one("database-url").cloned(),
        }
    }

    /// Loads the file, then applies the environment, then the flags.
    pub async fn load(&self) -> Result<(Config, Option<PathBuf>), ConfigError> {
        let (mut config, source) = parse_config(self.config.clone()).await?;
        config.apply_env();

        if let Some(url) = &self.base_url {
            config.endpoint.base_url.clone_from(url);
        }
        if let Some(url) = &self.database_url {
            config.store.database_url.clone_from(url);
        }
        Ok((config, source))
    }
}

/// Reads the config file, if one is found.
///
/// An explicit path, from the flag or `EVENTMI_CONFIG`, must exist. The
/// default location may be absent, in which case defaults are used.
#[tracing::instrument]
pub async fn parse_config(
    path: Option<PathBuf>,
) -> Result<(Config, Option<PathBuf>), ConfigError> {
    let path = if let Some(path) = path {
        path
    } else if let Ok(env_path) = std::env::var(CONFIG_ENV) {
        PathBuf::from(env_path)
    } else {
        let path = get_config_dir()?.join(APP_NAME).join("config.toml");
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok((Config::default(), None));
        }
        path
    };

    let config = fs::read_to_string(&path)
        .await
        .map_err(|source| ConfigError::Read {
            path: path.clone(),
            source,
        })?
        .parse::<Config>()?;

    tracing::debug!(path = %path.display(), "loaded config file");
    Ok((config, Some(path)))
}

fn get_config_dir() -> Result<PathBuf, ConfigError> {
    #[cfg(unix)]
    let config_dir = xdg::BaseDirectories::new().get_config_home();
    #[cfg(windows)]
    let config_dir = dirs::config_dir();
    config_dir.ok_or(ConfigError::NoConfigDir)
}

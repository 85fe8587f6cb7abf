// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{error::Error, path::Path};

use clap::{ArgAction, ArgMatches, Command, arg};
use eventmi_verify_core::Config;

use crate::config::ConfigArgs;

/// Prints the effective configuration after every layer is applied.
#[derive(Debug, Clone, Copy)]
pub struct CmdConfig {
    pub check: bool,
}

impl CmdConfig {
    pub const NAME: &str = "config";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .about("Show the effective configuration, with secrets masked")
            .arg(
                arg!(--check "Fail if a required value is missing")
                    .action(ArgAction::SetTrue),
            )
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            check: matches.get_flag("check"),
        }
    }

    pub async fn run(self, args: &ConfigArgs) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "showing configuration...");
        let (config, source) = args.load().await?;
        print!("{}", render(&config, source.as_deref())?);

        if self.check {
            config.validate()?;
        }
        Ok(())
    }
}

fn render(config: &Config, source: Option<&Path>) -> Result<String, Box<dyn Error>> {
    let header = match source {
        Some(path) => format!("# Loaded from {}\n", path.display()),
        None => "# No config file found, showing defaults with overrides\n".to_string(),
    };
    Ok(header + &config.to_toml_masked()?)
}

// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{error::Error, ffi::OsString, process::ExitCode};

use clap::{ArgAction, ArgMatches, Command, arg, builder::styling, crate_version};
use colored::Colorize;
use eventmi_verify_core::APP_NAME;

use crate::cmd_config::CmdConfig;
use crate::cmd_generate_completion::CmdGenerateCompletion;
use crate::cmd_list::CmdList;
use crate::cmd_run::CmdRun;
use crate::config::ConfigArgs;
use crate::logging;

/// Run the verifier command-line interface.
pub async fn run() -> ExitCode {
    let dotenv = dotenvy::dotenv();

    let cli = match Cli::parse() {
        Ok(cli) => cli,
        Err(e) => {
            println!("{} {}", "Error:".red(), e);
            return ExitCode::FAILURE;
        }
    };

    logging::init(cli.verbose);
    match dotenv {
        Ok(path) => tracing::debug!(path = %path.display(), "loaded .env file"),
        Err(e) if e.not_found() => {}
        Err(e) => tracing::warn!(err = %e, "failed to load .env file"),
    }

    match cli.run().await {
        Ok(code) => code,
        Err(e) => {
            println!("{} {}", "Error:".red(), e);
            ExitCode::FAILURE
        }
    }
}

/// Command-line interface
#[derive(Debug)]
pub struct Cli {
    /// Configuration sources and overrides
    pub args: ConfigArgs,

    /// Verbosity, from repeated `-v`
    pub verbose: u8,

    /// The command to execute
    pub command: Commands,
}

impl Cli {
    /// Create the command-line interface
    pub fn command() -> Command {
        const STYLES: styling::Styles = styling::Styles::styled()
            .header(styling::AnsiColor::Green.on_default().bold())
            .usage(styling::AnsiColor::Green.on_default().bold())
            .literal(styling::AnsiColor::Blue.on_default().bold())
            .placeholder(styling::AnsiColor::Cyan.on_default());

        Command::new(APP_NAME)
            .about("Drive the event CRUD endpoints and check the store behind them.")
            .author("Zexin Yuan <aim@yzx9.xyz>")
            .version(crate_version!())
            .styles(STYLES)
            .subcommand_required(true)
            .arg_required_else_help(true)
            .args(ConfigArgs::args())
            .arg(
                arg!(-v --verbose... "Log more, repeat for debug output")
                    .action(ArgAction::Count)
                    .global(true),
            )
            .subcommand(CmdRun::command())
            .subcommand(CmdList::command())
            .subcommand(CmdConfig::command())
            .subcommand(CmdGenerateCompletion::command())
    }

    /// Parse the command-line arguments
    pub fn parse() -> Result<Self, Box<dyn Error>> {
        let commands = Self::command();
        let matches = commands.get_matches();
        Self::from(&matches)
    }

    /// Parse the specified arguments
    pub fn try_parse_from<I, T>(args: I) -> Result<Self, Box<dyn Error>>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let commands = Self::command();
        let matches = commands.try_get_matches_from(args)?;
        Self::from(&matches)
    }

    /// Create a CLI instance from the `ArgMatches`
    pub fn from(matches: &ArgMatches) -> Result<Self, Box<dyn Error>> {
        use Commands::*;
        let command = match matches.subcommand() {
            Some((CmdRun::NAME, matches)) => Run(CmdRun::from(matches)),
            Some((CmdList::NAME, matches)) => List(CmdList::from(matches)),
            Some((CmdConfig::NAME, matches)) => Config(CmdConfig::from(matches)),
            Some((CmdGenerateCompletion::NAME, matches)) => {
                GenerateCompletion(CmdGenerateCompletion::from(matches))
            }
            Some((name, _)) => return Err(format!("Unknown command: {name}").into()),
            None => return Err("No command given".into()),
        };

        Ok(Cli {
            args: ConfigArgs::from(matches),
            verbose: matches.get_count("verbose"),
            command,
        })
    }

    /// Run the command
    pub async fn run(self) -> Result<ExitCode, Box<dyn Error>> {
        self.command.run(&self.args).await
    }
}

/// The commands available in the CLI
#[derive(Debug, Clone)]
pub enum Commands {
    /// Run verification scenarios
    Run(CmdRun),

    /// List the scenarios
    List(CmdList),

    /// Show the effective configuration
    Config(CmdConfig),

    /// Generate shell completion
    GenerateCompletion(CmdGenerateCompletion),
}

impl Commands {
    /// Run the command with the given configuration sources
    pub async fn run(self, args: &ConfigArgs) -> Result<ExitCode, Box<dyn Error>> {
        use Commands::*;
        match self {
            Run(a) => a.run(args).await,
            List(a) => a.run().map(|()| ExitCode::SUCCESS),
            Config(a) => a.run(args).await.map(|()| ExitCode::SUCCESS),
            GenerateCompletion(a) => a.run().map(|()| ExitCode::SUCCESS),
        }
    }
}

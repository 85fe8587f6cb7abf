// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{error::Error, process::ExitCode};

use clap::{ArgMatches, Command, arg, value_parser};
use eventmi_verify_core::{Harness, Scenario};

use crate::arg::{CommonArgs, OutputFormat};
use crate::config::ConfigArgs;
use crate::report_formatter::ReportFormatter;

/// Runs scenarios against the configured application and store.
#[derive(Debug, Clone)]
pub struct CmdRun {
    pub scenarios: Vec<Scenario>,
    pub output_format: OutputFormat,
}

impl CmdRun {
    pub const NAME: &str = "run";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .about("Run verification scenarios, all of them by default")
            .arg(
                arg!([SCENARIO]... "Scenarios to run, see `list`")
                    .value_parser(value_parser!(Scenario)),
            )
            .arg(CommonArgs::output_format())
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            scenarios: matches
                .get_many::<Scenario>("SCENARIO")
                .map(|a| a.copied().collect())
                .unwrap_or_default(),
            output_format: CommonArgs::get_output_format(matches),
        }
    }

    /// Exits with failure when any scenario failed.
    pub async fn run(self, args: &ConfigArgs) -> Result<ExitCode, Box<dyn Error>> {
        tracing::debug!(?self, "running scenarios...");
        let (config, _) = args.load().await?;
        let harness = Harness::from_config(&config)?;

        let scenarios = if self.scenarios.is_empty() {
            Scenario::ALL.to_vec()
        } else {
            self.scenarios
        };
        let report = harness.run(&scenarios).await;
        println!("{}", ReportFormatter::new(self.output_format).format(&report)?);

        Ok(if report.is_success() {
            ExitCode::SUCCESS
        } else {
            ExitCode::FAILURE
        })
    }
}

// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{borrow::Cow, error::Error};

use clap::{ArgMatches, Command};
use eventmi_verify_core::Scenario;

use crate::table::{Table, TableColumn};

/// Lists the known scenarios in run order.
#[derive(Debug, Clone, Copy)]
pub struct CmdList;

impl CmdList {
    pub const NAME: &str = "list";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .alias("ls")
            .about("List the verification scenarios, in run order")
    }

    pub fn from(_matches: &ArgMatches) -> Self {
        Self
    }

    pub fn run(self) -> Result<(), Box<dyn Error>> {
        tracing::debug!("listing scenarios...");
        print!("{}", render());
        Ok(())
    }
}

fn render() -> String {
    const COLUMNS: [ScenarioColumn; 2] = [ScenarioColumn::Name, ScenarioColumn::Description];
    Table::new(&COLUMNS, &Scenario::ALL).to_string()
}

#[derive(Debug, Clone, Copy)]
enum ScenarioColumn {
    Name,
    Description,
}

impl TableColumn<Scenario> for ScenarioColumn {
    fn name(&self) -> Cow<'_, str> {
        match self {
            ScenarioColumn::Name => "Scenario".into(),
            ScenarioColumn::Description => "Description".into(),
        }
    }

    fn format<'a>(&self, data: &'a Scenario) -> Cow<'a, str> {
        match self {
            ScenarioColumn::Name => data.name().into(),
            ScenarioColumn::Description => data.description().into(),
        }
    }
}

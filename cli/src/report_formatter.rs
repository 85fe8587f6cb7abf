// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{borrow::Cow, fmt};

use colored::{Color, Colorize};
use eventmi_verify_core::{Report, ScenarioOutcome};

use crate::arg::OutputFormat;
use crate::table::{PaddingDirection, Table, TableColumn};

#[derive(Debug, Clone, Copy)]
pub struct ReportFormatter {
    format: OutputFormat,
}

impl ReportFormatter {
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    pub fn format(self, report: &Report) -> Result<String, Box<dyn std::error::Error>> {
        Ok(match self.format {
            OutputFormat::Json => report.to_json()?,
            OutputFormat::Table => ReportTable { report }.to_string(),
        })
    }
}

struct ReportTable<'a> {
    report: &'a Report,
}

impl fmt::Display for ReportTable<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        const COLUMNS: [OutcomeColumn; 4] = [
            OutcomeColumn::Status,
            OutcomeColumn::Scenario,
            OutcomeColumn::Elapsed,
            OutcomeColumn::Detail,
        ];

        write!(f, "{}", Table::new(&COLUMNS, &self.report.outcomes))?;
        writeln!(f)?;
        write!(f, "{}", summary(self.report))
    }
}

fn summary(report: &Report) -> String {
    let passed = format!("{} passed", report.passed());
    let failed = format!("{} failed", report.failed());
    if report.is_success() {
        format!("{}, {}", passed.green(), failed)
    } else {
        format!("{}, {}", passed, failed.red())
    }
}

#[derive(Debug, Clone, Copy)]
enum OutcomeColumn {
    Status,
    Scenario,
    Elapsed,
    Detail,
}

impl TableColumn<ScenarioOutcome> for OutcomeColumn {
    fn name(&self) -> Cow<'_, str> {
        match self {
            OutcomeColumn::Status => "Status",
            OutcomeColumn::Scenario => "Scenario",
            OutcomeColumn::Elapsed => "Elapsed",
            OutcomeColumn::Detail => "Detail",
        }
        .into()
    }

    fn format<'a>(&self, data: &'a ScenarioOutcome) -> Cow<'a, str> {
        match self {
            OutcomeColumn::Status if data.passed => "PASS".into(),
            OutcomeColumn::Status => "FAIL".into(),
            OutcomeColumn::Scenario => data.scenario.name().into(),
            OutcomeColumn::Elapsed => format!("{} ms", data.elapsed.as_millis()).into(),
            OutcomeColumn::Detail => match &data.failure {
                Some(failure) => failure.message.as_str().into(),
                None => "".into(),
            },
        }
    }

    fn padding_direction(&self) -> PaddingDirection {
        match self {
            OutcomeColumn::Elapsed => PaddingDirection::Right,
            _ => PaddingDirection::Left,
        }
    }

    fn get_color(&self, data: &ScenarioOutcome) -> Option<Color> {
        match self {
            OutcomeColumn::Status if data.passed => Some(Color::Green),
            OutcomeColumn::Status => Some(Color::Red),
            _ => None,
        }
    }
}

// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::time::Duration;

use jiff::Timestamp;

use crate::error::Failure;
use crate::scenario::Scenario;

/// Outcome of a verification run.
#[derive(Debug, Clone, serde::Serialize)]
pub struct Report {
    /// When the run started.
    pub started_at: Timestamp,
    /// One outcome per scenario, in run order.
    pub outcomes: Vec<ScenarioOutcome>,
}

impl Report {
    pub(crate) fn new() -> Self {
        Self {
            started_at: Timestamp::now(),
            outcomes: Vec::new(),
        }
    }

    pub(crate) fn push(&mut self, outcome: ScenarioOutcome) {
        self.outcomes.push(outcome);
    }

    /// Number of passed scenarios.
    #[must_use]
    pub fn passed(&self) -> usize {
        self.outcomes.iter().filter(|a| a.passed).count()
    }

    /// Number of failed scenarios.
    #[must_use]
    pub fn failed(&self) -> usize {
        self.outcomes.len() - self.passed()
    }

    /// Whether every scenario passed.
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.outcomes.iter().all(|a| a.passed)
    }

    /// The outcome of `scenario`, if it was run.
    #[must_use]
    pub fn outcome(&self, scenario: Scenario) -> Option<&ScenarioOutcome> {
        self.outcomes.iter().find(|a| a.scenario == scenario)
    }

    /// Renders the report as pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

/// Outcome of a single scenario.
#[derive(Debug, Clone, serde::Serialize)]
pub struct ScenarioOutcome {
    pub scenario: Scenario,
    pub passed: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub failure: Option<FailureSummary>,
    #[serde(rename = "elapsed_ms", serialize_with = "as_millis")]
    pub elapsed: Duration,
}

impl ScenarioOutcome {
    pub(crate) fn new(scenario: Scenario, result: Result<(), Failure>, elapsed: Duration) -> Self {
        let failure = result.err().map(|e| FailureSummary {
            kind: e.kind(),
            message: e.to_string(),
        });
        Self {
            scenario,
            passed: failure.is_none(),
            failure,
            elapsed,
        }
    }
}

/// Kind and message of a [`Failure`], detached from its source.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct FailureSummary {
    /// See [`Failure::kind`].
    pub kind: &'static str,
    pub message: String,
}

fn as_millis<S: serde::Serializer>(d: &Duration, s: S) -> Result<S::Ok, S::Error> {
    s.serialize_u64(u64::try_from(d.as_millis()).unwrap_or(u64::MAX))
}

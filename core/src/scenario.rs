// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::fmt;
use std::str::FromStr;

/// A verification scenario.
///
/// Variants are declared in run order.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Deserialize, serde::Serialize,
)]
#[serde(rename_all = "kebab-case")]
pub enum Scenario {
    /// The list page renders.
    List,
    /// The creation form renders.
    AddForm,
    /// A valid creation is stored as submitted.
    AddSubmit,
    /// The details page of a known record renders.
    Details,
    /// The edit form of a known record renders.
    EditForm,
    /// An edit with matching identifiers is stored as submitted.
    EditSubmit,
    /// An edit with mismatched identifiers is refused and changes nothing.
    EditMismatch,
    /// An edit missing required fields re-renders the form and changes nothing.
    EditIncomplete,
    /// A deletion removes the record, and repeating it is harmless.
    Delete,
}

impl Scenario {
    /// Every scenario, in run order.
    pub const ALL: [Scenario; 9] = [
        Scenario::List,
        Scenario::AddForm,
        Scenario::AddSubmit,
        Scenario::Details,
        Scenario::EditForm,
        Scenario::EditSubmit,
        Scenario::EditMismatch,
        Scenario::EditIncomplete,
        Scenario::Delete,
    ];

    /// Stable kebab-case name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Scenario::List => "list",
            Scenario::AddForm => "add-form",
            Scenario::AddSubmit => "add-submit",
            Scenario::Details => "details",
            Scenario::EditForm => "edit-form",
            Scenario::EditSubmit => "edit-submit",
            Scenario::EditMismatch => "edit-mismatch",
            Scenario::EditIncomplete => "edit-incomplete",
            Scenario::Delete => "delete",
        }
    }

    /// One-line description.
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Scenario::List => "GET the list page, expect 200",
            Scenario::AddForm => "GET the creation form, expect 200",
            Scenario::AddSubmit => "POST a new event, expect 200 and the record stored as submitted",
            Scenario::Details => "GET the details page of a known event, expect 200",
            Scenario::EditForm => "GET the edit form of a known event, expect 200",
            Scenario::EditSubmit => "POST an edit with matching ids, expect 200 and the record updated",
            Scenario::EditMismatch => "POST an edit with mismatched ids, expect 404 and no change",
            Scenario::EditIncomplete => "POST an edit with only Id and Name, expect the form again and no change",
            Scenario::Delete => "POST a deletion, expect 200 and the record gone",
        }
    }
}

impl fmt::Display for Scenario {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Scenario {
    type Err = UnknownScenario;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Scenario::ALL
            .into_iter()
            .find(|a| a.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| UnknownScenario(s.to_string()))
    }
}

/// A name that matches no scenario.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown scenario '{0}'")]
pub struct UnknownScenario(pub String);

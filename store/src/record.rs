// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use eventmi_client::{EventForm, EventId, same_minute};
use jiff::civil::DateTime;

use crate::error::StoreError;

/// An event row as stored.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct EventRecord {
    /// Identifier assigned by the store.
    pub id: EventId,
    /// Event name.
    pub name: String,
    /// Start time.
    pub start: DateTime,
    /// End time.
    pub end: DateTime,
    /// Location.
    pub place: String,
}

impl EventRecord {
    /// Names of the fields carried by `form` that differ from this record.
    ///
    /// Fields absent from the form are not compared, timestamps are compared
    /// at minute precision.
    #[must_use]
    pub fn mismatches(&self, form: &EventForm) -> Vec<&'static str> {
        let mut fields = Vec::new();
        if form.id.is_some_and(|id| id != self.id) {
            fields.push("id");
        }
        if form.name.as_ref().is_some_and(|name| *name != self.name) {
            fields.push("name");
        }
        if form.start.is_some_and(|start| !same_minute(start, self.start)) {
            fields.push("start");
        }
        if form.end.is_some_and(|end| !same_minute(end, self.end)) {
            fields.push("end");
        }
        if form.place.as_ref().is_some_and(|place| *place != self.place) {
            fields.push("place");
        }
        fields
    }

    /// Whether every field carried by `form` equals this record.
    #[must_use]
    pub fn matches(&self, form: &EventForm) -> bool {
        self.mismatches(form).is_empty()
    }

    /// A complete edit form reproducing this record, body id included.
    #[must_use]
    pub fn to_form(&self) -> EventForm {
        EventForm::full(self.name.clone(), self.start, self.end, self.place.clone()).id(self.id)
    }
}

/// A row as fetched, before validation.
#[derive(Debug, sqlx::FromRow)]
pub(crate) struct EventRow {
    pub id: i64,
    pub name: Option<String>,
    pub start: Option<String>,
    pub end: Option<String>,
    pub place: Option<String>,
}

impl TryFrom<EventRow> for EventRecord {
    type Error = StoreError;

    fn try_from(row: EventRow) -> Result<Self, Self::Error> {
        Ok(Self {
            id: EventId::new(row.id),
            name: required("name", row.name)?,
            start: parse_stored("start", &required("start", row.start)?)?,
            end: parse_stored("end", &required("end", row.end)?)?,
            place: required("place", row.place)?,
        })
    }
}

fn required(column: &'static str, value: Option<String>) -> Result<String, StoreError> {
    value.ok_or_else(|| StoreError::Decode {
        column,
        reason: "unexpected NULL".to_string(),
    })
}

/// Parses a stored timestamp: ISO 8601, `T` or space separated, optional
/// fractional seconds.
fn parse_stored(column: &'static str, value: &str) -> Result<DateTime, StoreError> {
    value
        .trim()
        .parse::<DateTime>()
        .map_err(|e| StoreError::Decode {
            column,
            reason: format!("'{value}' is not a datetime: {e}"),
        })
}

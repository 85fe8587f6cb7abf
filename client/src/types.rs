// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

use jiff::civil::DateTime;

use crate::datetime::format_wire;

/// Identifier of an event record.
///
/// Assigned by the store on creation and never changed afterwards.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(transparent)]
pub struct EventId(i64);

impl EventId {
    /// Creates a new `EventId`.
    #[must_use]
    pub const fn new(id: i64) -> Self {
        Self(id)
    }

    /// Returns the inner integer value.
    #[must_use]
    pub const fn get(self) -> i64 {
        self.0
    }
}

impl fmt::Display for EventId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl FromStr for EventId {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse().map(Self)
    }
}

impl From<i64> for EventId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

/// Field values submitted through the event forms.
///
/// Every field is optional: absent fields are left out of the request body,
/// which is how incomplete submissions are exercised.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventForm {
    /// Body identifier, only meaningful for edits.
    pub id: Option<EventId>,
    /// Event name.
    pub name: Option<String>,
    /// Start time.
    pub start: Option<DateTime>,
    /// End time.
    pub end: Option<DateTime>,
    /// Location.
    pub place: Option<String>,
}

impl EventForm {
    /// Creates an empty form.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a form with every creation field set.
    #[must_use]
    pub fn full(
        name: impl Into<String>,
        start: DateTime,
        end: DateTime,
        place: impl Into<String>,
    ) -> Self {
        Self {
            id: None,
            name: Some(name.into()),
            start: Some(start),
            end: Some(end),
            place: Some(place.into()),
        }
    }

    /// Sets the body identifier.
    #[must_use]
    pub fn id(mut self, id: EventId) -> Self {
        self.id = Some(id);
        self
    }

    /// Sets the name.
    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Sets the start time.
    #[must_use]
    pub fn start(mut self, start: DateTime) -> Self {
        self.start = Some(start);
        self
    }

    /// Sets the end time.
    #[must_use]
    pub fn end(mut self, end: DateTime) -> Self {
        self.end = Some(end);
        self
    }

    /// Sets the location.
    #[must_use]
    pub fn place(mut self, place: impl Into<String>) -> Self {
        self.place = Some(place.into());
        self
    }

    /// Whether all fields required to create an event are present.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.name.is_some() && self.start.is_some() && self.end.is_some() && self.place.is_some()
    }

    pub(crate) fn to_wire(&self) -> WireForm<'_> {
        WireForm {
            id: self.id.map(EventId::get),
            name: self.name.as_deref(),
            start: self.start.map(format_wire),
            end: self.end.map(format_wire),
            place: self.place.as_deref(),
        }
    }
}

/// The form as the application's model binder expects it.
#[derive(Debug, serde::Serialize)]
pub(crate) struct WireForm<'a> {
    #[serde(rename = "Id", skip_serializing_if = "Option::is_none")]
    id: Option<i64>,
    #[serde(rename = "Name", skip_serializing_if = "Option::is_none")]
    name: Option<&'a str>,
    #[serde(rename = "Start", skip_serializing_if = "Option::is_none")]
    start: Option<String>,
    #[serde(rename = "End", skip_serializing_if = "Option::is_none")]
    end: Option<String>,
    #[serde(rename = "Place", skip_serializing_if = "Option::is_none")]
    place: Option<&'a str>,
}

impl WireForm<'_> {
    pub(crate) fn is_empty(&self) -> bool {
        self.id.is_none()
            && self.name.is_none()
            && self.start.is_none()
            && self.end.is_none()
            && self.place.is_none()
    }
}

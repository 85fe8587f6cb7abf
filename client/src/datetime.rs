// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Timestamp encoding used by the event forms.
//!
//! The application binds `MM/dd/yyyy hh:mm tt`: a 12-hour clock with an
//! `AM`/`PM` marker and no zone. Values stay civil datetimes on both sides, so
//! the host's local timezone never takes part.

use jiff::civil::DateTime;

use crate::error::ClientError;

/// `strftime` pattern of the wire format, e.g. `09/29/2024 07:00 PM`.
pub const WIRE_FORMAT: &str = "%m/%d/%Y %I:%M %p";

/// Formats a civil datetime for a form field.
///
/// Seconds are dropped, the wire format has minute precision.
#[must_use]
pub fn format_wire(dt: DateTime) -> String {
    dt.strftime(WIRE_FORMAT).to_string()
}

/// Parses a form field value back into a civil datetime.
///
/// # Errors
///
/// Returns an error if the value does not match [`WIRE_FORMAT`].
pub fn parse_wire(s: &str) -> Result<DateTime, ClientError> {
    DateTime::strptime(WIRE_FORMAT, s.trim()).map_err(|e| ClientError::InvalidTimestamp {
        value: s.to_string(),
        reason: e.to_string(),
    })
}

/// Whether two datetimes agree at the precision the wire format carries.
#[must_use]
pub fn same_minute(a: DateTime, b: DateTime) -> bool {
    a.date() == b.date() && a.hour() == b.hour() && a.minute() == b.minute()
}

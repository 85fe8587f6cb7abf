// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

/// Endpoint client errors.
///
/// A response with any status code is not an error here; only failing to get
/// a response at all is.
#[non_exhaustive]
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// The endpoint could not be reached, or the round trip did not complete.
    #[error("Transport error: {0}")]
    Transport(String),

    /// The form body could not be encoded.
    #[error("Form encoding error: {0}")]
    Encode(String),

    /// A timestamp did not match the wire format.
    #[error("Invalid timestamp '{value}': {reason}")]
    InvalidTimestamp {
        /// The rejected input.
        value: String,
        /// Why parsing failed.
        reason: String,
    },

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<reqwest::Error> for ClientError {
    fn from(e: reqwest::Error) -> Self {
        Self::Transport(e.to_string())
    }
}

impl From<serde_urlencoded::ser::Error> for ClientError {
    fn from(e: serde_urlencoded::ser::Error) -> Self {
        Self::Encode(e.to_string())
    }
}

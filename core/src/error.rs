// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use eventmi_client::{ClientError, StatusCode};
use eventmi_store::StoreError;

/// Why a scenario failed.
#[derive(Debug, thiserror::Error)]
pub enum Failure {
    /// No response arrived.
    #[error(transparent)]
    Transport(ClientError),

    /// The request could not be built from the configuration.
    #[error(transparent)]
    Request(ClientError),

    /// A response arrived with the wrong status.
    #[error("{operation}: expected status {expected}, got {actual}")]
    UnexpectedStatus {
        /// Operation that was dispatched.
        operation: String,
        /// Status the scenario requires.
        expected: StatusCode,
        /// Status that arrived.
        actual: StatusCode,
    },

    /// The endpoint redirected where it should have re-rendered.
    #[error("{operation}: expected a re-rendered page, was redirected to {location}")]
    UnexpectedRedirect {
        /// Operation that was dispatched.
        operation: String,
        /// Final URL after the redirect.
        location: String,
    },

    /// The store does not reflect what the endpoint reported.
    #[error("Inconsistency: {0}")]
    Inconsistency(String),

    /// The store could not be queried.
    #[error(transparent)]
    Store(#[from] StoreError),

    /// A record to work on could not be established.
    #[error("Fixture error: {0}")]
    Fixture(String),
}

impl Failure {
    /// Short, stable name of the failure kind.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Transport(_) => "transport",
            Self::Request(_) => "request",
            Self::UnexpectedStatus { .. } => "unexpected-status",
            Self::UnexpectedRedirect { .. } => "unexpected-redirect",
            Self::Inconsistency(_) => "inconsistency",
            Self::Store(_) => "store",
            Self::Fixture(_) => "fixture",
        }
    }
}

impl From<ClientError> for Failure {
    fn from(e: ClientError) -> Self {
        match e {
            ClientError::Transport(_) => Self::Transport(e),
            _ => Self::Request(e),
        }
    }
}

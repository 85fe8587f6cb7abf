// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

/// Store inspector errors.
///
/// A lookup that matches no row is not an error.
#[non_exhaustive]
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The store could not be opened.
    #[error("Failed to connect to the store: {0}")]
    Connect(String),

    /// A query failed.
    #[error("Query failed: {0}")]
    Query(#[from] sqlx::Error),

    /// A SQL Server query failed.
    #[cfg(feature = "mssql")]
    #[error("Query failed: {0}")]
    Mssql(#[from] tiberius::error::Error),

    /// A row held a value the record type cannot represent.
    #[error("Invalid value in column '{column}': {reason}")]
    Decode {
        /// Column holding the value.
        column: &'static str,
        /// Why the value was rejected.
        reason: String,
    },

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),
}

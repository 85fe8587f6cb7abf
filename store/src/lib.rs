// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Read-only inspector for the Eventmi event table.
//!
//! Lookups report absence as `Ok(None)`, and every call holds its own
//! connection for exactly as long as the query runs. SQLite is built in,
//! SQL Server comes with the `mssql` feature.

#![warn(
    trivial_casts,
    trivial_numeric_casts,
    missing_copy_implementations,
    missing_debug_implementations,
    missing_docs,
    unsafe_code,
    unstable_features,
    unused_import_braces,
    unused_qualifications,
    clippy::dbg_macro,
    clippy::indexing_slicing,
    clippy::pedantic
)]

mod config;
mod connection;
mod dialect;
mod error;
mod inspector;
#[cfg(feature = "mssql")]
mod mssql;
mod record;
mod sql;

pub use crate::config::{ColumnMap, StoreConfig};
pub use crate::dialect::Dialect;
pub use crate::error::StoreError;
pub use crate::inspector::EventStore;
pub use crate::record::EventRecord;
pub use crate::sql::SqlStore;

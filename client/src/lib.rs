// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Request builder and endpoint client for the Eventmi event CRUD surface.
//!
//! Requests are built as inspectable [`RequestDescriptor`]s first and dispatched
//! by [`EndpointClient`] second, so the exact method, path, headers and
//! form-encoded body of every call can be checked without a network.

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
// Allow certain clippy lints that are too restrictive for this crate
#![allow(clippy::similar_names, clippy::single_match_else)]

mod client;
mod config;
mod datetime;
mod error;
mod http;
mod request;
mod types;

pub use crate::client::{EndpointClient, EndpointResponse};
pub use crate::config::{EndpointConfig, RouteTable};
pub use crate::datetime::{WIRE_FORMAT, format_wire, parse_wire, same_minute};
pub use crate::error::ClientError;
pub use crate::request::{EventRequest, Operation, RequestDescriptor};
pub use crate::types::{EventForm, EventId};

/// Re-exported so callers can compare statuses without depending on `reqwest`.
pub use reqwest::{Method, StatusCode};

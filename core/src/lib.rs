// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Lifecycle verification for the Eventmi event CRUD surface.
//!
//! A [`Harness`] drives the HTTP endpoints through an
//! [`EndpointClient`](eventmi_client::EndpointClient), reads the store behind
//! them through an [`EventStore`](eventmi_store::EventStore), and checks that
//! both agree for each [`Scenario`].

mod config;
mod error;
mod fixture;
mod harness;
mod report;
mod scenario;

pub use crate::config::{APP_NAME, Config, ConfigError, FixtureConfig};
pub use crate::error::Failure;
pub use crate::harness::Harness;
pub use crate::report::{FailureSummary, Report, ScenarioOutcome};
pub use crate::scenario::{Scenario, UnknownScenario};

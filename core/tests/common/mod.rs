// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Common test utilities for harness tests.
//!
//! This module provides:
//! - A fake Eventmi application served by wiremock
//! - An in-memory store sharing the application's records
//! - A test environment wiring both into a harness

mod app;
mod store;

use std::sync::{Arc, Mutex};

use eventmi_client::{EndpointClient, EndpointConfig, EventId};
use eventmi_store::EventRecord;
use eventmi_verify_core::{FixtureConfig, Harness};
use jiff::civil::date;
use wiremock::matchers::any;
use wiremock::{Mock, MockServer};

#[allow(unused_imports)]
pub use app::{AppState, FakeApp, Faults, SharedState, lock};
pub use store::MemoryStore;

/// A running fake application and the state behind it.
pub struct TestEnv {
    pub server: MockServer,
    pub state: SharedState,
}

impl TestEnv {
    pub async fn start() -> Self {
        let server = MockServer::start().await;
        let state = SharedState::new(Mutex::new(AppState::default()));

        Mock::given(any())
            .respond_with(FakeApp::new(Arc::clone(&state)))
            .mount(&server)
            .await;

        Self { server, state }
    }

    /// A harness against the fake application with the given fixture settings.
    pub fn harness(&self, fixture: FixtureConfig) -> Harness<MemoryStore> {
        self.harness_with(self.endpoint(), fixture)
    }

    /// Endpoint settings pointing at the fake application.
    pub fn endpoint(&self) -> EndpointConfig {
        EndpointConfig {
            base_url: self.server.uri(),
            ..Default::default()
        }
    }

    /// A harness with custom endpoint settings.
    pub fn harness_with(
        &self,
        endpoint: EndpointConfig,
        fixture: FixtureConfig,
    ) -> Harness<MemoryStore> {
        let client = EndpointClient::new(endpoint).expect("Failed to create client");
        Harness::new(client, MemoryStore::new(Arc::clone(&self.state)), fixture)
    }

    pub fn set_faults(&self, faults: Faults) {
        lock(&self.state).faults = faults;
    }

    /// Inserts a record directly, bypassing the endpoints.
    pub fn insert(&self, name: &str) -> EventId {
        let day = date(2024, 5, 4);
        lock(&self.state).insert(name, day.at(18, 0, 0, 0), day.at(21, 30, 0, 0), "Plovdiv")
    }

    pub fn records(&self) -> Vec<EventRecord> {
        lock(&self.state).records.values().cloned().collect()
    }
}

/// Fixture settings that keep every record created during a test.
#[allow(dead_code)]
pub fn keep_records() -> FixtureConfig {
    FixtureConfig {
        cleanup: false,
        ..Default::default()
    }
}

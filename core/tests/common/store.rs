// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! In-memory store reading the fake application's records.

use async_trait::async_trait;
use eventmi_client::EventId;
use eventmi_store::{EventRecord, EventStore, StoreError};

use crate::common::app::{SharedState, lock};

#[derive(Debug, Clone)]
pub struct MemoryStore {
    state: SharedState,
}

impl MemoryStore {
    pub fn new(state: SharedState) -> Self {
        Self { state }
    }
}

#[async_trait]
impl EventStore for MemoryStore {
    async fn get_by_id(&self, id: EventId) -> Result<Option<EventRecord>, StoreError> {
        let mut state = lock(&self.state);
        state.store_call()?;
        Ok(state.records.get(&id.get()).cloned())
    }

    async fn get_by_name(&self, name: &str) -> Result<Option<EventRecord>, StoreError> {
        let mut state = lock(&self.state);
        state.store_call()?;
        Ok(state.records.values().find(|a| a.name == name).cloned())
    }

    async fn get_newest_by_name(&self, name: &str) -> Result<Option<EventRecord>, StoreError> {
        let mut state = lock(&self.state);
        state.store_call()?;
        Ok(state.records.values().rev().find(|a| a.name == name).cloned())
    }
}

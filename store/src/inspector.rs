// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use async_trait::async_trait;
use eventmi_client::EventId;

use crate::error::StoreError;
use crate::record::EventRecord;

/// Read-only access to the event records behind the endpoint surface.
///
/// Absence is `Ok(None)`; errors are reserved for a store that cannot answer.
#[async_trait]
pub trait EventStore: Send + Sync {
    /// Fetches the record with the given identifier.
    async fn get_by_id(&self, id: EventId) -> Result<Option<EventRecord>, StoreError>;

    /// Fetches the record with the given name, lowest identifier first when
    /// names repeat.
    async fn get_by_name(&self, name: &str) -> Result<Option<EventRecord>, StoreError>;

    /// Fetches the record with the given name, highest identifier first when
    /// names repeat.
    async fn get_newest_by_name(&self, name: &str) -> Result<Option<EventRecord>, StoreError>;

    /// Whether a record with the given name exists.
    async fn exists_by_name(&self, name: &str) -> Result<bool, StoreError> {
        Ok(self.get_by_name(name).await?.is_some())
    }
}

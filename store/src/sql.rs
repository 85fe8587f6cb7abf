// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use async_trait::async_trait;
use eventmi_client::EventId;

use crate::config::StoreConfig;
use crate::connection::{Connector, Key};
use crate::dialect::{Dialect, Queries};
use crate::error::StoreError;
use crate::inspector::EventStore;
use crate::record::EventRecord;

/// SQL-backed store inspector.
///
/// SQLite is always available; SQL Server needs the `mssql` feature. The
/// backend is picked from the shape of the connection string, see
/// [`Dialect::detect`].
#[derive(Debug, Clone)]
pub struct SqlStore {
    connector: Connector,
    queries: Queries,
}

impl SqlStore {
    /// Creates a new inspector. No connection is opened until the first query.
    ///
    /// # Errors
    ///
    /// Returns an error if the URL is invalid or a table or column name is not
    /// a plain identifier.
    pub fn new(config: &StoreConfig) -> Result<Self, StoreError> {
        let connector = Connector::new(&config.database_url)?;
        let queries = Queries::new(connector.dialect(), config)?;

        tracing::debug!(table = %config.table, dialect = ?connector.dialect(), "prepared store queries");
        Ok(Self { connector, queries })
    }

    /// The SQL flavor this store speaks.
    #[must_use]
    pub fn dialect(&self) -> Dialect {
        self.connector.dialect()
    }

    async fn fetch_record(&self, sql: &str, key: Key<'_>) -> Result<Option<EventRecord>, StoreError> {
        self.connector
            .fetch_row(sql, key)
            .await?
            .map(EventRecord::try_from)
            .transpose()
    }
}

#[async_trait]
impl EventStore for SqlStore {
    #[tracing::instrument(skip(self))]
    async fn get_by_id(&self, id: EventId) -> Result<Option<EventRecord>, StoreError> {
        self.fetch_record(&self.queries.by_id, Key::Id(id)).await
    }

    #[tracing::instrument(skip(self))]
    async fn get_by_name(&self, name: &str) -> Result<Option<EventRecord>, StoreError> {
        self.fetch_record(&self.queries.oldest_by_name, Key::Name(name))
            .await
    }

    #[tracing::instrument(skip(self))]
    async fn get_newest_by_name(&self, name: &str) -> Result<Option<EventRecord>, StoreError> {
        self.fetch_record(&self.queries.newest_by_name, Key::Name(name))
            .await
    }

    #[tracing::instrument(skip(self))]
    async fn exists_by_name(&self, name: &str) -> Result<bool, StoreError> {
        self.connector
            .fetch_flag(&self.queries.exists_by_name, Key::Name(name))
            .await
    }
}

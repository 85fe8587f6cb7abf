// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::str::FromStr;

use eventmi_client::EventId;
use sqlx::sqlite::{SqliteConnectOptions, SqliteConnection};
use sqlx::{ConnectOptions, Connection, Sqlite};

use crate::dialect::Dialect;
use crate::error::StoreError;
use crate::record::EventRow;

/// Lookup key bound as the single query parameter.
#[derive(Debug, Clone, Copy)]
pub(crate) enum Key<'a> {
    Id(EventId),
    Name(&'a str),
}

/// Opens one connection per inspection call and closes it before returning,
/// whether the query succeeded or not.
#[derive(Debug, Clone)]
pub(crate) enum Connector {
    /// Read-only SQLite connections.
    Sqlite(SqliteConnectOptions),
    /// SQL Server connections over TDS.
    #[cfg(feature = "mssql")]
    Mssql(tiberius::Config),
}

impl Connector {
    pub fn new(database_url: &str) -> Result<Self, StoreError> {
        if database_url.trim().is_empty() {
            return Err(StoreError::Config("database URL is empty".to_string()));
        }

        match Dialect::detect(database_url) {
            Dialect::Sqlite => {
                let options = SqliteConnectOptions::from_str(database_url)
                    .map_err(|e| StoreError::Config(format!("invalid database URL: {e}")))?
                    .read_only(true);
                Ok(Self::Sqlite(options))
            }
            #[cfg(feature = "mssql")]
            Dialect::Mssql => crate::mssql::parse_config(database_url).map(Self::Mssql),
            #[cfg(not(feature = "mssql"))]
            Dialect::Mssql => Err(StoreError::Config(
                "SQL Server connection strings need the `mssql` feature".to_string(),
            )),
        }
    }

    pub fn dialect(&self) -> Dialect {
        match self {
            Self::Sqlite(_) => Dialect::Sqlite,
            #[cfg(feature = "mssql")]
            Self::Mssql(_) => Dialect::Mssql,
        }
    }

    /// Runs a query expected to yield at most one event row.
    pub async fn fetch_row(&self, sql: &str, key: Key<'_>) -> Result<Option<EventRow>, StoreError> {
        match self {
            Self::Sqlite(options) => {
                let query = sqlx::query_as::<Sqlite, EventRow>(sql);
                let query = match key {
                    Key::Id(id) => query.bind(id.get()),
                    Key::Name(name) => query.bind(name),
                };

                let mut conn = open(options).await?;
                let result = query.fetch_optional(&mut conn).await;
                close(conn).await;
                Ok(result?)
            }
            #[cfg(feature = "mssql")]
            Self::Mssql(config) => crate::mssql::fetch_row(config, sql, key).await,
        }
    }

    /// Runs a query yielding a single integer, read as a flag.
    pub async fn fetch_flag(&self, sql: &str, key: Key<'_>) -> Result<bool, StoreError> {
        match self {
            Self::Sqlite(options) => {
                let query = sqlx::query_as::<Sqlite, (i64,)>(sql);
                let query = match key {
                    Key::Id(id) => query.bind(id.get()),
                    Key::Name(name) => query.bind(name),
                };

                let mut conn = open(options).await?;
                let result = query.fetch_one(&mut conn).await;
                close(conn).await;
                Ok(result?.0 != 0)
            }
            #[cfg(feature = "mssql")]
            Self::Mssql(config) => crate::mssql::fetch_flag(config, sql, key).await,
        }
    }
}

async fn open(options: &SqliteConnectOptions) -> Result<SqliteConnection, StoreError> {
    tracing::debug!("opening store connection");
    options
        .connect()
        .await
        .map_err(|e| StoreError::Connect(e.to_string()))
}

async fn close(conn: SqliteConnection) {
    tracing::debug!("closing store connection");
    if let Err(e) = conn.close().await {
        tracing::warn!(error = %e, "failed to close store connection cleanly");
    }
}

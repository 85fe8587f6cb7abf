// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! SQL Server access over TDS.

use tiberius::{Client, Config, Row, ToSql};
use tokio::net::TcpStream;
use tokio_util::compat::{Compat, TokioAsyncWriteCompatExt};

use crate::connection::Key;
use crate::error::StoreError;
use crate::record::EventRow;

type MssqlClient = Client<Compat<TcpStream>>;

/// Parses an ADO.NET or `jdbc:sqlserver://` connection string.
pub(crate) fn parse_config(database_url: &str) -> Result<Config, StoreError> {
    let url = database_url.trim();
    let parsed = if url.to_ascii_lowercase().starts_with("jdbc:") {
        Config::from_jdbc_string(url)
    } else {
        Config::from_ado_string(url)
    };
    parsed.map_err(|e| StoreError::Config(format!("invalid SQL Server connection string: {e}")))
}

pub(crate) async fn fetch_row(
    config: &Config,
    sql: &str,
    key: Key<'_>,
) -> Result<Option<EventRow>, StoreError> {
    let mut client = open(config).await?;
    let result = query_one(&mut client, sql, key).await;
    close(client).await;

    result?.map(|row| read_event(&row)).transpose()
}

pub(crate) async fn fetch_flag(config: &Config, sql: &str, key: Key<'_>) -> Result<bool, StoreError> {
    let mut client = open(config).await?;
    let result = query_one(&mut client, sql, key).await;
    close(client).await;

    let Some(row) = result? else {
        return Ok(false);
    };
    let flag: Option<i64> = row.try_get(0usize)?;
    Ok(flag.unwrap_or(0) != 0)
}

async fn open(config: &Config) -> Result<MssqlClient, StoreError> {
    tracing::debug!(addr = %config.get_addr(), "opening store connection");
    let tcp = TcpStream::connect(config.get_addr())
        .await
        .map_err(|e| StoreError::Connect(e.to_string()))?;
    tcp.set_nodelay(true)
        .map_err(|e| StoreError::Connect(e.to_string()))?;

    Client::connect(config.clone(), tcp.compat_write())
        .await
        .map_err(|e| StoreError::Connect(e.to_string()))
}

async fn close(client: MssqlClient) {
    tracing::debug!("closing store connection");
    if let Err(e) = client.close().await {
        tracing::warn!(error = %e, "failed to close store connection cleanly");
    }
}

async fn query_one(
    client: &mut MssqlClient,
    sql: &str,
    key: Key<'_>,
) -> Result<Option<Row>, tiberius::error::Error> {
    let id;
    let param: &dyn ToSql = match &key {
        Key::Id(a) => {
            id = a.get();
            &id
        }
        Key::Name(name) => name,
    };
    client.query(sql, &[param]).await?.into_row().await
}

fn read_event(row: &Row) -> Result<EventRow, StoreError> {
    let id: Option<i64> = row.try_get("id")?;
    let text = |column: &str| -> Result<Option<String>, StoreError> {
        Ok(row.try_get::<&str, _>(column)?.map(str::to_string))
    };

    Ok(EventRow {
        id: id.ok_or_else(|| StoreError::Decode {
            column: "id",
            reason: "unexpected NULL".to_string(),
        })?,
        name: text("name")?,
        start: text("start")?,
        end: text("end")?,
        place: text("place")?,
    })
}

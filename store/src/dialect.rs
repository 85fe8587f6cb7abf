// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use crate::config::{ColumnMap, StoreConfig};
use crate::error::StoreError;

/// SQL flavor spoken by the backing store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dialect {
    /// SQLite, through sqlx.
    Sqlite,
    /// Microsoft SQL Server, through tiberius.
    Mssql,
}

impl Dialect {
    /// Picks the dialect from the shape of a connection string.
    ///
    /// `jdbc:sqlserver://` URLs and ADO.NET strings (`Server=...;`) select SQL
    /// Server, anything else is treated as SQLite.
    #[must_use]
    pub fn detect(database_url: &str) -> Self {
        let url = database_url.trim().to_ascii_lowercase();
        if url.starts_with("jdbc:sqlserver://") {
            return Self::Mssql;
        }

        let ado = !url.contains("://")
            && url.split(';').any(|a| {
                let key = a.split_once('=').map_or("", |(key, _)| key.trim());
                matches!(key, "server" | "data source" | "address" | "addr")
            });
        if ado { Self::Mssql } else { Self::Sqlite }
    }

    /// Quotes a table or column name for splicing into SQL.
    ///
    /// Only ASCII alphanumerics and `_` are accepted, and the name may not
    /// start with a digit.
    pub fn quote(self, name: &str) -> Result<String, StoreError> {
        let valid = name
            .chars()
            .next()
            .is_some_and(|c| c.is_ascii_alphabetic() || c == '_')
            && name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_');
        if !valid {
            return Err(StoreError::Config(format!("invalid identifier: '{name}'")));
        }

        Ok(match self {
            Self::Sqlite => format!("\"{name}\""),
            Self::Mssql => format!("[{name}]"),
        })
    }

    fn param(self) -> &'static str {
        match self {
            Self::Sqlite => "?",
            Self::Mssql => "@P1",
        }
    }
}

/// The statements a store runs, rendered once per configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Queries {
    pub by_id: String,
    pub oldest_by_name: String,
    pub newest_by_name: String,
    pub exists_by_name: String,
}

impl Queries {
    pub fn new(dialect: Dialect, config: &StoreConfig) -> Result<Self, StoreError> {
        let table = dialect.quote(&config.table)?;
        let ColumnMap {
            id,
            name,
            start,
            end,
            place,
        } = &config.columns;
        let id = dialect.quote(id)?;
        let name = dialect.quote(name)?;
        let start = dialect.quote(start)?;
        let end = dialect.quote(end)?;
        let place = dialect.quote(place)?;
        let p = dialect.param();

        Ok(match dialect {
            Dialect::Sqlite => {
                let select = format!(
                    "\
SELECT {id} AS id, {name} AS name, {start} AS start, {end} AS \"end\", {place} AS place
FROM {table}
"
                );
                Self {
                    by_id: format!("{select}WHERE {id} = {p};"),
                    oldest_by_name: format!("{select}WHERE {name} = {p}\nORDER BY {id} ASC\nLIMIT 1;"),
                    newest_by_name: format!("{select}WHERE {name} = {p}\nORDER BY {id} DESC\nLIMIT 1;"),
                    exists_by_name: format!(
                        "SELECT EXISTS(SELECT 1 FROM {table} WHERE {name} = {p});"
                    ),
                }
            }
            Dialect::Mssql => {
                // datetime2 is read back as ISO 8601 text, like SQLite stores it
                let columns = format!(
                    "\
CAST({id} AS BIGINT) AS id, {name} AS name, CONVERT(varchar(33), {start}, 126) AS start, \
CONVERT(varchar(33), {end}, 126) AS [end], {place} AS place
FROM {table}
"
                );
                Self {
                    by_id: format!("SELECT {columns}WHERE {id} = {p};"),
                    oldest_by_name: format!("SELECT TOP 1 {columns}WHERE {name} = {p}\nORDER BY {id} ASC;"),
                    newest_by_name: format!("SELECT TOP 1 {columns}WHERE {name} = {p}\nORDER BY {id} DESC;"),
                    exists_by_name: format!(
                        "SELECT CAST(CASE WHEN EXISTS(SELECT 1 FROM {table} WHERE {name} = {p}) \
THEN 1 ELSE 0 END AS BIGINT);"
                    ),
                }
            }
        })
    }
}

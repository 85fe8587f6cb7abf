// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use crate::dialect::Dialect;

/// Column names of the event table.
///
/// Defaults follow the application's ORM conventions.
#[derive(Debug, Clone, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
pub struct ColumnMap {
    /// Integer primary key.
    pub id: String,
    /// Event name.
    pub name: String,
    /// Start time.
    pub start: String,
    /// End time.
    pub end: String,
    /// Location.
    pub place: String,
}

impl Default for ColumnMap {
    fn default() -> Self {
        Self {
            id: "Id".to_string(),
            name: "Name".to_string(),
            start: "Start".to_string(),
            end: "End".to_string(),
            place: "Place".to_string(),
        }
    }
}

/// Store configuration.
#[derive(Debug, Clone, serde::Deserialize, serde::Serialize)]
pub struct StoreConfig {
    /// Connection URL, e.g. `sqlite:///var/lib/eventmi/eventmi.db`.
    #[serde(default)]
    pub database_url: String,
    /// Name of the event table.
    #[serde(default = "default_table")]
    pub table: String,
    /// Column names.
    #[serde(default)]
    pub columns: ColumnMap,
}

fn default_table() -> String {
    "Events".to_string()
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            database_url: String::new(),
            table: default_table(),
            columns: ColumnMap::default(),
        }
    }
}

impl StoreConfig {
    /// Connection URL with any password replaced by `***`, for display.
    #[must_use]
    pub fn masked_url(&self) -> String {
        let url = &self.database_url;
        if Dialect::detect(url) == Dialect::Mssql {
            return mask_password_keys(url);
        }

        let Some((scheme, rest)) = url.split_once("://") else {
            return url.clone();
        };
        let Some((userinfo, host)) = rest.split_once('@') else {
            return url.clone();
        };
        match userinfo.split_once(':') {
            Some((user, _)) => format!("{scheme}://{user}:***@{host}"),
            None => url.clone(),
        }
    }
}

/// Masks `password=` and `pwd=` pairs of a `;` separated connection string.
fn mask_password_keys(url: &str) -> String {
    url.split(';')
        .map(|pair| match pair.split_once('=') {
            Some((key, _)) if matches!(key.trim().to_ascii_lowercase().as_str(), "password" | "pwd") => {
                format!("{key}=***")
            }
            _ => pair.to_string(),
        })
        .collect::<Vec<_>>()
        .join(";")
}

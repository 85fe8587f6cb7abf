// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

/// Path templates for each endpoint operation.
///
/// Templates for operations that target a single record must contain the
/// `{id}` placeholder.
#[derive(Debug, Clone, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
pub struct RouteTable {
    /// List all events.
    pub list: String,
    /// Show the creation form, and submit it.
    pub add: String,
    /// Show a single event.
    pub details: String,
    /// Show the edit form of a single event.
    pub edit_form: String,
    /// Submit an edit.
    pub edit: String,
    /// Submit a deletion.
    pub delete: String,
}

impl Default for RouteTable {
    fn default() -> Self {
        Self {
            list: "/Event/All".to_string(),
            add: "/Event/Add".to_string(),
            details: "/Event/Details/{id}".to_string(),
            // the edit form is reached through the details page
            edit_form: "/Event/Details/{id}".to_string(),
            edit: "/Event/Edit/{id}".to_string(),
            delete: "/Event/Delete/{id}".to_string(),
        }
    }
}

/// Endpoint surface configuration.
#[derive(Debug, Clone, serde::Deserialize, serde::Serialize)]
pub struct EndpointConfig {
    /// Base URL of the application, e.g. `https://localhost:7236`.
    #[serde(default)]
    pub base_url: String,
    /// Route templates.
    #[serde(default)]
    pub routes: RouteTable,
    /// Request timeout in seconds.
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
    /// User agent string.
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
    /// Follow redirects, as a browser posting the forms would.
    #[serde(default = "default_follow_redirects")]
    pub follow_redirects: bool,
    /// Accept self-signed certificates, e.g. a local development server.
    #[serde(default)]
    pub accept_invalid_certs: bool,
}

const fn default_timeout() -> u64 {
    30
}

const fn default_follow_redirects() -> bool {
    true
}

fn default_user_agent() -> String {
    concat!("eventmi-client/", env!("CARGO_PKG_VERSION")).to_string()
}

impl Default for EndpointConfig {
    fn default() -> Self {
        Self {
            base_url: String::new(),
            routes: RouteTable::default(),
            timeout_secs: default_timeout(),
            user_agent: default_user_agent(),
            follow_redirects: default_follow_redirects(),
            accept_invalid_certs: false,
        }
    }
}

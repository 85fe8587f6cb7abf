// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Endpoint client for the event CRUD surface.

use std::sync::Arc;

use reqwest::header::LOCATION;
use reqwest::{Method, Response, StatusCode, Url};

use crate::config::EndpointConfig;
use crate::error::ClientError;
use crate::http::HttpClient;
use crate::request::{EventRequest, RequestDescriptor};
use crate::types::{EventForm, EventId};

/// Upper bound on redirect hops followed for a single request.
pub const MAX_REDIRECTS: usize = 10;

/// Endpoint client: one round trip per call, no retries.
///
/// # Example
///
/// ```ignore
/// use eventmi_client::{EndpointClient, EndpointConfig, EventForm};
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let config = EndpointConfig {
///     base_url: "https://localhost:7236".to_string(),
///     accept_invalid_certs: true,
///     ..Default::default()
/// };
///
/// let client = EndpointClient::new(config)?;
/// let resp = client.list().await?;
/// assert!(resp.status.is_success());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct EndpointClient {
    http: Arc<HttpClient>,
    config: EndpointConfig,
}

impl EndpointClient {
    /// Creates a new endpoint client.
    ///
    /// # Errors
    ///
    /// Returns an error if the base URL is missing or HTTP client
    /// initialization fails.
    pub fn new(config: EndpointConfig) -> Result<Self, ClientError> {
        if config.base_url.trim().is_empty() {
            return Err(ClientError::Config("base URL is empty".to_string()));
        }

        let http = HttpClient::new(&config)?;
        Ok(Self {
            http: Arc::new(http),
            config,
        })
    }

    /// The configuration this client was built with.
    #[must_use]
    pub fn config(&self) -> &EndpointConfig {
        &self.config
    }

    /// Builds and dispatches a request.
    ///
    /// # Errors
    ///
    /// Returns an error if the request cannot be built or no response arrives.
    pub async fn send(&self, request: &EventRequest) -> Result<EndpointResponse, ClientError> {
        let descriptor = request.build(&self.config.routes)?;
        self.dispatch(&descriptor).await
    }

    /// Dispatches a request descriptor.
    ///
    /// Any status code is returned as a response; judging it is up to the
    /// caller. When redirects are followed, `301`, `302` and `303` continue as
    /// a bodiless `GET`, `307` and `308` repeat the original request.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Transport`] if no response arrives or redirects
    /// do not settle within [`MAX_REDIRECTS`] hops.
    #[tracing::instrument(skip(self, request), fields(op = %request.operation))]
    pub async fn dispatch(
        &self,
        request: &RequestDescriptor,
    ) -> Result<EndpointResponse, ClientError> {
        let mut url = Url::parse(&self.full_url(&request.path))
            .map_err(|e| ClientError::Config(format!("invalid base URL: {e}")))?;
        let mut method = request.method.clone();
        let mut with_body = true;
        let mut redirects = 0;

        loop {
            tracing::debug!(%method, %url, "dispatching request");
            let mut req = self.http.build_request(method.clone(), url.as_str());
            if with_body {
                for (name, value) in &request.headers {
                    req = req.header(name, value);
                }
                if let Some(body) = &request.body {
                    req = req.body(body.clone());
                }
            }

            let resp = self.http.send(req).await.inspect_err(|e| {
                tracing::warn!(error = %e, %url, "request failed");
            })?;

            let status = resp.status();
            let next = if self.config.follow_redirects {
                redirect_target(&resp, &url)
            } else {
                None
            };
            let Some(next) = next else {
                let body = resp.text().await?;
                tracing::debug!(%status, redirects, len = body.len(), "received response");
                return Ok(EndpointResponse {
                    status,
                    url: url.to_string(),
                    redirected: redirects > 0,
                    redirects,
                    body,
                });
            };

            if redirects == MAX_REDIRECTS {
                return Err(ClientError::Transport(format!(
                    "more than {MAX_REDIRECTS} redirects, last to {next}"
                )));
            }
            redirects += 1;
            if !matches!(
                status,
                StatusCode::TEMPORARY_REDIRECT | StatusCode::PERMANENT_REDIRECT
            ) {
                method = Method::GET;
                with_body = false;
            }
            tracing::debug!(%status, location = %next, "following redirect");
            url = next;
        }
    }

    /// Lists all events.
    ///
    /// # Errors
    ///
    /// Returns an error if no response arrives.
    pub async fn list(&self) -> Result<EndpointResponse, ClientError> {
        self.send(&EventRequest::list()).await
    }

    /// Fetches the creation form.
    ///
    /// # Errors
    ///
    /// Returns an error if no response arrives.
    pub async fn add_form(&self) -> Result<EndpointResponse, ClientError> {
        self.send(&EventRequest::add_form()).await
    }

    /// Submits the creation form.
    ///
    /// # Errors
    ///
    /// Returns an error if the form cannot be encoded or no response arrives.
    pub async fn add(&self, form: &EventForm) -> Result<EndpointResponse, ClientError> {
        self.send(&EventRequest::add_submit(form.clone())).await
    }

    /// Fetches the details page of an event.
    ///
    /// # Errors
    ///
    /// Returns an error if no response arrives.
    pub async fn details(&self, id: EventId) -> Result<EndpointResponse, ClientError> {
        self.send(&EventRequest::details(id)).await
    }

    /// Fetches the edit form of an event.
    ///
    /// # Errors
    ///
    /// Returns an error if no response arrives.
    pub async fn edit_form(&self, id: EventId) -> Result<EndpointResponse, ClientError> {
        self.send(&EventRequest::edit_form(id)).await
    }

    /// Submits the edit form for the event at `path_id`.
    ///
    /// # Errors
    ///
    /// Returns an error if the form cannot be encoded or no response arrives.
    pub async fn edit(
        &self,
        path_id: EventId,
        form: &EventForm,
    ) -> Result<EndpointResponse, ClientError> {
        self.send(&EventRequest::edit_submit(path_id, form.clone()))
            .await
    }

    /// Deletes an event.
    ///
    /// # Errors
    ///
    /// Returns an error if no response arrives.
    pub async fn delete(&self, id: EventId) -> Result<EndpointResponse, ClientError> {
        self.send(&EventRequest::delete(id)).await
    }

    fn full_url(&self, path: &str) -> String {
        format!("{}{}", self.config.base_url.trim_end_matches('/'), path)
    }
}

/// Where a redirect response points, resolved against the request URL.
fn redirect_target(resp: &Response, current: &Url) -> Option<Url> {
    if !resp.status().is_redirection() {
        return None;
    }
    let location = resp.headers().get(LOCATION)?.to_str().ok()?;
    current.join(location).ok()
}

/// Status and body of a completed round trip.
#[derive(Debug, Clone)]
pub struct EndpointResponse {
    /// Final status code, after any redirects that were followed.
    pub status: StatusCode,
    /// Final URL, after any redirects that were followed.
    pub url: String,
    /// Whether at least one redirect was followed.
    pub redirected: bool,
    /// Number of redirects followed, counting hops back to the same URL.
    pub redirects: usize,
    /// Response body.
    pub body: String,
}

impl EndpointResponse {
    /// Whether the final status is `200 OK`.
    #[must_use]
    pub fn is_ok(&self) -> bool {
        self.status == StatusCode::OK
    }
}

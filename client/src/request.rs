// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Request builders for the event endpoints.

use std::fmt;

use reqwest::Method;

use crate::config::RouteTable;
use crate::error::ClientError;
use crate::types::{EventForm, EventId};

const ID_PLACEHOLDER: &str = "{id}";

/// Content type of every form submission.
pub(crate) const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// Endpoint operations.
///
/// Operations on a single record carry the identifier placed in the path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    /// List all events.
    List,
    /// Show the creation form.
    AddForm,
    /// Submit the creation form.
    AddSubmit,
    /// Show an event.
    Details(EventId),
    /// Show the edit form of an event.
    EditForm(EventId),
    /// Submit the edit form of an event.
    EditSubmit(EventId),
    /// Delete an event.
    Delete(EventId),
}

impl Operation {
    /// HTTP method of the operation.
    #[must_use]
    pub fn method(self) -> Method {
        match self {
            Self::List | Self::AddForm | Self::Details(_) | Self::EditForm(_) => Method::GET,
            Self::AddSubmit | Self::EditSubmit(_) | Self::Delete(_) => Method::POST,
        }
    }

    /// Short stable name, used in logs and failure messages.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::List => "list",
            Self::AddForm => "add-form",
            Self::AddSubmit => "add-submit",
            Self::Details(_) => "details",
            Self::EditForm(_) => "edit-form",
            Self::EditSubmit(_) => "edit-submit",
            Self::Delete(_) => "delete",
        }
    }

    /// Identifier placed in the path, if any.
    #[must_use]
    pub const fn path_id(self) -> Option<EventId> {
        match self {
            Self::List | Self::AddForm | Self::AddSubmit => None,
            Self::Details(id) | Self::EditForm(id) | Self::EditSubmit(id) | Self::Delete(id) => {
                Some(id)
            }
        }
    }

    /// Whether the operation writes to the store.
    #[must_use]
    pub const fn is_write(self) -> bool {
        matches!(self, Self::AddSubmit | Self::EditSubmit(_) | Self::Delete(_))
    }

    fn template(self, routes: &RouteTable) -> &str {
        match self {
            Self::List => &routes.list,
            Self::AddForm | Self::AddSubmit => &routes.add,
            Self::Details(_) => &routes.details,
            Self::EditForm(_) => &routes.edit_form,
            Self::EditSubmit(_) => &routes.edit,
            Self::Delete(_) => &routes.delete,
        }
    }

    /// Resolves the request path from the route table.
    ///
    /// # Errors
    ///
    /// Returns an error if the template and the operation disagree on whether
    /// an identifier belongs in the path.
    pub fn path(self, routes: &RouteTable) -> Result<String, ClientError> {
        let template = self.template(routes);
        let has_placeholder = template.contains(ID_PLACEHOLDER);
        let path = match (self.path_id(), has_placeholder) {
            (Some(id), true) => template.replace(ID_PLACEHOLDER, &id.to_string()),
            (None, false) => template.to_string(),
            (Some(_), false) => {
                return Err(ClientError::Config(format!(
                    "route '{template}' for {self} must contain {ID_PLACEHOLDER}"
                )));
            }
            (None, true) => {
                return Err(ClientError::Config(format!(
                    "route '{template}' for {self} must not contain {ID_PLACEHOLDER}"
                )));
            }
        };

        if path.starts_with('/') {
            Ok(path)
        } else {
            Ok(format!("/{path}"))
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.path_id() {
            Some(id) => write!(f, "{} #{id}", self.name()),
            None => f.write_str(self.name()),
        }
    }
}

/// A request ready for dispatch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestDescriptor {
    /// The operation this request performs.
    pub operation: Operation,
    /// HTTP method.
    pub method: Method,
    /// Path relative to the base URL, always starting with `/`.
    pub path: String,
    /// Extra request headers.
    pub headers: Vec<(String, String)>,
    /// Form-encoded body, if any.
    pub body: Option<String>,
}

impl RequestDescriptor {
    /// Returns the value of a header, matched case-insensitively.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

/// Event request builder.
///
/// # Example
///
/// ```
/// use eventmi_client::{EventForm, EventId, EventRequest, RouteTable};
///
/// let form = EventForm::new().id(EventId::new(456)).name("Renamed");
/// let request = EventRequest::edit_submit(EventId::new(1), form)
///     .build(&RouteTable::default())
///     .unwrap();
/// assert_eq!(request.path, "/Event/Edit/1");
/// assert_eq!(request.body.as_deref(), Some("Id=456&Name=Renamed"));
/// ```
#[derive(Debug, Clone)]
pub struct EventRequest {
    operation: Operation,
    form: EventForm,
}

impl EventRequest {
    /// Creates a request for an operation with an empty form.
    #[must_use]
    pub fn new(operation: Operation) -> Self {
        Self {
            operation,
            form: EventForm::default(),
        }
    }

    /// `GET` the event list.
    #[must_use]
    pub fn list() -> Self {
        Self::new(Operation::List)
    }

    /// `GET` the creation form.
    #[must_use]
    pub fn add_form() -> Self {
        Self::new(Operation::AddForm)
    }

    /// `POST` the creation form.
    #[must_use]
    pub fn add_submit(form: EventForm) -> Self {
        Self::new(Operation::AddSubmit).form(form)
    }

    /// `GET` a single event.
    #[must_use]
    pub fn details(id: EventId) -> Self {
        Self::new(Operation::Details(id))
    }

    /// `GET` the edit form of an event.
    #[must_use]
    pub fn edit_form(id: EventId) -> Self {
        Self::new(Operation::EditForm(id))
    }

    /// `POST` the edit form.
    ///
    /// The path identifier and the body identifier (`form.id`) are independent,
    /// so mismatching submissions can be built.
    #[must_use]
    pub fn edit_submit(path_id: EventId, form: EventForm) -> Self {
        Self::new(Operation::EditSubmit(path_id)).form(form)
    }

    /// `POST` a deletion.
    #[must_use]
    pub fn delete(id: EventId) -> Self {
        Self::new(Operation::Delete(id))
    }

    /// Replaces the form.
    #[must_use]
    pub fn form(mut self, form: EventForm) -> Self {
        self.form = form;
        self
    }

    /// The operation of this request.
    #[must_use]
    pub const fn operation(&self) -> Operation {
        self.operation
    }

    /// Builds the request descriptor.
    ///
    /// Read operations never carry a body. Write operations always carry the
    /// form content type, and a body when at least one field is set.
    ///
    /// # Errors
    ///
    /// Returns an error if the route template is invalid or the form cannot be
    /// encoded.
    pub fn build(&self, routes: &RouteTable) -> Result<RequestDescriptor, ClientError> {
        let path = self.operation.path(routes)?;

        let mut headers = Vec::new();
        let mut body = None;
        if self.operation.is_write() {
            headers.push(("Content-Type".to_string(), FORM_CONTENT_TYPE.to_string()));

            let wire = self.form.to_wire();
            if !wire.is_empty() {
                body = Some(serde_urlencoded::to_string(&wire)?);
            }
        }

        Ok(RequestDescriptor {
            operation: self.operation,
            method: self.operation.method(),
            path,
            headers,
            body,
        })
    }
}

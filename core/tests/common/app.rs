// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! A stand-in for the Eventmi web application, served by wiremock.
//!
//! It follows the application's observable behavior: successful writes
//! redirect to the list page, invalid forms are re-rendered with 200, and an
//! edit whose body id differs from the path id is answered with 404.

use std::collections::{BTreeMap, HashMap};
use std::sync::{Arc, Mutex, MutexGuard};

use eventmi_client::{EventId, parse_wire};
use eventmi_store::{EventRecord, StoreError};
use jiff::civil::DateTime;
use wiremock::{Request, Respond, ResponseTemplate};

/// State shared by the fake application and the in-memory store.
pub type SharedState = Arc<Mutex<AppState>>;

/// Deviations from the expected application behavior.
#[derive(Debug, Default, Clone, Copy)]
pub struct Faults {
    /// Apply edits even when the body id differs from the path id.
    pub accept_id_mismatch: bool,
    /// Acknowledge creations without storing them.
    pub drop_creations: bool,
    /// Redirect instead of re-rendering an incomplete edit form.
    pub redirect_incomplete: bool,
    /// Acknowledge deletions without removing the record.
    pub keep_deleted: bool,
    /// Fail every store query.
    pub store_down: bool,
    /// Fail the store query with this 0-based index, counted per test.
    pub store_glitch_at: Option<usize>,
    /// Acknowledge valid edits without applying them.
    pub ignore_edits: bool,
    /// Rename the record even when refusing the edit.
    pub mutate_on_reject: bool,
}

#[derive(Debug, Default)]
pub struct AppState {
    pub records: BTreeMap<i64, EventRecord>,
    pub faults: Faults,
    /// Store queries answered so far.
    pub store_calls: usize,
    last_id: i64,
}

impl AppState {
    pub fn insert(&mut self, name: &str, start: DateTime, end: DateTime, place: &str) -> EventId {
        self.last_id += 1;
        let id = EventId::new(self.last_id);
        self.records.insert(
            self.last_id,
            EventRecord {
                id,
                name: name.to_string(),
                start,
                end,
                place: place.to_string(),
            },
        );
        id
    }

    fn add(&mut self, form: &Form) -> ResponseTemplate {
        let Some(fields) = Fields::parse(form) else {
            return page("Add event");
        };
        if !self.faults.drop_creations {
            self.insert(&fields.name, fields.start, fields.end, &fields.place);
        }
        redirect_to_list()
    }

    fn details(&self, id: &str) -> ResponseTemplate {
        match self.find(id) {
            Some(id) => page(&format!("Event #{id}")),
            None => not_found(),
        }
    }

    fn edit(&mut self, id: &str, form: &Form) -> ResponseTemplate {
        let Some(id) = self.find(id) else {
            return not_found();
        };
        let body_id = form.get("Id").and_then(|a| a.parse::<i64>().ok());
        if body_id != Some(id) && !self.faults.accept_id_mismatch {
            self.rename_on_reject(id, form);
            return not_found();
        }

        let Some(fields) = Fields::parse(form) else {
            if self.faults.redirect_incomplete {
                return redirect_to_list();
            }
            self.rename_on_reject(id, form);
            return page("Edit event");
        };
        if self.faults.ignore_edits {
            return redirect_to_list();
        }
        if let Some(record) = self.records.get_mut(&id) {
            record.name = fields.name;
            record.start = fields.start;
            record.end = fields.end;
            record.place = fields.place;
        }
        redirect_to_list()
    }

    fn rename_on_reject(&mut self, id: i64, form: &Form) {
        if !self.faults.mutate_on_reject {
            return;
        }
        if let (Some(record), Some(name)) = (self.records.get_mut(&id), form.get("Name")) {
            record.name = name.clone();
        }
    }

    /// Counts a store query and fails it when the faults say so.
    pub fn store_call(&mut self) -> Result<(), StoreError> {
        let index = self.store_calls;
        self.store_calls += 1;
        if self.faults.store_down {
            return Err(StoreError::Connect("store is down".to_string()));
        }
        if self.faults.store_glitch_at == Some(index) {
            return Err(StoreError::Connect(format!("store glitch on query {index}")));
        }
        Ok(())
    }

    fn delete(&mut self, id: &str) -> ResponseTemplate {
        let Some(id) = self.find(id) else {
            return not_found();
        };
        if !self.faults.keep_deleted {
            self.records.remove(&id);
        }
        redirect_to_list()
    }

    fn find(&self, id: &str) -> Option<i64> {
        id.parse::<i64>()
            .ok()
            .filter(|id| self.records.contains_key(id))
    }
}

type Form = HashMap<String, String>;

/// A complete, valid form submission.
struct Fields {
    name: String,
    start: DateTime,
    end: DateTime,
    place: String,
}

impl Fields {
    fn parse(form: &Form) -> Option<Self> {
        let name = form.get("Name").filter(|a| !a.is_empty())?;
        let start = parse_wire(form.get("Start")?).ok()?;
        let end = parse_wire(form.get("End")?).ok()?;
        let place = form.get("Place")?;
        Some(Self {
            name: name.clone(),
            start,
            end,
            place: place.clone(),
        })
    }
}

/// Routes requests the way the Eventmi application does.
#[derive(Debug, Clone)]
pub struct FakeApp {
    state: SharedState,
}

impl FakeApp {
    pub fn new(state: SharedState) -> Self {
        Self { state }
    }
}

impl Respond for FakeApp {
    fn respond(&self, request: &Request) -> ResponseTemplate {
        let mut state = lock(&self.state);
        let form: Form = serde_urlencoded::from_bytes(&request.body).unwrap_or_default();
        let segments: Vec<&str> = request.url.path().trim_matches('/').split('/').collect();

        match (request.method.as_str(), segments.as_slice()) {
            ("GET", ["Event", "All"]) => page("All events"),
            ("GET", ["Event", "Add"]) => page("Add event"),
            ("POST", ["Event", "Add"]) => state.add(&form),
            ("GET", ["Event", "Details", id]) => state.details(id),
            ("POST", ["Event", "Edit", id]) => state.edit(id, &form),
            ("POST", ["Event", "Delete", id]) => state.delete(id),
            _ => not_found(),
        }
    }
}

pub fn lock(state: &SharedState) -> MutexGuard<'_, AppState> {
    state.lock().expect("app state poisoned")
}

fn page(title: &str) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_string(format!("<h1>{title}</h1>"))
}

fn not_found() -> ResponseTemplate {
    ResponseTemplate::new(404).set_body_string("Not Found")
}

fn redirect_to_list() -> ResponseTemplate {
    ResponseTemplate::new(302).insert_header("Location", "/Event/All")
}

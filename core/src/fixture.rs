// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use eventmi_client::{EndpointClient, EventForm, EventId};
use eventmi_store::{EventRecord, EventStore};
use jiff::civil::{DateTime, date};

use crate::config::FixtureConfig;
use crate::error::Failure;

pub const CREATION_NAME: &str = "DEV: Challenge Accepted";
pub const DELETION_NAME: &str = "Event for Deleting";

const PLACE: &str = "Sofia Tech Park";

/// The form submitted to create a record named `name`.
pub fn creation_form(name: impl Into<String>) -> EventForm {
    let day = date(2024, 9, 29);
    EventForm::full(name, day.at(9, 0, 0, 0), day.at(19, 0, 0, 0), PLACE)
}

/// A complete edit of `record`, every mutable field changed.
pub fn edited_form(record: &EventRecord) -> EventForm {
    let start = shifted(record.start);
    let end = shifted(record.end);
    EventForm::full(
        format!("{} Updated!", record.name),
        start,
        end,
        format!("{} (moved)", record.place),
    )
    .id(record.id)
}

/// One day later, or the same time when out of range.
fn shifted(dt: DateTime) -> DateTime {
    dt.tomorrow().unwrap_or(dt)
}

/// A record a scenario works on.
#[derive(Debug, Clone)]
pub struct Fixture {
    /// The record as it was when the scenario started.
    pub record: EventRecord,
    /// Whether the record was created for the scenario.
    pub seeded: bool,
}

/// Establishes and releases fixtures through the endpoint surface.
#[derive(Debug)]
pub struct Fixtures<'a, S> {
    client: &'a EndpointClient,
    store: &'a S,
    config: &'a FixtureConfig,
}

impl<'a, S: EventStore> Fixtures<'a, S> {
    pub fn new(client: &'a EndpointClient, store: &'a S, config: &'a FixtureConfig) -> Self {
        Self {
            client,
            store,
            config,
        }
    }

    /// The name to create a record under.
    pub fn name(&self, base: &str) -> String {
        if self.config.unique_names {
            format!("{base} {}", uuid::Uuid::new_v4())
        } else {
            base.to_string()
        }
    }

    /// The configured record if any, otherwise a freshly seeded one.
    pub async fn acquire(&self) -> Result<Fixture, Failure> {
        let Some(id) = self.config.existing_id else {
            return self.seed(&self.config.prefix).await;
        };

        match self.store.get_by_id(id).await? {
            Some(record) => {
                tracing::debug!(%id, "using existing record");
                Ok(Fixture {
                    record,
                    seeded: false,
                })
            }
            None => Err(Failure::Fixture(format!(
                "configured record #{id} does not exist"
            ))),
        }
    }

    /// Creates a record through the endpoint and reads it back by name.
    pub async fn seed(&self, base: &str) -> Result<Fixture, Failure> {
        let name = self.name(base);
        let previous = self.newest_id(&name).await?;

        let resp = match self.client.add(&creation_form(name.as_str())).await {
            Ok(resp) if resp.is_ok() => resp,
            Ok(resp) => {
                self.discard_created(&name, previous).await;
                return Err(Failure::Fixture(format!(
                    "creating '{name}' returned {}",
                    resp.status
                )));
            }
            Err(e) => {
                self.discard_created(&name, previous).await;
                return Err(e.into());
            }
        };
        tracing::debug!(status = %resp.status, %name, "creation answered");

        let record = match self.created_since(&name, previous).await {
            Ok(Some(record)) => record,
            Ok(None) => {
                return Err(Failure::Fixture(format!(
                    "created record '{name}' not found in store"
                )));
            }
            Err(e) => {
                self.discard_created(&name, previous).await;
                return Err(e);
            }
        };

        tracing::debug!(id = %record.id, %name, "seeded record");
        Ok(Fixture {
            record,
            seeded: true,
        })
    }

    /// Identifier of the newest record named `name`, taken before creating
    /// another one under the same name.
    pub async fn newest_id(&self, name: &str) -> Result<Option<EventId>, Failure> {
        let newest = self.store.get_newest_by_name(name).await?;
        Ok(newest.map(|a| a.id))
    }

    /// The newest record named `name`, unless it already existed as
    /// `previous` or earlier.
    pub async fn created_since(
        &self,
        name: &str,
        previous: Option<EventId>,
    ) -> Result<Option<EventRecord>, Failure> {
        let newest = self.store.get_newest_by_name(name).await?;
        Ok(newest.filter(|a| previous.is_none_or(|p| a.id > p)))
    }

    /// Deletes whatever a failed creation may have left behind.
    ///
    /// Records that existed before the creation are never touched. Failures
    /// are logged and otherwise ignored.
    pub async fn discard_created(&self, name: &str, previous: Option<EventId>) {
        if !self.config.cleanup {
            return;
        }

        match self.created_since(name, previous).await {
            Ok(Some(record)) => {
                self.release(Fixture {
                    record,
                    seeded: true,
                })
                .await;
            }
            Ok(None) => {}
            Err(e) => tracing::warn!(%name, error = %e, "could not look for a leftover record"),
        }
    }

    /// Deletes a seeded record, or puts an existing one back as it was.
    ///
    /// Failures are logged and otherwise ignored.
    pub async fn release(&self, fixture: Fixture) {
        if !self.config.cleanup {
            return;
        }

        let id = fixture.record.id;
        let result = if fixture.seeded {
            self.client.delete(id).await
        } else {
            match self.store.get_by_id(id).await {
                Ok(Some(current)) if current == fixture.record => return,
                Ok(_) => self.client.edit(id, &fixture.record.to_form()).await,
                Err(e) => {
                    tracing::warn!(%id, error = %e, "failed to check record before restoring");
                    return;
                }
            }
        };

        match result {
            Ok(resp) if resp.is_ok() => tracing::debug!(%id, seeded = fixture.seeded, "released record"),
            Ok(resp) => tracing::warn!(%id, status = %resp.status, "cleanup was refused"),
            Err(e) => tracing::warn!(%id, error = %e, "cleanup failed"),
        }
    }
}

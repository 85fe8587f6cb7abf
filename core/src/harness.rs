// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::time::Instant;

use eventmi_client::{EndpointClient, EndpointResponse, EventForm, EventId, Operation, StatusCode};
use eventmi_store::{EventRecord, EventStore, SqlStore};

use crate::config::{Config, ConfigError, FixtureConfig};
use crate::error::Failure;
use crate::fixture::{CREATION_NAME, DELETION_NAME, Fixture, Fixtures, creation_form, edited_form};
use crate::report::{Report, ScenarioOutcome};
use crate::scenario::Scenario;

/// Body identifier sent by the mismatched edit.
const MISMATCHED_ID: i64 = 456;

/// Verification harness.
///
/// Scenarios run one after another; a failing scenario never stops the run.
///
/// # Example
///
/// ```ignore
/// use eventmi_verify_core::{Config, Harness, Scenario};
///
/// # async fn example(config: Config) -> Result<(), Box<dyn std::error::Error>> {
/// let harness = Harness::from_config(&config)?;
/// let report = harness.run(&Scenario::ALL).await;
/// println!("{} passed, {} failed", report.passed(), report.failed());
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct Harness<S = SqlStore> {
    client: EndpointClient,
    store: S,
    fixture: FixtureConfig,
}

impl Harness<SqlStore> {
    /// Creates a harness against the configured endpoint and SQL store.
    ///
    /// # Errors
    ///
    /// Returns an error if a connection target is missing or rejected.
    pub fn from_config(config: &Config) -> Result<Self, ConfigError> {
        config.validate()?;
        let client = EndpointClient::new(config.endpoint.clone())?;
        let store = SqlStore::new(&config.store)?;
        Ok(Self::new(client, store, config.fixture.clone()))
    }
}

impl<S: EventStore> Harness<S> {
    /// Creates a harness from its parts.
    pub fn new(client: EndpointClient, store: S, fixture: FixtureConfig) -> Self {
        Self {
            client,
            store,
            fixture,
        }
    }

    /// Runs the selected scenarios in declaration order, each at most once.
    pub async fn run(&self, scenarios: &[Scenario]) -> Report {
        let mut selected = scenarios.to_vec();
        selected.sort_unstable();
        selected.dedup();

        tracing::info!(count = selected.len(), "running scenarios");
        let mut report = Report::new();
        for scenario in selected {
            report.push(self.run_one(scenario).await);
        }
        report
    }

    /// Runs a single scenario.
    #[tracing::instrument(skip(self), fields(scenario = %scenario))]
    pub async fn run_one(&self, scenario: Scenario) -> ScenarioOutcome {
        let started = Instant::now();
        let result = match scenario {
            Scenario::List => self.list().await,
            Scenario::AddForm => self.add_form().await,
            Scenario::AddSubmit => self.add_submit().await,
            Scenario::Details => self.on_fixture(|a| self.details(a)).await,
            Scenario::EditForm => self.on_fixture(|a| self.edit_form(a)).await,
            Scenario::EditSubmit => self.on_fixture(|a| self.edit_submit(a)).await,
            Scenario::EditMismatch => self.on_fixture(|a| self.edit_mismatch(a)).await,
            Scenario::EditIncomplete => self.on_fixture(|a| self.edit_incomplete(a)).await,
            Scenario::Delete => self.delete().await,
        };

        match &result {
            Ok(()) => tracing::info!("passed"),
            Err(e) => tracing::warn!(kind = e.kind(), error = %e, "failed"),
        }
        ScenarioOutcome::new(scenario, result, started.elapsed())
    }

    fn fixtures(&self) -> Fixtures<'_, S> {
        Fixtures::new(&self.client, &self.store, &self.fixture)
    }

    async fn on_fixture<F, Fut>(&self, f: F) -> Result<(), Failure>
    where
        F: FnOnce(EventRecord) -> Fut,
        Fut: Future<Output = Result<(), Failure>>,
    {
        let fixtures = self.fixtures();
        let fixture = fixtures.acquire().await?;
        let result = f(fixture.record.clone()).await;
        fixtures.release(fixture).await;
        result
    }

    async fn list(&self) -> Result<(), Failure> {
        let resp = self.client.list().await?;
        expect_status(Operation::List, StatusCode::OK, &resp)
    }

    async fn add_form(&self) -> Result<(), Failure> {
        let resp = self.client.add_form().await?;
        expect_status(Operation::AddForm, StatusCode::OK, &resp)
    }

    async fn add_submit(&self) -> Result<(), Failure> {
        let fixtures = self.fixtures();
        let name = fixtures.name(CREATION_NAME);
        let form = creation_form(name.as_str());
        let previous = fixtures.newest_id(&name).await?;

        let resp = match self.client.add(&form).await {
            Ok(resp) => resp,
            Err(e) => {
                fixtures.discard_created(&name, previous).await;
                return Err(e.into());
            }
        };
        let stored = match fixtures.created_since(&name, previous).await {
            Ok(stored) => stored,
            Err(e) => {
                fixtures.discard_created(&name, previous).await;
                return Err(e);
            }
        };

        let result = expect_status(Operation::AddSubmit, StatusCode::OK, &resp).and_then(|()| {
            let record = stored.as_ref().ok_or_else(|| {
                Failure::Inconsistency(format!("no new record named '{name}' after creation"))
            })?;
            expect_matches(record, &form)
        });

        if let Some(record) = stored {
            let fixture = Fixture {
                record,
                seeded: true,
            };
            fixtures.release(fixture).await;
        }
        result
    }

    async fn details(&self, record: EventRecord) -> Result<(), Failure> {
        let resp = self.client.details(record.id).await?;
        expect_status(Operation::Details(record.id), StatusCode::OK, &resp)
    }

    async fn edit_form(&self, record: EventRecord) -> Result<(), Failure> {
        let resp = self.client.edit_form(record.id).await?;
        expect_status(Operation::EditForm(record.id), StatusCode::OK, &resp)
    }

    async fn edit_submit(&self, record: EventRecord) -> Result<(), Failure> {
        let id = record.id;
        let form = edited_form(&record);

        let resp = self.client.edit(id, &form).await?;
        expect_status(Operation::EditSubmit(id), StatusCode::OK, &resp)?;

        let after = self.store.get_by_id(id).await?.ok_or_else(|| {
            Failure::Inconsistency(format!("record #{id} disappeared after the edit"))
        })?;
        expect_matches(&after, &form)
    }

    async fn edit_mismatch(&self, record: EventRecord) -> Result<(), Failure> {
        let id = record.id;
        let before = self.snapshot(id).await?;
        let form = EventForm::full(
            format!("{} Updated!", before.name),
            before.start,
            before.end,
            before.place.clone(),
        )
        .id(mismatched_id(id));

        let resp = self.client.edit(id, &form).await?;
        expect_status(Operation::EditSubmit(id), StatusCode::NOT_FOUND, &resp)?;

        let after = self.store.get_by_id(id).await?;
        expect_unchanged(&before, after.as_ref())
    }

    async fn edit_incomplete(&self, record: EventRecord) -> Result<(), Failure> {
        let id = record.id;
        let before = self.snapshot(id).await?;
        let form = EventForm::new()
            .id(id)
            .name(format!("{} Updated!", before.name));

        let resp = self.client.edit(id, &form).await?;
        let operation = Operation::EditSubmit(id);
        expect_status(operation, StatusCode::OK, &resp)?;
        if resp.redirected {
            return Err(Failure::UnexpectedRedirect {
                operation: operation.to_string(),
                location: resp.url,
            });
        }

        let after = self.store.get_by_id(id).await?;
        expect_unchanged(&before, after.as_ref())
    }

    async fn delete(&self) -> Result<(), Failure> {
        let fixtures = self.fixtures();
        let fixture = fixtures.seed(DELETION_NAME).await?;
        let id = fixture.record.id;

        let result = self.delete_record(id).await;
        if result.is_err() && matches!(self.store.get_by_id(id).await, Ok(Some(_))) {
            fixtures.release(fixture).await;
        }
        result
    }

    async fn delete_record(&self, id: EventId) -> Result<(), Failure> {
        let resp = self.client.delete(id).await?;
        expect_status(Operation::Delete(id), StatusCode::OK, &resp)?;

        if self.store.get_by_id(id).await?.is_some() {
            return Err(Failure::Inconsistency(format!(
                "record #{id} still present after deletion"
            )));
        }

        // any status will do, as long as a response arrives
        let again = self.client.delete(id).await?;
        tracing::debug!(%id, status = %again.status, "repeated deletion answered");
        Ok(())
    }

    /// Reads the current state of a record the scenario depends on.
    async fn snapshot(&self, id: EventId) -> Result<EventRecord, Failure> {
        self.store
            .get_by_id(id)
            .await?
            .ok_or_else(|| Failure::Fixture(format!("record #{id} vanished before the edit")))
    }
}

/// The body identifier for an edit of `path_id` that must not match it.
fn mismatched_id(path_id: EventId) -> EventId {
    if path_id.get() == MISMATCHED_ID {
        EventId::new(MISMATCHED_ID + 1)
    } else {
        EventId::new(MISMATCHED_ID)
    }
}

fn expect_status(
    operation: Operation,
    expected: StatusCode,
    resp: &EndpointResponse,
) -> Result<(), Failure> {
    if resp.status == expected {
        Ok(())
    } else {
        Err(Failure::UnexpectedStatus {
            operation: operation.to_string(),
            expected,
            actual: resp.status,
        })
    }
}

fn expect_matches(record: &EventRecord, form: &EventForm) -> Result<(), Failure> {
    let fields = record.mismatches(form);
    if fields.is_empty() {
        Ok(())
    } else {
        Err(Failure::Inconsistency(format!(
            "record #{} differs from the submission in: {}",
            record.id,
            fields.join(", ")
        )))
    }
}

fn expect_unchanged(before: &EventRecord, after: Option<&EventRecord>) -> Result<(), Failure> {
    let Some(after) = after else {
        return Err(Failure::Inconsistency(format!(
            "record #{} disappeared",
            before.id
        )));
    };
    if before == after {
        return Ok(());
    }

    let fields = before.mismatches(&after.to_form());
    let fields = if fields.is_empty() {
        "timestamps below minute precision".to_string()
    } else {
        fields.join(", ")
    };
    Err(Failure::Inconsistency(format!(
        "record #{} changed: {fields}",
        before.id
    )))
}

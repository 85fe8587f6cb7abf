// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Runs against applications that break the contract in one way each.

use eventmi_client::{EndpointClient, EndpointConfig};
use eventmi_verify_core::{FixtureConfig, Harness, Scenario};

use crate::common::{Faults, MemoryStore, TestEnv, keep_records};

fn failure_kind(report: &eventmi_verify_core::Report, scenario: Scenario) -> Option<&'static str> {
    report
        .outcome(scenario)
        .and_then(|a| a.failure.as_ref())
        .map(|a| a.kind)
}

#[tokio::test]
async fn accepted_id_mismatch_is_unexpected_status() {
    // Arrange
    let env = TestEnv::start().await;
    env.set_faults(Faults {
        accept_id_mismatch: true,
        ..Default::default()
    });
    let harness = env.harness(FixtureConfig::default());

    // Act
    let report = harness.run(&[Scenario::EditMismatch]).await;

    // Assert
    assert_eq!(failure_kind(&report, Scenario::EditMismatch), Some("unexpected-status"));
    let message = &report.outcomes[0].failure.as_ref().unwrap().message;
    assert!(message.contains("404"), "{message}");
    assert!(message.contains("200"), "{message}");
}

#[tokio::test]
async fn dropped_creation_is_inconsistency() {
    let env = TestEnv::start().await;
    env.set_faults(Faults {
        drop_creations: true,
        ..Default::default()
    });
    let harness = env.harness(FixtureConfig::default());

    let report = harness.run(&[Scenario::List, Scenario::AddSubmit]).await;

    assert_eq!(failure_kind(&report, Scenario::List), None);
    assert_eq!(failure_kind(&report, Scenario::AddSubmit), Some("inconsistency"));
}

#[tokio::test]
async fn dropped_creation_breaks_seeded_fixtures() {
    let env = TestEnv::start().await;
    env.set_faults(Faults {
        drop_creations: true,
        ..Default::default()
    });
    let harness = env.harness(FixtureConfig::default());

    let report = harness.run(&[Scenario::Details, Scenario::Delete]).await;

    assert_eq!(failure_kind(&report, Scenario::Details), Some("fixture"));
    assert_eq!(failure_kind(&report, Scenario::Delete), Some("fixture"));
}

#[tokio::test]
async fn dropped_creation_never_claims_existing_namesake() {
    // Arrange
    let env = TestEnv::start().await;
    env.insert("DEV: Challenge Accepted");
    let before = env.records();
    env.set_faults(Faults {
        drop_creations: true,
        ..Default::default()
    });
    let harness = env.harness(FixtureConfig {
        unique_names: false,
        ..Default::default()
    });

    // Act
    let report = harness.run(&[Scenario::AddSubmit]).await;

    // Assert
    assert_eq!(failure_kind(&report, Scenario::AddSubmit), Some("inconsistency"));
    assert_eq!(env.records(), before);
}

#[tokio::test]
async fn ignored_edit_is_inconsistency() {
    let env = TestEnv::start().await;
    env.set_faults(Faults {
        ignore_edits: true,
        ..Default::default()
    });
    let harness = env.harness(FixtureConfig::default());

    let report = harness.run(&[Scenario::EditSubmit]).await;

    assert_eq!(failure_kind(&report, Scenario::EditSubmit), Some("inconsistency"));
}

#[tokio::test]
async fn refused_edits_that_still_rename_are_inconsistency() {
    // Arrange
    let env = TestEnv::start().await;
    env.set_faults(Faults {
        mutate_on_reject: true,
        ..Default::default()
    });
    let harness = env.harness(FixtureConfig::default());

    // Act
    let report = harness
        .run(&[Scenario::EditMismatch, Scenario::EditIncomplete])
        .await;

    // Assert
    assert_eq!(failure_kind(&report, Scenario::EditMismatch), Some("inconsistency"));
    assert_eq!(failure_kind(&report, Scenario::EditIncomplete), Some("inconsistency"));
    for outcome in &report.outcomes {
        let message = &outcome.failure.as_ref().unwrap().message;
        assert!(message.contains("changed: name"), "{message}");
    }
    assert!(env.records().is_empty(), "left behind: {:?}", env.records());
}

#[tokio::test]
async fn redirected_incomplete_edit_is_unexpected_redirect() {
    let env = TestEnv::start().await;
    env.set_faults(Faults {
        redirect_incomplete: true,
        ..Default::default()
    });
    let harness = env.harness(FixtureConfig::default());

    let report = harness.run(&[Scenario::EditIncomplete]).await;

    assert_eq!(failure_kind(&report, Scenario::EditIncomplete), Some("unexpected-redirect"));
}

#[tokio::test]
async fn kept_deletion_is_inconsistency() {
    // Arrange
    let env = TestEnv::start().await;
    env.set_faults(Faults {
        keep_deleted: true,
        ..Default::default()
    });
    let harness = env.harness(keep_records());

    // Act
    let report = harness.run(&[Scenario::Delete]).await;

    // Assert
    assert_eq!(failure_kind(&report, Scenario::Delete), Some("inconsistency"));
    assert!(report.outcomes[0]
        .failure
        .as_ref()
        .unwrap()
        .message
        .contains("still present"));
}

#[tokio::test]
async fn store_outage_is_store_failure() {
    let env = TestEnv::start().await;
    env.set_faults(Faults {
        store_down: true,
        ..Default::default()
    });
    let harness = env.harness(FixtureConfig::default());

    let report = harness.run(&[Scenario::List, Scenario::AddSubmit]).await;

    assert_eq!(failure_kind(&report, Scenario::List), None);
    assert_eq!(failure_kind(&report, Scenario::AddSubmit), Some("store"));
}

#[tokio::test]
async fn store_glitch_after_creation_still_cleans_up() {
    // Arrange - query 0 is taken before the submission, query 1 right after
    let env = TestEnv::start().await;
    env.set_faults(Faults {
        store_glitch_at: Some(1),
        ..Default::default()
    });
    let harness = env.harness(FixtureConfig::default());

    // Act
    let report = harness.run(&[Scenario::AddSubmit]).await;

    // Assert
    assert_eq!(failure_kind(&report, Scenario::AddSubmit), Some("store"));
    assert!(env.records().is_empty(), "left behind: {:?}", env.records());
}

#[tokio::test]
async fn route_without_id_placeholder_is_request_failure() {
    // Arrange
    let env = TestEnv::start().await;
    let mut endpoint = env.endpoint();
    endpoint.routes.details = "/Event/Details".to_string();
    let harness = env.harness_with(endpoint, FixtureConfig::default());

    // Act
    let report = harness.run(&[Scenario::List, Scenario::Details]).await;

    // Assert
    assert_eq!(failure_kind(&report, Scenario::List), None);
    assert_eq!(failure_kind(&report, Scenario::Details), Some("request"));
    assert!(env.records().is_empty(), "left behind: {:?}", env.records());
}

#[tokio::test]
async fn unreachable_endpoint_fails_every_scenario_without_stopping() {
    // Arrange
    let env = TestEnv::start().await;
    let config = EndpointConfig {
        base_url: "http://127.0.0.1:9".to_string(),
        timeout_secs: 5,
        ..Default::default()
    };
    let client = EndpointClient::new(config).unwrap();
    let harness = Harness::new(
        client,
        MemoryStore::new(env.state.clone()),
        FixtureConfig::default(),
    );

    // Act
    let report = harness.run(&Scenario::ALL).await;

    // Assert
    assert_eq!(report.outcomes.len(), Scenario::ALL.len());
    assert_eq!(report.failed(), Scenario::ALL.len());
    for outcome in &report.outcomes {
        assert_eq!(
            outcome.failure.as_ref().map(|a| a.kind),
            Some("transport"),
            "{}",
            outcome.scenario
        );
    }
}

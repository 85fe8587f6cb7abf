// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Runs against an application that behaves as expected.

use eventmi_verify_core::{FixtureConfig, Scenario};

use crate::common::{TestEnv, keep_records};

#[tokio::test]
async fn conforming_app_passes_every_scenario() {
    // Arrange
    let env = TestEnv::start().await;
    let harness = env.harness(FixtureConfig::default());

    // Act
    let report = harness.run(&Scenario::ALL).await;

    // Assert
    for outcome in &report.outcomes {
        assert!(outcome.passed, "{} failed: {:?}", outcome.scenario, outcome.failure);
    }
    assert!(report.is_success());
    assert_eq!(report.passed(), Scenario::ALL.len());

    // Assert - seeded records are cleaned up
    assert!(env.records().is_empty(), "left behind: {:?}", env.records());
}

#[tokio::test]
async fn run_order_follows_declaration_order() {
    let env = TestEnv::start().await;
    let harness = env.harness(FixtureConfig::default());

    let report = harness
        .run(&[Scenario::Delete, Scenario::List, Scenario::Delete, Scenario::AddForm])
        .await;

    let order: Vec<_> = report.outcomes.iter().map(|a| a.scenario).collect();
    assert_eq!(order, vec![Scenario::List, Scenario::AddForm, Scenario::Delete]);
    assert!(report.is_success());
}

#[tokio::test]
async fn add_submit_stores_the_submission() {
    // Arrange
    let env = TestEnv::start().await;
    let harness = env.harness(keep_records());

    // Act
    let outcome = harness.run_one(Scenario::AddSubmit).await;

    // Assert
    assert!(outcome.passed, "{:?}", outcome.failure);
    let records = env.records();
    assert_eq!(records.len(), 1);
    let record = &records[0];
    assert!(record.name.starts_with("DEV: Challenge Accepted "));
    assert_eq!(record.place, "Sofia Tech Park");
    assert_eq!(record.start.to_string(), "2024-09-29T09:00:00");
    assert_eq!(record.end.to_string(), "2024-09-29T19:00:00");
}

#[tokio::test]
async fn fixed_names_are_used_verbatim() {
    let env = TestEnv::start().await;
    let harness = env.harness(FixtureConfig {
        unique_names: false,
        ..keep_records()
    });

    let outcome = harness.run_one(Scenario::AddSubmit).await;

    assert!(outcome.passed, "{:?}", outcome.failure);
    assert_eq!(env.records()[0].name, "DEV: Challenge Accepted");
}

#[tokio::test]
async fn fixed_names_leave_existing_namesake_alone() {
    // Arrange
    let env = TestEnv::start().await;
    let existing = env.insert("DEV: Challenge Accepted");
    let before = env.records();
    let harness = env.harness(FixtureConfig {
        unique_names: false,
        ..Default::default()
    });

    // Act
    let outcome = harness.run_one(Scenario::AddSubmit).await;

    // Assert - own record checked and removed, namesake untouched
    assert!(outcome.passed, "{:?}", outcome.failure);
    let after = env.records();
    assert_eq!(after, before);
    assert_eq!(after[0].id, existing);
}

#[tokio::test]
async fn fixed_name_deletion_spares_existing_namesake() {
    let env = TestEnv::start().await;
    env.insert("Event for Deleting");
    let before = env.records();
    let harness = env.harness(FixtureConfig {
        unique_names: false,
        ..Default::default()
    });

    let outcome = harness.run_one(Scenario::Delete).await;

    assert!(outcome.passed, "{:?}", outcome.failure);
    assert_eq!(env.records(), before);
}

#[tokio::test]
async fn edit_submit_updates_seeded_record() {
    let env = TestEnv::start().await;
    let harness = env.harness(keep_records());

    let outcome = harness.run_one(Scenario::EditSubmit).await;

    assert!(outcome.passed, "{:?}", outcome.failure);
    let records = env.records();
    assert_eq!(records.len(), 1);
    assert!(records[0].name.starts_with("eventmi-verify "));
    assert!(records[0].name.ends_with(" Updated!"));
    assert_eq!(records[0].place, "Sofia Tech Park (moved)");
}

#[tokio::test]
async fn delete_removes_seeded_record() {
    let env = TestEnv::start().await;
    let harness = env.harness(keep_records());

    let outcome = harness.run_one(Scenario::Delete).await;

    assert!(outcome.passed, "{:?}", outcome.failure);
    assert!(env.records().is_empty());
}

#[tokio::test]
async fn report_serializes_scenario_names() {
    let env = TestEnv::start().await;
    let harness = env.harness(FixtureConfig::default());

    let report = harness.run(&[Scenario::List, Scenario::EditMismatch]).await;
    let json: serde_json::Value = serde_json::from_str(&report.to_json().unwrap()).unwrap();

    assert_eq!(json["outcomes"][0]["scenario"], "list");
    assert_eq!(json["outcomes"][1]["scenario"], "edit-mismatch");
    assert_eq!(json["outcomes"][1]["passed"], true);
}

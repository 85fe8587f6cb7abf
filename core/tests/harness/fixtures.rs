// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Runs pinned to a pre-existing record.

use eventmi_client::EventId;
use eventmi_verify_core::{FixtureConfig, Scenario};

use crate::common::{TestEnv, keep_records};

#[tokio::test]
async fn existing_record_is_used_and_restored() {
    // Arrange
    let env = TestEnv::start().await;
    let id = env.insert("Rust Meetup");
    let original = env.records();
    let harness = env.harness(FixtureConfig {
        existing_id: Some(id),
        ..Default::default()
    });

    // Act
    let report = harness
        .run(&[
            Scenario::Details,
            Scenario::EditForm,
            Scenario::EditSubmit,
            Scenario::EditMismatch,
            Scenario::EditIncomplete,
        ])
        .await;

    // Assert
    assert!(report.is_success(), "{:?}", report.outcomes);
    assert_eq!(env.records(), original, "no record created, edit reverted");
}

#[tokio::test]
async fn existing_record_stays_edited_without_cleanup() {
    let env = TestEnv::start().await;
    let id = env.insert("Rust Meetup");
    let harness = env.harness(FixtureConfig {
        existing_id: Some(id),
        ..keep_records()
    });

    let outcome = harness.run_one(Scenario::EditSubmit).await;

    assert!(outcome.passed, "{:?}", outcome.failure);
    assert_eq!(env.records()[0].name, "Rust Meetup Updated!");
}

#[tokio::test]
async fn mismatch_uses_other_id_when_path_is_456() {
    // Arrange - grow the table until the record under test is #456
    let env = TestEnv::start().await;
    for i in 1..456 {
        env.insert(&format!("Filler {i}"));
    }
    let id = env.insert("Four Five Six");
    assert_eq!(id, EventId::new(456));
    let harness = env.harness(FixtureConfig {
        existing_id: Some(id),
        ..Default::default()
    });

    // Act
    let outcome = harness.run_one(Scenario::EditMismatch).await;

    // Assert
    assert!(outcome.passed, "{:?}", outcome.failure);
}

#[tokio::test]
async fn missing_existing_record_is_fixture_failure() {
    let env = TestEnv::start().await;
    let harness = env.harness(FixtureConfig {
        existing_id: Some(EventId::new(42)),
        ..Default::default()
    });

    let outcome = harness.run_one(Scenario::Details).await;

    assert!(!outcome.passed);
    let failure = outcome.failure.unwrap();
    assert_eq!(failure.kind, "fixture");
    assert!(failure.message.contains("#42"));
}

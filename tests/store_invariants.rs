//! Store Invariant Tests
//!
//! - A rejected write leaves the store unchanged
//! - Upsert then get round-trips the record exactly
//! - Delete is idempotent
//! - Catalog merges are additive and order-preserving
//! - Concurrent readers never observe a half-written record

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;

use robodb::catalog::{ReferenceValues, Vocabulary};
use robodb::store::{Robot, RobotFilter, RobotStore, StoreError};

// =============================================================================
// Helper Functions
// =============================================================================

fn arm() -> Robot {
    Robot::new("R1", "Arm", "car", &["AI"], "active")
}

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

// =============================================================================
// Validation
// =============================================================================

/// Every controlled field rejects values outside the catalog.
#[test]
fn test_invalid_controlled_values_rejected() {
    let store = RobotStore::new();
    store.upsert(arm()).unwrap();

    let mut bad_model = arm();
    bad_model.model = "spaceship".into();
    let mut bad_tech = arm();
    bad_tech.tech = strings(&["AI", "laser"]);
    let mut bad_status = arm();
    bad_status.status = "retired".into();

    for (robot, field) in [
        (bad_model, "Model"),
        (bad_tech, "Tech"),
        (bad_status, "Status"),
    ] {
        let err = store.upsert(robot).unwrap_err();
        assert_eq!(err.field(), Some(field));
        assert_eq!(store.get("R1").unwrap(), arm());
        assert_eq!(store.len(), 1);
    }
}

/// Scenario: create, then a rejected update keeps the original record.
#[test]
fn test_rejected_update_keeps_original() {
    let store = RobotStore::new();
    store.upsert(arm()).unwrap();
    assert_eq!(store.get("R1").unwrap(), arm());

    let spaceship = Robot::new("R1", "Arm", "spaceship", &["AI"], "active");
    match store.upsert(spaceship) {
        Err(StoreError::Validation(e)) => {
            assert_eq!(e.field, "Model");
            assert!(e.message.contains("Allowed models: [car, humanoid, transformation]"));
        }
        other => panic!("expected validation error, got {:?}", other),
    }

    assert_eq!(store.get("R1").unwrap().model, "car");
}

#[test]
fn test_upsert_round_trip_with_description() {
    let store = RobotStore::new();
    let robot = Robot::new("T-800", "Terminator", "humanoid", &["AI", "cyborg", "AI"], "progress")
        .with_description("Cyberdyne Systems Model 101");
    store.upsert(robot.clone()).unwrap();
    assert_eq!(store.get("T-800").unwrap(), robot);
}

#[test]
fn test_delete_then_exists() {
    let store = RobotStore::new();
    store.upsert(arm()).unwrap();
    store.delete("R1");
    assert!(!store.exists("R1"));
    store.delete("R1");
    store.delete("never-there");
    assert!(store.is_empty());
}

// =============================================================================
// Catalog
// =============================================================================

#[test]
fn test_merge_existing_model_unchanged() {
    let store = RobotStore::new();
    let before = store.references();
    let after = store.update_reference_values(&ReferenceValues {
        models: strings(&["car"]),
        ..Default::default()
    });
    assert_eq!(after.models, before.models);
}

#[test]
fn test_merge_techs_scenario() {
    let store = RobotStore::new();
    let merged = store.update_reference_values(&ReferenceValues {
        techs: strings(&["AI", "drone"]),
        ..Default::default()
    });
    assert_eq!(
        merged.techs,
        strings(&["AI", "car", "robot", "cyborg", "humanoid", "drone"])
    );
    assert_eq!(store.references(), merged);
}

#[test]
fn test_merged_value_usable_immediately() {
    let store = RobotStore::new();
    store.update_reference_values(&ReferenceValues {
        models: strings(&["spaceship"]),
        status: strings(&["retired"]),
        ..Default::default()
    });

    let refs = store.references();
    assert!(refs.contains(Vocabulary::Model, "spaceship"));

    store
        .upsert(Robot::new("S1", "Shuttle", "spaceship", &[], "retired"))
        .unwrap();
    assert_eq!(store.list(&RobotFilter::all().with_model("spaceship")).len(), 1);
}

// =============================================================================
// Concurrency
// =============================================================================

/// Readers racing a writer only ever see one of the two whole records.
#[test]
fn test_concurrent_reads_see_whole_records() {
    let store = Arc::new(RobotStore::new());
    let first = Robot::new("R1", "First", "car", &["AI"], "active").with_description("one");
    let second = Robot::new("R1", "Second", "humanoid", &["robot", "cyborg"], "inactive")
        .with_description("two");
    store.upsert(first.clone()).unwrap();

    let done = AtomicBool::new(false);

    thread::scope(|s| {
        for _ in 0..4 {
            s.spawn(|| {
                while !done.load(Ordering::Relaxed) {
                    let seen = store.get("R1").unwrap();
                    assert!(seen == first || seen == second, "torn read: {:?}", seen);
                }
            });
        }

        s.spawn(|| {
            for i in 0..2_000 {
                let next = if i % 2 == 0 { second.clone() } else { first.clone() };
                store.upsert(next).unwrap();
            }
            done.store(true, Ordering::Relaxed);
        });
    });
}

/// Concurrent creates of the same code admit exactly one winner.
#[test]
fn test_concurrent_create_single_winner() {
    let store = Arc::new(RobotStore::new());

    let outcomes: Vec<bool> = thread::scope(|s| {
        let handles: Vec<_> = (0..8)
            .map(|i| {
                let store = &store;
                s.spawn(move || {
                    let robot = Robot::new("R1", format!("Arm {}", i), "car", &[], "active");
                    store.create(robot).is_ok()
                })
            })
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    assert_eq!(outcomes.iter().filter(|ok| **ok).count(), 1);
    assert_eq!(store.len(), 1);
}

/// Concurrent catalog merges never duplicate a value.
#[test]
fn test_concurrent_merges_stay_unique() {
    let store = Arc::new(RobotStore::new());

    thread::scope(|s| {
        for _ in 0..8 {
            s.spawn(|| {
                store.update_reference_values(&ReferenceValues {
                    techs: strings(&["drone", "laser"]),
                    ..Default::default()
                });
            });
        }
    });

    let techs = store.references().techs;
    assert_eq!(techs.len(), 7);
    assert_eq!(techs.iter().filter(|t| *t == "drone").count(), 1);
}

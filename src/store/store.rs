//! Robot store
//!
//! A single reader/writer lock guards both the record map and the Reference
//! Catalog, so a validation performed during a write always observes a
//! consistent catalog.
//!
//! - Reads (`get`, `exists`, `list`, `references`) take the shared guard
//! - Writes (`upsert`, `delete`, `update_reference_values`, ...) take the
//!   exclusive guard
//! - Every operation acquires the lock exactly once and never nests
//! - Nothing inside a critical section performs I/O; logging happens after
//!   the guard is dropped

use std::collections::HashMap;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::catalog::ReferenceValues;
use crate::observability::{log_event_with_fields, Event};

use super::errors::{StoreError, StoreResult, ValidationError};
use super::filter::RobotFilter;
use super::robot::Robot;
use super::seed::{SeedFile, SeedReport, SkippedRecord};
use super::validator::validate_robot;

/// State protected by the store lock
#[derive(Debug)]
struct StoreInner {
    robots: HashMap<String, Robot>,
    refs: ReferenceValues,
}

impl StoreInner {
    /// Validates and inserts or replaces. Caller holds the write guard.
    fn upsert(&mut self, robot: Robot) -> Result<(), ValidationError> {
        validate_robot(&robot, &self.refs)?;
        self.robots.insert(robot.code.clone(), robot);
        Ok(())
    }
}

/// Concurrency-safe robot store.
///
/// Constructed once at process start and shared behind an `Arc`.
#[derive(Debug)]
pub struct RobotStore {
    inner: RwLock<StoreInner>,
}

impl RobotStore {
    /// Empty store with the default catalog
    pub fn new() -> Self {
        Self::with_references(ReferenceValues::with_defaults())
    }

    /// Empty store with a caller-supplied catalog
    pub fn with_references(refs: ReferenceValues) -> Self {
        Self {
            inner: RwLock::new(StoreInner {
                robots: HashMap::new(),
                refs,
            }),
        }
    }

    // All mutation happens after validation in a single insert, remove or
    // append, so a poisoned guard never exposes a half-written record.
    fn read(&self) -> RwLockReadGuard<'_, StoreInner> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, StoreInner> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }

    // ==================
    // Reads
    // ==================

    /// Returns a copy of the robot stored under `code`
    pub fn get(&self, code: &str) -> StoreResult<Robot> {
        self.read()
            .robots
            .get(code)
            .cloned()
            .ok_or_else(|| StoreError::NotFound(code.to_string()))
    }

    pub fn exists(&self, code: &str) -> bool {
        self.read().robots.contains_key(code)
    }

    /// Robots matching `filter`, ordered by code
    pub fn list(&self, filter: &RobotFilter) -> Vec<Robot> {
        let mut robots: Vec<Robot> = {
            let inner = self.read();
            inner
                .robots
                .values()
                .filter(|r| filter.matches(r))
                .cloned()
                .collect()
        };
        robots.sort_by(|a, b| a.code.cmp(&b.code));
        robots
    }

    /// Snapshot of the current catalog
    pub fn references(&self) -> ReferenceValues {
        self.read().refs.clone()
    }

    pub fn len(&self) -> usize {
        self.read().robots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    // ==================
    // Writes
    // ==================

    /// Validates and inserts or fully replaces the robot keyed by its code.
    ///
    /// Does not check for an existing code; see [`RobotStore::create`].
    pub fn upsert(&self, robot: Robot) -> StoreResult<()> {
        let code = robot.code.clone();
        let result = self.write().upsert(robot);
        if let Err(e) = &result {
            log_rejection(&code, e);
        }
        result.map_err(StoreError::from)
    }

    /// Unconditional removal; absent codes are a no-op.
    pub fn delete(&self, code: &str) {
        self.write().robots.remove(code);
    }

    /// Merges new values into the catalog and returns the merged catalog.
    ///
    /// Existing robots are not revalidated.
    pub fn update_reference_values(&self, new_values: &ReferenceValues) -> ReferenceValues {
        let merged = {
            let mut inner = self.write();
            inner.refs.merge(new_values);
            inner.refs.clone()
        };

        let models = merged.models.len().to_string();
        let techs = merged.techs.len().to_string();
        let status = merged.status.len().to_string();
        log_event_with_fields(
            Event::ReferencesUpdated,
            &[
                ("models", models.as_str()),
                ("status", status.as_str()),
                ("techs", techs.as_str()),
            ],
        );

        merged
    }

    /// Inserts a new robot, failing if the code is already taken.
    ///
    /// The existence check and the insert share one write guard.
    pub fn create(&self, robot: Robot) -> StoreResult<Robot> {
        let code = robot.code.clone();
        let result = {
            let mut inner = self.write();
            if inner.robots.contains_key(&code) {
                Err(StoreError::AlreadyExists(code.clone()))
            } else {
                inner
                    .upsert(robot.clone())
                    .map(|_| robot)
                    .map_err(StoreError::from)
            }
        };

        match &result {
            Ok(_) => log_event_with_fields(Event::RobotCreated, &[("code", code.as_str())]),
            Err(StoreError::Validation(e)) => log_rejection(&code, e),
            Err(_) => {}
        }
        result
    }

    /// Fully replaces an existing robot.
    ///
    /// `code` overrides whatever code the body carries.
    pub fn replace(&self, code: &str, mut robot: Robot) -> StoreResult<Robot> {
        robot.code = code.to_string();
        let result = {
            let mut inner = self.write();
            if !inner.robots.contains_key(code) {
                Err(StoreError::NotFound(code.to_string()))
            } else {
                inner
                    .upsert(robot.clone())
                    .map(|_| robot)
                    .map_err(StoreError::from)
            }
        };

        match &result {
            Ok(_) => log_event_with_fields(Event::RobotUpdated, &[("code", code)]),
            Err(StoreError::Validation(e)) => log_rejection(code, e),
            Err(_) => {}
        }
        result
    }

    /// Removes a robot, reporting absence.
    pub fn remove(&self, code: &str) -> StoreResult<()> {
        let removed = self.write().robots.remove(code);
        match removed {
            Some(_) => {
                log_event_with_fields(Event::RobotDeleted, &[("code", code)]);
                Ok(())
            }
            None => Err(StoreError::NotFound(code.to_string())),
        }
    }

    /// Loads seed robots under a single write guard.
    ///
    /// Invalid records are skipped; later records with the same code replace
    /// earlier ones.
    pub fn seed(&self, robots: Vec<Robot>) -> SeedReport {
        self.apply_seed(robots, SeedReport::default())
    }

    /// Loads a decoded seed file. Records that did not decode are reported
    /// as skipped ahead of the validation skips.
    pub fn load_seed(&self, seed: SeedFile) -> SeedReport {
        let report = SeedReport {
            accepted: Vec::new(),
            skipped: seed.undecodable,
        };
        self.apply_seed(seed.robots, report)
    }

    fn apply_seed(&self, robots: Vec<Robot>, mut report: SeedReport) -> SeedReport {
        {
            let mut inner = self.write();
            for robot in robots {
                let code = robot.code.clone();
                match inner.upsert(robot) {
                    Ok(()) => report.accepted.push(code),
                    Err(e) => report.skipped.push(SkippedRecord {
                        code,
                        reason: e.to_string(),
                    }),
                }
            }
        }

        for skipped in &report.skipped {
            log_event_with_fields(
                Event::SeedRecordSkipped,
                &[
                    ("code", skipped.code.as_str()),
                    ("reason", skipped.reason.as_str()),
                ],
            );
        }
        let accepted = report.accepted_count().to_string();
        let skipped = report.skipped_count().to_string();
        log_event_with_fields(
            Event::SeedLoaded,
            &[("accepted", accepted.as_str()), ("skipped", skipped.as_str())],
        );

        report
    }
}

impl Default for RobotStore {
    fn default() -> Self {
        Self::new()
    }
}

fn log_rejection(code: &str, err: &ValidationError) {
    log_event_with_fields(
        Event::WriteRejected,
        &[
            ("code", code),
            ("field", err.field.as_str()),
            ("message", err.message.as_str()),
        ],
    );
}

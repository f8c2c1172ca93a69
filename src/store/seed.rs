//! Startup seed data
//!
//! A seed file is a JSON object `{"robots": [...]}` loaded once when the
//! process starts. Records are decoded one at a time: a record that cannot be
//! decoded or that fails validation is skipped and reported, never fatal. A
//! document that is not valid JSON as a whole is an error.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

use super::robot::Robot;

/// Seed file errors
#[derive(Debug, Error)]
pub enum SeedError {
    #[error("Failed to read seed file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid seed JSON in {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

/// On-disk seed document, before per-record decoding
#[derive(Debug, Deserialize)]
struct RawSeedFile {
    #[serde(default)]
    robots: Vec<Value>,
}

/// Decoded seed document
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SeedFile {
    /// Records that decoded as robots, in file order
    pub robots: Vec<Robot>,
    /// Records that did not decode
    pub undecodable: Vec<SkippedRecord>,
}

impl SeedFile {
    /// Reads and parses a seed file
    pub fn load(path: &Path) -> Result<Self, SeedError> {
        let display = path.display().to_string();
        let content = fs::read_to_string(path).map_err(|source| SeedError::Io {
            path: display.clone(),
            source,
        })?;
        Self::parse(&content).map_err(|source| SeedError::Parse {
            path: display,
            source,
        })
    }

    /// Parses a seed document, decoding each record independently
    pub fn parse(content: &str) -> Result<Self, serde_json::Error> {
        let raw: RawSeedFile = serde_json::from_str(content)?;
        let mut seed = SeedFile::default();

        for value in raw.robots {
            let code = value
                .get("code")
                .and_then(Value::as_str)
                .unwrap_or_default()
                .to_string();
            match serde_json::from_value::<Robot>(value) {
                Ok(robot) => seed.robots.push(robot),
                Err(e) => seed.undecodable.push(SkippedRecord {
                    code,
                    reason: format!("Invalid record: {}", e),
                }),
            }
        }

        Ok(seed)
    }
}

/// A seed record that was not loaded
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkippedRecord {
    pub code: String,
    pub reason: String,
}

/// Outcome of seeding a store
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SeedReport {
    pub accepted: Vec<String>,
    pub skipped: Vec<SkippedRecord>,
}

impl SeedReport {
    pub fn accepted_count(&self) -> usize {
        self.accepted.len()
    }

    pub fn skipped_count(&self) -> usize {
        self.skipped.len()
    }
}

//! Reference value sets and their merge semantics

use std::fmt;

use serde::{Deserialize, Serialize};

use super::defaults::{DEFAULT_MODELS, DEFAULT_STATUS, DEFAULT_TECHS};

/// One of the three controlled vocabularies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Vocabulary {
    Model,
    Tech,
    Status,
}

impl Vocabulary {
    /// Field name reported when a value from this vocabulary is rejected
    pub fn field(&self) -> &'static str {
        match self {
            Vocabulary::Model => "Model",
            Vocabulary::Tech => "Tech",
            Vocabulary::Status => "Status",
        }
    }
}

impl fmt::Display for Vocabulary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.field())
    }
}

/// The Reference Catalog.
///
/// Also used as the body of a partial update: any of the three keys may be
/// omitted and deserializes to an empty list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReferenceValues {
    #[serde(default)]
    pub models: Vec<String>,
    #[serde(default)]
    pub techs: Vec<String>,
    #[serde(default)]
    pub status: Vec<String>,
}

impl ReferenceValues {
    /// Catalog holding the default vocabularies
    pub fn with_defaults() -> Self {
        Self {
            models: owned_strings(DEFAULT_MODELS),
            techs: owned_strings(DEFAULT_TECHS),
            status: owned_strings(DEFAULT_STATUS),
        }
    }

    /// Returns the values of one vocabulary in insertion order
    pub fn values(&self, vocabulary: Vocabulary) -> &[String] {
        match vocabulary {
            Vocabulary::Model => &self.models,
            Vocabulary::Tech => &self.techs,
            Vocabulary::Status => &self.status,
        }
    }

    /// Exact, case-sensitive membership test
    pub fn contains(&self, vocabulary: Vocabulary, value: &str) -> bool {
        self.values(vocabulary).iter().any(|v| v == value)
    }

    /// Set-union merge.
    ///
    /// Appends every incoming value not already present, keeping existing
    /// entries and their order. Merging the same values twice is a no-op the
    /// second time.
    pub fn merge(&mut self, new_values: &ReferenceValues) {
        append_missing(&mut self.models, &new_values.models);
        append_missing(&mut self.techs, &new_values.techs);
        append_missing(&mut self.status, &new_values.status);
    }

    /// Renders one vocabulary as `[a, b, c]` for error messages
    pub fn describe(&self, vocabulary: Vocabulary) -> String {
        format!("[{}]", self.values(vocabulary).join(", "))
    }
}

fn append_missing(target: &mut Vec<String>, incoming: &[String]) {
    for value in incoming {
        if !target.contains(value) {
            target.push(value.clone());
        }
    }
}

fn owned_strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

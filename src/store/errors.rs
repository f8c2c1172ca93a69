//! Store error types
//!
//! Only two conditions exist at the store boundary:
//! - A write was rejected by validation (recoverable by fixing input)
//! - A keyed record was absent (or, for create, already present)
//!
//! Neither is ever fatal.

use thiserror::Error;

use crate::catalog::{ReferenceValues, Vocabulary};

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// A rejected write, naming the offending field.
///
/// The message enumerates the currently-allowed values where applicable so a
/// client can correct its input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{field}: {message}")]
pub struct ValidationError {
    pub field: String,
    pub message: String,
}

impl ValidationError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Required field was empty
    pub fn empty(field: &str) -> Self {
        Self::new(field, format!("{} cannot be empty", field))
    }

    /// Value is not a member of `vocabulary`
    pub fn not_allowed(vocabulary: Vocabulary, value: &str, refs: &ReferenceValues) -> Self {
        let allowed = refs.describe(vocabulary);
        let message = match vocabulary {
            Vocabulary::Model => format!("Invalid model. Allowed models: {}", allowed),
            Vocabulary::Tech => format!("Invalid tech: {}. Allowed techs: {}", value, allowed),
            Vocabulary::Status => format!("Invalid status. Allowed status: {}", allowed),
        };
        Self::new(vocabulary.field(), message)
    }
}

/// Store errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// Write rejected by reference-value validation
    #[error("{0}")]
    Validation(#[from] ValidationError),

    /// No robot stored under this code
    #[error("Robot not found: {0}")]
    NotFound(String),

    /// Create attempted on an existing code
    #[error("Robot code already exists: {0}")]
    AlreadyExists(String),
}

impl StoreError {
    /// Offending field, for validation failures
    pub fn field(&self) -> Option<&str> {
        match self {
            StoreError::Validation(e) => Some(&e.field),
            _ => None,
        }
    }
}

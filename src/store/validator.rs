//! Robot validator
//!
//! Checks run in a fixed order and stop at the first failure:
//! 1. code non-empty
//! 2. model in catalog
//! 3. every tech in catalog
//! 4. status in catalog
//! 5. name non-empty
//!
//! Validation never mutates the robot or the catalog.

use crate::catalog::{ReferenceValues, Vocabulary};

use super::errors::ValidationError;
use super::robot::Robot;

/// Validates `robot` against the catalog as it stands right now.
pub fn validate_robot(robot: &Robot, refs: &ReferenceValues) -> Result<(), ValidationError> {
    if robot.code.is_empty() {
        return Err(ValidationError::empty("Code"));
    }

    if !refs.contains(Vocabulary::Model, &robot.model) {
        return Err(ValidationError::not_allowed(
            Vocabulary::Model,
            &robot.model,
            refs,
        ));
    }

    if let Some(tech) = robot
        .tech
        .iter()
        .find(|t| !refs.contains(Vocabulary::Tech, t))
    {
        return Err(ValidationError::not_allowed(Vocabulary::Tech, tech, refs));
    }

    if !refs.contains(Vocabulary::Status, &robot.status) {
        return Err(ValidationError::not_allowed(
            Vocabulary::Status,
            &robot.status,
            refs,
        ));
    }

    if robot.name.is_empty() {
        return Err(ValidationError::empty("Name"));
    }

    Ok(())
}

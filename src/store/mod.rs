//! Record Store subsystem for robodb
//!
//! Owns the mapping from robot code to robot and enforces reference-value
//! validation on every write.
//!
//! # Invariants
//!
//! - Every stored robot passed validation against the catalog at write time
//! - The map key always equals the stored robot's `code`
//! - A rejected write leaves the store unchanged
//! - One lock acquisition per operation; no I/O while the lock is held

mod errors;
mod filter;
mod robot;
mod seed;
mod store;
mod validator;

pub use errors::{StoreError, StoreResult, ValidationError};
pub use filter::RobotFilter;
pub use robot::Robot;
pub use seed::{SeedError, SeedFile, SeedReport, SkippedRecord};
pub use store::RobotStore;
pub use validator::validate_robot;

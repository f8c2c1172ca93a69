//! Reference Catalog subsystem for robodb
//!
//! Tracks the permitted values of the three controlled robot fields
//! (model, tech, status).
//!
//! # Design Principles
//!
//! - Vocabularies only grow; there is no removal
//! - Insertion order is preserved and values are unique
//! - Membership is exact and case-sensitive
//! - Catalog changes never revalidate stored records

mod defaults;
mod reference;

pub use defaults::{DEFAULT_MODELS, DEFAULT_STATUS, DEFAULT_TECHS};
pub use reference::{ReferenceValues, Vocabulary};

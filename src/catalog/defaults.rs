//! Default vocabularies installed when a store is constructed.

/// Models accepted out of the box.
pub const DEFAULT_MODELS: &[&str] = &["car", "humanoid", "transformation"];

/// Technologies accepted out of the box.
pub const DEFAULT_TECHS: &[&str] = &["AI", "car", "robot", "cyborg", "humanoid"];

/// Lifecycle statuses accepted out of the box.
pub const DEFAULT_STATUS: &[&str] = &["progress", "active", "inactive"];

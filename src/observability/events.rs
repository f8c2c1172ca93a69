//! Observable events
//!
//! Events are explicit and typed; each carries its own severity.

use std::fmt;

use super::logger::Severity;

/// Observable events in robodb
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    // Boot & Lifecycle
    /// Process startup begins
    BootStart,
    /// Configuration loaded
    ConfigLoaded,
    /// Startup aborted (FATAL)
    BootFailed,
    /// HTTP listener bound, ready for requests
    Serving,

    // Seed data
    /// Seed file applied
    SeedLoaded,
    /// Seed record failed validation and was skipped
    SeedRecordSkipped,

    // Writes
    /// Robot created
    RobotCreated,
    /// Robot replaced
    RobotUpdated,
    /// Robot removed
    RobotDeleted,
    /// Write rejected by validation
    WriteRejected,
    /// Reference catalog extended
    ReferencesUpdated,
}

impl Event {
    pub fn as_str(&self) -> &'static str {
        match self {
            Event::BootStart => "ROBODB_STARTUP_BEGIN",
            Event::ConfigLoaded => "CONFIG_LOADED",
            Event::BootFailed => "ROBODB_STARTUP_FAILED",
            Event::Serving => "ROBODB_SERVING",
            Event::SeedLoaded => "SEED_LOADED",
            Event::SeedRecordSkipped => "SEED_RECORD_SKIPPED",
            Event::RobotCreated => "ROBOT_CREATED",
            Event::RobotUpdated => "ROBOT_UPDATED",
            Event::RobotDeleted => "ROBOT_DELETED",
            Event::WriteRejected => "WRITE_REJECTED",
            Event::ReferencesUpdated => "REFERENCES_UPDATED",
        }
    }

    pub fn severity(&self) -> Severity {
        match self {
            Event::BootFailed => Severity::Fatal,
            Event::SeedRecordSkipped | Event::WriteRejected => Severity::Warn,
            _ => Severity::Info,
        }
    }

    pub fn is_fatal(&self) -> bool {
        self.severity() == Severity::Fatal
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

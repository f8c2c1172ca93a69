//! Observability subsystem for robodb
//!
//! Structured one-line JSON logs driven by typed lifecycle events.
//!
//! ```ignore
//! use robodb::observability::{log_event_with_fields, Event};
//!
//! log_event_with_fields(Event::RobotCreated, &[("code", "R1")]);
//! ```

mod events;
mod logger;

pub use events::Event;
pub use logger::{Logger, Severity};

/// Log a lifecycle event at its own severity
pub fn log_event(event: Event) {
    Logger::log(event.severity(), event.as_str(), &[]);
}

/// Log a lifecycle event with fields
pub fn log_event_with_fields(event: Event, fields: &[(&str, &str)]) {
    Logger::log(event.severity(), event.as_str(), fields);
}

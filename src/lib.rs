//! robodb - An in-memory robot registry with reference-value validation
//!
//! - `catalog`: permitted values for model, tech and status
//! - `store`: the lock-guarded robot map, validation and seed loading
//! - `http_server`: axum routes over a shared store
//! - `cli`: configuration and process entry point
//! - `observability`: structured JSON logging

pub mod catalog;
pub mod cli;
pub mod http_server;
pub mod observability;
pub mod store;

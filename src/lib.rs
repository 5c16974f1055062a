//! Monetra admin key service — library crate for integration testing.
//!
//! Re-exports the modules needed by integration tests in `tests/`.

pub mod api;
pub mod cli;
pub mod config;
pub mod errors;
pub mod models;
pub mod outcome;
pub mod processor;
pub mod store;

use std::sync::Arc;

use processor::ProcessorClient;
use store::ConfigStore;

/// Shared application state passed to handlers and middleware.
pub struct AppState {
    pub processor: ProcessorClient,
    pub config_store: Arc<dyn ConfigStore>,
    pub config: config::Config,
}

//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor.
//! Clone is required by Axum; the hub is Arc-backed and the config is small.

use crate::config::ServerConfig;
use crate::hub::Hub;

#[derive(Clone)]
pub struct AppState {
    pub hub: Hub,
    pub config: ServerConfig,
}

impl AppState {
    #[must_use]
    pub fn new(config: ServerConfig) -> Self {
        Self { hub: Hub::new(), config }
    }
}

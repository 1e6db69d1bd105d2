//! Application state for the web layer.

use std::sync::Arc;

use crate::config::ServerConfig;
use crate::engine::Engine;

/// Shared application state.
///
/// Contains the engine and the configuration needed to handle requests.
#[derive(Clone)]
pub struct AppState {
    /// Ranking and fare engine
    pub engine: Arc<Engine>,

    /// Server configuration
    pub config: Arc<ServerConfig>,
}

impl AppState {
    /// Create a new app state.
    pub fn new(engine: Engine, config: ServerConfig) -> Self {
        Self {
            engine: Arc::new(engine),
            config: Arc::new(config),
        }
    }
}

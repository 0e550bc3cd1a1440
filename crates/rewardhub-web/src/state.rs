//! Application state.

use rewardhub_core::ServerConfig;

/// Application state shared across handlers.
#[derive(Clone, Debug, Default)]
pub struct AppState {
    /// Show render errors in response bodies.
    pub debug: bool,
}

impl AppState {
    pub fn new(config: &ServerConfig) -> Self {
        Self {
            debug: config.debug,
        }
    }
}

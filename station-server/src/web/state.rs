//! Application state for the web layer.

use std::sync::Arc;

use crate::repository::StationRepository;

/// Shared application state.
///
/// Contains all the services needed to handle requests.
#[derive(Clone)]
pub struct AppState {
    /// Station storage
    pub stations: Arc<dyn StationRepository>,
}

impl AppState {
    /// Create a new app state.
    pub fn new(stations: impl StationRepository + 'static) -> Self {
        Self {
            stations: Arc::new(stations),
        }
    }
}

//! Web layer for the station directory.
//!
//! Provides HTTP endpoints for listing, fetching, creating, updating and
//! deleting stations.

mod dto;
mod routes;
mod state;

pub use dto::*;
pub use routes::{AppError, create_router};
pub use state::AppState;

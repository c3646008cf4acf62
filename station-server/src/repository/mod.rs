//! Station storage.
//!
//! [`StationRepository`] is the seam between the web layer and storage; it
//! knows nothing about HTTP. [`InMemoryStationRepository`] is the only
//! implementation and holds everything for the lifetime of the process.

mod error;
mod memory;
pub mod seed;

use async_trait::async_trait;

use crate::domain::{Station, StationDraft, StationId};

pub use error::RepositoryError;
pub use memory::InMemoryStationRepository;

/// CRUD access to the station collection.
#[async_trait]
pub trait StationRepository: Send + Sync {
    /// Every current station, ordered by id.
    async fn get_all(&self) -> Vec<Station>;

    /// The station with the given id.
    async fn get(&self, id: StationId) -> Result<Station, RepositoryError>;

    /// Store a new station under a freshly assigned id and return it.
    async fn add(&self, draft: StationDraft) -> Result<Station, RepositoryError>;

    /// Overwrite every non-id field of an existing station.
    async fn update(&self, id: StationId, draft: StationDraft) -> Result<(), RepositoryError>;

    /// Remove a station.
    async fn delete(&self, id: StationId) -> Result<(), RepositoryError>;

    /// Number of stations currently held.
    async fn len(&self) -> usize;

    /// Check if the repository holds no stations.
    async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

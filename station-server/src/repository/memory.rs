//! In-memory station storage.

use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use rand::SeedableRng;
use rand::rngs::StdRng;
use tokio::sync::RwLock;
use tracing::{debug, warn};

use crate::domain::{Station, StationDraft, StationId};

use super::error::RepositoryError;
use super::seed::synthetic_stations;
use super::StationRepository;

/// Thread-safe in-memory station store.
///
/// Lookups take the read lock. Every mutation takes the write lock, so id
/// allocation and insertion happen in one critical section and concurrent
/// adds always receive distinct ids.
#[derive(Clone, Default)]
pub struct InMemoryStationRepository {
    inner: Arc<RwLock<Inner>>,
}

struct Inner {
    stations: BTreeMap<StationId, Station>,
    /// Next id to hand out; `None` once the id space is used up.
    next_id: Option<StationId>,
}

impl Default for Inner {
    fn default() -> Self {
        Self {
            stations: BTreeMap::new(),
            next_id: Some(StationId::FIRST),
        }
    }
}

impl Inner {
    fn insert_new(&mut self, draft: StationDraft) -> Result<Station, RepositoryError> {
        let id = self.next_id.ok_or(RepositoryError::IdsExhausted)?;
        self.next_id = id.next();

        let station = Station::from_draft(id, draft);
        self.stations.insert(id, station.clone());
        Ok(station)
    }
}

impl InMemoryStationRepository {
    /// Create an empty repository. The first station added gets id 1.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a repository holding the given stations with ids `1..=n`.
    ///
    /// Seeding stops early, with a warning, if the id space runs out.
    pub fn with_stations(drafts: impl IntoIterator<Item = StationDraft>) -> Self {
        let mut inner = Inner::default();
        for draft in drafts {
            if let Err(e) = inner.insert_new(draft) {
                warn!(error = %e, stored = inner.stations.len(), "stopped seeding early");
                break;
            }
        }

        Self {
            inner: Arc::new(RwLock::new(inner)),
        }
    }

    /// Create a repository pre-populated with `count` synthetic stations.
    ///
    /// With `rng_seed` set the data set is reproducible; otherwise it is
    /// drawn from the thread-local generator.
    pub fn seeded(count: usize, rng_seed: Option<u64>) -> Self {
        let drafts = match rng_seed {
            Some(seed) => synthetic_stations(count, &mut StdRng::seed_from_u64(seed)),
            None => synthetic_stations(count, &mut rand::rng()),
        };
        Self::with_stations(drafts)
    }
}

#[async_trait]
impl StationRepository for InMemoryStationRepository {
    async fn get_all(&self) -> Vec<Station> {
        let guard = self.inner.read().await;
        guard.stations.values().cloned().collect()
    }

    async fn get(&self, id: StationId) -> Result<Station, RepositoryError> {
        let guard = self.inner.read().await;
        guard
            .stations
            .get(&id)
            .cloned()
            .ok_or(RepositoryError::NotFound(id))
    }

    async fn add(&self, draft: StationDraft) -> Result<Station, RepositoryError> {
        let mut guard = self.inner.write().await;
        let station = guard.insert_new(draft)?;
        debug!(id = %station.id, "inserted station");
        Ok(station)
    }

    async fn update(&self, id: StationId, draft: StationDraft) -> Result<(), RepositoryError> {
        let mut guard = self.inner.write().await;
        let existing = guard
            .stations
            .get_mut(&id)
            .ok_or(RepositoryError::NotFound(id))?;
        existing.apply(draft);
        Ok(())
    }

    async fn delete(&self, id: StationId) -> Result<(), RepositoryError> {
        let mut guard = self.inner.write().await;
        guard
            .stations
            .remove(&id)
            .map(|_| ())
            .ok_or(RepositoryError::NotFound(id))
    }

    async fn len(&self) -> usize {
        let guard = self.inner.read().await;
        guard.stations.len()
    }
}

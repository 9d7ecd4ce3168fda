//! In-memory snapshot of every asset record.
//!
//! The cache answers unfiltered list requests without touching the database. It is never
//! patched in place: after every committed mutation the whole sequence is re-read from the
//! store and swapped in, so readers always see a complete snapshot as of `loaded_at`.
//!
//! Concurrent reloads are ordered by a generation number taken before the store read. A
//! reload that started earlier but finishes later never replaces a newer snapshot.

use crate::error::Result;
use crate::store::AssetStore;
use chrono::{DateTime, Utc};
use common::model::asset::Asset;
use log::debug;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

#[derive(Default)]
struct Snapshot {
    assets: Arc<Vec<Asset>>,
    loaded_at: Option<DateTime<Utc>>,
    /// Generation of the reload that produced `assets`; 0 before the first load.
    generation: u64,
}

#[derive(Default)]
pub struct AssetCache {
    /// Held only for an `Arc` clone or swap, never across a store query.
    inner: Mutex<Snapshot>,
    /// Last generation handed out to a reload.
    generations: AtomicU64,
}

impl AssetCache {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, Snapshot> {
        // Writers only ever swap a fully built value, so a poisoned guard is still consistent.
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Re-reads every record from `store` and replaces the snapshot.
    ///
    /// On error the previous snapshot stays in place. A result older than the current
    /// snapshot is discarded; the returned count is what this reload read either way.
    pub fn reload(&self, store: &dyn AssetStore) -> Result<usize> {
        let generation = self.generations.fetch_add(1, Ordering::SeqCst) + 1;
        let assets = Arc::new(store.list_all_ordered_by_created_desc()?);
        let count = assets.len();

        let mut snapshot = self.lock();
        if generation > snapshot.generation {
            snapshot.assets = assets;
            snapshot.loaded_at = Some(Utc::now());
            snapshot.generation = generation;
        } else {
            debug!(
                "Discarding stale cache reload (generation {} < {})",
                generation, snapshot.generation
            );
        }
        Ok(count)
    }

    /// The current records, newest first. The returned value never changes under the caller.
    pub fn snapshot(&self) -> Arc<Vec<Asset>> {
        Arc::clone(&self.lock().assets)
    }

    /// When the snapshot was last rebuilt; `None` before the first successful load.
    pub fn loaded_at(&self) -> Option<DateTime<Utc>> {
        self.lock().loaded_at
    }
}

//! Thread-safe catalog handle.

use std::sync::{Mutex, MutexGuard, PoisonError};

use super::{CatalogStats, Collection, MovieCatalog, SearchCriteria};
use crate::movie::Movie;

/// A [`MovieCatalog`] behind a single lock, for use from several threads.
///
/// Every operation holds the lock for its whole duration, so a removal and
/// its collection cleanup are never observed half-done. Reads return owned
/// snapshots taken while the lock is held.
#[derive(Debug, Default)]
pub struct SharedCatalog {
    inner: Mutex<MovieCatalog>,
}

impl SharedCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, MovieCatalog> {
        // Each operation leaves the catalog consistent before it can panic,
        // so a poisoned lock still guards valid data.
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn add_movie(&self, movie: Movie) -> bool {
        self.lock().add_movie(movie)
    }

    pub fn remove_movie(&self, title: &str) -> bool {
        self.lock().remove_movie(title)
    }

    pub fn create_collection(&self, name: &str) {
        self.lock().create_collection(name)
    }

    pub fn add_to_collection(&self, title: &str, collection_name: &str) -> bool {
        self.lock().add_to_collection(title, collection_name)
    }

    pub fn remove_from_collection(&self, title: &str, collection_name: &str) -> bool {
        self.lock().remove_from_collection(title, collection_name)
    }

    pub fn search(&self, criteria: &SearchCriteria) -> Vec<Movie> {
        self.lock().search(criteria).into_iter().cloned().collect()
    }

    /// Snapshot of all movies in insertion order.
    pub fn movies(&self) -> Vec<Movie> {
        self.lock().iter().cloned().collect()
    }

    pub fn collections(&self) -> Vec<Collection> {
        self.lock().collections().to_vec()
    }

    pub fn get(&self, title: &str) -> Option<Movie> {
        self.lock().get(title).cloned()
    }

    pub fn contains(&self, title: &str) -> bool {
        self.lock().contains(title)
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    pub fn clear(&self) {
        self.lock().clear()
    }

    pub fn stats(&self) -> CatalogStats {
        self.lock().stats()
    }

    pub fn into_inner(self) -> MovieCatalog {
        self.inner
            .into_inner()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

impl From<MovieCatalog> for SharedCatalog {
    fn from(catalog: MovieCatalog) -> Self {
        Self {
            inner: Mutex::new(catalog),
        }
    }
}

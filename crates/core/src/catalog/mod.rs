//! Movie catalog - an in-memory store of movies and named collections.
//!
//! Movies are keyed by title and kept in insertion order. Collections are
//! ordered lists of titles that always refer to movies currently stored:
//! adding a title requires the movie to exist, and removing a movie removes
//! it from every collection.

mod shared;
mod types;

pub use shared::SharedCatalog;
pub use types::*;

use std::collections::{HashMap, HashSet};
use std::iter::FusedIterator;
use std::slice;

use tracing::debug;

use crate::movie::Movie;

/// In-memory movie catalog.
#[derive(Debug, Clone, Default)]
pub struct MovieCatalog {
    movies: Vec<Movie>,
    /// Title -> position in `movies`.
    index: HashMap<String, usize>,
    collections: Vec<Collection>,
}

impl MovieCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a movie.
    ///
    /// Returns false if a movie with the same title is already stored; the
    /// existing entry is left untouched.
    pub fn add_movie(&mut self, movie: Movie) -> bool {
        if self.index.contains_key(&movie.title) {
            debug!(title = %movie.title, "Rejected duplicate movie");
            return false;
        }

        debug!(title = %movie.title, "Added movie");
        self.index.insert(movie.title.clone(), self.movies.len());
        self.movies.push(movie);
        true
    }

    /// Remove a movie and drop its title from every collection.
    ///
    /// Returns false if no movie has this title.
    pub fn remove_movie(&mut self, title: &str) -> bool {
        let Some(pos) = self.index.remove(title) else {
            debug!(title, "Cannot remove unknown movie");
            return false;
        };

        self.movies.remove(pos);
        for slot in self.index.values_mut() {
            if *slot > pos {
                *slot -= 1;
            }
        }

        for collection in &mut self.collections {
            if collection.remove(title) {
                debug!(title, collection = collection.name(), "Dropped from collection");
            }
        }

        debug!(title, "Removed movie");
        true
    }

    /// Create an empty collection. Does nothing if it already exists.
    pub fn create_collection(&mut self, name: &str) {
        if self.collection(name).is_some() {
            return;
        }
        debug!(collection = name, "Created collection");
        self.collections.push(Collection::new(name));
    }

    /// Append a movie to a collection.
    ///
    /// Returns false if the movie or the collection does not exist, or the
    /// title is already in the collection.
    pub fn add_to_collection(&mut self, title: &str, collection_name: &str) -> bool {
        if !self.index.contains_key(title) {
            debug!(title, collection = collection_name, "Cannot collect unknown movie");
            return false;
        }
        let Some(collection) = self.collection_mut(collection_name) else {
            debug!(title, collection = collection_name, "Unknown collection");
            return false;
        };

        let added = collection.push(title);
        debug!(title, collection = collection_name, added, "Add to collection");
        added
    }

    /// Remove a movie from a collection.
    ///
    /// Returns false if the movie or the collection does not exist, or the
    /// title is not in the collection.
    pub fn remove_from_collection(&mut self, title: &str, collection_name: &str) -> bool {
        if !self.index.contains_key(title) {
            debug!(title, collection = collection_name, "Cannot uncollect unknown movie");
            return false;
        }
        let Some(collection) = self.collection_mut(collection_name) else {
            debug!(title, collection = collection_name, "Unknown collection");
            return false;
        };

        let removed = collection.remove(title);
        debug!(title, collection = collection_name, removed, "Remove from collection");
        removed
    }

    /// Movies matching every criterion, in insertion order.
    ///
    /// Empty criteria return every movie.
    pub fn search(&self, criteria: &SearchCriteria) -> Vec<&Movie> {
        self.movies.iter().filter(|m| criteria.matches(m)).collect()
    }

    /// Iterate over all movies in insertion order.
    pub fn iter(&self) -> MovieIter<'_> {
        MovieIter {
            inner: self.movies.iter(),
        }
    }

    /// All collections, in creation order.
    pub fn collections(&self) -> &[Collection] {
        &self.collections
    }

    pub fn collection(&self, name: &str) -> Option<&Collection> {
        self.collections.iter().find(|c| c.name() == name)
    }

    fn collection_mut(&mut self, name: &str) -> Option<&mut Collection> {
        self.collections.iter_mut().find(|c| c.name() == name)
    }

    pub fn get(&self, title: &str) -> Option<&Movie> {
        self.index.get(title).map(|&pos| &self.movies[pos])
    }

    pub fn contains(&self, title: &str) -> bool {
        self.index.contains_key(title)
    }

    pub fn len(&self) -> usize {
        self.movies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.movies.is_empty()
    }

    /// Drop all movies and collections.
    pub fn clear(&mut self) {
        self.movies.clear();
        self.index.clear();
        self.collections.clear();
        debug!("Cleared catalog");
    }

    pub fn stats(&self) -> CatalogStats {
        let collected: HashSet<&str> = self
            .collections
            .iter()
            .flat_map(|c| c.titles().iter().map(String::as_str))
            .collect();

        CatalogStats {
            total_movies: self.movies.len(),
            total_collections: self.collections.len(),
            collected_titles: collected.len(),
        }
    }
}

impl<'a> IntoIterator for &'a MovieCatalog {
    type Item = &'a Movie;
    type IntoIter = MovieIter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over the movies of a [`MovieCatalog`] in insertion order.
#[derive(Debug, Clone)]
pub struct MovieIter<'a> {
    inner: slice::Iter<'a, Movie>,
}

impl<'a> Iterator for MovieIter<'a> {
    type Item = &'a Movie;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl DoubleEndedIterator for MovieIter<'_> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back()
    }
}

impl ExactSizeIterator for MovieIter<'_> {}

impl FusedIterator for MovieIter<'_> {}

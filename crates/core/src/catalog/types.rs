//! Types for the movie catalog.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::movie::{FieldValue, Movie, MovieField};

/// A named, ordered, duplicate-free list of movie titles.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Collection {
    name: String,
    titles: Vec<String>,
}

impl Collection {
    pub(crate) fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            titles: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Titles in the order they were added.
    pub fn titles(&self) -> &[String] {
        &self.titles
    }

    pub fn len(&self) -> usize {
        self.titles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.titles.is_empty()
    }

    pub fn contains(&self, title: &str) -> bool {
        self.titles.iter().any(|t| t == title)
    }

    /// Append a title. Returns false if it is already present.
    pub(crate) fn push(&mut self, title: &str) -> bool {
        if self.contains(title) {
            return false;
        }
        self.titles.push(title.to_string());
        true
    }

    /// Remove a title. Returns false if it was not present.
    pub(crate) fn remove(&mut self, title: &str) -> bool {
        match self.titles.iter().position(|t| t == title) {
            Some(pos) => {
                self.titles.remove(pos);
                true
            }
            None => false,
        }
    }
}

/// Exact-match search criteria: every pair must hold for a movie to match.
///
/// Built either from typed fields with [`with`](Self::with), or from
/// attribute names with [`and`](Self::and) / [`try_from_pairs`](Self::try_from_pairs),
/// which reject names that are not movie attributes.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchCriteria {
    criteria: Vec<(MovieField, FieldValue)>,
}

impl SearchCriteria {
    /// Empty criteria (matches every movie).
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, field: MovieField, value: impl Into<FieldValue>) -> Self {
        self.criteria.push((field, value.into()));
        self
    }

    /// Add a criterion keyed by attribute name.
    pub fn and(self, name: &str, value: impl Into<FieldValue>) -> Result<Self, CatalogError> {
        let field = name.parse::<MovieField>()?;
        Ok(self.with(field, value))
    }

    /// Build criteria from `(attribute name, value)` pairs.
    ///
    /// Fails on the first name that is not a movie attribute.
    pub fn try_from_pairs<I, K, V>(pairs: I) -> Result<Self, CatalogError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<FieldValue>,
    {
        pairs
            .into_iter()
            .try_fold(Self::new(), |criteria, (name, value)| {
                criteria.and(name.as_ref(), value)
            })
    }

    pub fn is_empty(&self) -> bool {
        self.criteria.is_empty()
    }

    pub fn len(&self) -> usize {
        self.criteria.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &(MovieField, FieldValue)> {
        self.criteria.iter()
    }

    pub fn matches(&self, movie: &Movie) -> bool {
        self.criteria
            .iter()
            .all(|(field, value)| movie.matches(*field, value))
    }
}

/// Catalog statistics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogStats {
    /// Movies currently stored.
    pub total_movies: usize,
    /// Collections, including empty ones.
    pub total_collections: usize,
    /// Distinct titles that belong to at least one collection.
    pub collected_titles: usize,
}

/// Errors for catalog operations.
///
/// Ordinary outcomes such as a duplicate or missing title are reported as
/// `false` by the mutating operations, not as errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    #[error("Unknown movie field: {0}")]
    UnknownField(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collection_push_rejects_duplicates() {
        let mut collection = Collection::new("Favourites");
        assert!(collection.push("Heat"));
        assert!(!collection.push("Heat"));
        assert_eq!(collection.titles(), ["Heat".to_string()]);
    }

    #[test]
    fn test_collection_remove() {
        let mut collection = Collection::new("Favourites");
        collection.push("Heat");
        collection.push("Alien");
        assert!(collection.remove("Heat"));
        assert!(!collection.remove("Heat"));
        assert_eq!(collection.titles(), ["Alien".to_string()]);
    }

    #[test]
    fn test_criteria_and_parses_names() {
        let criteria = SearchCriteria::new()
            .and("year", 2010)
            .unwrap()
            .and("genre", "scifi")
            .unwrap();
        assert_eq!(
            criteria,
            SearchCriteria::new()
                .with(MovieField::Year, 2010)
                .with(MovieField::Genre, "scifi")
        );
    }

    #[test]
    fn test_criteria_and_rejects_unknown_name() {
        let result = SearchCriteria::new().and("studio", "Legendary");
        assert_eq!(
            result,
            Err(CatalogError::UnknownField("studio".to_string()))
        );
    }

    #[test]
    fn test_criteria_try_from_pairs() {
        let criteria =
            SearchCriteria::try_from_pairs([("genre", "drama"), ("director", "Anon")]).unwrap();
        assert_eq!(criteria.len(), 2);

        let result = SearchCriteria::try_from_pairs([("genre", "drama"), ("colour", "red")]);
        assert!(matches!(result, Err(CatalogError::UnknownField(ref n)) if n == "colour"));
    }

    #[test]
    fn test_empty_criteria_match_everything() {
        let movie = Movie::new("Heat", 1995, "crime", "Michael Mann");
        let criteria = SearchCriteria::new();
        assert!(criteria.is_empty());
        assert!(criteria.matches(&movie));
    }

    #[test]
    fn test_criteria_require_all_pairs() {
        let movie = Movie::new("Heat", 1995, "crime", "Michael Mann");
        let criteria = SearchCriteria::new()
            .with(MovieField::Year, 1995)
            .with(MovieField::Genre, "drama");
        assert!(!criteria.matches(&movie));
    }

    #[test]
    fn test_unknown_field_error_message() {
        let err = CatalogError::UnknownField("colour".to_string());
        assert_eq!(err.to_string(), "Unknown movie field: colour");
    }

    #[test]
    fn test_catalog_stats_serialization() {
        let stats = CatalogStats {
            total_movies: 3,
            total_collections: 1,
            collected_titles: 2,
        };
        let json = serde_json::to_string(&stats).unwrap();
        let parsed: CatalogStats = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, stats);
        assert!(json.contains("\"collected_titles\":2"));
    }
}

//! Types for movie records.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::catalog::CatalogError;

/// A single movie entry. The title is its identity within a catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Movie {
    /// Movie title (unique key in a catalog).
    pub title: String,
    /// Release year.
    pub year: i32,
    /// Genre (e.g., "scifi", "drama").
    pub genre: String,
    /// Director name.
    pub director: String,
    /// Rating, 0.0 when unrated.
    #[serde(default)]
    pub rating: f64,
}

impl Movie {
    /// Create an unrated movie. No validation is performed.
    pub fn new(
        title: impl Into<String>,
        year: i32,
        genre: impl Into<String>,
        director: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            year,
            genre: genre.into(),
            director: director.into(),
            rating: 0.0,
        }
    }

    pub fn with_rating(mut self, rating: f64) -> Self {
        self.rating = rating;
        self
    }

    /// Human-readable one-line summary.
    ///
    /// `"<title> (<year>) | <genre> | Director: <director> | Rating: <rating>"`
    pub fn describe(&self) -> String {
        self.to_string()
    }

    /// Same as [`describe`](Self::describe) with the rating printed to a
    /// fixed number of decimal places.
    pub fn describe_with_precision(&self, precision: usize) -> String {
        format!(
            "{} ({}) | {} | Director: {} | Rating: {:.*}",
            self.title, self.year, self.genre, self.director, precision, self.rating
        )
    }

    /// Read one attribute as a typed value.
    pub fn field(&self, field: MovieField) -> FieldValue {
        match field {
            MovieField::Title => FieldValue::Text(self.title.clone()),
            MovieField::Year => FieldValue::Integer(i64::from(self.year)),
            MovieField::Genre => FieldValue::Text(self.genre.clone()),
            MovieField::Director => FieldValue::Text(self.director.clone()),
            MovieField::Rating => FieldValue::Float(self.rating),
        }
    }

    /// Exact-equality test of one attribute against an expected value.
    ///
    /// Values of the wrong kind never match: `Text("2010")` is not the year
    /// 2010 and `Integer(9)` is not the rating 9.0.
    pub fn matches(&self, field: MovieField, expected: &FieldValue) -> bool {
        match (field, expected) {
            (MovieField::Title, FieldValue::Text(s)) => self.title == *s,
            (MovieField::Year, FieldValue::Integer(n)) => i64::from(self.year) == *n,
            (MovieField::Genre, FieldValue::Text(s)) => self.genre == *s,
            (MovieField::Director, FieldValue::Text(s)) => self.director == *s,
            (MovieField::Rating, FieldValue::Float(r)) => self.rating == *r,
            _ => false,
        }
    }
}

impl fmt::Display for Movie {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // `{:?}` keeps the decimal point on whole ratings ("0.0", "9.0").
        write!(
            f,
            "{} ({}) | {} | Director: {} | Rating: {:?}",
            self.title, self.year, self.genre, self.director, self.rating
        )
    }
}

/// The attributes a movie can be searched by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MovieField {
    Title,
    Year,
    Genre,
    Director,
    Rating,
}

impl MovieField {
    pub const ALL: [MovieField; 5] = [
        MovieField::Title,
        MovieField::Year,
        MovieField::Genre,
        MovieField::Director,
        MovieField::Rating,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            MovieField::Title => "title",
            MovieField::Year => "year",
            MovieField::Genre => "genre",
            MovieField::Director => "director",
            MovieField::Rating => "rating",
        }
    }
}

impl fmt::Display for MovieField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MovieField {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        MovieField::ALL
            .into_iter()
            .find(|field| field.as_str() == s)
            .ok_or_else(|| CatalogError::UnknownField(s.to_string()))
    }
}

/// An expected attribute value in a search criterion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Text(String),
    Integer(i64),
    Float(f64),
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::Text(value)
    }
}

impl From<i32> for FieldValue {
    fn from(value: i32) -> Self {
        FieldValue::Integer(i64::from(value))
    }
}

impl From<f64> for FieldValue {
    fn from(value: f64) -> Self {
        FieldValue::Float(value)
    }
}

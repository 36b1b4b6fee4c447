use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::catalog::MovieCatalog;
use crate::movie::Movie;

/// Root configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub display: DisplayConfig,
    /// Movies to load at startup
    #[serde(default)]
    pub movies: Vec<Movie>,
    /// Collections to create at startup
    #[serde(default)]
    pub collections: Vec<CollectionSeed>,
}

impl Config {
    /// True when the config carries no seed movies.
    pub fn has_seed(&self) -> bool {
        !self.movies.is_empty()
    }

    /// Build a catalog from the seed movies and collections.
    ///
    /// Entries the catalog rejects (duplicate titles, unknown titles in a
    /// collection) are skipped with a warning.
    pub fn seed_catalog(&self) -> MovieCatalog {
        let mut catalog = MovieCatalog::new();

        for movie in &self.movies {
            if !catalog.add_movie(movie.clone()) {
                warn!("Skipping duplicate seed movie {:?}", movie.title);
            }
        }

        for seed in &self.collections {
            catalog.create_collection(&seed.name);
            for title in &seed.titles {
                if !catalog.add_to_collection(title, &seed.name) {
                    warn!(
                        "Skipping {:?} in collection {:?}: unknown or repeated title",
                        title, seed.name
                    );
                }
            }
        }

        catalog
    }
}

/// Output configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct DisplayConfig {
    /// Decimal places for ratings (shortest form when unset)
    #[serde(default)]
    pub rating_precision: Option<usize>,
    #[serde(default)]
    pub format: OutputFormat,
}

impl DisplayConfig {
    /// Render a movie using the configured rating precision.
    pub fn describe(&self, movie: &Movie) -> String {
        match self.rating_precision {
            Some(precision) => movie.describe_with_precision(precision),
            None => movie.describe(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// A collection to create at startup
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CollectionSeed {
    pub name: String,
    #[serde(default)]
    pub titles: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_empty_config() {
        let config: Config = toml::from_str("").unwrap();
        assert!(config.display.rating_precision.is_none());
        assert_eq!(config.display.format, OutputFormat::Text);
        assert!(!config.has_seed());
        assert!(config.collections.is_empty());
    }

    #[test]
    fn test_deserialize_display() {
        let toml = r#"
[display]
rating_precision = 2
format = "json"
"#;
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.display.rating_precision, Some(2));
        assert_eq!(config.display.format, OutputFormat::Json);
    }

    #[test]
    fn test_deserialize_unknown_format_fails() {
        let toml = r#"
[display]
format = "xml"
"#;
        let result: Result<Config, _> = toml::from_str(toml);
        assert!(result.is_err());
    }

    #[test]
    fn test_deserialize_seed() {
        let toml = r#"
[[movies]]
title = "Inception"
year = 2010
genre = "scifi"
director = "Christopher Nolan"
rating = 8.8

[[movies]]
title = "Heat"
year = 1995
genre = "crime"
director = "Michael Mann"

[[collections]]
name = "Best"
titles = ["Inception"]

[[collections]]
name = "Later"
"#;
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.movies.len(), 2);
        assert_eq!(config.movies[1].rating, 0.0);
        assert_eq!(config.collections[0].titles, vec!["Inception"]);
        assert!(config.collections[1].titles.is_empty());
    }

    #[test]
    fn test_seed_catalog() {
        let config = Config {
            display: DisplayConfig::default(),
            movies: vec![
                Movie::new("A", 2000, "drama", "X"),
                Movie::new("B", 2001, "drama", "X"),
                Movie::new("A", 2002, "comedy", "Y"),
            ],
            collections: vec![CollectionSeed {
                name: "Picks".to_string(),
                titles: vec!["B".to_string(), "Missing".to_string(), "B".to_string()],
            }],
        };

        let catalog = config.seed_catalog();

        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.get("A").unwrap().year, 2000);
        assert_eq!(
            catalog.collection("Picks").unwrap().titles(),
            ["B".to_string()]
        );
    }

    #[test]
    fn test_display_describe_precision() {
        let movie = Movie::new("A", 2000, "drama", "X").with_rating(7.26);
        let shortest = DisplayConfig::default();
        let fixed = DisplayConfig {
            rating_precision: Some(1),
            format: OutputFormat::Text,
        };
        assert!(shortest.describe(&movie).ends_with("Rating: 7.26"));
        assert!(fixed.describe(&movie).ends_with("Rating: 7.3"));
    }
}

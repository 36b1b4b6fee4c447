use std::collections::HashSet;

use super::{types::Config, ConfigError};

/// Largest accepted `display.rating_precision`
pub const MAX_RATING_PRECISION: usize = 6;

/// Validate configuration
/// Currently validates:
/// - Rating precision is at most `MAX_RATING_PRECISION`
/// - Seed movie titles are non-empty and unique
/// - Seed collection names are non-empty
pub fn validate_config(config: &Config) -> Result<(), ConfigError> {
    if let Some(precision) = config.display.rating_precision {
        if precision > MAX_RATING_PRECISION {
            return Err(ConfigError::ValidationError(format!(
                "display.rating_precision cannot exceed {}",
                MAX_RATING_PRECISION
            )));
        }
    }

    let mut titles = HashSet::new();
    for movie in &config.movies {
        if movie.title.is_empty() {
            return Err(ConfigError::ValidationError(
                "movies.title cannot be empty".to_string(),
            ));
        }
        if !titles.insert(movie.title.as_str()) {
            return Err(ConfigError::ValidationError(format!(
                "duplicate movie title: {}",
                movie.title
            )));
        }
    }

    for collection in &config.collections {
        if collection.name.is_empty() {
            return Err(ConfigError::ValidationError(
                "collections.name cannot be empty".to_string(),
            ));
        }
    }

    Ok(())
}

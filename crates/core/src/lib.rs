pub mod catalog;
pub mod config;
pub mod movie;

pub use catalog::{
    CatalogError, CatalogStats, Collection, MovieCatalog, MovieIter, SearchCriteria,
    SharedCatalog,
};
pub use config::{
    load_config, load_config_from_str, validate_config, CollectionSeed, Config, ConfigError,
    DisplayConfig, OutputFormat,
};
pub use movie::{FieldValue, Movie, MovieField};

//! The demonstration run: build a catalog, search it, and print the results.

use std::io::{self, Write};

use anyhow::Result;
use serde_json::json;

use movie_catalog_core::{
    Config, DisplayConfig, FieldValue, Movie, MovieCatalog, OutputFormat, SearchCriteria,
};

/// Collection created by the built-in demo data
pub const DEMO_COLLECTION: &str = "Best movies";

/// Catalog used when the config has no seed movies.
pub fn builtin_catalog() -> MovieCatalog {
    let mut catalog = MovieCatalog::new();
    catalog.add_movie(
        Movie::new("Inception", 2010, "scifi", "Christopher Nolan").with_rating(8.8),
    );
    catalog.add_movie(
        Movie::new("The Shawshank Redemption", 1994, "drama", "Frank Darabont").with_rating(9.3),
    );

    catalog.create_collection(DEMO_COLLECTION);
    catalog.add_to_collection("Inception", DEMO_COLLECTION);
    catalog
}

/// Build the catalog for a run: seed data from the config, or the built-in set.
pub fn build_catalog(config: &Config) -> MovieCatalog {
    if config.has_seed() {
        config.seed_catalog()
    } else {
        builtin_catalog()
    }
}

/// The search the demo runs: 2010 science fiction.
pub fn demo_criteria() -> Result<SearchCriteria> {
    let criteria = SearchCriteria::try_from_pairs([
        ("year", FieldValue::from(2010)),
        ("genre", FieldValue::from("scifi")),
    ])?;
    Ok(criteria)
}

/// Run the demo against `catalog`, writing to `out`.
pub fn run_demo(catalog: &MovieCatalog, display: &DisplayConfig, out: &mut impl Write) -> Result<()> {
    let criteria = demo_criteria()?;
    let results = catalog.search(&criteria);
    tracing::debug!("Search matched {} of {} movies", results.len(), catalog.len());

    match display.format {
        OutputFormat::Text => write_text(catalog, &results, display, out)?,
        OutputFormat::Json => write_json(catalog, &results, out)?,
    }
    Ok(())
}

fn write_text(
    catalog: &MovieCatalog,
    results: &[&Movie],
    display: &DisplayConfig,
    out: &mut impl Write,
) -> io::Result<()> {
    writeln!(out, "Search results:")?;
    for movie in results {
        writeln!(out, "{}", display.describe(movie))?;
    }

    writeln!(out)?;
    writeln!(out, "All movies in the catalog:")?;
    for movie in catalog {
        writeln!(out, "{}", display.describe(movie))?;
    }

    writeln!(out)?;
    writeln!(out, "Collections:")?;
    for collection in catalog.collections() {
        writeln!(out, "{}: {}", collection.name(), collection.titles().join(", "))?;
    }
    Ok(())
}

fn write_json(catalog: &MovieCatalog, results: &[&Movie], out: &mut impl Write) -> Result<()> {
    let collections: Vec<_> = catalog
        .collections()
        .iter()
        .map(|c| json!({ "name": c.name(), "titles": c.titles() }))
        .collect();

    let report = json!({
        "search_results": results,
        "movies": catalog.iter().collect::<Vec<_>>(),
        "collections": collections,
        "stats": catalog.stats(),
    });

    serde_json::to_writer_pretty(&mut *out, &report)?;
    writeln!(out)?;
    Ok(())
}

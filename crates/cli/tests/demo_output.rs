use std::io::Write;
use std::path::Path;
use std::process::{Command, Output};

use tempfile::NamedTempFile;

/// Run the binary with the given config path and extra environment.
fn run_with_config(config_path: &Path, envs: &[(&str, &str)]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_movie-catalog"))
        .env("MOVIE_CATALOG_CONFIG", config_path)
        .env("RUST_LOG", "error") // Quiet logs during tests
        .envs(envs.iter().copied())
        .output()
        .expect("Failed to run movie-catalog")
}

fn write_config(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "{}", contents).unwrap();
    file
}

#[test]
fn test_missing_config_runs_builtin_demo() {
    let output = run_with_config(Path::new("/nonexistent/movie-catalog.toml"), &[]);
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.starts_with(
        "Search results:\nInception (2010) | scifi | Director: Christopher Nolan | Rating: 8.8\n"
    ));
    assert!(stdout.contains("All movies in the catalog:"));
    assert!(stdout.contains(
        "The Shawshank Redemption (1994) | drama | Director: Frank Darabont | Rating: 9.3"
    ));
    assert!(stdout.contains("Best movies: Inception"));
}

#[test]
fn test_seed_config_with_json_output() {
    let config = write_config(
        r#"
[display]
format = "json"

[[movies]]
title = "Arrival"
year = 2016
genre = "scifi"
director = "Denis Villeneuve"
rating = 7.9

[[movies]]
title = "Tron: Legacy"
year = 2010
genre = "scifi"
director = "Joseph Kosinski"

[[collections]]
name = "Watch later"
titles = ["Arrival"]
"#,
    );

    let output = run_with_config(config.path(), &[]);
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["search_results"].as_array().unwrap().len(), 1);
    assert_eq!(value["search_results"][0]["title"], "Tron: Legacy");
    assert_eq!(value["movies"].as_array().unwrap().len(), 2);
    assert_eq!(value["collections"][0]["titles"][0], "Arrival");
}

#[test]
fn test_env_overrides_rating_precision() {
    let config = write_config("[display]\nformat = \"text\"\n");

    let output = run_with_config(
        config.path(),
        &[("MOVIE_CATALOG_DISPLAY__RATING_PRECISION", "2")],
    );
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("Rating: 8.80"));
}

#[test]
fn test_invalid_config_fails() {
    let config = write_config("[display]\nrating_precision = 12\n");

    let output = run_with_config(config.path(), &[]);
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
}

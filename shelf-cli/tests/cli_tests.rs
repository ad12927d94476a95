//! Integration tests for the Shelf CLI

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

const TWO_BOOKS: &str = r#"{
  "library": [
    { "book": { "title": "Uno", "pages": 200, "genre": "Terror", "cover": "uno.jpg",
                "synopsis": "Miedo.", "year": 1990, "ISBN": "A1",
                "author": { "name": "Autora" } } },
    { "book": { "title": "Dos", "pages": 400, "genre": "Fantasía", "cover": "dos.jpg",
                "synopsis": "Magia.", "year": 2001, "ISBN": "A2",
                "author": { "name": "Autor" } } }
  ]
}"#;

/// Write a file into the temp dir
fn write_file(dir: &TempDir, name: &str, content: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).expect("Failed to write test file");
    path
}

fn shelf() -> Command {
    let mut cmd = Command::cargo_bin("shelf").unwrap();
    cmd.env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_help() {
    shelf()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage:"))
        .stdout(predicate::str::contains("list"))
        .stdout(predicate::str::contains("genres"))
        .stdout(predicate::str::contains("show"))
        .stdout(predicate::str::contains("browse"));
}

#[test]
fn test_version() {
    shelf()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("shelf"));
}

#[test]
fn test_list_help() {
    shelf()
        .args(["list", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--genre"))
        .stdout(predicate::str::contains("--max-pages"))
        .stdout(predicate::str::contains("--json"));
}

#[test]
fn test_list_bundled_catalog() {
    shelf()
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("El Señor de los Anillos"))
        .stdout(predicate::str::contains("[Add to Reading List: 978-0618640157]"));
}

#[test]
fn test_list_json_filters() {
    let output = shelf()
        .args(["list", "--genre", "Terror", "--max-pages", "300", "--json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let books: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let titles: Vec<&str> = books
        .as_array()
        .unwrap()
        .iter()
        .map(|b| b["title"].as_str().unwrap())
        .collect();
    assert_eq!(titles, vec!["Frankenstein", "Soy leyenda"]);
}

#[test]
fn test_list_custom_catalog_scenarios() {
    let temp_dir = TempDir::new().unwrap();
    let catalog = write_file(&temp_dir, "books.json", TWO_BOOKS);
    let catalog = catalog.to_str().unwrap();

    let isbns = |args: &[&str]| -> Vec<String> {
        let output = shelf()
            .args(["--catalog", catalog, "list", "--json"])
            .args(args)
            .output()
            .unwrap();
        assert!(output.status.success());
        let books: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
        books
            .as_array()
            .unwrap()
            .iter()
            .map(|b| b["ISBN"].as_str().unwrap().to_string())
            .collect()
    };

    assert_eq!(isbns(&["--genre", "Terror"]), vec!["A1"]);
    assert_eq!(isbns(&["--max-pages", "300"]), vec!["A1"]);
    assert!(isbns(&["--genre", "Fantasía", "--max-pages", "300"]).is_empty());
    assert_eq!(isbns(&["--max-pages", "lots"]), vec!["A1", "A2"]);
}

#[test]
fn test_list_negative_max_pages_matches_nothing() {
    let output = shelf()
        .args(["list", "--max-pages", "-5", "--json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let books: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(books, serde_json::json!([]));
}

#[test]
fn test_list_empty_result() {
    shelf()
        .args(["list", "--genre", "Poesía"])
        .assert()
        .success()
        .stdout(predicate::str::contains("(no books)"));
}

#[test]
fn test_genres_includes_unconfigured_catalog_genres() {
    let temp_dir = TempDir::new().unwrap();
    let catalog = write_file(&temp_dir, "books.json", TWO_BOOKS);
    let config = write_file(&temp_dir, "shelf.json", r#"{ "genres": ["Zombies"] }"#);

    shelf()
        .args([
            "--config",
            config.to_str().unwrap(),
            "--catalog",
            catalog.to_str().unwrap(),
            "genres",
        ])
        .assert()
        .success()
        .stdout("All\nZombies\nTerror\nFantasía\n");
}

#[test]
fn test_genres_json_lists_genre_names_only() {
    let output = shelf().args(["genres", "--json"]).output().unwrap();
    assert!(output.status.success());

    let genres: Vec<String> = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(
        genres,
        vec!["Fantasía", "Ciencia ficción", "Terror", "Zombies"]
    );
}

#[test]
fn test_config_catalog_path() {
    let temp_dir = TempDir::new().unwrap();
    let catalog = write_file(&temp_dir, "books.json", TWO_BOOKS);
    let config = write_file(
        &temp_dir,
        "shelf.json",
        &serde_json::json!({ "catalog": catalog }).to_string(),
    );

    shelf()
        .args(["--config", config.to_str().unwrap(), "show", "A2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Dos"))
        .stdout(predicate::str::contains("Author:   Autor"));
}

#[test]
fn test_invalid_config() {
    let temp_dir = TempDir::new().unwrap();
    let config = write_file(&temp_dir, "shelf.json", r#"{ "colour": "blue" }"#);

    shelf()
        .args(["--config", config.to_str().unwrap(), "genres"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load config"));
}

#[test]
fn test_show_json() {
    let output = shelf()
        .args(["show", "978-0441013593", "--json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let book: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(book["title"], "Dune");
    assert_eq!(book["author"]["name"], "Frank Herbert");
    assert_eq!(book["ISBN"], "978-0441013593");
}

#[test]
fn test_show_unknown_isbn() {
    shelf()
        .args(["show", "000-0000000000"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("000-0000000000"));
}

#[test]
fn test_nonexistent_catalog() {
    shelf()
        .args(["--catalog", "/nonexistent/books.json", "list"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load catalog"));
}

#[test]
fn test_malformed_catalog() {
    let temp_dir = TempDir::new().unwrap();
    let catalog = write_file(&temp_dir, "books.json", r#"{ "library": [ { "book": {} } ] }"#);

    shelf()
        .args(["--catalog", catalog.to_str().unwrap(), "list"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Malformed catalog document"));
}

#[test]
fn test_duplicate_isbn_catalog() {
    let temp_dir = TempDir::new().unwrap();
    let duplicated = TWO_BOOKS.replace("\"A2\"", "\"A1\"");
    let catalog = write_file(&temp_dir, "books.json", &duplicated);

    shelf()
        .args(["--catalog", catalog.to_str().unwrap(), "list"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Duplicate ISBN in catalog: A1"));
}

#[test]
fn test_browse_session() {
    let temp_dir = TempDir::new().unwrap();
    let catalog = write_file(&temp_dir, "books.json", TWO_BOOKS);

    shelf()
        .args(["--catalog", catalog.to_str().unwrap(), "browse"])
        .write_stdin("genre Terror\nadd A1\nadd A1\nreading\nremove A1\nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("2 books loaded"))
        .stdout(predicate::str::contains(
            "== Catalog: 1 of 2 books (genre: Terror, max pages: any) ==",
        ))
        .stdout(predicate::str::contains("== Reading List: 1 books =="))
        .stdout(predicate::str::contains("[Remove from Reading List: A1]"))
        .stdout(predicate::str::contains("== Reading List: 0 books =="));
}

#[test]
fn test_browse_ends_on_eof() {
    shelf()
        .arg("browse")
        .write_stdin("pages 250\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("== Catalog: 3 of 14 books"));
}

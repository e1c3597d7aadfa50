use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn bookgraph_cmd() -> Command {
    Command::new(assert_cmd::cargo::cargo_bin!("bookgraph"))
}

fn setup_test_project() -> TempDir {
    let temp_dir = TempDir::new().unwrap();

    bookgraph_cmd()
        .arg("init")
        .current_dir(temp_dir.path())
        .assert()
        .success();

    temp_dir
}

/// Run a command in the project and parse its stdout as a GraphQL response.
fn run_json(temp_dir: &TempDir, args: &[&str]) -> serde_json::Value {
    let output = bookgraph_cmd()
        .args(args)
        .current_dir(temp_dir.path())
        .assert()
        .success();

    let stdout = String::from_utf8(output.get_output().stdout.clone()).unwrap();
    serde_json::from_str(&stdout).unwrap()
}

// =============================================================================
// Basic CLI
// =============================================================================

#[test]
fn test_help() {
    bookgraph_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("authors and books"));
}

#[test]
fn test_version() {
    bookgraph_cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("bookgraph"));
}

#[test]
fn test_not_initialized_error() {
    let temp_dir = TempDir::new().unwrap();

    bookgraph_cmd()
        .args(["query", "{ books { name } }"])
        .current_dir(temp_dir.path())
        .assert()
        .failure()
        .stderr(
            predicate::str::contains("not initialized")
                .or(predicate::str::contains("Failed to load")),
        );
}

#[test]
fn test_schema_prints_sdl() {
    bookgraph_cmd()
        .arg("schema")
        .assert()
        .success()
        .stdout(predicate::str::contains("type Author"))
        .stdout(predicate::str::contains("type Book"))
        .stdout(predicate::str::contains("addAuthor"))
        .stdout(predicate::str::contains("removeBook"));
}

// =============================================================================
// Initialization
// =============================================================================

#[test]
fn test_init_creates_config() {
    let temp_dir = TempDir::new().unwrap();

    bookgraph_cmd()
        .arg("init")
        .current_dir(temp_dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Initialized"));

    assert!(temp_dir.path().join(".bookgraph.toml").exists());
    assert!(temp_dir.path().join(".bookgraph").exists());
}

#[test]
fn test_init_twice_fails() {
    let temp_dir = setup_test_project();

    bookgraph_cmd()
        .arg("init")
        .current_dir(temp_dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("already initialized"));
}

#[test]
fn test_init_with_options() {
    let temp_dir = TempDir::new().unwrap();

    bookgraph_cmd()
        .args(["init", "--backend", "memory", "--port", "8123"])
        .current_dir(temp_dir.path())
        .assert()
        .success();

    let config = std::fs::read_to_string(temp_dir.path().join(".bookgraph.toml")).unwrap();
    assert!(config.contains("memory"));
    assert!(config.contains("8123"));
}

// =============================================================================
// Queries and mutations
// =============================================================================

#[test]
fn test_author_and_book_round_trip() {
    let temp_dir = setup_test_project();

    let created = run_json(
        &temp_dir,
        &["mutate", r#"addAuthor(name: "Orwell", age: 46) { id name }"#],
    );
    let author_id = created["data"]["addAuthor"]["id"].as_str().unwrap().to_string();
    assert_eq!(created["data"]["addAuthor"]["name"], "Orwell");

    let book = run_json(
        &temp_dir,
        &[
            "mutate",
            &format!(
                r#"addBook(name: "1984", genre: "Dystopia", authorId: "{}") {{ id }}"#,
                author_id
            ),
        ],
    );
    assert!(book["data"]["addBook"]["id"].is_string());

    let result = run_json(
        &temp_dir,
        &[
            "query",
            &format!(r#"{{ author(id: "{}") {{ books {{ name }} }} }}"#, author_id),
        ],
    );
    assert_eq!(
        result["data"]["author"]["books"],
        serde_json::json!([{ "name": "1984" }])
    );

    assert!(temp_dir.path().join(".bookgraph").join("authors.json").exists());
    assert!(temp_dir.path().join(".bookgraph").join("books.json").exists());
}

#[test]
fn test_query_with_variables() {
    let temp_dir = setup_test_project();

    let created = run_json(
        &temp_dir,
        &["mutate", r#"addAuthor(name: "Huxley", age: 69) { id }"#],
    );
    let author_id = created["data"]["addAuthor"]["id"].as_str().unwrap().to_string();

    let result = run_json(
        &temp_dir,
        &[
            "query",
            "query Get($id: ID!) { author(id: $id) { name age } }",
            "--variables",
            &serde_json::json!({ "id": author_id }).to_string(),
        ],
    );
    assert_eq!(result["data"]["author"]["name"], "Huxley");
    assert_eq!(result["data"]["author"]["age"], 69);
}

#[test]
fn test_missing_required_argument_reported() {
    let temp_dir = setup_test_project();

    let result = run_json(&temp_dir, &["mutate", r#"addAuthor(name: "Orwell") { id }"#]);
    assert!(!result["errors"].as_array().unwrap().is_empty());

    let authors = run_json(&temp_dir, &["query", "{ authors { id } }"]);
    assert_eq!(authors["data"]["authors"], serde_json::json!([]));
}

#[test]
fn test_data_path_override() {
    let temp_dir = setup_test_project();

    run_json(
        &temp_dir,
        &[
            "--data-path",
            "elsewhere",
            "mutate",
            r#"addAuthor(name: "Orwell", age: 46) { id }"#,
        ],
    );

    assert!(temp_dir.path().join("elsewhere").join("authors.json").exists());
    assert!(!temp_dir.path().join(".bookgraph").join("authors.json").exists());
}

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn bookql_cmd() -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("bookql"));
    cmd.env_remove("BOOKQL_CONFIG");
    cmd
}

/// Command running in `temp_dir` with an explicit default config, so no
/// `.bookql.yml` further up the tree can leak in.
fn isolated_cmd(temp_dir: &TempDir) -> Command {
    let config_path = temp_dir.path().join("defaults.yml");
    std::fs::write(&config_path, "{}\n").unwrap();

    let mut cmd = bookql_cmd();
    cmd.env("BOOKQL_CONFIG", &config_path)
        .current_dir(temp_dir.path());
    cmd
}

// =============================================================================
// Basic CLI
// =============================================================================

#[test]
fn test_help() {
    bookql_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("GraphQL"));
}

#[test]
fn test_version() {
    bookql_cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("bookql"));
}

// =============================================================================
// Queries
// =============================================================================

#[test]
fn test_query_authors() {
    let temp_dir = TempDir::new().unwrap();

    isolated_cmd(&temp_dir)
        .args(["query", "{ authors { id name } }"])
        .assert()
        .success()
        .stdout(predicate::str::contains("E. Hemingway"))
        .stdout(predicate::str::contains("C. Discens"));
}

#[test]
fn test_query_author_books() {
    let temp_dir = TempDir::new().unwrap();

    isolated_cmd(&temp_dir)
        .args(["query", "{ author(id: 1) { books { name } } }"])
        .assert()
        .success()
        .stdout(predicate::str::contains("A Farewell to Arms"))
        .stdout(predicate::str::contains("Oliver Twist").not());
}

#[test]
fn test_query_missing_book_is_null() {
    let temp_dir = TempDir::new().unwrap();

    isolated_cmd(&temp_dir)
        .args(["query", "{ book(id: 42) { name } }"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"book\": null"))
        .stdout(predicate::str::contains("errors").not());
}

#[test]
fn test_query_with_variables() {
    let temp_dir = TempDir::new().unwrap();

    isolated_cmd(&temp_dir)
        .args([
            "query",
            "query($id: Int) { book(id: $id) { name author { name } } }",
            "--variables",
            r#"{"id": 5}"#,
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Losing My VIrginity"))
        .stdout(predicate::str::contains("R. Branson"));
}

#[test]
fn test_query_invalid_variables() {
    let temp_dir = TempDir::new().unwrap();

    isolated_cmd(&temp_dir)
        .args(["query", "{ books { id } }", "--variables", "{not json"])
        .assert()
        .failure();
}

// =============================================================================
// Mutations
// =============================================================================

#[test]
fn test_mutate_add_author() {
    let temp_dir = TempDir::new().unwrap();

    isolated_cmd(&temp_dir)
        .args(["mutate", r#"addAuthor(name: "Test") { id name }"#])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"id\": 4"))
        .stdout(predicate::str::contains("\"name\": \"Test\""));
}

#[test]
fn test_mutate_add_book_dangling_author() {
    let temp_dir = TempDir::new().unwrap();

    isolated_cmd(&temp_dir)
        .args([
            "mutate",
            r#"addBook(name: "X", authorId: 999) { id author { id } }"#,
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"id\": 9"))
        .stdout(predicate::str::contains("\"author\": null"));
}

#[test]
fn test_mutate_missing_argument_reports_error() {
    let temp_dir = TempDir::new().unwrap();

    isolated_cmd(&temp_dir)
        .args(["mutate", "addAuthor { id }"])
        .assert()
        .success()
        .stdout(predicate::str::contains("errors"))
        .stdout(predicate::str::contains("name"));
}

// =============================================================================
// Schema and configuration
// =============================================================================

#[test]
fn test_schema_prints_sdl() {
    let temp_dir = TempDir::new().unwrap();

    isolated_cmd(&temp_dir)
        .arg("schema")
        .assert()
        .success()
        .stdout(predicate::str::contains("type Book"))
        .stdout(predicate::str::contains("type Author"))
        .stdout(predicate::str::contains("type Mutation"));
}

#[test]
fn test_init_creates_config() {
    let temp_dir = TempDir::new().unwrap();

    isolated_cmd(&temp_dir)
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Initialized"));

    let config = std::fs::read_to_string(temp_dir.path().join(".bookql.yml")).unwrap();
    assert!(config.contains("/graphql"));

    isolated_cmd(&temp_dir)
        .arg("init")
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));
}

#[test]
fn test_unseeded_store_from_config() {
    let temp_dir = TempDir::new().unwrap();
    std::fs::write(temp_dir.path().join(".bookql.yml"), "store:\n  seed: false\n").unwrap();

    bookql_cmd()
        .args(["query", "{ authors { id } books { id } }"])
        .current_dir(temp_dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("\"authors\": []"))
        .stdout(predicate::str::contains("\"books\": []"));
}

#[test]
fn test_explicit_missing_config_fails() {
    let temp_dir = TempDir::new().unwrap();

    bookql_cmd()
        .args(["--config", "missing.yml", "schema"])
        .current_dir(temp_dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load configuration"));
}

#[test]
fn test_mutate_with_declared_variables() {
    let temp_dir = TempDir::new().unwrap();

    isolated_cmd(&temp_dir)
        .args([
            "mutate",
            "($name: String!) { addAuthor(name: $name) { id name } }",
            "--variables",
            r#"{"name": "V"}"#,
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"id\": 4"))
        .stdout(predicate::str::contains("\"name\": \"V\""))
        .stdout(predicate::str::contains("errors").not());
}

#[test]
fn test_mutate_full_operation_with_variables() {
    let temp_dir = TempDir::new().unwrap();

    isolated_cmd(&temp_dir)
        .args([
            "mutate",
            "mutation AddBook($author: Int!) { addBook(name: \"Y\", authorId: $author) { id authorId } }",
            "--variables",
            r#"{"author": 2}"#,
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"id\": 9"))
        .stdout(predicate::str::contains("\"authorId\": 2"));
}

// =============================================================================
// Logging
// =============================================================================

#[test]
fn test_unusable_log_file_fails_cleanly() {
    let temp_dir = TempDir::new().unwrap();
    let blocker = temp_dir.path().join("blocker");
    std::fs::write(&blocker, "not a directory").unwrap();
    let log_file = blocker.join("bookql.log");

    isolated_cmd(&temp_dir)
        .arg("--log-file")
        .arg(&log_file)
        .arg("schema")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Failed to initialize logging"))
        .stderr(predicate::str::contains("panicked").not());
}

#[test]
fn test_log_file_is_written() {
    let temp_dir = TempDir::new().unwrap();
    let log_dir = temp_dir.path().join("logs");

    isolated_cmd(&temp_dir)
        .arg("--log-file")
        .arg(log_dir.join("bookql.log"))
        .args(["mutate", r#"addAuthor(name: "Logged") { id }"#])
        .assert()
        .success();

    let entries: Vec<_> = std::fs::read_dir(&log_dir).unwrap().collect();
    assert!(!entries.is_empty());
}

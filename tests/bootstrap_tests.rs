use rusqlite::Connection;
use rusqlite::types::Value;
use wardstore::Database;
use wardstore::db::bootstrap::{SCHEMA, split_statements};

mod common;
use common::setup_test_db;

#[test]
fn bootstrap_creates_schema_and_default_data() {
    let db_path = setup_test_db("bootstrap_fresh");
    let mut db = Database::open(&db_path);

    let result = db
        .query("SELECT label FROM placement_statuses ORDER BY code")
        .expect("lookup table populated");
    assert_eq!(result.len(), 4);
    assert_eq!(
        result.value(0, "label"),
        Some(&Value::Text("Active; under supervision".to_string()))
    );
    db.close();

    // The created layout is visible to a plain connection as well
    let conn = Connection::open(&db_path).expect("open db");
    let wards: i64 = conn
        .query_row(
            "SELECT count(*) FROM sqlite_master WHERE type = 'table' AND name = 'wards'",
            [],
            |r| r.get(0),
        )
        .expect("catalog");
    assert_eq!(wards, 1);
}

#[test]
fn bootstrap_skipped_on_populated_database() {
    let db_path = setup_test_db("bootstrap_skip");

    let conn = Connection::open(&db_path).expect("open db");
    conn.execute("CREATE TABLE journal (entry TEXT)", [])
        .expect("create table");
    drop(conn);

    // The catalog is not empty, so none of the bundled statements run
    let mut db = Database::open(&db_path);
    let result = db
        .query("SELECT count(*) AS n FROM sqlite_master WHERE name = 'placement_statuses'")
        .expect("catalog query");
    assert_eq!(result.value(0, "n"), Some(&Value::Integer(0)));
}

#[test]
fn split_statements_strips_comments_and_blanks() {
    let script = "-- header\nCREATE TABLE a (x INTEGER);\n\n-- trailing comment\n;;\nINSERT INTO a VALUES (1)";
    let statements = split_statements(script);
    assert_eq!(
        statements,
        ["CREATE TABLE a (x INTEGER)", "INSERT INTO a VALUES (1)"]
    );
}

#[test]
fn split_statements_keeps_semicolons_inside_literals() {
    let script = "INSERT INTO t VALUES ('a;b');\nINSERT INTO t VALUES ('it''s; fine');";
    let statements = split_statements(script);
    assert_eq!(
        statements,
        [
            "INSERT INTO t VALUES ('a;b')",
            "INSERT INTO t VALUES ('it''s; fine')"
        ]
    );
}

#[test]
fn split_statements_ignores_comment_markers_inside_literals() {
    let statements = split_statements("INSERT INTO t VALUES ('a--b');");
    assert_eq!(statements, ["INSERT INTO t VALUES ('a--b')"]);
}

#[test]
fn bundled_schema_splits_into_clean_statements() {
    let statements = split_statements(SCHEMA);
    assert!(statements.len() >= 10);
    assert!(statements.iter().all(|s| !s.is_empty()));
    assert!(statements.iter().all(|s| !s.starts_with("--")));
    assert!(
        statements
            .iter()
            .any(|s| s.contains("'Active; under supervision'"))
    );
}

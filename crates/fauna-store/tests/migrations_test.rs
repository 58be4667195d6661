// Integration tests for the per-layout migration framework

use fauna_core::errors::ExErrorKind;
use fauna_core::Layout;
use fauna_store::migrations::{applied_layout, apply_migrations};
use rusqlite::Connection;

fn setup_test_db() -> Connection {
    Connection::open_in_memory().expect("Failed to create in-memory database")
}

fn get_table_names(conn: &Connection) -> Vec<String> {
    let mut stmt = conn
        .prepare("SELECT name FROM sqlite_master WHERE type = 'table' ORDER BY name")
        .unwrap();
    stmt.query_map([], |row| row.get(0))
        .unwrap()
        .collect::<Result<Vec<String>, _>>()
        .unwrap()
}

#[test]
fn test_single_table_schema() {
    let mut conn = setup_test_db();
    apply_migrations(&mut conn, Layout::SingleTable).unwrap();

    assert_eq!(
        get_table_names(&conn),
        vec!["animal", "schema_version", "sqlite_sequence"]
    );
}

#[test]
fn test_joined_schema() {
    let mut conn = setup_test_db();
    apply_migrations(&mut conn, Layout::Joined).unwrap();

    assert_eq!(
        get_table_names(&conn),
        vec!["animal", "cat", "dog", "schema_version", "sqlite_sequence"]
    );
}

#[test]
fn test_table_per_class_schema_has_no_base_table() {
    let mut conn = setup_test_db();
    apply_migrations(&mut conn, Layout::TablePerClass).unwrap();

    let tables = get_table_names(&conn);
    assert_eq!(tables, vec!["cat", "dog", "id_generators", "schema_version"]);
    assert!(!tables.contains(&"animal".to_string()));

    let next_val: i64 = conn
        .query_row(
            "SELECT next_val FROM id_generators WHERE sequence_name = 'animal'",
            [],
            |row| row.get(0),
        )
        .unwrap();
    assert_eq!(next_val, 1);
}

#[test]
fn test_reapply_is_idempotent() {
    let mut conn = setup_test_db();
    apply_migrations(&mut conn, Layout::TablePerClass).unwrap();
    apply_migrations(&mut conn, Layout::TablePerClass).unwrap();

    let count: i64 = conn
        .query_row("SELECT COUNT(*) FROM schema_version", [], |row| row.get(0))
        .unwrap();
    assert_eq!(count, 1, "Migration must be recorded once");
}

#[test]
fn test_layout_mismatch_is_rejected() {
    let mut conn = setup_test_db();
    apply_migrations(&mut conn, Layout::SingleTable).unwrap();

    let err = apply_migrations(&mut conn, Layout::Joined).unwrap_err();
    assert_eq!(err.kind(), ExErrorKind::LayoutMismatch);
    assert!(err.is_storage_error());
    assert_eq!(
        applied_layout(&conn).unwrap().as_deref(),
        Some("single_table")
    );
}

#[test]
fn test_checksum_tamper_is_detected() {
    let mut conn = setup_test_db();
    apply_migrations(&mut conn, Layout::Joined).unwrap();

    conn.execute("UPDATE schema_version SET checksum = 'deadbeef'", [])
        .unwrap();

    let err = apply_migrations(&mut conn, Layout::Joined).unwrap_err();
    assert_eq!(err.kind(), ExErrorKind::ConstraintViolation);
    assert!(err.message().contains("deadbeef"));
}

// Integration tests for file-backed stores

use fauna_core::errors::ExErrorKind;
use fauna_core::{Cat, Layout};
use fauna_store::{db, strategy_for, StoreConfig};
use tempfile::TempDir;

#[test]
fn test_rows_survive_reopen() {
    let temp_dir = TempDir::new().unwrap();
    let config = StoreConfig::file(temp_dir.path().join("animals.db"), Layout::TablePerClass);
    let strategy = strategy_for(Layout::TablePerClass);

    {
        let conn = db::connect(&config).unwrap();
        strategy.insert(&conn, &Cat::named("Garfield").into()).unwrap();
    }

    let conn = db::connect(&config).unwrap();
    let rows = strategy.select_all(&conn).unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].name.as_deref(), Some("Garfield"));

    // The shared generator continues where it left off
    let next = strategy.insert(&conn, &Cat::named("Tom").into()).unwrap();
    assert_eq!(next, 2);
}

#[test]
fn test_file_uses_wal_journal() {
    let temp_dir = TempDir::new().unwrap();
    let config = StoreConfig::file(temp_dir.path().join("animals.db"), Layout::Joined);
    let conn = db::connect(&config).unwrap();

    let mode: String = conn
        .query_row("PRAGMA journal_mode", [], |row| row.get(0))
        .unwrap();
    assert_eq!(mode, "wal");
}

#[test]
fn test_wal_can_be_disabled() {
    let temp_dir = TempDir::new().unwrap();
    let config =
        StoreConfig::file(temp_dir.path().join("animals.db"), Layout::Joined).with_wal(false);
    let conn = db::connect(&config).unwrap();

    let mode: String = conn
        .query_row("PRAGMA journal_mode", [], |row| row.get(0))
        .unwrap();
    assert_eq!(mode, "delete");
}

#[test]
fn test_reopen_with_other_layout_fails() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("animals.db");
    db::connect(&StoreConfig::file(&path, Layout::Joined)).unwrap();

    let err = db::connect(&StoreConfig::file(&path, Layout::TablePerClass)).unwrap_err();
    assert_eq!(err.kind(), ExErrorKind::LayoutMismatch);
}

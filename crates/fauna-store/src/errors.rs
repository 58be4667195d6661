//! Error handling for fauna-store
//!
//! Wraps the fauna-core ExError facility with store-specific helpers

use fauna_core::errors::{ExError, ExErrorKind};
use fauna_core::Layout;

/// Result type alias using ExError
pub type Result<T> = std::result::Result<T, ExError>;

/// Create a migration error
pub fn migration_error(migration_id: &str, reason: &str) -> ExError {
    ExError::new(ExErrorKind::Storage)
        .with_op("migration")
        .with_message(format!("Migration {} failed: {}", migration_id, reason))
}

/// Create a checksum mismatch error
pub fn checksum_mismatch(migration_id: &str, expected: &str, actual: &str) -> ExError {
    ExError::new(ExErrorKind::ConstraintViolation)
        .with_op("migration_checksum")
        .with_message(format!(
            "Checksum mismatch for migration {}: expected {}, got {}",
            migration_id, expected, actual
        ))
}

/// Create a layout mismatch error
pub fn layout_mismatch(expected: Layout, found: &str) -> ExError {
    fauna_core::FaunaError::LayoutMismatch {
        expected,
        found: found.to_string(),
    }
    .into()
}

/// Create a store error from rusqlite::Error
///
/// Constraint failures (keys, uniqueness, `RAISE(ABORT)` triggers) keep
/// their own kind; everything else is a generic storage failure.
pub fn from_rusqlite(err: rusqlite::Error) -> ExError {
    let kind = match &err {
        rusqlite::Error::SqliteFailure(e, _)
            if e.code == rusqlite::ErrorCode::ConstraintViolation =>
        {
            ExErrorKind::ConstraintViolation
        }
        _ => ExErrorKind::Storage,
    };
    ExError::new(kind)
        .with_op("sqlite")
        .with_message(err.to_string())
}

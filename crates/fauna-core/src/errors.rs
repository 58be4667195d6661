use crate::layout::Layout;
use crate::model::{AnimalId, Species};
use thiserror::Error;

/// Result type alias using FaunaError
pub type Result<T> = std::result::Result<T, FaunaError>;

// ========== Error Facility ==========

/// Canonical error kind taxonomy
///
/// Each kind maps to a stable error code that can be used for programmatic
/// error handling, testing and process-level reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExErrorKind {
    /// An entity is missing a field required before persisting
    Validation,
    /// A stored discriminator or class marker names no concrete subtype
    Decode,
    /// Connection, read or write failure at the record store boundary
    Storage,
    /// A write was rejected by a key or uniqueness constraint
    ConstraintViolation,
    /// The database was migrated for a different physical layout
    LayoutMismatch,
    Internal,
}

impl ExErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            ExErrorKind::Validation => "ERR_VALIDATION",
            ExErrorKind::Decode => "ERR_DECODE",
            ExErrorKind::Storage => "ERR_STORAGE",
            ExErrorKind::ConstraintViolation => "ERR_CONSTRAINT_VIOLATION",
            ExErrorKind::LayoutMismatch => "ERR_LAYOUT_MISMATCH",
            ExErrorKind::Internal => "ERR_INTERNAL",
        }
    }

    /// True for every failure raised at the record store boundary
    pub fn is_storage_error(&self) -> bool {
        matches!(
            self,
            ExErrorKind::Storage | ExErrorKind::ConstraintViolation | ExErrorKind::LayoutMismatch
        )
    }
}

/// Canonical structured error type
///
/// Carries a classification for programmatic handling plus context for
/// debugging. Built with the `with_*` methods.
#[derive(Debug, Clone)]
pub struct ExError {
    kind: ExErrorKind,
    op: Option<String>,
    entity_id: Option<String>,
    message: String,
    source: Option<Box<ExError>>,
}

impl ExError {
    /// Create a new error with the specified kind
    pub fn new(kind: ExErrorKind) -> Self {
        Self {
            kind,
            op: None,
            entity_id: None,
            message: String::new(),
            source: None,
        }
    }

    /// Add operation context
    pub fn with_op(mut self, op: impl Into<String>) -> Self {
        self.op = Some(op.into());
        self
    }

    /// Add entity ID context
    pub fn with_entity_id(mut self, id: impl Into<String>) -> Self {
        self.entity_id = Some(id.into());
        self
    }

    /// Add custom message
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Add source error
    pub fn with_source(mut self, source: ExError) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    pub fn kind(&self) -> ExErrorKind {
        self.kind
    }

    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    pub fn is_storage_error(&self) -> bool {
        self.kind.is_storage_error()
    }

    pub fn op(&self) -> Option<&str> {
        self.op.as_deref()
    }

    pub fn entity_id(&self) -> Option<&str> {
        self.entity_id.as_deref()
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn source_error(&self) -> Option<&ExError> {
        self.source.as_deref()
    }
}

impl std::fmt::Display for ExError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.code())?;
        if let Some(op) = &self.op {
            write!(f, " in operation '{}'", op)?;
        }
        if !self.message.is_empty() {
            write!(f, ": {}", self.message)?;
        }
        if let Some(entity_id) = &self.entity_id {
            write!(f, " (entity_id: {})", entity_id)?;
        }
        if let Some(source) = &self.source {
            write!(f, " caused by {}", source)?;
        }
        Ok(())
    }
}

impl std::error::Error for ExError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_deref()
            .map(|e| e as &(dyn std::error::Error + 'static))
    }
}

// ========== End Error Facility ==========

/// Domain error taxonomy for the animal hierarchy
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FaunaError {
    /// Name was never set before persisting
    #[error("Cannot persist {species}: name is not set")]
    MissingName { species: Species },

    /// Single-table discriminator value names no concrete subtype
    #[error("Unknown discriminator value: {value:?}")]
    UnknownDiscriminator { value: String },

    /// Joined or table-per-class marker names no concrete subtype
    #[error("Unknown class marker: {marker}")]
    UnknownClassMarker { marker: i64 },

    /// Layout name could not be parsed
    #[error("Unknown layout: {value:?} (expected single_table, joined or table_per_class)")]
    UnknownLayout { value: String },

    /// An explicit id is already used by another subtype table
    #[error("Identifier {id} is already used in table {table}")]
    IdCollision { id: AnimalId, table: String },

    /// The database schema belongs to another layout
    #[error("Database is migrated for layout {found}, not {expected}")]
    LayoutMismatch { expected: Layout, found: String },
}

impl From<FaunaError> for ExError {
    fn from(err: FaunaError) -> Self {
        match err {
            FaunaError::MissingName { species } => ExError::new(ExErrorKind::Validation)
                .with_op("validate")
                .with_message(format!("{} name must be set before saving", species)),

            FaunaError::UnknownDiscriminator { value } => ExError::new(ExErrorKind::Decode)
                .with_op("decode_row")
                .with_message(format!("Unknown discriminator value {:?}", value)),

            FaunaError::UnknownClassMarker { marker } => ExError::new(ExErrorKind::Decode)
                .with_op("decode_row")
                .with_message(format!("Unknown class marker {}", marker)),

            FaunaError::UnknownLayout { value } => ExError::new(ExErrorKind::Validation)
                .with_op("parse_layout")
                .with_message(format!("Unknown layout {:?}", value)),

            FaunaError::IdCollision { id, table } => {
                ExError::new(ExErrorKind::ConstraintViolation)
                    .with_op("insert")
                    .with_entity_id(id.to_string())
                    .with_message(format!("Identifier already used in table {}", table))
            }

            FaunaError::LayoutMismatch { expected, found } => {
                ExError::new(ExErrorKind::LayoutMismatch)
                    .with_op("migration")
                    .with_message(format!(
                        "Database is migrated for layout {}, not {}",
                        found, expected
                    ))
            }
        }
    }
}

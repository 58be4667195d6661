//! Store configuration

use fauna_core::Layout;
use std::path::{Path, PathBuf};

/// Where the database lives
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DatabaseLocation {
    /// Fresh database discarded when the connection closes
    InMemory,
    File(PathBuf),
}

/// Connection settings for one record store
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    pub location: DatabaseLocation,
    pub layout: Layout,
    /// Enforce the joined layout's subtype-to-base references
    pub foreign_keys: bool,
    /// Use write-ahead logging (file databases only)
    pub wal: bool,
}

impl StoreConfig {
    pub fn in_memory(layout: Layout) -> Self {
        Self {
            location: DatabaseLocation::InMemory,
            layout,
            foreign_keys: true,
            wal: false,
        }
    }

    pub fn file<P: AsRef<Path>>(path: P, layout: Layout) -> Self {
        Self {
            location: DatabaseLocation::File(path.as_ref().to_path_buf()),
            layout,
            foreign_keys: true,
            wal: true,
        }
    }

    /// `None` selects an in-memory database
    pub fn from_path(path: Option<PathBuf>, layout: Layout) -> Self {
        match path {
            Some(path) => Self::file(path, layout),
            None => Self::in_memory(layout),
        }
    }

    pub fn with_wal(mut self, wal: bool) -> Self {
        self.wal = wal;
        self
    }

    pub fn with_foreign_keys(mut self, foreign_keys: bool) -> Self {
        self.foreign_keys = foreign_keys;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_path_selects_location() {
        let mem = StoreConfig::from_path(None, Layout::Joined);
        assert_eq!(mem.location, DatabaseLocation::InMemory);
        assert!(!mem.wal);

        let file = StoreConfig::from_path(Some(PathBuf::from("zoo.db")), Layout::Joined);
        assert_eq!(file.location, DatabaseLocation::File(PathBuf::from("zoo.db")));
        assert!(file.wal);
    }
}

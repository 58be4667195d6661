//! Embedded SQL migrations
//!
//! Migrations are embedded at compile time using include_str!

use fauna_core::Layout;

/// Migration metadata
pub struct Migration {
    pub id: &'static str,
    pub sql: &'static str,
}

/// Get the migrations for one layout, in order
pub fn get_migrations(layout: Layout) -> Vec<Migration> {
    match layout {
        Layout::SingleTable => vec![Migration {
            id: "001_single_table_schema",
            sql: include_str!("../../migrations/single_table/001_schema.sql"),
        }],
        Layout::Joined => vec![Migration {
            id: "001_joined_schema",
            sql: include_str!("../../migrations/joined/001_schema.sql"),
        }],
        Layout::TablePerClass => vec![Migration {
            id: "001_table_per_class_schema",
            sql: include_str!("../../migrations/table_per_class/001_schema.sql"),
        }],
    }
}

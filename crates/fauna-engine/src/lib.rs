//! Fauna Engine - entity access over the record store
//!
//! - [`accessor::EntityAccessor`] saves and queries typed animals through the
//!   active mapping strategy
//! - [`session::Session`] owns the connection and scopes work to
//!   commit-or-rollback transactions
//! - [`demo::run_demo`] is the scripted persist/query sequence run by the
//!   entry points

pub mod accessor;
pub mod demo;
pub mod session;

pub use accessor::EntityAccessor;
pub use demo::{run_demo, DemoReport};
pub use session::{Session, UnitOfWork};

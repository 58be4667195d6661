//! Structured logging facility for Fauna
//!
//! This module provides:
//! - Single initialization point via `init(profile)`
//! - Lifecycle macros (`log_op_start!`, `log_op_end!`, `log_op_error!`)
//! - Test capture mode for deterministic assertions
//!
//! Library crates only emit `tracing` events; installing a subscriber is
//! left to the process entry point.
//!
//! # Usage
//!
//! ```rust
//! use fauna_core::logging_facility::{init, Profile};
//!
//! init(Profile::Development);
//! ```

pub mod init;
pub mod macros;
pub mod test_capture;

pub use init::{init, Profile};
pub use test_capture::{init_test_capture, CapturedEvent, TestCapture};

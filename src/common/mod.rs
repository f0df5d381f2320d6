//! Common utilities and shared functionality.
//!
//! # Utilities
//!
//! - Logging setup ([`common::setup_logging`])
//! - Cooperative shutdown waiting ([`common::shutdown_waiting`])
//!
//! # Data Structures
//!
//! - `CustomError` - Startup error carrying a message

/// Common data structures.
pub mod structs;

/// Core utility functions.
#[allow(clippy::module_inception)]
pub mod common;

/// Implementation blocks for common types.
pub mod impls;

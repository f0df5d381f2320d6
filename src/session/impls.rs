//! Implementation blocks for the session protocol.

/// Operation name parsing and per-operation status codes.
pub mod operation;

/// Request argument reading and registry dispatch.
pub mod request;

/// Response encoding.
pub mod response;

/// State transitions.
pub mod session_state;

/// Session driver.
pub mod session;

//! Enumerations for the session protocol.

/// The eight operations understood by the directory.
pub mod operation;

/// A fully read request with its arguments.
pub mod request;

/// The response to write back.
pub mod response;

/// Session state machine states.
pub mod session_state;

/// Errors that abort a session without a response.
pub mod session_error;

/// Errors that are answered with a failure status.
pub mod dispatch_error;

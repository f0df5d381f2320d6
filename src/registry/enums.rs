//! Enumerations for registry operations.

/// Tagged outcome of a failed registry operation.
///
/// The numeric status codes sent to clients are derived from these variants
/// per operation, at the session layer.
pub mod registry_error;

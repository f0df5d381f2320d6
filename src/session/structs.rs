//! Session data structures.

/// Per-connection protocol state machine.
pub mod session;

//! Session protocol: one request, one response, one connection.
//!
//! A [`structs::session::Session`] owns an accepted stream and walks it through
//! a fixed sequence of states:
//!
//! ```text
//! AwaitOperation -> AwaitUsername -> Dispatch -> Responding -> Closed
//!        \________________\______________\_________________/
//!                 framing failure or unknown operation
//! ```
//!
//! # Requests
//!
//! Every request starts with the operation name and the caller's username,
//! followed by operation-specific tokens:
//!
//! | Operation      | Extra tokens            |
//! |----------------|-------------------------|
//! | `REGISTER`     |                         |
//! | `UNREGISTER`   |                         |
//! | `CONNECT`      | port                    |
//! | `DISCONNECT`   |                         |
//! | `PUBLISH`      | filename, description   |
//! | `DELETE`       | filename                |
//! | `LIST USERS`   |                         |
//! | `LIST CONTENT` | target username         |
//!
//! # Responses
//!
//! A single status byte, followed for a successful listing by a count token
//! and the listed tokens. Status values are per operation; see
//! [`structs::session::Session`] and `Operation::status_code`.
//!
//! All request tokens are read before the registry is touched, and listings
//! are copied out of the registry before anything is written back, so no
//! lock is ever held across socket I/O.

/// Operation, request, response, state and error enumerations.
pub mod enums;

/// Implementation blocks for the session protocol.
pub mod impls;

/// Session data structure.
pub mod structs;

//! TCP front end of the directory server.
//!
//! # Architecture
//!
//! ```text
//!  acceptor thread                 worker threads (N)
//!  ---------------                 ------------------
//!  accept() ──try_send──▶ bounded queue ──recv──▶ Session::run()
//!     │                      (queue_size)
//!     └─ WouldBlock: wait on the shutdown channel for accept_poll_interval
//! ```
//!
//! - The listener is built with `socket2` and switched to non-blocking mode, so
//!   the acceptor notices shutdown without needing one more connection.
//! - Accepted streams go back to blocking mode before they are queued; sessions
//!   have no read timeout.
//! - A full queue closes the new connection immediately, without a status byte.
//! - On shutdown the queue is closed, workers drain what is already queued,
//!   and the acceptor waits at most `shutdown_grace_period` for them.

/// Server and worker pool structures.
pub mod structs;

/// Implementation blocks for the acceptor and the worker pool.
pub mod impls;

/// Service entry point spawning the acceptor thread.
#[allow(clippy::module_inception)]
pub mod server;

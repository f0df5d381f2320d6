//! Real-time statistics for the directory server.
//!
//! Counters are plain atomics shared between the registry, the acceptor and the
//! session workers, so updating them never takes the registry lock.
//!
//! # Counters
//!
//! - Registry shape: registered users, connected users, published files
//! - Connections: handled and rejected (worker queue full)
//! - Requests: answered with OK, answered with a failure status
//! - Aborted sessions: framing errors, unknown operations
//!
//! # Example
//!
//! ```rust
//! use peer_directory::registry::structs::registry::Registry;
//! use peer_directory::stats::enums::stats_event::StatsEvent;
//!
//! let registry = Registry::new();
//! registry.update_stats(StatsEvent::ConnectionsHandled, 1);
//! assert_eq!(registry.get_stats().connections_handled, 1);
//! ```

/// Statistics event enumeration.
pub mod enums;

/// Implementation blocks for statistics operations.
pub mod impls;

/// Statistics data structures (atomic counters and snapshots).
pub mod structs;

//! In-memory registry of peers and their published files.
//!
//! The registry is the only shared state of the directory server. It maps a
//! username to a [`structs::user_record::UserRecord`] holding the peer's
//! presence (address, port, connected flag) and its
//! [`structs::file_catalog::FileCatalog`].
//!
//! # Locking
//!
//! - One process-wide `parking_lot::Mutex` guards the membership map and the
//!   presence fields of every record. Every operation takes it for its full
//!   duration, which linearizes all registry operations.
//! - Each record carries its own catalog mutex. It is only ever acquired while
//!   the registry lock is held and always released first, so the lock order is
//!   strictly registry-then-user.
//! - No reference into the map escapes a locked section: lookups and listings
//!   return owned copies ([`structs::user_entry_item::UserEntryItem`],
//!   [`structs::connected_user::ConnectedUser`], filename vectors).
//!
//! # Example
//!
//! ```rust
//! use std::net::{IpAddr, Ipv4Addr};
//! use peer_directory::registry::structs::registry::Registry;
//!
//! let registry = Registry::new();
//! registry.register("alice").unwrap();
//! registry.connect("alice", IpAddr::V4(Ipv4Addr::LOCALHOST), 5000).unwrap();
//! registry.publish("alice", "a.txt", "notes").unwrap();
//!
//! assert_eq!(registry.snapshot_connected().len(), 1);
//! ```

/// Registry outcome enumeration.
pub mod enums;

/// Implementation blocks for registry structs.
pub mod impls;

/// Registry data structures.
pub mod structs;

/// Type aliases for the registry collections.
pub mod types;

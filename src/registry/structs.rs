//! Data structures for the peer registry.

/// The registry itself: membership map, sequence counter and statistics.
pub mod registry;

/// One registered peer with its presence and catalog.
pub mod user_record;

/// One published file.
pub mod file_record;

/// Ordered per-user collection of published files.
pub mod file_catalog;

/// Owned copy of a user record, returned by lookups.
pub mod user_entry_item;

/// Owned copy of a connected peer's address, returned by listings.
pub mod connected_user;

//! Implementation blocks for registry data structures.

/// Registry construction, membership and lookup.
pub mod registry;

/// Registry presence operations (connect, disconnect, connected listings).
pub mod registry_presence;

/// Registry catalog operations (publish, delete, content listings).
pub mod registry_catalog;

/// UserRecord construction and snapshots.
pub mod user_record;

/// FileCatalog publish/delete/list operations.
pub mod file_catalog;

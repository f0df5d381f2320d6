//! Type aliases for registry collections.

/// `HashMap` using the `ahash` hasher.
pub mod ahash_map;

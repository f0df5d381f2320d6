//! Statistics enumerations.

/// Counter selector for `Registry::update_stats`.
pub mod stats_event;

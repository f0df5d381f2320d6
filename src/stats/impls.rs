//! Implementation blocks for statistics.

/// StatsAtomics construction and counter selection.
pub mod stats_atomics;

/// Registry statistics accessors.
pub mod registry;

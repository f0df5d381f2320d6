use std::sync::Arc;
use std::sync::atomic::AtomicU64;
use parking_lot::Mutex;
use crate::registry::structs::user_record::UserRecord;
use crate::registry::types::ahash_map::AHashMap;
use crate::stats::structs::stats_atomics::StatsAtomics;

/// The authoritative set of registered peers.
///
/// See the [module documentation](crate::registry) for the locking rules.
#[derive(Debug)]
pub struct Registry {
    /// Membership map keyed by username. This is the registry lock.
    pub users: Mutex<AHashMap<String, UserRecord>>,

    /// Next registration sequence number, used to list users in registration order.
    pub sequence: AtomicU64,

    /// Activity counters shared with the server and the console reporter.
    pub stats: Arc<StatsAtomics>,
}

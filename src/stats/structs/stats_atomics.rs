use std::sync::atomic::AtomicI64;

#[derive(Debug, Default)]
pub struct StatsAtomics {
    /// Unix timestamp of server start.
    pub started: AtomicI64,
    pub users: AtomicI64,
    pub users_connected: AtomicI64,
    pub files: AtomicI64,
    pub connections_handled: AtomicI64,
    pub connections_rejected: AtomicI64,
    pub requests_ok: AtomicI64,
    pub requests_failed: AtomicI64,
    pub framing_errors: AtomicI64,
    pub unknown_operations: AtomicI64,
}

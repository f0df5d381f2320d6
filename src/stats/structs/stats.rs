use serde::{Deserialize, Serialize};

/// Plain copy of every counter at one point in time.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Stats {
    pub started: i64,
    pub users: i64,
    pub users_connected: i64,
    pub files: i64,
    pub connections_handled: i64,
    pub connections_rejected: i64,
    pub requests_ok: i64,
    pub requests_failed: i64,
    pub framing_errors: i64,
    pub unknown_operations: i64,
}

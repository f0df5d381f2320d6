use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct ServerConfig {
    /// IP address only; the port comes from the command line.
    pub bind_address: String,
    pub workers: usize,
    pub queue_size: usize,
    pub backlog: i32,
    pub reuse_address: bool,
    /// Milliseconds the acceptor waits for a shutdown signal between accepts.
    pub accept_poll_interval: u64,
    /// Seconds to wait for running sessions once shutdown starts.
    pub shutdown_grace_period: u64,
}

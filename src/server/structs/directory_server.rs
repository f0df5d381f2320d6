use std::net::TcpListener;
use std::sync::Arc;
use std::time::Duration;
use crate::registry::structs::registry::Registry;

#[derive(Debug)]
pub struct DirectoryServer {
    pub(crate) listener: TcpListener,
    pub(crate) registry: Arc<Registry>,
    pub(crate) workers: usize,
    pub(crate) queue_size: usize,
    pub(crate) accept_poll_interval: Duration,
    pub(crate) shutdown_grace_period: Duration,
}

/// Listening socket plus acceptor settings.
pub mod directory_server;

/// Fixed set of session threads fed by a bounded queue.
pub mod worker_pool;

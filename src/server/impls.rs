pub mod directory_server;
pub mod worker_pool;

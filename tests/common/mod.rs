#![allow(dead_code)]
use rand::RngExt;
use std::io::{ErrorKind, Read, Write};
use std::net::{Shutdown, SocketAddr, TcpStream};
use std::sync::Arc;
use std::thread::JoinHandle;
use crossbeam::channel::Sender;
use tempfile::TempDir;
use peer_directory::config::structs::configuration::Configuration;
use peer_directory::config::structs::server_config::ServerConfig;
use peer_directory::registry::structs::registry::Registry;
use peer_directory::server::server::directory_service;

pub type TestRegistry = Arc<Registry>;

pub struct TestServer {
    pub registry: TestRegistry,
    pub address: SocketAddr,
    pub shutdown: Option<Sender<()>>,
    pub handle: Option<JoinHandle<std::io::Result<bool>>>,
}

impl TestServer {
    /// Drops the shutdown sender and waits for the acceptor to return.
    pub fn stop(&mut self) -> bool {
        drop(self.shutdown.take());
        match self.handle.take() {
            Some(handle) => handle.join().expect("acceptor panicked").expect("acceptor failed"),
            None => true,
        }
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        if self.handle.is_some() {
            self.stop();
        }
    }
}

pub fn create_test_config() -> Configuration {
    let mut config = Configuration::init();
    config.log_console_interval = 0;
    config.deadlock_check_interval = 0;
    config.server = ServerConfig {
        bind_address: String::from("127.0.0.1"),
        workers: 4,
        queue_size: 64,
        backlog: 64,
        reuse_address: true,
        accept_poll_interval: 10,
        shutdown_grace_period: 2,
    };
    config
}

pub fn create_test_registry() -> TestRegistry {
    Arc::new(Registry::new())
}

pub fn start_test_server() -> TestServer {
    let config = create_test_config();
    let registry = create_test_registry();
    let (shutdown_sender, shutdown) = crossbeam::channel::bounded::<()>(0);
    let bind_address = config.server.socket_address(0).unwrap();
    let (address, handle) = directory_service(registry.clone(), bind_address, &config.server, shutdown)
        .expect("Failed to start directory server");
    TestServer {
        registry,
        address,
        shutdown: Some(shutdown_sender),
        handle: Some(handle),
    }
}

pub fn create_temp_dir() -> TempDir {
    tempfile::tempdir().expect("Failed to create temp directory")
}

pub fn random_username() -> String {
    let mut rng = rand::rng();
    format!("peer-{:016x}", rng.random::<u64>())
}

pub fn encode_tokens(tokens: &[&str]) -> Vec<u8> {
    let mut wire = Vec::new();
    for token in tokens {
        wire.extend_from_slice(token.as_bytes());
        wire.push(0);
    }
    wire
}

/// Sends raw bytes on a fresh connection and returns everything the server wrote.
pub fn send_raw(address: SocketAddr, wire: &[u8]) -> Vec<u8> {
    let mut stream = TcpStream::connect(address).expect("Failed to connect");
    stream.write_all(wire).unwrap();
    let _ = stream.shutdown(Shutdown::Write);
    let mut response = Vec::new();
    // A request the server rejects early may leave unread bytes behind, which
    // turns its close into a reset.
    match stream.read_to_end(&mut response) {
        Ok(_) => {}
        Err(error) if error.kind() == ErrorKind::ConnectionReset => {}
        Err(error) => panic!("Failed to read response: {error}"),
    }
    response
}

/// Sends one request and splits the response into its status and tokens.
pub fn send_request(address: SocketAddr, tokens: &[&str]) -> (u8, Vec<String>) {
    let response = send_raw(address, &encode_tokens(tokens));
    assert!(!response.is_empty(), "Expected a status byte for {tokens:?}");
    let payload = &response[1..];
    let mut parts: Vec<String> = payload
        .split(|byte| *byte == 0)
        .map(|token| String::from_utf8(token.to_vec()).unwrap())
        .collect();
    // Every token ends with a terminator, so the split leaves one empty tail.
    parts.pop();
    (response[0], parts)
}

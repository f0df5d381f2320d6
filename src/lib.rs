//! # Peer Directory
//!
//! A small, concurrent directory server for peer-to-peer file sharing.
//!
//! ## Overview
//!
//! Peers register a username, announce the address and port where they serve
//! files, publish filenames with a short description, and ask the server who
//! is online and what a given peer offers. File transfers happen directly
//! between peers; the server only keeps the directory, in memory.
//!
//! Every TCP connection carries exactly one request and one response, framed
//! as zero-terminated tokens.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use std::net::SocketAddr;
//! use std::sync::Arc;
//! use peer_directory::config::structs::configuration::Configuration;
//! use peer_directory::registry::structs::registry::Registry;
//! use peer_directory::server::server::directory_service;
//!
//! let config = Configuration::init();
//! let registry = Arc::new(Registry::new());
//! let (shutdown_sender, shutdown) = crossbeam::channel::bounded::<()>(0);
//! let bind_address: SocketAddr = "127.0.0.1:4000".parse().unwrap();
//! let (_, handle) = directory_service(registry, bind_address, &config.server, shutdown).unwrap();
//!
//! // Dropping the sender stops the acceptor and drains the workers.
//! drop(shutdown_sender);
//! handle.join().unwrap().unwrap();
//! ```
//!
//! ## Modules
//!
//! - [`codec`] - Zero-terminated token framing
//! - [`common`] - Logging setup, shutdown helpers and startup errors
//! - [`config`] - Configuration management and TOML parsing
//! - [`registry`] - Users, presence and published files
//! - [`server`] - Listener, acceptor loop and worker pool
//! - [`session`] - Per-connection request/response state machine
//! - [`stats`] - Atomic counters for the console report
//! - [`structs`] - CLI argument parsing

/// Token framing for the wire protocol.
pub mod codec;

/// Common utilities and shared functionality.
///
/// Contains logging setup, shutdown signal helpers and the startup error type.
pub mod common;

/// Configuration management module.
///
/// Handles loading, parsing, and validating configuration from `config.toml`.
pub mod config;

/// In-memory registry of users and their file catalogs.
pub mod registry;

/// TCP listener, acceptor and session worker pool.
pub mod server;

/// One-request session protocol.
pub mod session;

/// Statistics tracking module.
///
/// Counts registry size, connection outcomes and request results.
pub mod stats;

/// CLI argument parsing.
pub mod structs;

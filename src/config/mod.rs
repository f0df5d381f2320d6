//! Configuration management module.
//!
//! Loads and validates `config.toml`. The file is optional: when it is absent
//! the built-in defaults from [`structs::configuration::Configuration::init`]
//! are used, but a file that exists and cannot be parsed, or that fails
//! validation, aborts startup.
//!
//! # Configuration Structure
//!
//! - **log_level**: `off`, `trace`, `debug`, `info`, `warn` or `error`
//! - **log_console_interval**: seconds between `[STATS]` lines, `0` disables
//! - **deadlock_check_interval**: seconds between deadlock detector runs, `0` disables
//! - **server**: listener and worker pool settings
//!
//! The listening port is never read from the file; it always comes from the
//! `-p` command line flag.
//!
//! # Example
//!
//! ```rust
//! use peer_directory::config::structs::configuration::Configuration;
//!
//! let config = Configuration::load(b"log_level = \"debug\"\n[server]\nworkers = 4\n").unwrap();
//! assert_eq!(config.log_level, "debug");
//! assert_eq!(config.server.workers, 4);
//! assert!(config.validate().is_ok());
//! ```

/// Configuration error enumeration.
pub mod enums;

/// Configuration data structures.
pub mod structs;

/// Implementation blocks for configuration loading/saving.
pub mod impls;

use std::net::{IpAddr, SocketAddr};
use std::thread::available_parallelism;
use std::time::Duration;
use crate::config::enums::configuration_error::ConfigurationError;
use crate::config::structs::server_config::ServerConfig;

impl Default for ServerConfig {
    fn default() -> Self {
        ServerConfig {
            bind_address: String::from("0.0.0.0"),
            workers: available_parallelism().map(|threads| threads.get() * 2).unwrap_or(8),
            queue_size: 1024,
            backlog: 128,
            reuse_address: true,
            accept_poll_interval: 100,
            shutdown_grace_period: 5,
        }
    }
}

impl ServerConfig {
    pub fn socket_address(&self, port: u16) -> Result<SocketAddr, ConfigurationError>
    {
        let ip: IpAddr = self.bind_address.parse().map_err(|_| {
            ConfigurationError::ValidationError(format!("[server] bind_address '{}' is not an IP address", self.bind_address))
        })?;
        Ok(SocketAddr::new(ip, port))
    }

    pub fn accept_poll_interval(&self) -> Duration
    {
        Duration::from_millis(self.accept_poll_interval)
    }

    pub fn shutdown_grace_period(&self) -> Duration
    {
        Duration::from_secs(self.shutdown_grace_period)
    }

    pub fn validate(&self) -> Result<(), ConfigurationError>
    {
        let check_map = [
            ("[server] workers", self.workers as u64),
            ("[server] queue_size", self.queue_size as u64),
            ("[server] accept_poll_interval", self.accept_poll_interval),
        ];
        for (name, value) in check_map {
            if value == 0 {
                return Err(ConfigurationError::ValidationError(format!("{name} must be greater than zero")));
            }
        }
        if self.backlog <= 0 {
            return Err(ConfigurationError::ValidationError(String::from("[server] backlog must be greater than zero")));
        }
        self.socket_address(0)?;
        Ok(())
    }
}

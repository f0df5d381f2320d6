use serde::{Deserialize, Serialize};
use crate::config::structs::server_config::ServerConfig;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct Configuration {
    pub log_level: String,
    pub log_console_interval: u64,
    pub deadlock_check_interval: u64,
    pub server: ServerConfig,
}

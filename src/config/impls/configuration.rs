use std::fs::File;
use std::io::{ErrorKind, Write};
use crate::common::structs::custom_error::CustomError;
use crate::config::enums::configuration_error::ConfigurationError;
use crate::config::structs::configuration::Configuration;
use crate::config::structs::server_config::ServerConfig;

const LOG_LEVELS: [&str; 6] = ["off", "trace", "debug", "info", "warn", "error"];

impl Default for Configuration {
    fn default() -> Self {
        Self::init()
    }
}

impl Configuration {
    pub fn init() -> Configuration {
        Configuration {
            log_level: String::from("info"),
            log_console_interval: 60,
            deadlock_check_interval: 10,
            server: ServerConfig::default(),
        }
    }

    pub fn load(data: &[u8]) -> Result<Configuration, toml::de::Error> {
        toml::from_str(&String::from_utf8_lossy(data))
    }

    pub fn load_file(path: &str) -> Result<Configuration, ConfigurationError> {
        match std::fs::read(path) {
            Err(e) => Err(ConfigurationError::IOError(e)),
            Ok(data) => {
                match Self::load(data.as_slice()) {
                    Ok(cfg) => Ok(cfg),
                    Err(e) => Err(ConfigurationError::ParseError(e)),
                }
            }
        }
    }

    pub fn save_file(path: &str, data: String) -> Result<(), ConfigurationError> {
        match File::create(path) {
            Ok(mut file) => {
                match file.write_all(data.as_ref()) {
                    Ok(_) => Ok(()),
                    Err(e) => Err(ConfigurationError::IOError(e))
                }
            }
            Err(e) => Err(ConfigurationError::IOError(e))
        }
    }

    pub fn save_from_config(path: &str, config: &Configuration) -> Result<(), ConfigurationError> {
        let config_toml = toml::to_string(config).map_err(ConfigurationError::SerializeError)?;
        Self::save_file(path, config_toml)
    }

    /// Reads and validates the configuration at `path`.
    ///
    /// A missing file yields the defaults. Logging is not up yet when this
    /// runs, so problems are reported on stderr.
    pub fn load_from_file(path: &str) -> Result<Configuration, CustomError> {
        let config = match Configuration::load_file(path) {
            Ok(config) => config,
            Err(ConfigurationError::IOError(error)) if error.kind() == ErrorKind::NotFound => {
                eprintln!("No {path} found, using built-in defaults.");
                Configuration::init()
            }
            Err(error) => {
                eprintln!("[ERROR] Unable to read {path}: {error}");
                return Err(CustomError::new(&format!("could not load {path}")));
            }
        };

        if let Err(error) = config.validate() {
            eprintln!("[VALIDATE] {error}");
            return Err(CustomError::new(&error.to_string()));
        }
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigurationError> {
        if !LOG_LEVELS.contains(&self.log_level.as_str()) {
            return Err(ConfigurationError::ValidationError(format!("unknown log_level '{}'", self.log_level)));
        }
        self.server.validate()
    }
}

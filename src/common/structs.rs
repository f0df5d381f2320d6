/// Message-carrying error used during startup.
pub mod custom_error;

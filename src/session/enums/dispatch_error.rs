use thiserror::Error;
use crate::registry::enums::registry_error::RegistryError;

/// Failures of a well-formed request. Each maps to one status byte.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DispatchError {
    #[error(transparent)]
    Registry(#[from] RegistryError),

    #[error("invalid port `{0}`")]
    InvalidPort(String),
}

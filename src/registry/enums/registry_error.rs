use thiserror::Error;

/// Precondition violations reported by [`Registry`](crate::registry::structs::registry::Registry) operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RegistryError {
    #[error("user `{0}` already exists")]
    UserAlreadyExists(String),

    #[error("user `{0}` does not exist")]
    UserNotFound(String),

    #[error("user `{0}` is already connected")]
    AlreadyConnected(String),

    #[error("user `{0}` is not connected")]
    NotConnected(String),

    #[error("file `{0}` is already published")]
    FileAlreadyExists(String),

    #[error("file `{0}` is not published")]
    FileNotFound(String),

    #[error("remote user `{0}` does not exist")]
    RemoteUserNotFound(String),
}

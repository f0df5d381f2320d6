use std::io;
use thiserror::Error;

/// Failure to read or write a single protocol token.
///
/// Any of these on the read side means the session is aborted without a
/// status byte being written.
#[derive(Debug, Error)]
pub enum CodecError {
    #[error("connection closed before a token was received")]
    Closed,

    #[error("connection closed in the middle of a token ({0} bytes received)")]
    Truncated(usize),

    #[error("token exceeds the maximum size of {0} bytes")]
    TooLong(usize),

    #[error("token is not valid UTF-8")]
    InvalidUtf8,

    #[error("token contains an interior zero byte")]
    InteriorNul,

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

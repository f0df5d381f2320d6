use thiserror::Error;
use crate::codec::enums::codec_error::CodecError;

/// Failures after which the connection is closed without writing anything.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("framing error: {0}")]
    Codec(#[from] CodecError),

    #[error("unknown operation `{0}`")]
    UnknownOperation(String),
}

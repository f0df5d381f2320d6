//! Wire codec for the directory protocol.
//!
//! Every value on the wire is a *token*: a run of bytes terminated by a single
//! zero byte. Numbers (ports, counts) travel as their decimal string form.
//! The only binary value is the one-byte status that opens every response.
//!
//! # Limits
//!
//! A token including its terminator may not exceed [`codec::MAX_TOKEN_SIZE`]
//! bytes. Longer tokens, tokens cut short by the peer closing the stream and
//! tokens that are not valid UTF-8 are all reported as a [`enums::codec_error::CodecError`].
//!
//! # Example
//!
//! ```rust
//! use std::io::Cursor;
//! use peer_directory::codec::codec::{read_token, write_token};
//!
//! let mut wire = Vec::new();
//! write_token(&mut wire, "REGISTER").unwrap();
//!
//! let mut reader = Cursor::new(wire);
//! assert_eq!(read_token(&mut reader).unwrap(), "REGISTER");
//! ```

/// Codec error enumeration.
pub mod enums;

/// Token reading and writing functions.
#[allow(clippy::module_inception)]
pub mod codec;

use std::io::{BufRead, Read, Write};
use crate::codec::enums::codec_error::CodecError;

/// Maximum size of one token on the wire, terminator included.
pub const MAX_TOKEN_SIZE: usize = 1024;

/// Byte that terminates every token.
pub const TOKEN_TERMINATOR: u8 = 0;

/// Reads one zero-terminated token and returns it without the terminator.
///
/// At most [`MAX_TOKEN_SIZE`] bytes are consumed. If no terminator shows up
/// within that window the token is rejected with [`CodecError::TooLong`].
pub fn read_token<R: BufRead>(reader: &mut R) -> Result<String, CodecError>
{
    let mut buffer = Vec::with_capacity(64);
    let received = reader.by_ref().take(MAX_TOKEN_SIZE as u64).read_until(TOKEN_TERMINATOR, &mut buffer)?;

    match buffer.last() {
        Some(&TOKEN_TERMINATOR) => {
            buffer.pop();
            String::from_utf8(buffer).map_err(|_| CodecError::InvalidUtf8)
        }
        Some(_) if received == MAX_TOKEN_SIZE => Err(CodecError::TooLong(MAX_TOKEN_SIZE)),
        Some(_) => Err(CodecError::Truncated(received)),
        None => Err(CodecError::Closed),
    }
}

/// Writes `token` followed by the terminator.
pub fn write_token<W: Write>(writer: &mut W, token: &str) -> Result<(), CodecError>
{
    let bytes = token.as_bytes();
    if bytes.contains(&TOKEN_TERMINATOR) {
        return Err(CodecError::InteriorNul);
    }
    if bytes.len() + 1 > MAX_TOKEN_SIZE {
        return Err(CodecError::TooLong(MAX_TOKEN_SIZE));
    }
    writer.write_all(bytes)?;
    writer.write_all(&[TOKEN_TERMINATOR])?;
    Ok(())
}

/// Writes a decimal number as a token.
pub fn write_number<W: Write>(writer: &mut W, number: usize) -> Result<(), CodecError>
{
    write_token(writer, &number.to_string())
}

/// Writes the single status byte that opens a response.
pub fn write_status<W: Write>(writer: &mut W, status: u8) -> Result<(), CodecError>
{
    writer.write_all(&[status])?;
    Ok(())
}

use std::io::Write;
use crate::codec::codec::{write_number, write_status, write_token};
use crate::codec::enums::codec_error::CodecError;
use crate::session::enums::response::Response;
use crate::session::impls::operation::STATUS_OK;

impl Response {
    pub fn status(&self) -> u8
    {
        match self {
            Response::Ok | Response::Users(_) | Response::Content(_) => STATUS_OK,
            Response::Failure(status) => *status,
        }
    }

    pub fn is_ok(&self) -> bool
    {
        self.status() == STATUS_OK
    }

    /// Encodes the status byte and, for listings, the count and entries.
    /// Each connected user is written as username, address and port tokens.
    pub fn write<W: Write>(&self, writer: &mut W) -> Result<(), CodecError>
    {
        write_status(writer, self.status())?;
        match self {
            Response::Users(users) => {
                write_number(writer, users.len())?;
                for user in users {
                    write_token(writer, &user.username)?;
                    write_token(writer, &user.address.to_string())?;
                    write_token(writer, &user.port.to_string())?;
                }
            }
            Response::Content(files) => {
                write_number(writer, files.len())?;
                for filename in files {
                    write_token(writer, filename)?;
                }
            }
            Response::Ok | Response::Failure(_) => {}
        }
        Ok(())
    }
}

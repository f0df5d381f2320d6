use std::io::BufRead;
use std::net::IpAddr;
use log::debug;
use crate::codec::codec::read_token;
use crate::codec::enums::codec_error::CodecError;
use crate::registry::structs::registry::Registry;
use crate::session::enums::dispatch_error::DispatchError;
use crate::session::enums::operation::Operation;
use crate::session::enums::request::Request;
use crate::session::enums::response::Response;

impl Request {
    /// Reads the operation-specific tokens that follow the caller's username.
    pub fn read_arguments<R: BufRead>(operation: Operation, username: String, reader: &mut R) -> Result<Request, CodecError>
    {
        Ok(match operation {
            Operation::Register => Request::Register { username },
            Operation::Unregister => Request::Unregister { username },
            Operation::Connect => Request::Connect {
                username,
                port: read_token(reader)?,
            },
            Operation::Disconnect => Request::Disconnect { username },
            Operation::Publish => {
                let filename = read_token(reader)?;
                let description = read_token(reader)?;
                Request::Publish { username, filename, description }
            }
            Operation::Delete => Request::Delete {
                username,
                filename: read_token(reader)?,
            },
            Operation::ListUsers => Request::ListUsers { username },
            Operation::ListContent => Request::ListContent {
                username,
                target: read_token(reader)?,
            },
        })
    }

    pub fn operation(&self) -> Operation
    {
        match self {
            Request::Register { .. } => Operation::Register,
            Request::Unregister { .. } => Operation::Unregister,
            Request::Connect { .. } => Operation::Connect,
            Request::Disconnect { .. } => Operation::Disconnect,
            Request::Publish { .. } => Operation::Publish,
            Request::Delete { .. } => Operation::Delete,
            Request::ListUsers { .. } => Operation::ListUsers,
            Request::ListContent { .. } => Operation::ListContent,
        }
    }

    pub fn username(&self) -> &str
    {
        match self {
            Request::Register { username }
            | Request::Unregister { username }
            | Request::Connect { username, .. }
            | Request::Disconnect { username }
            | Request::Publish { username, .. }
            | Request::Delete { username, .. }
            | Request::ListUsers { username }
            | Request::ListContent { username, .. } => username,
        }
    }

    /// Runs the request as one registry transaction. `peer` is the caller's
    /// transport address, recorded by CONNECT.
    #[tracing::instrument(level = "debug", skip(registry))]
    pub fn execute(&self, registry: &Registry, peer: IpAddr) -> Response
    {
        match self.dispatch(registry, peer) {
            Ok(response) => response,
            Err(error) => {
                let status = self.operation().status_code(&error);
                debug!("[SESSION] {} from {} failed with status {status}: {error}", self.operation(), self.username());
                Response::Failure(status)
            }
        }
    }

    fn dispatch(&self, registry: &Registry, peer: IpAddr) -> Result<Response, DispatchError>
    {
        match self {
            Request::Register { username } => registry.register(username)?,
            Request::Unregister { username } => registry.unregister(username)?,
            Request::Connect { username, port } => {
                let port = port.parse::<u16>().map_err(|_| DispatchError::InvalidPort(port.clone()))?;
                registry.connect(username, peer, port)?
            }
            Request::Disconnect { username } => registry.disconnect(username)?,
            Request::Publish { username, filename, description } => registry.publish(username, filename, description)?,
            Request::Delete { username, filename } => registry.delete(username, filename)?,
            Request::ListUsers { username } => return Ok(Response::Users(registry.list_users(username)?)),
            Request::ListContent { username, target } => return Ok(Response::Content(registry.list_content(username, target)?)),
        }
        Ok(Response::Ok)
    }
}

use std::io::{BufReader, BufWriter, Read, Write};
use std::net::SocketAddr;
use std::sync::Arc;
use log::{debug, info};
use crate::codec::codec::read_token;
use crate::codec::enums::codec_error::CodecError;
use crate::registry::structs::registry::Registry;
use crate::session::enums::operation::Operation;
use crate::session::enums::request::Request;
use crate::session::enums::response::Response;
use crate::session::enums::session_error::SessionError;
use crate::session::enums::session_state::SessionState;
use crate::session::structs::session::Session;
use crate::stats::enums::stats_event::StatsEvent;

impl<S: Read + Write> Session<S> {
    pub fn new(stream: S, peer: SocketAddr, registry: Arc<Registry>) -> Session<S>
    {
        Session {
            stream,
            peer,
            registry,
            state: SessionState::AwaitOperation,
        }
    }

    /// Drives the session to [`SessionState::Closed`].
    ///
    /// Returns the response that was sent, or `None` when the session was
    /// aborted before dispatch (framing failure or unknown operation), in
    /// which case nothing was written.
    pub fn run(&mut self) -> Option<Response>
    {
        let request = match self.read_request() {
            Ok(request) => request,
            Err(error) => {
                let event = match error {
                    SessionError::UnknownOperation(_) => StatsEvent::UnknownOperations,
                    SessionError::Codec(_) => StatsEvent::FramingErrors,
                };
                self.registry.update_stats(event, 1);
                debug!("[SESSION] Closing connection from {} without response: {error}", self.peer);
                self.state.advance(SessionState::Closed);
                return None;
            }
        };

        let response = request.execute(&self.registry, self.peer.ip().to_canonical());
        self.registry.update_stats(if response.is_ok() { StatsEvent::RequestsOk } else { StatsEvent::RequestsFailed }, 1);

        self.state.advance(SessionState::Responding);
        if let Err(error) = self.write_response(&response) {
            debug!("[SESSION] Unable to send response to {}: {error}", self.peer);
        }
        self.state.advance(SessionState::Closed);
        Some(response)
    }

    /// Reads the operation, the caller and the operation's arguments.
    pub fn read_request(&mut self) -> Result<Request, SessionError>
    {
        let mut reader = BufReader::new(&mut self.stream);

        self.state.advance(SessionState::AwaitOperation);
        let operation_name = read_token(&mut reader)?;

        self.state.advance(SessionState::AwaitUsername);
        let username = read_token(&mut reader)?;

        info!("[SESSION] OPERATION {operation_name} FROM {username}");
        let operation: Operation = operation_name.parse()?;

        self.state.advance(SessionState::Dispatch);
        Ok(Request::read_arguments(operation, username, &mut reader)?)
    }

    pub fn write_response(&mut self, response: &Response) -> Result<(), CodecError>
    {
        let mut writer = BufWriter::new(&mut self.stream);
        response.write(&mut writer)?;
        writer.flush()?;
        Ok(())
    }
}

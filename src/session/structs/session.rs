use std::net::SocketAddr;
use std::sync::Arc;
use crate::registry::structs::registry::Registry;
use crate::session::enums::session_state::SessionState;

/// One accepted connection carrying exactly one operation.
///
/// Generic over the stream so that it can run over a `TcpStream` or an
/// in-memory duplex in tests.
#[derive(Debug)]
pub struct Session<S> {
    pub stream: S,

    /// Remote address reported by the transport. Its IP is what CONNECT records.
    pub peer: SocketAddr,

    pub registry: Arc<Registry>,

    pub state: SessionState,
}

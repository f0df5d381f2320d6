use std::io;
use std::net::SocketAddr;
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use crossbeam::channel::Receiver;
use log::info;
use crate::config::structs::server_config::ServerConfig;
use crate::registry::structs::registry::Registry;
use crate::server::structs::directory_server::DirectoryServer;

/// Binds the listener and runs the acceptor on its own thread.
///
/// Binding happens before this returns, so a port conflict surfaces as an
/// error here rather than inside the thread. The handle yields the result of
/// [`DirectoryServer::start`] together with the bound address.
pub fn directory_service(registry: Arc<Registry>, bind_address: SocketAddr, config: &ServerConfig, shutdown: Receiver<()>) -> io::Result<(SocketAddr, JoinHandle<io::Result<bool>>)>
{
    let server = DirectoryServer::new(registry, bind_address, config)?;
    let local_addr = server.local_addr()?;
    info!("[SERVER] Directory server bound to {local_addr}");
    let handle = thread::Builder::new()
        .name(String::from("acceptor"))
        .spawn(move || server.start(shutdown))?;
    Ok((local_addr, handle))
}

use std::io::{self, ErrorKind};
use std::net::{SocketAddr, TcpListener, TcpStream};
use std::sync::Arc;
use crossbeam::channel::{Receiver, TrySendError};
use log::{debug, error, info, warn};
use socket2::{Domain, Protocol, Socket, Type};
use crate::common::common::{shutdown_requested, shutdown_waiting};
use crate::config::structs::server_config::ServerConfig;
use crate::registry::structs::registry::Registry;
use crate::server::structs::directory_server::DirectoryServer;
use crate::server::structs::worker_pool::WorkerPool;
use crate::stats::enums::stats_event::StatsEvent;

impl DirectoryServer {
    #[tracing::instrument(level = "debug", skip(registry))]
    pub fn new(registry: Arc<Registry>, bind_address: SocketAddr, config: &ServerConfig) -> io::Result<DirectoryServer>
    {
        let domain = if bind_address.is_ipv4() { Domain::IPV4 } else { Domain::IPV6 };
        let socket = Socket::new(domain, Type::STREAM, Some(Protocol::TCP))?;
        socket.set_reuse_address(config.reuse_address)?;
        socket.bind(&bind_address.into())?;
        socket.listen(config.backlog)?;
        socket.set_nonblocking(true)?;
        let listener: TcpListener = socket.into();

        Ok(DirectoryServer {
            listener,
            registry,
            workers: config.workers,
            queue_size: config.queue_size,
            accept_poll_interval: config.accept_poll_interval(),
            shutdown_grace_period: config.shutdown_grace_period(),
        })
    }

    pub fn local_addr(&self) -> io::Result<SocketAddr>
    {
        self.listener.local_addr()
    }

    /// Runs the accept loop on the calling thread until `shutdown` fires.
    ///
    /// Returns whether every session finished inside the grace period. An
    /// accept error other than a transient per-connection one is returned
    /// after the workers were given their grace period.
    pub fn start(&self, shutdown: Receiver<()>) -> io::Result<bool>
    {
        let mut pool = WorkerPool::new(self.registry.clone(), self.workers, self.queue_size)?;
        info!("[SERVER] Accepting connections on {}", self.local_addr()?);

        let outcome = loop {
            match self.listener.accept() {
                Ok((stream, peer)) => {
                    self.handle_accept(&pool, stream, peer);
                    if shutdown_requested(&shutdown) {
                        break Ok(());
                    }
                }
                Err(error) if error.kind() == ErrorKind::WouldBlock => {
                    if shutdown_waiting(self.accept_poll_interval, &shutdown) {
                        break Ok(());
                    }
                }
                Err(error) if matches!(error.kind(), ErrorKind::Interrupted | ErrorKind::ConnectionAborted | ErrorKind::ConnectionReset) => {
                    debug!("[SERVER] Transient accept failure: {error}");
                }
                Err(error) => {
                    error!("[SERVER] Accept failed: {error}");
                    break Err(error);
                }
            }
        };

        info!("[SERVER] Stopped accepting, draining {} queued connection(s)...", pool.queued());
        let drained = pool.shutdown(self.shutdown_grace_period);
        outcome.map(|_| drained)
    }

    pub(crate) fn handle_accept(&self, pool: &WorkerPool, stream: TcpStream, peer: SocketAddr)
    {
        if let Err(error) = stream.set_nonblocking(false) {
            warn!("[SERVER] Dropping connection from {peer}: {error}");
            return;
        }
        match pool.dispatch(stream, peer) {
            Ok(()) => {
                self.registry.update_stats(StatsEvent::ConnectionsHandled, 1);
            }
            Err(TrySendError::Full((stream, peer))) => {
                self.registry.update_stats(StatsEvent::ConnectionsRejected, 1);
                warn!("[SERVER] Worker queue full, closing connection from {peer}");
                drop(stream);
            }
            Err(TrySendError::Disconnected((stream, peer))) => {
                self.registry.update_stats(StatsEvent::ConnectionsRejected, 1);
                warn!("[SERVER] Worker pool shut down, closing connection from {peer}");
                drop(stream);
            }
        }
    }
}

use std::io;
use std::net::{SocketAddr, TcpStream};
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};
use crossbeam::channel::TrySendError;
use log::{debug, info, warn};
use crate::registry::structs::registry::Registry;
use crate::server::structs::worker_pool::{Connection, WorkerPool};
use crate::session::structs::session::Session;

impl WorkerPool {
    pub fn new(registry: Arc<Registry>, workers: usize, queue_size: usize) -> io::Result<WorkerPool>
    {
        let (sender, receiver) = crossbeam::channel::bounded::<Connection>(queue_size);
        let (finished_sender, finished) = crossbeam::channel::unbounded::<usize>();

        for id in 0..workers {
            let receiver = receiver.clone();
            let registry = registry.clone();
            let finished_sender = finished_sender.clone();
            thread::Builder::new()
                .name(format!("session-worker-{id}"))
                .spawn(move || {
                    for (stream, peer) in receiver.iter() {
                        Session::new(stream, peer, registry.clone()).run();
                    }
                    debug!("[SERVER] Worker {id} stopped");
                    let _ = finished_sender.send(id);
                })?;
        }
        info!("[SERVER] Started {workers} session workers (queue size {queue_size})");

        Ok(WorkerPool {
            sender: Some(sender),
            finished,
            workers,
        })
    }

    /// Queues a connection without blocking. The connection is handed back
    /// when the queue is full or the pool is shutting down.
    pub fn dispatch(&self, stream: TcpStream, peer: SocketAddr) -> Result<(), TrySendError<Connection>>
    {
        match &self.sender {
            None => Err(TrySendError::Disconnected((stream, peer))),
            Some(sender) => sender.try_send((stream, peer)),
        }
    }

    pub fn queued(&self) -> usize
    {
        self.sender.as_ref().map_or(0, |sender| sender.len())
    }

    /// Closes the queue and waits for the workers to drain it.
    ///
    /// Returns `false` when `grace` elapsed first; the remaining sessions are
    /// abandoned and their threads left to finish or die with the process.
    pub fn shutdown(&mut self, grace: Duration) -> bool
    {
        drop(self.sender.take());
        let deadline = Instant::now() + grace;
        let mut running = self.workers;
        while running > 0 {
            match self.finished.recv_deadline(deadline) {
                Ok(_) => running -= 1,
                Err(_) => {
                    warn!("[SERVER] Grace period of {grace:?} elapsed, abandoning {running} busy worker(s)");
                    return false;
                }
            }
        }
        self.workers = 0;
        info!("[SERVER] All session workers stopped");
        true
    }
}

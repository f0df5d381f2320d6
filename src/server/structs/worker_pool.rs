use std::net::{SocketAddr, TcpStream};
use crossbeam::channel::{Receiver, Sender};

/// An accepted connection waiting for a worker.
pub type Connection = (TcpStream, SocketAddr);

#[derive(Debug)]
pub struct WorkerPool {
    /// `None` once shutdown started; workers exit when the queue is empty.
    pub(crate) sender: Option<Sender<Connection>>,
    /// Each worker sends its id here right before exiting.
    pub(crate) finished: Receiver<usize>,
    pub(crate) workers: usize,
}

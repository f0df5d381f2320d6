use std::net::IpAddr;
use parking_lot::Mutex;
use crate::registry::structs::file_catalog::FileCatalog;

/// Identity and presence of one registered peer.
///
/// All fields except `catalog` are guarded by the registry lock. The catalog
/// has its own mutex, taken only while the registry lock is held.
#[derive(Debug)]
pub struct UserRecord {
    /// Case-sensitive unique name, fixed at registration.
    pub username: String,

    /// Registration sequence number.
    pub registered: u64,

    /// Source IP observed on the CONNECT connection. `None` until the first connect.
    pub address: Option<IpAddr>,

    /// Port the peer listens on for direct transfers, as sent with CONNECT.
    pub port: u16,

    pub connected: bool,

    pub catalog: Mutex<FileCatalog>,
}

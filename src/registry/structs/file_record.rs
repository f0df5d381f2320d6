use serde::{Deserialize, Serialize};

/// One file published by a peer.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct FileRecord {
    /// Unique within the owning catalog.
    pub filename: String,

    /// Free text supplied with PUBLISH. Never sent to other peers.
    pub description: String,
}

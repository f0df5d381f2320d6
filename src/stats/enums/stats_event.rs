use serde::{Deserialize, Serialize};

/// Every counter that can be incremented, decremented or set.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub enum StatsEvent {
    Users,
    UsersConnected,
    Files,
    ConnectionsHandled,
    ConnectionsRejected,
    RequestsOk,
    RequestsFailed,
    FramingErrors,
    UnknownOperations,
}

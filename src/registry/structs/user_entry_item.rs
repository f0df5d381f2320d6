use std::net::IpAddr;
use serde::Serialize;
use crate::registry::structs::file_record::FileRecord;

/// Point-in-time copy of a [`UserRecord`](crate::registry::structs::user_record::UserRecord).
///
/// Returned by [`Registry::lookup`](crate::registry::structs::registry::Registry::lookup)
/// so that callers never hold a reference into the locked map.
#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct UserEntryItem {
    pub username: String,
    pub address: Option<IpAddr>,
    pub port: u16,
    pub connected: bool,
    pub files: Vec<FileRecord>,
}

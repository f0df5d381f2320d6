use std::net::IpAddr;
use serde::Serialize;

/// Reachable address of a connected peer, as listed by LIST USERS.
#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct ConnectedUser {
    pub username: String,
    pub address: IpAddr,
    pub port: u16,
}

use std::net::IpAddr;
use log::debug;
use crate::registry::enums::registry_error::RegistryError;
use crate::registry::structs::connected_user::ConnectedUser;
use crate::registry::structs::registry::Registry;
use crate::registry::structs::user_record::UserRecord;
use crate::registry::types::ahash_map::AHashMap;
use crate::stats::enums::stats_event::StatsEvent;

impl Registry {
    /// Marks the user connected, recording the observed `address` and the requested `port`.
    /// A rejected call leaves the previous address and port untouched.
    #[tracing::instrument(level = "debug", skip(self))]
    pub fn connect(&self, username: &str, address: IpAddr, port: u16) -> Result<(), RegistryError>
    {
        let mut lock = self.users.lock();
        let record = lock.get_mut(username).ok_or_else(|| RegistryError::UserNotFound(username.to_string()))?;
        if record.connected {
            return Err(RegistryError::AlreadyConnected(username.to_string()));
        }
        record.address = Some(address);
        record.port = port;
        record.connected = true;
        self.update_stats(StatsEvent::UsersConnected, 1);
        debug!("[REGISTRY] {username} connected from {address}:{port}");
        Ok(())
    }

    #[tracing::instrument(level = "debug", skip(self))]
    pub fn disconnect(&self, username: &str) -> Result<(), RegistryError>
    {
        let mut lock = self.users.lock();
        let record = lock.get_mut(username).ok_or_else(|| RegistryError::UserNotFound(username.to_string()))?;
        if !record.connected {
            return Err(RegistryError::NotConnected(username.to_string()));
        }
        record.connected = false;
        self.update_stats(StatsEvent::UsersConnected, -1);
        debug!("[REGISTRY] {username} disconnected");
        Ok(())
    }

    /// Every connected user, in registration order.
    #[tracing::instrument(level = "debug", skip(self))]
    pub fn snapshot_connected(&self) -> Vec<ConnectedUser>
    {
        let lock = self.users.lock();
        Self::collect_connected(&lock)
    }

    /// LIST USERS: checks that `caller` exists and is connected, then takes the
    /// connected snapshot within the same lock acquisition.
    #[tracing::instrument(level = "debug", skip(self))]
    pub fn list_users(&self, caller: &str) -> Result<Vec<ConnectedUser>, RegistryError>
    {
        let lock = self.users.lock();
        Self::require_connected(&lock, caller)?;
        Ok(Self::collect_connected(&lock))
    }

    fn collect_connected(users: &AHashMap<String, UserRecord>) -> Vec<ConnectedUser>
    {
        let mut connected: Vec<&UserRecord> = users.values().filter(|record| record.connected).collect();
        connected.sort_by_key(|record| record.registered);
        connected
            .into_iter()
            .filter_map(|record| {
                record.address.map(|address| ConnectedUser {
                    username: record.username.clone(),
                    address,
                    port: record.port,
                })
            })
            .collect()
    }
}

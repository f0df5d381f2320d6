use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use log::debug;
use parking_lot::Mutex;
use crate::registry::enums::registry_error::RegistryError;
use crate::registry::structs::registry::Registry;
use crate::registry::structs::user_entry_item::UserEntryItem;
use crate::registry::structs::user_record::UserRecord;
use crate::registry::types::ahash_map::AHashMap;
use crate::stats::enums::stats_event::StatsEvent;
use crate::stats::structs::stats_atomics::StatsAtomics;

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}

impl Registry {
    pub fn new() -> Registry
    {
        Self::with_stats(Arc::new(StatsAtomics::new()))
    }

    pub fn with_stats(stats: Arc<StatsAtomics>) -> Registry
    {
        Registry {
            users: Mutex::new(AHashMap::default()),
            sequence: AtomicU64::new(0),
            stats,
        }
    }

    #[tracing::instrument(level = "debug", skip(self))]
    pub fn register(&self, username: &str) -> Result<(), RegistryError>
    {
        let mut lock = self.users.lock();
        if lock.contains_key(username) {
            return Err(RegistryError::UserAlreadyExists(username.to_string()));
        }
        let registered = self.sequence.fetch_add(1, Ordering::SeqCst);
        lock.insert(username.to_string(), UserRecord::new(username, registered));
        self.update_stats(StatsEvent::Users, 1);
        debug!("[REGISTRY] Registered {username} as #{registered}");
        Ok(())
    }

    /// Removes a user and its catalog. Permitted while the user is connected;
    /// presence and published files are dropped with the record.
    #[tracing::instrument(level = "debug", skip(self))]
    pub fn unregister(&self, username: &str) -> Result<(), RegistryError>
    {
        let mut lock = self.users.lock();
        let record = lock.remove(username).ok_or_else(|| RegistryError::UserNotFound(username.to_string()))?;
        let files = record.catalog.lock().len();
        self.update_stats(StatsEvent::Users, -1);
        self.update_stats(StatsEvent::Files, -(files as i64));
        if record.connected {
            self.update_stats(StatsEvent::UsersConnected, -1);
        }
        debug!("[REGISTRY] Unregistered {username} (connected: {}, files: {files})", record.connected);
        Ok(())
    }

    #[tracing::instrument(level = "debug", skip(self))]
    pub fn lookup(&self, username: &str) -> Option<UserEntryItem>
    {
        let lock = self.users.lock();
        lock.get(username).map(|record| record.to_entry_item())
    }

    pub fn contains(&self, username: &str) -> bool
    {
        self.users.lock().contains_key(username)
    }

    pub fn user_count(&self) -> usize
    {
        self.users.lock().len()
    }

    /// Resolves `username` to a connected record inside an already locked map.
    pub(crate) fn require_connected<'a>(users: &'a AHashMap<String, UserRecord>, username: &str) -> Result<&'a UserRecord, RegistryError>
    {
        let record = users.get(username).ok_or_else(|| RegistryError::UserNotFound(username.to_string()))?;
        if !record.connected {
            return Err(RegistryError::NotConnected(username.to_string()));
        }
        Ok(record)
    }
}

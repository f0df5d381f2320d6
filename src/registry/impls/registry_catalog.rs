use log::debug;
use crate::registry::enums::registry_error::RegistryError;
use crate::registry::structs::registry::Registry;
use crate::stats::enums::stats_event::StatsEvent;

impl Registry {
    #[tracing::instrument(level = "debug", skip(self, description))]
    pub fn publish(&self, username: &str, filename: &str, description: &str) -> Result<(), RegistryError>
    {
        let lock = self.users.lock();
        let record = Self::require_connected(&lock, username)?;
        let mut catalog = record.catalog.lock();
        catalog.publish(filename, description)?;
        drop(catalog);
        self.update_stats(StatsEvent::Files, 1);
        debug!("[REGISTRY] {username} published {filename}");
        Ok(())
    }

    #[tracing::instrument(level = "debug", skip(self))]
    pub fn delete(&self, username: &str, filename: &str) -> Result<(), RegistryError>
    {
        let lock = self.users.lock();
        let record = Self::require_connected(&lock, username)?;
        let mut catalog = record.catalog.lock();
        catalog.delete(filename)?;
        drop(catalog);
        self.update_stats(StatsEvent::Files, -1);
        debug!("[REGISTRY] {username} deleted {filename}");
        Ok(())
    }

    /// LIST CONTENT: filenames published by `target`, in publish order.
    /// `caller` must exist and be connected; `target` only has to exist.
    #[tracing::instrument(level = "debug", skip(self))]
    pub fn list_content(&self, caller: &str, target: &str) -> Result<Vec<String>, RegistryError>
    {
        let lock = self.users.lock();
        Self::require_connected(&lock, caller)?;
        let record = lock.get(target).ok_or_else(|| RegistryError::RemoteUserNotFound(target.to_string()))?;
        let files = record.catalog.lock().list();
        Ok(files)
    }
}

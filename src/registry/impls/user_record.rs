use parking_lot::Mutex;
use crate::registry::structs::file_catalog::FileCatalog;
use crate::registry::structs::user_entry_item::UserEntryItem;
use crate::registry::structs::user_record::UserRecord;

impl UserRecord {
    pub fn new(username: &str, registered: u64) -> UserRecord
    {
        UserRecord {
            username: username.to_string(),
            registered,
            address: None,
            port: 0,
            connected: false,
            catalog: Mutex::new(FileCatalog::new()),
        }
    }

    /// Copies the record out. Takes the catalog lock, so the caller must
    /// already hold the registry lock.
    pub fn to_entry_item(&self) -> UserEntryItem
    {
        let catalog = self.catalog.lock();
        UserEntryItem {
            username: self.username.clone(),
            address: self.address,
            port: self.port,
            connected: self.connected,
            files: catalog.files.clone(),
        }
    }
}

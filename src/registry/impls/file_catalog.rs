use crate::registry::enums::registry_error::RegistryError;
use crate::registry::structs::file_catalog::FileCatalog;
use crate::registry::structs::file_record::FileRecord;

impl FileCatalog {
    pub fn new() -> FileCatalog
    {
        FileCatalog { files: Vec::new() }
    }

    /// Appends a file, keeping publish order. The description of a rejected
    /// duplicate is discarded.
    pub fn publish(&mut self, filename: &str, description: &str) -> Result<(), RegistryError>
    {
        if self.contains(filename) {
            return Err(RegistryError::FileAlreadyExists(filename.to_string()));
        }
        self.files.push(FileRecord {
            filename: filename.to_string(),
            description: description.to_string(),
        });
        Ok(())
    }

    /// Removes the file named `filename`. Remaining files keep their relative order.
    pub fn delete(&mut self, filename: &str) -> Result<FileRecord, RegistryError>
    {
        match self.files.iter().position(|file| file.filename == filename) {
            Some(index) => Ok(self.files.remove(index)),
            None => Err(RegistryError::FileNotFound(filename.to_string())),
        }
    }

    /// Filenames in publish order.
    pub fn list(&self) -> Vec<String>
    {
        self.files.iter().map(|file| file.filename.clone()).collect()
    }

    pub fn contains(&self, filename: &str) -> bool
    {
        self.files.iter().any(|file| file.filename == filename)
    }

    pub fn len(&self) -> usize
    {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool
    {
        self.files.is_empty()
    }
}

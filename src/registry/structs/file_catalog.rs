use crate::registry::structs::file_record::FileRecord;

/// Files published by one peer, in publish order.
///
/// Filenames are unique within a catalog.
#[derive(Clone, Debug, Default)]
pub struct FileCatalog {
    pub files: Vec<FileRecord>,
}

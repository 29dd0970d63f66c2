//! File-backed store: one JSON file per collection

use std::path::{Path, PathBuf};

use crate::errors::Result;
use crate::fs::{get_collection_path, read_text_if_exists, write_text_atomic};

use super::{Collection, Store};

/// Store rooted at a data directory
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    data_dir: PathBuf,
}

impl JsonFileStore {
    /// The directory is created lazily on first write
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        JsonFileStore {
            data_dir: data_dir.into(),
        }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn path_of(&self, collection: Collection) -> PathBuf {
        get_collection_path(&self.data_dir, collection)
    }
}

impl Store for JsonFileStore {
    fn read_raw(&self, collection: Collection) -> Result<Option<String>> {
        read_text_if_exists(&self.path_of(collection))
    }

    fn write_raw(&mut self, collection: Collection, content: &str) -> Result<()> {
        let path = self.path_of(collection);
        write_text_atomic(&path, content)?;
        tracing::debug!(%collection, path = %path.display(), "collection written");
        Ok(())
    }
}

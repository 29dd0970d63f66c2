//! In-memory store

use std::collections::HashMap;

use crate::errors::Result;

use super::{Collection, Store};

/// Hash-map backed store; nothing survives the process
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<Collection, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a key with raw text, e.g. to simulate corrupt data
    pub fn with_raw(collection: Collection, content: impl Into<String>) -> Self {
        let mut store = Self::new();
        store.entries.insert(collection, content.into());
        store
    }

    /// Raw text currently stored under a key
    pub fn raw(&self, collection: Collection) -> Option<&str> {
        self.entries.get(&collection).map(String::as_str)
    }
}

impl Store for MemoryStore {
    fn read_raw(&self, collection: Collection) -> Result<Option<String>> {
        Ok(self.entries.get(&collection).cloned())
    }

    fn write_raw(&mut self, collection: Collection, content: &str) -> Result<()> {
        self.entries.insert(collection, content.to_string());
        Ok(())
    }
}

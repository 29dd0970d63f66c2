//! Persistence store
//!
//! Four independent collections share one key space. Reads are fail-soft:
//! a missing or corrupt value reads as absent. Writes are best-effort: a
//! failure is logged and the caller carries on with its in-memory state.
//! There is no transaction spanning two collections.

mod file;
mod memory;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::errors::Result;

pub use file::JsonFileStore;
pub use memory::MemoryStore;

/// Key of an independently persisted collection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Collection {
    /// Sequence of vehicles
    Vehicles,
    /// Sequence of payment methods
    PaymentMethods,
    /// Singleton financial config
    Financial,
    /// Map of vehicle id to service records
    History,
}

impl Collection {
    pub const ALL: [Collection; 4] = [
        Collection::Vehicles,
        Collection::PaymentMethods,
        Collection::Financial,
        Collection::History,
    ];

    /// Storage key, also used as the file stem
    pub fn key(&self) -> &'static str {
        match self {
            Collection::Vehicles => "vehicles",
            Collection::PaymentMethods => "methods",
            Collection::Financial => "financial",
            Collection::History => "history",
        }
    }
}

impl std::fmt::Display for Collection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

/// Durable keyed storage.
///
/// Implementors provide raw text access; the typed, fail-soft contract is
/// layered on top by the provided methods.
pub trait Store {
    /// Raw stored text, None when the key has never been written
    fn read_raw(&self, collection: Collection) -> Result<Option<String>>;

    /// Replace the stored text for a key
    fn write_raw(&mut self, collection: Collection, content: &str) -> Result<()>;

    /// Typed read; None when absent, unreadable or corrupt
    fn try_get<T: DeserializeOwned>(&self, collection: Collection) -> Option<T> {
        let raw = match self.read_raw(collection) {
            Ok(Some(raw)) => raw,
            Ok(None) => return None,
            Err(e) => {
                tracing::warn!(%collection, error = %e, "could not read collection");
                return None;
            }
        };

        match serde_json::from_str(&raw) {
            Ok(value) => Some(value),
            Err(e) => {
                tracing::warn!(%collection, error = %e, "discarding corrupt collection");
                None
            }
        }
    }

    /// Typed read falling back to the type's empty value
    fn get<T: DeserializeOwned + Default>(&self, collection: Collection) -> T {
        self.try_get(collection).unwrap_or_default()
    }

    /// Best-effort typed write; failures are logged, never returned
    fn set<T: Serialize>(&mut self, collection: Collection, value: &T) {
        let content = match serde_json::to_string_pretty(value) {
            Ok(content) => content,
            Err(e) => {
                tracing::warn!(%collection, error = %e, "could not serialize collection");
                return;
            }
        };

        if let Err(e) = self.write_raw(collection, &content) {
            tracing::warn!(%collection, error = %e, "could not persist collection, keeping in memory");
        }
    }
}

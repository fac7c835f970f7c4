//! Process-local cache, partitioned by resource kind.
//!
//! Entries live until explicitly removed or the process ends: no eviction,
//! no TTL. An entry reflects the last representation this process observed
//! for an id and may be stale relative to the remote — nothing refreshes it
//! proactively, and there is no invalidation signal from outside.

use dashmap::DashMap;
use quill_core::resource::Channel;

/// One resource kind's id → representation mapping. No operation fails;
/// a missing id is signalled by `None`/`false`, never an error.
pub struct Partition<T> {
    entries: DashMap<String, T>,
}

impl<T: Clone> Partition<T> {
    pub fn new() -> Self {
        Self {
            entries: DashMap::new(),
        }
    }

    pub fn has(&self, id: &str) -> bool {
        self.entries.contains_key(id)
    }

    pub fn get(&self, id: &str) -> Option<T> {
        self.entries.get(id).map(|entry| entry.value().clone())
    }

    pub fn set(&self, id: impl Into<String>, value: T) {
        self.entries.insert(id.into(), value);
    }

    pub fn delete(&self, id: &str) {
        self.entries.remove(id);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<T: Clone> Default for Partition<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// The client's cache: one partition per resource kind with a manager.
/// Constructed once by the [`crate::Client`] and shared by handle — never an
/// ambient singleton.
pub struct CacheStore {
    pub channels: Partition<Channel>,
}

impl CacheStore {
    pub fn new() -> Self {
        Self {
            channels: Partition::new(),
        }
    }
}

impl Default for CacheStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn channel(id: &str) -> Channel {
        Channel {
            id: id.into(),
            name: Some("general".into()),
            kind: Some(0),
            extra: serde_json::Map::new(),
        }
    }

    #[test]
    fn set_get_has() {
        let partition = Partition::new();
        assert!(!partition.has("1"));
        assert!(partition.get("1").is_none());

        partition.set("1", channel("1"));
        assert!(partition.has("1"));
        assert_eq!(partition.get("1").unwrap().id, "1");
    }

    #[test]
    fn set_overwrites() {
        let partition = Partition::new();
        partition.set("1", channel("1"));

        let mut renamed = channel("1");
        renamed.name = Some("renamed".into());
        partition.set("1", renamed);

        assert_eq!(partition.len(), 1);
        assert_eq!(partition.get("1").unwrap().name.as_deref(), Some("renamed"));
    }

    #[test]
    fn delete_removes_and_is_idempotent() {
        let partition = Partition::new();
        partition.set("1", channel("1"));
        partition.delete("1");
        assert!(!partition.has("1"));

        // Deleting a missing id is not an error.
        partition.delete("1");
        assert!(partition.is_empty());
    }

    #[test]
    fn store_starts_empty() {
        let store = CacheStore::new();
        assert!(store.channels.is_empty());
    }
}

// Cache store for reading and writing timestamped responses.
// Handles JSON serialization, freshness checking, and atomic file writes.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::Duration;

use chrono::Utc;
use serde::{Deserialize, Serialize, de::DeserializeOwned};

use crate::config::Config;
use crate::error::Result;

use super::paths;

/// How long a cached response is trusted: 60 seconds.
pub const FRESHNESS_WINDOW: Duration = Duration::from_secs(60);

/// On-disk cache entry, `{ "data": ..., "timestamp": <ms since epoch> }`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheEntry<T> {
    /// The cached payload.
    pub data: T,
    /// When the payload was stored, in milliseconds since the Unix epoch.
    pub timestamp: i64,
}

impl<T> CacheEntry<T> {
    /// Create an entry stamped with the current time.
    pub fn new(data: T) -> Self {
        Self {
            data,
            timestamp: now_millis(),
        }
    }

    /// Fresh while strictly less than the window has elapsed; the boundary is stale.
    pub fn is_fresh_at(&self, now_ms: i64) -> bool {
        let window = FRESHNESS_WINDOW.as_millis() as i64;
        now_ms.saturating_sub(self.timestamp) < window
    }
}

/// Result of a cache lookup.
#[derive(Debug, Clone, PartialEq)]
pub struct CacheLookup<T> {
    pub payload: T,
    pub is_fresh: bool,
}

/// Key-value store of timestamped responses, one file per key.
#[derive(Debug, Clone)]
pub struct CacheStore {
    root: PathBuf,
}

impl CacheStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(&config.cache_dir)
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Look up a key. Returns `None` when no entry exists.
    pub fn get<T: DeserializeOwned>(&self, key: &str) -> Result<Option<CacheLookup<T>>> {
        self.get_at(key, now_millis())
    }

    fn get_at<T: DeserializeOwned>(&self, key: &str, now_ms: i64) -> Result<Option<CacheLookup<T>>> {
        let path = paths::entry_path(&self.root, key);
        if !path.exists() {
            return Ok(None);
        }

        let contents = fs::read_to_string(&path)?;
        let entry: CacheEntry<T> = serde_json::from_str(&contents)?;
        let is_fresh = entry.is_fresh_at(now_ms);
        Ok(Some(CacheLookup {
            payload: entry.data,
            is_fresh,
        }))
    }

    /// Payload for a key only if it is still fresh.
    pub fn get_fresh<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>> {
        match self.get::<T>(key)? {
            Some(lookup) if lookup.is_fresh => Ok(Some(lookup.payload)),
            _ => Ok(None),
        }
    }

    /// Store a payload stamped with the current time, replacing any prior entry.
    pub fn set<T: Serialize>(&self, key: &str, payload: &T) -> Result<()> {
        self.write_entry(key, &CacheEntry::new(payload))
    }

    fn write_entry<T: Serialize>(&self, key: &str, entry: &CacheEntry<T>) -> Result<()> {
        let path = paths::entry_path(&self.root, key);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let json = serde_json::to_string(entry)?;

        // Write atomically via temp file
        let temp_path = path.with_extension("tmp");
        let mut file = fs::File::create(&temp_path)?;
        file.write_all(json.as_bytes())?;
        file.sync_all()?;
        fs::rename(&temp_path, &path)?;

        Ok(())
    }
}

fn now_millis() -> i64 {
    Utc::now().timestamp_millis()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
    struct TestData {
        name: String,
        value: i32,
    }

    fn sample() -> TestData {
        TestData {
            name: "test".to_string(),
            value: 42,
        }
    }

    #[test]
    fn test_set_and_get() {
        let temp_dir = TempDir::new().unwrap();
        let store = CacheStore::new(temp_dir.path());

        store.set("https://example.com/a", &sample()).unwrap();

        let lookup: CacheLookup<TestData> = store.get("https://example.com/a").unwrap().unwrap();
        assert_eq!(lookup.payload, sample());
        assert!(lookup.is_fresh);
    }

    #[test]
    fn test_get_missing_key() {
        let temp_dir = TempDir::new().unwrap();
        let store = CacheStore::new(temp_dir.path());

        let lookup: Option<CacheLookup<TestData>> = store.get("https://example.com/none").unwrap();
        assert!(lookup.is_none());
    }

    #[test]
    fn test_freshness_boundary() {
        let entry = CacheEntry {
            data: (),
            timestamp: 1_000_000,
        };

        assert!(entry.is_fresh_at(1_000_000));
        assert!(entry.is_fresh_at(1_059_999));
        // Exactly at the window is stale
        assert!(!entry.is_fresh_at(1_060_000));
        assert!(!entry.is_fresh_at(1_120_000));
    }

    #[test]
    fn test_stale_entry_reported_but_not_fresh() {
        let temp_dir = TempDir::new().unwrap();
        let store = CacheStore::new(temp_dir.path());
        let key = "https://example.com/stale";

        let entry = CacheEntry {
            data: sample(),
            timestamp: now_millis() - 61_000,
        };
        store.write_entry(key, &entry).unwrap();

        let lookup: CacheLookup<TestData> = store.get(key).unwrap().unwrap();
        assert!(!lookup.is_fresh);

        let fresh: Option<TestData> = store.get_fresh(key).unwrap();
        assert!(fresh.is_none());
    }

    #[test]
    fn test_get_at_uses_supplied_clock() {
        let temp_dir = TempDir::new().unwrap();
        let store = CacheStore::new(temp_dir.path());
        let key = "k";
        store
            .write_entry(
                key,
                &CacheEntry {
                    data: 7,
                    timestamp: 500,
                },
            )
            .unwrap();

        let lookup: CacheLookup<i32> = store.get_at(key, 60_499).unwrap().unwrap();
        assert!(lookup.is_fresh);
        let lookup: CacheLookup<i32> = store.get_at(key, 60_500).unwrap().unwrap();
        assert!(!lookup.is_fresh);
    }

    #[test]
    fn test_set_overwrites_prior_entry() {
        let temp_dir = TempDir::new().unwrap();
        let store = CacheStore::new(temp_dir.path());
        let key = "https://example.com/a";

        store.set(key, &sample()).unwrap();
        let replacement = TestData {
            name: "other".to_string(),
            value: 7,
        };
        store.set(key, &replacement).unwrap();

        let fresh: Option<TestData> = store.get_fresh(key).unwrap();
        assert_eq!(fresh, Some(replacement));
    }

    #[test]
    fn test_entry_file_format() {
        let temp_dir = TempDir::new().unwrap();
        let store = CacheStore::new(temp_dir.path());
        let key = "https://example.com/a";

        store.set(key, &vec![1, 2, 3]).unwrap();

        let raw = fs::read_to_string(paths::entry_path(store.root(), key)).unwrap();
        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(value["data"], serde_json::json!([1, 2, 3]));
        assert!(value["timestamp"].is_i64());
    }

    #[test]
    fn test_corrupt_entry_is_error() {
        let temp_dir = TempDir::new().unwrap();
        let store = CacheStore::new(temp_dir.path());
        let key = "https://example.com/bad";

        let path = paths::entry_path(store.root(), key);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, "{not json").unwrap();

        assert!(store.get::<TestData>(key).is_err());
    }
}

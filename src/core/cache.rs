//! Response cache combining an in-memory LRU with file system persistence
//!
//! - L1: in-memory LRU, shared across dashboard redraws
//! - L2: one JSON file per key under the cache directory, shared across runs
//!
//! Disk hits are promoted to memory.

use lru::LruCache;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::{
    fs,
    hash::Hash,
    io::{Read, Write},
    num::NonZeroUsize,
    path::{Path, PathBuf},
    sync::{Arc, Mutex},
};
use tracing::{debug, warn};

/// Try to read a file into a String
pub fn try_read_to_string(path: &Path) -> Option<String> {
    let mut f = fs::File::open(path).ok()?;
    let mut s = String::new();

    f.read_to_string(&mut s).ok()?;

    Some(s)
}

/// Write a string to file, creating parent directories
pub fn write_string(path: &Path, contents: &str) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let mut f = fs::File::create(path)?;
    f.write_all(contents.as_bytes())
}

/// How a request should interact with the cache.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CachePolicy {
    /// Serve from cache when present, store fresh responses.
    #[default]
    Use,
    /// Always fetch, then overwrite the cached entry.
    Refresh,
    /// Never read or write the cache.
    Bypass,
}

impl CachePolicy {
    pub fn from_refresh(refresh: bool) -> Self {
        if refresh {
            CachePolicy::Refresh
        } else {
            CachePolicy::Use
        }
    }

    pub fn reads(&self) -> bool {
        matches!(self, CachePolicy::Use)
    }

    pub fn writes(&self) -> bool {
        !matches!(self, CachePolicy::Bypass)
    }
}

/// Cache key usable for both memory and disk caching
pub trait CacheKey: Hash + Eq + Clone + Send + Sync {
    /// File-system-safe name for this entry (without extension)
    fn to_file_key(&self) -> String;
}

/// Key for one GET request against a statistics API
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ApiCacheKey {
    pub service: String,
    pub path: String,
    pub query: Vec<(String, String)>,
}

impl ApiCacheKey {
    pub fn new(service: &str, path: &str, query: &[(&str, String)]) -> Self {
        let mut query: Vec<(String, String)> = query
            .iter()
            .map(|(k, v)| (k.to_string(), v.clone()))
            .collect();
        query.sort();
        Self {
            service: service.to_string(),
            path: path.to_string(),
            query,
        }
    }
}

impl ApiCacheKey {
    /// Short hex digest of the exact key. Sanitizing is lossy, so the digest
    /// keeps `Miami (OH)` and `Miami OH` in separate files.
    pub fn digest(&self) -> String {
        let mut hasher = Sha256::new();
        for part in [self.service.as_str(), self.path.as_str()] {
            hasher.update(part.as_bytes());
            hasher.update([0u8]);
        }
        for (k, v) in &self.query {
            hasher.update(k.as_bytes());
            hasher.update([0u8]);
            hasher.update(v.as_bytes());
            hasher.update([0u8]);
        }
        hasher.finalize()[..8]
            .iter()
            .map(|b| format!("{b:02x}"))
            .collect()
    }
}

impl CacheKey for ApiCacheKey {
    fn to_file_key(&self) -> String {
        let query = self
            .query
            .iter()
            .map(|(k, v)| format!("{k}-{v}"))
            .collect::<Vec<_>>()
            .join("_");
        let raw = format!("{}_{}_{}", self.service, self.path, query);
        format!("{}_{}", sanitize(&raw), self.digest())
    }
}

fn sanitize(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut last_underscore = false;
    for c in raw.chars() {
        let c = if c.is_ascii_alphanumeric() || c == '-' {
            c.to_ascii_lowercase()
        } else {
            '_'
        };
        if c == '_' && last_underscore {
            continue;
        }
        last_underscore = c == '_';
        out.push(c);
    }
    out.trim_matches('_').to_string()
}

/// Unified cache that combines LRU memory cache with file system persistence
pub struct UnifiedCache<K, V>
where
    K: CacheKey,
    V: Clone + Serialize + for<'de> Deserialize<'de>,
{
    memory_cache: Arc<Mutex<LruCache<K, V>>>,
    memory_capacity: usize,
    root: Option<PathBuf>,
}

impl<K, V> UnifiedCache<K, V>
where
    K: CacheKey,
    V: Clone + Serialize + for<'de> Deserialize<'de>,
{
    /// Memory-only cache
    pub fn in_memory(memory_capacity: usize) -> Self {
        let capacity = NonZeroUsize::new(memory_capacity).unwrap_or(NonZeroUsize::MIN);
        Self {
            memory_cache: Arc::new(Mutex::new(LruCache::new(capacity))),
            memory_capacity: capacity.get(),
            root: None,
        }
    }

    /// Memory cache backed by JSON files under `root`
    pub fn with_disk(memory_capacity: usize, root: impl Into<PathBuf>) -> Self {
        Self {
            root: Some(root.into()),
            ..Self::in_memory(memory_capacity)
        }
    }

    /// File path for an entry, when disk persistence is enabled
    pub fn file_path(&self, key: &K) -> Option<PathBuf> {
        self.root
            .as_ref()
            .map(|root| root.join(format!("{}.json", key.to_file_key())))
    }

    /// Get an item from cache (checks memory first, then disk)
    pub fn get(&self, key: &K) -> Option<V> {
        if let Some(value) = self.memory().get(key) {
            debug!(key = %key.to_file_key(), "memory cache hit");
            return Some(value.clone());
        }

        if let Some(value) = self.get_from_disk(key) {
            debug!(key = %key.to_file_key(), "disk cache hit");
            self.memory().put(key.clone(), value.clone());
            return Some(value);
        }

        None
    }

    /// Put an item into cache (stores in both memory and disk)
    pub fn put(&self, key: K, value: V) {
        if let Err(err) = self.put_to_disk(&key, &value) {
            warn!(key = %key.to_file_key(), error = %err, "failed to persist cache entry");
        }
        self.memory().put(key, value);
    }

    fn get_from_disk(&self, key: &K) -> Option<V> {
        let path = self.file_path(key)?;
        let content = try_read_to_string(&path)?;
        serde_json::from_str(&content).ok()
    }

    fn put_to_disk(&self, key: &K, value: &V) -> std::io::Result<()> {
        let Some(path) = self.file_path(key) else {
            return Ok(());
        };
        let content = serde_json::to_string_pretty(value)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;
        write_string(&path, &content)
    }

    /// Clear memory cache only (keeps disk cache)
    pub fn clear_memory(&self) {
        self.memory().clear();
    }

    /// Entries in memory and memory capacity
    pub fn memory_stats(&self) -> (usize, usize) {
        (self.memory().len(), self.memory_capacity)
    }

    fn memory(&self) -> std::sync::MutexGuard<'_, LruCache<K, V>> {
        // A poisoned lock only means another thread panicked mid-update of an LRU;
        // the map itself is still usable.
        self.memory_cache
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl<K, V> Clone for UnifiedCache<K, V>
where
    K: CacheKey,
    V: Clone + Serialize + for<'de> Deserialize<'de>,
{
    fn clone(&self) -> Self {
        Self {
            memory_cache: Arc::clone(&self.memory_cache),
            memory_capacity: self.memory_capacity,
            root: self.root.clone(),
        }
    }
}

//! Memoization of collaborator replies.
//!
//! The AI model is asked the same question more than once in a normal run
//! (the healthier-alternatives prompt is issued for display and again during
//! report assembly), so replies are cached in memory keyed by a digest of
//! (prompt bytes, image bytes). Entries expire after a TTL, checked lazily on
//! lookup; capacity is bounded with LRU eviction.

use lru::LruCache;
use sha2::{Digest, Sha256};
use std::num::NonZeroUsize;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::RwLock;

pub const DEFAULT_CACHE_CAPACITY: usize = 64;
pub const DEFAULT_CACHE_TTL: Duration = Duration::from_secs(3600);

#[derive(Debug, Clone)]
struct CacheEntry {
    response_text: String,
    expires_at: Instant,
}

impl CacheEntry {
    fn new(response_text: String, ttl: Duration) -> Self {
        CacheEntry {
            response_text,
            expires_at: Instant::now() + ttl,
        }
    }

    fn is_expired(&self) -> bool {
        Instant::now() >= self.expires_at
    }
}

#[derive(Clone)]
pub struct ResponseCache {
    store: Arc<RwLock<LruCache<String, CacheEntry>>>,
    ttl: Duration,
}

impl ResponseCache {
    // LruCache needs a non-zero capacity.
    const FALLBACK_CAPACITY: NonZeroUsize = match NonZeroUsize::new(DEFAULT_CACHE_CAPACITY) {
        Some(n) => n,
        None => unreachable!(),
    };

    pub fn new(capacity: usize, ttl: Duration) -> Self {
        let capacity = NonZeroUsize::new(capacity).unwrap_or(Self::FALLBACK_CAPACITY);
        ResponseCache {
            store: Arc::new(RwLock::new(LruCache::new(capacity))),
            ttl,
        }
    }

    /// Cache key for a collaborator call: SHA-256 over the prompt bytes
    /// followed by the image bytes (empty slice for text-only prompts).
    pub fn response_key(prompt: &str, image_bytes: &[u8]) -> String {
        let mut hasher = Sha256::new();
        hasher.update(prompt.as_bytes());
        hasher.update(image_bytes);
        hex::encode(hasher.finalize())
    }

    pub async fn get(&self, key: &str) -> Option<String> {
        let mut store = self.store.write().await;
        let expired = match store.get(key) {
            Some(entry) => {
                if !entry.is_expired() {
                    log::debug!("response cache hit for key {}", &key[..12.min(key.len())]);
                    return Some(entry.response_text.clone());
                }
                true
            }
            None => false,
        };
        if expired {
            log::debug!(
                "response cache entry expired for key {}",
                &key[..12.min(key.len())]
            );
            store.pop(key);
        }
        None
    }

    pub async fn insert(&self, key: String, response_text: String) {
        let mut store = self.store.write().await;
        store.put(key, CacheEntry::new(response_text, self.ttl));
    }
}

impl Default for ResponseCache {
    fn default() -> Self {
        ResponseCache::new(DEFAULT_CACHE_CAPACITY, DEFAULT_CACHE_TTL)
    }
}

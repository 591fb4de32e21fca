// src/services/cache.rs
// DOCUMENTATION: In-memory TTL cache for Places API responses
// PURPOSE: Serve repeated identical queries without re-issuing network calls

use crate::models::{NearbySearchResponse, PlaceDetailsResponse};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::time::Duration;
use tokio::sync::RwLock;
use tokio::time::Instant;

/// Default time-to-live for cached responses (5 minutes)
pub const DEFAULT_CACHE_TTL: Duration = Duration::from_secs(300);

/// Decoded response payload held by the cache
/// One map serves both query kinds; the key discriminator keeps the
/// variants from colliding.
#[derive(Clone, Debug, PartialEq)]
pub enum CachedResponse {
    Nearby(NearbySearchResponse),
    Details(PlaceDetailsResponse),
}

/// Cache entry with expiration
#[derive(Clone, Debug)]
struct CacheEntry<T> {
    data: T,
    expires_at: Instant,
}

impl<T> CacheEntry<T> {
    fn new(data: T, ttl: Duration) -> Self {
        Self {
            data,
            expires_at: Instant::now() + ttl,
        }
    }

    fn is_expired(&self) -> bool {
        Instant::now() > self.expires_at
    }
}

/// In-memory cache with per-entry TTL
/// DOCUMENTATION: Thread-safe cache for decoded API responses. Expiry is
/// checked lazily on read; there is no background sweep and no size bound.
pub struct ResponseCache {
    store: RwLock<HashMap<String, CacheEntry<CachedResponse>>>,
    default_ttl: Duration,
}

impl ResponseCache {
    /// Create new cache with the given TTL
    pub fn new(default_ttl: Duration) -> Self {
        Self {
            store: RwLock::new(HashMap::new()),
            default_ttl,
        }
    }

    /// Cache key for a nearby search
    /// Encodes every query parameter exactly as given, so two calls with
    /// identical inputs share an entry and any single differing parameter
    /// yields a distinct key.
    pub fn nearby_key(latitude: f64, longitude: f64, place_type: &str, radius: u32) -> String {
        format!("nearby_{}_{}_{}_{}", latitude, longitude, place_type, radius)
    }

    /// Cache key for a details lookup
    pub fn details_key(place_id: &str) -> String {
        format!("details_{}", place_id)
    }

    /// Get cached value, if present and unexpired
    pub async fn get(&self, key: &str) -> Option<CachedResponse> {
        let store = self.store.read().await;

        if let Some(entry) = store.get(key) {
            if !entry.is_expired() {
                log::debug!("Cache HIT for key: {}", key);
                return Some(entry.data.clone());
            } else {
                log::debug!("Cache EXPIRED for key: {}", key);
            }
        } else {
            log::debug!("Cache MISS for key: {}", key);
        }

        None
    }

    /// Store a decoded response under the given key
    pub async fn insert(&self, key: String, value: CachedResponse) {
        let mut store = self.store.write().await;
        store.insert(key.clone(), CacheEntry::new(value, self.default_ttl));
        log::debug!(
            "Cache SET for key: {} (TTL: {}s)",
            key,
            self.default_ttl.as_secs()
        );
    }

    /// Clear all cache entries unconditionally
    pub async fn clear(&self) {
        let mut store = self.store.write().await;
        let count = store.len();
        store.clear();
        log::info!("Cache cleared: {} entries removed", count);
    }

    /// Get cache statistics
    pub async fn stats(&self) -> CacheStats {
        let store = self.store.read().await;
        let total = store.len();
        let expired = store.values().filter(|e| e.is_expired()).count();

        CacheStats {
            total_entries: total,
            expired_entries: expired,
            active_entries: total - expired,
        }
    }
}

/// Cache statistics
#[derive(Debug, Serialize, Deserialize)]
pub struct CacheStats {
    pub total_entries: usize,
    pub expired_entries: usize,
    pub active_entries: usize,
}

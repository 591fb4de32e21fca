// src/services/gateway.rs
// DOCUMENTATION: Places Gateway - single point of access to the places API
// PURPOSE: Apply shared request pacing and response caching to all outbound calls

use crate::errors::PlacesError;
use crate::models::{NearbySearchResponse, PlaceDetailsResponse};
use crate::services::cache::{CacheStats, CachedResponse, ResponseCache, DEFAULT_CACHE_TTL};
use crate::services::pacing::{PacingGate, MIN_REQUEST_INTERVAL};
use crate::services::places_client::{GooglePlacesClient, PlacesApi};
use std::sync::Arc;
use std::time::Duration;

/// Default search radius in meters
pub const DEFAULT_SEARCH_RADIUS_M: u32 = 5000;

/// Gateway mediating all outbound places API calls
/// DOCUMENTATION: Construct once at startup and share by reference. The
/// cache and the pacing timestamp are process-wide state; both are guarded
/// internally, so callers on any task may query concurrently.
pub struct PlacesGateway {
    api: Arc<dyn PlacesApi>,
    cache: ResponseCache,
    pacing: PacingGate,
}

impl PlacesGateway {
    /// Create a gateway backed by the Google Places API with default TTL
    /// and pacing interval
    pub fn new(api_key: String) -> Self {
        Self::with_api(
            Arc::new(GooglePlacesClient::new(api_key)),
            DEFAULT_CACHE_TTL,
            MIN_REQUEST_INTERVAL,
        )
    }

    /// Create a gateway over an arbitrary backend with explicit cache TTL
    /// and pacing interval
    pub fn with_api(api: Arc<dyn PlacesApi>, cache_ttl: Duration, min_interval: Duration) -> Self {
        Self {
            api,
            cache: ResponseCache::new(cache_ttl),
            pacing: PacingGate::new(min_interval),
        }
    }

    /// Find places near a coordinate matching a service category
    /// DOCUMENTATION: Serves a valid cached entry without network access;
    /// otherwise waits out the pacing gate, issues the request, and caches
    /// the decoded response only when the remote status reports success.
    /// A non-success status is returned to the caller as data, never
    /// cached and never raised as an error; interpreting it is the
    /// caller's responsibility.
    pub async fn search_nearby(
        &self,
        latitude: f64,
        longitude: f64,
        place_type: &str,
        radius: u32,
    ) -> Result<NearbySearchResponse, PlacesError> {
        let key = ResponseCache::nearby_key(latitude, longitude, place_type, radius);

        if let Some(CachedResponse::Nearby(cached)) = self.cache.get(&key).await {
            return Ok(cached);
        }

        self.pacing.acquire().await;
        let response = self
            .api
            .nearby_search(latitude, longitude, place_type, radius)
            .await?;

        if response.is_ok() {
            self.cache
                .insert(key, CachedResponse::Nearby(response.clone()))
                .await;
        }

        Ok(response)
    }

    /// Fetch the full record for one place identifier
    /// Same cache-then-pace-then-fetch flow as nearby search; the pacing
    /// gate is shared across both operations.
    pub async fn get_details(&self, place_id: &str) -> Result<PlaceDetailsResponse, PlacesError> {
        let key = ResponseCache::details_key(place_id);

        if let Some(CachedResponse::Details(cached)) = self.cache.get(&key).await {
            return Ok(cached);
        }

        self.pacing.acquire().await;
        let response = self.api.place_details(place_id).await?;

        if response.is_ok() {
            self.cache
                .insert(key, CachedResponse::Details(response.clone()))
                .await;
        }

        Ok(response)
    }

    /// Remove every cached entry unconditionally
    /// Intended for test isolation and manual invalidation; never invoked
    /// automatically by any other operation.
    pub async fn clear_cache(&self) {
        self.cache.clear().await;
    }

    /// Snapshot of cache occupancy
    pub async fn cache_stats(&self) -> CacheStats {
        self.cache.stats().await
    }
}

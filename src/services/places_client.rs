// src/services/places_client.rs
// DOCUMENTATION: Google Places API client
// PURPOSE: Handle communication with Google Places API for place data retrieval

use crate::errors::PlacesError;
use crate::models::{NearbySearchResponse, PlaceDetailsResponse};
use async_trait::async_trait;
use reqwest::Client;
use std::collections::HashMap;

/// Field-selection list for details lookups, matching what the consumers
/// render: contact data, opening hours, reviews, and photo references.
const DETAILS_FIELDS: &str = "place_id,name,formatted_address,formatted_phone_number,website,\
rating,user_ratings_total,opening_hours,photos,reviews,types,geometry";

/// Remote places lookup API
/// DOCUMENTATION: The transport seam of the gateway. Implementations issue
/// one network call per invocation and return the decoded response with its
/// status discriminator intact; only transport and decode faults are errors.
#[async_trait]
pub trait PlacesApi: Send + Sync {
    /// Find places near a coordinate matching a service category
    async fn nearby_search(
        &self,
        latitude: f64,
        longitude: f64,
        place_type: &str,
        radius: u32,
    ) -> Result<NearbySearchResponse, PlacesError>;

    /// Fetch the full record for one place identifier
    async fn place_details(&self, place_id: &str) -> Result<PlaceDetailsResponse, PlacesError>;
}

/// Google Places API client
/// DOCUMENTATION: Handles authentication and API calls to Google Places
pub struct GooglePlacesClient {
    /// HTTP client for making requests
    client: Client,
    /// Google Places API key
    api_key: String,
    /// Base URL for Google Places API
    base_url: String,
}

impl GooglePlacesClient {
    /// Create new Google Places API client
    pub fn new(api_key: String) -> Self {
        Self {
            client: Client::new(),
            api_key,
            base_url: "https://maps.googleapis.com/maps/api/place".to_string(),
        }
    }
}

#[async_trait]
impl PlacesApi for GooglePlacesClient {
    /// Perform nearby search for places
    /// DOCUMENTATION: Searches for places near a geographic point
    ///
    /// # Arguments
    /// * `latitude` - Center point latitude
    /// * `longitude` - Center point longitude
    /// * `place_type` - Service category filter (e.g., "hospital", "pharmacy")
    /// * `radius` - Search radius in meters (max 50000)
    ///
    /// # Returns
    /// Decoded response envelope; the status field is not interpreted here
    async fn nearby_search(
        &self,
        latitude: f64,
        longitude: f64,
        place_type: &str,
        radius: u32,
    ) -> Result<NearbySearchResponse, PlacesError> {
        let url = format!("{}/nearbysearch/json", self.base_url);

        let mut params = HashMap::new();
        params.insert("location", format!("{},{}", latitude, longitude));
        params.insert("radius", radius.to_string());
        params.insert("type", place_type.to_string());
        params.insert("key", self.api_key.clone());

        log::debug!(
            "Places nearby search: lat={}, lng={}, type={}, radius={}",
            latitude,
            longitude,
            place_type,
            radius
        );

        let response = self
            .client
            .get(&url)
            .query(&params)
            .send()
            .await
            .map_err(|e| {
                log::error!("Places API request failed: {}", e);
                PlacesError::ExternalApiError(format!("Request failed: {}", e))
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            log::error!("Places API error {}: {}", status, body);
            return Err(PlacesError::ExternalApiError(format!(
                "API error {}: {}",
                status, body
            )));
        }

        let api_response: NearbySearchResponse = response.json().await.map_err(|e| {
            log::error!("Failed to parse nearby search response: {}", e);
            PlacesError::DecodeError(format!("Parse error: {}", e))
        })?;

        if api_response.is_ok() {
            log::info!(
                "Places nearby search returned {} results",
                api_response.results.len()
            );
        } else {
            log::warn!(
                "Places nearby search returned status: {}",
                api_response.status
            );
        }

        Ok(api_response)
    }

    /// Get detailed information about a specific place
    /// DOCUMENTATION: Retrieves detailed place information by place_id
    async fn place_details(&self, place_id: &str) -> Result<PlaceDetailsResponse, PlacesError> {
        let url = format!("{}/details/json", self.base_url);

        let params = [
            ("place_id", place_id),
            ("fields", DETAILS_FIELDS),
            ("key", &self.api_key),
        ];

        log::debug!("Places details lookup: place_id={}", place_id);

        let response = self
            .client
            .get(&url)
            .query(&params)
            .send()
            .await
            .map_err(|e| {
                log::error!("Places details request failed: {}", e);
                PlacesError::ExternalApiError(format!("Request failed: {}", e))
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            log::error!("Places API error {}: {}", status, body);
            return Err(PlacesError::ExternalApiError(format!(
                "API error {}: {}",
                status, body
            )));
        }

        let api_response: PlaceDetailsResponse = response.json().await.map_err(|e| {
            log::error!("Failed to parse details response: {}", e);
            PlacesError::DecodeError(format!("Parse error: {}", e))
        })?;

        if !api_response.is_ok() {
            log::warn!(
                "Places details lookup returned status: {}",
                api_response.status
            );
        }

        Ok(api_response)
    }
}

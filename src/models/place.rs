// src/models/place.rs
// DOCUMENTATION: Data transfer objects for Places API requests and responses
// PURPOSE: Defines all serialization/deserialization models for the gateway

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Geographic coordinates from the Places API
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct LatLng {
    /// Latitude
    pub lat: f64,
    /// Longitude
    pub lng: f64,
}

/// Geometry wrapper around a place location
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Geometry {
    /// Location coordinates
    pub location: LatLng,
}

/// Opening hours metadata
/// Nearby search responses carry only the open/closed flag; details
/// responses add the weekly text schedule.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct OpeningHours {
    /// Whether the place is currently open
    pub open_now: Option<bool>,
    /// Human-readable schedule, one line per weekday
    pub weekday_text: Option<Vec<String>>,
}

/// User review from a place details response
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct PlaceReview {
    /// Review author name
    pub author_name: Option<String>,
    /// Rating (1-5)
    pub rating: Option<i32>,
    /// Review text
    pub text: Option<String>,
    /// Time of review (Unix timestamp)
    pub time: Option<i64>,
    /// Relative time description (e.g., "a month ago")
    pub relative_time_description: Option<String>,
    /// Profile photo URL
    pub profile_photo_url: Option<String>,
}

/// Photo reference from a place details response
/// The reference is resolved to an image URL by the consumer; the gateway
/// does not proxy photo fetches.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct PlacePhoto {
    /// Photo reference (used to fetch the actual photo)
    pub photo_reference: String,
    /// Photo width in pixels
    pub width: Option<i32>,
    /// Photo height in pixels
    pub height: Option<i32>,
    /// HTML attributions required by the API terms
    pub html_attributions: Option<Vec<String>>,
}

/// Place summary from a nearby search
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct PlaceSummary {
    /// Opaque unique place identifier
    pub place_id: String,
    /// Display name
    pub name: String,
    /// Coarse address (short form)
    pub vicinity: Option<String>,
    /// Category type tags (e.g., ["hospital", "health"])
    #[serde(default)]
    pub types: Vec<String>,
    /// Geographic location
    pub geometry: Geometry,
    /// Rating (0-5)
    pub rating: Option<f32>,
    /// Number of user ratings
    pub user_ratings_total: Option<i32>,
    /// Open/closed indicator
    pub opening_hours: Option<OpeningHours>,
    /// Phone number (formatted for local use)
    pub formatted_phone_number: Option<String>,
    /// Business status (OPERATIONAL, CLOSED_TEMPORARILY, etc.)
    pub business_status: Option<String>,
}

/// Full place record from a details lookup
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct PlaceDetails {
    /// Opaque unique place identifier
    pub place_id: Option<String>,
    /// Display name
    pub name: String,
    /// Full formatted address
    pub formatted_address: Option<String>,
    /// Phone number (formatted for local use)
    pub formatted_phone_number: Option<String>,
    /// Website URL
    pub website: Option<String>,
    /// Rating (0-5)
    pub rating: Option<f32>,
    /// Number of user ratings
    pub user_ratings_total: Option<i32>,
    /// Category type tags
    #[serde(default)]
    pub types: Vec<String>,
    /// Geographic location
    pub geometry: Option<Geometry>,
    /// Opening hours with weekly text schedule
    pub opening_hours: Option<OpeningHours>,
    /// User reviews (the API returns at most five)
    pub reviews: Option<Vec<PlaceReview>>,
    /// Photo references
    pub photos: Option<Vec<PlacePhoto>>,
}

/// Response envelope for a nearby search
/// The status discriminator is returned to the caller as data; "OK" is the
/// only success value. Non-success responses omit the results array.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct NearbySearchResponse {
    /// Results array from the API
    #[serde(default)]
    pub results: Vec<PlaceSummary>,
    /// Status of the API call
    pub status: String,
    /// Error message (if status is not OK)
    pub error_message: Option<String>,
}

impl NearbySearchResponse {
    /// Whether the remote API reported success
    pub fn is_ok(&self) -> bool {
        self.status == "OK"
    }
}

/// Response envelope for a place details lookup
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct PlaceDetailsResponse {
    /// Detail record (absent when status is not OK)
    pub result: Option<PlaceDetails>,
    /// Status of the API call
    pub status: String,
    /// Error message (if status is not OK)
    pub error_message: Option<String>,
}

impl PlaceDetailsResponse {
    /// Whether the remote API reported success
    pub fn is_ok(&self) -> bool {
        self.status == "OK"
    }
}

/// Query parameters for GET /places/search
#[derive(Debug, Deserialize, Validate)]
pub struct SearchQuery {
    /// Center point latitude
    #[validate(range(min = -90.0, max = 90.0))]
    pub lat: f64,

    /// Center point longitude
    #[validate(range(min = -180.0, max = 180.0))]
    pub lng: f64,

    /// Service category (e.g., "hospital", "pharmacy", "police")
    #[serde(rename = "type")]
    #[validate(length(min = 1, max = 64))]
    pub type_: String,

    /// Search radius in meters (default 5000, API maximum 50000)
    #[validate(range(min = 1, max = 50000))]
    pub radius: Option<u32>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserialize_nearby_search_response() {
        let body = r#"{
            "results": [{
                "place_id": "ChIJabc123",
                "name": "City Hospital",
                "vicinity": "12 Main St",
                "types": ["hospital", "health"],
                "geometry": {"location": {"lat": 37.001, "lng": -122.002}},
                "rating": 4.2,
                "user_ratings_total": 87,
                "opening_hours": {"open_now": true}
            }],
            "status": "OK"
        }"#;

        let response: NearbySearchResponse = serde_json::from_str(body).unwrap();

        assert!(response.is_ok());
        assert_eq!(response.results.len(), 1);
        let place = &response.results[0];
        assert_eq!(place.place_id, "ChIJabc123");
        assert_eq!(place.vicinity.as_deref(), Some("12 Main St"));
        assert_eq!(place.geometry.location.lat, 37.001);
        assert_eq!(place.opening_hours.as_ref().unwrap().open_now, Some(true));
        assert!(place.formatted_phone_number.is_none());
    }

    #[test]
    fn non_ok_response_defaults_to_empty_results() {
        let body = r#"{"status": "REQUEST_DENIED", "error_message": "The provided API key is invalid."}"#;

        let response: NearbySearchResponse = serde_json::from_str(body).unwrap();

        assert!(!response.is_ok());
        assert!(response.results.is_empty());
        assert_eq!(
            response.error_message.as_deref(),
            Some("The provided API key is invalid.")
        );
    }

    #[test]
    fn deserialize_details_response() {
        let body = r#"{
            "result": {
                "place_id": "ChIJabc123",
                "name": "City Hospital",
                "formatted_address": "12 Main St, Springfield",
                "formatted_phone_number": "+1 555-0134",
                "website": "https://cityhospital.example",
                "rating": 4.2,
                "types": ["hospital"],
                "geometry": {"location": {"lat": 37.001, "lng": -122.002}},
                "opening_hours": {
                    "open_now": false,
                    "weekday_text": ["Monday: Open 24 hours"]
                },
                "reviews": [{"author_name": "Ana", "rating": 5, "text": "Fast ER", "time": 1700000000}],
                "photos": [{"photo_reference": "ref-1", "width": 800, "height": 600}]
            },
            "status": "OK"
        }"#;

        let response: PlaceDetailsResponse = serde_json::from_str(body).unwrap();

        assert!(response.is_ok());
        let details = response.result.unwrap();
        assert_eq!(details.website.as_deref(), Some("https://cityhospital.example"));
        assert_eq!(
            details.opening_hours.unwrap().weekday_text.unwrap()[0],
            "Monday: Open 24 hours"
        );
        assert_eq!(details.reviews.unwrap().len(), 1);
        assert_eq!(details.photos.unwrap()[0].photo_reference, "ref-1");
    }

    #[test]
    fn details_response_without_result() {
        let body = r#"{"status": "ZERO_RESULTS"}"#;

        let response: PlaceDetailsResponse = serde_json::from_str(body).unwrap();

        assert!(!response.is_ok());
        assert!(response.result.is_none());
    }

    // The map screen consumes an externally-serialized summary list
    #[test]
    fn summary_list_round_trips_through_json() {
        let places = vec![PlaceSummary {
            place_id: "ChIJabc123".to_string(),
            name: "City Hospital".to_string(),
            vicinity: Some("12 Main St".to_string()),
            types: vec!["hospital".to_string()],
            geometry: Geometry {
                location: LatLng { lat: 37.001, lng: -122.002 },
            },
            rating: Some(4.2),
            user_ratings_total: Some(87),
            opening_hours: Some(OpeningHours { open_now: Some(true), weekday_text: None }),
            formatted_phone_number: None,
            business_status: None,
        }];

        let serialized = serde_json::to_string(&places).unwrap();
        let decoded: Vec<PlaceSummary> = serde_json::from_str(&serialized).unwrap();

        assert_eq!(decoded, places);
    }

    #[test]
    fn search_query_validation() {
        let valid = SearchQuery {
            lat: 37.0,
            lng: -122.0,
            type_: "hospital".to_string(),
            radius: Some(5000),
        };
        assert!(valid.validate().is_ok());

        let bad_latitude = SearchQuery { lat: 95.0, ..valid_query() };
        assert!(bad_latitude.validate().is_err());

        let empty_type = SearchQuery { type_: String::new(), ..valid_query() };
        assert!(empty_type.validate().is_err());

        let zero_radius = SearchQuery { radius: Some(0), ..valid_query() };
        assert!(zero_radius.validate().is_err());
    }

    fn valid_query() -> SearchQuery {
        SearchQuery {
            lat: 37.0,
            lng: -122.0,
            type_: "hospital".to_string(),
            radius: None,
        }
    }
}

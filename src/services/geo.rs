// src/services/geo.rs
// DOCUMENTATION: Client-side distance helpers
// PURPOSE: Order an already-fetched result list by distance from the query point

use crate::models::PlaceSummary;

/// Mean Earth radius in kilometers
const EARTH_RADIUS_KM: f64 = 6371.0;

/// Great-circle distance between two coordinates in kilometers
pub fn haversine_km(lat1: f64, lng1: f64, lat2: f64, lng2: f64) -> f64 {
    let d_lat = (lat2 - lat1).to_radians();
    let d_lng = (lng2 - lng1).to_radians();

    let a = (d_lat / 2.0).sin().powi(2)
        + lat1.to_radians().cos() * lat2.to_radians().cos() * (d_lng / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_KM * c
}

/// Sort fetched place summaries by distance from the query point, nearest
/// first. A single pass over a small result set, not spatial search.
pub fn sort_by_distance(places: &mut [PlaceSummary], latitude: f64, longitude: f64) {
    places.sort_by(|a, b| {
        let dist_a = haversine_km(
            latitude,
            longitude,
            a.geometry.location.lat,
            a.geometry.location.lng,
        );
        let dist_b = haversine_km(
            latitude,
            longitude,
            b.geometry.location.lat,
            b.geometry.location.lng,
        );
        dist_a.total_cmp(&dist_b)
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Geometry, LatLng};

    fn place_at(name: &str, lat: f64, lng: f64) -> PlaceSummary {
        PlaceSummary {
            place_id: format!("id-{}", name),
            name: name.to_string(),
            vicinity: None,
            types: vec!["hospital".to_string()],
            geometry: Geometry {
                location: LatLng { lat, lng },
            },
            rating: None,
            user_ratings_total: None,
            opening_hours: None,
            formatted_phone_number: None,
            business_status: None,
        }
    }

    #[test]
    fn haversine_of_identical_points_is_zero() {
        assert_eq!(haversine_km(37.0, -122.0, 37.0, -122.0), 0.0);
    }

    #[test]
    fn haversine_matches_known_distance() {
        // Madrid to Barcelona, roughly 505 km
        let distance = haversine_km(40.4168, -3.7038, 41.3874, 2.1686);
        assert!(
            (500.0..512.0).contains(&distance),
            "unexpected distance: {}",
            distance
        );
    }

    #[test]
    fn sorts_nearest_first() {
        let mut places = vec![
            place_at("far", 37.5, -122.0),
            place_at("near", 37.01, -122.0),
            place_at("mid", 37.05, -122.0),
        ];

        sort_by_distance(&mut places, 37.0, -122.0);

        let names: Vec<&str> = places.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["near", "mid", "far"]);
    }
}

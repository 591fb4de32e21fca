// src/handlers/places.rs
// DOCUMENTATION: HTTP handlers for place lookups
// PURPOSE: Parse requests, call the gateway, return responses

use crate::errors::PlacesError;
use crate::models::SearchQuery;
use crate::services::{sort_by_distance, PlacesGateway, DEFAULT_SEARCH_RADIUS_M};
use actix_web::{web, HttpResponse, Responder};
use std::sync::Arc;
use validator::Validate;

/// GET /places/search
/// Find places near a coordinate (from the places API with shared caching)
///
/// The response body carries the remote status discriminator as data;
/// consumers decide how to present a non-"OK" status. Successful result
/// lists are ordered nearest-first.
pub async fn search_places(
    gateway: web::Data<Arc<PlacesGateway>>,
    query: web::Query<SearchQuery>,
) -> Result<impl Responder, PlacesError> {
    let query = query.into_inner();
    if let Err(e) = query.validate() {
        return Err(PlacesError::ValidationError(e.to_string()));
    }

    let radius = query.radius.unwrap_or(DEFAULT_SEARCH_RADIUS_M);
    let mut response = gateway
        .search_nearby(query.lat, query.lng, &query.type_, radius)
        .await?;

    if response.is_ok() {
        sort_by_distance(&mut response.results, query.lat, query.lng);
    }

    Ok(HttpResponse::Ok().json(response))
}

/// GET /places/{place_id}
/// Retrieve full details for one place identifier
pub async fn get_place_details(
    gateway: web::Data<Arc<PlacesGateway>>,
    path: web::Path<String>,
) -> Result<impl Responder, PlacesError> {
    let place_id = path.into_inner();
    if place_id.trim().is_empty() {
        return Err(PlacesError::InvalidInput(
            "place_id must not be empty".to_string(),
        ));
    }

    let response = gateway.get_details(&place_id).await?;
    Ok(HttpResponse::Ok().json(response))
}

/// Configuration for place routes
pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/places")
            .route("/search", web::get().to(search_places))
            .route("/{place_id}", web::get().to(get_place_details)),
    );
}

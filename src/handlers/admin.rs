// src/handlers/admin.rs
// DOCUMENTATION: Admin handlers for cache management
// PURPOSE: Expose cache invalidation and statistics via REST endpoints

use crate::config::Config;
use crate::errors::PlacesError;
use crate::services::PlacesGateway;
use actix_web::{web, HttpRequest, HttpResponse, Responder};
use std::sync::Arc;

/// POST /admin/cache/clear
/// Remove every cached response unconditionally
///
/// DOCUMENTATION: Manual cache invalidation; the gateway never clears the
/// cache on its own. Requires admin authentication via X-Admin-Token header.
pub async fn clear_cache(
    gateway: web::Data<Arc<PlacesGateway>>,
    config: web::Data<Config>,
    req: HttpRequest,
) -> Result<impl Responder, PlacesError> {
    verify_admin_token(&req, &config)?;

    let stats = gateway.cache_stats().await;
    gateway.clear_cache().await;

    log::info!("Admin cache clear: {} entries removed", stats.total_entries);

    Ok(HttpResponse::Ok().json(serde_json::json!({
        "message": "Cache cleared",
        "entries_removed": stats.total_entries,
    })))
}

/// GET /admin/cache/stats
/// Get cache occupancy statistics
pub async fn cache_stats(
    gateway: web::Data<Arc<PlacesGateway>>,
    config: web::Data<Config>,
    req: HttpRequest,
) -> Result<impl Responder, PlacesError> {
    verify_admin_token(&req, &config)?;

    let stats = gateway.cache_stats().await;
    Ok(HttpResponse::Ok().json(stats))
}

/// Helper function to verify admin authentication
/// DOCUMENTATION: Checks X-Admin-Token header against configured admin token
fn verify_admin_token(req: &HttpRequest, config: &Config) -> Result<(), PlacesError> {
    let token = req
        .headers()
        .get("X-Admin-Token")
        .and_then(|h| h.to_str().ok())
        .ok_or_else(|| {
            log::warn!("Admin request without token");
            PlacesError::Unauthorized
        })?;

    if token != config.admin_token {
        log::warn!("Admin request with invalid token");
        return Err(PlacesError::Forbidden);
    }

    Ok(())
}

/// Configuration for admin routes
pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/admin")
            .route("/cache/clear", web::post().to(clear_cache))
            .route("/cache/stats", web::get().to(cache_stats)),
    );
}

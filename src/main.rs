// src/main.rs
// DOCUMENTATION: Application entry point
// PURPOSE: Initialize config, the places gateway, and start HTTP server

mod config;
mod errors;
mod handlers;
mod models;
mod services;

use actix_web::{middleware::Logger, web, App, HttpServer};
use config::Config;
use dotenv::dotenv;
use services::{GooglePlacesClient, PlacesGateway};
use std::io;
use std::sync::Arc;
use std::time::Duration;

#[actix_web::main]
async fn main() -> io::Result<()> {
    // 1. Load environment variables
    dotenv().ok();

    // 2. Load configuration
    let config = Config::from_env();
    if let Err(e) = config.validate() {
        eprintln!("Configuration error: {}", e);
        std::process::exit(1);
    }

    // 3. Initialize logging
    if std::env::var("RUST_LOG").is_err() {
        // Use configured log level or default
        let log_level = if !config.log_level.is_empty() {
            &config.log_level
        } else {
            "info,actix_web=info"
        };
        std::env::set_var("RUST_LOG", log_level);
    }
    env_logger::init();

    log::info!("Starting nearby-places gateway...");
    log::info!("Environment: {}", config.environment);
    log::info!(
        "Server Address: {}:{}",
        config.server_address,
        config.server_port
    );

    // 4. Initialize the places gateway (process-wide cache and pacing state)
    let api = Arc::new(GooglePlacesClient::new(config.google_places_api_key.clone()));
    let gateway = Arc::new(PlacesGateway::with_api(
        api,
        Duration::from_secs(config.cache_ttl_secs),
        Duration::from_millis(config.min_request_interval_ms),
    ));
    log::info!(
        "Initialized places gateway (cache TTL: {}s, request spacing: {}ms)",
        config.cache_ttl_secs,
        config.min_request_interval_ms
    );

    // 5. Start HTTP server
    let server_addr = format!("{}:{}", config.server_address, config.server_port);
    let config_clone = config.clone();

    HttpServer::new(move || {
        App::new()
            // Application state (config and the shared gateway)
            .app_data(web::Data::new(config_clone.clone()))
            .app_data(web::Data::new(gateway.clone()))
            // Middleware
            .wrap(Logger::default())
            .wrap(actix_web::middleware::Compress::default())
            // Routes
            .configure(handlers::health_config)
            .configure(handlers::places_config)
            .configure(handlers::admin_config)
    })
    .bind(&server_addr)?
    .run()
    .await
}

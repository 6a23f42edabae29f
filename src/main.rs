//! # TinyLink
//!
//! A tiny ownership-scoped URL shortener built with Rust and Actix-web.
//!
//! ## Features
//! - Register and log in with email + password (argon2 digests)
//! - Signed HttpOnly session cookies
//! - Create, edit, and delete the short URLs you own
//! - Public redirect path for anyone holding a short link
//! - Rate limiting for abuse protection

mod auth;
mod config;
mod constants;
mod errors;
mod handlers;
mod models;
mod services;
mod store;
mod test_utils;

use actix_governor::{Governor, GovernorConfigBuilder};
use actix_web::{middleware::Logger, web, App, HttpServer};
use log::info;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Initialize environment variables from .env file
    dotenv::dotenv().ok();

    // Initialize logger
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    // Load configuration
    let config = config::Config::from_env();

    // Build the in-memory store and seed it with demo data
    let store = store::Store::new();
    if config.seed_demo_data {
        store::seed_demo_data(&store).expect("Failed to seed demo data");
    }
    let store = web::Data::new(store);

    info!(
        "Starting TinyLink server at http://{}:{}",
        config.host, config.port
    );
    info!("Routes:");
    info!("   GET  /register             - registration form");
    info!("   POST /register             - create account, start session");
    info!("   GET  /login                - login form");
    info!("   POST /login                - verify credentials, start session");
    info!("   POST /logout               - clear session");
    info!("   GET  /urls                 - list your short URLs");
    info!("   GET  /urls/new             - creation form");
    info!("   POST /urls                 - create a short URL");
    info!("   GET  /urls/{{code}}          - show one of your short URLs");
    info!("   POST /urls/{{code}}          - edit the long URL");
    info!("   POST /urls/{{code}}/delete   - delete a short URL");
    info!("   GET  /u/{{code}}             - public redirect");

    // Capture bind address before moving config into closure
    let bind_addr = format!("{}:{}", config.host, config.port);

    // Configure rate limiting: 60 requests per minute per IP
    let governor_conf = GovernorConfigBuilder::default()
        .per_second(1)
        .burst_size(60)
        .finish()
        .expect("Failed to create rate limiter configuration");

    info!("Rate limiting enabled: 60 requests/minute per IP");

    let config = web::Data::new(config);

    // Start HTTP server
    HttpServer::new(move || {
        App::new()
            // Share the store and configuration with handlers
            .app_data(store.clone())
            .app_data(config.clone())
            // Enable rate limiting middleware
            .wrap(Governor::new(&governor_conf))
            // Enable logger middleware
            .wrap(Logger::default())
            // Configure routes
            .configure(handlers::configure_routes)
    })
    .bind(&bind_addr)?
    .run()
    .await
}

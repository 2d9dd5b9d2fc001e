//! Top-level router configuration combining page and API routes.
//!
//! # Route Structure
//!
//! - `GET  /`               - Landing page
//! - `GET  /e4x`            - Book microsite
//! - `GET  /e4x/pilot-kit`  - Pilot-kit download page
//! - `GET  /og/e4x`         - Social-preview card (PNG)
//! - `GET  /health`         - Health check: mailer, OG card
//! - `POST /api/contact`    - Contact-form relay
//! - `/downloads/*`         - Static pilot-kit files
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Rate limiting** - Per-IP token bucket, stricter on the contact API
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::handlers::{health_handler, og_image_handler};
use crate::api::middleware::{rate_limit, tracing};
use crate::state::AppState;
use crate::web;
use axum::Router;
use axum::routing::get;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};
use tower_http::services::ServeDir;

/// Constructs the application router with all routes and middleware.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    let api_router = api::routes::routes().layer(rate_limit::secure_layer());

    let web_router = web::routes::public_routes().layer(rate_limit::layer());

    let router = Router::new()
        .route("/health", get(health_handler))
        .route("/og/e4x", get(og_image_handler))
        .nest("/api", api_router)
        .merge(web_router)
        .nest_service("/downloads", ServeDir::new("static/downloads"))
        .with_state(state)
        .layer(tracing::layer());

    NormalizePathLayer::trim_trailing_slash().layer(router)
}

//! Public page route configuration.

use crate::state::AppState;
use crate::web::handlers::{e4x_handler, home_handler, pilot_kit_handler};
use axum::{Router, routing::get};

/// Server-rendered pages, all public.
///
/// # Endpoints
///
/// - `GET /` - Consolidated landing page
/// - `GET /e4x` - Book microsite
/// - `GET /e4x/pilot-kit` - Pilot-kit download page
pub fn public_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(home_handler))
        .route("/e4x", get(e4x_handler))
        .route("/e4x/pilot-kit", get(pilot_kit_handler))
}

//! Handler for the Open Graph card endpoint.

use axum::{
    extract::State,
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use tracing::error;

use crate::state::AppState;

/// Serves the social-preview card for the E4X microsite.
///
/// # Endpoint
///
/// `GET /og/e4x`
///
/// Takes no parameters; the composition is fixed, so the response carries a
/// long-lived cache header.
///
/// # Errors
///
/// Returns `500` with a plain-text body when the card cannot be encoded.
pub async fn og_image_handler(State(state): State<AppState>) -> Response {
    match state.og_card.render_png() {
        Ok(png) => {
            metrics::counter!("og_card_renders_total").increment(1);
            (
                [
                    (header::CONTENT_TYPE, "image/png"),
                    (
                        header::CACHE_CONTROL,
                        "public, max-age=86400, stale-while-revalidate=604800",
                    ),
                ],
                png,
            )
                .into_response()
        }
        Err(e) => {
            error!("Failed to generate OG image: {:#}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, "Failed to generate image").into_response()
        }
    }
}

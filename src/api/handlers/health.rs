//! Handler for health check endpoint.

use axum::{Json, extract::State, http::StatusCode};

use crate::api::dto::health::{CheckStatus, HealthChecks, HealthResponse};
use crate::state::AppState;

/// Returns service health status with component checks.
///
/// # Endpoint
///
/// `GET /health`
///
/// # Response Codes
///
/// - **200 OK**: All components healthy
/// - **503 Service Unavailable**: One or more components degraded
///
/// # Components Checked
///
/// 1. **Mailer**: Whether the contact relay is ready to deliver
/// 2. **OG card**: Whether the social card renders with its text layers
pub async fn health_handler(
    State(state): State<AppState>,
) -> Result<Json<HealthResponse>, (StatusCode, Json<HealthResponse>)> {
    let mailer_check = check_mailer(&state).await;
    let og_check = check_og_card(&state);

    let all_healthy = mailer_check.status == "ok" && og_check.status == "ok";

    let response = HealthResponse {
        status: if all_healthy { "healthy" } else { "degraded" }.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        checks: HealthChecks {
            mailer: mailer_check,
            og_card: og_check,
        },
    };

    if all_healthy {
        Ok(Json(response))
    } else {
        Err((StatusCode::SERVICE_UNAVAILABLE, Json(response)))
    }
}

/// Checks whether the contact relay is operational.
async fn check_mailer(state: &AppState) -> CheckStatus {
    if state.mailer.health_check().await {
        CheckStatus {
            status: "ok".to_string(),
            message: Some("Relay ready".to_string()),
        }
    } else {
        CheckStatus {
            status: "error".to_string(),
            message: Some("Relay unavailable".to_string()),
        }
    }
}

/// Reports whether the social card renders with text layers.
fn check_og_card(state: &AppState) -> CheckStatus {
    let message = if state.og_card.has_font() {
        "Text layers enabled"
    } else {
        "Text layers disabled (no font configured)"
    };

    CheckStatus {
        status: "ok".to_string(),
        message: Some(message.to_string()),
    }
}

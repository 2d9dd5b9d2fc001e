//! E4X book microsite handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::{RawQuery, State};
use axum::response::IntoResponse;

use crate::attribution::{QueryParams, rewrite_href};
use crate::state::AppState;
use crate::utils::mailto::mailto_link;

/// Template for the E4X page.
///
/// The hero section carries the region id the sticky call-to-action
/// controller observes; the sticky bar offers the pilot kit plus either a
/// preorder link (when configured) or a launch-updates mailto.
#[derive(Template, WebTemplate)]
#[template(path = "e4x.html")]
struct E4xTemplate {
    base_url: String,
    home_href: String,
    pilot_kit_href: String,
    updates_mailto: String,
    preorder_url: Option<String>,
}

/// Renders the E4X microsite page.
///
/// # Endpoint
///
/// `GET /e4x`
pub async fn e4x_handler(
    State(state): State<AppState>,
    RawQuery(query): RawQuery,
) -> impl IntoResponse {
    let current = QueryParams::from_query(query.as_deref().unwrap_or(""));

    E4xTemplate {
        base_url: state.site.base_url.clone(),
        home_href: rewrite_href("/", &current),
        pilot_kit_href: rewrite_href("/e4x/pilot-kit", &current),
        updates_mailto: mailto_link(
            &state.site.contact_recipient,
            "E4X | Launch updates",
            "Hi Gregor,\n\nPlease add me to E4X launch updates.\n\nName:\nOrganization:\nRole:\n",
        ),
        preorder_url: state.site.preorder_url.clone(),
    }
}

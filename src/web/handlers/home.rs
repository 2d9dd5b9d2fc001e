//! Landing page handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::{RawQuery, State};
use axum::response::IntoResponse;

use crate::attribution::{QueryParams, rewrite_href};
use crate::state::AppState;
use crate::utils::mailto::mailto_link;

/// Template for the consolidated landing page.
///
/// The historical homepage variants collapse into this single template;
/// navigational hrefs are rewritten per request so campaign parameters
/// follow the visitor into the microsite.
#[derive(Template, WebTemplate)]
#[template(path = "home.html")]
struct HomeTemplate {
    base_url: String,
    e4x_href: String,
    pilot_kit_href: String,
    contact_mailto: String,
}

/// Renders the landing page.
///
/// # Endpoint
///
/// `GET /`
pub async fn home_handler(
    State(state): State<AppState>,
    RawQuery(query): RawQuery,
) -> impl IntoResponse {
    let current = QueryParams::from_query(query.as_deref().unwrap_or(""));

    HomeTemplate {
        base_url: state.site.base_url.clone(),
        e4x_href: rewrite_href("/e4x", &current),
        pilot_kit_href: rewrite_href("/e4x/pilot-kit", &current),
        contact_mailto: mailto_link(
            &state.site.contact_recipient,
            "Advisory | Inquiry",
            "Hi Gregor,\n\nI'd like to discuss an engagement.\n\nName:\nOrganization:\nRole:\n",
        ),
    }
}

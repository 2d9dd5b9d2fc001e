//! E4X pilot-kit download page handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::{RawQuery, State};
use axum::response::IntoResponse;

use crate::attribution::{QueryParams, rewrite_href};
use crate::state::AppState;
use crate::utils::mailto::mailto_link;

/// One downloadable tool on the pilot-kit page.
struct Download {
    title: &'static str,
    description: &'static str,
    href: &'static str,
}

/// The pilot-kit toolset.
static DOWNLOADS: [Download; 3] = [
    Download {
        title: "4W Near-Miss & Risk Log",
        description: "4-week bow-tie style log to capture weak signals early, assign owners & dates, and close actions fast",
        href: "/downloads/e4x-4w-log.pdf",
    },
    Download {
        title: "Dark-Corners Visits Guide",
        description: "Show up off-shift, ask three honest questions, fix one thing fast",
        href: "/downloads/e4x-dark-corners.pdf",
    },
    Download {
        title: "Weekly Threats & Opportunities Review",
        description: "30-60 minute forum to keep hazards visible, assign proportionate actions, and close the loop",
        href: "/downloads/e4x-weekly-tor.pdf",
    },
];

/// Template for the pilot-kit page.
#[derive(Template, WebTemplate)]
#[template(path = "pilot_kit.html")]
struct PilotKitTemplate {
    back_href: String,
    questions_mailto: String,
    downloads: &'static [Download],
}

/// Renders the pilot-kit download page.
///
/// # Endpoint
///
/// `GET /e4x/pilot-kit`
pub async fn pilot_kit_handler(
    State(state): State<AppState>,
    RawQuery(query): RawQuery,
) -> impl IntoResponse {
    let current = QueryParams::from_query(query.as_deref().unwrap_or(""));

    PilotKitTemplate {
        back_href: rewrite_href("/e4x", &current),
        questions_mailto: mailto_link(
            &state.site.contact_recipient,
            "E4X | Pilot Kit question",
            "Hi Gregor,\n\nI have a question about the pilot kit.\n",
        ),
        downloads: &DOWNLOADS,
    }
}

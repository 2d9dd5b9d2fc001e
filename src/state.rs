//! Shared application state injected into handlers.

use std::sync::Arc;

use crate::infrastructure::mailer::Mailer;
use crate::og::OgCard;

/// Shared state available to every handler.
#[derive(Clone)]
pub struct AppState {
    /// Contact-form relay.
    pub mailer: Arc<dyn Mailer>,
    /// Social-preview card renderer.
    pub og_card: Arc<OgCard>,
    /// Page-facing site settings.
    pub site: SiteConfig,
}

/// Site settings the page and API handlers need at render time.
#[derive(Debug, Clone)]
pub struct SiteConfig {
    /// Canonical site origin, without a trailing slash.
    pub base_url: String,
    /// Fixed recipient of contact submissions and mailto links.
    pub contact_recipient: String,
    /// Sender address on relayed submissions.
    pub contact_from: String,
    /// Preorder page URL; the preorder action renders only when set.
    pub preorder_url: Option<String>,
}

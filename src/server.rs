//! HTTP server initialization and runtime setup.
//!
//! Handles mailer selection, social-card font loading, and Axum server
//! lifecycle.

use crate::config::Config;
use crate::infrastructure::mailer::{Mailer, NullMailer, ResendMailer};
use crate::og::OgCard;
use crate::routes::app_router;
use crate::state::{AppState, SiteConfig};

use anyhow::Result;
use axum::ServiceExt;
use axum::extract::Request;
use std::net::SocketAddr;
use std::sync::Arc;

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - Mail relay (Resend, or log-only fallback)
/// - Social-card renderer with the configured font
/// - Axum HTTP server
///
/// # Errors
///
/// Returns an error if:
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let mailer: Arc<dyn Mailer> = match &config.resend_api_key {
        Some(api_key) => match ResendMailer::new(api_key.clone()) {
            Ok(resend) => {
                tracing::info!("Mail delivery enabled (Resend)");
                Arc::new(resend)
            }
            Err(e) => {
                tracing::warn!("Failed to initialize Resend client: {}. Using NullMailer.", e);
                Arc::new(NullMailer::new())
            }
        },
        None => {
            tracing::info!("Mail delivery disabled (NullMailer)");
            Arc::new(NullMailer::new())
        }
    };

    let font_data = config.og_font_path.as_ref().and_then(|path| {
        match std::fs::read(path) {
            Ok(bytes) => Some(bytes),
            Err(e) => {
                tracing::warn!(
                    "Failed to read OG font {}: {}. Text layers disabled.",
                    path.display(),
                    e
                );
                None
            }
        }
    });
    let og_card = Arc::new(OgCard::new(font_data));

    let state = AppState {
        mailer,
        og_card,
        site: SiteConfig {
            base_url: config.site_base_url.clone(),
            contact_recipient: config.contact_recipient.clone(),
            contact_from: config.contact_from.clone(),
            preorder_url: config.preorder_url.clone(),
        },
    };

    let app = app_router(state);

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(
        listener,
        ServiceExt::<Request>::into_make_service_with_connect_info::<SocketAddr>(app),
    )
    .await?;

    Ok(())
}

//! # Advisory Site
//!
//! Marketing site service for a consulting practice, built with Axum.
//!
//! ## Architecture
//!
//! The crate keeps a clear layer separation:
//!
//! - **Core utilities** ([`attribution`], [`cta`]) - Campaign-attribution
//!   link rewriting and the sticky call-to-action controller
//! - **Infrastructure Layer** ([`infrastructure`]) - Transactional-email relay
//! - **API Layer** ([`api`]) - Contact, health and Open Graph endpoints,
//!   DTOs, and middleware
//! - **Web Layer** ([`web`]) - Server-rendered public pages
//! - **Card composition** ([`og`]) - Deterministic social-preview imagery
//!
//! ## Features
//!
//! - Campaign parameters survive the nav → microsite → pilot-kit funnel
//!   without clobbering per-card analytics tags
//! - Contact-form relay with a log-only fallback for keyless environments
//! - Fixed-layout 1200x630 Open Graph card rendered on demand
//! - Rate limiting and structured request logging
//!
//! ## Quick Start
//!
//! ```bash
//! # Optional: enable real mail delivery
//! export RESEND_API_KEY="re_..."
//!
//! # Start the service
//! cargo run
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via
//! [`config::Config`]. See [`config`] module for available options.

pub mod api;
pub mod attribution;
pub mod cta;
pub mod error;
pub mod infrastructure;
pub mod og;
pub mod state;
pub mod utils;
pub mod web;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::attribution::{ATTRIBUTION_PARAMS, QueryParams, rewrite_href};
    pub use crate::cta::{CtaState, StickyCta};
    pub use crate::error::AppError;
    pub use crate::infrastructure::mailer::{Mailer, NullMailer, OutgoingEmail};
    pub use crate::og::OgCard;
    pub use crate::state::{AppState, SiteConfig};
}

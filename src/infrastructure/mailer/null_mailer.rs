//! Log-only mailer for deployments without a provider key.

use super::service::{Mailer, MailerResult, OutgoingEmail};
use async_trait::async_trait;
use tracing::{debug, info};

/// A mailer that logs submissions instead of delivering them.
///
/// Used when no provider API key is configured. Submissions still succeed
/// from the caller's point of view, so the contact form stays usable in
/// development environments.
///
/// # Use Cases
///
/// - Local development without provider credentials
/// - Testing scenarios where delivery should be bypassed
/// - Fallback when the provider client fails to initialize at startup
pub struct NullMailer;

impl NullMailer {
    /// Creates a new NullMailer instance.
    pub fn new() -> Self {
        debug!("Using NullMailer (delivery disabled)");
        Self
    }
}

impl Default for NullMailer {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Mailer for NullMailer {
    async fn send(&self, email: OutgoingEmail) -> MailerResult<()> {
        info!(
            to = %email.to,
            subject = %email.subject,
            "Contact form submission (delivery disabled)"
        );
        Ok(())
    }

    async fn health_check(&self) -> bool {
        true
    }
}

//! Resend-backed mailer implementation.

use super::service::{Mailer, MailerError, MailerResult, OutgoingEmail};
use async_trait::async_trait;
use serde::Serialize;
use std::time::Duration;
use tracing::{error, info};

/// Resend send endpoint.
const RESEND_ENDPOINT: &str = "https://api.resend.com/emails";

/// Request timeout for a single delivery attempt.
const SEND_TIMEOUT: Duration = Duration::from_secs(15);

/// Wire format of a Resend send request.
#[derive(Debug, Serialize)]
struct SendRequest<'a> {
    from: &'a str,
    to: [&'a str; 1],
    subject: &'a str,
    text: &'a str,
}

/// Mailer that relays messages over the Resend HTTP API.
pub struct ResendMailer {
    client: reqwest::Client,
    api_key: String,
    endpoint: String,
}

impl ResendMailer {
    /// Builds a mailer authenticated with the given API key.
    ///
    /// # Errors
    ///
    /// Returns [`MailerError::Transport`] if the HTTP client cannot be
    /// constructed (TLS backend initialization).
    pub fn new(api_key: impl Into<String>) -> MailerResult<Self> {
        Self::with_endpoint(api_key, RESEND_ENDPOINT)
    }

    /// Builds a mailer pointed at a custom endpoint. Used by tests to stand
    /// in a local provider.
    pub fn with_endpoint(
        api_key: impl Into<String>,
        endpoint: impl Into<String>,
    ) -> MailerResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(SEND_TIMEOUT)
            .build()
            .map_err(|e| MailerError::Transport(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            api_key: api_key.into(),
            endpoint: endpoint.into(),
        })
    }
}

#[async_trait]
impl Mailer for ResendMailer {
    async fn send(&self, email: OutgoingEmail) -> MailerResult<()> {
        let payload = SendRequest {
            from: &email.from,
            to: [&email.to],
            subject: &email.subject,
            text: &email.text,
        };

        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .json(&payload)
            .send()
            .await
            .map_err(|e| MailerError::Transport(e.to_string()))?;

        let status = response.status();
        if status.is_success() {
            info!("Relayed contact message to {}", email.to);
            return Ok(());
        }

        let message = response.text().await.unwrap_or_default();
        error!("Resend rejected message: {} {}", status, message);
        Err(MailerError::Provider {
            status: status.as_u16(),
            message,
        })
    }

    async fn health_check(&self) -> bool {
        !self.api_key.is_empty()
    }
}

//! Mailer trait and error types.

use async_trait::async_trait;
use std::fmt;

/// Errors that can occur while relaying a message.
#[derive(Debug)]
pub enum MailerError {
    /// The request never reached the provider (connection, TLS, timeout).
    Transport(String),
    /// The provider rejected the message.
    Provider { status: u16, message: String },
}

impl fmt::Display for MailerError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Transport(e) => write!(f, "Mail transport error: {}", e),
            Self::Provider { status, message } => {
                write!(f, "Mail provider rejected message ({}): {}", status, message)
            }
        }
    }
}

impl std::error::Error for MailerError {}

/// Result type for mailer operations.
pub type MailerResult<T> = Result<T, MailerError>;

/// An outbound transactional message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutgoingEmail {
    pub from: String,
    pub to: String,
    pub subject: String,
    pub text: String,
}

/// Trait for relaying contact-form submissions to a transactional-email
/// provider.
///
/// Delivery is a single synchronous attempt per call: no retry, no queue.
/// A failed send surfaces to the caller, which maps it to an HTTP error.
///
/// # Implementations
///
/// - [`crate::infrastructure::mailer::ResendMailer`] - HTTP relay through the Resend API
/// - [`crate::infrastructure::mailer::NullMailer`] - log-only implementation for
///   deployments without a provider key
#[async_trait]
pub trait Mailer: Send + Sync {
    /// Relays one message to the provider.
    ///
    /// # Errors
    ///
    /// Returns [`MailerError::Transport`] when the provider is unreachable
    /// and [`MailerError::Provider`] when it answers with a non-success
    /// status.
    async fn send(&self, email: OutgoingEmail) -> MailerResult<()>;

    /// Whether the mailer is ready to relay messages.
    ///
    /// Used by the health check endpoint to report delivery status.
    async fn health_check(&self) -> bool;
}

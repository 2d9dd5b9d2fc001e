//! Outbound mail relay for the contact form.
//!
//! Provides a [`Mailer`] trait with two implementations:
//! - [`ResendMailer`] - production relay over the Resend HTTP API
//! - [`NullMailer`] - log-only implementation for keyless deployments

mod null_mailer;
mod resend;
mod service;

pub use null_mailer::NullMailer;
pub use resend::ResendMailer;
pub use service::{Mailer, MailerError, MailerResult, OutgoingEmail};

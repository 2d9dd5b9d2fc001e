//! Handler for contact form submissions.

use axum::{Json, extract::State};
use validator::Validate;

use crate::api::dto::contact::{ContactRequest, ContactResponse};
use crate::error::AppError;
use crate::infrastructure::mailer::OutgoingEmail;
use crate::state::AppState;

/// Relays a contact-form submission to the configured recipient.
///
/// # Endpoint
///
/// `POST /api/contact`
///
/// # Request Body
///
/// ```json
/// {
///   "name": "Ada Example",
///   "company": "Example GmbH",   // optional
///   "email": "ada@example.com",
///   "message": "Hello"
/// }
/// ```
///
/// # Response
///
/// `200 {"success": true}` once the provider accepted the message.
///
/// # Errors
///
/// - `400 {"error": ...}` when a required field is empty or the email is
///   malformed
/// - `500 {"error": "Failed to send email."}` when delivery fails; a single
///   synchronous attempt is made, with no retry or queueing
pub async fn contact_handler(
    State(state): State<AppState>,
    Json(payload): Json<ContactRequest>,
) -> Result<Json<ContactResponse>, AppError> {
    payload.validate()?;

    let name = payload.name.trim();
    let company = payload
        .company
        .as_deref()
        .map(str::trim)
        .filter(|c| !c.is_empty())
        .unwrap_or("Not provided");

    let email = OutgoingEmail {
        from: state.site.contact_from.clone(),
        to: state.site.contact_recipient.clone(),
        subject: format!("New Contact Form Submission from {}", name),
        text: format!(
            "Name: {}\nCompany: {}\nEmail: {}\nMessage: {}\n",
            name,
            company,
            payload.email.trim(),
            payload.message.trim()
        ),
    };

    state.mailer.send(email).await?;
    metrics::counter!("contact_submissions_total").increment(1);

    Ok(Json(ContactResponse { success: true }))
}

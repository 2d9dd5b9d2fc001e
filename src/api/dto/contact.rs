//! DTOs for the contact submission endpoint.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// A contact-form submission.
///
/// Fields default to empty when absent so a missing field surfaces as a
/// validation error with the structured `{"error": ...}` contract instead
/// of a body-deserialization rejection.
#[derive(Debug, Deserialize, Validate)]
pub struct ContactRequest {
    #[serde(default)]
    #[validate(length(min = 1, message = "All fields are required."))]
    pub name: String,

    /// Optional affiliation; rendered as "Not provided" when absent.
    #[serde(default)]
    pub company: Option<String>,

    #[serde(default)]
    #[validate(
        length(min = 1, message = "All fields are required."),
        email(message = "Invalid email format.")
    )]
    pub email: String,

    #[serde(default)]
    #[validate(length(min = 1, message = "All fields are required."))]
    pub message: String,
}

/// Success response for a relayed submission.
#[derive(Debug, Serialize)]
pub struct ContactResponse {
    pub success: bool,
}

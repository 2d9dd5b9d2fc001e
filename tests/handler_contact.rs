mod common;

use std::sync::Arc;

use advisory_site::api::handlers::contact_handler;
use advisory_site::infrastructure::mailer::{Mailer, MailerError, MailerResult, OutgoingEmail};
use async_trait::async_trait;
use axum::{Router, routing::post};
use axum_test::TestServer;
use serde_json::json;

mockall::mock! {
    pub TestMailer {}

    #[async_trait]
    impl Mailer for TestMailer {
        async fn send(&self, email: OutgoingEmail) -> MailerResult<()>;
        async fn health_check(&self) -> bool;
    }
}

fn test_server(state: advisory_site::AppState) -> TestServer {
    let app = Router::new()
        .route("/api/contact", post(contact_handler))
        .with_state(state);
    TestServer::new(app).unwrap()
}

#[tokio::test]
async fn test_contact_success() {
    let server = test_server(common::create_test_state());

    let response = server
        .post("/api/contact")
        .json(&json!({
            "name": "Ada Example",
            "company": "Example GmbH",
            "email": "ada@example.com",
            "message": "I'd like to run a pilot."
        }))
        .await;

    response.assert_status_ok();
    response.assert_json(&json!({ "success": true }));
}

#[tokio::test]
async fn test_contact_missing_message_is_rejected() {
    let server = test_server(common::create_test_state());

    let response = server
        .post("/api/contact")
        .json(&json!({
            "name": "Ada Example",
            "email": "ada@example.com"
        }))
        .await;

    response.assert_status_bad_request();

    let json = response.json::<serde_json::Value>();
    assert!(json["error"].is_string());
}

#[tokio::test]
async fn test_contact_invalid_email_is_rejected() {
    let server = test_server(common::create_test_state());

    let response = server
        .post("/api/contact")
        .json(&json!({
            "name": "Ada Example",
            "email": "not-an-address",
            "message": "Hello"
        }))
        .await;

    response.assert_status_bad_request();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"], "Invalid email format.");
}

#[tokio::test]
async fn test_contact_relays_trimmed_submission() {
    let mut mailer = MockTestMailer::new();
    mailer
        .expect_send()
        .withf(|email: &OutgoingEmail| {
            email.to == "owner@example.com"
                && email.subject == "New Contact Form Submission from Ada Example"
                && email.text.contains("Company: Not provided")
        })
        .times(1)
        .returning(|_| Ok(()));

    let server = test_server(common::create_test_state_with_mailer(Arc::new(mailer)));

    let response = server
        .post("/api/contact")
        .json(&json!({
            "name": "  Ada Example  ",
            "email": "ada@example.com",
            "message": "Hello"
        }))
        .await;

    response.assert_status_ok();
}

#[tokio::test]
async fn test_contact_delivery_failure_returns_500() {
    let mut mailer = MockTestMailer::new();
    mailer.expect_send().returning(|_| {
        Err(MailerError::Provider {
            status: 503,
            message: "provider down".to_string(),
        })
    });

    let server = test_server(common::create_test_state_with_mailer(Arc::new(mailer)));

    let response = server
        .post("/api/contact")
        .json(&json!({
            "name": "Ada Example",
            "email": "ada@example.com",
            "message": "Hello"
        }))
        .await;

    response.assert_status_internal_server_error();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"], "Failed to send email.");
}

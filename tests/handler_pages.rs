mod common;

use advisory_site::web::handlers::{e4x_handler, home_handler, pilot_kit_handler};
use axum::{Router, routing::get};
use axum_test::TestServer;

fn test_server(state: advisory_site::AppState) -> TestServer {
    let app = Router::new()
        .route("/", get(home_handler))
        .route("/e4x", get(e4x_handler))
        .route("/e4x/pilot-kit", get(pilot_kit_handler))
        .with_state(state);
    TestServer::new(app).unwrap()
}

#[tokio::test]
async fn test_home_rewrites_internal_links() {
    let server = test_server(common::create_test_state());

    let response = server
        .get("/")
        .add_query_param("utm_source", "newsletter")
        .add_query_param("utm_medium", "email")
        .await;

    response.assert_status_ok();

    let body = response.text();
    assert!(body.contains("/e4x?utm_source=newsletter&amp;utm_medium=email"));
    assert!(body.contains("/e4x/pilot-kit?utm_source=newsletter&amp;utm_medium=email"));
}

#[tokio::test]
async fn test_home_without_params_keeps_plain_links() {
    let server = test_server(common::create_test_state());

    let response = server.get("/").await;

    let body = response.text();
    assert!(body.contains("href=\"/e4x\""));
    assert!(!body.contains("/e4x?"));
}

#[tokio::test]
async fn test_home_mailto_is_not_rewritten() {
    let server = test_server(common::create_test_state());

    let response = server.get("/").add_query_param("utm_source", "newsletter").await;

    let body = response.text();
    let start = body.find("mailto:owner@example.com").unwrap();
    let mailto_len = body[start..].find('"').unwrap();

    assert!(!body[start..start + mailto_len].contains("utm_source"));
}

#[tokio::test]
async fn test_e4x_carries_attribution_into_pilot_kit() {
    let server = test_server(common::create_test_state());

    let response = server
        .get("/e4x")
        .add_query_param("from", "main-nav")
        .await;

    response.assert_status_ok();

    let body = response.text();
    assert!(body.contains("/e4x/pilot-kit?from=main-nav"));
    assert!(body.contains("id=\"hero\""));
}

#[tokio::test]
async fn test_e4x_shows_updates_without_preorder() {
    let server = test_server(common::create_test_state());

    let body = server.get("/e4x").await.text();

    assert!(body.contains("data-analytics=\"updates-sticky\""));
    assert!(!body.contains("data-analytics=\"preorder-sticky\""));
}

#[tokio::test]
async fn test_e4x_shows_preorder_when_configured() {
    let state = common::create_test_state_with_preorder("https://shop.example.com/e4x");
    let server = test_server(state);

    let body = server.get("/e4x").await.text();

    assert!(body.contains("data-analytics=\"preorder-sticky\""));
    assert!(body.contains("https://shop.example.com/e4x"));
    assert!(!body.contains("data-analytics=\"updates-sticky\""));
}

#[tokio::test]
async fn test_pilot_kit_lists_downloads_and_back_link() {
    let server = test_server(common::create_test_state());

    let response = server
        .get("/e4x/pilot-kit")
        .add_query_param("utm_campaign", "launch")
        .await;

    response.assert_status_ok();

    let body = response.text();
    assert!(body.contains("/downloads/e4x-4w-log.pdf"));
    assert!(body.contains("/downloads/e4x-dark-corners.pdf"));
    assert!(body.contains("/downloads/e4x-weekly-tor.pdf"));
    assert!(body.contains("/e4x?utm_campaign=launch"));
}

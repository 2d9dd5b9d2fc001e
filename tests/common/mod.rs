#![allow(dead_code)]

use std::sync::Arc;

use advisory_site::infrastructure::mailer::{Mailer, NullMailer};
use advisory_site::og::OgCard;
use advisory_site::state::{AppState, SiteConfig};

pub fn create_test_state() -> AppState {
    create_test_state_with_mailer(Arc::new(NullMailer::new()))
}

pub fn create_test_state_with_mailer(mailer: Arc<dyn Mailer>) -> AppState {
    AppState {
        mailer,
        og_card: Arc::new(OgCard::new(None)),
        site: SiteConfig {
            base_url: "https://www.example.com".to_string(),
            contact_recipient: "owner@example.com".to_string(),
            contact_from: "no-reply@example.com".to_string(),
            preorder_url: None,
        },
    }
}

pub fn create_test_state_with_preorder(preorder_url: &str) -> AppState {
    let mut state = create_test_state();
    state.site.preorder_url = Some(preorder_url.to_string());
    state
}

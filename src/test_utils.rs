use axum::{body::Body, http::request::Parts, response::Response};
use rusqlite::Connection;
use scraper::Html;

use crate::{
    AppState,
    auth::{Identity, IdentityProvider},
};

/// Identifies the caller by a plain request header. Only for tests.
#[derive(Debug, Clone)]
pub(crate) struct HeaderIdentity;

impl HeaderIdentity {
    pub(crate) const HEADER: &'static str = "x-test-user";
}

impl IdentityProvider for HeaderIdentity {
    fn resolve_identity(&self, parts: &Parts) -> Option<Identity> {
        let user_id = parts.headers.get(Self::HEADER)?.to_str().ok()?;

        Some(Identity {
            user_id: user_id.to_owned(),
        })
    }
}

/// App state over an empty in-memory database that trusts [HeaderIdentity].
#[track_caller]
pub(crate) fn get_test_app_state() -> AppState {
    let connection = Connection::open_in_memory().expect("Could not open database in memory.");

    AppState::new(connection, "42")
        .expect("Could not create app state.")
        .with_identity_provider(HeaderIdentity)
}

pub(crate) async fn response_json(response: Response<Body>) -> serde_json::Value {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Could not get response body");

    serde_json::from_slice(&body).expect("Response body is not valid JSON")
}

pub(crate) async fn parse_html_document(response: Response<Body>) -> Html {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Could not get response body");
    let text = String::from_utf8_lossy(&body).to_string();

    Html::parse_document(&text)
}

#[track_caller]
pub(crate) fn assert_valid_html(html: &Html) {
    assert!(
        html.errors.is_empty(),
        "Got HTML parsing errors: {:?}",
        html.errors
    );
}

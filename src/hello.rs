//! Public diagnostic routes for checking that the API is up.

use std::sync::{Arc, Mutex};

use axum::{
    Json,
    extract::{FromRef, Path, State, rejection::PathRejection},
    http::StatusCode,
};
use rusqlite::Connection;
use serde::Serialize;

use crate::{AppState, Error};

/// A greeting.
#[derive(Debug, Serialize)]
pub struct Greeting<T> {
    message: T,
}

/// One part of the greeting that echoes the test ID.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum GreetingPart {
    /// Plain text.
    Text { text: &'static str },
    /// The path parameter sent by the client.
    TestId {
        #[serde(rename = "testId")]
        test_id: String,
    },
}

/// A route handler that always responds with the same greeting.
pub async fn get_hello() -> Json<Greeting<&'static str>> {
    Json(Greeting {
        message: "Hello from finos!",
    })
}

/// A route handler that greets the client and echoes `test_id` back.
pub async fn get_hello_with_id(
    path: Result<Path<String>, PathRejection>,
) -> Result<Json<Greeting<Vec<GreetingPart>>>, Error> {
    let Path(test_id) = path?;

    Ok(Json(Greeting {
        message: vec![
            GreetingPart::Text { text: "Hi there" },
            GreetingPart::TestId { test_id },
        ],
    }))
}

/// The state needed for the health check.
#[derive(Debug, Clone)]
pub struct HealthState {
    /// The database connection to check.
    pub db_connection: Arc<Mutex<Connection>>,
}

impl FromRef<AppState> for HealthState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            db_connection: state.db_connection.clone(),
        }
    }
}

/// The outcome of a health check.
#[derive(Debug, Serialize)]
pub struct Health {
    status: &'static str,
}

/// A route handler that reports whether the database answers queries.
pub async fn get_health(State(state): State<HealthState>) -> (StatusCode, Json<Health>) {
    let Ok(connection) = state.db_connection.lock() else {
        tracing::error!("Health check could not acquire the database lock");
        return (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(Health {
                status: "unavailable",
            }),
        );
    };

    match connection.query_row("SELECT 1", [], |row| row.get::<_, i64>(0)) {
        Ok(_) => (StatusCode::OK, Json(Health { status: "ok" })),
        Err(error) => {
            tracing::error!("Health check query failed: {error}");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(Health {
                    status: "unavailable",
                }),
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use axum::{
        extract::{Path, State},
        http::StatusCode,
    };
    use rusqlite::Connection;
    use serde_json::json;

    use super::{HealthState, get_health, get_hello, get_hello_with_id};

    #[tokio::test]
    async fn hello_greets() {
        let response = get_hello().await;

        assert_eq!(
            serde_json::to_value(&response.0).unwrap(),
            json!({ "message": "Hello from finos!" })
        );
    }

    #[tokio::test]
    async fn hello_echoes_test_id() {
        let response = get_hello_with_id(Ok(Path("abc".to_owned()))).await.unwrap();

        assert_eq!(
            serde_json::to_value(&response.0).unwrap(),
            json!({ "message": [{ "text": "Hi there" }, { "testId": "abc" }] })
        );
    }

    #[tokio::test]
    async fn health_ok_with_open_database() {
        let state = HealthState {
            db_connection: Arc::new(Mutex::new(Connection::open_in_memory().unwrap())),
        };

        let (status, body) = get_health(State(state)).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(serde_json::to_value(&body.0).unwrap(), json!({ "status": "ok" }));
    }
}

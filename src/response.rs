//! The JSON envelopes used for API responses.
//!
//! Successful responses wrap their payload as `{"data": ...}`, optionally with a
//! human readable `"message"`. Failed responses are `{"error": "..."}`.

use axum::{Json, http::StatusCode};
use serde::{Deserialize, Serialize};

/// The body of a successful API response.
#[derive(Debug, PartialEq, Serialize, Deserialize)]
pub struct Data<T> {
    /// A short description of what happened, used by write operations.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// The payload.
    pub data: T,
}

impl<T> Data<T> {
    pub fn new(data: T) -> Self {
        Self {
            message: None,
            data,
        }
    }

    pub fn with_message(message: &str, data: T) -> Self {
        Self {
            message: Some(message.to_owned()),
            data,
        }
    }
}

/// The body of a failed API response.
#[derive(Debug, PartialEq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

/// A 200 OK response with `data` as the payload.
pub fn ok<T: Serialize>(data: T) -> Json<Data<T>> {
    Json(Data::new(data))
}

/// A 201 Created response with `data` as the payload.
pub fn created<T: Serialize>(message: &str, data: T) -> (StatusCode, Json<Data<T>>) {
    (StatusCode::CREATED, Json(Data::with_message(message, data)))
}

/// The number of rows changed by a write, reported back to the client.
#[derive(Debug, PartialEq, Serialize, Deserialize)]
pub struct WriteResult {
    pub rows_affected: usize,
}

/// A 200 OK response for a write that reports how many rows it touched.
pub fn written(message: &str, rows_affected: usize) -> Json<Data<WriteResult>> {
    Json(Data::with_message(message, WriteResult { rows_affected }))
}

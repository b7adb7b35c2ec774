//! Defines the endpoint for creating a new account.

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
};
use serde::Deserialize;

use crate::{
    Error,
    account::{Account, AccountId, core::AccountState, db::insert_account},
    response::{Data, created},
};

/// The JSON body for creating or updating an account.
#[derive(Debug, Default, Deserialize)]
pub struct AccountBody {
    /// The ID to give a new account, generated by the database when omitted.
    /// Ignored when updating.
    #[serde(default)]
    pub id: Option<AccountId>,
    /// The account name, required.
    #[serde(default)]
    pub name: Option<String>,
}

impl AccountBody {
    /// Unwrap the JSON body from the extractor, turning a rejected body into a
    /// validation error.
    pub fn from_json(payload: Result<Json<AccountBody>, JsonRejection>) -> Result<Self, Error> {
        let Json(body) = payload?;

        Ok(body)
    }

    /// The account name, which must be present and not blank.
    ///
    /// # Errors
    /// Returns [Error::Validation] if the name is missing or blank.
    pub fn validated_name(&self) -> Result<&str, Error> {
        match self.name.as_deref() {
            Some(name) if !name.trim().is_empty() => Ok(name),
            Some(_) => Err(Error::Validation("name cannot be empty".to_owned())),
            None => Err(Error::Validation("name is required".to_owned())),
        }
    }
}

/// A route handler for creating a new account, responds with the created account.
pub async fn create_account_endpoint(
    State(state): State<AccountState>,
    payload: Result<Json<AccountBody>, JsonRejection>,
) -> Result<(StatusCode, Json<Data<Account>>), Error> {
    let body = AccountBody::from_json(payload)?;
    let name = body.validated_name()?;

    let connection = state.connection()?;
    let account = insert_account(body.id, name, &connection).inspect_err(|error| {
        tracing::error!("Could not create account with {body:?}, got an unexpected error: {error}")
    })?;

    Ok(created("Account created", account))
}

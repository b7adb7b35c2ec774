//! Defines the endpoints for deleting accounts.
//!
//! Deletes are not checked for existence first, deleting an account that is
//! already gone is reported as a success with zero rows affected.

use axum::{
    Json,
    extract::{Path, State, rejection::PathRejection},
};

use crate::{
    Error,
    account::{
        core::AccountState,
        db::delete_accounts,
        params::parse_account_id,
        query::{Column, Condition, Delete},
    },
    response::{Data, WriteResult, written},
};

/// A route handler for deleting an account by its ID.
pub async fn delete_account_endpoint(
    State(state): State<AccountState>,
    path: Result<Path<String>, PathRejection>,
) -> Result<Json<Data<WriteResult>>, Error> {
    let Path(account_id) = path?;
    let account_id = parse_account_id("account ID", &account_id)?;
    let delete = Delete::matching(Condition::equals(Column::Id, account_id));

    let connection = state.connection()?;
    let rows_affected = delete_accounts(&delete, &connection).inspect_err(|error| {
        tracing::error!("Could not delete account {account_id}: {error}");
    })?;

    Ok(written("Account deleted", rows_affected))
}

/// A route handler for deleting every account named `name`.
pub async fn delete_accounts_by_name_endpoint(
    State(state): State<AccountState>,
    path: Result<Path<String>, PathRejection>,
) -> Result<Json<Data<WriteResult>>, Error> {
    let Path(name) = path?;
    let delete = Delete::matching(Condition::equals(Column::Name, name.clone()));

    let connection = state.connection()?;
    let rows_affected = delete_accounts(&delete, &connection).inspect_err(|error| {
        tracing::error!("Could not delete accounts named {name:?}: {error}");
    })?;

    Ok(written("Accounts deleted", rows_affected))
}

//! Runs the statements produced by the query builder against SQLite.

use rusqlite::{Connection, params_from_iter};

use crate::{
    Error,
    account::{
        Account, AccountId,
        core::map_row_to_account,
        query::{Count, Delete, Insert, Select, Statement, UpdateName},
    },
};

type RowsAffected = usize;

/// Get all the accounts selected by `select`.
///
/// # Errors
/// Returns an [Error::SqlError] if the query fails.
pub fn select_accounts(select: &Select, connection: &Connection) -> Result<Vec<Account>, Error> {
    let Statement { sql, params } = select.build();
    tracing::debug!(%sql, ?params, "select accounts");

    connection
        .prepare(&sql)?
        .query_map(params_from_iter(params.iter()), map_row_to_account)?
        .map(|maybe_account| maybe_account.map_err(Error::from))
        .collect()
}

/// Get the accounts selected by `select`, treating an empty result as missing.
///
/// # Errors
/// Returns [Error::NotFound] if no account matches, or an [Error::SqlError] if the query fails.
pub fn select_existing_accounts(
    select: &Select,
    connection: &Connection,
) -> Result<Vec<Account>, Error> {
    let accounts = select_accounts(select, connection)?;

    if accounts.is_empty() {
        return Err(Error::NotFound);
    }

    Ok(accounts)
}

/// Get the first account selected by `select`.
///
/// # Errors
/// Returns [Error::NotFound] if no account matches, or an [Error::SqlError] if the query fails.
pub fn select_account(select: &Select, connection: &Connection) -> Result<Account, Error> {
    let Statement { sql, params } = select.clone().limit(1).build();
    tracing::debug!(%sql, ?params, "select account");

    connection
        .query_one(&sql, params_from_iter(params.iter()), map_row_to_account)
        .map_err(Error::from)
}

/// Get the number of accounts.
pub fn count_accounts(connection: &Connection) -> Result<i64, Error> {
    let Statement { sql, params } = Count.build();

    connection
        .query_one(&sql, params_from_iter(params.iter()), |row| row.get(0))
        .map_err(Error::from)
}

/// Insert an account named `name`, with the ID `id` if given.
///
/// # Errors
/// Returns an [Error::SqlError] if the insert fails, e.g. the ID is already taken.
pub fn insert_account(
    id: Option<AccountId>,
    name: &str,
    connection: &Connection,
) -> Result<Account, Error> {
    let Statement { sql, params } = Insert::account(id, name).build();
    tracing::debug!(%sql, ?params, "insert account");

    connection
        .query_one(&sql, params_from_iter(params.iter()), map_row_to_account)
        .map_err(Error::from)
}

/// Set the name of the accounts matched by `update`.
pub fn update_accounts(update: &UpdateName, connection: &Connection) -> Result<RowsAffected, Error> {
    let Statement { sql, params } = update.build();
    tracing::debug!(%sql, ?params, "update accounts");

    connection
        .execute(&sql, params_from_iter(params.iter()))
        .map_err(Error::from)
}

/// Delete the accounts matched by `delete`.
pub fn delete_accounts(delete: &Delete, connection: &Connection) -> Result<RowsAffected, Error> {
    let Statement { sql, params } = delete.build();
    tracing::debug!(%sql, ?params, "delete accounts");

    connection
        .execute(&sql, params_from_iter(params.iter()))
        .map_err(Error::from)
}

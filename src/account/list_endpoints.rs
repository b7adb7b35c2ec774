//! Defines the endpoints that list accounts.
//!
//! An empty list is a valid response for these endpoints.

use axum::{
    Json,
    extract::{
        Path, Query, State,
        rejection::{PathRejection, QueryRejection},
    },
};
use serde::{Deserialize, Serialize};

use crate::{
    Error,
    account::{
        Account,
        core::AccountState,
        db::{count_accounts, select_accounts},
        params::{
            AnyFilter, FilterQuery, IdRange, Page, PageQuery, RangeQuery, Sort, SortQuery,
            parse_account_id,
        },
        query::{Column, Condition, Select},
    },
    response::{Data, ok},
};

/// A route handler for listing a page of accounts in ID order.
pub async fn list_accounts_endpoint(
    State(state): State<AccountState>,
    query: Result<Query<PageQuery>, QueryRejection>,
) -> Result<Json<Data<Vec<Account>>>, Error> {
    let Query(query) = query?;
    let page = Page::try_from(query)?;
    let select = Select::accounts().limit(page.limit).offset(page.offset);

    let connection = state.connection()?;
    select_accounts(&select, &connection).map(ok)
}

/// A route handler for listing the accounts that match an ID or a name.
///
/// Only the filters present in the query string are used.
pub async fn filter_accounts_endpoint(
    State(state): State<AccountState>,
    query: Result<Query<FilterQuery>, QueryRejection>,
) -> Result<Json<Data<Vec<Account>>>, Error> {
    let Query(query) = query?;
    let filter = AnyFilter::try_from(query)?;

    let mut conditions = Vec::new();
    if let Some(id) = filter.id {
        conditions.push(Condition::equals(Column::Id, id));
    }
    if let Some(name) = filter.name {
        conditions.push(Condition::equals(Column::Name, name));
    }
    let select = Select::accounts().filter(Condition::Any(conditions));

    let connection = state.connection()?;
    select_accounts(&select, &connection).map(ok)
}

/// A route handler for listing all accounts sorted by an allowed field.
pub async fn sort_accounts_endpoint(
    State(state): State<AccountState>,
    query: Result<Query<SortQuery>, QueryRejection>,
) -> Result<Json<Data<Vec<Account>>>, Error> {
    let Query(query) = query?;
    let sort = Sort::try_from(query)?;
    let select = Select::accounts().order_by(sort.field.column(), sort.direction);

    let connection = state.connection()?;
    select_accounts(&select, &connection).map(ok)
}

/// A route handler for listing the accounts with an ID greater than `account_id`.
pub async fn list_accounts_after_endpoint(
    State(state): State<AccountState>,
    path: Result<Path<String>, PathRejection>,
) -> Result<Json<Data<Vec<Account>>>, Error> {
    let Path(account_id) = path?;
    let account_id = parse_account_id("account ID", &account_id)?;
    let select = Select::accounts().filter(Condition::greater_than(Column::Id, account_id));

    let connection = state.connection()?;
    select_accounts(&select, &connection).map(ok)
}

/// A route handler for listing the accounts with IDs strictly between `minId` and `maxId`.
pub async fn list_accounts_in_range_endpoint(
    State(state): State<AccountState>,
    query: Result<Query<RangeQuery>, QueryRejection>,
) -> Result<Json<Data<Vec<Account>>>, Error> {
    let Query(query) = query?;
    let range = IdRange::try_from(query)?;
    let select = Select::accounts()
        .filter(Condition::greater_than(Column::Id, range.min_id))
        .filter(Condition::less_than(Column::Id, range.max_id));

    let connection = state.connection()?;
    select_accounts(&select, &connection).map(ok)
}

/// Aggregate statistics over all accounts.
#[derive(Debug, PartialEq, Serialize, Deserialize)]
pub struct AccountStats {
    /// The number of accounts.
    pub count: i64,
}

/// A route handler for getting account statistics.
pub async fn get_account_stats_endpoint(
    State(state): State<AccountState>,
) -> Result<Json<Data<AccountStats>>, Error> {
    let connection = state.connection()?;
    let count = count_accounts(&connection)?;

    Ok(ok(AccountStats { count }))
}

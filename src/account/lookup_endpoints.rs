//! Defines the endpoints that look up specific accounts.
//!
//! These endpoints respond with 404 Not Found when nothing matches.

use axum::{
    Json,
    extract::{
        Path, Query, State,
        rejection::{PathRejection, QueryRejection},
    },
};

use crate::{
    Error,
    account::{
        Account,
        core::AccountState,
        db::{select_account, select_existing_accounts},
        params::{ComplexFilter, ComplexFilterQuery, parse_account_id},
        query::{Column, Condition, Direction, Select},
    },
    response::{Data, ok},
};

/// A route handler for getting a single account by its ID.
pub async fn get_account_endpoint(
    State(state): State<AccountState>,
    path: Result<Path<String>, PathRejection>,
) -> Result<Json<Data<Account>>, Error> {
    let Path(account_id) = path?;
    let account_id = parse_account_id("account ID", &account_id)?;
    let select = Select::accounts().filter(Condition::equals(Column::Id, account_id));

    let connection = state.connection()?;
    select_account(&select, &connection).map(ok)
}

/// A route handler for getting the accounts with exactly the name `name`.
pub async fn get_accounts_by_name_endpoint(
    State(state): State<AccountState>,
    path: Result<Path<String>, PathRejection>,
) -> Result<Json<Data<Vec<Account>>>, Error> {
    let Path(name) = path?;
    let select = Select::accounts().filter(Condition::equals(Column::Name, name));

    let connection = state.connection()?;
    select_existing_accounts(&select, &connection).map(ok)
}

/// A route handler for getting the accounts whose name contains `name`.
pub async fn search_accounts_endpoint(
    State(state): State<AccountState>,
    path: Result<Path<String>, PathRejection>,
) -> Result<Json<Data<Vec<Account>>>, Error> {
    let Path(name) = path?;
    let select = Select::accounts().filter(Condition::contains(Column::Name, &name));

    let connection = state.connection()?;
    select_existing_accounts(&select, &connection).map(ok)
}

/// A route handler for getting the accounts that match both an ID and a name.
pub async fn filter_accounts_by_id_and_name_endpoint(
    State(state): State<AccountState>,
    path: Result<Path<(String, String)>, PathRejection>,
) -> Result<Json<Data<Vec<Account>>>, Error> {
    let Path((account_id, name)) = path?;
    let account_id = parse_account_id("account ID", &account_id)?;
    let select = Select::accounts()
        .filter(Condition::equals(Column::Id, account_id))
        .filter(Condition::equals(Column::Name, name));

    let connection = state.connection()?;
    select_existing_accounts(&select, &connection).map(ok)
}

/// A route handler for getting the account with the highest ID.
pub async fn get_latest_account_endpoint(
    State(state): State<AccountState>,
) -> Result<Json<Data<Account>>, Error> {
    let select = Select::accounts().order_by(Column::Id, Direction::Descending);

    let connection = state.connection()?;
    select_account(&select, &connection).map(ok)
}

/// A route handler for getting the accounts whose name contains `name` and
/// whose ID is greater than `id`.
pub async fn complex_filter_accounts_endpoint(
    State(state): State<AccountState>,
    query: Result<Query<ComplexFilterQuery>, QueryRejection>,
) -> Result<Json<Data<Vec<Account>>>, Error> {
    let Query(query) = query?;
    let filter = ComplexFilter::try_from(query)?;
    let select = Select::accounts()
        .filter(Condition::contains(Column::Name, &filter.name))
        .filter(Condition::greater_than(Column::Id, filter.id));

    let connection = state.connection()?;
    select_existing_accounts(&select, &connection).map(ok)
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use axum::extract::{Path, Query, State};
    use rusqlite::Connection;

    use crate::{
        Error,
        account::{
            Account, core::AccountState, db::insert_account, params::ComplexFilterQuery,
        },
        db::initialize,
    };

    use super::{
        complex_filter_accounts_endpoint, filter_accounts_by_id_and_name_endpoint,
        get_account_endpoint, get_accounts_by_name_endpoint, get_latest_account_endpoint,
        search_accounts_endpoint,
    };

    fn get_test_state(accounts: &[(i64, &str)]) -> AccountState {
        let connection = Connection::open_in_memory().unwrap();
        initialize(&connection).unwrap();
        for (id, name) in accounts {
            insert_account(Some(*id), name, &connection).unwrap();
        }

        AccountState {
            db_connection: Arc::new(Mutex::new(connection)),
        }
    }

    fn account(id: i64, name: &str) -> Account {
        Account {
            id,
            name: name.to_owned(),
        }
    }

    #[tokio::test]
    async fn get_account_by_id() {
        let state = get_test_state(&[(1, "Everyday"), (2, "Savings")]);

        let response = get_account_endpoint(State(state), Ok(Path("2".to_owned())))
            .await
            .unwrap();

        assert_eq!(response.0.data, account(2, "Savings"));
    }

    #[tokio::test]
    async fn get_missing_account_is_not_found() {
        let state = get_test_state(&[]);

        let result = get_account_endpoint(State(state), Ok(Path("1".to_owned()))).await;

        assert_eq!(result.err(), Some(Error::NotFound));
    }

    #[tokio::test]
    async fn get_account_with_invalid_id_is_validation_error() {
        let state = get_test_state(&[]);

        let result = get_account_endpoint(State(state), Ok(Path("one".to_owned()))).await;

        assert!(
            matches!(result, Err(Error::Validation(_))),
            "want validation error, got {result:?}"
        );
    }

    #[tokio::test]
    async fn get_by_name_returns_all_exact_matches() {
        let state = get_test_state(&[(1, "Cash"), (2, "Cash"), (3, "Cash Out")]);

        let response = get_accounts_by_name_endpoint(State(state), Ok(Path("Cash".to_owned())))
            .await
            .unwrap();

        assert_eq!(response.0.data, vec![account(1, "Cash"), account(2, "Cash")]);
    }

    #[tokio::test]
    async fn get_by_name_with_no_match_is_not_found() {
        let state = get_test_state(&[(1, "Cash")]);

        let result = get_accounts_by_name_endpoint(State(state), Ok(Path("cas".to_owned()))).await;

        assert_eq!(result.err(), Some(Error::NotFound));
    }

    #[tokio::test]
    async fn search_matches_partial_name() {
        let state = get_test_state(&[(1, "Everyday"), (2, "Day to day"), (3, "Savings")]);

        let response = search_accounts_endpoint(State(state), Ok(Path("day".to_owned())))
            .await
            .unwrap();

        // SQLite's LIKE is case-insensitive for ASCII.
        assert_eq!(
            response.0.data,
            vec![account(1, "Everyday"), account(2, "Day to day")]
        );
    }

    #[tokio::test]
    async fn search_with_no_match_is_not_found() {
        let state = get_test_state(&[(1, "Everyday")]);

        let result = search_accounts_endpoint(State(state), Ok(Path("xyz".to_owned()))).await;

        assert_eq!(result.err(), Some(Error::NotFound));
    }

    #[tokio::test]
    async fn filter_by_id_and_name_requires_both() {
        let state = get_test_state(&[(1, "Cash"), (2, "Savings")]);

        let found = filter_accounts_by_id_and_name_endpoint(
            State(state.clone()),
            Ok(Path(("1".to_owned(), "Cash".to_owned()))),
        )
        .await
        .unwrap();
        let missing = filter_accounts_by_id_and_name_endpoint(
            State(state),
            Ok(Path(("1".to_owned(), "Savings".to_owned()))),
        )
        .await;

        assert_eq!(found.0.data, vec![account(1, "Cash")]);
        assert_eq!(missing.err(), Some(Error::NotFound));
    }

    #[tokio::test]
    async fn latest_returns_highest_id() {
        let state = get_test_state(&[(4, "a"), (12, "b"), (8, "c")]);

        let response = get_latest_account_endpoint(State(state)).await.unwrap();

        assert_eq!(response.0.data, account(12, "b"));
    }

    #[tokio::test]
    async fn latest_on_empty_table_is_not_found() {
        let state = get_test_state(&[]);

        let result = get_latest_account_endpoint(State(state)).await;

        assert_eq!(result.err(), Some(Error::NotFound));
    }

    #[tokio::test]
    async fn complex_filter_combines_name_and_id() {
        let state = get_test_state(&[(9, "john"), (11, "john"), (12, "mary")]);
        let query: ComplexFilterQuery =
            serde_json::from_value(serde_json::json!({ "name": "jo", "id": "10" })).unwrap();

        let response = complex_filter_accounts_endpoint(State(state), Ok(Query(query)))
            .await
            .unwrap();

        assert_eq!(response.0.data, vec![account(11, "john")]);
    }

    #[tokio::test]
    async fn complex_filter_with_no_match_is_not_found() {
        let state = get_test_state(&[(9, "john")]);
        let query: ComplexFilterQuery =
            serde_json::from_value(serde_json::json!({ "name": "jo", "id": "10" })).unwrap();

        let result = complex_filter_accounts_endpoint(State(state), Ok(Query(query))).await;

        assert_eq!(result.err(), Some(Error::NotFound));
    }
}

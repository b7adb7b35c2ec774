//! Defines the endpoints for renaming an account.
//!
//! Only the name of an account can be changed, so a partial update (PATCH)
//! behaves exactly like a full update (PUT).

use axum::{
    Json,
    extract::{
        Path, State,
        rejection::{JsonRejection, PathRejection},
    },
};

use crate::{
    Error,
    account::{
        core::AccountState,
        create_endpoint::AccountBody,
        db::update_accounts,
        params::parse_account_id,
        query::{Column, Condition, UpdateName},
    },
    response::{Data, WriteResult, written},
};

/// A route handler for replacing an account (PUT).
pub async fn update_account_endpoint(
    State(state): State<AccountState>,
    path: Result<Path<String>, PathRejection>,
    payload: Result<Json<AccountBody>, JsonRejection>,
) -> Result<Json<Data<WriteResult>>, Error> {
    let Path(account_id) = path?;
    edit_account(&state, &account_id, payload)
}

/// A route handler for partially updating an account (PATCH).
pub async fn patch_account_endpoint(
    State(state): State<AccountState>,
    path: Result<Path<String>, PathRejection>,
    payload: Result<Json<AccountBody>, JsonRejection>,
) -> Result<Json<Data<WriteResult>>, Error> {
    let Path(account_id) = path?;
    edit_account(&state, &account_id, payload)
}

fn edit_account(
    state: &AccountState,
    account_id: &str,
    payload: Result<Json<AccountBody>, JsonRejection>,
) -> Result<Json<Data<WriteResult>>, Error> {
    let account_id = parse_account_id("account ID", account_id)?;
    let body = AccountBody::from_json(payload)?;
    let name = body.validated_name()?;

    let update = UpdateName::matching(Condition::equals(Column::Id, account_id), name);
    let connection = state.connection()?;
    let rows_affected = update_accounts(&update, &connection).inspect_err(|error| {
        tracing::error!("Could not update account {account_id}: {error}");
    })?;

    Ok(written("Account updated", rows_affected))
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use axum::{
        Json,
        extract::{Path, State},
    };
    use rusqlite::Connection;

    use crate::{
        Error,
        account::{
            core::AccountState,
            create_endpoint::AccountBody,
            db::insert_account,
            lookup_endpoints::get_account_endpoint,
        },
        db::initialize,
    };

    use super::{patch_account_endpoint, update_account_endpoint};

    fn get_test_state() -> AccountState {
        let connection = Connection::open_in_memory().unwrap();
        initialize(&connection).unwrap();
        insert_account(Some(1), "Old name", &connection).unwrap();

        AccountState {
            db_connection: Arc::new(Mutex::new(connection)),
        }
    }

    fn body(name: Option<&str>) -> Json<AccountBody> {
        Json(AccountBody {
            id: None,
            name: name.map(str::to_owned),
        })
    }

    #[tokio::test]
    async fn put_then_get_reflects_new_name() {
        let state = get_test_state();

        let response = update_account_endpoint(
            State(state.clone()),
            Ok(Path("1".to_owned())),
            Ok(body(Some("New name"))),
        )
        .await
        .unwrap();

        assert_eq!(response.0.data.rows_affected, 1);
        let got = get_account_endpoint(State(state), Ok(Path("1".to_owned())))
            .await
            .unwrap();
        assert_eq!(got.0.data.name, "New name");
    }

    #[tokio::test]
    async fn patch_renames_account() {
        let state = get_test_state();

        patch_account_endpoint(
            State(state.clone()),
            Ok(Path("1".to_owned())),
            Ok(body(Some("Patched"))),
        )
        .await
        .unwrap();

        let got = get_account_endpoint(State(state), Ok(Path("1".to_owned())))
            .await
            .unwrap();
        assert_eq!(got.0.data.name, "Patched");
    }

    #[tokio::test]
    async fn update_without_name_is_rejected() {
        let state = get_test_state();

        let result =
            update_account_endpoint(State(state.clone()), Ok(Path("1".to_owned())), Ok(body(None)))
                .await;

        assert_eq!(
            result.err(),
            Some(Error::Validation("name is required".to_owned()))
        );
        let got = get_account_endpoint(State(state), Ok(Path("1".to_owned())))
            .await
            .unwrap();
        assert_eq!(got.0.data.name, "Old name");
    }

    #[tokio::test]
    async fn update_missing_account_affects_no_rows() {
        let state = get_test_state();

        let response = update_account_endpoint(
            State(state),
            Ok(Path("99".to_owned())),
            Ok(body(Some("Ghost"))),
        )
        .await
        .unwrap();

        assert_eq!(response.0.data.rows_affected, 0);
    }
}

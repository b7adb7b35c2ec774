//! Application router configuration with protected and unprotected route definitions.

use axum::{Router, middleware, routing::get};

use crate::{
    AppState,
    account::{
        complex_filter_accounts_endpoint, create_account_endpoint, delete_account_endpoint,
        delete_accounts_by_name_endpoint, filter_accounts_by_id_and_name_endpoint,
        filter_accounts_endpoint, get_account_endpoint, get_account_stats_endpoint,
        get_accounts_by_name_endpoint, get_latest_account_endpoint, list_accounts_after_endpoint,
        list_accounts_endpoint, list_accounts_in_range_endpoint, patch_account_endpoint,
        search_accounts_endpoint, sort_accounts_endpoint, update_account_endpoint,
    },
    auth::identity_gate,
    dashboard::get_dashboard_page,
    endpoints,
    hello::{get_health, get_hello, get_hello_with_id},
    not_found::get_404_not_found,
};

/// Return a router with all the app's routes.
pub fn build_router(state: AppState) -> Router {
    let unprotected_routes = Router::new()
        .route(endpoints::HELLO, get(get_hello))
        .route(endpoints::HELLO_WITH_ID, get(get_hello_with_id))
        .route(endpoints::HEALTH, get(get_health));

    let protected_routes = Router::new()
        .route(endpoints::ROOT, get(get_dashboard_page))
        .route(
            endpoints::ACCOUNTS,
            get(list_accounts_endpoint).post(create_account_endpoint),
        )
        .route(
            endpoints::ACCOUNT,
            get(get_account_endpoint)
                .put(update_account_endpoint)
                .patch(patch_account_endpoint)
                .delete(delete_account_endpoint),
        )
        .route(
            endpoints::ACCOUNTS_BY_NAME,
            get(get_accounts_by_name_endpoint).delete(delete_accounts_by_name_endpoint),
        )
        .route(endpoints::ACCOUNTS_SEARCH, get(search_accounts_endpoint))
        .route(
            endpoints::ACCOUNTS_FILTER_BOTH,
            get(filter_accounts_by_id_and_name_endpoint),
        )
        .route(endpoints::ACCOUNTS_FILTER, get(filter_accounts_endpoint))
        .route(endpoints::ACCOUNTS_SORT, get(sort_accounts_endpoint))
        .route(endpoints::ACCOUNTS_AFTER, get(list_accounts_after_endpoint))
        .route(endpoints::ACCOUNTS_RANGE, get(list_accounts_in_range_endpoint))
        .route(endpoints::ACCOUNTS_STATS, get(get_account_stats_endpoint))
        .route(endpoints::ACCOUNTS_LATEST, get(get_latest_account_endpoint))
        .route(
            endpoints::ACCOUNTS_COMPLEX_FILTER,
            get(complex_filter_accounts_endpoint),
        )
        .route_layer(middleware::from_fn_with_state(state.clone(), identity_gate));

    protected_routes
        .merge(unprotected_routes)
        .fallback(get_404_not_found)
        .with_state(state)
}

//! The API endpoints URIs.
//!
//! Endpoints that take a parameter, e.g., '/api/accounts/{account_id}', use
//! axum's brace syntax for path captures.

/// The root route which serves the dashboard shell.
pub const ROOT: &str = "/";
/// The accounts section of the dashboard shell.
pub const ACCOUNTS_VIEW: &str = "/#accounts";

/// The route for a plain greeting, used to check that the API is reachable.
pub const HELLO: &str = "/api/hello";
/// The route for a greeting that echoes a path parameter.
pub const HELLO_WITH_ID: &str = "/api/hello/{test_id}";
/// The route for checking that the server can reach its database.
pub const HEALTH: &str = "/api/health";

/// The route to list and create accounts.
pub const ACCOUNTS: &str = "/api/accounts";
/// The route to get, update or delete a single account.
pub const ACCOUNT: &str = "/api/accounts/{account_id}";
/// The route to get or delete accounts by their exact name.
pub const ACCOUNTS_BY_NAME: &str = "/api/accounts/name/{name}";
/// The route to search accounts by partial name.
pub const ACCOUNTS_SEARCH: &str = "/api/accounts/search/{name}";
/// The route to get accounts that match both an ID and a name.
pub const ACCOUNTS_FILTER_BOTH: &str = "/api/accounts/filter/{account_id}/{name}";
/// The route to get accounts that match an ID or a name given as query parameters.
pub const ACCOUNTS_FILTER: &str = "/api/accounts/filter";
/// The route to get all accounts sorted by a column.
pub const ACCOUNTS_SORT: &str = "/api/accounts/sort";
/// The route to get accounts created after a given account ID.
pub const ACCOUNTS_AFTER: &str = "/api/accounts/after/{account_id}";
/// The route to get accounts whose IDs fall in an exclusive range.
pub const ACCOUNTS_RANGE: &str = "/api/accounts/range";
/// The route for aggregate account statistics.
pub const ACCOUNTS_STATS: &str = "/api/accounts/stats";
/// The route to get the most recently created account.
pub const ACCOUNTS_LATEST: &str = "/api/accounts/latest";
/// The route to search accounts by partial name and minimum ID.
pub const ACCOUNTS_COMPLEX_FILTER: &str = "/api/accounts/complex-filter";

/// Replace the parameter in `endpoint_path` with `id`.
///
/// A parameter is a string that starts with a left brace, followed by
/// lowercase letters or underscores, and ends with a right brace.
/// For example, in the endpoint path '/accounts/{account_id}', '{account_id}' is the parameter.
///
/// Only the first parameter is replaced, call this function again to fill in
/// the next one.
///
/// If no parameter is found in `endpoint_path`, the function returns the
/// the original `endpoint_path`.
#[cfg(test)]
pub fn format_endpoint(endpoint_path: &str, id: impl std::fmt::Display) -> String {
    let Some(param_start) = endpoint_path.find('{') else {
        return endpoint_path.to_owned();
    };

    let param_end = endpoint_path[param_start..]
        .find('}')
        .map(|end| param_start + end + 1)
        .unwrap_or(endpoint_path.len());

    format!(
        "{}{}{}",
        &endpoint_path[..param_start],
        id,
        &endpoint_path[param_end..]
    )
}

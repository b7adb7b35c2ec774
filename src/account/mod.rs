mod core;
mod create_endpoint;
mod db;
mod delete_endpoint;
mod edit_endpoint;
mod list_endpoints;
mod lookup_endpoints;
mod params;
mod query;

pub use self::core::{Account, AccountId, create_account_table};
pub use create_endpoint::create_account_endpoint;
pub use db::insert_account;
pub use delete_endpoint::{delete_account_endpoint, delete_accounts_by_name_endpoint};
pub use edit_endpoint::{patch_account_endpoint, update_account_endpoint};
pub use list_endpoints::{
    filter_accounts_endpoint, get_account_stats_endpoint, list_accounts_after_endpoint,
    list_accounts_endpoint, list_accounts_in_range_endpoint, sort_accounts_endpoint,
};
pub use lookup_endpoints::{
    complex_filter_accounts_endpoint, filter_accounts_by_id_and_name_endpoint,
    get_account_endpoint, get_accounts_by_name_endpoint, get_latest_account_endpoint,
    search_accounts_endpoint,
};

pub mod fetch_utils;
pub mod http_client;
pub mod league_api;
mod orchestrator;
pub mod urls;

// Re-export URL utilities
pub use urls::*;
// Re-export HTTP client utilities
pub use http_client::create_http_client_with_timeout;
// Re-export the retrying fetcher and per-resource reads
pub use fetch_utils::{RetryPolicy, fetch_with_retry};
pub use league_api::{
    fetch_league, fetch_matchups, fetch_player_catalog, fetch_rosters, fetch_users,
};
// Re-export the aggregator
pub use orchestrator::aggregate_league_data;

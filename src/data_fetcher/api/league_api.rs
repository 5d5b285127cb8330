// Per-resource reads against the platform API.
// Stateless: every function takes the shared client and the run's config.

use crate::config::Config;
use crate::data_fetcher::models::{League, MatchupEntry, PlayerCatalog, Roster, User};
use crate::error::AppError;
use reqwest::Client;
use tracing::{info, instrument};

use super::fetch_utils::{RetryPolicy, fetch_with_retry};
use super::urls::{
    build_league_url, build_matchups_url, build_players_url, build_rosters_url, build_users_url,
};

#[instrument(skip_all, fields(league_id = %config.league_id))]
pub async fn fetch_league(
    client: &Client,
    config: &Config,
    policy: &RetryPolicy,
) -> Result<League, AppError> {
    let url = build_league_url(config.base_url(), &config.league_id);
    fetch_with_retry(client, &url, policy).await
}

#[instrument(skip_all, fields(league_id = %config.league_id))]
pub async fn fetch_users(
    client: &Client,
    config: &Config,
    policy: &RetryPolicy,
) -> Result<Vec<User>, AppError> {
    let url = build_users_url(config.base_url(), &config.league_id);
    let users: Vec<User> = fetch_with_retry(client, &url, policy).await?;
    info!("Fetched {} users", users.len());
    Ok(users)
}

#[instrument(skip_all, fields(league_id = %config.league_id))]
pub async fn fetch_rosters(
    client: &Client,
    config: &Config,
    policy: &RetryPolicy,
) -> Result<Vec<Roster>, AppError> {
    let url = build_rosters_url(config.base_url(), &config.league_id);
    let rosters: Vec<Roster> = fetch_with_retry(client, &url, policy).await?;
    info!("Fetched {} rosters", rosters.len());
    Ok(rosters)
}

#[instrument(skip_all)]
pub async fn fetch_player_catalog(
    client: &Client,
    config: &Config,
    policy: &RetryPolicy,
) -> Result<PlayerCatalog, AppError> {
    let url = build_players_url(config.base_url());
    let catalog: PlayerCatalog = fetch_with_retry(client, &url, policy).await?;
    info!("Fetched player catalog with {} entries", catalog.len());
    Ok(catalog)
}

#[instrument(skip(client, config, policy), fields(league_id = %config.league_id))]
pub async fn fetch_matchups(
    client: &Client,
    config: &Config,
    week: u32,
    policy: &RetryPolicy,
) -> Result<Vec<MatchupEntry>, AppError> {
    let url = build_matchups_url(config.base_url(), &config.league_id, week);
    let matchups: Vec<MatchupEntry> = fetch_with_retry(client, &url, policy).await?;
    info!("Fetched {} matchup entries for week {}", matchups.len(), week);
    Ok(matchups)
}

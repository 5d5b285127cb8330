// League data aggregation: dependency-ordered reads and normalization.

use crate::config::Config;
use crate::data_fetcher::models::LeagueSnapshot;
use crate::data_fetcher::processors::{build_lineups, build_managers, build_roster_views};
use crate::error::AppError;
use reqwest::Client;
use tracing::{error, info, instrument};

use super::league_api::{
    fetch_league, fetch_matchups, fetch_player_catalog, fetch_rosters, fetch_users,
};

/// Fetches and normalizes everything the pairing step needs.
///
/// Phase 1 reads league metadata, users, rosters and the player catalog
/// concurrently; they are independent and jointly awaited, so the first
/// failure wins. Phase 2 needs the current week from the league settings
/// and only then reads that week's matchups.
///
/// Any read that exhausts its retries fails the whole aggregation with
/// [`AppError::AggregationFailed`]; a partial snapshot is never returned.
#[instrument(skip_all, fields(league_id = %config.league_id))]
pub async fn aggregate_league_data(
    client: &Client,
    config: &Config,
) -> Result<LeagueSnapshot, AppError> {
    info!("Starting league data aggregation");
    let policy = config.retry_policy();

    let (league, users, rosters, catalog) = futures::try_join!(
        fetch_league(client, config, &policy),
        fetch_users(client, config, &policy),
        fetch_rosters(client, config, &policy),
        fetch_player_catalog(client, config, &policy),
    )
    .map_err(|e| {
        error!("League data aggregation failed: {e}");
        AppError::aggregation_failed(e)
    })?;

    let week = league.current_week();
    info!(
        "League '{}' is on week {}{}",
        league.display_name(),
        week,
        if league.is_playoff_week() { " (playoffs)" } else { "" }
    );

    let matchups = fetch_matchups(client, config, week, &policy)
        .await
        .map_err(|e| {
            error!("Matchup fetch for week {week} failed: {e}");
            AppError::aggregation_failed(e)
        })?;

    let managers = build_managers(&rosters, &users);
    let roster_views = build_roster_views(&rosters, &matchups);
    let lineups = build_lineups(&roster_views, &catalog);

    info!(
        "Aggregated {} managers and {} rosters for week {}",
        managers.len(),
        roster_views.len(),
        week
    );

    Ok(LeagueSnapshot {
        league,
        week,
        managers,
        rosters: roster_views,
        lineups,
        matchups,
    })
}

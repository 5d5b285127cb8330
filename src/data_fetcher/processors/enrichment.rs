use crate::data_fetcher::models::{CatalogPlayer, Player, PlayerCatalog, RosterLineup, RosterView};
use tracing::debug;

use super::fallbacks::{
    resolve_depth_chart_order, resolve_injury_status, resolve_player_name, resolve_position,
};
use super::roast::roast_level;

/// Builds a [`Player`] from a catalog entry and scores it.
pub fn player_from_catalog(id: &str, entry: &CatalogPlayer) -> Player {
    let mut player = Player {
        id: id.to_string(),
        name: resolve_player_name(id, entry),
        position: resolve_position(entry),
        team: entry
            .team
            .as_deref()
            .map(str::trim)
            .filter(|team| !team.is_empty())
            .map(str::to_string),
        injury_status: resolve_injury_status(entry),
        age: entry.age,
        search_rank: entry.search_rank,
        depth_chart_order: resolve_depth_chart_order(entry),
        roast_level: 0,
    };
    player.roast_level = roast_level(Some(&player));
    player
}

/// Resolves one id. Ids the catalog does not know become a placeholder;
/// resolution never fails and never drops an id.
pub fn resolve_player(id: &str, catalog: &PlayerCatalog) -> Player {
    match catalog.get(id) {
        Some(entry) => player_from_catalog(id, entry),
        None => {
            debug!("Player {id} missing from catalog, using placeholder");
            Player::placeholder(id)
        }
    }
}

/// Resolves a list of ids, preserving order and length.
pub fn resolve_players(ids: &[String], catalog: &PlayerCatalog) -> Vec<Player> {
    ids.iter().map(|id| resolve_player(id, catalog)).collect()
}

/// Resolves every roster view's starters and bench against the catalog.
pub fn build_lineups(views: &[RosterView], catalog: &PlayerCatalog) -> Vec<RosterLineup> {
    views
        .iter()
        .map(|view| RosterLineup {
            roster_id: view.roster_id,
            starters: resolve_players(&view.starters, catalog),
            bench: resolve_players(&view.bench, catalog),
        })
        .collect()
}

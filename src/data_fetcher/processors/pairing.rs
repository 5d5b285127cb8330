use crate::constants::defaults;
use crate::data_fetcher::models::{Game, GameSide, Manager, MatchupEntry, RosterLineup};
use std::collections::HashMap;
use tracing::{debug, info};

use super::fallbacks::{format_record, resolve_projected_points};

/// Pairs the week's matchup entries into head-to-head [`Game`]s.
///
/// Entries are grouped by matchup id. Only groups of exactly two become a
/// game; byes (null matchup id), orphans and oversized groups are dropped
/// without error. Games are numbered `game-1`, `game-2`, ... in the order
/// each group first appears in `matchups`.
pub fn pair_matchups(
    matchups: &[MatchupEntry],
    managers: &[Manager],
    lineups: &[RosterLineup],
) -> Vec<Game> {
    let mut order: Vec<u32> = Vec::new();
    let mut groups: HashMap<u32, Vec<&MatchupEntry>> = HashMap::new();

    for entry in matchups {
        let Some(matchup_id) = entry.matchup_id else {
            debug!("Roster {} has no matchup this week", entry.roster_id);
            continue;
        };
        groups
            .entry(matchup_id)
            .or_insert_with(|| {
                order.push(matchup_id);
                Vec::new()
            })
            .push(entry);
    }

    let managers_by_roster: HashMap<u32, &Manager> =
        managers.iter().map(|m| (m.roster_id, m)).collect();
    let lineups_by_roster: HashMap<u32, &RosterLineup> =
        lineups.iter().map(|l| (l.roster_id, l)).collect();

    let mut games = Vec::new();
    for matchup_id in order {
        let entries = &groups[&matchup_id];
        let [first, second] = entries.as_slice() else {
            debug!(
                "Skipping matchup {} with {} entries",
                matchup_id,
                entries.len()
            );
            continue;
        };

        let side = |entry: &MatchupEntry| {
            build_side(
                entry,
                managers_by_roster.get(&entry.roster_id).copied(),
                lineups_by_roster.get(&entry.roster_id).copied(),
            )
        };

        games.push(Game {
            id: format!("game-{}", games.len() + 1),
            matchup_id,
            team1: side(*first),
            team2: side(*second),
        });
    }

    info!("Paired {} games from {} matchup entries", games.len(), matchups.len());
    games
}

fn build_side(
    entry: &MatchupEntry,
    manager: Option<&Manager>,
    lineup: Option<&RosterLineup>,
) -> GameSide {
    let (display_name, team_name, record) = match manager {
        Some(m) => (m.display_name.clone(), m.team_name.clone(), m.record.clone()),
        None => (
            defaults::UNKNOWN_MANAGER.to_string(),
            format!("{}'s Team", defaults::UNKNOWN_MANAGER),
            format_record(0, 0),
        ),
    };

    GameSide {
        roster_id: entry.roster_id,
        manager: display_name,
        team_name,
        record,
        projected_points: resolve_projected_points(entry),
        starters: lineup.map(|l| l.starters.clone()).unwrap_or_default(),
        bench: lineup.map(|l| l.bench.clone()).unwrap_or_default(),
    }
}

use crate::data_fetcher::models::{Manager, MatchupEntry, Roster, RosterView, User};
use std::collections::{HashMap, HashSet};
use tracing::debug;

use super::fallbacks::{
    format_record, resolve_display_name, resolve_losses, resolve_starters, resolve_team_name,
    resolve_wins,
};

/// Builds one [`Manager`] per roster, joined to the roster's owning user.
///
/// Rosters without a matching user get the "Unknown Manager" placeholder.
/// The result is ordered by roster id.
pub fn build_managers(rosters: &[Roster], users: &[User]) -> Vec<Manager> {
    let users_by_id: HashMap<&str, &User> =
        users.iter().map(|u| (u.user_id.as_str(), u)).collect();

    let mut managers: Vec<Manager> = rosters
        .iter()
        .map(|roster| {
            let user = roster
                .owner_id
                .as_deref()
                .and_then(|owner| users_by_id.get(owner).copied());
            if user.is_none() {
                debug!(
                    "Roster {} has no matching user (owner {:?})",
                    roster.roster_id, roster.owner_id
                );
            }

            let display_name = resolve_display_name(user);
            let team_name = resolve_team_name(roster, user, &display_name);

            Manager {
                user_id: user.map(|u| u.user_id.clone()),
                display_name,
                team_name,
                roster_id: roster.roster_id,
                record: format_record(resolve_wins(roster), resolve_losses(roster)),
            }
        })
        .collect();

    managers.sort_by_key(|m| m.roster_id);
    managers
}

/// Splits every roster into this week's starters and bench.
///
/// Starters come from the roster's entry in the week's matchups (falling back
/// to the roster's own starters); bench is every other rostered player.
pub fn build_roster_views(rosters: &[Roster], matchups: &[MatchupEntry]) -> Vec<RosterView> {
    let entries_by_roster: HashMap<u32, &MatchupEntry> =
        matchups.iter().map(|e| (e.roster_id, e)).collect();

    rosters
        .iter()
        .map(|roster| {
            let starters = resolve_starters(roster, entries_by_roster.get(&roster.roster_id).copied());
            let bench = bench_ids(roster.player_ids(), &starters);

            RosterView {
                roster_id: roster.roster_id,
                owner_id: roster.owner_id.clone(),
                starters,
                bench,
                wins: resolve_wins(roster),
                losses: resolve_losses(roster),
            }
        })
        .collect()
}

/// Set difference `players - starters`, keeping the roster's order.
pub fn bench_ids(players: &[String], starters: &[String]) -> Vec<String> {
    let starting: HashSet<&str> = starters.iter().map(String::as_str).collect();
    let mut seen: HashSet<&str> = HashSet::new();
    let mut bench = Vec::new();
    for id in players {
        if !starting.contains(id.as_str()) && seen.insert(id.as_str()) {
            bench.push(id.clone());
        }
    }
    bench
}

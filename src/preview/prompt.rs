// Prompt templates for weekly matchup previews.
//
// Each prompt carries the matchup identity, both lineups grouped by position
// and a precomputed list of roast targets, so the model writes jokes instead
// of doing bookkeeping.

use crate::constants::generation::ROAST_TARGET_THRESHOLD;
use crate::data_fetcher::models::{Game, GameSide, League, Player};
use std::collections::BTreeMap;

/// Display order of lineup positions. Positions not listed follow
/// alphabetically.
const POSITION_ORDER: [&str; 7] = ["QB", "RB", "WR", "TE", "FLEX", "K", "DEF"];

/// League-level facts shared by every prompt of a run.
#[derive(Debug, Clone, PartialEq)]
pub struct LeagueContext {
    pub league_name: String,
    pub week: u32,
    pub playoffs: bool,
}

impl LeagueContext {
    pub fn from_league(league: &League, week: u32) -> Self {
        Self {
            league_name: league.display_name().to_string(),
            week,
            playoffs: league.is_playoff_week(),
        }
    }
}

/// The static system prompt for every preview call.
pub fn system_prompt() -> String {
    "You are a roast comedian moonlighting as a fantasy football analyst.\n\
     You write short weekly matchup previews for a group of friends in a private league.\n\
     Be savage about bad lineups, washed-up veterans and injured starters, but never cruel about real people.\n\
     Use only the facts you are given. Do not invent stats or injuries.\n\
     Always answer with a single JSON object of the form {\"preview\": \"...\"} and nothing else."
        .to_string()
}

/// Builds the user prompt for one game.
pub fn build_preview_prompt(game: &Game, context: &LeagueContext) -> String {
    let mut prompt = String::with_capacity(2048);

    prompt.push_str(&format!(
        "## LEAGUE\n{} | Week {}{}\n\n",
        context.league_name,
        context.week,
        if context.playoffs { " | PLAYOFFS" } else { "" }
    ));

    prompt.push_str(&format!(
        "## MATCHUP\n{} vs {}\n\n",
        game.team1.team_name, game.team2.team_name
    ));

    prompt.push_str(&format_side(&game.team1));
    prompt.push_str(&format_side(&game.team2));

    let targets = roast_targets(game);
    prompt.push_str("## ROAST TARGETS\n");
    if targets.is_empty() {
        prompt.push_str("  (none, find something else to mock)\n");
    }
    for (team_name, player) in &targets {
        prompt.push_str(&format!(
            "  {} ({}, {}) on {} - roast level {}/4\n",
            player.name,
            player.position,
            team_label(player),
            team_name,
            player.roast_level
        ));
    }
    prompt.push('\n');

    prompt.push_str(
        "## INSTRUCTIONS\n\
         Write the preview in exactly three sections, each starting with its heading on its own line:\n\
         THE MATCHUP: who is playing, records and projections.\n\
         ROAST ZONE: roast the roast targets and any questionable lineup choices.\n\
         PREDICTION: pick a winner with a projected score.\n\
         Keep it under 250 words. Respond with JSON only: {\"preview\": \"<the three sections>\"}\n",
    );

    prompt
}

/// Formats one side: identity, projection, starters by position and the bench.
fn format_side(side: &GameSide) -> String {
    let mut out = format!(
        "## {}\nManager: {} | Record: {} | Projected: {:.1}\nStarters:\n",
        side.team_name, side.manager, side.record, side.projected_points
    );

    if side.starters.is_empty() {
        out.push_str("  (no starters set)\n");
    }
    for (position, players) in group_by_position(&side.starters) {
        let names = players
            .iter()
            .map(|p| format_player(p))
            .collect::<Vec<_>>()
            .join(", ");
        out.push_str(&format!("  {position}: {names}\n"));
    }

    let bench = if side.bench.is_empty() {
        "(empty)".to_string()
    } else {
        side.bench
            .iter()
            .map(format_player)
            .collect::<Vec<_>>()
            .join(", ")
    };
    out.push_str(&format!("Bench: {bench}\n\n"));
    out
}

/// Groups players by position, ordered by [`POSITION_ORDER`] then alphabetically.
/// Players keep their lineup order within a position.
fn group_by_position(players: &[Player]) -> Vec<(&str, Vec<&Player>)> {
    let mut groups: BTreeMap<(usize, &str), Vec<&Player>> = BTreeMap::new();
    for player in players {
        let position = player.position.as_str();
        let rank = POSITION_ORDER
            .iter()
            .position(|p| *p == position)
            .unwrap_or(POSITION_ORDER.len());
        groups.entry((rank, position)).or_default().push(player);
    }

    groups
        .into_iter()
        .map(|((_, position), players)| (position, players))
        .collect()
}

fn format_player(player: &Player) -> String {
    let mut out = format!("{} ({})", player.name, team_label(player));
    if !player.is_healthy() {
        out.push_str(&format!(" [{}]", player.injury_status));
    }
    out
}

fn team_label(player: &Player) -> &str {
    player.team.as_deref().unwrap_or("FA")
}

/// Starters and bench players worth roasting, most roastable first.
fn roast_targets(game: &Game) -> Vec<(&str, &Player)> {
    let mut targets: Vec<(&str, &Player)> = [&game.team1, &game.team2]
        .into_iter()
        .flat_map(|side| {
            side.starters
                .iter()
                .chain(&side.bench)
                .filter(|p| p.roast_level >= ROAST_TARGET_THRESHOLD)
                .map(move |p| (side.team_name.as_str(), p))
        })
        .collect();
    // Stable sort keeps lineup order among equal levels
    targets.sort_by(|a, b| b.1.roast_level.cmp(&a.1.roast_level));
    targets
}

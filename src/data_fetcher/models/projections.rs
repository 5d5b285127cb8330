//! Read-only projections derived from the wire models on every run.

use super::league::League;
use super::matchups::MatchupEntry;
use super::players::Player;
use serde::{Deserialize, Serialize};

/// A league member joined to the roster they own.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Manager {
    pub user_id: Option<String>,
    pub display_name: String,
    pub team_name: String,
    pub roster_id: u32,
    /// Win-loss record, e.g. `"5-2"`.
    pub record: String,
}

/// Starter and bench ids of one roster for the current week.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RosterView {
    pub roster_id: u32,
    pub owner_id: Option<String>,
    pub starters: Vec<String>,
    pub bench: Vec<String>,
    pub wins: u32,
    pub losses: u32,
}

/// Starters and bench of one roster resolved against the player catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RosterLineup {
    pub roster_id: u32,
    pub starters: Vec<Player>,
    pub bench: Vec<Player>,
}

/// One side of a head-to-head game.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameSide {
    pub roster_id: u32,
    pub manager: String,
    pub team_name: String,
    pub record: String,
    pub projected_points: f64,
    pub starters: Vec<Player>,
    pub bench: Vec<Player>,
}

/// A paired head-to-head matchup for the current week.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Game {
    pub id: String,
    pub matchup_id: u32,
    pub team1: GameSide,
    pub team2: GameSide,
}

impl Game {
    /// Short label used in logs, e.g. `"Ava's Team vs Bench Mob"`.
    pub fn label(&self) -> String {
        format!("{} vs {}", self.team1.team_name, self.team2.team_name)
    }
}

/// Everything the aggregator produces for one run.
#[derive(Debug, Clone)]
pub struct LeagueSnapshot {
    pub league: League,
    pub week: u32,
    pub managers: Vec<Manager>,
    pub rosters: Vec<RosterView>,
    pub lineups: Vec<RosterLineup>,
    pub matchups: Vec<MatchupEntry>,
}

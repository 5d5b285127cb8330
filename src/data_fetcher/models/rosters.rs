use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct RosterSettings {
    #[serde(default)]
    pub wins: Option<u32>,
    #[serde(default)]
    pub losses: Option<u32>,
    #[serde(default)]
    pub team_name: Option<String>,
}

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct RosterMetadata {
    #[serde(default)]
    pub team_name: Option<String>,
}

/// A manager's roster as returned by the rosters endpoint.
#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct Roster {
    pub roster_id: u32,
    #[serde(default)]
    pub owner_id: Option<String>,
    #[serde(default)]
    pub players: Option<Vec<String>>,
    #[serde(default)]
    pub starters: Option<Vec<String>>,
    #[serde(default)]
    pub settings: Option<RosterSettings>,
    #[serde(default)]
    pub metadata: Option<RosterMetadata>,
}

impl Roster {
    /// Every player id held by the roster.
    pub fn player_ids(&self) -> &[String] {
        self.players.as_deref().unwrap_or_default()
    }
}

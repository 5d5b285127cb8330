use serde::{Deserialize, Serialize};

/// One roster's entry in a week's matchup list.
///
/// Two entries sharing a `matchup_id` play each other that week; a null
/// `matchup_id` marks a bye.
#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct MatchupEntry {
    pub roster_id: u32,
    #[serde(default)]
    pub matchup_id: Option<u32>,
    #[serde(default)]
    pub starters: Option<Vec<String>>,
    #[serde(default)]
    pub players: Option<Vec<String>>,
    #[serde(default)]
    pub points: Option<f64>,
    #[serde(default)]
    pub projected_points: Option<f64>,
}

use crate::constants::defaults;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Player catalog keyed by player id, as returned by `/players/nfl`.
pub type PlayerCatalog = HashMap<String, CatalogPlayer>;

/// A catalog entry. Every field is optional on the wire; team defenses for
/// example carry no `full_name` or `age`.
#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct CatalogPlayer {
    #[serde(default)]
    pub full_name: Option<String>,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub position: Option<String>,
    #[serde(default)]
    pub team: Option<String>,
    #[serde(default)]
    pub injury_status: Option<String>,
    #[serde(default)]
    pub age: Option<u32>,
    #[serde(default)]
    pub search_rank: Option<u32>,
    #[serde(default)]
    pub depth_chart_order: Option<u32>,
}

/// A resolved player as it appears on a game side.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct Player {
    pub id: String,
    pub name: String,
    pub position: String,
    pub team: Option<String>,
    pub injury_status: String,
    pub age: Option<u32>,
    pub search_rank: Option<u32>,
    pub depth_chart_order: u32,
    /// Novelty score in 0..=4, filled in during enrichment.
    pub roast_level: u8,
}

impl Player {
    /// Stand-in for an id the catalog does not know.
    pub fn placeholder(id: &str) -> Self {
        Player {
            id: id.to_string(),
            name: format!("Unknown ({id})"),
            position: defaults::UNKNOWN_POSITION.to_string(),
            team: None,
            injury_status: defaults::INJURY_STATUS.to_string(),
            age: None,
            search_rank: None,
            depth_chart_order: defaults::DEPTH_CHART_ORDER,
            roast_level: 0,
        }
    }

    pub fn is_healthy(&self) -> bool {
        self.injury_status == defaults::INJURY_STATUS
    }
}

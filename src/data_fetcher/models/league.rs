use crate::constants::defaults;
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct LeagueSettings {
    /// Current scoring week ("leg") of the season.
    #[serde(default)]
    pub leg: Option<u32>,
    #[serde(default)]
    pub playoff_week_start: Option<u32>,
}

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct League {
    pub league_id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub season: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub total_rosters: Option<u32>,
    #[serde(default)]
    pub settings: Option<LeagueSettings>,
}

impl League {
    /// Week to fetch matchups for. A missing or zero `leg` means week 1.
    pub fn current_week(&self) -> u32 {
        self.settings
            .as_ref()
            .and_then(|settings| settings.leg)
            .filter(|leg| *leg > 0)
            .unwrap_or(defaults::WEEK)
    }

    /// Whether the current week falls in the playoff bracket.
    pub fn is_playoff_week(&self) -> bool {
        self.settings
            .as_ref()
            .and_then(|settings| settings.playoff_week_start)
            .is_some_and(|start| start > 0 && self.current_week() >= start)
    }

    /// Name shown in prompts and the summary artifact.
    pub fn display_name(&self) -> &str {
        self.name
            .as_deref()
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .unwrap_or(&self.league_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_league_deserialization_ignores_unknown_fields() {
        let json = r#"{
            "league_id": "1048270223675822080",
            "name": "Dynasty Dumpster Fire",
            "season": "2024",
            "status": "in_season",
            "total_rosters": 10,
            "sport": "nfl",
            "settings": { "leg": 7, "playoff_week_start": 15, "waiver_type": 2 }
        }"#;

        let league: League = serde_json::from_str(json).unwrap();
        assert_eq!(league.display_name(), "Dynasty Dumpster Fire");
        assert_eq!(league.current_week(), 7);
        assert_eq!(league.total_rosters, Some(10));
        assert!(!league.is_playoff_week());
    }

    #[test]
    fn test_current_week_defaults_to_one() {
        let no_settings: League = serde_json::from_str(r#"{"league_id": "1"}"#).unwrap();
        assert_eq!(no_settings.current_week(), 1);

        let null_leg: League =
            serde_json::from_str(r#"{"league_id": "1", "settings": {"leg": null}}"#).unwrap();
        assert_eq!(null_leg.current_week(), 1);

        let zero_leg: League =
            serde_json::from_str(r#"{"league_id": "1", "settings": {"leg": 0}}"#).unwrap();
        assert_eq!(zero_leg.current_week(), 1);
    }

    #[test]
    fn test_playoff_week_detection() {
        let league: League = serde_json::from_str(
            r#"{"league_id": "1", "settings": {"leg": 15, "playoff_week_start": 15}}"#,
        )
        .unwrap();
        assert!(league.is_playoff_week());
    }

    #[test]
    fn test_display_name_falls_back_to_id() {
        let league: League = serde_json::from_str(r#"{"league_id": "77", "name": "  "}"#).unwrap();
        assert_eq!(league.display_name(), "77");
    }
}

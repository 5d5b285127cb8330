//! Fallback chains for fields the platform may leave out.
//!
//! Each function walks its sources in a fixed priority order and skips
//! missing or blank values.

use crate::constants::defaults;
use crate::data_fetcher::models::{CatalogPlayer, MatchupEntry, Roster, User};

/// Returns the first non-blank candidate, trimmed.
fn first_non_blank<'a>(candidates: impl IntoIterator<Item = Option<&'a str>>) -> Option<&'a str> {
    candidates
        .into_iter()
        .flatten()
        .map(str::trim)
        .find(|value| !value.is_empty())
}

/// Display name of a roster owner: user display name, then "Unknown Manager".
pub fn resolve_display_name(user: Option<&User>) -> String {
    first_non_blank([user.and_then(|u| u.display_name.as_deref())])
        .unwrap_or(defaults::UNKNOWN_MANAGER)
        .to_string()
}

/// Team name, by priority:
/// 1. roster metadata `team_name`
/// 2. roster settings `team_name`
/// 3. user metadata `team_name`
/// 4. `"<display name>'s Team"`
pub fn resolve_team_name(roster: &Roster, user: Option<&User>, display_name: &str) -> String {
    first_non_blank([
        roster
            .metadata
            .as_ref()
            .and_then(|m| m.team_name.as_deref()),
        roster
            .settings
            .as_ref()
            .and_then(|s| s.team_name.as_deref()),
        user.and_then(|u| u.metadata.as_ref())
            .and_then(|m| m.team_name.as_deref()),
    ])
    .map(str::to_string)
    .unwrap_or_else(|| format!("{display_name}'s Team"))
}

pub fn resolve_wins(roster: &Roster) -> u32 {
    roster.settings.as_ref().and_then(|s| s.wins).unwrap_or(0)
}

pub fn resolve_losses(roster: &Roster) -> u32 {
    roster.settings.as_ref().and_then(|s| s.losses).unwrap_or(0)
}

/// Win-loss record string, e.g. `"5-2"`.
pub fn format_record(wins: u32, losses: u32) -> String {
    format!("{wins}-{losses}")
}

/// Player name: full name, then "first last", then "<team> <position>"
/// (team defenses), then "Unknown (<id>)".
pub fn resolve_player_name(id: &str, entry: &CatalogPlayer) -> String {
    if let Some(full_name) = first_non_blank([entry.full_name.as_deref()]) {
        return full_name.to_string();
    }

    let joined = [entry.first_name.as_deref(), entry.last_name.as_deref()]
        .into_iter()
        .flatten()
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ");
    if !joined.is_empty() {
        return joined;
    }

    match (entry.team.as_deref(), entry.position.as_deref()) {
        (Some(team), Some(position)) if !team.is_empty() => format!("{team} {position}"),
        _ => format!("Unknown ({id})"),
    }
}

pub fn resolve_injury_status(entry: &CatalogPlayer) -> String {
    first_non_blank([entry.injury_status.as_deref()])
        .unwrap_or(defaults::INJURY_STATUS)
        .to_string()
}

pub fn resolve_depth_chart_order(entry: &CatalogPlayer) -> u32 {
    entry
        .depth_chart_order
        .unwrap_or(defaults::DEPTH_CHART_ORDER)
}

pub fn resolve_position(entry: &CatalogPlayer) -> String {
    first_non_blank([entry.position.as_deref()])
        .unwrap_or(defaults::UNKNOWN_POSITION)
        .to_string()
}

/// Starter ids of a roster for the week: the week's matchup entry, then the
/// roster's own starters, then none.
///
/// Ids are returned as listed, including the platform's `"0"` empty-slot marker.
pub fn resolve_starters(roster: &Roster, entry: Option<&MatchupEntry>) -> Vec<String> {
    entry
        .and_then(|e| e.starters.as_ref())
        .or(roster.starters.as_ref())
        .cloned()
        .unwrap_or_default()
}

/// Projected points of a matchup side: `projected_points`, then `points`, then 0.
pub fn resolve_projected_points(entry: &MatchupEntry) -> f64 {
    entry.projected_points.or(entry.points).unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data_fetcher::models::{RosterMetadata, RosterSettings, UserMetadata};

    fn user(display_name: &str, team_name: Option<&str>) -> User {
        User {
            user_id: "u1".to_string(),
            display_name: Some(display_name.to_string()),
            metadata: Some(UserMetadata {
                team_name: team_name.map(str::to_string),
            }),
        }
    }

    fn roster(metadata_name: Option<&str>, settings_name: Option<&str>) -> Roster {
        Roster {
            roster_id: 1,
            owner_id: Some("u1".to_string()),
            metadata: Some(RosterMetadata {
                team_name: metadata_name.map(str::to_string),
            }),
            settings: Some(RosterSettings {
                wins: Some(4),
                losses: Some(3),
                team_name: settings_name.map(str::to_string),
            }),
            ..Roster::default()
        }
    }

    #[test]
    fn test_team_name_priority_order() {
        let u = user("Ava", Some("From User"));

        let r = roster(Some("From Metadata"), Some("From Settings"));
        assert_eq!(resolve_team_name(&r, Some(&u), "Ava"), "From Metadata");

        let r = roster(None, Some("From Settings"));
        assert_eq!(resolve_team_name(&r, Some(&u), "Ava"), "From Settings");

        let r = roster(None, None);
        assert_eq!(resolve_team_name(&r, Some(&u), "Ava"), "From User");
    }

    #[test]
    fn test_team_name_falls_back_to_display_name() {
        let u = user("Ava", None);
        let r = roster(None, None);
        assert_eq!(resolve_team_name(&r, Some(&u), "Ava"), "Ava's Team");
    }

    #[test]
    fn test_blank_team_names_are_skipped() {
        let u = user("Ava", Some("   "));
        let r = roster(Some(""), None);
        assert_eq!(resolve_team_name(&r, Some(&u), "Ava"), "Ava's Team");
    }

    #[test]
    fn test_display_name_fallback() {
        assert_eq!(resolve_display_name(None), "Unknown Manager");

        let nameless = User {
            user_id: "u9".to_string(),
            ..User::default()
        };
        assert_eq!(resolve_display_name(Some(&nameless)), "Unknown Manager");
        assert_eq!(resolve_display_name(Some(&user("Ava", None))), "Ava");
    }

    #[test]
    fn test_record_resolution() {
        let r = roster(None, None);
        assert_eq!(format_record(resolve_wins(&r), resolve_losses(&r)), "4-3");

        let bare = Roster::default();
        assert_eq!(format_record(resolve_wins(&bare), resolve_losses(&bare)), "0-0");
    }

    #[test]
    fn test_player_name_chain() {
        let full = CatalogPlayer {
            full_name: Some("Amon-Ra St. Brown".to_string()),
            first_name: Some("Amon-Ra".to_string()),
            ..CatalogPlayer::default()
        };
        assert_eq!(resolve_player_name("7547", &full), "Amon-Ra St. Brown");

        let parts = CatalogPlayer {
            first_name: Some("Kansas City".to_string()),
            last_name: Some("Chiefs".to_string()),
            ..CatalogPlayer::default()
        };
        assert_eq!(resolve_player_name("KC", &parts), "Kansas City Chiefs");

        let defense = CatalogPlayer {
            team: Some("BUF".to_string()),
            position: Some("DEF".to_string()),
            ..CatalogPlayer::default()
        };
        assert_eq!(resolve_player_name("BUF", &defense), "BUF DEF");

        assert_eq!(
            resolve_player_name("123", &CatalogPlayer::default()),
            "Unknown (123)"
        );
    }

    #[test]
    fn test_player_field_defaults() {
        let empty = CatalogPlayer::default();
        assert_eq!(resolve_injury_status(&empty), "Healthy");
        assert_eq!(resolve_depth_chart_order(&empty), 1);
        assert_eq!(resolve_position(&empty), "UNKNOWN");

        let hurt = CatalogPlayer {
            injury_status: Some("Out".to_string()),
            depth_chart_order: Some(2),
            ..CatalogPlayer::default()
        };
        assert_eq!(resolve_injury_status(&hurt), "Out");
        assert_eq!(resolve_depth_chart_order(&hurt), 2);
    }

    #[test]
    fn test_starters_prefer_matchup_entry() {
        let r = Roster {
            starters: Some(vec!["a".into(), "b".into()]),
            ..Roster::default()
        };
        let entry = MatchupEntry {
            roster_id: 1,
            starters: Some(vec!["c".into(), "0".into(), "d".into()]),
            ..MatchupEntry::default()
        };

        assert_eq!(resolve_starters(&r, Some(&entry)), vec!["c", "0", "d"]);
        assert_eq!(resolve_starters(&r, None), vec!["a", "b"]);
        assert!(resolve_starters(&Roster::default(), None).is_empty());
    }

    #[test]
    fn test_projected_points_chain() {
        let mut entry = MatchupEntry {
            roster_id: 1,
            projected_points: Some(118.4),
            points: Some(90.0),
            ..MatchupEntry::default()
        };
        assert_eq!(resolve_projected_points(&entry), 118.4);

        entry.projected_points = None;
        assert_eq!(resolve_projected_points(&entry), 90.0);

        entry.points = None;
        assert_eq!(resolve_projected_points(&entry), 0.0);
    }
}

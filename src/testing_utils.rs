use crate::data_fetcher::models::{
    Game, GameSide, League, LeagueSettings, MatchupEntry, PlayerCatalog, Roster, RosterMetadata,
    RosterSettings, User, UserMetadata,
};
use crate::data_fetcher::processors::resolve_players;
use serde_json::{Value, json};

/// Test utilities for creating mock league data
///
/// The `*_json` fixtures describe one small four-team league as the platform
/// API would return it; the typed builders create single values for unit tests.
pub struct TestDataBuilder;

impl TestDataBuilder {
    pub const LEAGUE_ID: &'static str = "784512";

    /// Creates a user, optionally with a team name in its metadata
    pub fn user(user_id: &str, display_name: &str, team_name: Option<&str>) -> User {
        User {
            user_id: user_id.to_string(),
            display_name: Some(display_name.to_string()),
            metadata: team_name.map(|name| UserMetadata {
                team_name: Some(name.to_string()),
            }),
        }
    }

    /// Creates a roster with the given players and record
    pub fn roster(
        roster_id: u32,
        owner_id: Option<&str>,
        players: &[&str],
        wins: u32,
        losses: u32,
    ) -> Roster {
        Roster {
            roster_id,
            owner_id: owner_id.map(str::to_string),
            players: Some(players.iter().map(|p| p.to_string()).collect()),
            starters: None,
            settings: Some(RosterSettings {
                wins: Some(wins),
                losses: Some(losses),
                team_name: None,
            }),
            metadata: Some(RosterMetadata::default()),
        }
    }

    /// Creates a matchup entry; `points` is left unset so only the projection counts
    pub fn matchup(
        roster_id: u32,
        matchup_id: Option<u32>,
        starters: &[&str],
        projected_points: Option<f64>,
    ) -> MatchupEntry {
        MatchupEntry {
            roster_id,
            matchup_id,
            starters: Some(starters.iter().map(|s| s.to_string()).collect()),
            players: None,
            points: None,
            projected_points,
        }
    }

    /// Creates league metadata on the given week
    pub fn league(week: u32) -> League {
        League {
            league_id: Self::LEAGUE_ID.to_string(),
            name: Some("The Roast Bowl".to_string()),
            season: Some("2024".to_string()),
            status: Some("in_season".to_string()),
            total_rosters: Some(4),
            settings: Some(LeagueSettings {
                leg: Some(week),
                playoff_week_start: Some(15),
            }),
        }
    }

    /// The fixture player catalog in typed form
    pub fn catalog() -> PlayerCatalog {
        serde_json::from_value(Self::catalog_json()).unwrap_or_default()
    }

    /// Creates a game between two teams with a mix of players.
    ///
    /// Team 1 starts Mahomes and Rodgers; team 2 starts Kelce and the KC defense.
    pub fn game(id: &str, team1: &str, team2: &str) -> Game {
        let catalog = Self::catalog();
        let ids = |list: &[&str]| list.iter().map(|s| s.to_string()).collect::<Vec<_>>();

        Game {
            id: id.to_string(),
            matchup_id: 1,
            team1: GameSide {
                roster_id: 1,
                manager: "Ava".to_string(),
                team_name: team1.to_string(),
                record: "5-2".to_string(),
                projected_points: 118.4,
                starters: resolve_players(&ids(&["4046", "96"]), &catalog),
                bench: resolve_players(&ids(&["9999"]), &catalog),
            },
            team2: GameSide {
                roster_id: 2,
                manager: "Ben".to_string(),
                team_name: team2.to_string(),
                record: "3-4".to_string(),
                projected_points: 97.06,
                starters: resolve_players(&ids(&["1466", "KC"]), &catalog),
                bench: Vec::new(),
            },
        }
    }

    pub fn league_json(week: u32) -> Value {
        json!({
            "league_id": Self::LEAGUE_ID,
            "name": "The Roast Bowl",
            "season": "2024",
            "status": "in_season",
            "sport": "nfl",
            "total_rosters": 4,
            "settings": {
                "leg": week,
                "playoff_week_start": 15,
                "num_teams": 4
            }
        })
    }

    pub fn users_json() -> Value {
        json!([
            {"user_id": "u1", "display_name": "Ava", "metadata": {}},
            {"user_id": "u2", "display_name": "Ben", "metadata": {"team_name": "Ben There Done That"}},
            {"user_id": "u3", "display_name": "Cara", "metadata": null},
            {"user_id": "u4", "display_name": "Dev"}
        ])
    }

    pub fn rosters_json() -> Value {
        json!([
            {
                "roster_id": 1,
                "owner_id": "u1",
                "players": ["4046", "6794", "9999"],
                "starters": ["4046", "6794"],
                "settings": {"wins": 5, "losses": 2, "fpts": 801}
            },
            {
                "roster_id": 2,
                "owner_id": "u2",
                "players": ["96", "1466", "KC"],
                "starters": ["96", "1466", "KC"],
                "settings": {"wins": 3, "losses": 4}
            },
            {
                "roster_id": 3,
                "owner_id": "u3",
                "players": ["4034", "2133"],
                "starters": ["4034"],
                "settings": {"wins": 4, "losses": 3},
                "metadata": {"team_name": "Gridiron Gremlins"}
            },
            {
                "roster_id": 4,
                "owner_id": "u4",
                "players": ["3164"],
                "starters": ["3164"],
                "settings": {"wins": 2, "losses": 5}
            }
        ])
    }

    pub fn matchups_json() -> Value {
        json!([
            {"roster_id": 1, "matchup_id": 1, "starters": ["4046", "6794"], "points": 0, "projected_points": 118.4},
            {"roster_id": 2, "matchup_id": 1, "starters": ["96", "1466", "KC"], "points": 0, "projected_points": 97.06},
            {"roster_id": 3, "matchup_id": 2, "starters": ["4034", "0"], "points": 104.2},
            {"roster_id": 4, "matchup_id": 2, "starters": ["3164"]}
        ])
    }

    /// Every platform read of the fixture league as `(path, body)` pairs,
    /// with matchups served for `week`.
    pub fn platform_routes(week: u32) -> Vec<(String, Value)> {
        let league_id = Self::LEAGUE_ID;
        vec![
            (format!("/league/{league_id}"), Self::league_json(week)),
            (format!("/league/{league_id}/users"), Self::users_json()),
            (format!("/league/{league_id}/rosters"), Self::rosters_json()),
            (
                format!("/league/{league_id}/matchups/{week}"),
                Self::matchups_json(),
            ),
            ("/players/nfl".to_string(), Self::catalog_json()),
        ]
    }

    pub fn catalog_json() -> Value {
        json!({
            "4046": {
                "full_name": "Patrick Mahomes", "position": "QB", "team": "KC",
                "age": 29, "search_rank": 12, "depth_chart_order": 1, "injury_status": null
            },
            "96": {
                "full_name": "Aaron Rodgers", "position": "QB", "team": "NYJ",
                "age": 40, "search_rank": 180, "depth_chart_order": 1
            },
            "6794": {
                "full_name": "Justin Jefferson", "position": "WR", "team": "MIN",
                "age": 25, "search_rank": 3, "depth_chart_order": 1
            },
            "1466": {
                "full_name": "Travis Kelce", "position": "TE", "team": "KC",
                "age": 35, "search_rank": 1500, "depth_chart_order": 1
            },
            "4034": {
                "full_name": "Christian McCaffrey", "position": "RB", "team": "SF",
                "age": 28, "search_rank": 8, "depth_chart_order": 1,
                "injury_status": "Questionable"
            },
            "2133": {
                "full_name": "Davante Adams", "position": "WR", "team": "NYJ",
                "age": 31, "search_rank": 40, "depth_chart_order": 3
            },
            "3164": {
                "first_name": "Harrison", "last_name": "Butker", "position": "K", "team": "KC"
            },
            "KC": {
                "position": "DEF", "team": "KC"
            }
        })
    }
}

/// Mounts every read of the fixture league on `server`, with matchups for `week`.
#[cfg(test)]
pub async fn mount_league(server: &wiremock::MockServer, week: u32) {
    use wiremock::{
        Mock, ResponseTemplate,
        matchers::{method, path},
    };

    for (route, body) in TestDataBuilder::platform_routes(week) {
        Mock::given(method("GET"))
            .and(path(route))
            .respond_with(ResponseTemplate::new(200).set_body_json(body))
            .mount(server)
            .await;
    }
}

//! URL building utilities for the platform read API

/// Builds the league metadata URL.
///
/// # Example
/// ```
/// use roast_previews::data_fetcher::api::build_league_url;
///
/// let url = build_league_url("https://api.sleeper.app/v1", "123");
/// assert_eq!(url, "https://api.sleeper.app/v1/league/123");
/// ```
pub fn build_league_url(base_url: &str, league_id: &str) -> String {
    format!("{base_url}/league/{league_id}")
}

/// Builds the league users URL.
///
/// # Example
/// ```
/// use roast_previews::data_fetcher::api::build_users_url;
///
/// let url = build_users_url("https://api.sleeper.app/v1", "123");
/// assert_eq!(url, "https://api.sleeper.app/v1/league/123/users");
/// ```
pub fn build_users_url(base_url: &str, league_id: &str) -> String {
    format!("{base_url}/league/{league_id}/users")
}

/// Builds the league rosters URL.
pub fn build_rosters_url(base_url: &str, league_id: &str) -> String {
    format!("{base_url}/league/{league_id}/rosters")
}

/// Builds the URL of one week's matchups.
///
/// # Example
/// ```
/// use roast_previews::data_fetcher::api::build_matchups_url;
///
/// let url = build_matchups_url("https://api.sleeper.app/v1", "123", 7);
/// assert_eq!(url, "https://api.sleeper.app/v1/league/123/matchups/7");
/// ```
pub fn build_matchups_url(base_url: &str, league_id: &str, week: u32) -> String {
    format!("{base_url}/league/{league_id}/matchups/{week}")
}

/// Builds the NFL player catalog URL.
pub fn build_players_url(base_url: &str) -> String {
    format!("{base_url}/players/nfl")
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASE: &str = "https://api.sleeper.app/v1";

    #[test]
    fn test_league_urls() {
        assert_eq!(build_league_url(BASE, "42"), format!("{BASE}/league/42"));
        assert_eq!(build_users_url(BASE, "42"), format!("{BASE}/league/42/users"));
        assert_eq!(build_rosters_url(BASE, "42"), format!("{BASE}/league/42/rosters"));
        assert_eq!(
            build_matchups_url(BASE, "42", 13),
            format!("{BASE}/league/42/matchups/13")
        );
    }

    #[test]
    fn test_players_url_is_league_independent() {
        assert_eq!(build_players_url(BASE), format!("{BASE}/players/nfl"));
    }
}

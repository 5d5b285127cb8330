use crate::error::AppError;

/// Validates the configuration settings
///
/// # Validation Rules
/// - League id cannot be empty and must not contain path separators
/// - API base URL must carry an http:// or https:// scheme
/// - Retry budget must allow at least one attempt
/// - If log file path is provided, it cannot be empty
pub fn validate_config(
    league_id: &str,
    api_base_url: &str,
    fetch_retry_attempts: u32,
    log_file_path: &Option<String>,
) -> Result<(), AppError> {
    if league_id.trim().is_empty() {
        return Err(AppError::config_error(
            "League id cannot be empty (set league_id, SLEEPER_LEAGUE_ID or --league-id)",
        ));
    }

    if league_id.contains('/') || league_id.contains('?') {
        return Err(AppError::config_error(format!(
            "League id '{league_id}' contains invalid characters"
        )));
    }

    if !api_base_url.starts_with("http://") && !api_base_url.starts_with("https://") {
        return Err(AppError::config_error(
            "API base URL must start with http:// or https://",
        ));
    }

    if fetch_retry_attempts == 0 {
        return Err(AppError::config_error(
            "fetch_retry_attempts must be at least 1",
        ));
    }

    if let Some(log_path) = log_file_path
        && log_path.is_empty()
    {
        return Err(AppError::config_error("Log file path cannot be empty"));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASE: &str = "https://api.sleeper.app/v1";

    #[test]
    fn test_valid_config() {
        assert!(validate_config("123456789", BASE, 3, &None).is_ok());
        assert!(validate_config("42", "http://localhost:8080", 1, &Some("/tmp/a.log".into())).is_ok());
    }

    #[test]
    fn test_empty_league_id_rejected() {
        assert!(validate_config("", BASE, 3, &None).is_err());
        assert!(validate_config("   ", BASE, 3, &None).is_err());
    }

    #[test]
    fn test_league_id_with_separator_rejected() {
        assert!(validate_config("12/users", BASE, 3, &None).is_err());
    }

    #[test]
    fn test_base_url_without_scheme_rejected() {
        let result = validate_config("1", "api.sleeper.app/v1", 3, &None);
        assert!(matches!(result, Err(AppError::Config(_))));
    }

    #[test]
    fn test_zero_retry_budget_rejected() {
        assert!(validate_config("1", BASE, 0, &None).is_err());
    }

    #[test]
    fn test_empty_log_path_rejected() {
        assert!(validate_config("1", BASE, 3, &Some(String::new())).is_err());
    }
}

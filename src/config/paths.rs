use std::path::Path;

/// Where `config.toml` lives: a `roast_previews` folder inside the user's
/// config directory, or the working directory on systems that have none.
pub fn get_config_path() -> String {
    dirs::config_dir()
        .unwrap_or_else(|| Path::new(".").to_path_buf())
        .join("roast_previews")
        .join("config.toml")
        .to_string_lossy()
        .to_string()
}

/// Daily log files sit next to the config file, under `logs/`.
pub fn get_log_dir_path() -> String {
    dirs::config_dir()
        .unwrap_or_else(|| Path::new(".").to_path_buf())
        .join("roast_previews")
        .join("logs")
        .to_string_lossy()
        .to_string()
}

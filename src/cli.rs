use clap::Parser;
use clap::builder::styling::{AnsiColor, Effects, Styles};

fn get_styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
        .usage(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
        .literal(AnsiColor::Green.on_default())
        .placeholder(AnsiColor::Yellow.on_default())
        .error(AnsiColor::Red.on_default().effects(Effects::BOLD))
        .valid(AnsiColor::Green.on_default())
        .invalid(AnsiColor::Red.on_default())
}

/// Weekly fantasy football matchup previews, with a roast
///
/// Reads the league's rosters and this week's matchups, asks a generative
/// text service for a preview of every game and writes the results as JSON
/// for a static site.
///
/// The service credential is read from the OPENAI_API_KEY environment
/// variable or the config file. Without it, the run still writes an empty
/// preview set.
#[derive(Parser, Debug, Default)]
#[command(version, about, long_about = None)]
#[command(styles = get_styles())]
pub struct Args {
    /// League to preview. Overrides the config file and SLEEPER_LEAGUE_ID.
    #[arg(short = 'l', long = "league-id", value_name = "LEAGUE_ID")]
    pub league_id: Option<String>,

    /// Directory for previews.json, summary.json and games.json.
    #[arg(short = 'o', long = "output", value_name = "DIR")]
    pub output: Option<String>,

    /// Alternate config file instead of the platform default.
    #[arg(short = 'c', long = "config", value_name = "FILE")]
    pub config: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_all_flags() {
        let args = Args::try_parse_from([
            "roast_previews",
            "--league-id",
            "1048270223675822080",
            "--output",
            "site/data",
            "--config",
            "league.toml",
        ])
        .unwrap();

        assert_eq!(args.league_id.as_deref(), Some("1048270223675822080"));
        assert_eq!(args.output.as_deref(), Some("site/data"));
        assert_eq!(args.config.as_deref(), Some("league.toml"));
    }

    #[test]
    fn test_no_flags() {
        let args = Args::try_parse_from(["roast_previews"]).unwrap();
        assert!(args.league_id.is_none());
        assert!(args.output.is_none());
        assert!(args.config.is_none());
    }

    #[test]
    fn test_credential_is_not_a_flag() {
        assert!(Args::try_parse_from(["roast_previews", "--api-key", "sk"]).is_err());
    }
}

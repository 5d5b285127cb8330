//! Weekly fantasy football matchup previews, with a roast
//!
//! This library reads a league from the fantasy platform API, pairs this
//! week's head-to-head games, asks a generative text service for a preview
//! of each game and writes the results as JSON artifacts.
//!
//! # Examples
//!
//! ```rust,no_run
//! use roast_previews::config::Config;
//! use roast_previews::error::AppError;
//! use roast_previews::pipeline;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), AppError> {
//!     let mut config = Config::load(None).await?;
//!     config.league_id = "1048270223675822080".to_string();
//!     config.validate()?;
//!
//!     let summary = pipeline::run(&config).await?;
//!     println!("{} previews for week {}", summary.total_previews, summary.week);
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod constants;
pub mod data_fetcher;
pub mod error;
pub mod logging;
pub mod output;
pub mod pipeline;
pub mod preview;
pub mod testing_utils;

// Re-export commonly used types for convenience
pub use config::Config;
pub use data_fetcher::api::aggregate_league_data;
pub use data_fetcher::models::{Game, GameSide, LeagueSnapshot, Manager, Player};
pub use data_fetcher::processors::{pair_matchups, roast_level};
pub use error::AppError;
pub use output::{PersistenceWriter, RunSummary};
pub use preview::{Preview, PreviewMap, generate_previews};

/// Current version of the library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");

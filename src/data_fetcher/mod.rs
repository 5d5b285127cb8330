pub mod api;
pub mod models;
pub mod processors;

pub use api::aggregate_league_data;
pub use models::{Game, LeagueSnapshot};

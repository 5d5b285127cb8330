pub mod league;
pub mod matchups;
pub mod players;
pub mod projections;
pub mod rosters;
pub mod users;

pub use league::{League, LeagueSettings};
pub use matchups::MatchupEntry;
pub use players::{CatalogPlayer, Player, PlayerCatalog};
pub use projections::{Game, GameSide, LeagueSnapshot, Manager, RosterLineup, RosterView};
pub use rosters::{Roster, RosterMetadata, RosterSettings};
pub use users::{User, UserMetadata};

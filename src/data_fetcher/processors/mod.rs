pub mod enrichment;
pub mod fallbacks;
pub mod managers;
pub mod pairing;
pub mod roast;

pub use enrichment::{build_lineups, resolve_players};
pub use managers::{build_managers, build_roster_views};
pub use pairing::pair_matchups;
pub use roast::{MAX_ROAST_LEVEL, roast_level};

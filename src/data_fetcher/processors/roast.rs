//! Roast level: a 0-4 novelty score that flavors the narrative.
//!
//! Older, deeper-buried and banged-up players score higher. The thresholds
//! are fixed business rules.

use crate::data_fetcher::models::Player;

/// Highest possible roast level.
pub const MAX_ROAST_LEVEL: u8 = 4;

const VETERAN_AGE: u32 = 32;
const ANCIENT_AGE: u32 = 35;
const OBSCURE_RANK: u32 = 1000;
const INVISIBLE_RANK: u32 = 2000;
const BURIED_DEPTH: u32 = 3;

/// Scores a player. Absent input scores 0.
///
/// Each rule adds one point; age and search-rank rules stack:
/// - age >= 32, and again at age >= 35
/// - search rank > 1000, and again above 2000
/// - depth-chart order >= 3
/// - injury status other than "Healthy"
///
/// The sum is capped at [`MAX_ROAST_LEVEL`].
pub fn roast_level(player: Option<&Player>) -> u8 {
    let Some(player) = player else {
        return 0;
    };

    let mut score: u8 = 0;

    if let Some(age) = player.age {
        if age >= VETERAN_AGE {
            score += 1;
        }
        if age >= ANCIENT_AGE {
            score += 1;
        }
    }

    if let Some(rank) = player.search_rank {
        if rank > OBSCURE_RANK {
            score += 1;
        }
        if rank > INVISIBLE_RANK {
            score += 1;
        }
    }

    if player.depth_chart_order >= BURIED_DEPTH {
        score += 1;
    }

    if !player.is_healthy() {
        score += 1;
    }

    score.min(MAX_ROAST_LEVEL)
}

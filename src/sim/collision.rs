//! Contact tests between the frog and everything else
//!
//! Two different proximity shapes are in play. Vehicles use independent
//! per-axis thresholds (a box). Logs, teleporters and the fly use the summed
//! per-axis gap (a diamond). The two are kept apart because the diamond is
//! much tighter than the box and gameplay depends on the difference.

use glam::Vec2;

use super::state::{Collectible, Frog, GameState, Hazard, Platform, ScoreZone, Teleporter};
use crate::consts::*;

/// Per-axis distance between two positions
#[inline]
pub fn gap(a: Vec2, b: Vec2) -> Vec2 {
    (a - b).abs()
}

/// Frog is inside a vehicle's box
pub fn frog_hits_hazard(frog: &Frog, hazard: &Hazard) -> bool {
    let g = gap(frog.pos, hazard.pos);
    g.x < (hazard.width + TILE) / 2.0 && g.y < HAZARD_REACH
}

/// Frog is standing on a log
pub fn frog_on_platform(frog: &Frog, platform: &Platform) -> bool {
    gap(frog.pos, platform.pos).element_sum() <= PLATFORM_REACH
}

/// Frog is standing on a teleporter
pub fn frog_on_teleporter(frog: &Frog, teleporter: &Teleporter) -> bool {
    gap(frog.pos, teleporter.pos).element_sum() <= PLATFORM_REACH
}

/// Frog is close enough to eat the fly (geometry only, ignores `killed`)
pub fn frog_touches_collectible(frog: &Frog, collectible: &Collectible) -> bool {
    gap(frog.pos, collectible.pos).element_sum() < COLLECTIBLE_REACH
}

/// Frog sits in the top row within tolerance of this home
pub fn zone_reached(frog: &Frog, zone: &ScoreZone) -> bool {
    frog.pos.y < RIVER_TOP_Y && (frog.pos.x - zone.x).abs() <= SCORE_ZONE_TOLERANCE
}

/// Frog is in one of the river rows
#[inline]
pub fn in_river(pos: Vec2) -> bool {
    (RIVER_TOP_Y..RIVER_BOTTOM_Y).contains(&pos.y)
}

/// Everything the frog touches in one snapshot
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Contacts {
    /// Touching any vehicle
    pub crashed: bool,
    /// First log under the frog (index into `platforms`)
    pub platform: Option<usize>,
    /// First teleporter under the frog (index into `teleporters`)
    pub teleporter: Option<usize>,
    /// Touching a fly that has not been eaten
    pub caught_collectible: bool,
    /// In the river with nothing underfoot
    pub drowned: bool,
    /// In the top row
    pub reached_top: bool,
}

impl Contacts {
    /// Check the frog against every entity of `state`
    pub fn detect(state: &GameState) -> Self {
        let frog = &state.frog;

        let crashed = state.hazards.iter().any(|h| frog_hits_hazard(frog, h));
        let platform = state
            .platforms
            .iter()
            .position(|p| frog_on_platform(frog, p));
        let teleporter = state
            .teleporters
            .iter()
            .position(|t| frog_on_teleporter(frog, t));
        let caught_collectible = state
            .live_collectibles()
            .any(|c| frog_touches_collectible(frog, c));
        let drowned = in_river(frog.pos) && platform.is_none() && teleporter.is_none();

        Self {
            crashed,
            platform,
            teleporter,
            caught_collectible,
            drowned,
            reached_top: frog.pos.y < RIVER_TOP_Y,
        }
    }
}

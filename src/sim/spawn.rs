//! Entity factories
//!
//! Pure constructors that turn lane/column parameters into entities. Ids are
//! handed out in construction order, so the same layout always yields the
//! same ids.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::state::{
    Collectible, EntityId, Hazard, Layout, Platform, ScoreZone, Sprite, Teleporter,
};
use crate::consts::*;

/// Sequential id allocator, restarted for every round
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IdSource {
    next: EntityId,
}

impl IdSource {
    pub fn next_id(&mut self) -> EntityId {
        let id = self.next;
        self.next += 1;
        id
    }
}

/// Vehicle for road lane `lane` (0 = truck lane nearest the river)
pub fn hazard(id: EntityId, lane: usize, heading_right: bool, x: f32) -> Hazard {
    let truck = lane == 0;
    let base_speed = if truck { TRUCK_SPEED } else { CAR_SPEED };
    let sprite = match (truck, heading_right) {
        (true, true) => Sprite::TruckRight,
        (true, false) => Sprite::TruckLeft,
        (false, true) => Sprite::CarRight,
        (false, false) => Sprite::CarLeft,
    };

    Hazard {
        id,
        pos: Vec2::new(x, row_y(HAZARD_FIRST_ROW + lane)),
        speed: if heading_right { base_speed } else { -base_speed },
        width: if truck { TILE * 2.0 } else { TILE },
        height: TILE,
        sprite,
    }
}

/// Log in river lane `lane`, column `column`. Odd lanes drift right.
pub fn platform(id: EntityId, lane: usize, column: usize) -> Platform {
    Platform {
        id,
        pos: Vec2::new((lane + column) as f32 * TILE, row_y(PLATFORM_FIRST_ROW + lane)),
        speed: if lane % 2 == 1 {
            PLATFORM_SPEED
        } else {
            -PLATFORM_SPEED
        },
        width: TILE,
        height: TILE,
        sprite: Sprite::Wood,
    }
}

/// Home slot `index` in the top row
pub fn score_zone(id: EntityId, index: usize) -> ScoreZone {
    ScoreZone {
        id,
        x: index as f32 * SCORE_ZONE_SPACING,
        sprite: Sprite::HomeFrog,
        scored: false,
    }
}

/// Fly riding `platform`, matching its position and speed
pub fn collectible(id: EntityId, platform: &Platform) -> Collectible {
    Collectible {
        id,
        pos: platform.pos,
        speed: platform.speed,
        width: TILE,
        height: TILE,
        sprite: Sprite::Fly,
        killed: false,
    }
}

/// Teleporter `index`, placed `3 * index + 2` rows from the top
pub fn teleporter(id: EntityId, index: usize) -> Teleporter {
    Teleporter {
        id,
        pos: Vec2::new(CANVAS_WIDTH / 6.0, row_y(index * 3 + 2)),
        sprite: Sprite::Teleporter,
        width: TILE,
        height: TILE,
        destination: None,
    }
}

/// All road lanes except the safe one, nearest the river first
pub fn hazards(layout: &Layout, ids: &mut IdSource) -> Vec<Hazard> {
    (0..HAZARD_LANES)
        .filter(|&lane| lane != SAFE_LANE)
        .map(|lane| {
            let row = HAZARD_FIRST_ROW + lane - 1;
            hazard(
                ids.next_id(),
                lane,
                layout.heading_right[row],
                layout.start_x[row],
            )
        })
        .collect()
}

/// Six lanes for each platform column, column by column
pub fn platforms(ids: &mut IdSource) -> Vec<Platform> {
    PLATFORM_COLUMNS
        .iter()
        .flat_map(|&column| (0..PLATFORM_LANES).map(move |lane| (lane, column)))
        .map(|(lane, column)| platform(ids.next_id(), lane, column))
        .collect()
}

pub fn score_zones(ids: &mut IdSource) -> Vec<ScoreZone> {
    (0..SCORE_ZONE_COUNT)
        .map(|i| score_zone(ids.next_id(), i))
        .collect()
}

/// The unlinked pair; the reducer links them on the first tick
pub fn teleporters(ids: &mut IdSource) -> Vec<Teleporter> {
    (0..TELEPORTER_COUNT)
        .map(|i| teleporter(ids.next_id(), i))
        .collect()
}

#[inline]
fn row_y(row: usize) -> f32 {
    row as f32 * TILE
}

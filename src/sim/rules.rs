//! Scoring and round rules
//!
//! Small policies applied by the tick once contacts are known.

use glam::Vec2;

use super::collision::{Contacts, zone_reached};
use super::spawn;
use super::state::{Frog, GameState, ScoreZone, Teleporter};
use crate::consts::*;

/// Every home is filled
pub fn round_complete(zones: &[ScoreZone]) -> bool {
    zones.iter().filter(|z| z.scored).count() == SCORE_ZONE_COUNT
}

/// Mark homes the frog is sitting in; returns how many flipped this call
pub fn fill_zones(zones: &mut [ScoreZone], frog: &Frog) -> usize {
    let mut filled = 0;
    for zone in zones.iter_mut().filter(|z| !z.scored) {
        if zone_reached(frog, zone) {
            zone.scored = true;
            filled += 1;
        }
    }
    filled
}

/// Points earned in one tick
pub fn points(zones_filled: usize, caught_collectible: bool) -> u64 {
    let mut points = zones_filled as u64 * SCORE_AWARD;
    if caught_collectible {
        points += SCORE_AWARD;
    }
    points
}

/// Gap-aligned x for a frog leaving the row below the homes
///
/// The outermost gaps are open towards the canvas edges.
pub fn gap_allows(x: f32) -> bool {
    (0..SCORE_ZONE_COUNT).any(|i| {
        let center = i as f32 * SCORE_ZONE_SPACING;
        let low = if i == 0 {
            f32::NEG_INFINITY
        } else {
            center - SCORE_ZONE_TOLERANCE
        };
        let high = if i == SCORE_ZONE_COUNT - 1 {
            f32::INFINITY
        } else {
            center + SCORE_ZONE_TOLERANCE
        };
        (low..=high).contains(&x)
    })
}

/// Where the frog ends up after this tick's contacts
///
/// Priority: home row, then a linked teleporter, then the log it rides.
pub fn frog_destination(state: &GameState, contacts: &Contacts) -> Option<Vec2> {
    if contacts.reached_top {
        return Some(Frog::start());
    }
    let linked = contacts
        .teleporter
        .and_then(|i| state.teleporters[i].destination)
        .and_then(|id| state.teleporter(id));
    if let Some(target) = linked {
        return Some(target.pos);
    }
    contacts.platform.map(|i| state.platforms[i].pos)
}

/// Point the second teleporter at the first, once
///
/// Returns true when the link was made by this call.
pub fn link_teleporters(teleporters: &mut [Teleporter]) -> bool {
    debug_assert_eq!(teleporters.len(), TELEPORTER_COUNT);
    let first = teleporters[0].id;
    match teleporters.get_mut(1) {
        Some(second) if second.destination.is_none() => {
            second.destination = Some(first);
            true
        }
        _ => false,
    }
}

/// Spawn the fly when there is none, or mark it eaten
pub fn update_collectibles(state: &mut GameState, caught: bool) {
    if state.collectibles.is_empty() {
        let platform = state.platforms[COLLECTIBLE_PLATFORM].clone();
        let fly = spawn::collectible(state.next_entity_id(), &platform);
        log::debug!("Fly {} spawned at {:?}", fly.id, fly.pos);
        state.collectibles.push(fly);
    } else if caught {
        for fly in &mut state.collectibles {
            fly.killed = true;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gaps() {
        for x in [0.0, 10.0, -30.0, 140.0, 150.0, 160.0, 290.0, 310.0, 440.0, 460.0, 590.0, 640.0] {
            assert!(gap_allows(x), "x = {x} should pass");
        }
        for x in [11.0, 50.0, 139.0, 161.0, 311.0, 400.0, 589.0] {
            assert!(!gap_allows(x), "x = {x} should be blocked");
        }
    }

    #[test]
    fn test_fill_zones_is_monotonic() {
        let mut state = GameState::new(2);
        state.frog.pos = Vec2::new(0.0, 0.0);
        assert_eq!(fill_zones(&mut state.score_zones, &state.frog), 1);
        assert!(state.score_zones[0].scored);
        // Already filled: no second award
        assert_eq!(fill_zones(&mut state.score_zones, &state.frog), 0);
        assert!(state.score_zones[0].scored);
    }

    #[test]
    fn test_points_stack() {
        assert_eq!(points(0, false), 0);
        assert_eq!(points(1, false), 100);
        assert_eq!(points(0, true), 100);
        assert_eq!(points(1, true), 200);
    }

    #[test]
    fn test_round_complete() {
        let mut state = GameState::new(2);
        assert!(!round_complete(&state.score_zones));
        for zone in state.score_zones.iter_mut().take(4) {
            zone.scored = true;
        }
        assert!(!round_complete(&state.score_zones));
        state.score_zones[4].scored = true;
        assert!(round_complete(&state.score_zones));
    }

    #[test]
    fn test_link_once() {
        let mut state = GameState::new(2);
        let first = state.teleporters[0].id;
        assert!(link_teleporters(&mut state.teleporters));
        assert_eq!(state.teleporters[1].destination, Some(first));
        assert_eq!(state.teleporters[0].destination, None);
        assert!(!link_teleporters(&mut state.teleporters));
        assert_eq!(state.teleporters[1].destination, Some(first));
    }

    #[test]
    fn test_destination_priority() {
        let mut state = GameState::new(2);
        link_teleporters(&mut state.teleporters);

        // Standing on the linked pad sends the frog to the arrival pad
        state.frog.pos = Vec2::new(100.0, 250.0);
        let contacts = Contacts::detect(&state);
        assert_eq!(frog_destination(&state, &contacts), Some(state.teleporters[0].pos));

        // The arrival pad itself does nothing
        state.frog.pos = Vec2::new(100.0, 100.0);
        let contacts = Contacts::detect(&state);
        assert_eq!(contacts.teleporter, Some(0));
        let dest = frog_destination(&state, &contacts);
        assert_ne!(dest, Some(state.teleporters[0].pos));

        // Top row wins over everything
        state.frog.pos = Vec2::new(300.0, 0.0);
        let contacts = Contacts::detect(&state);
        assert_eq!(frog_destination(&state, &contacts), Some(Frog::start()));
    }

    #[test]
    fn test_fly_spawn_then_kill() {
        let mut state = GameState::new(2);
        update_collectibles(&mut state, false);
        assert_eq!(state.collectibles.len(), 1);
        assert_eq!(state.collectibles[0].pos, state.platforms[COLLECTIBLE_PLATFORM].pos);

        update_collectibles(&mut state, false);
        assert_eq!(state.collectibles.len(), 1);
        assert!(!state.collectibles[0].killed);

        update_collectibles(&mut state, true);
        assert_eq!(state.collectibles.len(), 1);
        assert!(state.collectibles[0].killed);
    }

    #[test]
    #[should_panic]
    fn test_fly_needs_its_platform() {
        let mut state = GameState::new(2);
        state.platforms.truncate(COLLECTIBLE_PLATFORM);
        update_collectibles(&mut state, false);
    }
}

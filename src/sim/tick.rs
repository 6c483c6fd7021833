//! Event reducer
//!
//! Folds one event into a snapshot. Clock ticks move the world and run the
//! rules; key events hop the frog; restart starts over.

use serde::{Deserialize, Serialize};

use super::collision::Contacts;
use super::motion::Drift;
use super::rules;
use super::state::{Frog, GameState};
use crate::consts::*;

/// Everything that can happen to a game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// Clock fired; `elapsed` is the clock reading
    Tick { elapsed: u64 },
    MoveLeft,
    MoveRight,
    MoveUp,
    MoveDown,
    Restart,
}

/// Next snapshot for `event`, leaving `state` untouched
pub fn reduce(state: &GameState, event: GameEvent) -> GameState {
    let mut next = state.clone();
    apply(&mut next, event);
    next
}

/// Apply `event` to `state` in place
pub fn apply(state: &mut GameState, event: GameEvent) {
    match event {
        GameEvent::Tick { elapsed } => tick(state, elapsed),
        GameEvent::Restart => {
            log::info!(
                "Restart (score {}, best {})",
                state.score,
                state.highest_score
            );
            *state = state.restarted();
        }
        GameEvent::MoveLeft | GameEvent::MoveRight | GameEvent::MoveUp | GameEvent::MoveDown => {
            // Frog is frozen once the run is over
            if !state.game_over {
                hop(&mut state.frog, event);
            }
        }
    }
}

/// Advance the world by one clock tick
pub fn tick(state: &mut GameState, elapsed: u64) {
    let difficulty = state.difficulty;
    for hazard in &mut state.hazards {
        hazard.drift(difficulty);
    }
    for platform in &mut state.platforms {
        platform.drift(difficulty);
    }
    for fly in &mut state.collectibles {
        fly.drift(difficulty);
    }

    if rules::round_complete(&state.score_zones) {
        log::info!(
            "Round {} complete with score {}",
            state.difficulty,
            state.score
        );
        *state = state.next_round();
    } else {
        resolve(state);
        state.time = elapsed;
    }
}

/// Apply contacts, scoring, frog placement and bookkeeping
fn resolve(state: &mut GameState) {
    let contacts = Contacts::detect(state);

    if !state.game_over && (contacts.crashed || contacts.drowned) {
        log::info!(
            "Game over at {:?} ({}), score {}",
            state.frog.pos,
            if contacts.crashed { "run over" } else { "drowned" },
            state.score
        );
        state.game_over = true;
    }

    let filled = rules::fill_zones(&mut state.score_zones, &state.frog);
    let earned = rules::points(filled, contacts.caught_collectible);
    if earned > 0 {
        state.score += earned;
        log::debug!("+{} points, score {}", earned, state.score);
    }

    if let Some(pos) = rules::frog_destination(state, &contacts) {
        state.frog.pos = pos;
    }

    rules::update_collectibles(state, contacts.caught_collectible);
    state.highest_score = state.highest_score.max(state.score);

    if rules::link_teleporters(&mut state.teleporters) {
        log::debug!("Teleporters linked");
    }
}

/// Move the frog one tile, respecting the canvas edges and the home gaps
fn hop(frog: &mut Frog, event: GameEvent) {
    let pos = &mut frog.pos;
    match event {
        GameEvent::MoveLeft => {
            if pos.x > FROG_MIN_X {
                pos.x = (pos.x - TILE).max(FROG_MIN_X);
            }
        }
        GameEvent::MoveRight => {
            if pos.x < FROG_MAX_X {
                pos.x = (pos.x + TILE).min(FROG_MAX_X);
            }
        }
        GameEvent::MoveDown => {
            if pos.y < FROG_MAX_Y {
                pos.y = (pos.y + TILE).min(FROG_MAX_Y);
            }
        }
        GameEvent::MoveUp => {
            // The home row is only reachable through a gap
            let blocked = pos.y == RIVER_TOP_Y && !rules::gap_allows(pos.x);
            if !blocked {
                pos.y -= TILE;
            }
        }
        GameEvent::Tick { .. } | GameEvent::Restart => {}
    }
}

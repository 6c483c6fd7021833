// Property tests for the reducer: invariants that must hold for any event
// sequence, not just hand-picked scenarios.

use frogger::sim::drift_x;
use frogger::{GameEvent, GameState, reduce};
use proptest::prelude::*;

/// Map op codes onto events, favouring ticks and upward hops so runs get
/// somewhere interesting
fn events(codes: &[u8]) -> Vec<GameEvent> {
    let mut elapsed = 0;
    codes
        .iter()
        .map(|&code| match code {
            0 => GameEvent::MoveLeft,
            1 => GameEvent::MoveRight,
            2..=4 => GameEvent::MoveUp,
            5 => GameEvent::MoveDown,
            6 => GameEvent::Restart,
            _ => {
                elapsed += 1;
                GameEvent::Tick { elapsed }
            }
        })
        .collect()
}

fn run() -> impl Strategy<Value = (u64, Vec<GameEvent>)> {
    (any::<u64>(), prop::collection::vec(0u8..12, 0..300))
        .prop_map(|(seed, codes)| (seed, events(&codes)))
}

proptest! {
    #[test]
    fn highest_score_never_drops((seed, events) in run()) {
        let mut state = GameState::new(seed);
        for event in events {
            let next = reduce(&state, event);
            prop_assert!(next.highest_score >= state.highest_score);
            if matches!(event, GameEvent::Tick { .. }) {
                prop_assert!(next.highest_score >= next.score);
            }
            state = next;
        }
    }

    #[test]
    fn at_most_one_collectible((seed, events) in run()) {
        let mut state = GameState::new(seed);
        for event in events {
            state = reduce(&state, event);
            prop_assert!(state.collectibles.len() <= 1);
        }
    }

    #[test]
    fn fixed_entity_counts((seed, events) in run()) {
        let mut state = GameState::new(seed);
        for event in events {
            state = reduce(&state, event);
            prop_assert_eq!(state.hazards.len(), 3);
            prop_assert_eq!(state.platforms.len(), 36);
            prop_assert_eq!(state.teleporters.len(), 2);
            prop_assert_eq!(state.score_zones.len(), 5);
        }
    }

    #[test]
    fn hazards_drift_by_speed_and_difficulty((seed, events) in run()) {
        let mut state = GameState::new(seed);
        for event in events {
            let next = reduce(&state, event);
            let same_round = next.difficulty == state.difficulty;
            if let (GameEvent::Tick { .. }, true) = (event, same_round) {
                for (old, new) in state.hazards.iter().zip(&next.hazards) {
                    prop_assert_eq!(new.pos.x, drift_x(old.pos.x, old.speed, state.difficulty));
                    prop_assert_eq!(new.pos.y, old.pos.y);
                }
            }
            state = next;
        }
    }

    #[test]
    fn game_over_only_cleared_by_restart((seed, events) in run()) {
        let mut state = GameState::new(seed);
        for event in events {
            let next = reduce(&state, event);
            if state.game_over && event != GameEvent::Restart {
                prop_assert!(next.game_over);
            }
            state = next;
        }
    }

    #[test]
    fn frozen_frog_ignores_moves((seed, events) in run()) {
        let mut state = GameState::new(seed);
        for event in events {
            let next = reduce(&state, event);
            let is_move = matches!(
                event,
                GameEvent::MoveLeft | GameEvent::MoveRight | GameEvent::MoveUp | GameEvent::MoveDown
            );
            if state.game_over && is_move {
                prop_assert_eq!(&next, &state);
            }
            state = next;
        }
    }

    #[test]
    fn homes_stay_filled_within_a_round((seed, events) in run()) {
        let mut state = GameState::new(seed);
        for event in events {
            let next = reduce(&state, event);
            let same_round = next.difficulty == state.difficulty && event != GameEvent::Restart;
            if same_round {
                for (old, new) in state.score_zones.iter().zip(&next.score_zones) {
                    prop_assert!(!old.scored || new.scored);
                }
            } else if event != GameEvent::Restart {
                prop_assert_eq!(next.difficulty, state.difficulty + 1);
                prop_assert_eq!(next.score, state.score);
                prop_assert_eq!(state.zones_scored(), 5);
            }
            state = next;
        }
    }

    #[test]
    fn teleporter_link_is_permanent((seed, events) in run()) {
        let mut state = GameState::new(seed);
        for event in events {
            let next = reduce(&state, event);
            let reset = event == GameEvent::Restart || next.difficulty != state.difficulty;
            if !reset && state.teleporters[1].destination.is_some() {
                prop_assert_eq!(next.teleporters[1].destination, state.teleporters[1].destination);
            }
            if !reset && matches!(event, GameEvent::Tick { .. }) {
                prop_assert_eq!(next.teleporters[1].destination, Some(next.teleporters[0].id));
            }
            prop_assert_eq!(next.teleporters[0].destination, None);
            state = next;
        }
    }

    #[test]
    fn restart_keeps_only_the_best((seed, events) in run()) {
        let mut state = GameState::new(seed);
        for event in events {
            state = reduce(&state, event);
        }
        let best = state.highest_score;
        let restarted = reduce(&state, GameEvent::Restart);
        let mut fresh = GameState::new(seed);
        fresh.highest_score = best;
        prop_assert_eq!(restarted, fresh);
    }
}

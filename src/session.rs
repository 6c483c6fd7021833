//! Game session
//!
//! A session owns the one live snapshot. Events are folded into it strictly in
//! arrival order and every resulting snapshot is handed to an observer, which
//! can look but not touch.

use crate::highscores::HighScores;
use crate::sim::{GameEvent, GameState, apply};

/// Receives every snapshot the session produces (renderers, recorders)
pub trait Observer {
    fn observe(&mut self, state: &GameState);
}

impl<F> Observer for F
where
    F: FnMut(&GameState),
{
    fn observe(&mut self, state: &GameState) {
        self(state)
    }
}

/// Game instance holding the current snapshot and the leaderboard
#[derive(Debug, Clone)]
pub struct Session {
    state: GameState,
    high_scores: HighScores,
}

impl Session {
    pub fn new(seed: u64) -> Self {
        Self::from_state(GameState::new(seed))
    }

    /// Continue from an existing snapshot
    pub fn from_state(state: GameState) -> Self {
        Self {
            state,
            high_scores: HighScores::new(),
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn high_scores(&self) -> &HighScores {
        &self.high_scores
    }

    /// Fold one event into the current snapshot
    pub fn handle(&mut self, event: GameEvent) -> &GameState {
        let was_over = self.state.game_over;

        // A run abandoned by restart still counts
        if event == GameEvent::Restart && !was_over && self.state.score > 0 {
            self.record_run();
        }

        apply(&mut self.state, event);

        if !was_over && self.state.game_over {
            self.record_run();
        }

        &self.state
    }

    fn record_run(&mut self) {
        let s = &self.state;
        if let Some(rank) = self.high_scores.add_score(s.score, s.difficulty, s.time) {
            log::info!("Run ended with score {} (rank {})", s.score, rank);
        }
    }

    /// Fold a whole event stream, notifying `observer` after each event
    pub fn run<I, O>(&mut self, events: I, observer: &mut O)
    where
        I: IntoIterator<Item = GameEvent>,
        O: Observer + ?Sized,
    {
        for event in events {
            self.handle(event);
            observer.observe(&self.state);
        }
    }
}

#[cfg(test)]
mod tests {
    use glam::Vec2;

    use super::*;

    #[test]
    fn test_observer_sees_every_snapshot() {
        let mut session = Session::new(4);
        let mut seen = Vec::new();
        let events = [
            GameEvent::Tick { elapsed: 1 },
            GameEvent::MoveUp,
            GameEvent::MoveUp,
        ];
        session.run(events, &mut |s: &GameState| seen.push(s.frog.pos));
        assert_eq!(seen.len(), 3);
        assert_eq!(seen[0], Vec2::new(300.0, 550.0));
        assert_eq!(seen[2], Vec2::new(300.0, 450.0));
        assert_eq!(session.state().time, 1);
    }

    #[test]
    fn test_game_over_is_recorded_once() {
        let mut state = GameState::new(4);
        state.score = 300;
        state.frog.pos = Vec2::new(400.0, 200.0);
        let mut session = Session::from_state(state);

        session.handle(GameEvent::Tick { elapsed: 1 });
        assert!(session.state().game_over);
        session.handle(GameEvent::Tick { elapsed: 2 });
        assert_eq!(session.high_scores().entries.len(), 1);
        assert_eq!(session.high_scores().top_score(), Some(300));

        session.handle(GameEvent::Restart);
        assert!(!session.state().game_over);
        assert_eq!(session.state().highest_score, 300);
        assert_eq!(session.high_scores().entries.len(), 1);
    }

    #[test]
    fn test_abandoned_run_is_recorded() {
        let mut state = GameState::new(4);
        state.score = 200;
        state.difficulty = 2;
        let mut session = Session::from_state(state);

        session.handle(GameEvent::Restart);
        assert_eq!(session.high_scores().entries.len(), 1);
        assert_eq!(session.high_scores().entries[0].score, 200);
        assert_eq!(session.high_scores().entries[0].difficulty, 2);

        // Nothing scored yet, nothing to record
        session.handle(GameEvent::Restart);
        assert_eq!(session.high_scores().entries.len(), 1);
    }
}

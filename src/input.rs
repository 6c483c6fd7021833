//! Event sources
//!
//! Turns raw key presses and wall-clock time into [`GameEvent`]s. Holding a
//! key down yields exactly one event until it is released, and the clock emits
//! ticks at a fixed interval no matter how frames are paced.

use crate::sim::GameEvent;

/// Keys the game listens to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Left,
    Right,
    Up,
    Down,
    Restart,
}

impl Key {
    const COUNT: usize = 5;

    /// Event produced by a fresh press
    pub fn event(self) -> GameEvent {
        match self {
            Key::Left => GameEvent::MoveLeft,
            Key::Right => GameEvent::MoveRight,
            Key::Up => GameEvent::MoveUp,
            Key::Down => GameEvent::MoveDown,
            Key::Restart => GameEvent::Restart,
        }
    }

    /// Script character for a key (`l r u d R`)
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            'l' => Some(Key::Left),
            'r' => Some(Key::Right),
            'u' => Some(Key::Up),
            'd' => Some(Key::Down),
            'R' => Some(Key::Restart),
            _ => None,
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

/// Suppresses keyboard auto-repeat
#[derive(Debug, Clone, Default)]
pub struct KeyLatch {
    held: [bool; Key::COUNT],
}

impl KeyLatch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Key went down (or repeated); only the first press yields an event
    pub fn press(&mut self, key: Key) -> Option<GameEvent> {
        let held = &mut self.held[key.index()];
        if *held {
            return None;
        }
        *held = true;
        Some(key.event())
    }

    /// Key went up
    pub fn release(&mut self, key: Key) {
        self.held[key.index()] = false;
    }

    pub fn is_held(&self, key: Key) -> bool {
        self.held[key.index()]
    }
}

/// Fixed-interval game clock
///
/// Accumulates frame time and emits one tick per full interval. A long stall
/// is capped at `max_catch_up` ticks so the game does not fast-forward.
#[derive(Debug, Clone)]
pub struct TickClock {
    interval_ms: u64,
    max_catch_up: u32,
    accumulator_ms: u64,
    ticks: u64,
}

impl TickClock {
    pub fn new(interval_ms: u64, max_catch_up: u32) -> Self {
        debug_assert!(interval_ms > 0, "tick interval must be positive");
        Self {
            interval_ms: interval_ms.max(1),
            max_catch_up: max_catch_up.max(1),
            accumulator_ms: 0,
            ticks: 0,
        }
    }

    /// Ticks emitted so far
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Feed `dt_ms` of wall-clock time; returns the ticks that became due
    pub fn advance(&mut self, dt_ms: u64) -> Vec<GameEvent> {
        let cap = self.interval_ms * u64::from(self.max_catch_up);
        self.accumulator_ms = (self.accumulator_ms + dt_ms).min(cap);

        let mut due = Vec::new();
        while self.accumulator_ms >= self.interval_ms {
            due.push(GameEvent::Tick {
                elapsed: self.ticks,
            });
            self.ticks += 1;
            self.accumulator_ms -= self.interval_ms;
        }
        due
    }
}

//! Frogger entry point
//!
//! Headless driver: replays a key script against the game (or lets the clock
//! run for `demo_ticks` ticks) and prints the final board.
//!
//! Script characters: `u d l r` hop, `R` restarts, `t` or `.` lets one tick
//! interval pass.

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use frogger::input::{Key, KeyLatch, TickClock};
    use frogger::{GameEvent, GameState, Session, Settings, render};

    env_logger::init();

    let settings = Settings::load();
    let seed = settings.seed_or_random();
    log::info!("Frogger starting with seed {}", seed);

    let mut clock = TickClock::new(settings.tick_interval_ms, settings.max_catch_up_ticks);
    let mut events: Vec<GameEvent> = Vec::new();

    match std::env::args().nth(1) {
        Some(script) => {
            let mut latch = KeyLatch::new();
            for c in script.chars().filter(|c| !c.is_whitespace()) {
                if let Some(key) = Key::from_char(c) {
                    events.extend(latch.press(key));
                    latch.release(key);
                } else if c == 't' || c == '.' {
                    events.extend(clock.advance(settings.tick_interval_ms));
                } else {
                    log::warn!("Ignoring unknown script character {:?}", c);
                }
            }
        }
        None => {
            for _ in 0..settings.demo_ticks {
                events.extend(clock.advance(settings.tick_interval_ms));
            }
        }
    }
    log::info!("Replaying {} events", events.len());

    let mut session = Session::new(seed);
    let show_frames = settings.show_frames;
    session.run(events, &mut |state: &GameState| {
        if show_frames {
            println!("{}\n", render::text_frame(state));
        }
    });

    println!("{}", render::text_frame(session.state()));
    for (rank, entry) in session.high_scores().entries.iter().enumerate() {
        println!(
            "#{} {} points (level {}, tick {})",
            rank + 1,
            entry.score,
            entry.difficulty,
            entry.time
        );
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // No headless driver on wasm
}

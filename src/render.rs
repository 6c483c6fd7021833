//! Text renderer
//!
//! Redraws the whole board from a snapshot, one character per tile:
//!
//! ```text
//! _  _  _  _  _   homes (F once filled)
//! ~~=~~~~~~=~~~   river, logs (=), teleporters (O), fly (*)
//! ..C....TT....   road: cars (C), trucks (T)
//!       @         frog (X after game over)
//! ```

use glam::Vec2;

use crate::consts::*;
use crate::sim::{GameState, Sprite};

const COLS: usize = (CANVAS_WIDTH / TILE) as usize;
const ROWS: usize = (CANVAS_HEIGHT / TILE) as usize;

/// Full frame for `state`: HUD line followed by the board
pub fn text_frame(state: &GameState) -> String {
    let mut grid = background();

    for zone in &state.score_zones {
        let c = if zone.scored { 'F' } else { '_' };
        plot(&mut grid, Vec2::new(zone.x, 0.0), 1, c);
    }
    for platform in &state.platforms {
        plot(&mut grid, platform.pos, cells(platform.width), '=');
    }
    for hazard in &state.hazards {
        let c = match hazard.sprite {
            Sprite::TruckLeft | Sprite::TruckRight => 'T',
            _ => 'C',
        };
        plot(&mut grid, hazard.pos, cells(hazard.width), c);
    }
    for teleporter in &state.teleporters {
        plot(&mut grid, teleporter.pos, 1, 'O');
    }
    for fly in state.live_collectibles() {
        plot(&mut grid, fly.pos, 1, '*');
    }
    let frog = if state.game_over { 'X' } else { '@' };
    plot(&mut grid, state.frog.pos, 1, frog);

    let mut out = hud(state);
    for row in grid {
        out.push('\n');
        out.extend(row);
    }
    out
}

/// Score line shown above the board
pub fn hud(state: &GameState) -> String {
    let mut line = format!(
        "Score: {}  Best: {}  Level: {}",
        state.score, state.highest_score, state.difficulty
    );
    if state.game_over {
        line.push_str("  GAME OVER");
    }
    line
}

fn background() -> Vec<Vec<char>> {
    (0..ROWS)
        .map(|row| {
            let y = row as f32 * TILE;
            let c = if y < RIVER_TOP_Y {
                '#'
            } else if y < RIVER_BOTTOM_Y {
                '~'
            } else if y < FROG_START_Y {
                '.'
            } else {
                ' '
            };
            vec![c; COLS]
        })
        .collect()
}

fn cells(width: f32) -> usize {
    ((width / TILE).round() as usize).max(1)
}

/// Draw `len` tiles of `c` starting at `pos`; off-board tiles are skipped
fn plot(grid: &mut [Vec<char>], pos: Vec2, len: usize, c: char) {
    let row = (pos.y / TILE).round();
    if row < 0.0 || row >= ROWS as f32 {
        return;
    }
    let start = (pos.x / TILE).round() as i32;
    for col in start..start + len as i32 {
        if (0..COLS as i32).contains(&col) {
            grid[row as usize][col as usize] = c;
        }
    }
}

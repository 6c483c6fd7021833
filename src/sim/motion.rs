//! Horizontal drift for lane-bound entities
//!
//! Everything that moves on its own (vehicles, logs, the fly) slides along its
//! row by its speed plus a difficulty bonus, and wraps around once it leaves
//! the canvas by more than `WRAP_MARGIN`.

use super::state::{Collectible, Hazard, Platform};
use crate::consts::*;

/// Next x for an entity at `x` moving with `speed` at `difficulty`
///
/// The wrap test looks at the current position, so an entity past the edge
/// reappears on the far side instead of moving this tick.
#[inline]
pub fn drift_x(x: f32, speed: f32, difficulty: u32) -> f32 {
    let bonus = DIFFICULTY_SPEEDUP * difficulty as f32;
    if speed > 0.0 {
        if x > CANVAS_WIDTH {
            -WRAP_MARGIN
        } else {
            x + speed + bonus
        }
    } else if x < -WRAP_MARGIN {
        CANVAS_WIDTH
    } else {
        x + speed - bonus
    }
}

/// Entities that drift along their row every tick
pub trait Drift {
    fn x(&self) -> f32;
    fn speed(&self) -> f32;
    fn set_x(&mut self, x: f32);

    /// Move one tick in place
    fn drift(&mut self, difficulty: u32) {
        let x = drift_x(self.x(), self.speed(), difficulty);
        self.set_x(x);
    }
}

/// Pure form of [`Drift::drift`]
pub fn advance<T: Drift + Clone>(difficulty: u32, entity: &T) -> T {
    let mut next = entity.clone();
    next.drift(difficulty);
    next
}

macro_rules! impl_drift {
    ($($ty:ty),*) => {
        $(
            impl Drift for $ty {
                fn x(&self) -> f32 {
                    self.pos.x
                }
                fn speed(&self) -> f32 {
                    self.speed
                }
                fn set_x(&mut self, x: f32) {
                    self.pos.x = x;
                }
            }
        )*
    };
}

impl_drift!(Hazard, Platform, Collectible);

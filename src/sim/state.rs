//! Game state and entity types
//!
//! Entities are plain values. A snapshot is never shared mutably: the reducer
//! works on its own copy and hands the result back.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::spawn::{self, IdSource};
use crate::consts::*;

/// Stable identifier of an entity within a round
pub type EntityId = u32;

/// Image drawn for an entity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Sprite {
    CarLeft,
    CarRight,
    TruckLeft,
    TruckRight,
    Wood,
    Fly,
    Teleporter,
    /// Frog resting in a filled home
    HomeFrog,
}

impl Sprite {
    /// Asset path for renderers that load images
    pub fn path(&self) -> &'static str {
        match self {
            Sprite::CarLeft => "images/car-left.png",
            Sprite::CarRight => "images/car-right.png",
            Sprite::TruckLeft => "images/truck-left.png",
            Sprite::TruckRight => "images/truck-right.png",
            Sprite::Wood => "images/wood.png",
            Sprite::Fly => "images/fly.png",
            Sprite::Teleporter => "images/teleporter.png",
            Sprite::HomeFrog => "images/frog.jpg",
        }
    }
}

/// The player
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Frog {
    pub id: EntityId,
    pub pos: Vec2,
}

impl Frog {
    pub fn new(id: EntityId) -> Self {
        Self {
            id,
            pos: Self::start(),
        }
    }

    /// Where the frog begins every crossing
    #[inline]
    pub fn start() -> Vec2 {
        Vec2::new(FROG_START_X, FROG_START_Y)
    }
}

/// A vehicle; touching one ends the run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hazard {
    pub id: EntityId,
    pub pos: Vec2,
    /// Signed horizontal speed (pixels per tick), sign is the heading
    pub speed: f32,
    pub width: f32,
    pub height: f32,
    pub sprite: Sprite,
}

/// A log floating down the river; the frog must ride one to stay dry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Platform {
    pub id: EntityId,
    pub pos: Vec2,
    pub speed: f32,
    pub width: f32,
    pub height: f32,
    pub sprite: Sprite,
}

/// Bonus fly riding a platform
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Collectible {
    pub id: EntityId,
    pub pos: Vec2,
    pub speed: f32,
    pub width: f32,
    pub height: f32,
    pub sprite: Sprite,
    /// Eaten this round; kept in the snapshot so renderers can retire it
    pub killed: bool,
}

/// A home slot in the top row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreZone {
    pub id: EntityId,
    pub x: f32,
    pub sprite: Sprite,
    /// Once set it stays set until the next round
    pub scored: bool,
}

/// One half of a teleporter pair
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Teleporter {
    pub id: EntityId,
    pub pos: Vec2,
    pub sprite: Sprite,
    pub width: f32,
    pub height: f32,
    /// Id of the teleporter this one sends the frog to (None = arrival pad)
    pub destination: Option<EntityId>,
}

/// Starting directions and offsets, drawn once per game
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Layout {
    /// Per row: objects start heading right
    pub heading_right: [bool; LAYOUT_ROWS],
    /// Per row: starting x within the canvas
    pub start_x: [f32; LAYOUT_ROWS],
}

impl Layout {
    /// Draw a layout from a seeded PCG stream
    pub fn from_seed(seed: u64) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let heading_right = std::array::from_fn(|_| rng.random_bool(0.5));
        let start_x =
            std::array::from_fn(|_| rng.random_range(0..=CANVAS_WIDTH as u32) as f32);
        Self {
            heading_right,
            start_x,
        }
    }
}

/// Complete game snapshot (deterministic, serializable)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    /// Seed the layout was drawn from
    pub seed: u64,
    /// Layout reused by every round of this game
    pub layout: Layout,
    /// Clock reading of the last tick
    pub time: u64,
    pub frog: Frog,
    /// Ordered by construction; stable between ticks
    pub hazards: Vec<Hazard>,
    pub platforms: Vec<Platform>,
    /// Zero or one entry
    pub collectibles: Vec<Collectible>,
    /// Always two entries; index 1 links to index 0
    pub teleporters: Vec<Teleporter>,
    pub score_zones: Vec<ScoreZone>,
    pub game_over: bool,
    pub score: u64,
    pub highest_score: u64,
    /// Starts at 1, grows by one per completed round
    pub difficulty: u32,
    ids: IdSource,
}

impl GameState {
    /// Create a new game whose layout is drawn from `seed`
    pub fn new(seed: u64) -> Self {
        Self::from_layout(seed, Layout::from_seed(seed))
    }

    /// Build the opening snapshot of a round from a known layout
    pub fn from_layout(seed: u64, layout: Layout) -> Self {
        let mut ids = IdSource::default();
        let frog = Frog::new(ids.next_id());
        let hazards = spawn::hazards(&layout, &mut ids);
        let platforms = spawn::platforms(&mut ids);
        let teleporters = spawn::teleporters(&mut ids);
        let score_zones = spawn::score_zones(&mut ids);

        Self {
            seed,
            layout,
            time: 0,
            frog,
            hazards,
            platforms,
            collectibles: Vec::new(),
            teleporters,
            score_zones,
            game_over: false,
            score: 0,
            highest_score: 0,
            difficulty: 1,
            ids,
        }
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> EntityId {
        self.ids.next_id()
    }

    /// Fresh layout for the following round; score carries over and the
    /// difficulty goes up by one
    pub fn next_round(&self) -> Self {
        let mut next = Self::from_layout(self.seed, self.layout.clone());
        next.score = self.score;
        next.highest_score = self.highest_score;
        next.difficulty = self.difficulty + 1;
        next
    }

    /// Opening snapshot of a new game; only the best score survives
    pub fn restarted(&self) -> Self {
        let mut next = Self::from_layout(self.seed, self.layout.clone());
        next.highest_score = self.highest_score;
        next
    }

    /// Look up a teleporter by id
    pub fn teleporter(&self, id: EntityId) -> Option<&Teleporter> {
        self.teleporters.iter().find(|t| t.id == id)
    }

    /// Number of homes filled this round
    pub fn zones_scored(&self) -> usize {
        self.score_zones.iter().filter(|z| z.scored).count()
    }

    /// Collectibles the frog can still eat
    pub fn live_collectibles(&self) -> impl Iterator<Item = &Collectible> {
        self.collectibles.iter().filter(|c| !c.killed)
    }
}

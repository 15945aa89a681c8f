//! Game logic layer machinery.

/// How far an entity with no explicit sight radius can see.
pub const FOV_RADIUS: i32 = 5;

/// From how far away do entities overhear events around them.
pub const MESSAGE_RADIUS: i32 = 5;

/// Speed of an entity whose template does not specify one.
pub const DEFAULT_SPEED: i32 = 100;

/// Scheduler time an action takes at default speed.
pub const TURN_COST: i64 = 100;

/// How many random cells to probe when looking for free floor before giving
/// up.
pub const MAX_PLACEMENT_TRIES: usize = 10_000;

/// Inventory size when the template does not specify one.
pub const DEFAULT_INVENTORY_SLOTS: usize = 10;

/// Per-turn odds of a fungus trying to spread.
pub const FUNGUS_GROWTH_CHANCE: f64 = 0.02;

/// Map position, x and y on the level grid and z as the depth level.
pub type Location = glam::IVec3;

mod action;
pub use action::Command;

mod ai;

mod capability;
pub use capability::{Capability, Group};

mod config;
pub use config::Config;

mod content;

pub mod ecs;

mod entity;
pub use entity::Entity;

mod error;
pub use error::{Error, Result};

mod fov;
pub use crate::fov::LevelFov;

mod glyph;
pub use glyph::{Color, Glyph};

mod item;
pub use item::Pickup;

mod map;
pub use map::Map;

mod mob;
pub use mob::HungerState;

mod msg;
pub use msg::{send_message, send_message_nearby};

mod placement;

pub mod prelude;

mod runtime;
pub use runtime::Runtime;

mod scheduler;
pub use scheduler::{Engine, EngineState, Scheduler};

mod template;
pub use template::{Repository, Stats, Template};

mod terrain;
pub use terrain::Terrain;

mod tile;
pub use tile::Tile;

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum ScenarioStatus {
    Ongoing,
    Lost,
}

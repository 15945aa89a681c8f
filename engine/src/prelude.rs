pub use crate::{
    msg, msg_nearby, Capability, Command, Config, EngineState, Entity, Error,
    Glyph, Group, Location, Map, Repository, Result, Runtime,
    ScenarioStatus, Template, Terrain, Tile,
};
pub use glam::{ivec2, ivec3, IVec2, IVec3};
pub use util::{HashMap, HashSet, IndexMap, RngExt};

use crate::{Capability, Entity, Location};

/// Contract violations the engine can detect at runtime.
///
/// Rejected player actions are not errors, they show up as messages and a
/// `false` return value from the action.
#[derive(Clone, Eq, PartialEq, Debug, thiserror::Error)]
pub enum Error {
    #[error("unknown template {0:?}")]
    UnknownTemplate(String),

    #[error("position {0} is out of bounds")]
    OutOfBounds(Location),

    #[error("position {0} is already occupied")]
    OccupiedCell(Location),

    #[error("no free floor tile found on level {0}")]
    NoFreeFloorTile(i32),

    #[error("entity {0} is not on the map")]
    NotPlaced(Entity),

    #[error("entity {0} is already on the map")]
    AlreadyPlaced(Entity),

    #[error("template {key:?} can't be the player, it lacks {missing}")]
    UnfitPlayer { key: String, missing: Capability },

    #[error("malformed terrain: {0}")]
    MalformedTerrain(String),
}

pub type Result<T> = std::result::Result<T, Error>;

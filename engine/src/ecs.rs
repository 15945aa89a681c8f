//! Component types stored in the entity component system.
//!
//! Each capability of an entity is one or more components here. An entity
//! has a capability exactly when it carries the matching component.

use derive_more::{Deref, DerefMut};

use crate::prelude::*;

#[derive(Clone, Debug, Eq, PartialEq, Default)]
pub struct Name(pub String);

/// Key of the template the entity was built from.
#[derive(Clone, Debug, Eq, PartialEq, Default)]
pub struct Kind(pub String);

#[derive(Copy, Clone, Debug, Eq, PartialEq, Default)]
pub struct Icon(pub Glyph);

/// Scheduler speed, 100 is normal and higher is faster.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Speed(pub i32);

/// Can change position on the map.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Default)]
pub struct Movable;

/// Turn behavior. An entity has at most one.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Actor {
    /// Waits for commands from outside the engine.
    Player,
    /// Stays put and occasionally spawns a copy of itself nearby.
    Fungus { growths_remaining: i32 },
    /// Stumbles around at random.
    Wander,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Attacker {
    pub attack_value: i32,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Destructible {
    pub hp: i32,
    pub max_hp: i32,
    pub defense_value: i32,
}

/// Notices received and not yet cleared, oldest first.
#[derive(Clone, Debug, Eq, PartialEq, Default, Deref, DerefMut)]
pub struct MessageRecipient(pub Vec<String>);

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Sight {
    pub radius: i32,
}

/// Fixed number of item slots, empty slots are `None`.
#[derive(Clone, Debug, Eq, PartialEq, Default, Deref, DerefMut)]
pub struct Inventory(pub Vec<Option<Entity>>);

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct FoodConsumer {
    pub fullness: i32,
    pub max_fullness: i32,
    pub depletion_rate: i32,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Edible {
    pub food_value: i32,
    pub max_consumptions: i32,
    pub remaining: i32,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Default)]
pub struct Equippable {
    pub attack_value: i32,
    pub defense_value: i32,
    pub wieldable: bool,
    pub wearable: bool,
}

/// Items currently in use. They stay in the inventory while equipped.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Default)]
pub struct Equipment {
    pub weapon: Option<Entity>,
    pub armor: Option<Entity>,
}

/// Entity component system. Stores all the data of game entities.
#[derive(Default, Deref, DerefMut)]
pub(crate) struct Ecs(pub(crate) hecs::World);

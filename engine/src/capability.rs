use hecs::{EntityBuilder, EntityRef};
use serde::{Deserialize, Serialize};
use strum::{EnumIter, EnumString, IntoEnumIterator};

use crate::{
    ecs::{self, Actor, Equipment, Inventory},
    prelude::*,
    Stats, DEFAULT_INVENTORY_SLOTS, FOV_RADIUS,
};

/// Named behavior bundle an entity template can opt into.
#[derive(
    Copy,
    Clone,
    Eq,
    PartialEq,
    Ord,
    PartialOrd,
    Hash,
    Debug,
    Serialize,
    Deserialize,
    EnumIter,
    EnumString,
    strum::Display,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum Capability {
    Movable,
    PlayerActor,
    FungusActor,
    WanderActor,
    Attacker,
    Destructible,
    MessageRecipient,
    Sight,
    InventoryHolder,
    FoodConsumer,
    Edible,
    Equippable,
    Equipper,
}

/// Capabilities that share a role. An entity should have at most one
/// capability from a group.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Group {
    /// Things that take turns in the scheduler.
    Actor,
}

use Capability::*;

impl Capability {
    pub fn group(self) -> Option<Group> {
        match self {
            PlayerActor | FungusActor | WanderActor => Some(Group::Actor),
            _ => None,
        }
    }

    /// Add the starting state of the capability to an entity being built.
    ///
    /// Adding a second capability from the same group replaces the first.
    pub(crate) fn init(self, stats: &Stats, builder: &mut EntityBuilder) {
        match self {
            Movable => {
                builder.add(ecs::Movable);
            }
            PlayerActor => {
                builder.add(Actor::Player);
            }
            FungusActor => {
                builder.add(Actor::Fungus {
                    growths_remaining: stats.growths.unwrap_or(5),
                });
            }
            WanderActor => {
                builder.add(Actor::Wander);
            }
            Attacker => {
                builder.add(ecs::Attacker {
                    attack_value: stats.attack_value.unwrap_or(1),
                });
            }
            Destructible => {
                let max_hp = stats.max_hp.unwrap_or(10);
                builder.add(ecs::Destructible {
                    hp: stats.hp.unwrap_or(max_hp),
                    max_hp,
                    defense_value: stats.defense_value.unwrap_or(0),
                });
            }
            MessageRecipient => {
                builder.add(ecs::MessageRecipient::default());
            }
            Sight => {
                builder.add(ecs::Sight {
                    radius: stats.sight_radius.unwrap_or(FOV_RADIUS),
                });
            }
            InventoryHolder => {
                let slots =
                    stats.inventory_slots.unwrap_or(DEFAULT_INVENTORY_SLOTS);
                builder.add(Inventory(vec![None; slots]));
            }
            FoodConsumer => {
                let max_fullness = stats.max_fullness.unwrap_or(1000);
                builder.add(ecs::FoodConsumer {
                    fullness: stats.fullness.unwrap_or(max_fullness / 2),
                    max_fullness,
                    depletion_rate: stats.fullness_depletion_rate.unwrap_or(1),
                });
            }
            Edible => {
                let consumptions = stats.consumptions.unwrap_or(1);
                builder.add(ecs::Edible {
                    food_value: stats.food_value.unwrap_or(5),
                    max_consumptions: consumptions,
                    remaining: consumptions,
                });
            }
            Equippable => {
                builder.add(ecs::Equippable {
                    attack_value: stats.attack_value.unwrap_or(0),
                    defense_value: stats.defense_value.unwrap_or(0),
                    wieldable: stats.wieldable,
                    wearable: stats.wearable,
                });
            }
            Equipper => {
                builder.add(Equipment::default());
            }
        }
    }

    pub(crate) fn is_present(self, e: &EntityRef) -> bool {
        let actor = || e.get::<&Actor>().map(|a| *a);
        match self {
            Movable => e.has::<ecs::Movable>(),
            PlayerActor => actor() == Some(Actor::Player),
            FungusActor => matches!(actor(), Some(Actor::Fungus { .. })),
            WanderActor => actor() == Some(Actor::Wander),
            Attacker => e.has::<ecs::Attacker>(),
            Destructible => e.has::<ecs::Destructible>(),
            MessageRecipient => e.has::<ecs::MessageRecipient>(),
            Sight => e.has::<ecs::Sight>(),
            InventoryHolder => e.has::<Inventory>(),
            FoodConsumer => e.has::<ecs::FoodConsumer>(),
            Edible => e.has::<ecs::Edible>(),
            Equippable => e.has::<ecs::Equippable>(),
            Equipper => e.has::<Equipment>(),
        }
    }
}

impl Entity {
    pub fn has_capability(
        &self,
        r: &impl AsRef<Runtime>,
        cap: Capability,
    ) -> bool {
        let r = r.as_ref();
        r.ecs
            .entity(**self)
            .is_ok_and(|e| cap.is_present(&e))
    }

    pub fn has_group(&self, r: &impl AsRef<Runtime>, group: Group) -> bool {
        Capability::iter()
            .any(|c| c.group() == Some(group) && self.has_capability(r, c))
    }
}

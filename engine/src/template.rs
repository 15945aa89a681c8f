use derive_more::Deref;
use hecs::EntityBuilder;
use serde::{Deserialize, Serialize};

use crate::{
    ecs::{Icon, Kind, Name, Speed},
    prelude::*,
};

/// Numeric properties read by capabilities when an entity is created.
///
/// Unset values fall back to the defaults of whichever capability reads
/// them, so the same field can mean different things for a monster and for
/// an item.
#[derive(Clone, Default, Eq, PartialEq, Debug, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct Stats {
    pub max_hp: Option<i32>,
    /// Starting hit points, full health if unset.
    pub hp: Option<i32>,
    pub attack_value: Option<i32>,
    pub defense_value: Option<i32>,
    pub speed: Option<i32>,
    pub sight_radius: Option<i32>,
    pub inventory_slots: Option<usize>,
    pub max_fullness: Option<i32>,
    /// Starting fullness, half of max if unset.
    pub fullness: Option<i32>,
    pub fullness_depletion_rate: Option<i32>,
    pub food_value: Option<i32>,
    pub consumptions: Option<i32>,
    pub growths: Option<i32>,
    pub wieldable: bool,
    pub wearable: bool,
}

/// Recipe for creating an entity.
#[derive(Clone, Eq, PartialEq, Debug, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Template {
    pub name: String,
    pub glyph: Glyph,
    #[serde(default)]
    pub stats: Stats,
    /// Capabilities in the order they get applied.
    #[serde(default)]
    pub capabilities: Vec<Capability>,
}

impl Template {
    pub fn new(name: impl Into<String>, glyph: Glyph) -> Self {
        Template {
            name: name.into(),
            glyph,
            stats: Default::default(),
            capabilities: Default::default(),
        }
    }

    pub fn with(mut self, cap: Capability) -> Self {
        self.capabilities.push(cap);
        self
    }

    pub fn with_stats(mut self, stats: Stats) -> Self {
        self.stats = stats;
        self
    }

    pub fn has(&self, cap: Capability) -> bool {
        self.capabilities.contains(&cap)
    }

    /// First capability the template would need to be the player entity.
    ///
    /// The player must take turns as the player, take damage and receive
    /// messages. A later actor capability overrides an earlier one.
    pub fn missing_player_capability(&self) -> Option<Capability> {
        let actor = self
            .capabilities
            .iter()
            .rev()
            .find(|c| c.group() == Some(Group::Actor));
        if actor != Some(&Capability::PlayerActor) {
            return Some(Capability::PlayerActor);
        }
        [Capability::Destructible, Capability::MessageRecipient]
            .into_iter()
            .find(|&c| !self.has(c))
    }

    /// Entity builder with the name, looks and capabilities of the template.
    pub(crate) fn builder(&self, key: &str) -> EntityBuilder {
        let mut builder = EntityBuilder::new();
        builder.add(Name(self.name.clone()));
        builder.add(Kind(key.to_owned()));
        builder.add(Icon(self.glyph));
        if let Some(speed) = self.stats.speed {
            builder.add(Speed(speed));
        }

        for cap in &self.capabilities {
            cap.init(&self.stats, &mut builder);
        }
        builder
    }
}

/// Entity templates by key.
#[derive(Clone, Default, Debug, Deref)]
pub struct Repository(IndexMap<String, Template>);

impl Repository {
    pub fn insert(&mut self, key: impl Into<String>, template: Template) {
        self.0.insert(key.into(), template);
    }

    pub fn get(&self, key: &str) -> Result<&Template> {
        self.0
            .get(key)
            .ok_or_else(|| Error::UnknownTemplate(key.to_owned()))
    }

    /// Look up a template that can be used for the player entity.
    pub fn get_player(&self, key: &str) -> Result<&Template> {
        let ret = self.get(key)?;
        match ret.missing_player_capability() {
            Some(missing) => Err(Error::UnfitPlayer {
                key: key.to_owned(),
                missing,
            }),
            None => Ok(ret),
        }
    }
}

impl FromIterator<(String, Template)> for Repository {
    fn from_iter<T: IntoIterator<Item = (String, Template)>>(iter: T) -> Self {
        Repository(iter.into_iter().collect())
    }
}

impl Extend<(String, Template)> for Repository {
    fn extend<T: IntoIterator<Item = (String, Template)>>(&mut self, iter: T) {
        self.0.extend(iter)
    }
}

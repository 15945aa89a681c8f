//! Generic entity logic.
use std::fmt;

use derive_more::Deref;
use hecs::Component;
use util::Noun;

use crate::{ecs::*, prelude::*, DEFAULT_SPEED, TURN_COST};

// Dummy wrapper so we can write impls for it directly instead of deriving a
// trait for hecs::Entity and writing every fn signature twice.
/// Game entity identifier datatype. All the actual contents live in the ECS.
#[derive(Copy, Clone, Hash, Eq, Ord, PartialEq, PartialOrd, Debug, Deref)]
pub struct Entity(pub(crate) hecs::Entity);

impl Entity {
    /// Read a component that may be missing.
    pub(crate) fn try_get<T>(&self, r: &impl AsRef<Runtime>) -> Option<T>
    where
        T: Component + Clone,
    {
        let r = r.as_ref();
        r.ecs.get::<&T>(**self).ok().map(|c| (*c).clone())
    }

    /// Read a component the entity is required to have.
    ///
    /// Panics if the component is missing, asking an entity for a
    /// capability it doesn't have is a logic error.
    pub(crate) fn get<T>(&self, r: &impl AsRef<Runtime>) -> T
    where
        T: Component + Clone,
    {
        match self.try_get(r) {
            Some(c) => c,
            None => panic!(
                "Entity::get: {self} has no {}",
                std::any::type_name::<T>()
            ),
        }
    }

    pub(crate) fn has<T: Component>(&self, r: &impl AsRef<Runtime>) -> bool {
        r.as_ref().ecs.satisfies::<&T>(**self).unwrap_or(false)
    }

    /// Access and mutate a component using a closure.
    ///
    /// Panics if the component is missing.
    pub(crate) fn with_mut<T: Component, U>(
        &self,
        r: &mut impl AsMut<Runtime>,
        f: impl FnOnce(&mut T) -> U,
    ) -> U {
        let r = r.as_mut();
        match r.ecs.query_one_mut::<&mut T>(**self) {
            Ok(c) => f(c),
            Err(_) => panic!(
                "Entity::with_mut: {self} has no {}",
                std::any::type_name::<T>()
            ),
        }
    }

    /// Whether the entity still exists in the game.
    pub fn exists(&self, r: &impl AsRef<Runtime>) -> bool {
        r.as_ref().ecs.contains(**self)
    }

    /// Position on the map, `None` for entities not on the map like carried
    /// items and the dead.
    pub fn loc(&self, r: &impl AsRef<Runtime>) -> Option<Location> {
        r.as_ref().map.entity_loc(*self)
    }

    pub fn is_alive(&self, r: &impl AsRef<Runtime>) -> bool {
        self.loc(r).is_some()
    }

    pub fn glyph(&self, r: &impl AsRef<Runtime>) -> Glyph {
        self.try_get::<Icon>(r).unwrap_or_default().0
    }

    /// Name of the entity's template.
    pub fn kind(&self, r: &impl AsRef<Runtime>) -> String {
        self.try_get::<Kind>(r).unwrap_or_default().0
    }

    /// Plain name without modifiers.
    pub fn name(&self, r: &impl AsRef<Runtime>) -> String {
        self.try_get::<Name>(r).unwrap_or_default().0
    }

    /// Name with state modifiers like being partly eaten.
    pub fn desc(&self, r: &impl AsRef<Runtime>) -> String {
        let name = self.name(r);
        match self.try_get::<Edible>(r) {
            Some(e) if e.remaining < e.max_consumptions => {
                format!("partly eaten {name}")
            }
            _ => name,
        }
    }

    /// Description with an indefinite article, "an apple".
    pub fn describe_a(&self, r: &impl AsRef<Runtime>) -> String {
        Noun::It(self.desc(r)).a_name()
    }

    /// Description with a definite article, "the apple".
    pub fn describe_the(&self, r: &impl AsRef<Runtime>) -> String {
        Noun::It(self.desc(r)).the_name()
    }

    /// Get the noun for this entity as seen by `observer`, used in grammar
    /// templating.
    pub fn noun(&self, r: &impl AsRef<Runtime>, observer: Entity) -> Noun {
        if *self == observer {
            Noun::You
        } else {
            Noun::It(self.desc(r))
        }
    }

    pub fn speed(&self, r: &impl AsRef<Runtime>) -> i32 {
        self.try_get::<Speed>(r).map_or(DEFAULT_SPEED, |s| s.0)
    }

    /// Scheduler time one action of this entity takes.
    pub fn turn_cost(&self, r: &impl AsRef<Runtime>) -> i64 {
        TURN_COST * DEFAULT_SPEED as i64 / self.speed(r).max(1) as i64
    }
}

impl fmt::Display for Entity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0.id())
    }
}

//! What actors do when their turn comes up.

use rand::Rng;

use crate::{
    ecs::{Actor, FoodConsumer},
    prelude::*,
    FUNGUS_GROWTH_CHANCE,
};

const CARDINALS: [IVec3; 4] =
    [IVec3::X, IVec3::NEG_X, IVec3::Y, IVec3::NEG_Y];

impl Entity {
    /// Run the entity's turn.
    pub(crate) fn act(&self, r: &mut impl AsMut<Runtime>) {
        let r = r.as_mut();
        match self.try_get::<Actor>(r) {
            Some(Actor::Player) => self.player_act(r),
            Some(Actor::Fungus { growths_remaining }) => {
                self.fungus_act(r, growths_remaining)
            }
            Some(Actor::Wander) => self.wander_act(r),
            None => log::warn!("Entity::act: {self} is not an actor"),
        }
    }

    /// Get hungrier and stop the engine to wait for a command.
    fn player_act(&self, r: &mut Runtime) {
        if self.has::<FoodConsumer>(r) {
            self.add_turn_hunger(r);
        }
        if !self.is_alive(r) {
            return;
        }
        r.update_fov();
        r.lock();
    }

    fn fungus_act(&self, r: &mut Runtime, growths_remaining: i32) {
        if growths_remaining <= 0 || !r.rng.chance(FUNGUS_GROWTH_CHANCE) {
            return;
        }
        let Some(loc) = self.loc(r) else { return };

        let offset = ivec3(r.rng.gen_range(-1..=1), r.rng.gen_range(-1..=1), 0);
        let dest = loc + offset;
        if offset == IVec3::ZERO || !r.map.is_empty_floor(dest) {
            return;
        }

        let kind = self.kind(r);
        let spawn = match r.create_entity(&kind) {
            Ok(e) => e,
            Err(e) => {
                log::warn!("Entity::fungus_act: {e}");
                return;
            }
        };
        if let Err(e) = r.add_entity(spawn, dest) {
            log::warn!("Entity::fungus_act: {e}");
            r.kill(spawn);
            return;
        }

        self.with_mut::<Actor, _>(r, |a| {
            if let Actor::Fungus { growths_remaining } = a {
                *growths_remaining -= 1;
            }
        });
        msg_nearby!(r, dest, "[One] [is] spreading!"; spawn);
    }

    fn wander_act(&self, r: &mut Runtime) {
        if !self.has_capability(r, Capability::Movable) {
            return;
        }
        let Some(loc) = self.loc(r) else { return };
        let dir = CARDINALS[r.rng.gen_range(0..CARDINALS.len())];
        self.try_move(r, loc + dir);
    }
}

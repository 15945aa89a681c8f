//! Actions entities take during their turns.

use crate::prelude::*;

/// Player input the engine waits on while locked.
#[derive(Clone, Eq, PartialEq, Debug)]
pub enum Command {
    /// Step, attack or dig in a direction. A vertical component means
    /// taking the stairs.
    Move(IVec3),
    /// Pass the turn.
    Wait,
    /// Pick up items by their position in the floor stack.
    Pickup(Vec<usize>),
    Drop(usize),
    Eat(usize),
    Wield(usize),
    Unwield,
    Wear(usize),
    TakeOff,
}

impl Runtime {
    /// Run a player command while the engine waits for input.
    ///
    /// If the command used up the player's turn, the engine is released to
    /// run until the player is up again. Return whether the turn was used.
    pub fn command(&mut self, cmd: Command) -> bool {
        if self.engine_state() != EngineState::Locked {
            log::warn!("Runtime::command: engine isn't waiting for input");
            return false;
        }
        let Some(player) = self.player.filter(|p| p.is_alive(self)) else {
            return false;
        };

        let acted = match cmd {
            Command::Move(dir) => match player.loc(self) {
                Some(loc) => player.try_move(self, loc + dir),
                None => false,
            },
            Command::Wait => true,
            Command::Pickup(indices) => player.pickup(self, &indices),
            Command::Drop(slot) => player.drop_item(self, slot),
            Command::Eat(slot) => player.eat(self, slot),
            Command::Wield(slot) => player.wield(self, slot),
            Command::Unwield => player.unwield(self),
            Command::Wear(slot) => player.wear(self, slot),
            Command::TakeOff => player.take_off(self),
        };

        if acted {
            self.unlock();
        }
        acted
    }
}

impl Entity {
    /// Try to move to, attack or dig at the destination.
    ///
    /// Return whether the attempt used up the entity's turn.
    pub fn try_move(&self, r: &mut impl AsMut<Runtime>, dest: Location) -> bool {
        let r = r.as_mut();
        assert!(
            self.has_capability(r, Capability::Movable),
            "Entity::try_move: {self} can't move"
        );
        let Some(loc) = self.loc(r) else { return false };
        if dest == loc {
            return false;
        }

        if dest.z != loc.z {
            return self.take_stairs(r, dest);
        }

        if let Some(target) = r.map.entity_at(dest) {
            if !self.has_capability(r, Capability::Attacker) {
                msg!(r, *self, "[One] can't attack [another]."; *self, target);
                return false;
            }
            self.attack(r, target);
            return true;
        }

        let tile = r.map.tile(dest);
        if tile.is_walkable() {
            if let Err(e) = r.update_entity_position(*self, dest) {
                log::debug!("try_move: {e}");
                msg!(r, *self, "Something blocks the way.");
                return false;
            }
            self.post_move_hook(r);
            true
        } else if tile.is_diggable() {
            r.map.dig(dest);
            true
        } else {
            msg!(r, *self, "[One] can't go there."; *self);
            false
        }
    }

    /// Move one level up or down, staying in the same spot on the grid.
    fn take_stairs(&self, r: &mut Runtime, dest: Location) -> bool {
        let Some(loc) = self.loc(r) else { return false };
        if dest.truncate() != loc.truncate() || (dest.z - loc.z).abs() != 1 {
            msg!(r, *self, "[One] can't go there."; *self);
            return false;
        }
        let up = dest.z < loc.z;
        let (stairs, dir) = if up {
            (Tile::StairsUp, "up")
        } else {
            (Tile::StairsDown, "down")
        };

        if r.map.tile(loc) != stairs {
            msg!(r, *self, "[One] can't go {} here!", dir; *self);
            return false;
        }

        if let Err(e) = r.update_entity_position(*self, dest) {
            log::debug!("take_stairs: {e}");
            msg!(r, *self, "Something blocks the way.");
            return false;
        }

        msg!(
            r,
            *self,
            "[One] {} to level {}!",
            if up { "ascend" } else { "descend" },
            dest.z + 1;
            *self
        );
        self.post_move_hook(r);
        true
    }

    /// Report items at the new location.
    fn post_move_hook(&self, r: &mut Runtime) {
        let Some(loc) = self.loc(r) else { return };
        let items = r.map.items_at(loc).to_vec();
        match items.as_slice() {
            [] => {}
            &[item] => {
                msg!(r, *self, "[One] see[s] [a thing]."; *self, item);
            }
            _ => {
                msg!(r, *self, "There are several objects here.");
            }
        }
    }

    /// Hit another entity.
    ///
    /// Damage is `1 + random(0..max(0, attack - defense))`.
    pub fn attack(&self, r: &mut impl AsMut<Runtime>, target: Entity) {
        let r = r.as_mut();
        if !target.has_capability(r, Capability::Destructible) {
            return;
        }

        let attack = self.attack_value(r);
        let defense = target.defense_value(r);
        let max = (attack - defense).max(0);
        let damage = 1 + r.rng.below(max);

        msg!(r, *self, "[One] strike[s] [another] for {} damage!", damage; *self, target);
        msg!(r, target, "[One] strike[s] [another] for {} damage!", damage; *self, target);
        target.take_damage(r, Some(*self), damage);
    }
}

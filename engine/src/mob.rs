//! Creature health, combat stats and hunger.

use crate::{
    ecs::{Attacker, Destructible, Equipment, Equippable, FoodConsumer},
    prelude::*,
    send_message,
};

#[derive(Copy, Clone, Eq, PartialEq, Debug, strum::Display)]
pub enum HungerState {
    Starving,
    Hungry,
    #[strum(serialize = "Not Hungry")]
    NotHungry,
    Full,
    Oversatiated,
}

impl HungerState {
    pub fn new(fullness: i32, max_fullness: i32) -> Self {
        // Compare in hundredths so there's no rounding.
        let (f, m) = (fullness as i64 * 100, max_fullness as i64);
        if f <= m * 5 {
            HungerState::Starving
        } else if f <= m * 25 {
            HungerState::Hungry
        } else if f >= m * 95 {
            HungerState::Oversatiated
        } else if f >= m * 75 {
            HungerState::Full
        } else {
            HungerState::NotHungry
        }
    }
}

impl Entity {
    pub fn hp(&self, r: &impl AsRef<Runtime>) -> i32 {
        self.get::<Destructible>(r).hp
    }

    pub fn max_hp(&self, r: &impl AsRef<Runtime>) -> i32 {
        self.get::<Destructible>(r).max_hp
    }

    /// Attack value including the wielded weapon and worn armor.
    pub fn attack_value(&self, r: &impl AsRef<Runtime>) -> i32 {
        self.get::<Attacker>(r).attack_value
            + self
                .equipped(r)
                .map(|e| e.get::<Equippable>(r).attack_value)
                .sum::<i32>()
    }

    /// Defense value including the wielded weapon and worn armor.
    pub fn defense_value(&self, r: &impl AsRef<Runtime>) -> i32 {
        self.get::<Destructible>(r).defense_value
            + self
                .equipped(r)
                .map(|e| e.get::<Equippable>(r).defense_value)
                .sum::<i32>()
    }

    /// Wielded and worn items.
    fn equipped(
        &self,
        r: &impl AsRef<Runtime>,
    ) -> impl Iterator<Item = Entity> {
        let eq = self.try_get::<Equipment>(r).unwrap_or_default();
        eq.weapon.into_iter().chain(eq.armor)
    }

    /// Lose hit points, dying if they run out.
    ///
    /// Negative damage is treated as zero. Entities that are already dead
    /// or not destructible are unaffected.
    pub fn take_damage(
        &self,
        r: &mut impl AsMut<Runtime>,
        attacker: Option<Entity>,
        damage: i32,
    ) {
        let r = r.as_mut();
        if !self.is_alive(r)
            || !self.has_capability(r, Capability::Destructible)
        {
            return;
        }

        let hp = self.with_mut::<Destructible, _>(r, |d| {
            d.hp -= damage.max(0);
            d.hp
        });

        if hp <= 0 {
            if let Some(attacker) = attacker.filter(|&a| a != *self) {
                msg!(r, attacker, "[One] kill[s] [another]!"; attacker, *self);
            }
            self.die(r, "[One] die[s]!");
        }
    }

    /// Remove the entity from play with a final notice to itself.
    pub(crate) fn die(&self, r: &mut impl AsMut<Runtime>, notice: &str) {
        let r = r.as_mut();
        if !self.is_alive(r) {
            return;
        }
        send_message(r, *self, notice, &[*self]);
        log::info!("{self} ({}) died", self.name(r));
        r.kill(*self);
    }

    pub fn fullness(&self, r: &impl AsRef<Runtime>) -> i32 {
        self.get::<FoodConsumer>(r).fullness
    }

    pub fn hunger_state(&self, r: &impl AsRef<Runtime>) -> HungerState {
        let f = self.get::<FoodConsumer>(r);
        HungerState::new(f.fullness, f.max_fullness)
    }

    /// Change fullness, starving or choking to death when out of bounds.
    pub fn modify_fullness(&self, r: &mut impl AsMut<Runtime>, delta: i32) {
        let r = r.as_mut();
        let f = self.with_mut::<FoodConsumer, _>(r, |f| {
            f.fullness += delta;
            *f
        });

        if f.fullness <= 0 {
            self.die(r, "[One] [have] died of starvation!");
        } else if f.fullness > f.max_fullness {
            self.die(r, "[One] choke[s] and die[s]!");
        }
    }

    /// Burn through food for one turn.
    pub(crate) fn add_turn_hunger(&self, r: &mut impl AsMut<Runtime>) {
        let r = r.as_mut();
        let rate = self.get::<FoodConsumer>(r).depletion_rate;
        self.modify_fullness(r, -rate);
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn hunger_thresholds() {
        use HungerState::*;
        for (fullness, state) in [
            (0, Starving),
            (50, Starving),
            (51, Hungry),
            (250, Hungry),
            (251, NotHungry),
            (749, NotHungry),
            (750, Full),
            (949, Full),
            (950, Oversatiated),
            (1000, Oversatiated),
        ] {
            assert_eq!(HungerState::new(fullness, 1000), state, "{fullness}");
        }
    }

    #[test]
    fn hunger_display() {
        assert_eq!(HungerState::NotHungry.to_string(), "Not Hungry");
        assert_eq!(HungerState::Starving.to_string(), "Starving");
    }
}

//! Entity logic for carrying and using items.

use crate::{
    ecs::{Edible, Equipment, Equippable, Inventory},
    prelude::*,
};

/// Outcome of picking up items from the floor.
#[derive(Clone, Default, Eq, PartialEq, Debug)]
pub struct Pickup {
    /// Items moved to the inventory, in pickup order.
    pub picked: Vec<Entity>,
    /// Number of requested items left on the floor for lack of room.
    pub overflow: usize,
}

impl Pickup {
    pub fn is_complete(&self) -> bool {
        self.overflow == 0
    }
}

impl Entity {
    /// Inventory slots, empty slots are `None`.
    pub fn inventory(&self, r: &impl AsRef<Runtime>) -> Vec<Option<Entity>> {
        self.get::<Inventory>(r).0
    }

    pub fn item_in_slot(
        &self,
        r: &impl AsRef<Runtime>,
        slot: usize,
    ) -> Option<Entity> {
        self.get::<Inventory>(r).get(slot).copied().flatten()
    }

    /// Put an item in the first free inventory slot.
    ///
    /// Return false if the inventory is full.
    pub fn add_item(&self, r: &mut impl AsMut<Runtime>, item: Entity) -> bool {
        self.with_mut::<Inventory, _>(r, |inv| {
            match inv.iter_mut().find(|s| s.is_none()) {
                Some(slot) => {
                    *slot = Some(item);
                    true
                }
                None => false,
            }
        })
    }

    /// Take an item out of the inventory. Equipped items are unequipped
    /// first.
    pub fn remove_item(
        &self,
        r: &mut impl AsMut<Runtime>,
        slot: usize,
    ) -> Option<Entity> {
        let r = r.as_mut();
        let item = self.item_in_slot(r, slot)?;
        self.unequip(r, item);
        self.with_mut::<Inventory, _>(r, |inv| inv[slot] = None);
        Some(item)
    }

    /// Move items from the floor under the entity to its inventory.
    ///
    /// `indices` point into the item stack at the entity's location. Items
    /// are taken in index order until the inventory fills up.
    pub fn pickup_items(
        &self,
        r: &mut impl AsMut<Runtime>,
        indices: &[usize],
    ) -> Pickup {
        let r = r.as_mut();
        let mut ret = Pickup::default();
        let Some(loc) = self.loc(r) else {
            return ret;
        };

        let mut floor: Vec<Option<Entity>> =
            r.map.items_at(loc).iter().copied().map(Some).collect();
        let mut indices: Vec<usize> = indices
            .iter()
            .copied()
            .filter(|&i| i < floor.len())
            .collect();
        indices.sort();
        indices.dedup();

        for (n, &i) in indices.iter().enumerate() {
            let Some(item) = floor[i] else { continue };
            if !self.add_item(r, item) {
                ret.overflow = indices.len() - n;
                break;
            }
            floor[i] = None;
            ret.picked.push(item);
        }

        r.map.set_items(loc, floor.into_iter().flatten().collect());
        ret
    }

    /// Pick up items and report the result to the entity.
    ///
    /// Return whether anything was picked up.
    pub fn pickup(&self, r: &mut impl AsMut<Runtime>, indices: &[usize]) -> bool {
        let r = r.as_mut();
        let Some(loc) = self.loc(r) else { return false };
        if r.map.items_at(loc).is_empty() {
            msg!(r, *self, "There is nothing here to pick up.");
            return false;
        }

        let result = self.pickup_items(r, indices);
        if result.picked.is_empty() && result.is_complete() {
            msg!(r, *self, "There is no such item here.");
            return false;
        }
        for &item in &result.picked {
            msg!(r, *self, "[One] pick[s] up [a thing]."; *self, item);
        }
        if !result.is_complete() {
            if result.picked.is_empty() {
                msg!(r, *self, "Your inventory is full! Nothing was picked up.");
            } else {
                msg!(r, *self, "Your inventory is full! Not all items were picked up.");
            }
        }
        !result.picked.is_empty()
    }

    /// Drop an item from inventory to the floor.
    pub fn drop_item(&self, r: &mut impl AsMut<Runtime>, slot: usize) -> bool {
        let r = r.as_mut();
        let Some(loc) = self.loc(r) else { return false };
        let Some(item) = self.remove_item(r, slot) else {
            return false;
        };

        if let Err(e) = r.add_item(item, loc) {
            log::warn!("drop_item: {e}");
            self.add_item(r, item);
            return false;
        }
        msg_nearby!(r, loc, "[One] drop[s] [another]."; *self, item);
        true
    }

    /// Eat one serving of an edible item from inventory.
    pub fn eat(&self, r: &mut impl AsMut<Runtime>, slot: usize) -> bool {
        let r = r.as_mut();
        let Some(item) = self.item_in_slot(r, slot) else {
            return false;
        };
        let Some(food) = item.try_get::<Edible>(r) else {
            msg!(r, *self, "[One] can't eat [another]."; *self, item);
            return false;
        };
        if !self.has_capability(r, Capability::FoodConsumer) {
            msg!(r, *self, "[One] can't eat."; *self);
            return false;
        }

        msg!(r, *self, "[One] eat[s] [another]."; *self, item);
        let remaining = item.with_mut::<Edible, _>(r, |e| {
            e.remaining -= 1;
            e.remaining
        });
        if remaining <= 0 {
            self.remove_item(r, slot);
            let _ = r.ecs.despawn(*item);
        }
        self.modify_fullness(r, food.food_value);
        true
    }

    pub fn weapon(&self, r: &impl AsRef<Runtime>) -> Option<Entity> {
        self.try_get::<Equipment>(r).and_then(|e| e.weapon)
    }

    pub fn armor(&self, r: &impl AsRef<Runtime>) -> Option<Entity> {
        self.try_get::<Equipment>(r).and_then(|e| e.armor)
    }

    /// Wield a weapon from inventory.
    pub fn wield(&self, r: &mut impl AsMut<Runtime>, slot: usize) -> bool {
        let r = r.as_mut();
        let Some(item) = self.equippable_in_slot(r, slot) else {
            return false;
        };
        if !item.get::<Equippable>(r).wieldable {
            msg!(r, *self, "[One] can't wield [another]."; *self, item);
            return false;
        }

        self.unequip(r, item);
        self.with_mut::<Equipment, _>(r, |e| e.weapon = Some(item));
        msg!(r, *self, "[One] [are] wielding [another]."; *self, item);
        true
    }

    pub fn unwield(&self, r: &mut impl AsMut<Runtime>) -> bool {
        let r = r.as_mut();
        if self.weapon(r).is_none() {
            msg!(r, *self, "[One] [are] already empty handed."; *self);
            return false;
        }
        self.with_mut::<Equipment, _>(r, |e| e.weapon = None);
        msg!(r, *self, "[One] [are] empty handed."; *self);
        true
    }

    /// Wear armor from inventory.
    pub fn wear(&self, r: &mut impl AsMut<Runtime>, slot: usize) -> bool {
        let r = r.as_mut();
        let Some(item) = self.equippable_in_slot(r, slot) else {
            return false;
        };
        if !item.get::<Equippable>(r).wearable {
            msg!(r, *self, "[One] can't wear [another]."; *self, item);
            return false;
        }

        self.unequip(r, item);
        self.with_mut::<Equipment, _>(r, |e| e.armor = Some(item));
        msg!(r, *self, "[One] [are] wearing [another]."; *self, item);
        true
    }

    pub fn take_off(&self, r: &mut impl AsMut<Runtime>) -> bool {
        let r = r.as_mut();
        if self.armor(r).is_none() {
            msg!(r, *self, "[One] [are] not wearing anything."; *self);
            return false;
        }
        self.with_mut::<Equipment, _>(r, |e| e.armor = None);
        msg!(r, *self, "[One] take[s] off [one's] armor."; *self);
        true
    }

    /// Stop using an item if it's equipped.
    fn unequip(&self, r: &mut impl AsMut<Runtime>, item: Entity) {
        let r = r.as_mut();
        if !self.has_capability(r, Capability::Equipper) {
            return;
        }
        self.with_mut::<Equipment, _>(r, |e| {
            if e.weapon == Some(item) {
                e.weapon = None;
            }
            if e.armor == Some(item) {
                e.armor = None;
            }
        });
    }

    /// Item in slot if it's equippable and the entity can use equipment.
    fn equippable_in_slot(
        &self,
        r: &mut Runtime,
        slot: usize,
    ) -> Option<Entity> {
        let item = self.item_in_slot(r, slot)?;
        if !self.has_capability(r, Capability::Equipper) {
            msg!(r, *self, "[One] can't use equipment."; *self);
            return None;
        }
        if !item.has_capability(r, Capability::Equippable) {
            msg!(r, *self, "[One] can't equip [another]."; *self, item);
            return None;
        }
        Some(item)
    }
}

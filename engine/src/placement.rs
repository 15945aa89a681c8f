use std::collections::BTreeMap;

use crate::prelude::*;

/// Spatial index, used for efficiently finding locations of entities and
/// entities at locations.
///
/// A location holds at most one creature and any number of stacked items.
/// Bounds are not checked here, that's the map's job.
#[derive(Clone, Default, Eq, PartialEq, Debug)]
pub(crate) struct Placement {
    places: BTreeMap<Entity, Location>,
    creatures: HashMap<Location, Entity>,
    items: HashMap<Location, Vec<Entity>>,
}

impl Placement {
    pub fn entity_at(&self, loc: Location) -> Option<Entity> {
        self.creatures.get(&loc).copied()
    }

    pub fn entity_pos(&self, e: &Entity) -> Option<Location> {
        self.places.get(e).copied()
    }

    pub fn all_entities(&self) -> impl Iterator<Item = Entity> + '_ {
        self.places.keys().cloned()
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.places.len()
    }

    /// Put a creature that isn't placed yet at a vacant location.
    pub fn insert(&mut self, loc: Location, e: Entity) -> Result<()> {
        if self.places.contains_key(&e) {
            return Err(Error::AlreadyPlaced(e));
        }
        if self.entity_at(loc).is_some() {
            return Err(Error::OccupiedCell(loc));
        }

        self.places.insert(e, loc);
        self.creatures.insert(loc, e);
        Ok(())
    }

    /// Move an already placed creature.
    ///
    /// Leaves the index unchanged if the move fails.
    pub fn relocate(&mut self, e: &Entity, loc: Location) -> Result<()> {
        let Some(old) = self.entity_pos(e) else {
            return Err(Error::NotPlaced(*e));
        };
        match self.entity_at(loc) {
            Some(other) if other == *e => return Ok(()),
            Some(_) => return Err(Error::OccupiedCell(loc)),
            None => {}
        }

        self.creatures.remove(&old);
        self.places.insert(*e, loc);
        self.creatures.insert(loc, *e);
        Ok(())
    }

    pub fn remove(&mut self, e: &Entity) -> Option<Location> {
        let loc = self.places.remove(e)?;
        self.creatures.remove(&loc);
        Some(loc)
    }

    pub fn items_at(&self, loc: Location) -> &[Entity] {
        self.items.get(&loc).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn push_item(&mut self, loc: Location, item: Entity) {
        self.items.entry(loc).or_default().push(item);
    }

    /// Replace the item stack at location.
    pub fn set_items(&mut self, loc: Location, items: Vec<Entity>) {
        if items.is_empty() {
            self.items.remove(&loc);
        } else {
            self.items.insert(loc, items);
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn entities(n: usize) -> Vec<Entity> {
        let mut world = hecs::World::new();
        (0..n).map(|_| Entity(world.spawn(()))).collect()
    }

    #[test]
    fn single_occupancy() {
        let v = entities(2);
        let (a, b) = (v[0], v[1]);
        let mut p = Placement::default();

        p.insert(ivec3(1, 1, 0), a).unwrap();
        assert_eq!(
            p.insert(ivec3(1, 1, 0), b),
            Err(Error::OccupiedCell(ivec3(1, 1, 0)))
        );
        assert_eq!(p.entity_pos(&b), None);

        // Placing twice is an error, moving goes through relocate.
        assert_eq!(
            p.insert(ivec3(1, 1, 0), a),
            Err(Error::AlreadyPlaced(a))
        );
        assert_eq!(
            p.insert(ivec3(2, 1, 0), a),
            Err(Error::AlreadyPlaced(a))
        );
        assert_eq!(p.entity_pos(&a), Some(ivec3(1, 1, 0)));
        assert_eq!(p.entity_at(ivec3(2, 1, 0)), None);
        assert_eq!(p.len(), 1);

        // Relocating in place is fine.
        p.relocate(&a, ivec3(1, 1, 0)).unwrap();
        assert_eq!(p.entity_pos(&a), Some(ivec3(1, 1, 0)));
    }

    #[test]
    fn relocation() {
        let v = entities(2);
        let (a, b) = (v[0], v[1]);
        let mut p = Placement::default();

        assert_eq!(p.relocate(&a, ivec3(0, 0, 0)), Err(Error::NotPlaced(a)));

        p.insert(ivec3(1, 1, 0), a).unwrap();
        p.insert(ivec3(2, 1, 0), b).unwrap();

        p.relocate(&a, ivec3(1, 2, 0)).unwrap();
        assert_eq!(p.entity_at(ivec3(1, 1, 0)), None);
        assert_eq!(p.entity_at(ivec3(1, 2, 0)), Some(a));
        assert_eq!(p.entity_pos(&a), Some(ivec3(1, 2, 0)));

        // Failed move leaves everything where it was.
        assert!(p.relocate(&a, ivec3(2, 1, 0)).is_err());
        assert_eq!(p.entity_at(ivec3(1, 2, 0)), Some(a));
        assert_eq!(p.entity_at(ivec3(2, 1, 0)), Some(b));

        assert_eq!(p.remove(&a), Some(ivec3(1, 2, 0)));
        assert_eq!(p.remove(&a), None);
        assert_eq!(p.entity_at(ivec3(1, 2, 0)), None);
        assert_eq!(p.all_entities().collect::<Vec<_>>(), vec![b]);
    }

    #[test]
    fn item_stacks() {
        let v = entities(3);
        let (a, b, c) = (v[0], v[1], v[2]);
        let mut p = Placement::default();
        let loc = ivec3(3, 3, 1);

        assert!(p.items_at(loc).is_empty());
        p.push_item(loc, a);
        p.push_item(loc, b);
        // Items don't block creatures.
        p.insert(loc, c).unwrap();
        assert_eq!(p.items_at(loc), &[a, b]);

        p.set_items(loc, vec![b]);
        assert_eq!(p.items_at(loc), &[b]);
        p.set_items(loc, Vec::new());
        assert!(p.items_at(loc).is_empty());
    }
}

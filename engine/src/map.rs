use rand::Rng;

use crate::{placement::Placement, prelude::*, MAX_PLACEMENT_TRIES};

/// Game world space, terrain combined with where entities are on it and
/// what has been seen of it.
#[derive(Clone, Default, Debug)]
pub struct Map {
    terrain: Terrain,
    placement: Placement,
    /// Cells anyone has ever seen, same layout as the terrain tiles.
    explored: Vec<bool>,
    /// Cells seen on the last field of view update.
    pub(crate) visible: HashSet<Location>,
}

impl Map {
    pub fn new(terrain: Terrain) -> Self {
        let explored = vec![
            false;
            (terrain.width() * terrain.height() * terrain.depth())
                as usize
        ];
        Map {
            terrain,
            placement: Default::default(),
            explored,
            visible: Default::default(),
        }
    }

    pub fn width(&self) -> i32 {
        self.terrain.width()
    }

    pub fn height(&self) -> i32 {
        self.terrain.height()
    }

    pub fn depth(&self) -> i32 {
        self.terrain.depth()
    }

    pub fn contains(&self, loc: Location) -> bool {
        self.terrain.contains(loc)
    }

    /// Tile at location, `Tile::Null` outside the map.
    pub fn tile(&self, loc: Location) -> Tile {
        self.terrain.get(loc)
    }

    /// Turn a diggable tile into floor.
    ///
    /// Return whether anything changed.
    pub fn dig(&mut self, loc: Location) -> bool {
        if self.tile(loc).is_diggable() {
            self.terrain.set(loc, Tile::Floor);
            true
        } else {
            false
        }
    }

    /// Creature standing at location.
    pub fn entity_at(&self, loc: Location) -> Option<Entity> {
        self.placement.entity_at(loc)
    }

    pub fn entity_loc(&self, e: Entity) -> Option<Location> {
        self.placement.entity_pos(&e)
    }

    /// All creatures on the map.
    pub fn entities(&self) -> impl Iterator<Item = Entity> + '_ {
        self.placement.all_entities()
    }

    /// Creatures inside the square box of `radius` around center on the
    /// same depth level.
    pub fn entities_within_radius(
        &self,
        center: Location,
        radius: i32,
    ) -> Vec<Entity> {
        let mut ret = Vec::new();
        if radius < 0 || !(0..self.depth()).contains(&center.z) {
            return ret;
        }
        // Only scan the part of the box that overlaps the map.
        let (x0, x1) = (
            center.x.saturating_sub(radius).max(0),
            center.x.saturating_add(radius).min(self.width() - 1),
        );
        let (y0, y1) = (
            center.y.saturating_sub(radius).max(0),
            center.y.saturating_add(radius).min(self.height() - 1),
        );
        for y in y0..=y1 {
            for x in x0..=x1 {
                if let Some(e) = self.entity_at(ivec3(x, y, center.z)) {
                    ret.push(e);
                }
            }
        }
        ret
    }

    /// Floor cell with nobody on it.
    pub fn is_empty_floor(&self, loc: Location) -> bool {
        self.tile(loc) == Tile::Floor && self.entity_at(loc).is_none()
    }

    /// Find a random empty floor cell on depth level `z`.
    pub fn random_floor_position(
        &self,
        rng: &mut impl Rng,
        z: i32,
    ) -> Result<Location> {
        if !(0..self.depth()).contains(&z) {
            return Err(Error::OutOfBounds(ivec3(0, 0, z)));
        }

        for _ in 0..MAX_PLACEMENT_TRIES {
            let loc = ivec3(
                rng.gen_range(0..self.width()),
                rng.gen_range(0..self.height()),
                z,
            );
            if self.is_empty_floor(loc) {
                return Ok(loc);
            }
        }
        Err(Error::NoFreeFloorTile(z))
    }

    /// Item stack at location, topmost item last.
    pub fn items_at(&self, loc: Location) -> &[Entity] {
        self.placement.items_at(loc)
    }

    pub fn is_explored(&self, loc: Location) -> bool {
        self.terrain.index(loc).is_some_and(|i| self.explored[i])
    }

    /// Mark a cell as explored. Cells never become unexplored again.
    pub fn set_explored(&mut self, loc: Location) {
        if let Some(i) = self.terrain.index(loc) {
            self.explored[i] = true;
        }
    }

    /// Whether the cell was seen on the last field of view update.
    pub fn is_visible(&self, loc: Location) -> bool {
        self.visible.contains(&loc)
    }

    pub fn visible_cells(&self) -> impl Iterator<Item = Location> + '_ {
        self.visible.iter().copied()
    }

    pub(crate) fn insert_entity(
        &mut self,
        e: Entity,
        loc: Location,
    ) -> Result<()> {
        if !self.contains(loc) {
            return Err(Error::OutOfBounds(loc));
        }
        self.placement.insert(loc, e)
    }

    pub(crate) fn move_entity(&mut self, e: Entity, loc: Location) -> Result<()> {
        if !self.contains(loc) {
            return Err(Error::OutOfBounds(loc));
        }
        self.placement.relocate(&e, loc)
    }

    pub(crate) fn remove_entity(&mut self, e: Entity) -> Option<Location> {
        self.placement.remove(&e)
    }

    pub(crate) fn push_item(&mut self, loc: Location, item: Entity) -> Result<()> {
        if !self.contains(loc) {
            return Err(Error::OutOfBounds(loc));
        }
        self.placement.push_item(loc, item);
        Ok(())
    }

    pub(crate) fn set_items(&mut self, loc: Location, items: Vec<Entity>) {
        self.placement.set_items(loc, items);
    }
}

#[cfg(test)]
mod test {
    use rand::SeedableRng;
    use util::GameRng;

    use super::*;

    fn open_map() -> Map {
        Map::new(Terrain::filled(20, 20, 2, Tile::Floor))
    }

    fn entities(n: usize) -> Vec<Entity> {
        let mut world = hecs::World::new();
        (0..n).map(|_| Entity(world.spawn(()))).collect()
    }

    #[test]
    fn radius_query() {
        let mut map = open_map();
        let v = entities(4);
        map.insert_entity(v[0], ivec3(14, 10, 0)).unwrap();
        map.insert_entity(v[1], ivec3(16, 10, 0)).unwrap();
        map.insert_entity(v[2], ivec3(14, 10, 1)).unwrap();
        map.insert_entity(v[3], ivec3(5, 5, 0)).unwrap();

        // Scans rows top to bottom.
        assert_eq!(
            map.entities_within_radius(ivec3(10, 10, 0), 5),
            vec![v[3], v[0]]
        );
        assert!(map.entities_within_radius(ivec3(10, 10, 0), -1).is_empty());
    }

    #[test]
    fn huge_radius_query() {
        let mut map = open_map();
        let v = entities(3);
        map.insert_entity(v[0], ivec3(0, 0, 0)).unwrap();
        map.insert_entity(v[1], ivec3(19, 19, 0)).unwrap();
        map.insert_entity(v[2], ivec3(3, 3, 1)).unwrap();

        assert_eq!(
            map.entities_within_radius(ivec3(10, 10, 0), i32::MAX),
            vec![v[0], v[1]]
        );
        assert_eq!(
            map.entities_within_radius(ivec3(i32::MAX, i32::MIN, 0), i32::MAX),
            vec![v[0], v[1]]
        );
        assert!(map
            .entities_within_radius(ivec3(10, 10, 5), i32::MAX)
            .is_empty());
    }

    #[test]
    fn digging() {
        let mut map = Map::new(
            Terrain::from_ascii(&["
                ###
                #.#
                ###"])
            .unwrap(),
        );
        assert!(map.dig(ivec3(0, 1, 0)));
        assert_eq!(map.tile(ivec3(0, 1, 0)), Tile::Floor);
        // Digging floor changes nothing.
        assert!(!map.dig(ivec3(0, 1, 0)));
        assert!(!map.dig(ivec3(1, 1, 0)));
        // Nor does digging outside the map.
        assert!(!map.dig(ivec3(-1, 1, 0)));
        assert_eq!(map.tile(ivec3(-1, 1, 0)), Tile::Null);
    }

    #[test]
    fn insertion_bounds() {
        let mut map = open_map();
        let v = entities(2);
        assert_eq!(
            map.insert_entity(v[0], ivec3(20, 0, 0)),
            Err(Error::OutOfBounds(ivec3(20, 0, 0)))
        );
        map.insert_entity(v[0], ivec3(1, 1, 0)).unwrap();
        assert_eq!(
            map.insert_entity(v[1], ivec3(1, 1, 0)),
            Err(Error::OccupiedCell(ivec3(1, 1, 0)))
        );
        assert!(!map.is_empty_floor(ivec3(1, 1, 0)));
        assert!(map.move_entity(v[0], ivec3(0, 0, 3)).is_err());
        assert_eq!(map.entity_loc(v[0]), Some(ivec3(1, 1, 0)));
    }

    #[test]
    fn random_floor() {
        let mut rng = GameRng::seed_from_u64(1);
        let mut map = Map::new(
            Terrain::from_ascii(&["
                ####
                #..#
                ####"])
            .unwrap(),
        );
        for _ in 0..10 {
            let loc = map.random_floor_position(&mut rng, 0).unwrap();
            assert!(loc == ivec3(1, 1, 0) || loc == ivec3(2, 1, 0));
        }

        let v = entities(2);
        map.insert_entity(v[0], ivec3(1, 1, 0)).unwrap();
        assert_eq!(
            map.random_floor_position(&mut rng, 0),
            Ok(ivec3(2, 1, 0))
        );
        map.insert_entity(v[1], ivec3(2, 1, 0)).unwrap();
        assert_eq!(
            map.random_floor_position(&mut rng, 0),
            Err(Error::NoFreeFloorTile(0))
        );
        assert!(map.random_floor_position(&mut rng, 1).is_err());
    }

    #[test]
    fn explored_is_monotonic() {
        let mut map = open_map();
        assert!(!map.is_explored(ivec3(3, 3, 1)));
        map.set_explored(ivec3(3, 3, 1));
        map.set_explored(ivec3(3, 3, 1));
        assert!(map.is_explored(ivec3(3, 3, 1)));
        assert!(!map.is_explored(ivec3(3, 3, 0)));

        map.set_explored(ivec3(-3, 3, 1));
        assert!(!map.is_explored(ivec3(-3, 3, 1)));
    }
}

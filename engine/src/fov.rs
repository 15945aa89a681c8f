//! Logic for revealing unexplored game terrain

use crate::prelude::*;

/// Field of view calculator bound to a single depth level of a map.
///
/// Light does not travel between levels, every level gets its own view.
#[derive(Copy, Clone)]
pub struct LevelFov<'a> {
    map: &'a Map,
    z: i32,
}

impl<'a> LevelFov<'a> {
    pub fn depth(&self) -> i32 {
        self.z
    }

    /// Cells on this level visible from `(x, y)` within `radius`.
    ///
    /// Cells outside the map are never produced. The origin comes first.
    pub fn compute(
        &self,
        x: i32,
        y: i32,
        radius: i32,
    ) -> impl Iterator<Item = IVec2> + 'a {
        let (map, z) = (self.map, self.z);
        ::fov::field_of_view(radius, move |[dx, dy]| {
            map.tile(ivec3(x + dx, y + dy, z)).blocks_light()
        })
        .map(move |[dx, dy]| ivec2(x + dx, y + dy))
        .filter(move |p| map.contains(p.extend(z)))
    }
}

impl Map {
    pub fn fov(&self, z: i32) -> LevelFov<'_> {
        LevelFov { map: self, z }
    }

    /// Recompute the current view from origin and mark everything seen as
    /// explored.
    pub fn compute_fov(&mut self, origin: Location, radius: i32) {
        let cells: HashSet<Location> = self
            .fov(origin.z)
            .compute(origin.x, origin.y, radius)
            .map(|p| p.extend(origin.z))
            .collect();

        for &loc in &cells {
            self.set_explored(loc);
        }
        self.visible = cells;
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn room() -> Map {
        Map::new(
            Terrain::from_ascii(&[
                "
                #######
                #.....#
                #.....#
                ###.###
                #.....#
                #######
                ",
                "
                .......
                .......
                .......
                .......
                .......
                .......
                ",
            ])
            .unwrap(),
        )
    }

    #[test]
    fn walls_block_sight() {
        let map = room();
        let seen: HashSet<IVec2> = map.fov(0).compute(1, 1, 10).collect();

        // Room interior and its walls.
        assert!(seen.contains(&ivec2(5, 2)));
        assert!(seen.contains(&ivec2(0, 0)));
        assert!(seen.contains(&ivec2(4, 3)));
        // The lower room through the gap is mostly hidden.
        assert!(!seen.contains(&ivec2(5, 4)));
        assert!(!seen.contains(&ivec2(1, 4)));
    }

    #[test]
    fn levels_are_independent() {
        let map = room();
        let upper: HashSet<IVec2> = map.fov(0).compute(1, 4, 10).collect();
        let lower: HashSet<IVec2> = map.fov(1).compute(1, 4, 10).collect();

        assert!(!upper.contains(&ivec2(1, 0)));
        assert!(lower.contains(&ivec2(1, 0)));
        // Nothing outside the map.
        assert_eq!(lower.len(), 7 * 6);
    }

    #[test]
    fn radius_limits_view() {
        let map = room();
        let seen: Vec<IVec2> = map.fov(1).compute(0, 0, 2).collect();
        assert_eq!(seen[0], ivec2(0, 0));
        assert_eq!(seen.len(), 9);
        assert!(seen.iter().all(|p| p.x <= 2 && p.y <= 2));
    }

    #[test]
    fn explored_accumulates() {
        let mut map = room();
        map.compute_fov(ivec3(1, 1, 0), 10);
        assert!(map.is_visible(ivec3(5, 2, 0)));
        assert!(map.is_explored(ivec3(5, 2, 0)));
        assert!(!map.is_explored(ivec3(5, 4, 0)));

        map.compute_fov(ivec3(5, 4, 0), 10);
        assert!(map.is_visible(ivec3(1, 4, 0)));
        assert!(!map.is_visible(ivec3(1, 1, 0)));
        // Still remembered.
        assert!(map.is_explored(ivec3(1, 1, 0)));
        assert!(map.is_explored(ivec3(1, 4, 0)));
        assert!(!map.is_explored(ivec3(1, 1, 1)));
    }
}

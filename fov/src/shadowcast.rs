use std::collections::HashSet;

/// Rational slope between the origin and the edge of a cell.
///
/// Stored as an exact fraction so that the cell-rounding rules work out the
/// same at every distance.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub(crate) struct Slope {
    num: i32,
    // Always positive.
    den: i32,
}

impl Slope {
    const fn new(num: i32, den: i32) -> Slope {
        assert!(den > 0, "Slope: denominator must be positive");
        Slope { num, den }
    }

    /// Slope from origin to the leading edge of the cell at `col`.
    fn cell_edge(depth: i32, col: i32) -> Slope {
        Slope::new(2 * col - 1, 2 * depth)
    }

    /// `depth * self` rounded to nearest, halves go up.
    fn round_ties_up(self, depth: i32) -> i32 {
        (2 * depth * self.num + self.den).div_euclid(2 * self.den)
    }

    /// `depth * self` rounded to nearest, halves go down.
    fn round_ties_down(self, depth: i32) -> i32 {
        -(self.den - 2 * depth * self.num).div_euclid(2 * self.den)
    }
}

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
enum Quadrant {
    North,
    East,
    South,
    West,
}

impl Quadrant {
    const ALL: [Quadrant; 4] = [
        Quadrant::North,
        Quadrant::East,
        Quadrant::South,
        Quadrant::West,
    ];

    fn transform(self, depth: i32, col: i32) -> [i32; 2] {
        match self {
            Quadrant::North => [col, -depth],
            Quadrant::South => [col, depth],
            Quadrant::East => [depth, col],
            Quadrant::West => [-depth, col],
        }
    }
}

/// One row of cells inside a quadrant, bounded by two slopes.
#[derive(Copy, Clone, Debug)]
struct Row {
    quadrant: Quadrant,
    depth: i32,
    start: Slope,
    end: Slope,
}

impl Row {
    fn next(self) -> Row {
        Row {
            depth: self.depth + 1,
            ..self
        }
    }

    /// Floor cells are only lit if their center is inside the row's
    /// visible arc, which makes visibility symmetric between two cells.
    fn is_symmetric(&self, col: i32) -> bool {
        col * self.start.den >= self.depth * self.start.num
            && col * self.end.den <= self.depth * self.end.num
    }
}

/// Field-of-view iterator.
///
/// Yields each visible cell offset exactly once, starting from the origin.
pub struct Shadowcast<F> {
    radius: i32,
    blocks_light: F,
    rows: Vec<Row>,
    output: Vec<[i32; 2]>,
    seen: HashSet<[i32; 2]>,
}

impl<F> Shadowcast<F>
where
    F: FnMut([i32; 2]) -> bool,
{
    pub fn new(radius: i32, blocks_light: F) -> Self {
        let mut ret = Shadowcast {
            radius,
            blocks_light,
            rows: Vec::new(),
            output: Vec::new(),
            seen: HashSet::new(),
        };

        if radius < 0 {
            return ret;
        }

        ret.reveal([0, 0]);
        if radius > 0 {
            for quadrant in Quadrant::ALL {
                ret.rows.push(Row {
                    quadrant,
                    depth: 1,
                    start: Slope::new(-1, 1),
                    end: Slope::new(1, 1),
                });
            }
        }

        ret
    }

    fn reveal(&mut self, pos: [i32; 2]) {
        if self.seen.insert(pos) {
            self.output.push(pos);
        }
    }

    fn scan(&mut self, mut row: Row) {
        if row.depth > self.radius {
            return;
        }

        let min_col = row.start.round_ties_up(row.depth);
        let max_col = row.end.round_ties_down(row.depth);

        // Opacity of the previous cell on the row.
        let mut prev: Option<bool> = None;
        for col in min_col..=max_col {
            let pos = row.quadrant.transform(row.depth, col);
            let opaque = (self.blocks_light)(pos);

            if opaque || row.is_symmetric(col) {
                self.reveal(pos);
            }

            match (prev, opaque) {
                // Leaving a wall, the lit arc starts here.
                (Some(true), false) => {
                    row.start = Slope::cell_edge(row.depth, col);
                }
                // Hitting a wall, everything before it continues as its own
                // narrower arc.
                (Some(false), true) => {
                    let mut next = row.next();
                    next.end = Slope::cell_edge(row.depth, col);
                    self.rows.push(next);
                }
                _ => {}
            }
            prev = Some(opaque);
        }

        if prev == Some(false) {
            self.rows.push(row.next());
        }
    }
}

impl<F> Iterator for Shadowcast<F>
where
    F: FnMut([i32; 2]) -> bool,
{
    type Item = [i32; 2];

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(pos) = self.output.pop() {
                return Some(pos);
            }
            let row = self.rows.pop()?;
            self.scan(row);
        }
    }
}

#[cfg(test)]
mod test {
    use std::collections::HashSet;

    use quickcheck_macros::quickcheck;

    use crate::field_of_view;

    fn visible(
        radius: i32,
        blocks_light: impl FnMut([i32; 2]) -> bool,
    ) -> HashSet<[i32; 2]> {
        field_of_view(radius, blocks_light).collect()
    }

    #[test]
    fn origin_only() {
        assert_eq!(visible(0, |_| false), [[0, 0]].into_iter().collect());
        assert!(visible(-1, |_| false).is_empty());
    }

    #[test]
    fn enclosed_room() {
        // 3x3 room with walls at distance 2.
        let cells = visible(8, |[x, y]| x.abs() >= 2 || y.abs() >= 2);
        assert_eq!(cells.len(), 25);
        assert!(cells.iter().all(|[x, y]| x.abs() <= 2 && y.abs() <= 2));
        // Walls, corners included, are seen.
        assert!(cells.contains(&[2, 2]));
        assert!(cells.contains(&[-2, 0]));
    }

    #[test]
    fn pillar_shadow() {
        let cells = visible(4, |p| p == [1, 0]);
        assert!(cells.contains(&[1, 0]));
        assert!(!cells.contains(&[2, 0]));
        assert!(!cells.contains(&[4, 0]));
        // Off-axis cells past the pillar are still in view.
        assert!(cells.contains(&[4, 3]));
        assert!(cells.contains(&[0, 4]));
        assert!(cells.contains(&[-4, 0]));
    }

    #[test]
    fn corridor() {
        // Horizontal corridor one cell high.
        let cells = visible(5, |[_, y]| y != 0);
        for x in -5..=5 {
            assert!(cells.contains(&[x, 0]));
        }
        assert!(!cells.contains(&[3, 2]));
        assert!(!cells.contains(&[0, -2]));
    }

    #[quickcheck]
    fn open_field_is_square(radius: u8) -> bool {
        let r = (radius % 12) as i32;
        let cells = visible(r, |_| false);
        cells.len() as i32 == (2 * r + 1) * (2 * r + 1)
    }

    #[quickcheck]
    fn no_duplicates_within_radius(walls: Vec<(i8, i8)>) -> bool {
        let walls: HashSet<[i32; 2]> = walls
            .into_iter()
            .map(|(x, y)| [(x % 7) as i32, (y % 7) as i32])
            .filter(|&p| p != [0, 0])
            .collect();
        let list: Vec<[i32; 2]> =
            field_of_view(6, |p| walls.contains(&p)).collect();
        let set: HashSet<[i32; 2]> = list.iter().copied().collect();

        set.len() == list.len()
            && set.contains(&[0, 0])
            && set.iter().all(|[x, y]| x.abs() <= 6 && y.abs() <= 6)
    }
}

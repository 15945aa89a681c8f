use crate::{Error, Location, Result, Tile};

/// Static three-dimensional tile grid.
///
/// Dimensions are fixed at construction. Reading outside the grid gives
/// `Tile::Null`.
#[derive(Clone, Default, Eq, PartialEq, Debug)]
pub struct Terrain {
    width: i32,
    height: i32,
    depth: i32,
    tiles: Vec<Tile>,
}

impl Terrain {
    /// Build terrain from nested vectors indexed as `levels[z][x][y]`.
    pub fn new(levels: Vec<Vec<Vec<Tile>>>) -> Result<Self> {
        let depth = levels.len();
        let width = levels.first().map_or(0, |l| l.len());
        let height = levels
            .first()
            .and_then(|l| l.first())
            .map_or(0, |c| c.len());

        if depth == 0 || width == 0 || height == 0 {
            return Err(Error::MalformedTerrain("empty tile grid".into()));
        }

        for (z, level) in levels.iter().enumerate() {
            if level.len() != width {
                return Err(Error::MalformedTerrain(format!(
                    "level {z} is {} columns wide, expected {width}",
                    level.len()
                )));
            }
            if let Some(x) = level.iter().position(|c| c.len() != height) {
                return Err(Error::MalformedTerrain(format!(
                    "column {x} on level {z} has {} cells, expected {height}",
                    level[x].len()
                )));
            }
        }

        let mut ret = Terrain::filled(
            width as i32,
            height as i32,
            depth as i32,
            Tile::Null,
        );
        for (z, level) in levels.into_iter().enumerate() {
            for (x, column) in level.into_iter().enumerate() {
                for (y, tile) in column.into_iter().enumerate() {
                    ret.set(Location::new(x as i32, y as i32, z as i32), tile);
                }
            }
        }
        Ok(ret)
    }

    /// Terrain where every cell is the same tile.
    pub fn filled(width: i32, height: i32, depth: i32, tile: Tile) -> Self {
        let (width, height, depth) = (width.max(0), height.max(0), depth.max(0));
        Terrain {
            width,
            height,
            depth,
            tiles: vec![tile; (width * height * depth) as usize],
        }
    }

    /// Parse terrain from ASCII maps, one string per depth level.
    ///
    /// Lines are trimmed and blank lines skipped, so indented raw string
    /// literals work. Use `.` for floor, `#` for wall, `<` and `>` for
    /// stairs.
    pub fn from_ascii(levels: &[&str]) -> Result<Self> {
        let mut grid = Vec::new();
        for (z, text) in levels.iter().enumerate() {
            let lines: Vec<&str> = text
                .lines()
                .map(str::trim)
                .filter(|l| !l.is_empty())
                .collect();
            let width = lines.first().map_or(0, |l| l.chars().count());
            let mut level = vec![Vec::new(); width];

            for (y, line) in lines.iter().enumerate() {
                if line.chars().count() != width {
                    return Err(Error::MalformedTerrain(format!(
                        "line {y} on level {z} is not {width} chars long"
                    )));
                }
                for (x, c) in line.chars().enumerate() {
                    let tile = Tile::try_from(c).map_err(|_| {
                        Error::MalformedTerrain(format!(
                            "bad terrain char {c:?} on level {z}"
                        ))
                    })?;
                    level[x].push(tile);
                }
            }
            grid.push(level);
        }
        Terrain::new(grid)
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn depth(&self) -> i32 {
        self.depth
    }

    pub fn contains(&self, loc: Location) -> bool {
        (0..self.width).contains(&loc.x)
            && (0..self.height).contains(&loc.y)
            && (0..self.depth).contains(&loc.z)
    }

    pub fn get(&self, loc: Location) -> Tile {
        self.index(loc).map_or(Tile::Null, |i| self.tiles[i])
    }

    /// Change a tile, writes outside the grid are ignored.
    pub fn set(&mut self, loc: Location, tile: Tile) {
        if let Some(i) = self.index(loc) {
            self.tiles[i] = tile;
        }
    }

    /// Position of the cell in a flat vector of `width * height * depth`
    /// elements.
    pub(crate) fn index(&self, loc: Location) -> Option<usize> {
        if !self.contains(loc) {
            return None;
        }
        Some(
            ((loc.z * self.height + loc.y) * self.width + loc.x) as usize,
        )
    }
}

use serde::{Deserialize, Serialize};

use crate::{Color, Glyph};

/// Specific terrain in a single game world map cell.
///
/// Tiles are plain values, every floor cell holds the same `Floor`.
#[derive(
    Copy, Clone, Default, Eq, PartialEq, Hash, Debug, Serialize, Deserialize,
)]
#[serde(try_from = "char", into = "char")]
pub enum Tile {
    /// What lies outside the map.
    #[default]
    Null,
    Floor,
    Wall,
    StairsUp,
    StairsDown,
}

use Tile::*;

impl Tile {
    pub fn is_walkable(self) -> bool {
        matches!(self, Floor | StairsUp | StairsDown)
    }

    pub fn is_diggable(self) -> bool {
        matches!(self, Wall)
    }

    pub fn blocks_light(self) -> bool {
        matches!(self, Null | Wall)
    }

    pub fn glyph(self) -> Glyph {
        match self {
            Null => Glyph::default(),
            Floor => Glyph::new('.', Color::White),
            Wall => Glyph::new('#', Color::Goldenrod),
            StairsUp => Glyph::new('<', Color::White),
            StairsDown => Glyph::new('>', Color::White),
        }
    }
}

impl TryFrom<char> for Tile {
    type Error = &'static str;

    fn try_from(value: char) -> Result<Self, Self::Error> {
        match value {
            ' ' => Ok(Null),
            '.' => Ok(Floor),
            '#' => Ok(Wall),
            '<' => Ok(StairsUp),
            '>' => Ok(StairsDown),
            _ => Err("invalid terrain char"),
        }
    }
}

impl From<Tile> for char {
    fn from(val: Tile) -> Self {
        // NB. This must match Tile's TryFrom inputs above.
        val.glyph().ch
    }
}

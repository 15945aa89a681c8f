use serde::{Deserialize, Serialize};

/// Named display colors, the renderer decides what they look like.
#[derive(
    Copy,
    Clone,
    Default,
    Eq,
    PartialEq,
    Hash,
    Debug,
    Serialize,
    Deserialize,
    strum::Display,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum Color {
    #[default]
    White,
    Black,
    Red,
    Green,
    LightGreen,
    Yellow,
    Goldenrod,
    Brown,
    Gray,
}

/// Visual representation of a tile or an entity.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct Glyph {
    pub ch: char,
    pub fg: Color,
    pub bg: Color,
}

impl Default for Glyph {
    fn default() -> Self {
        Glyph::new(' ', Color::White)
    }
}

impl Glyph {
    pub const fn new(ch: char, fg: Color) -> Self {
        Glyph {
            ch,
            fg,
            bg: Color::Black,
        }
    }
}

//! The [`Tile`] type — classification of a maze character.

/// Character used for walls.
pub const WALL: char = '#';
/// Character used for open floor.
pub const OPEN: char = ' ';
/// Character marking the start cell.
pub const START: char = 'S';
/// Character marking the end cell.
pub const END: char = 'E';
/// Character drawn over path cells when rendering a solution.
pub const PATH: char = '~';

/// What a maze character means to the solver.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Tile {
    Wall,
    Open,
    Start,
    End,
}

impl Tile {
    /// Classify a character. Anything that is not open floor, start or end
    /// is impassable.
    #[inline]
    pub const fn from_char(ch: char) -> Self {
        match ch {
            OPEN => Tile::Open,
            START => Tile::Start,
            END => Tile::End,
            _ => Tile::Wall,
        }
    }

    /// Whether the tile can be walked on.
    #[inline]
    pub const fn is_passable(self) -> bool {
        !matches!(self, Tile::Wall)
    }
}

impl Default for Tile {
    #[inline]
    fn default() -> Self {
        Tile::Wall
    }
}

impl From<char> for Tile {
    fn from(ch: char) -> Self {
        Tile::from_char(ch)
    }
}

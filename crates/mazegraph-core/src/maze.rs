//! The [`Maze`] type — a rectangular character grid read from text.
//!
//! Each line of the source text is one row. Rows shorter than the longest
//! line are padded with walls, so every maze is a full rectangle. The start
//! (`S`) and end (`E`) markers are located while parsing.

use std::fmt;
use std::fs;
use std::io;
use std::path::Path;

use crate::cell::{END, PATH, START, Tile, WALL};
use crate::geom::{Point, Range};

/// A parsed maze grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Maze {
    cells: Vec<char>,
    width: usize,
    height: usize,
    start: Option<Point>,
    end: Option<Point>,
}

impl Maze {
    /// Parse a maze from text.
    ///
    /// Trailing `'\r'` is dropped from every line. An input with no lines is
    /// rejected, as is a second start or end marker. A maze missing either
    /// marker parses fine; solving it is what fails.
    pub fn parse(s: &str) -> Result<Self, MazeError> {
        let lines: Vec<&str> = s.lines().map(|l| l.trim_end_matches('\r')).collect();
        let height = lines.len();
        let width = lines.iter().map(|l| l.chars().count()).max().unwrap_or(0);
        if height == 0 || width == 0 {
            return Err(MazeError::Empty);
        }

        let mut cells = vec![WALL; width * height];
        let mut start: Option<Point> = None;
        let mut end: Option<Point> = None;

        for (y, line) in lines.iter().enumerate() {
            for (x, ch) in line.chars().enumerate() {
                cells[y * width + x] = ch;
                let p = Point::new(x as i32, y as i32);
                let slot = match ch {
                    START => &mut start,
                    END => &mut end,
                    _ => continue,
                };
                if let Some(first) = *slot {
                    return Err(MazeError::DuplicateMarker {
                        ch,
                        first,
                        second: p,
                    });
                }
                *slot = Some(p);
            }
        }

        Ok(Self {
            cells,
            width,
            height,
            start,
            end,
        })
    }

    /// Read and parse a maze file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, MazeError> {
        let text = fs::read_to_string(path)?;
        Self::parse(&text)
    }

    /// Number of columns.
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Number of rows.
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// The full extent of the maze.
    #[inline]
    pub fn bounds(&self) -> Range {
        Range::new(0, 0, self.width as i32, self.height as i32)
    }

    /// Location of the start marker, if any.
    #[inline]
    pub fn start(&self) -> Option<Point> {
        self.start
    }

    /// Location of the end marker, if any.
    #[inline]
    pub fn end(&self) -> Option<Point> {
        self.end
    }

    #[inline]
    fn index(&self, p: Point) -> Option<usize> {
        if self.bounds().contains(p) {
            Some(p.y as usize * self.width + p.x as usize)
        } else {
            None
        }
    }

    /// Raw character at `p`. Positions outside the grid read as walls.
    pub fn at(&self, p: Point) -> char {
        self.index(p).map(|i| self.cells[i]).unwrap_or(WALL)
    }

    /// Classified tile at `p`.
    #[inline]
    pub fn tile(&self, p: Point) -> Tile {
        Tile::from_char(self.at(p))
    }

    /// Count of passable cells.
    pub fn passable_count(&self) -> usize {
        self.cells
            .iter()
            .filter(|&&ch| Tile::from_char(ch).is_passable())
            .count()
    }

    /// Render the grid as text, one line per row.
    pub fn render(&self) -> String {
        self.render_with(|_, ch| ch)
    }

    /// Render the grid with `path` drawn over it. Start and end markers are
    /// left visible; any other path cell is drawn as `'~'`.
    pub fn render_path(&self, path: &[Point]) -> String {
        let mut overlay = self.cells.clone();
        for &p in path {
            if let Some(i) = self.index(p) {
                if !matches!(overlay[i], START | END) {
                    overlay[i] = PATH;
                }
            }
        }
        self.render_with(|p, _| overlay[p.y as usize * self.width + p.x as usize])
    }

    /// Render the grid, choosing each output character with `f`.
    pub fn render_with(&self, f: impl Fn(Point, char) -> char) -> String {
        let mut out = String::with_capacity((self.width + 1) * self.height);
        for p in self.bounds() {
            out.push(f(p, self.at(p)));
            if p.x as usize == self.width - 1 {
                out.push('\n');
            }
        }
        out
    }
}

impl fmt::Display for Maze {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

/// Errors that can occur when loading a maze.
#[derive(Debug)]
pub enum MazeError {
    /// The maze file could not be read.
    Io(io::Error),
    /// The text contained no cells.
    Empty,
    /// A start or end marker appeared more than once.
    DuplicateMarker { ch: char, first: Point, second: Point },
}

impl fmt::Display for MazeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "maze: cannot read file: {e}"),
            Self::Empty => write!(f, "maze: no cells"),
            Self::DuplicateMarker { ch, first, second } => write!(
                f,
                "maze: marker \u{201c}{ch}\u{201d} found at {first} and again at {second}"
            ),
        }
    }
}

impl std::error::Error for MazeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for MazeError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}

//! **mazegraph-core** — text mazes as rectangular character grids.
//!
//! This crate provides the types shared by the rest of the workspace:
//! geometry primitives, cell classification, and the parsed [`Maze`] grid
//! with loading and text rendering.

pub mod cell;
pub mod geom;
pub mod maze;

pub use cell::Tile;
pub use geom::{Point, Range};
pub use maze::{Maze, MazeError};

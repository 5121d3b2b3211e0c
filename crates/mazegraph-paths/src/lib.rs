//! Maze solving over an explicit graph.
//!
//! A [`Maze`](mazegraph_core::Maze) is turned into an adjacency-list
//! [`Graph`] with one node per passable cell ([`MazeGraph::build`]), then
//! searched from start to end by one of three strategies:
//!
//! - **BFS** ([`Strategy::Bfs`]) returns a shortest path by edge count.
//! - **Iterative DFS** ([`Strategy::DfsIterative`]) over an explicit node stack.
//! - **Recursive DFS** ([`Strategy::DfsRecursive`]) with recursive-descent
//!   semantics, run on a stack of resumable frames.
//!
//! All searches go through [`Solver`], which owns the graph and can be
//! queried repeatedly.
//!
//! # Frontier storage
//!
//! | Type | Order | Bound |
//! |---|---|---|
//! | [`ArrayStack`] | LIFO | fixed capacity |
//! | [`LinkedStack`] | LIFO | none |
//! | [`ArrayQueue`] | FIFO | fixed capacity (circular) |
//! | [`LinkedQueue`] | FIFO | none |

mod bfs;
mod builder;
mod config;
mod descent;
mod dfs;
mod error;
mod frontier;
mod graph;
mod index;
mod path;
mod solver;

pub use builder::MazeGraph;
pub use config::{DfsMarking, Limits, SolverConfig, Storage};
pub use error::{CapacityError, Resource, SolveError};
pub use frontier::{ArrayQueue, ArrayStack, LinkedQueue, LinkedStack, Queue, Stack};
pub use graph::{Adjacency, Edge, Graph, NodeId};
pub use index::{BUCKETS, CoordinateIndex};
pub use path::{Parent, ParentTree, Path};
pub use solver::{Solution, Solver, Strategy};

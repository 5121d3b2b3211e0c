use std::fmt;

use mazegraph_core::Maze;

use crate::builder::MazeGraph;
use crate::config::{Storage, SolverConfig};
use crate::error::SolveError;
use crate::frontier::{ArrayQueue, ArrayStack, LinkedQueue, LinkedStack};
use crate::path::{ParentTree, Path};

/// Which traversal to run.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Strategy {
    /// Breadth-first; returns a shortest path.
    Bfs,
    /// Depth-first over an explicit node stack.
    DfsIterative,
    /// Depth-first with recursive-descent semantics.
    DfsRecursive,
}

impl Strategy {
    /// Every strategy, in menu order.
    pub const ALL: [Strategy; 3] = [Strategy::Bfs, Strategy::DfsIterative, Strategy::DfsRecursive];

    /// Human-readable name.
    pub const fn name(self) -> &'static str {
        match self {
            Strategy::Bfs => "BFS",
            Strategy::DfsIterative => "DFS (Stack)",
            Strategy::DfsRecursive => "DFS (Recursive)",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Result of one solve. A missing route is `found == false` with an empty
/// path, not an error.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Solution {
    pub strategy: Strategy,
    pub found: bool,
    pub path: Path,
    /// Nodes expanded before the search stopped.
    pub visited: usize,
}

/// Outcome of a traversal before path reconstruction.
#[derive(Debug)]
pub(crate) struct Search {
    tree: ParentTree,
    visited: usize,
    found: bool,
}

impl Search {
    #[inline]
    pub(crate) fn found(tree: ParentTree, visited: usize) -> Self {
        Self {
            tree,
            visited,
            found: true,
        }
    }

    #[inline]
    pub(crate) fn exhausted(tree: ParentTree, visited: usize) -> Self {
        Self {
            tree,
            visited,
            found: false,
        }
    }
}

/// A solving session over one maze.
///
/// The graph is built once by [`new`](Self::new). Every call to
/// [`solve`](Self::solve) allocates its own frontier, marks and parent tree,
/// so calls are independent and repeatable.
#[derive(Debug, Clone)]
pub struct Solver {
    pub(crate) maze: MazeGraph,
    pub(crate) config: SolverConfig,
}

impl Solver {
    /// Build the graph for `maze`.
    pub fn new(maze: &Maze, config: SolverConfig) -> Result<Self, SolveError> {
        let mg = MazeGraph::build(maze, &config.limits)?;
        Ok(Self { maze: mg, config })
    }

    /// The built graph and coordinate index.
    #[inline]
    pub fn maze_graph(&self) -> &MazeGraph {
        &self.maze
    }

    #[inline]
    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// Search for a route from start to end with `strategy`.
    pub fn solve(&self, strategy: Strategy) -> Result<Solution, SolveError> {
        let cap = self.config.limits.max_nodes;
        let search = match (strategy, self.config.storage) {
            (Strategy::Bfs, Storage::Array) => self.bfs(ArrayQueue::with_capacity(cap)),
            (Strategy::Bfs, Storage::Linked) => self.bfs(LinkedQueue::new()),
            (Strategy::DfsIterative, Storage::Array) => self.dfs(ArrayStack::with_capacity(cap)),
            (Strategy::DfsIterative, Storage::Linked) => self.dfs(LinkedStack::new()),
            (Strategy::DfsRecursive, Storage::Array) => {
                self.dfs_descent(ArrayStack::with_capacity(cap))
            }
            (Strategy::DfsRecursive, Storage::Linked) => self.dfs_descent(LinkedStack::new()),
        }
        .inspect_err(|e| log::trace!("{strategy}: {e}"))?;

        let stride = self.config.limits.max_cols;
        let path = if search.found {
            search.tree.reconstruct(&self.maze.graph, self.maze.end, stride)?
        } else {
            Path::empty(stride)
        };

        log::debug!(
            "{strategy}: found={} steps={} visited={}",
            search.found,
            path.steps(),
            search.visited
        );

        Ok(Solution {
            strategy,
            found: search.found,
            path,
            visited: search.visited,
        })
    }

    /// Run every strategy in [`Strategy::ALL`] order.
    pub fn solve_all(&self) -> Result<Vec<Solution>, SolveError> {
        Strategy::ALL.iter().map(|&s| self.solve(s)).collect()
    }
}

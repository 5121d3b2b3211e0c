//! Solver configuration: capacity limits and frontier choices.

/// Upper bounds on every growable structure.
///
/// The defaults describe a 50×50 grid: at most 2500 nodes and four outgoing
/// edges per node.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Limits {
    pub max_rows: usize,
    /// Also the stride used to linearize path coordinates.
    pub max_cols: usize,
    pub max_nodes: usize,
    pub max_edges: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            max_rows: 50,
            max_cols: 50,
            max_nodes: 2500,
            max_edges: 10_000,
        }
    }
}

impl Limits {
    /// Limits large enough for a grid of `rows` × `cols`.
    pub fn for_grid(rows: usize, cols: usize) -> Self {
        let cells = rows.saturating_mul(cols);
        Self {
            max_rows: rows,
            max_cols: cols,
            max_nodes: cells,
            max_edges: cells.saturating_mul(4),
        }
    }
}

/// Storage strategy for the stacks and queues used as search frontiers.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum Storage {
    /// Fixed capacity equal to [`Limits::max_nodes`].
    Array,
    /// Grows one element at a time.
    #[default]
    Linked,
}

/// When the iterative depth-first search marks a node as visited.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum DfsMarking {
    /// Mark when popped. A node may sit on the stack several times and its
    /// parent is whichever push happened last before it was popped.
    #[default]
    OnPop,
    /// Mark when pushed. Each node enters the stack at most once and keeps
    /// the parent of its first discovery.
    OnPush,
}

/// Everything a [`Solver`](crate::Solver) needs besides the maze.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct SolverConfig {
    pub limits: Limits,
    pub storage: Storage,
    pub dfs_marking: DfsMarking,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grid_limits_cover_every_cell() {
        let l = Limits::for_grid(301, 301);
        assert_eq!(l.max_nodes, 301 * 301);
        assert_eq!(l.max_edges, 301 * 301 * 4);
        assert_eq!((l.max_rows, l.max_cols), (301, 301));
    }

    #[test]
    fn grid_limits_saturate() {
        let l = Limits::for_grid(usize::MAX, 2);
        assert_eq!(l.max_nodes, usize::MAX);
        assert_eq!(l.max_edges, usize::MAX);
    }
}

use crate::config::DfsMarking;
use crate::error::CapacityError;
use crate::frontier::Stack;
use crate::graph::NodeId;
use crate::path::ParentTree;
use crate::solver::{Search, Solver};

impl Solver {
    /// Depth-first search driven by an explicit stack of node ids.
    ///
    /// Neighbours are pushed in adjacency order, so the last one listed is
    /// expanded first. The path found is not necessarily the shortest.
    pub(crate) fn dfs<S: Stack<NodeId>>(&self, frontier: S) -> Result<Search, CapacityError> {
        match self.config.dfs_marking {
            DfsMarking::OnPop => self.dfs_mark_on_pop(frontier),
            DfsMarking::OnPush => self.dfs_mark_on_push(frontier),
        }
    }

    // A node may be pushed several times before it is popped; every push
    // overwrites its parent, and stale copies are skipped when popped.
    fn dfs_mark_on_pop<S: Stack<NodeId>>(&self, mut frontier: S) -> Result<Search, CapacityError> {
        let mg = &self.maze;
        let n = mg.graph.node_count();
        let mut expanded = vec![false; n];
        let mut tree = ParentTree::new(n, mg.start);
        let mut visited = 0;

        frontier.push(mg.start)?;

        while let Some(cur) = frontier.pop() {
            if expanded[cur.index()] {
                continue;
            }
            expanded[cur.index()] = true;
            visited += 1;
            if cur == mg.end {
                return Ok(Search::found(tree, visited));
            }
            for e in mg.graph.adjacency(cur) {
                if !expanded[e.to.index()] {
                    tree.set(e.to, cur);
                    frontier.push(e.to)?;
                }
            }
        }

        Ok(Search::exhausted(tree, visited))
    }

    fn dfs_mark_on_push<S: Stack<NodeId>>(&self, mut frontier: S) -> Result<Search, CapacityError> {
        let mg = &self.maze;
        let n = mg.graph.node_count();
        let mut marked = vec![false; n];
        let mut tree = ParentTree::new(n, mg.start);
        let mut visited = 0;

        marked[mg.start.index()] = true;
        frontier.push(mg.start)?;

        while let Some(cur) = frontier.pop() {
            visited += 1;
            if cur == mg.end {
                return Ok(Search::found(tree, visited));
            }
            for e in mg.graph.adjacency(cur) {
                if !marked[e.to.index()] {
                    marked[e.to.index()] = true;
                    tree.set(e.to, cur);
                    frontier.push(e.to)?;
                }
            }
        }

        Ok(Search::exhausted(tree, visited))
    }
}

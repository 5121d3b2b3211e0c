use crate::error::CapacityError;
use crate::frontier::Queue;
use crate::graph::NodeId;
use crate::path::ParentTree;
use crate::solver::{Search, Solver};

impl Solver {
    /// Breadth-first search from start to end.
    ///
    /// Nodes are marked when enqueued, so each enters the frontier at most
    /// once and is first reached along a shortest edge-count route.
    pub(crate) fn bfs<Q: Queue<NodeId>>(&self, mut frontier: Q) -> Result<Search, CapacityError> {
        let mg = &self.maze;
        let n = mg.graph.node_count();
        let mut marked = vec![false; n];
        let mut tree = ParentTree::new(n, mg.start);
        let mut visited = 0;

        marked[mg.start.index()] = true;
        frontier.enqueue(mg.start)?;

        while let Some(cur) = frontier.dequeue() {
            visited += 1;
            if cur == mg.end {
                return Ok(Search::found(tree, visited));
            }
            for e in mg.graph.adjacency(cur) {
                let next = e.to;
                if marked[next.index()] {
                    continue;
                }
                marked[next.index()] = true;
                tree.set(next, cur);
                frontier.enqueue(next)?;
            }
        }

        Ok(Search::exhausted(tree, visited))
    }
}

//! Depth-first descent with the semantics of a recursive search, run on an
//! explicit stack of frames so that depth is bounded by the frame stack and
//! not the call stack.

use crate::error::CapacityError;
use crate::frontier::Stack;
use crate::graph::{Adjacency, NodeId};
use crate::path::ParentTree;
use crate::solver::{Search, Solver};

/// One suspended level of the descent: the node being expanded and the
/// position in its adjacency list to resume from.
#[derive(Copy, Clone, Debug)]
pub(crate) struct Frame<'a> {
    node: NodeId,
    rest: Adjacency<'a>,
}

impl Solver {
    /// Recursive-style depth-first search.
    ///
    /// A node is marked and counted on entry. Each frame descends into its
    /// next unmarked neighbour (recording the parent first) and is popped
    /// once its neighbours are exhausted. Reaching the end node stops the
    /// whole descent at once.
    pub(crate) fn dfs_descent<'a, S>(&'a self, mut frames: S) -> Result<Search, CapacityError>
    where
        S: Stack<Frame<'a>>,
    {
        let mg = &self.maze;
        let n = mg.graph.node_count();
        let mut marked = vec![false; n];
        let mut tree = ParentTree::new(n, mg.start);

        marked[mg.start.index()] = true;
        let mut visited = 1;
        if mg.start == mg.end {
            return Ok(Search::found(tree, visited));
        }
        frames.push(Frame {
            node: mg.start,
            rest: mg.graph.adjacency(mg.start),
        })?;

        while let Some(frame) = frames.peek_mut() {
            let cur = frame.node;
            let Some(e) = frame.rest.find(|e| !marked[e.to.index()]) else {
                frames.pop();
                continue;
            };
            let next = e.to;
            tree.set(next, cur);
            marked[next.index()] = true;
            visited += 1;
            if next == mg.end {
                return Ok(Search::found(tree, visited));
            }
            frames.push(Frame {
                node: next,
                rest: mg.graph.adjacency(next),
            })?;
        }

        Ok(Search::exhausted(tree, visited))
    }
}

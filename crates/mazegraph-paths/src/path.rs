use std::num::NonZeroUsize;

use mazegraph_core::Point;

use crate::error::CapacityError;
use crate::frontier::{ArrayStack, Stack};
use crate::graph::{Graph, NodeId};

/// How a node was reached during one search.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum Parent {
    /// Not discovered.
    #[default]
    Unseen,
    /// The search started here.
    Root,
    /// Discovered from this node.
    From(NodeId),
}

/// Parent pointers for every node, rooted at the start node. Built fresh by
/// each search and owned by it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParentTree {
    parents: Vec<Parent>,
}

impl ParentTree {
    /// A tree with `n` undiscovered nodes and `root` as its root.
    pub fn new(n: usize, root: NodeId) -> Self {
        let mut parents = vec![Parent::Unseen; n];
        parents[root.index()] = Parent::Root;
        Self { parents }
    }

    #[inline]
    pub fn get(&self, id: NodeId) -> Parent {
        self.parents[id.index()]
    }

    #[inline]
    pub fn set(&mut self, id: NodeId, parent: NodeId) {
        self.parents[id.index()] = Parent::From(parent);
    }

    /// Walk from `end` back to the root, then emit the chain in forward
    /// order as cell coordinates linearized with `stride`.
    ///
    /// The chain is reversed through an [`ArrayStack`] sized to the node
    /// count, which bounds any acyclic chain.
    pub fn reconstruct(&self, graph: &Graph, end: NodeId, stride: usize) -> Result<Path, CapacityError> {
        let mut stack = ArrayStack::with_capacity(self.parents.len());
        let mut cur = Some(end);
        while let Some(id) = cur {
            stack.push(id)?;
            cur = match self.get(id) {
                Parent::From(p) => Some(p),
                Parent::Root => None,
                Parent::Unseen => {
                    debug_assert!(false, "parent chain reached undiscovered node {id:?}");
                    None
                }
            };
        }

        let mut cells = Vec::with_capacity(stack.len());
        while let Some(id) = stack.pop() {
            let p = graph.coords_of(id);
            cells.push(p.row() as usize * stride + p.col() as usize);
        }
        Ok(Path { cells, stride })
    }
}

/// A route through the maze, start first.
///
/// Cells are stored linearized as `row * stride + col`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Path {
    cells: Vec<usize>,
    stride: usize,
}

impl Path {
    /// The empty path reported when no route exists.
    pub fn empty(stride: usize) -> Self {
        Self {
            cells: Vec::new(),
            stride,
        }
    }

    /// Linearized cells, start first.
    #[inline]
    pub fn cells(&self) -> &[usize] {
        &self.cells
    }

    /// Width used for linearization.
    #[inline]
    pub fn stride(&self) -> usize {
        self.stride
    }

    /// Number of cells, endpoints included.
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Number of moves, i.e. edges along the path.
    #[inline]
    pub fn steps(&self) -> usize {
        self.cells.len().saturating_sub(1)
    }

    /// Decode the cells back into points.
    ///
    /// A zero stride has no decoding and yields no points.
    pub fn points(&self) -> Vec<Point> {
        let Some(stride) = NonZeroUsize::new(self.stride) else {
            return Vec::new();
        };
        self.cells
            .iter()
            .map(|&c| Point::from_rc((c / stride) as i32, (c % stride) as i32))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn corridor(n: i32) -> (Graph, Vec<NodeId>) {
        let mut g = Graph::new(32, 128);
        let ids = (0..n)
            .map(|c| g.add_node(Point::from_rc(2, c + 1)).unwrap())
            .collect();
        (g, ids)
    }

    #[test]
    fn reconstruct_forward_order() {
        let (g, ids) = corridor(4);
        let mut tree = ParentTree::new(4, ids[0]);
        tree.set(ids[1], ids[0]);
        tree.set(ids[2], ids[1]);
        tree.set(ids[3], ids[2]);
        let path = tree.reconstruct(&g, ids[3], 50).unwrap();
        assert_eq!(path.cells(), &[101, 102, 103, 104]);
        assert_eq!(path.len(), 4);
        assert_eq!(path.steps(), 3);
        assert_eq!(
            path.points(),
            vec![
                Point::from_rc(2, 1),
                Point::from_rc(2, 2),
                Point::from_rc(2, 3),
                Point::from_rc(2, 4),
            ]
        );
    }

    #[test]
    fn start_equals_end() {
        let (g, ids) = corridor(2);
        let tree = ParentTree::new(2, ids[1]);
        let path = tree.reconstruct(&g, ids[1], 10).unwrap();
        assert_eq!(path.points(), vec![Point::from_rc(2, 2)]);
        assert_eq!(path.steps(), 0);
    }

    #[test]
    fn new_tree_marks_only_root() {
        let (_, ids) = corridor(3);
        let tree = ParentTree::new(3, ids[1]);
        assert_eq!(tree.get(ids[0]), Parent::Unseen);
        assert_eq!(tree.get(ids[1]), Parent::Root);
        assert_eq!(tree.get(ids[2]), Parent::Unseen);
    }

    #[test]
    fn empty_path() {
        let p = Path::empty(50);
        assert!(p.is_empty());
        assert_eq!(p.steps(), 0);
        assert!(p.points().is_empty());
        assert_eq!(p.stride(), 50);
    }

    #[test]
    fn zero_stride_decodes_nothing() {
        let p = Path {
            cells: vec![51, 52],
            stride: 0,
        };
        assert_eq!(p.len(), 2);
        assert!(p.points().is_empty());
        assert!(Path::default().points().is_empty());
    }
}

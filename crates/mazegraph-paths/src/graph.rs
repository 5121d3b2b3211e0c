use mazegraph_core::Point;

use crate::error::{CapacityError, Resource};

/// Dense identifier of a graph node, assigned `0..n` in insertion order.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(u32);

impl NodeId {
    #[inline]
    pub(crate) const fn from_index(i: usize) -> Self {
        Self(i as u32)
    }

    /// Position of the node in per-node arrays.
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

/// A directed arc. Edges of one source node form a singly linked chain
/// through `next`, newest first.
#[derive(Copy, Clone, Debug)]
pub struct Edge {
    pub to: NodeId,
    pub weight: u32,
    next: Option<u32>,
}

/// Adjacency-list graph over dense node ids, each node tagged with the grid
/// cell it came from.
///
/// Nodes and edges live in two arenas; each node owns the head of its own
/// edge chain, so no edge is ever shared between lists.
#[derive(Debug, Clone)]
pub struct Graph {
    coords: Vec<Point>,
    heads: Vec<Option<u32>>,
    edges: Vec<Edge>,
    max_nodes: usize,
    max_edges: usize,
}

impl Graph {
    /// Create an empty graph bounded by `max_nodes` and `max_edges`.
    pub fn new(max_nodes: usize, max_edges: usize) -> Self {
        Self {
            coords: Vec::new(),
            heads: Vec::new(),
            edges: Vec::new(),
            max_nodes,
            max_edges,
        }
    }

    /// Append a node for cell `p` and return its id.
    pub fn add_node(&mut self, p: Point) -> Result<NodeId, CapacityError> {
        let id = self.coords.len();
        if id >= self.max_nodes || id > u32::MAX as usize {
            return Err(CapacityError::new(Resource::Nodes, self.max_nodes));
        }
        self.coords.push(p);
        self.heads.push(None);
        Ok(NodeId(id as u32))
    }

    /// Prepend an edge `from -> to` to `from`'s adjacency list.
    ///
    /// Duplicate and self edges are not filtered.
    ///
    /// # Panics
    ///
    /// Panics if `from` or `to` was not returned by [`add_node`](Self::add_node)
    /// on this graph.
    pub fn add_edge(&mut self, from: NodeId, to: NodeId, weight: u32) -> Result<(), CapacityError> {
        assert!(to.index() < self.coords.len(), "edge to unknown node {to:?}");
        let eid = self.edges.len();
        if eid >= self.max_edges || eid > u32::MAX as usize {
            return Err(CapacityError::new(Resource::Edges, self.max_edges));
        }
        let head = &mut self.heads[from.index()];
        self.edges.push(Edge {
            to,
            weight,
            next: *head,
        });
        *head = Some(eid as u32);
        Ok(())
    }

    /// Number of nodes.
    #[inline]
    pub fn node_count(&self) -> usize {
        self.coords.len()
    }

    /// Number of edges.
    #[inline]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Grid cell a node was created for.
    #[inline]
    pub fn coords_of(&self, id: NodeId) -> Point {
        self.coords[id.index()]
    }

    /// Outgoing edges of `id`, most recently added first.
    #[inline]
    pub fn adjacency(&self, id: NodeId) -> Adjacency<'_> {
        Adjacency {
            edges: &self.edges,
            cur: self.heads[id.index()],
        }
    }

    /// Iterate over all node ids.
    pub fn nodes(&self) -> impl Iterator<Item = NodeId> + '_ {
        (0..self.coords.len() as u32).map(NodeId)
    }
}

/// Cursor over one node's edge chain.
///
/// The cursor is `Copy`, so a search can park it and resume later.
#[derive(Copy, Clone, Debug)]
pub struct Adjacency<'a> {
    edges: &'a [Edge],
    cur: Option<u32>,
}

impl<'a> Iterator for Adjacency<'a> {
    type Item = &'a Edge;

    #[inline]
    fn next(&mut self) -> Option<&'a Edge> {
        let e = &self.edges[self.cur? as usize];
        self.cur = e.next;
        Some(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(n: i32) -> (Graph, Vec<NodeId>) {
        let mut g = Graph::new(16, 64);
        let ids = (0..n)
            .map(|x| g.add_node(Point::new(x, 0)).unwrap())
            .collect();
        (g, ids)
    }

    #[test]
    fn ids_are_sequential() {
        let (g, ids) = line(4);
        let idx: Vec<usize> = ids.iter().map(|id| id.index()).collect();
        assert_eq!(idx, vec![0, 1, 2, 3]);
        assert_eq!(g.node_count(), 4);
        assert_eq!(g.coords_of(ids[2]), Point::new(2, 0));
        assert_eq!(g.nodes().collect::<Vec<_>>(), ids);
    }

    #[test]
    fn adjacency_is_newest_first() {
        let (mut g, ids) = line(4);
        g.add_edge(ids[0], ids[1], 1).unwrap();
        g.add_edge(ids[0], ids[2], 1).unwrap();
        g.add_edge(ids[0], ids[3], 1).unwrap();
        let order: Vec<NodeId> = g.adjacency(ids[0]).map(|e| e.to).collect();
        assert_eq!(order, vec![ids[3], ids[2], ids[1]]);
        assert_eq!(g.adjacency(ids[1]).count(), 0);
        assert_eq!(g.edge_count(), 3);
    }

    #[test]
    fn edge_lists_are_independent() {
        let (mut g, ids) = line(3);
        g.add_edge(ids[0], ids[1], 1).unwrap();
        g.add_edge(ids[1], ids[0], 1).unwrap();
        g.add_edge(ids[1], ids[2], 1).unwrap();
        assert_eq!(g.adjacency(ids[0]).map(|e| e.to).collect::<Vec<_>>(), vec![ids[1]]);
        assert_eq!(
            g.adjacency(ids[1]).map(|e| e.to).collect::<Vec<_>>(),
            vec![ids[2], ids[0]]
        );
        assert!(g.adjacency(ids[1]).all(|e| e.weight == 1));
    }

    #[test]
    fn node_capacity_is_reported() {
        let mut g = Graph::new(2, 8);
        g.add_node(Point::new(0, 0)).unwrap();
        g.add_node(Point::new(1, 0)).unwrap();
        let err = g.add_node(Point::new(2, 0)).unwrap_err();
        assert_eq!(err, CapacityError::new(Resource::Nodes, 2));
        assert_eq!(g.node_count(), 2);
    }

    #[test]
    fn edge_capacity_is_reported() {
        let mut g = Graph::new(4, 1);
        let a = g.add_node(Point::new(0, 0)).unwrap();
        let b = g.add_node(Point::new(1, 0)).unwrap();
        g.add_edge(a, b, 1).unwrap();
        let err = g.add_edge(b, a, 1).unwrap_err();
        assert_eq!(err.resource, Resource::Edges);
        assert_eq!(g.adjacency(b).count(), 0);
    }

    #[test]
    fn adjacency_cursor_resumes() {
        let (mut g, ids) = line(3);
        g.add_edge(ids[0], ids[1], 1).unwrap();
        g.add_edge(ids[0], ids[2], 1).unwrap();
        let mut cur = g.adjacency(ids[0]);
        assert_eq!(cur.next().map(|e| e.to), Some(ids[2]));
        let parked = cur;
        assert_eq!(cur.next().map(|e| e.to), Some(ids[1]));
        let mut resumed = parked;
        assert_eq!(resumed.next().map(|e| e.to), Some(ids[1]));
        assert!(resumed.next().is_none());
    }
}

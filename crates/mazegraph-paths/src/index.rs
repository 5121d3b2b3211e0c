//! Fixed-bucket chained hash map from grid cells to node ids.

use mazegraph_core::Point;

use crate::graph::NodeId;

/// Number of buckets. Prime, and never changes after construction.
pub const BUCKETS: usize = 1009;

#[derive(Debug, Clone)]
struct Entry {
    key: Point,
    node: NodeId,
    next: Option<u32>,
}

/// Maps `(row, col)` to the node created for that cell.
///
/// Keys hash to `(row * 1000 + col) mod BUCKETS`. Collisions chain through
/// an entry arena, newest entry first. There is no rehashing and no removal.
#[derive(Debug, Clone)]
pub struct CoordinateIndex {
    buckets: Vec<Option<u32>>,
    entries: Vec<Entry>,
}

impl Default for CoordinateIndex {
    fn default() -> Self {
        Self::new()
    }
}

impl CoordinateIndex {
    /// Create an empty index.
    pub fn new() -> Self {
        Self {
            buckets: vec![None; BUCKETS],
            entries: Vec::new(),
        }
    }

    #[inline]
    fn bucket(p: Point) -> usize {
        let key = i64::from(p.row()) * 1000 + i64::from(p.col());
        key.rem_euclid(BUCKETS as i64) as usize
    }

    /// Record that cell `p` became node `node`.
    pub fn insert(&mut self, p: Point, node: NodeId) {
        let b = Self::bucket(p);
        let id = self.entries.len() as u32;
        self.entries.push(Entry {
            key: p,
            node,
            next: self.buckets[b],
        });
        self.buckets[b] = Some(id);
    }

    /// Node recorded for cell `p`, or `None` if the cell was never indexed.
    pub fn get(&self, p: Point) -> Option<NodeId> {
        let mut cur = self.buckets[Self::bucket(p)];
        while let Some(i) = cur {
            let e = &self.entries[i as usize];
            if e.key == p {
                return Some(e.node);
            }
            cur = e.next;
        }
        None
    }

    /// Whether cell `p` is indexed.
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        self.get(p).is_some()
    }

    /// Number of recorded cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether nothing has been recorded.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Length of the longest bucket chain.
    pub fn longest_chain(&self) -> usize {
        self.buckets
            .iter()
            .map(|&head| {
                let mut n = 0;
                let mut cur = head;
                while let Some(i) = cur {
                    n += 1;
                    cur = self.entries[i as usize].next;
                }
                n
            })
            .max()
            .unwrap_or(0)
    }
}

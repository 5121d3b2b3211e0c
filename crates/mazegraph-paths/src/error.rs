//! Error types for graph construction and solving.

use std::fmt;

/// A bounded resource.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Resource {
    /// Grid rows.
    Rows,
    /// Grid columns.
    Cols,
    /// Graph nodes.
    Nodes,
    /// Graph edges.
    Edges,
    /// Entries in a fixed-capacity stack or queue.
    Frontier,
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Rows => "rows",
            Self::Cols => "columns",
            Self::Nodes => "nodes",
            Self::Edges => "edges",
            Self::Frontier => "frontier entries",
        })
    }
}

/// An insertion would have exceeded a configured bound.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct CapacityError {
    pub resource: Resource,
    pub limit: usize,
}

impl CapacityError {
    #[inline]
    pub(crate) const fn new(resource: Resource, limit: usize) -> Self {
        Self { resource, limit }
    }
}

impl fmt::Display for CapacityError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "capacity exceeded: more than {} {}", self.limit, self.resource)
    }
}

impl std::error::Error for CapacityError {}

/// Errors that abort a solve. Failing to reach the end cell is not an error;
/// see [`Solution::found`](crate::Solution::found).
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SolveError {
    /// The maze has no start cell.
    MissingStart,
    /// The maze has no end cell.
    MissingEnd,
    /// A configured bound was exceeded.
    Capacity(CapacityError),
}

impl fmt::Display for SolveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingStart => write!(f, "maze has no start (S) cell"),
            Self::MissingEnd => write!(f, "maze has no end (E) cell"),
            Self::Capacity(e) => e.fmt(f),
        }
    }
}

impl std::error::Error for SolveError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Capacity(e) => Some(e),
            _ => None,
        }
    }
}

impl From<CapacityError> for SolveError {
    fn from(e: CapacityError) -> Self {
        Self::Capacity(e)
    }
}

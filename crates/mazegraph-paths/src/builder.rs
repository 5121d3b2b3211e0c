//! Grid-to-graph construction.

use mazegraph_core::Maze;

use crate::config::Limits;
use crate::error::{CapacityError, Resource, SolveError};
use crate::graph::{Graph, NodeId};
use crate::index::CoordinateIndex;

/// A maze turned into a graph, together with the index used to build it.
/// Both are created and dropped together.
#[derive(Debug, Clone)]
pub struct MazeGraph {
    pub graph: Graph,
    pub index: CoordinateIndex,
    pub start: NodeId,
    pub end: NodeId,
}

impl MazeGraph {
    /// Build the graph for `maze` in two row-major passes.
    ///
    /// The first pass creates one node per passable cell and indexes it.
    /// The second probes each indexed cell's neighbours (up, down, left,
    /// right) and adds a weight-1 edge to every indexed one, so each
    /// adjacency is discovered once from either side.
    pub fn build(maze: &Maze, limits: &Limits) -> Result<Self, SolveError> {
        let start_cell = maze.start().ok_or(SolveError::MissingStart)?;
        let end_cell = maze.end().ok_or(SolveError::MissingEnd)?;
        if maze.height() > limits.max_rows {
            return Err(CapacityError::new(Resource::Rows, limits.max_rows).into());
        }
        if maze.width() > limits.max_cols {
            return Err(CapacityError::new(Resource::Cols, limits.max_cols).into());
        }

        let mut graph = Graph::new(limits.max_nodes, limits.max_edges);
        let mut index = CoordinateIndex::new();
        let mut start = None;
        let mut end = None;

        for p in maze.bounds() {
            if !maze.tile(p).is_passable() {
                continue;
            }
            let id = graph.add_node(p)?;
            index.insert(p, id);
            if p == start_cell {
                start = Some(id);
            }
            if p == end_cell {
                end = Some(id);
            }
        }

        for p in maze.bounds() {
            let Some(id) = index.get(p) else {
                continue;
            };
            for n in p.neighbors_4() {
                if let Some(nid) = index.get(n) {
                    graph.add_edge(id, nid, 1)?;
                }
            }
        }

        log::debug!(
            "built graph for {} maze: {} nodes, {} edges, longest index chain {}",
            maze.bounds(),
            graph.node_count(),
            graph.edge_count(),
            index.longest_chain()
        );

        Ok(Self {
            graph,
            index,
            start: start.ok_or(SolveError::MissingStart)?,
            end: end.ok_or(SolveError::MissingEnd)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mazegraph_core::{Point, Tile};

    const SAMPLE: &str = "\
##########
#S   #   #
# ## # # #
#    #   #
#### ### #
#      E #
##########";

    fn build(s: &str) -> Result<MazeGraph, SolveError> {
        MazeGraph::build(&Maze::parse(s).unwrap(), &Limits::default())
    }

    #[test]
    fn one_node_per_passable_cell() {
        let mg = build(SAMPLE).unwrap();
        assert_eq!(mg.graph.node_count(), 28);
        assert_eq!(mg.index.len(), 28);
        assert_eq!(mg.graph.coords_of(mg.start), Point::from_rc(1, 1));
        assert_eq!(mg.graph.coords_of(mg.end), Point::from_rc(5, 7));
    }

    #[test]
    fn ids_follow_row_major_order() {
        let mg = build(SAMPLE).unwrap();
        let coords: Vec<Point> = mg.graph.nodes().map(|id| mg.graph.coords_of(id)).collect();
        let mut sorted = coords.clone();
        sorted.sort_by_key(|p| (p.row(), p.col()));
        assert_eq!(coords, sorted);
        assert_eq!(mg.start.index(), 0);
    }

    #[test]
    fn walls_never_indexed() {
        let maze = Maze::parse(SAMPLE).unwrap();
        let mg = MazeGraph::build(&maze, &Limits::default()).unwrap();
        for p in maze.bounds() {
            assert_eq!(mg.index.contains(p), maze.tile(p) != Tile::Wall, "cell {p}");
        }
    }

    #[test]
    fn edges_are_symmetric_and_adjacent() {
        let mg = build(SAMPLE).unwrap();
        let g = &mg.graph;
        for id in g.nodes() {
            for e in g.adjacency(id) {
                assert_eq!(e.weight, 1);
                assert!(g.coords_of(id).is_adjacent_4(g.coords_of(e.to)));
                assert!(g.adjacency(e.to).any(|back| back.to == id));
            }
        }
    }

    #[test]
    fn adjacency_reverses_probe_order() {
        // Centre cell of a plus shape sees right, left, down, up.
        let mg = build("#S#\n   \n#E#").unwrap();
        let centre = mg.index.get(Point::from_rc(1, 1)).unwrap();
        let seen: Vec<Point> = mg
            .graph
            .adjacency(centre)
            .map(|e| mg.graph.coords_of(e.to))
            .collect();
        assert_eq!(
            seen,
            vec![
                Point::from_rc(1, 2),
                Point::from_rc(1, 0),
                Point::from_rc(2, 1),
                Point::from_rc(0, 1),
            ]
        );
    }

    #[test]
    fn missing_markers_are_configuration_errors() {
        assert_eq!(build("###\n#E#\n###").unwrap_err(), SolveError::MissingStart);
        assert_eq!(build("###\n#S#\n###").unwrap_err(), SolveError::MissingEnd);
    }

    #[test]
    fn node_limit_is_reported() {
        let maze = Maze::parse(SAMPLE).unwrap();
        let limits = Limits {
            max_nodes: 10,
            ..Limits::default()
        };
        let err = MazeGraph::build(&maze, &limits).unwrap_err();
        assert_eq!(err, SolveError::Capacity(CapacityError::new(Resource::Nodes, 10)));
    }

    #[test]
    fn edge_limit_is_reported() {
        let maze = Maze::parse(SAMPLE).unwrap();
        let limits = Limits {
            max_edges: 5,
            ..Limits::default()
        };
        let err = MazeGraph::build(&maze, &limits).unwrap_err();
        assert_eq!(err, SolveError::Capacity(CapacityError::new(Resource::Edges, 5)));
    }

    #[test]
    fn grid_limits_are_reported() {
        let maze = Maze::parse(SAMPLE).unwrap();
        let narrow = Limits {
            max_cols: 9,
            ..Limits::default()
        };
        let short = Limits {
            max_rows: 6,
            ..Limits::default()
        };
        assert!(matches!(
            MazeGraph::build(&maze, &narrow),
            Err(SolveError::Capacity(CapacityError { resource: Resource::Cols, .. }))
        ));
        assert!(matches!(
            MazeGraph::build(&maze, &short),
            Err(SolveError::Capacity(CapacityError { resource: Resource::Rows, .. }))
        ));
    }
}

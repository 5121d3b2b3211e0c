//! Timing solves and writing their results.

use std::time::{Duration, Instant};

use mazegraph_core::Point;
use mazegraph_paths::{SolveError, Solution, Solver, Strategy};
use serde::Serialize;

/// One solve together with its wall-clock time.
#[derive(Debug, Clone)]
pub struct Run {
    pub solution: Solution,
    pub elapsed: Duration,
}

impl Run {
    /// Time a single solve.
    pub fn timed(solver: &Solver, strategy: Strategy) -> Result<Self, SolveError> {
        let t = Instant::now();
        let solution = solver.solve(strategy)?;
        Ok(Self {
            solution,
            elapsed: t.elapsed(),
        })
    }

    /// Elapsed time in milliseconds.
    pub fn millis(&self) -> f64 {
        self.elapsed.as_secs_f64() * 1000.0
    }

    /// Console summary, one field per line.
    pub fn summary(&self) -> String {
        let sol = &self.solution;
        let mut s = if sol.found {
            format!("Path found!\nPath length: {} steps\n", sol.path.steps())
        } else {
            String::from("No path found!\n")
        };
        s.push_str(&format!("Nodes visited: {}\n", sol.visited));
        s.push_str(&format!("Time taken: {:.3} ms\n", self.millis()));
        s
    }

    /// Plain-text report in the output file format.
    pub fn text_report(&self) -> String {
        let sol = &self.solution;
        format!(
            "Algorithm: {}\nPath found: {}\nPath length: {}\nNodes visited: {}\nTime taken: {:.3} ms\n\n",
            sol.strategy,
            if sol.found { "Yes" } else { "No" },
            sol.path.steps(),
            sol.visited,
            self.millis()
        )
    }

    /// JSON report including the decoded path.
    pub fn json_report(&self) -> serde_json::Result<String> {
        let sol = &self.solution;
        serde_json::to_string_pretty(&JsonReport {
            algorithm: sol.strategy.name(),
            strategy: sol.strategy,
            found: sol.found,
            path_length: sol.path.steps(),
            nodes_visited: sol.visited,
            time_ms: self.millis(),
            path: sol.path.points(),
        })
    }
}

#[derive(Serialize)]
struct JsonReport {
    algorithm: &'static str,
    strategy: Strategy,
    found: bool,
    path_length: usize,
    nodes_visited: usize,
    time_ms: f64,
    path: Vec<Point>,
}

/// Ranking of a comparison: times and visit counts, each ascending.
pub fn ranking(runs: &[Run]) -> String {
    let mut times: Vec<(f64, Strategy)> = runs
        .iter()
        .map(|r| (r.millis(), r.solution.strategy))
        .collect();
    times.sort_by(|a, b| a.0.total_cmp(&b.0));
    let mut visits: Vec<(usize, Strategy)> = runs
        .iter()
        .map(|r| (r.solution.visited, r.solution.strategy))
        .collect();
    visits.sort_by_key(|v| v.0);

    let mut s = String::from("Sorted times:\n");
    for (ms, strategy) in times {
        s.push_str(&format!("  {ms:.3} ms  {strategy}\n"));
    }
    s.push_str("\nSorted nodes visited:\n");
    for (n, strategy) in visits {
        s.push_str(&format!("  {n} nodes  {strategy}\n"));
    }
    s
}

//! Solve a text maze with BFS and both DFS variants.
//!
//! Run: cargo run -- [MAZE] --algorithm all

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use clap::{Parser, ValueEnum};
use mazegraph_cli::{Run, SAMPLE_MAZE, ranking, render};
use mazegraph_core::Maze;
use mazegraph_paths::{DfsMarking, Limits, Solver, SolverConfig, Storage, Strategy};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum Algorithm {
    Bfs,
    DfsStack,
    DfsRecursive,
    /// Run all three and compare.
    All,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum StorageArg {
    Array,
    Linked,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum MarkingArg {
    Pop,
    Push,
}

/// Maze solver comparing breadth-first and depth-first search.
#[derive(Parser, Debug)]
#[command(name = "mazegraph")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Maze file ('#' wall, ' ' open, 'S' start, 'E' end). A sample maze is
    /// written here if the file does not exist.
    #[arg(default_value = "input_maze.txt")]
    maze: PathBuf,

    /// Search strategy
    #[arg(short, long, value_enum, default_value_t = Algorithm::All)]
    algorithm: Algorithm,

    /// Frontier storage for stacks and queues
    #[arg(long, value_enum, default_value_t = StorageArg::Linked)]
    storage: StorageArg,

    /// When the stack-based DFS marks nodes visited
    #[arg(long, value_enum, default_value_t = MarkingArg::Pop)]
    dfs_marking: MarkingArg,

    /// Report file written after a successful single-strategy run
    #[arg(short, long, default_value = "output.txt")]
    output: PathBuf,

    /// Write the report as JSON
    #[arg(long)]
    json: bool,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,

    #[arg(long, default_value_t = Limits::default().max_rows)]
    max_rows: usize,

    #[arg(long, default_value_t = Limits::default().max_cols)]
    max_cols: usize,

    #[arg(long, default_value_t = Limits::default().max_nodes)]
    max_nodes: usize,

    /// Defaults to four per node
    #[arg(long)]
    max_edges: Option<usize>,
}

impl Args {
    fn config(&self) -> SolverConfig {
        SolverConfig {
            limits: Limits {
                max_rows: self.max_rows,
                max_cols: self.max_cols,
                max_nodes: self.max_nodes,
                max_edges: self.max_edges.unwrap_or(self.max_nodes.saturating_mul(4)),
            },
            storage: match self.storage {
                StorageArg::Array => Storage::Array,
                StorageArg::Linked => Storage::Linked,
            },
            dfs_marking: match self.dfs_marking {
                MarkingArg::Pop => DfsMarking::OnPop,
                MarkingArg::Push => DfsMarking::OnPush,
            },
        }
    }
}

fn load_or_create(path: &Path) -> Result<Maze, Box<dyn std::error::Error>> {
    if !path.exists() {
        tracing::warn!("{} not found, writing sample maze", path.display());
        fs::write(path, SAMPLE_MAZE)?;
    }
    Ok(Maze::load(path)?)
}

fn run_one(
    args: &Args,
    maze: &Maze,
    solver: &Solver,
    strategy: Strategy,
) -> Result<(), Box<dyn std::error::Error>> {
    println!("\nRunning {strategy}...");
    let run = Run::timed(solver, strategy)?;
    print!("{}", run.summary());
    if !run.solution.found {
        return Ok(());
    }

    println!("\nSolved maze (path marked with ~):");
    render::draw(&mut io::stdout(), maze, &run.solution.path.points(), !args.no_color)?;

    let report = if args.json {
        run.json_report()?
    } else {
        run.text_report()
    };
    fs::write(&args.output, report)?;
    tracing::info!("results saved to {}", args.output.display());
    println!("\nResults saved to '{}'", args.output.display());
    Ok(())
}

fn compare(solver: &Solver) -> Result<(), Box<dyn std::error::Error>> {
    println!("\nComparing all algorithms");
    let mut runs = Vec::with_capacity(Strategy::ALL.len());
    for strategy in Strategy::ALL {
        let run = Run::timed(solver, strategy)?;
        println!("\n{strategy}:");
        for line in run.summary().lines() {
            println!("  {line}");
        }
        runs.push(run);
    }
    println!("\n{}", ranking(&runs));
    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let args = Args::parse();
    let maze = load_or_create(&args.maze)?;
    tracing::debug!(
        "loaded {} ({}x{}, {} open cells)",
        args.maze.display(),
        maze.height(),
        maze.width(),
        maze.passable_count()
    );

    println!("Original maze:");
    render::draw(&mut io::stdout(), &maze, &[], !args.no_color)?;

    let solver = Solver::new(&maze, args.config())?;

    match args.algorithm {
        Algorithm::Bfs => run_one(&args, &maze, &solver, Strategy::Bfs),
        Algorithm::DfsStack => run_one(&args, &maze, &solver, Strategy::DfsIterative),
        Algorithm::DfsRecursive => run_one(&args, &maze, &solver, Strategy::DfsRecursive),
        Algorithm::All => compare(&solver),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_library_config() {
        let args = Args::parse_from(["mazegraph"]);
        assert_eq!(args.config(), SolverConfig::default());
        assert_eq!(args.algorithm, Algorithm::All);
        assert_eq!(args.maze, PathBuf::from("input_maze.txt"));
    }

    #[test]
    fn flags_map_onto_config() {
        let args = Args::parse_from([
            "mazegraph",
            "m.txt",
            "-a",
            "dfs-recursive",
            "--storage",
            "array",
            "--dfs-marking",
            "push",
            "--max-nodes",
            "100",
        ]);
        let cfg = args.config();
        assert_eq!(args.algorithm, Algorithm::DfsRecursive);
        assert_eq!(cfg.storage, Storage::Array);
        assert_eq!(cfg.dfs_marking, DfsMarking::OnPush);
        assert_eq!(cfg.limits.max_nodes, 100);
        assert_eq!(cfg.limits.max_edges, 400);
    }

    #[test]
    fn huge_node_limit_saturates_edge_default() {
        let max = usize::MAX.to_string();
        let args = Args::parse_from(["mazegraph", "--max-nodes", max.as_str()]);
        assert_eq!(args.config().limits.max_edges, usize::MAX);
    }

    #[test]
    fn sample_maze_parses() {
        let maze = Maze::parse(SAMPLE_MAZE).unwrap();
        assert_eq!(maze.height(), 7);
        assert!(maze.start().is_some() && maze.end().is_some());
    }
}

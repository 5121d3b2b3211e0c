//! Support code for the `mazegraph` binary: terminal rendering and reports.

pub mod render;
pub mod report;

pub use report::{Run, ranking};

/// Maze written to the input path when no maze file exists yet.
pub const SAMPLE_MAZE: &str = "\
##########
#S   #   #
# ## # # #
#    #   #
#### ### #
#      E #
##########
";

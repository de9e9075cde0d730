//! # grid_search
//!
//! Stepwise pathfinding on a 2D terrain grid where every cell is a wall or carries a traversal
//! cost. Two strategies are available through the [GridSolver] trait:
//! [breadth-first search](https://en.wikipedia.org/wiki/Breadth-first_search), which finds the
//! path with the fewest moves, and [A*](https://en.wikipedia.org/wiki/A*_search_algorithm) with
//! the [Manhattan distance](https://en.wikipedia.org/wiki/Taxicab_geometry) as heuristic, which
//! finds the cheapest path. Movement is restricted to the four cardinal directions.
//!
//! A search can be run to completion with [GridSolver::find_path] or driven one expansion at a
//! time with [GridSolver::step], keeping the open and closed lists in a [SearchState] that the
//! caller may inspect between steps, for instance to animate the search.
//!
//! ```
//! use grid_search::{new_search, GridSolver, SearchKind, TerrainGrid};
//! use grid_util::point::Point;
//!
//! let terrain: TerrainGrid = "111\n101\n111".parse().unwrap();
//! let solver = new_search(SearchKind::AStar);
//! let outcome = solver
//!     .find_path(&terrain, Point::new(0, 0), Point::new(2, 2))
//!     .unwrap();
//! assert_eq!(outcome.path.len(), 5);
//! ```
pub mod node;
pub mod path;
pub mod search_list;
pub mod solver;
pub mod state;
pub mod terrain;

pub use path::{build_path, is_connected, save_path, write_path};
pub use solver::{
    astar::AstarSolver, breadth_first::BreadthFirstSolver, new_search, GridSolver, SearchKind,
    SearchOutcome, StepResult,
};
pub use state::SearchState;
pub use terrain::{CellType, Compass, TerrainError, TerrainGrid};

/// File the demo driver writes resolved paths to.
pub const PATH_OUTPUT_FILE: &str = "output.txt";
/// Heuristic value of the goal cell when [AstarSolver::goal_bias] is enabled.
pub const GOAL_SENTINEL: i32 = i32::MIN;

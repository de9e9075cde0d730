use core::fmt;
use grid_util::point::Point;
use log::info;
use std::str::FromStr;

use crate::state::SearchState;
use crate::terrain::TerrainGrid;

pub mod astar;
pub mod breadth_first;

use astar::AstarSolver;
use breadth_first::BreadthFirstSolver;

/// Outcome of a single [GridSolver::step].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StepResult {
    /// The open list is empty: every reachable cell was expanded without meeting the goal.
    NoPath,
    /// The goal was taken off the open list this step. Holds the path from start to goal.
    PathFound(Vec<Point>),
    /// Progress was made and the open list still has nodes on it.
    StepSuccess,
}

/// A resolved search: the path from start to goal and the number of expansions it took.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchOutcome {
    pub path: Vec<Point>,
    pub steps: u32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SearchKind {
    BreadthFirst,
    AStar,
}

impl SearchKind {
    pub const ALL: [SearchKind; 2] = [SearchKind::BreadthFirst, SearchKind::AStar];
}

impl fmt::Display for SearchKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            SearchKind::BreadthFirst => write!(f, "breadth-first"),
            SearchKind::AStar => write!(f, "astar"),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UnknownSearchKind(pub String);

impl fmt::Display for UnknownSearchKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "unknown search kind '{}'", self.0)
    }
}

impl std::error::Error for UnknownSearchKind {}

impl FromStr for SearchKind {
    type Err = UnknownSearchKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "breadth-first" | "breadthfirst" | "bfs" => Ok(SearchKind::BreadthFirst),
            "astar" | "a*" => Ok(SearchKind::AStar),
            _ => Err(UnknownSearchKind(s.to_owned())),
        }
    }
}

/// Panics if `goal` lies off the grid. Checked on every step.
pub(crate) fn assert_goal_in_bounds(terrain: &TerrainGrid, goal: Point) {
    assert!(
        terrain.point_in_bounds(goal),
        "goal {} lies outside the terrain",
        goal
    );
}

/// Creates a solver of the requested kind with its default settings.
pub fn new_search(kind: SearchKind) -> Box<dyn GridSolver> {
    match kind {
        SearchKind::BreadthFirst => Box::new(BreadthFirstSolver),
        SearchKind::AStar => Box::new(AstarSolver::new()),
    }
}

pub trait GridSolver {
    fn kind(&self) -> SearchKind;

    /// Sets up a fresh search with only `start` on the open list.
    fn begin(&self, start: Point, _goal: Point) -> SearchState {
        SearchState::new(start, 0)
    }

    /// Expands the front of the open list. All progress is kept in `state`, so the caller may
    /// interleave steps with other work, e.g. one step per rendered frame.
    fn step(&self, terrain: &TerrainGrid, state: &mut SearchState, goal: Point) -> StepResult;

    /// Runs steps until the search resolves. Panics if `start` or `goal` lies off the grid.
    fn find_path(&self, terrain: &TerrainGrid, start: Point, goal: Point) -> Option<SearchOutcome> {
        assert!(
            terrain.point_in_bounds(start),
            "start {} lies outside the terrain",
            start
        );
        assert_goal_in_bounds(terrain, goal);
        let mut state = self.begin(start, goal);
        loop {
            match self.step(terrain, &mut state, goal) {
                StepResult::StepSuccess => continue,
                StepResult::PathFound(path) => {
                    info!(
                        "{} search found a path of {} nodes from {} to {}",
                        self.kind(),
                        path.len(),
                        start,
                        goal
                    );
                    return Some(SearchOutcome {
                        path,
                        steps: state.steps(),
                    });
                }
                StepResult::NoPath => {
                    info!(
                        "{} search exhausted {} nodes without reaching {} from {}",
                        self.kind(),
                        state.closed().len(),
                        goal,
                        start
                    );
                    return None;
                }
            }
        }
    }

    /// Total cost of walking the path: the sum of the costs of every cell entered after the start.
    fn path_cost(&self, terrain: &TerrainGrid, path: &[Point]) -> i32 {
        path.iter()
            .skip(1)
            .map(|p| terrain.cell_type_point(*p).cost().unwrap_or(0))
            .sum()
    }
}

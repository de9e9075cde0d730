use grid_util::point::Point;
use log::{debug, trace};

use crate::path::build_path;
use crate::solver::{assert_goal_in_bounds, GridSolver, SearchKind, StepResult};
use crate::state::SearchState;
use crate::terrain::TerrainGrid;

/// Uninformed first-in first-out search. Ignores terrain cost, so the path it finds has the
/// fewest moves rather than the lowest cost.
#[derive(Clone, Copy, Debug, Default)]
pub struct BreadthFirstSolver;

impl GridSolver for BreadthFirstSolver {
    fn kind(&self) -> SearchKind {
        SearchKind::BreadthFirst
    }

    fn step(&self, terrain: &TerrainGrid, state: &mut SearchState, goal: Point) -> StepResult {
        assert_goal_in_bounds(terrain, goal);
        let Some(current) = state.take_front() else {
            return StepResult::NoPath;
        };
        let point = state.nodes[current].point;
        if point == goal {
            debug!("Breadth-first search reached {}", goal);
            return StepResult::PathFound(build_path(&state.nodes, current));
        }
        trace!("Expanding {}", point);
        for (neighbour, _) in terrain.neighbours(point) {
            if !state.open.contains(neighbour) && !state.closed.contains(neighbour) {
                state.discover(neighbour, 0, current);
            }
        }
        // Uniform edge cost keeps the FIFO order valid, no re-sort needed.
        state.close(current);
        if state.open.is_empty() {
            debug!("Breadth-first search ran out of nodes before reaching {}", goal);
            StepResult::NoPath
        } else {
            StepResult::StepSuccess
        }
    }
}

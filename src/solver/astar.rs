use grid_util::point::Point;
use log::{debug, trace};

use crate::path::build_path;
use crate::search_list::ListLookup;
use crate::solver::{assert_goal_in_bounds, GridSolver, SearchKind, StepResult};
use crate::state::SearchState;
use crate::terrain::TerrainGrid;
use crate::GOAL_SENTINEL;

/// A* over terrain costs with the Manhattan distance as heuristic. Node scores hold
/// cost-so-far plus heuristic, and the open list is kept sorted by score after each step.
#[derive(Clone, Debug, Default)]
pub struct AstarSolver {
    /// Maps a zero distance to [GOAL_SENTINEL] instead of 0. The goal then jumps to the front of
    /// the open list as soon as it is discovered, which reproduces the expansion order of the
    /// legacy demo at the price of optimality on weighted terrain.
    pub goal_bias: bool,
}

impl AstarSolver {
    pub fn new() -> AstarSolver {
        AstarSolver { goal_bias: false }
    }
    pub fn with_goal_bias() -> AstarSolver {
        AstarSolver { goal_bias: true }
    }

    pub fn heuristic(&self, point: Point, goal: Point) -> i32 {
        let distance = point.manhattan_distance(&goal);
        if self.goal_bias && distance == 0 {
            GOAL_SENTINEL
        } else {
            distance
        }
    }
}

impl GridSolver for AstarSolver {
    fn kind(&self) -> SearchKind {
        SearchKind::AStar
    }

    fn begin(&self, start: Point, goal: Point) -> SearchState {
        SearchState::new(start, self.heuristic(start, goal))
    }

    fn step(&self, terrain: &TerrainGrid, state: &mut SearchState, goal: Point) -> StepResult {
        assert_goal_in_bounds(terrain, goal);
        let Some(current) = state.take_front() else {
            return StepResult::NoPath;
        };
        let node = state.nodes[current];
        if node.point == goal {
            debug!("A* reached {} after {} expansions", goal, state.steps);
            return StepResult::PathFound(build_path(&state.nodes, current));
        }
        trace!("Expanding {} with score {}", node.point, node.score);
        let cost_so_far = node.score - self.heuristic(node.point, goal);
        for (neighbour, move_cost) in terrain.neighbours(node.point) {
            let candidate = cost_so_far
                .saturating_add(move_cost)
                .saturating_add(self.heuristic(neighbour, goal));
            match state.open.find_better(&state.nodes, neighbour, candidate) {
                ListLookup::BetterExisting => {}
                ListLookup::WorseExisting(index) => {
                    if let Some(id) = state.open.id_at(index) {
                        state.nodes[id].score = candidate;
                        state.nodes[id].parent = Some(current);
                    }
                }
                ListLookup::NotFound => {
                    match state.closed.find_better(&state.nodes, neighbour, candidate) {
                        ListLookup::NotFound => state.discover(neighbour, candidate, current),
                        ListLookup::BetterExisting => {}
                        ListLookup::WorseExisting(index) => {
                            // A cheaper route to an expanded node: reopen it.
                            if let Some(id) = state.closed.remove_at(index) {
                                state.nodes[id].score = candidate;
                                state.nodes[id].parent = Some(current);
                                state.open.push_back(neighbour, id);
                            }
                        }
                    }
                }
            }
        }
        state.open.sort_by_score(&state.nodes);
        state.close(current);
        state.steps += 1;
        if state.open.is_empty() {
            debug!(
                "A* ran out of nodes after {} expansions without reaching {}",
                state.steps, goal
            );
            StepResult::NoPath
        } else {
            StepResult::StepSuccess
        }
    }
}

use grid_util::point::Point;

use crate::node::{Node, NodeArena, NodeId};
use crate::search_list::SearchList;

/// Everything a stepwise search needs between two calls to
/// [step](crate::solver::GridSolver::step): the node arena plus the open and closed lists. A
/// driver can keep it around across frames and read the lists for display.
#[derive(Clone, Debug)]
pub struct SearchState {
    pub(crate) nodes: NodeArena,
    pub(crate) open: SearchList,
    pub(crate) closed: SearchList,
    pub(crate) steps: u32,
}

impl SearchState {
    /// Creates a state with only the start node on the open list.
    pub fn new(start: Point, start_score: i32) -> SearchState {
        let mut nodes = NodeArena::new();
        let mut open = SearchList::new();
        let id = nodes.alloc(Node::new(start, start_score, None));
        open.push_back(start, id);
        SearchState {
            nodes,
            open,
            closed: SearchList::new(),
            steps: 0,
        }
    }

    pub fn open(&self) -> &SearchList {
        &self.open
    }
    pub fn closed(&self) -> &SearchList {
        &self.closed
    }
    pub fn nodes(&self) -> &NodeArena {
        &self.nodes
    }
    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id]
    }

    /// Number of nodes expanded so far. Only A* maintains this counter.
    pub fn steps(&self) -> u32 {
        self.steps
    }

    /// True once the open list has run dry. Further steps report no path.
    pub fn is_exhausted(&self) -> bool {
        self.open.is_empty()
    }

    pub(crate) fn take_front(&mut self) -> Option<NodeId> {
        self.open.pop_front()
    }

    pub(crate) fn discover(&mut self, point: Point, score: i32, parent: NodeId) {
        debug_assert!(!self.closed.contains(point));
        let id = self.nodes.alloc(Node::new(point, score, Some(parent)));
        self.open.push_back(point, id);
    }

    pub(crate) fn close(&mut self, id: NodeId) {
        let point = self.nodes[id].point;
        debug_assert!(!self.open.contains(point));
        self.closed.push_back(point, id);
    }
}

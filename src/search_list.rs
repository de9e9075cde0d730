use fxhash::FxBuildHasher;
use grid_util::point::Point;
use indexmap::IndexMap;

use crate::node::{NodeArena, NodeId};

type FxIndexMap<K, V> = IndexMap<K, V, FxBuildHasher>;

/// Result of looking up a coordinate on a [SearchList] with a candidate score.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ListLookup {
    NotFound,
    /// An entry exists with a score lower than or equal to the candidate.
    BetterExisting,
    /// An entry exists at this position with a strictly worse score.
    WorseExisting(usize),
}

/// Ordered list of node handles keyed by coordinate. Insertion order is kept, which makes the
/// front of the list the next node to expand. At most one entry exists per coordinate.
#[derive(Clone, Debug, Default)]
pub struct SearchList {
    entries: FxIndexMap<Point, NodeId>,
}

impl SearchList {
    pub fn new() -> SearchList {
        SearchList::default()
    }

    pub fn contains(&self, point: Point) -> bool {
        self.entries.contains_key(&point)
    }

    pub fn find_better(&self, nodes: &NodeArena, point: Point, candidate_score: i32) -> ListLookup {
        match self.entries.get_full(&point) {
            None => ListLookup::NotFound,
            // Ties count as better so equal routes do not churn the list.
            Some((_, _, &id)) if nodes[id].score <= candidate_score => ListLookup::BetterExisting,
            Some((index, _, _)) => ListLookup::WorseExisting(index),
        }
    }

    /// Removes the entry at `index`, shifting later entries forward.
    pub fn remove_at(&mut self, index: usize) -> Option<NodeId> {
        self.entries.shift_remove_index(index).map(|(_, id)| id)
    }
    pub fn pop_front(&mut self) -> Option<NodeId> {
        self.remove_at(0)
    }

    pub fn push_back(&mut self, point: Point, id: NodeId) {
        let previous = self.entries.insert(point, id);
        debug_assert!(previous.is_none(), "{} was already on the list", point);
    }

    pub fn id_at(&self, index: usize) -> Option<NodeId> {
        self.entries.get_index(index).map(|(_, &id)| id)
    }
    pub fn front(&self) -> Option<NodeId> {
        self.id_at(0)
    }

    /// Stable ascending sort by node score, so equal scores keep their insertion order.
    pub fn sort_by_score(&mut self, nodes: &NodeArena) {
        self.entries
            .sort_by(|_, a, _, b| nodes[*a].score.cmp(&nodes[*b].score));
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
    pub fn ids(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.entries.values().copied()
    }
    pub fn points(&self) -> impl Iterator<Item = Point> + '_ {
        self.entries.keys().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::Node;

    fn list_with_scores(scores: &[i32]) -> (NodeArena, SearchList) {
        let mut nodes = NodeArena::new();
        let mut list = SearchList::new();
        for (x, &score) in scores.iter().enumerate() {
            let point = Point::new(x as i32, 0);
            let id = nodes.alloc(Node::new(point, score, None));
            list.push_back(point, id);
        }
        (nodes, list)
    }

    #[test]
    fn find_better_treats_ties_as_better() {
        let (nodes, list) = list_with_scores(&[4, 7]);
        assert_eq!(
            list.find_better(&nodes, Point::new(5, 5), 0),
            ListLookup::NotFound
        );
        assert_eq!(
            list.find_better(&nodes, Point::new(1, 0), 7),
            ListLookup::BetterExisting
        );
        assert_eq!(
            list.find_better(&nodes, Point::new(1, 0), 8),
            ListLookup::BetterExisting
        );
        assert_eq!(
            list.find_better(&nodes, Point::new(1, 0), 6),
            ListLookup::WorseExisting(1)
        );
    }

    #[test]
    fn remove_keeps_order() {
        let (_, mut list) = list_with_scores(&[0, 0, 0, 0]);
        assert_eq!(list.remove_at(1), Some(1));
        assert_eq!(
            list.points().collect::<Vec<_>>(),
            vec![Point::new(0, 0), Point::new(2, 0), Point::new(3, 0)]
        );
        assert_eq!(list.pop_front(), Some(0));
        assert_eq!(list.front(), Some(2));
        assert!(!list.contains(Point::new(1, 0)));
        assert_eq!(list.remove_at(5), None);
    }

    #[test]
    fn sort_is_stable() {
        let (nodes, mut list) = list_with_scores(&[5, 2, 5, 1, 2]);
        list.sort_by_score(&nodes);
        assert_eq!(list.ids().collect::<Vec<_>>(), vec![3, 1, 4, 0, 2]);
        assert_eq!(list.id_at(0), Some(3));
    }

    #[test]
    fn empty_list() {
        let mut list = SearchList::new();
        assert!(list.is_empty());
        assert_eq!(list.pop_front(), None);
        assert_eq!(list.len(), 0);
    }
}

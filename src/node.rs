use grid_util::point::Point;
use std::ops::{Index, IndexMut};

/// Permanent handle of a [Node] inside a [NodeArena].
pub type NodeId = usize;

/// Vertex of the search graph. The meaning of `score` depends on the solver: breadth-first search
/// leaves it at zero, A* stores cost-so-far plus heuristic.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Node {
    pub point: Point,
    pub score: i32,
    /// Node this one was discovered from. Always a node allocated earlier, so following parents
    /// terminates at the start node.
    pub parent: Option<NodeId>,
}

impl Node {
    pub fn new(point: Point, score: i32, parent: Option<NodeId>) -> Node {
        Node {
            point,
            score,
            parent,
        }
    }
}

/// Append-only storage for every node discovered during one search. Open and closed lists only
/// hold [NodeId]s, so nodes never move while they migrate between lists.
#[derive(Clone, Debug, Default)]
pub struct NodeArena {
    nodes: Vec<Node>,
}

impl NodeArena {
    pub fn new() -> NodeArena {
        NodeArena::default()
    }
    pub fn alloc(&mut self, node: Node) -> NodeId {
        debug_assert!(node.parent.map_or(true, |p| p < self.nodes.len()));
        self.nodes.push(node);
        self.nodes.len() - 1
    }
    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id)
    }
    pub fn len(&self) -> usize {
        self.nodes.len()
    }
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
    pub fn iter(&self) -> impl Iterator<Item = &Node> {
        self.nodes.iter()
    }
}

impl Index<NodeId> for NodeArena {
    type Output = Node;

    fn index(&self, id: NodeId) -> &Node {
        &self.nodes[id]
    }
}

impl IndexMut<NodeId> for NodeArena {
    fn index_mut(&mut self, id: NodeId) -> &mut Node {
        &mut self.nodes[id]
    }
}

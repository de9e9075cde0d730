use grid_util::point::Point;
use itertools::Itertools;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use crate::node::{NodeArena, NodeId};

/// Walks the parent links from `goal` back to the start node and returns the coordinates in
/// start-to-goal order. The goal node itself does not need to be on any list.
pub fn build_path(nodes: &NodeArena, goal: NodeId) -> Vec<Point> {
    let mut path: Vec<Point> = std::iter::successors(Some(goal), |&id| nodes[id].parent)
        .map(|id| nodes[id].point)
        .collect();
    debug_assert!(path.len() <= nodes.len());
    path.reverse();
    path
}

/// Checks that every consecutive pair of points on the path is a single cardinal move.
pub fn is_connected(path: &[Point]) -> bool {
    path.iter()
        .tuple_windows()
        .all(|(a, b)| a.manhattan_distance(b) == 1)
}

/// Writes one `x, y` line per point.
pub fn write_path<W: Write>(path: &[Point], writer: W) -> io::Result<()> {
    let mut w = BufWriter::new(writer);
    for p in path {
        writeln!(w, "{}, {}", p.x, p.y)?;
    }
    w.flush()
}

/// Writes the path to `filename`, replacing any previous contents.
pub fn save_path<P: AsRef<Path>>(path: &[Point], filename: P) -> io::Result<()> {
    let f = File::create(filename)?;
    write_path(path, f)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::Node;

    #[test]
    fn follows_parents_back_to_start() {
        let mut nodes = NodeArena::new();
        let a = nodes.alloc(Node::new(Point::new(0, 0), 0, None));
        let b = nodes.alloc(Node::new(Point::new(0, 1), 0, Some(a)));
        // Unrelated branch that must not show up in the path.
        nodes.alloc(Node::new(Point::new(1, 0), 0, Some(a)));
        let d = nodes.alloc(Node::new(Point::new(1, 1), 0, Some(b)));
        let path = build_path(&nodes, d);
        assert_eq!(
            path,
            vec![Point::new(0, 0), Point::new(0, 1), Point::new(1, 1)]
        );
        assert!(is_connected(&path));
        assert_eq!(build_path(&nodes, a), vec![Point::new(0, 0)]);
    }

    #[test]
    fn connectivity() {
        assert!(is_connected(&[]));
        assert!(is_connected(&[Point::new(3, 3)]));
        assert!(!is_connected(&[Point::new(0, 0), Point::new(1, 1)]));
        assert!(!is_connected(&[Point::new(0, 0), Point::new(0, 0)]));
    }

    #[test]
    fn export_format() {
        let mut out = Vec::new();
        write_path(&[Point::new(0, 0), Point::new(1, 0), Point::new(1, 1)], &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "0, 0\n1, 0\n1, 1\n");
    }

    #[test]
    fn save_overwrites() {
        let filename = std::env::temp_dir().join("grid_search_save_overwrites.txt");
        save_path(&[Point::new(0, 0), Point::new(0, 1)], &filename).unwrap();
        save_path(&[Point::new(2, 2)], &filename).unwrap();
        assert_eq!(std::fs::read_to_string(&filename).unwrap(), "2, 2\n");
        std::fs::remove_file(&filename).unwrap();
    }
}

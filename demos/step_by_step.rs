use grid_search::{
    new_search, save_path, GridSolver, SearchKind, StepResult, TerrainGrid, PATH_OUTPUT_FILE,
};
use grid_util::point::Point;

// In this example a path is found one step at a time on the 6x5 terrain
//
// 111111
// 100021
// 133301
// 100001
// 111111
//
// where 0 is a wall, 1 clear ground, 2 wood and 3 water. The start is in the bottom-left corner
// and the goal in the top-right one. Pass "bfs" or "astar" to pick the search.

fn main() {
    let kind = std::env::args()
        .nth(1)
        .map(|arg| arg.parse::<SearchKind>())
        .transpose()
        .unwrap_or_else(|e| {
            eprintln!("{e}");
            std::process::exit(2);
        })
        .unwrap_or(SearchKind::AStar);
    let terrain: TerrainGrid = "111111\n100021\n133301\n100001\n111111".parse().unwrap();
    println!("{}", terrain);
    let start = Point::new(0, 0);
    let goal = Point::new(5, 4);

    let solver = new_search(kind);
    let mut state = solver.begin(start, goal);
    let mut frame = 0;
    loop {
        frame += 1;
        match solver.step(&terrain, &mut state, goal) {
            StepResult::StepSuccess => {
                println!(
                    "Frame {frame}: {} open, {} closed",
                    state.open().len(),
                    state.closed().len()
                );
            }
            StepResult::PathFound(path) => {
                println!("Path found by {kind} after {frame} frames:");
                for p in &path {
                    println!("{:?}", p);
                }
                println!("Cost: {}", solver.path_cost(&terrain, &path));
                if kind == SearchKind::AStar {
                    println!("Expansions: {}", state.steps());
                }
                if let Err(e) = save_path(&path, PATH_OUTPUT_FILE) {
                    eprintln!("Could not write {PATH_OUTPUT_FILE}: {e}");
                }
                break;
            }
            StepResult::NoPath => {
                println!("No path from {} to {}", start, goal);
                break;
            }
        }
    }
}

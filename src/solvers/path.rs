use crate::maze::Maze;

/// Walks the predecessor chain back from `target` to `start`, marking every
/// cell on it (both ends included) as part of the solution path.
/// Returns the path ordered from `start` to `target`.
///
/// `came_from[i]` is the flat index of the cell from which cell `i` was discovered.
///
/// Panics if the chain from `target` does not lead back to `start`.
pub fn reconstruct_path(
    maze: &mut Maze,
    came_from: &[Option<usize>],
    start: usize,
    target: usize,
) -> Vec<(u8, u8)> {
    let mut path = Vec::new();
    let mut current = target;
    loop {
        maze[current].on_path = true;
        path.push(maze.coord_of(current));
        if current == start {
            break;
        }
        // A chain longer than the maze must contain a cycle
        assert!(
            path.len() <= maze.len(),
            "Predecessor chain from {:?} loops without reaching the start",
            maze.coord_of(target)
        );
        current = match came_from[current] {
            Some(parent) => parent,
            None => panic!(
                "Cell {:?} has no predecessor on the way back to the start",
                maze.coord_of(current)
            ),
        };
    }
    path.reverse();
    path
}

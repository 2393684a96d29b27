//! Breadth-first escape search.

use std::collections::{HashMap, HashSet, VecDeque};

use super::{Cell, Maze};

/// Shortest escape path from the left-column entrance to the rightmost
/// column, entrance first.
///
/// The entrance is the topmost PATH cell in column 0. The search runs
/// over 4-neighbor adjacency restricted to PATH cells, recording each
/// cell's predecessor the first time it is discovered, which makes the
/// reconstructed path shortest in cell count. When several exit-column
/// cells are reachable, the one BFS dequeues first wins; under the fixed
/// up/down/left/right neighbor order that means the uppermost of two
/// equally distant exits.
///
/// Returns an empty path when column 0 holds no PATH cell or the exit
/// column is unreachable. A disconnected maze is valid input, not an
/// error; the generator never produces one, but loaded mazes can.
pub fn solve(maze: &Maze) -> Vec<Cell> {
    let Some(entrance) = find_entrance(maze) else {
        return Vec::new();
    };

    let mut queue = VecDeque::from([entrance]);
    let mut visited = HashSet::from([entrance]);
    let mut parent: HashMap<Cell, Cell> = HashMap::new();

    while let Some(current) = queue.pop_front() {
        if current.col == maze.width() - 1 {
            return reconstruct(current, &parent);
        }

        for next in current.step_neighbors(maze.height(), maze.width()) {
            if maze.is_path(next) && visited.insert(next) {
                parent.insert(next, current);
                queue.push_back(next);
            }
        }
    }

    Vec::new()
}

/// Topmost PATH cell of column 0.
fn find_entrance(maze: &Maze) -> Option<Cell> {
    (0..maze.height())
        .map(|row| Cell::new(row, 0))
        .find(|&cell| maze.is_path(cell))
}

/// Walk predecessor links back from the exit, then flip the result into
/// entrance-to-exit order.
fn reconstruct(exit: Cell, parent: &HashMap<Cell, Cell>) -> Vec<Cell> {
    let mut path = vec![exit];
    let mut current = exit;
    while let Some(&prev) = parent.get(&current) {
        path.push(prev);
        current = prev;
    }
    path.reverse();
    path
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::parse_maze;

    #[test]
    fn test_straight_corridor() {
        let maze = parse_maze("3 5\n11111\n00000\n11111").unwrap();
        let path = solve(&maze);
        assert_eq!(
            path,
            vec![
                Cell::new(1, 0),
                Cell::new(1, 1),
                Cell::new(1, 2),
                Cell::new(1, 3),
                Cell::new(1, 4),
            ]
        );
    }

    #[test]
    fn test_no_entrance_returns_empty() {
        let maze = parse_maze("3 3\n111\n101\n111").unwrap();
        assert!(solve(&maze).is_empty());
    }

    #[test]
    fn test_disconnected_maze_returns_empty() {
        // Entrance stub on the left, exit stub on the right, no link.
        let maze = parse_maze("5 5\n11111\n00111\n11111\n11100\n11111").unwrap();
        assert!(solve(&maze).is_empty());
    }

    #[test]
    fn test_entrance_is_topmost_path_cell() {
        // Column 0 is open at rows 1 and 3; the scan starts at the top.
        let maze = parse_maze("5 5\n11111\n00000\n11111\n00111\n11111").unwrap();
        let path = solve(&maze);
        assert_eq!(path.first(), Some(&Cell::new(1, 0)));
    }
}

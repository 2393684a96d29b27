//! Randomized-Prim maze generation.
//!
//! Grows a spanning tree over the interior room lattice outward from the
//! entrance room, one frontier wall at a time. The carved tree plus the
//! entrance and exit corridors is the finished maze.

use std::collections::HashSet;

use thiserror::Error;

use super::{Cell, CellState, Maze};
use crate::consts::{MIN_DIM, MIN_GEN_HEIGHT};
use crate::rng::MazeRng;

/// Rejected maze-generation requests. Checked before any allocation, so
/// a failed request never produces a partial maze.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GenerateError {
    #[error("maze dimensions must be at least 3x3, requested {height}x{width}")]
    TooSmall { height: usize, width: usize },

    /// Heights 3 and 4 leave no interior row for the entrance draw.
    #[error("maze height must be at least 5 to host an entrance and exit, requested {height}")]
    NoEntranceRow { height: usize },
}

/// Candidate edge between a claimed room and a candidate room two steps
/// away. The wall cell separating them is the arithmetic midpoint of the
/// pair, so it is derived rather than stored.
#[derive(Debug, Clone, Copy)]
struct FrontierWall {
    from: Cell,
    to: Cell,
}

impl FrontierWall {
    fn wall_cell(&self) -> Cell {
        self.from.midpoint(&self.to)
    }
}

/// Build a perfect maze of the requested dimensions.
///
/// The entrance corridor is cut through the left boundary and the exit
/// through the right, each on an independently drawn odd interior row
/// (the two rows may coincide). Every room reachable from the entrance
/// ends up connected by exactly one path: a frontier wall is only ever
/// opened toward a room not yet in the maze, so no cycle can form.
pub fn generate(height: usize, width: usize, rng: &mut MazeRng) -> Result<Maze, GenerateError> {
    if height < MIN_DIM || width < MIN_DIM {
        return Err(GenerateError::TooSmall { height, width });
    }
    if height < MIN_GEN_HEIGHT {
        return Err(GenerateError::NoEntranceRow { height });
    }

    let mut maze = Maze::filled(height, width, CellState::Wall);

    let entrance_row = odd_interior_row(height, rng);
    maze.set(Cell::new(entrance_row, 0), CellState::Path);
    maze.set(Cell::new(entrance_row, 1), CellState::Path);

    let exit_row = odd_interior_row(height, rng);
    maze.set(Cell::new(exit_row, width - 1), CellState::Path);
    maze.set(Cell::new(exit_row, width - 2), CellState::Path);

    let start = Cell::new(entrance_row, 1);
    let mut in_maze = HashSet::from([start]);
    let mut frontier = Vec::new();
    push_frontier(start, height, width, &in_maze, &mut frontier);

    while !frontier.is_empty() {
        let pick = rng.rn2(frontier.len() as u32) as usize;
        let wall = frontier.swap_remove(pick);

        // Both sides already claimed: opening this wall would close a
        // cycle, so the entry is discarded.
        if in_maze.contains(&wall.to) {
            continue;
        }

        maze.set(wall.wall_cell(), CellState::Path);
        maze.set(wall.to, CellState::Path);
        in_maze.insert(wall.to);
        push_frontier(wall.to, height, width, &in_maze, &mut frontier);
    }

    Ok(maze)
}

/// `1 + 2 * rn2((height - 3) / 2)`: a uniformly drawn odd row strictly
/// inside the boundary walls.
fn odd_interior_row(height: usize, rng: &mut MazeRng) -> usize {
    1 + 2 * rng.rn2(((height - 3) / 2) as u32) as usize
}

/// Queue every carve candidate of `cell` that is not yet part of the
/// maze. Duplicate frontier entries for the same target are fine; the
/// later ones collapse under the discard rule.
fn push_frontier(
    cell: Cell,
    height: usize,
    width: usize,
    in_maze: &HashSet<Cell>,
    frontier: &mut Vec<FrontierWall>,
) {
    for to in cell.carve_neighbors(height, width) {
        if !in_maze.contains(&to) {
            frontier.push(FrontierWall { from: cell, to });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_tiny_dimensions() {
        let mut rng = MazeRng::new(42);
        assert_eq!(
            generate(2, 9, &mut rng),
            Err(GenerateError::TooSmall { height: 2, width: 9 })
        );
        assert_eq!(
            generate(9, 1, &mut rng),
            Err(GenerateError::TooSmall { height: 9, width: 1 })
        );
    }

    #[test]
    fn test_rejects_heights_without_entrance_row() {
        let mut rng = MazeRng::new(42);
        assert_eq!(
            generate(3, 9, &mut rng),
            Err(GenerateError::NoEntranceRow { height: 3 })
        );
        assert_eq!(
            generate(4, 9, &mut rng),
            Err(GenerateError::NoEntranceRow { height: 4 })
        );
    }

    #[test]
    fn test_entrance_and_exit_are_open() {
        let mut rng = MazeRng::new(7);
        let maze = generate(11, 11, &mut rng).unwrap();

        let entrance: Vec<usize> = (0..11)
            .filter(|&row| maze.is_path(Cell::new(row, 0)))
            .collect();
        let exit: Vec<usize> = (0..11)
            .filter(|&row| maze.is_path(Cell::new(row, 10)))
            .collect();

        assert_eq!(entrance.len(), 1);
        assert_eq!(exit.len(), 1);
        // The corridor continues one cell inward on both sides.
        assert!(maze.is_path(Cell::new(entrance[0], 1)));
        assert!(maze.is_path(Cell::new(exit[0], 9)));
        // Rows are odd-aligned, strictly interior.
        assert_eq!(entrance[0] % 2, 1);
        assert_eq!(exit[0] % 2, 1);
    }

    #[test]
    fn test_same_seed_same_maze() {
        let a = generate(15, 21, &mut MazeRng::new(99)).unwrap();
        let b = generate(15, 21, &mut MazeRng::new(99)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_minimum_height_pins_entrance_to_row_one() {
        // (5 - 3) / 2 == 1, so the draw has a single outcome.
        let maze = generate(5, 9, &mut MazeRng::new(3)).unwrap();
        assert!(maze.is_path(Cell::new(1, 0)));
        assert!(maze.is_path(Cell::new(1, 8)));
    }
}

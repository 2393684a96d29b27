//! Session state: the single current maze and its RNG.

use std::path::Path;

use crate::maze::{self, Cell, GenerateError, Maze};
use crate::rng::MazeRng;
use crate::store::{self, LoadError, SaveError};

/// Owner of the one "current maze" of a running program.
///
/// Generation and loading replace the maze wholesale on success and
/// leave it untouched on failure; nothing mutates a maze in place. The
/// RNG is injected at construction, so a seeded session replays the
/// exact same sequence of mazes.
#[derive(Debug)]
pub struct MazeSession {
    maze: Option<Maze>,
    rng: MazeRng,
}

impl MazeSession {
    /// Session with a caller-supplied RNG.
    pub fn new(rng: MazeRng) -> Self {
        Self { maze: None, rng }
    }

    /// Fully deterministic session.
    pub fn with_seed(seed: u64) -> Self {
        Self::new(MazeRng::new(seed))
    }

    pub fn maze(&self) -> Option<&Maze> {
        self.maze.as_ref()
    }

    pub fn has_maze(&self) -> bool {
        self.maze.is_some()
    }

    /// Generate a fresh maze and make it current.
    pub fn generate(&mut self, height: usize, width: usize) -> Result<&Maze, GenerateError> {
        let maze = maze::generate(height, width, &mut self.rng)?;
        Ok(self.maze.insert(maze))
    }

    /// Load a maze file and make it current. Any failure leaves the
    /// previous maze in place.
    pub fn load(&mut self, path: &Path) -> Result<&Maze, LoadError> {
        let maze = store::load_maze(path)?;
        Ok(self.maze.insert(maze))
    }

    /// Save the current maze.
    pub fn save(&self, path: &Path) -> Result<(), SaveError> {
        let maze = self.maze.as_ref().ok_or(SaveError::NoMaze)?;
        store::save_maze(maze, path)
    }

    /// Shortest escape path of the current maze. `None` without a maze;
    /// an empty path means the maze has no escape, which is a valid
    /// result rather than an error.
    pub fn solve(&self) -> Option<Vec<Cell>> {
        self.maze.as_ref().map(maze::solve)
    }
}

impl Default for MazeSession {
    fn default() -> Self {
        Self::new(MazeRng::from_entropy())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_without_maze() {
        let session = MazeSession::with_seed(1);
        assert!(!session.has_maze());
        assert!(session.solve().is_none());
    }

    #[test]
    fn test_generate_replaces_current_maze() {
        let mut session = MazeSession::with_seed(1);
        session.generate(9, 9).unwrap();
        session.generate(7, 13).unwrap();

        let current = session.maze().unwrap();
        assert_eq!(current.height(), 7);
        assert_eq!(current.width(), 13);
    }

    #[test]
    fn test_failed_generate_keeps_current_maze() {
        let mut session = MazeSession::with_seed(1);
        let kept = session.generate(9, 9).unwrap().clone();

        assert!(session.generate(4, 9).is_err());
        assert_eq!(session.maze(), Some(&kept));
    }

    #[test]
    fn test_save_without_maze() {
        let session = MazeSession::with_seed(1);
        let err = session.save(Path::new("unused.txt")).unwrap_err();
        assert!(matches!(err, SaveError::NoMaze));
    }

    #[test]
    fn test_seeded_sessions_agree() {
        let mut a = MazeSession::with_seed(77);
        let mut b = MazeSession::with_seed(77);
        assert_eq!(a.generate(13, 17).unwrap(), b.generate(13, 17).unwrap());
    }
}

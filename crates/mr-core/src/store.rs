//! Text persistence for mazes.
//!
//! Format: a first line `"<height> <width>"`, then exactly `height`
//! lines of exactly `width` characters, `'0'` for PATH and `'1'` for
//! WALL. Example:
//!
//! ```text
//! 5 5
//! 11111
//! 10001
//! 10101
//! 10001
//! 11111
//! ```
//!
//! Parsing and formatting are pure; [`load_maze`] and [`save_maze`] add
//! the filesystem layer and classify its failures.

use std::fs;
use std::io::{self, ErrorKind};
use std::path::Path;

use thiserror::Error;

use crate::consts::MIN_DIM;
use crate::maze::{Cell, CellState, Maze};

/// Reasons a maze text fails validation. Collapsed into the single
/// "invalid format" outcome at the load boundary; the distinction stays
/// available internally through source chaining.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormatError {
    #[error("file is empty")]
    Empty,

    #[error("first line must be two integers, height and width")]
    BadHeader,

    #[error("maze dimensions must be at least 3x3, found {height}x{width}")]
    BadDimensions { height: usize, width: usize },

    #[error("expected {expected} maze lines, found {found}")]
    BadLineCount { expected: usize, found: usize },

    #[error("line {line} is {found} characters long, expected {expected}")]
    BadLineLength {
        line: usize,
        expected: usize,
        found: usize,
    },

    #[error("invalid character {found:?} on line {line}")]
    BadCharacter { line: usize, found: char },
}

/// Failures while loading a maze file. Missing-file and access problems
/// are distinguished before any parsing begins.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("the file {path} does not exist")]
    NotFound { path: String },

    #[error("cannot read the file {path}, access denied")]
    AccessDenied { path: String },

    #[error("cannot read the file {path}: {source}")]
    Io { path: String, source: io::Error },

    #[error("cannot load the maze, it has an invalid format")]
    InvalidFormat(#[source] FormatError),
}

/// Failures while saving a maze file.
#[derive(Error, Debug)]
pub enum SaveError {
    #[error("no maze to save")]
    NoMaze,

    #[error("cannot save the maze, access denied to {path}")]
    AccessDenied { path: String },

    #[error("cannot save the maze to {path}: {source}")]
    Io { path: String, source: io::Error },
}

/// Parse the text format into a maze.
///
/// Validation order matches the failure taxonomy: empty input, header,
/// dimensions, line count, line lengths, characters.
pub fn parse_maze(text: &str) -> Result<Maze, FormatError> {
    let mut lines = text.lines();
    let header = lines.next().ok_or(FormatError::Empty)?;

    let dims: Vec<&str> = header.split_whitespace().collect();
    let &[h, w] = dims.as_slice() else {
        return Err(FormatError::BadHeader);
    };
    let height: usize = h.parse().map_err(|_| FormatError::BadHeader)?;
    let width: usize = w.parse().map_err(|_| FormatError::BadHeader)?;

    if height < MIN_DIM || width < MIN_DIM {
        return Err(FormatError::BadDimensions { height, width });
    }

    let data: Vec<&str> = lines.collect();
    if data.len() != height {
        return Err(FormatError::BadLineCount {
            expected: height,
            found: data.len(),
        });
    }

    let mut maze = Maze::filled(height, width, CellState::Wall);
    for (row, line) in data.iter().enumerate() {
        let len = line.chars().count();
        if len != width {
            return Err(FormatError::BadLineLength {
                line: row + 2,
                expected: width,
                found: len,
            });
        }
        for (col, ch) in line.chars().enumerate() {
            let state = CellState::from_char(ch).ok_or(FormatError::BadCharacter {
                line: row + 2,
                found: ch,
            })?;
            maze.set(Cell::new(row, col), state);
        }
    }

    Ok(maze)
}

/// Render a maze into the text format, trailing newline included.
pub fn format_maze(maze: &Maze) -> String {
    let mut out = String::with_capacity((maze.width() + 1) * (maze.height() + 1));
    out.push_str(&maze.height().to_string());
    out.push(' ');
    out.push_str(&maze.width().to_string());
    out.push('\n');
    for row in maze.rows() {
        for &state in row {
            out.push(state.to_char());
        }
        out.push('\n');
    }
    out
}

/// Load a maze from `path`.
pub fn load_maze(path: &Path) -> Result<Maze, LoadError> {
    let text = fs::read_to_string(path).map_err(|err| {
        let path = path.display().to_string();
        match err.kind() {
            ErrorKind::NotFound => LoadError::NotFound { path },
            ErrorKind::PermissionDenied => LoadError::AccessDenied { path },
            _ => LoadError::Io { path, source: err },
        }
    })?;
    parse_maze(&text).map_err(LoadError::InvalidFormat)
}

/// Save a maze to `path`, creating missing parent directories first.
/// A failure partway through the write leaves the destination contents
/// unspecified; saving is best-effort, not transactional.
pub fn save_maze(maze: &Maze, path: &Path) -> Result<(), SaveError> {
    let classify = |err: io::Error| {
        let path = path.display().to_string();
        match err.kind() {
            ErrorKind::PermissionDenied => SaveError::AccessDenied { path },
            _ => SaveError::Io { path, source: err },
        }
    };

    if let Some(dir) = path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
        fs::create_dir_all(dir).map_err(classify)?;
    }
    fs::write(path, format_maze(maze)).map_err(classify)
}

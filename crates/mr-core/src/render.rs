//! Pure text rendering of mazes and escape paths.
//!
//! Every grid cell becomes two display characters. The glyph set is
//! pluggable so the front end can fall back to plain ASCII on terminals
//! without Unicode support.

use std::collections::HashSet;

use crate::maze::{Cell, Maze};

/// Glyph triple used to draw a maze. Each glyph is two characters wide.
pub trait GlyphSet: Send + Sync {
    /// Glyph for a WALL cell.
    fn wall(&self) -> &'static str;

    /// Glyph for a PATH cell on the escape route.
    fn escape(&self) -> &'static str;

    /// Glyph for any other PATH cell.
    fn open(&self) -> &'static str;
}

/// Solid Unicode blocks, the classic look.
pub struct BlockGlyphs;

impl GlyphSet for BlockGlyphs {
    fn wall(&self) -> &'static str {
        "\u{2588}\u{2588}"
    }

    fn escape(&self) -> &'static str {
        "//"
    }

    fn open(&self) -> &'static str {
        "  "
    }
}

/// Plain-ASCII fallback.
pub struct AsciiGlyphs;

impl GlyphSet for AsciiGlyphs {
    fn wall(&self) -> &'static str {
        "##"
    }

    fn escape(&self) -> &'static str {
        "//"
    }

    fn open(&self) -> &'static str {
        "  "
    }
}

/// Render `maze` as one string per row, top to bottom. Cells listed in
/// `path` are drawn with the escape glyph; pass `None` for a plain view.
/// Pure function of its inputs; rendering holds no state.
pub fn render(maze: &Maze, path: Option<&[Cell]>, glyphs: &dyn GlyphSet) -> Vec<String> {
    let on_path: HashSet<Cell> = path.unwrap_or_default().iter().copied().collect();

    let mut lines = Vec::with_capacity(maze.height());
    for row in 0..maze.height() {
        let mut line = String::with_capacity(maze.width() * 2);
        for col in 0..maze.width() {
            let cell = Cell::new(row, col);
            let glyph = if maze.state(cell).is_wall() {
                glyphs.wall()
            } else if on_path.contains(&cell) {
                glyphs.escape()
            } else {
                glyphs.open()
            };
            line.push_str(glyph);
        }
        lines.push(line);
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::maze::solve;
    use crate::store::parse_maze;

    #[test]
    fn test_plain_render_block_glyphs() {
        let maze = parse_maze("3 3\n111\n101\n111").unwrap();
        let lines = render(&maze, None, &BlockGlyphs);
        assert_eq!(lines, vec!["██████", "██  ██", "██████"]);
    }

    #[test]
    fn test_plain_render_ascii_glyphs() {
        let maze = parse_maze("3 3\n111\n101\n111").unwrap();
        let lines = render(&maze, None, &AsciiGlyphs);
        assert_eq!(lines, vec!["######", "##  ##", "######"]);
    }

    #[test]
    fn test_escape_overlay_marks_route() {
        // Open row 1 runs straight through; the solver must take it and
        // the renderer must mark exactly those cells.
        let maze = parse_maze("5 5\n11111\n00000\n10101\n10001\n11111").unwrap();
        let path = solve(&maze);
        let lines = render(&maze, Some(&path), &BlockGlyphs);
        assert_eq!(
            lines,
            vec![
                "██████████",
                "//////////",
                "██  ██  ██",
                "██      ██",
                "██████████",
            ]
        );
    }

    #[test]
    fn test_empty_path_renders_like_plain() {
        let maze = parse_maze("3 3\n111\n101\n111").unwrap();
        assert_eq!(
            render(&maze, Some(&[]), &BlockGlyphs),
            render(&maze, None, &BlockGlyphs)
        );
    }
}

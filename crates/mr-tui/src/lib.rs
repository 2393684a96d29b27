//! mr-tui: ratatui front end for the maze runner
//!
//! Thin interactive wrapper around mr-core: a menu of the maze
//! operations, prompt popups for size and file name input, and a maze
//! viewport with optional escape overlay.

pub mod app;
pub mod display;
pub mod input;

pub use app::App;

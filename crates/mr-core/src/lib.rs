//! mr-core: Core maze logic
//!
//! This crate contains all maze logic with no terminal I/O: the grid
//! model, the randomized-Prim generator, the breadth-first escape
//! solver, text persistence, and pure rendering. It is designed to be
//! pure and testable; the interactive front end lives in mr-tui.

pub mod maze;
pub mod render;
pub mod store;

mod consts;
mod rng;
mod session;

pub use consts::*;
pub use rng::MazeRng;
pub use session::MazeSession;

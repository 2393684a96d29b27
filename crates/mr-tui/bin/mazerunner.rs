//! Maze runner terminal program
//!
//! Main entry point.

use std::io;
use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use crossterm::{
    event, execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use mr_core::{MazeRng, MazeSession};
use mr_tui::App;
use mr_tui::display::{GraphicsMode, detect_glyph_set};

/// Maze runner - generate, solve, save and load rectangular mazes
#[derive(Parser, Debug)]
#[command(name = "mazerunner")]
#[command(author, version, about = "Maze Runner - generate and escape mazes", long_about = None)]
struct Args {
    /// RNG seed for reproducible mazes
    #[arg(short, long)]
    seed: Option<u64>,

    /// Generate a square maze of this size at startup
    #[arg(short = 'n', long)]
    size: Option<usize>,

    /// Load a maze file at startup
    #[arg(short, long)]
    load: Option<PathBuf>,

    /// Glyph mode (ascii, block, auto)
    #[arg(short, long, default_value_t = GraphicsMode::Auto)]
    graphics: GraphicsMode,
}

fn main() -> io::Result<()> {
    // Parse command-line arguments before terminal setup
    let args = Args::parse();

    let rng = match args.seed {
        Some(seed) => MazeRng::new(seed),
        None => MazeRng::from_entropy(),
    };
    let mut session = MazeSession::new(rng);

    // Startup failures are reported before the alternate screen takes over.
    if let Some(path) = &args.load {
        if let Err(err) = session.load(path) {
            eprintln!("{err}");
            std::process::exit(1);
        }
    } else if let Some(size) = args.size {
        if let Err(err) = session.generate(size, size) {
            eprintln!("{err}");
            std::process::exit(1);
        }
    }

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(session, detect_glyph_set(args.graphics));
    let result = run(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn run(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> io::Result<()> {
    while !app.should_quit() {
        terminal.draw(|frame| app.render(frame))?;
        if event::poll(Duration::from_millis(100))? {
            app.handle_event(event::read()?);
        }
    }
    Ok(())
}

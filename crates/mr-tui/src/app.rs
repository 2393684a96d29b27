//! Application state and main UI controller

use std::path::Path;

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Clear, List, ListItem, Paragraph};
use strum::{Display, EnumIter, IntoEnumIterator};

use mr_core::MazeSession;
use mr_core::maze::Cell;
use mr_core::render::{GlyphSet, render};

use crate::input::{MenuAction, key_to_action};

/// Menu entries, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumIter)]
pub enum MenuItem {
    #[strum(serialize = "Generate a new maze")]
    Generate,
    #[strum(serialize = "Load a maze")]
    Load,
    #[strum(serialize = "Save the maze")]
    Save,
    #[strum(serialize = "Display the maze")]
    Display,
    #[strum(serialize = "Find the escape")]
    Solve,
    #[strum(serialize = "Exit")]
    Quit,
}

impl MenuItem {
    /// Digit shown next to the entry; also its direct-select key.
    const fn hotkey(self) -> char {
        match self {
            MenuItem::Generate => '1',
            MenuItem::Load => '2',
            MenuItem::Save => '3',
            MenuItem::Display => '4',
            MenuItem::Solve => '5',
            MenuItem::Quit => '0',
        }
    }

    /// Save, display, and solve only make sense once a maze exists; the
    /// menu hides them until then.
    const fn needs_maze(self) -> bool {
        matches!(self, MenuItem::Save | MenuItem::Display | MenuItem::Solve)
    }
}

/// UI mode - what the app is currently displaying/waiting for
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiMode {
    /// Browsing the menu
    Menu,
    /// Typing the size of a new maze
    SizeInput { input: String },
    /// Typing a file name for load or save
    FileInput { input: String, action: FileAction },
}

/// What a completed file-name prompt should do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileAction {
    Load,
    Save,
}

/// Application state
pub struct App {
    /// Owner of the current maze and the session RNG
    session: MazeSession,

    /// Glyphs used by the maze viewport
    glyphs: Box<dyn GlyphSet>,

    /// Current UI mode
    mode: UiMode,

    /// Cursor index into the currently visible menu entries
    cursor: usize,

    /// Escape overlay from the last solve, if any
    escape: Option<Vec<Cell>>,

    /// One-line status message
    message: Option<String>,

    /// Should quit
    should_quit: bool,
}

impl App {
    pub fn new(session: MazeSession, glyphs: Box<dyn GlyphSet>) -> Self {
        Self {
            session,
            glyphs,
            mode: UiMode::Menu,
            cursor: 0,
            escape: None,
            message: None,
            should_quit: false,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Menu entries visible right now.
    fn menu_items(&self) -> Vec<MenuItem> {
        MenuItem::iter()
            .filter(|item| self.session.has_maze() || !item.needs_maze())
            .collect()
    }

    /// Handle a terminal event. Only key presses matter; resizes are
    /// picked up on the next draw.
    pub fn handle_event(&mut self, event: Event) {
        let Event::Key(key) = event else {
            return;
        };
        if key.kind != KeyEventKind::Press {
            return;
        }

        match self.mode.clone() {
            UiMode::Menu => self.handle_menu_key(key),
            UiMode::SizeInput { input } => self.handle_size_input(key, input),
            UiMode::FileInput { input, action } => self.handle_file_input(key, input, action),
        }
    }

    fn handle_menu_key(&mut self, key: KeyEvent) {
        let items = self.menu_items();
        match key_to_action(key) {
            Some(MenuAction::Up) => {
                self.cursor = self.cursor.checked_sub(1).unwrap_or(items.len() - 1);
            }
            Some(MenuAction::Down) => {
                self.cursor = (self.cursor + 1) % items.len();
            }
            Some(MenuAction::Select) => {
                let item = items[self.cursor.min(items.len() - 1)];
                self.activate(item);
            }
            Some(MenuAction::Jump(item)) => {
                if items.contains(&item) {
                    self.activate(item);
                } else {
                    self.message = Some(match item {
                        MenuItem::Solve => "No maze to solve!".to_string(),
                        _ => "No maze to display!".to_string(),
                    });
                }
            }
            Some(MenuAction::Quit) => self.should_quit = true,
            None => {}
        }
    }

    fn activate(&mut self, item: MenuItem) {
        self.message = None;
        match item {
            MenuItem::Generate => {
                self.mode = UiMode::SizeInput {
                    input: String::new(),
                };
            }
            MenuItem::Load => {
                self.mode = UiMode::FileInput {
                    input: String::new(),
                    action: FileAction::Load,
                };
            }
            MenuItem::Save => {
                self.mode = UiMode::FileInput {
                    input: String::new(),
                    action: FileAction::Save,
                };
            }
            MenuItem::Display => {
                self.escape = None;
            }
            MenuItem::Solve => {
                if let Some(path) = self.session.solve() {
                    if path.is_empty() {
                        self.message = Some("The maze has no escape.".to_string());
                    }
                    self.escape = Some(path);
                }
            }
            MenuItem::Quit => {
                self.should_quit = true;
            }
        }
    }

    fn handle_size_input(&mut self, key: KeyEvent, mut input: String) {
        match key.code {
            KeyCode::Esc => {
                self.mode = UiMode::Menu;
            }
            KeyCode::Enter => {
                self.mode = UiMode::Menu;
                self.submit_size(&input);
            }
            KeyCode::Backspace => {
                input.pop();
                self.mode = UiMode::SizeInput { input };
            }
            KeyCode::Char(c) if c.is_ascii_digit() => {
                input.push(c);
                self.mode = UiMode::SizeInput { input };
            }
            _ => {}
        }
    }

    fn submit_size(&mut self, input: &str) {
        let Ok(size) = input.parse::<usize>() else {
            self.message = Some("Invalid size. Please enter a number".to_string());
            return;
        };
        match self.session.generate(size, size) {
            Ok(_) => {
                self.escape = None;
                self.cursor = 0;
            }
            Err(err) => self.message = Some(err.to_string()),
        }
    }

    fn handle_file_input(&mut self, key: KeyEvent, mut input: String, action: FileAction) {
        match key.code {
            KeyCode::Esc => {
                self.mode = UiMode::Menu;
            }
            KeyCode::Enter => {
                self.mode = UiMode::Menu;
                if !input.is_empty() {
                    self.submit_file(&input, action);
                }
            }
            KeyCode::Backspace => {
                input.pop();
                self.mode = UiMode::FileInput { input, action };
            }
            KeyCode::Char(c) => {
                input.push(c);
                self.mode = UiMode::FileInput { input, action };
            }
            _ => {}
        }
    }

    fn submit_file(&mut self, input: &str, action: FileAction) {
        let path = Path::new(input);
        match action {
            FileAction::Load => match self.session.load(path) {
                Ok(_) => {
                    self.escape = None;
                    self.cursor = 0;
                    self.message = Some(format!("Maze has been loaded from {input}"));
                }
                Err(err) => self.message = Some(err.to_string()),
            },
            FileAction::Save => match self.session.save(path) {
                Ok(()) => {
                    self.message = Some(format!("Maze has been saved to {input}"));
                }
                Err(err) => self.message = Some(err.to_string()),
            },
        }
    }

    /// Render the UI
    pub fn render(&self, frame: &mut Frame) {
        // Layout: menu and maze side by side, message line at the bottom
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(5), Constraint::Length(3)])
            .split(frame.area());
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(28), Constraint::Min(10)])
            .split(rows[0]);

        self.render_menu(frame, columns[0]);
        self.render_maze(frame, columns[1]);
        self.render_message(frame, rows[1]);

        match &self.mode {
            UiMode::Menu => {}
            UiMode::SizeInput { input } => {
                self.render_prompt(frame, "Enter the size of a new maze", input);
            }
            UiMode::FileInput { input, .. } => {
                self.render_prompt(frame, "Enter file name", input);
            }
        }
    }

    fn render_menu(&self, frame: &mut Frame, area: Rect) {
        let items: Vec<ListItem> = self
            .menu_items()
            .into_iter()
            .enumerate()
            .map(|(idx, item)| {
                let line = format!("{}. {}", item.hotkey(), item);
                let style = if idx == self.cursor {
                    Style::default().add_modifier(Modifier::REVERSED)
                } else {
                    Style::default()
                };
                ListItem::new(line).style(style)
            })
            .collect();

        let list = List::new(items).block(Block::default().title("Menu").borders(Borders::ALL));
        frame.render_widget(list, area);
    }

    fn render_maze(&self, frame: &mut Frame, area: Rect) {
        let block = Block::default().title("Maze").borders(Borders::ALL);
        match self.session.maze() {
            Some(maze) => {
                let lines: Vec<Line> = render(maze, self.escape.as_deref(), self.glyphs.as_ref())
                    .into_iter()
                    .map(Line::from)
                    .collect();
                frame.render_widget(Paragraph::new(lines).block(block), area);
            }
            None => {
                let hint = Paragraph::new("No maze yet. Generate or load one.").block(block);
                frame.render_widget(hint, area);
            }
        }
    }

    fn render_message(&self, frame: &mut Frame, area: Rect) {
        let text = self
            .message
            .as_deref()
            .unwrap_or("Arrows move, Enter selects, digits jump, 0 quits");
        let bar = Paragraph::new(text).block(Block::default().borders(Borders::ALL));
        frame.render_widget(bar, area);
    }

    fn render_prompt(&self, frame: &mut Frame, title: &str, input: &str) {
        let area = centered_rect(50, 20, frame.area());
        frame.render_widget(Clear, area);

        let prompt = Paragraph::new(format!("{input}_"))
            .block(Block::default().title(title).borders(Borders::ALL));
        frame.render_widget(prompt, area);
    }
}

/// Helper to create a centered rect using a percentage of the available area
fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

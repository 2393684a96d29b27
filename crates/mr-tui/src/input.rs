//! Input handling - convert key events to menu actions
//!
//! Only the simple menu-mode bindings live here; editing inside the
//! size and file-name prompts is handled in app.rs.

use crossterm::event::{KeyCode, KeyEvent};

use crate::app::MenuItem;

/// Menu-mode actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    Up,
    Down,
    Select,
    /// Direct selection by menu digit.
    Jump(MenuItem),
    Quit,
}

/// Convert a key event to a menu action.
///
/// Digits 1-5 select entries directly and 0 exits; arrows and vi keys
/// move the cursor.
pub fn key_to_action(key: KeyEvent) -> Option<MenuAction> {
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => Some(MenuAction::Up),
        KeyCode::Down | KeyCode::Char('j') => Some(MenuAction::Down),
        KeyCode::Enter => Some(MenuAction::Select),
        KeyCode::Char('1') => Some(MenuAction::Jump(MenuItem::Generate)),
        KeyCode::Char('2') => Some(MenuAction::Jump(MenuItem::Load)),
        KeyCode::Char('3') => Some(MenuAction::Jump(MenuItem::Save)),
        KeyCode::Char('4') => Some(MenuAction::Jump(MenuItem::Display)),
        KeyCode::Char('5') => Some(MenuAction::Jump(MenuItem::Solve)),
        KeyCode::Char('0') | KeyCode::Char('q') | KeyCode::Esc => Some(MenuAction::Quit),
        _ => None,
    }
}

//! Input module - keyboard handling for the board cursor and boosters

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// UI-level actions produced from key events
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiAction {
    CursorLeft,
    CursorRight,
    CursorUp,
    CursorDown,
    /// Primary click on the cell under the cursor
    Activate,
    /// Cancel booster mode / secondary click
    Cancel,
    ToggleBombBooster,
    ToggleSwapBooster,
    /// Restart the current level (end overlay)
    Restart,
    /// Advance to the next level (win overlay)
    NextLevel,
}

/// Map keyboard input to UI actions
pub fn handle_key_event(key: KeyEvent) -> Option<UiAction> {
    match key.code {
        // Cursor movement
        KeyCode::Left | KeyCode::Char('h') | KeyCode::Char('H') => Some(UiAction::CursorLeft),
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Char('L') => Some(UiAction::CursorRight),
        KeyCode::Up | KeyCode::Char('k') | KeyCode::Char('K') => Some(UiAction::CursorUp),
        KeyCode::Down | KeyCode::Char('j') | KeyCode::Char('J') => Some(UiAction::CursorDown),

        // Actions
        KeyCode::Char(' ') | KeyCode::Enter => Some(UiAction::Activate),
        KeyCode::Esc => Some(UiAction::Cancel),

        // Boosters
        KeyCode::Char('b') | KeyCode::Char('B') => Some(UiAction::ToggleBombBooster),
        KeyCode::Char('s') | KeyCode::Char('S') => Some(UiAction::ToggleSwapBooster),

        // Session control
        KeyCode::Char('r') | KeyCode::Char('R') => Some(UiAction::Restart),
        KeyCode::Char('n') | KeyCode::Char('N') => Some(UiAction::NextLevel),

        _ => None,
    }
}

/// Check if key should quit the game
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q'))
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

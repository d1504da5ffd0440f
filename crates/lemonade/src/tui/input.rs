//! Maps terminal events onto lemonade actions.

use crossterm::event::{
    KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::layout::{Position, Rect};

/// What the user asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Tap the image.
    Tap,
    /// Recreate the screen.
    Reset,
    /// Leave the application.
    Quit,
}

/// Translates a key press.
pub fn key_action(key: KeyEvent) -> Option<Action> {
    if key.kind != KeyEventKind::Press {
        return None;
    }

    match key.code {
        KeyCode::Enter | KeyCode::Char(' ') => Some(Action::Tap),
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Some(Action::Quit),
        KeyCode::Char('r') => Some(Action::Reset),
        KeyCode::Char('q') | KeyCode::Esc => Some(Action::Quit),
        _ => None,
    }
}

/// Translates a mouse event. Only left clicks on the image count as taps.
pub fn mouse_action(mouse: MouseEvent, image_area: Rect) -> Option<Action> {
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left)
            if image_area.contains(Position::new(mouse.column, mouse.row)) =>
        {
            Some(Action::Tap)
        }
        _ => None,
    }
}

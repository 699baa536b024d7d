//! Key press to host action mapping.
//!
//! One key press stands for one completed gesture; there is no gesture
//! recognition in the terminal host.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use swipelist::Direction;

/// Something the user asked the host to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// One row up: one position in a list, one grid row in a grid.
    CursorUp,
    CursorDown,
    /// One position back or forward regardless of layout.
    CursorPrev,
    CursorNext,
    PageUp,
    PageDown,
    Top,
    Bottom,
    /// Drag the cursor row one position in the given direction.
    Drag(Direction),
    /// Swipe the cursor row away in the given direction.
    Swipe(Direction),
    ToggleDrag,
    ToggleSwipe,
    ToggleLayout,
    Reload,
    Quit,
}

/// Translate a key press. Releases, repeats of unbound keys and unknown
/// keys map to nothing.
pub fn action_for(key: KeyEvent) -> Option<Action> {
    if key.kind == KeyEventKind::Release {
        return None;
    }

    let shift = key.modifiers.contains(KeyModifiers::SHIFT);
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

    let action = match key.code {
        KeyCode::Char('c') if ctrl => Action::Quit,
        KeyCode::Char('q') | KeyCode::Esc => Action::Quit,
        KeyCode::Up if shift => Action::Drag(Direction::Up),
        KeyCode::Down if shift => Action::Drag(Direction::Down),
        KeyCode::Left if shift => Action::Drag(Direction::Left),
        KeyCode::Right if shift => Action::Drag(Direction::Right),
        KeyCode::Char('H') => Action::Drag(Direction::Left),
        KeyCode::Char('L') => Action::Drag(Direction::Right),
        KeyCode::Char('K') => Action::Drag(Direction::Up),
        KeyCode::Char('J') => Action::Drag(Direction::Down),
        KeyCode::Up | KeyCode::Char('k') => Action::CursorUp,
        KeyCode::Down | KeyCode::Char('j') => Action::CursorDown,
        KeyCode::BackTab => Action::CursorPrev,
        KeyCode::Tab => Action::CursorNext,
        KeyCode::PageUp => Action::PageUp,
        KeyCode::PageDown => Action::PageDown,
        KeyCode::Home => Action::Top,
        KeyCode::End => Action::Bottom,
        KeyCode::Left | KeyCode::Char('h') => Action::Swipe(Direction::Left),
        KeyCode::Right | KeyCode::Char('l') => Action::Swipe(Direction::Right),
        KeyCode::Delete | KeyCode::Char('d') => Action::Swipe(Direction::Right),
        KeyCode::Char('g') => Action::ToggleDrag,
        KeyCode::Char('s') => Action::ToggleSwipe,
        KeyCode::Char('v') => Action::ToggleLayout,
        KeyCode::Char('r') => Action::Reload,
        _ => return None,
    };

    Some(action)
}

//! Mapping from terminal events to driver decisions.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(
        key.code,
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc
    ) || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

/// True for a release of the primary (left) button.
pub fn is_primary_release(event: &MouseEvent) -> bool {
    matches!(event.kind, MouseEventKind::Up(MouseButton::Left))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    fn mouse(kind: MouseEventKind) -> MouseEvent {
        MouseEvent {
            kind,
            column: 3,
            row: 4,
            modifiers: KeyModifiers::NONE,
        }
    }

    #[test]
    fn test_quit_keys() {
        assert!(should_quit(KeyEvent::from(KeyCode::Char('q'))));
        assert!(should_quit(KeyEvent::from(KeyCode::Char('Q'))));
        assert!(should_quit(KeyEvent::from(KeyCode::Esc)));
        assert!(should_quit(KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL
        )));
        assert!(!should_quit(KeyEvent::from(KeyCode::Char('c'))));
        assert!(!should_quit(KeyEvent::from(KeyCode::Char('x'))));
    }

    #[test]
    fn test_only_left_release_counts() {
        assert!(is_primary_release(&mouse(MouseEventKind::Up(MouseButton::Left))));
        assert!(!is_primary_release(&mouse(MouseEventKind::Down(MouseButton::Left))));
        assert!(!is_primary_release(&mouse(MouseEventKind::Up(MouseButton::Right))));
        assert!(!is_primary_release(&mouse(MouseEventKind::Drag(MouseButton::Left))));
        assert!(!is_primary_release(&mouse(MouseEventKind::Moved)));
        assert!(!is_primary_release(&mouse(MouseEventKind::ScrollDown)));
    }
}

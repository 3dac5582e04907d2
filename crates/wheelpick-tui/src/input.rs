use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Input action that can be performed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    MoveUp,
    MoveDown,
    ScrollHalfPageDown,
    ScrollHalfPageUp,
    ScrollPageDown,
    ScrollPageUp,
    JumpToTop,
    JumpToBottom,
    PendingG, // First 'g' press, waiting for second 'g'
    Confirm,
    Cancel,
    None,
}

/// Handle a key event and return the corresponding action.
///
/// `pending_key` is the previous key when it started a two-key sequence.
pub fn handle_key_event(key: KeyEvent, pending_key: Option<char>) -> Action {
    match (key.code, key.modifiers) {
        // Leave without a selection
        (KeyCode::Char('q'), KeyModifiers::NONE) => Action::Cancel,
        (KeyCode::Esc, KeyModifiers::NONE) => Action::Cancel,
        (KeyCode::Char('c'), KeyModifiers::CONTROL) => Action::Cancel,

        // One item at a time
        (KeyCode::Char('j'), KeyModifiers::NONE) => Action::MoveDown,
        (KeyCode::Char('k'), KeyModifiers::NONE) => Action::MoveUp,
        (KeyCode::Down, KeyModifiers::NONE) => Action::MoveDown,
        (KeyCode::Up, KeyModifiers::NONE) => Action::MoveUp,

        // Scrolling
        (KeyCode::Char('d'), KeyModifiers::CONTROL) => Action::ScrollHalfPageDown,
        (KeyCode::Char('u'), KeyModifiers::CONTROL) => Action::ScrollHalfPageUp,
        (KeyCode::Char('f'), KeyModifiers::CONTROL) => Action::ScrollPageDown,
        (KeyCode::Char('b'), KeyModifiers::CONTROL) => Action::ScrollPageUp,
        (KeyCode::PageDown, _) => Action::ScrollPageDown,
        (KeyCode::PageUp, _) => Action::ScrollPageUp,

        // Jump to top/bottom
        (KeyCode::Char('g'), KeyModifiers::NONE) => {
            // gg requires double press
            if pending_key == Some('g') {
                Action::JumpToTop
            } else {
                Action::PendingG
            }
        }
        (KeyCode::Char('G'), KeyModifiers::SHIFT) => Action::JumpToBottom,
        (KeyCode::Home, _) => Action::JumpToTop,
        (KeyCode::End, _) => Action::JumpToBottom,

        (KeyCode::Enter, _) => Action::Confirm,
        (KeyCode::Char(' '), KeyModifiers::NONE) => Action::Confirm,

        _ => Action::None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_movement_keys() {
        assert_eq!(handle_key_event(key(KeyCode::Char('j')), None), Action::MoveDown);
        assert_eq!(handle_key_event(key(KeyCode::Up), None), Action::MoveUp);
        assert_eq!(
            handle_key_event(KeyEvent::new(KeyCode::Char('d'), KeyModifiers::CONTROL), None),
            Action::ScrollHalfPageDown
        );
    }

    #[test]
    fn test_double_g_jumps_to_top() {
        assert_eq!(handle_key_event(key(KeyCode::Char('g')), None), Action::PendingG);
        assert_eq!(
            handle_key_event(key(KeyCode::Char('g')), Some('g')),
            Action::JumpToTop
        );
        assert_eq!(
            handle_key_event(KeyEvent::new(KeyCode::Char('G'), KeyModifiers::SHIFT), None),
            Action::JumpToBottom
        );
    }

    #[test]
    fn test_confirm_and_cancel() {
        assert_eq!(handle_key_event(key(KeyCode::Enter), None), Action::Confirm);
        assert_eq!(handle_key_event(key(KeyCode::Esc), None), Action::Cancel);
        assert_eq!(handle_key_event(key(KeyCode::Char('q')), None), Action::Cancel);
        assert_eq!(handle_key_event(key(KeyCode::Char('x')), None), Action::None);
    }
}

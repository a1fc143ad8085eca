//! Key mapping from terminal events to commands.

use crate::types::GameAction;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// What a key press asks the front end to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Forward to the engine.
    Game(GameAction),
    /// Stop or resume gravity.
    TogglePause,
    /// Leave the program.
    Quit,
}

/// Map keyboard input to a command. Key releases map to nothing.
pub fn handle_key_event(key: KeyEvent) -> Option<Command> {
    if key.kind == KeyEventKind::Release {
        return None;
    }
    if should_quit(key) {
        return Some(Command::Quit);
    }

    let action = match key.code {
        // Movement
        KeyCode::Left | KeyCode::Char('h' | 'H' | 'a' | 'A') => GameAction::MoveLeft,
        KeyCode::Right | KeyCode::Char('l' | 'L' | 'd' | 'D') => GameAction::MoveRight,
        KeyCode::Down | KeyCode::Char('j' | 'J' | 's' | 'S') => GameAction::SoftDrop,

        // Rotation (clockwise only)
        KeyCode::Up | KeyCode::Char('k' | 'K' | 'w' | 'W' | ' ') => GameAction::Rotate,

        KeyCode::Char('r' | 'R') | KeyCode::F(2) => GameAction::Restart,
        KeyCode::Char('p' | 'P') | KeyCode::Esc => return Some(Command::TogglePause),

        _ => return None,
    };
    Some(Command::Game(action))
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q'))
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyEventState, KeyModifiers};

    fn game(code: KeyCode) -> Option<Command> {
        handle_key_event(KeyEvent::from(code))
    }

    #[test]
    fn test_movement_keys() {
        assert_eq!(game(KeyCode::Left), Some(Command::Game(GameAction::MoveLeft)));
        assert_eq!(game(KeyCode::Right), Some(Command::Game(GameAction::MoveRight)));
        assert_eq!(game(KeyCode::Down), Some(Command::Game(GameAction::SoftDrop)));
        assert_eq!(game(KeyCode::Char('H')), Some(Command::Game(GameAction::MoveLeft)));
        assert_eq!(game(KeyCode::Char('d')), Some(Command::Game(GameAction::MoveRight)));
        assert_eq!(game(KeyCode::Char('j')), Some(Command::Game(GameAction::SoftDrop)));
    }

    #[test]
    fn test_rotation_keys() {
        assert_eq!(game(KeyCode::Up), Some(Command::Game(GameAction::Rotate)));
        assert_eq!(game(KeyCode::Char('w')), Some(Command::Game(GameAction::Rotate)));
        assert_eq!(game(KeyCode::Char(' ')), Some(Command::Game(GameAction::Rotate)));
    }

    #[test]
    fn test_session_keys() {
        assert_eq!(game(KeyCode::Char('r')), Some(Command::Game(GameAction::Restart)));
        assert_eq!(game(KeyCode::Char('p')), Some(Command::TogglePause));
        assert_eq!(game(KeyCode::Esc), Some(Command::TogglePause));
        assert_eq!(game(KeyCode::Char('x')), None);
    }

    #[test]
    fn test_quit_keys() {
        assert!(should_quit(KeyEvent::from(KeyCode::Char('q'))));
        assert!(should_quit(KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL
        )));
        assert!(!should_quit(KeyEvent::from(KeyCode::Char('x'))));
        assert_eq!(game(KeyCode::Char('Q')), Some(Command::Quit));
    }

    #[test]
    fn test_release_is_ignored() {
        let release = KeyEvent {
            code: KeyCode::Left,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        };
        assert_eq!(handle_key_event(release), None);
    }
}

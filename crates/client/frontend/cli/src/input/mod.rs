//! Input processing for the CLI client.
//!
//! This module owns the keyboard-to-command mapping so the rest of the
//! application can remain agnostic about concrete key bindings or the
//! specifics of `crossterm` events.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind};
use game_core::{CardinalDirection, GameMode};

/// High-level outcome of processing a keyboard event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyAction {
    /// Exit the application.
    Quit,
    /// Steer the player (or move the menu selection on the start screen).
    Direction(CardinalDirection),
    TogglePause,
    /// Start the selected mode, or restart after a game over.
    Confirm,
    /// Pick a mode directly from the start screen.
    SelectMode(GameMode),
    /// Return to the start screen from the game-over overlay.
    Menu,
    /// No meaningful command was produced.
    None,
}

/// Translates `KeyEvent`s into commands.
#[derive(Debug, Default)]
pub struct InputHandler;

impl InputHandler {
    pub fn new() -> Self {
        Self
    }

    /// Converts a raw key event into a higher-level command.
    ///
    /// Key releases and repeats reported by some terminals are ignored.
    pub fn handle_key(&self, key: KeyEvent) -> KeyAction {
        if key.kind != KeyEventKind::Press {
            return KeyAction::None;
        }

        match key.code {
            KeyCode::Char(ch) => self.handle_char(ch),
            KeyCode::Left => KeyAction::Direction(CardinalDirection::Left),
            KeyCode::Right => KeyAction::Direction(CardinalDirection::Right),
            KeyCode::Up => KeyAction::Direction(CardinalDirection::Up),
            KeyCode::Down => KeyAction::Direction(CardinalDirection::Down),
            KeyCode::Enter => KeyAction::Confirm,
            KeyCode::Esc => KeyAction::Quit,
            _ => KeyAction::None,
        }
    }

    fn handle_char(&self, raw: char) -> KeyAction {
        match raw.to_ascii_lowercase() {
            'q' => KeyAction::Quit,
            'a' => KeyAction::Direction(CardinalDirection::Left),
            's' => KeyAction::Direction(CardinalDirection::Down),
            'w' => KeyAction::Direction(CardinalDirection::Up),
            'd' => KeyAction::Direction(CardinalDirection::Right),
            'p' => KeyAction::TogglePause,
            ' ' => KeyAction::Confirm,
            'm' => KeyAction::Menu,
            '1' => KeyAction::SelectMode(GameMode::Chase),
            '2' => KeyAction::SelectMode(GameMode::Snake),
            '3' => KeyAction::SelectMode(GameMode::Swarm),
            _ => KeyAction::None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyEventState, KeyModifiers};

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::empty(),
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    #[test]
    fn maps_arrows_and_wasd() {
        let handler = InputHandler::new();
        assert_eq!(
            handler.handle_key(key(KeyCode::Left)),
            KeyAction::Direction(CardinalDirection::Left)
        );
        assert_eq!(
            handler.handle_key(key(KeyCode::Char('W'))),
            KeyAction::Direction(CardinalDirection::Up)
        );
        assert_eq!(
            handler.handle_key(key(KeyCode::Char('s'))),
            KeyAction::Direction(CardinalDirection::Down)
        );
        assert_eq!(
            handler.handle_key(key(KeyCode::Char('d'))),
            KeyAction::Direction(CardinalDirection::Right)
        );
    }

    #[test]
    fn maps_lifecycle_keys() {
        let handler = InputHandler::new();
        assert_eq!(handler.handle_key(key(KeyCode::Enter)), KeyAction::Confirm);
        assert_eq!(
            handler.handle_key(key(KeyCode::Char(' '))),
            KeyAction::Confirm
        );
        assert_eq!(
            handler.handle_key(key(KeyCode::Char('P'))),
            KeyAction::TogglePause
        );
        assert_eq!(
            handler.handle_key(key(KeyCode::Char('3'))),
            KeyAction::SelectMode(GameMode::Swarm)
        );
        assert_eq!(handler.handle_key(key(KeyCode::Esc)), KeyAction::Quit);
        assert_eq!(handler.handle_key(key(KeyCode::Char('q'))), KeyAction::Quit);
    }

    #[test]
    fn ignores_unknown_keys_and_releases() {
        let handler = InputHandler::new();
        assert_eq!(
            handler.handle_key(key(KeyCode::Char('x'))),
            KeyAction::None
        );

        let mut release = key(KeyCode::Up);
        release.kind = KeyEventKind::Release;
        assert_eq!(handler.handle_key(release), KeyAction::None);
    }
}

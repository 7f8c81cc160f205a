//! # Input Types
//!
//! This crate defines the keystroke events fed to the document viewer's
//! key-sequence interpreter.
//!
//! ## Philosophy
//!
//! - **Events, not bytes**: Input is structured events, not raw scan codes or byte streams
//! - **Characters are typed, not assumed**: A keystroke either carries a character or it
//!   does not, and the distinction lives in the type
//! - **Testable**: Events are serializable and can be injected for testing
//!
//! ## Non-Goals
//!
//! This is NOT:
//! - Raw hardware scan codes (PS/2, USB HID)
//! - Key release or auto-repeat tracking
//! - A complete input subsystem (just the types)

use serde::{Deserialize, Serialize};
use std::fmt;

/// Input event
///
/// One physical keystroke. Keys that produce a printable character carry it in
/// the `Char` variant; everything else (Escape, Enter, arrows...) is a pure
/// key signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InputEvent {
    /// Key without a character
    Key(KeyCode),
    /// Key that produced a character
    Char { code: KeyCode, ch: char },
}

impl InputEvent {
    /// Creates a signal event for a non-character key
    pub fn key(code: KeyCode) -> Self {
        Self::Key(code)
    }

    /// Creates a character event, deriving the key code from the character
    pub fn from_char(ch: char) -> Self {
        Self::Char {
            code: KeyCode::for_char(ch),
            ch,
        }
    }

    /// Creates a character event with an explicit key code
    pub fn with_char(code: KeyCode, ch: char) -> Self {
        Self::Char { code, ch }
    }

    /// Returns the key identifier
    pub fn code(&self) -> KeyCode {
        match self {
            Self::Key(code) => *code,
            Self::Char { code, .. } => *code,
        }
    }

    /// Returns the character, if this key produced one
    pub fn character(&self) -> Option<char> {
        match self {
            Self::Key(_) => None,
            Self::Char { ch, .. } => Some(*ch),
        }
    }

    /// Returns true if this event carries a character
    pub fn is_char(&self) -> bool {
        matches!(self, Self::Char { .. })
    }

    /// Returns true for the Escape key
    pub fn is_escape(&self) -> bool {
        self.code() == KeyCode::Escape
    }

    /// Returns true for Return or the numeric-pad Enter
    pub fn is_enter(&self) -> bool {
        matches!(self.code(), KeyCode::Enter | KeyCode::NumpadEnter)
    }
}

impl From<char> for InputEvent {
    fn from(ch: char) -> Self {
        Self::from_char(ch)
    }
}

impl fmt::Display for InputEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Key(code) => write!(f, "<{}>", code),
            Self::Char { ch, .. } => write!(f, "{}", ch),
        }
    }
}

/// Key code
///
/// Logical key codes, not hardware scan codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum KeyCode {
    /// Letter key (A-Z, either case)
    Letter,
    /// Digit row key
    Digit,
    /// Numeric keypad digit
    NumpadDigit,
    /// Punctuation or symbol key
    Symbol,
    Space,

    // Special keys
    Escape,
    Enter,
    NumpadEnter,
    Tab,
    Backspace,
    Delete,
    Home,
    End,
    PageUp,
    PageDown,

    // Arrow keys
    Up,
    Down,
    Left,
    Right,

    // Unknown/unmapped key
    Unknown,
}

impl KeyCode {
    /// Classifies the key that would produce the given character
    pub fn for_char(ch: char) -> Self {
        match ch {
            'a'..='z' | 'A'..='Z' => KeyCode::Letter,
            '0'..='9' => KeyCode::Digit,
            ' ' => KeyCode::Space,
            c if c.is_ascii_punctuation() => KeyCode::Symbol,
            _ => KeyCode::Unknown,
        }
    }
}

impl fmt::Display for KeyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_char_event() {
        let event = InputEvent::from_char('g');

        assert!(event.is_char());
        assert_eq!(event.character(), Some('g'));
        assert_eq!(event.code(), KeyCode::Letter);
    }

    #[test]
    fn test_signal_event_has_no_character() {
        let event = InputEvent::key(KeyCode::Escape);

        assert!(!event.is_char());
        assert_eq!(event.character(), None);
        assert!(event.is_escape());
        assert!(!event.is_enter());
    }

    #[test]
    fn test_both_enter_variants() {
        assert!(InputEvent::key(KeyCode::Enter).is_enter());
        assert!(InputEvent::key(KeyCode::NumpadEnter).is_enter());
        assert!(!InputEvent::key(KeyCode::Tab).is_enter());
    }

    #[test]
    fn test_keycode_for_char() {
        assert_eq!(KeyCode::for_char('G'), KeyCode::Letter);
        assert_eq!(KeyCode::for_char('7'), KeyCode::Digit);
        assert_eq!(KeyCode::for_char('\''), KeyCode::Symbol);
        assert_eq!(KeyCode::for_char('?'), KeyCode::Symbol);
        assert_eq!(KeyCode::for_char(' '), KeyCode::Space);
        assert_eq!(KeyCode::for_char('é'), KeyCode::Unknown);
    }

    #[test]
    fn test_explicit_code_is_kept() {
        let event = InputEvent::with_char(KeyCode::NumpadDigit, '4');
        assert_eq!(event.code(), KeyCode::NumpadDigit);
        assert_eq!(event.character(), Some('4'));
    }

    #[test]
    fn test_display() {
        assert_eq!(InputEvent::from_char('m').to_string(), "m");
        assert_eq!(InputEvent::key(KeyCode::Escape).to_string(), "<Escape>");
    }

    #[test]
    fn test_input_event_serialization() {
        let event = InputEvent::from_char('[');
        let json = serde_json::to_string(&event).unwrap();
        let deserialized: InputEvent = serde_json::from_str(&json).unwrap();

        assert_eq!(event, deserialized);
    }
}

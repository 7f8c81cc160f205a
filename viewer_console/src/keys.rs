//! Key syntax
//!
//! Turns one line of console input into keystrokes. Plain characters map to
//! character-bearing events; `<name>` maps to a signal key.

use input_types::{InputEvent, KeyCode};
use thiserror::Error;

/// Key syntax error
#[derive(Debug, Error, PartialEq, Eq)]
pub enum KeySyntaxError {
    #[error("Unknown key name: <{0}>")]
    UnknownKey(String),

    #[error("Unterminated key name at column {0}")]
    Unterminated(usize),
}

/// Looks up a bracketed key name
fn named_key(name: &str) -> Result<InputEvent, KeySyntaxError> {
    match name.to_ascii_lowercase().as_str() {
        "esc" | "escape" => Ok(InputEvent::key(KeyCode::Escape)),
        "enter" | "cr" => Ok(InputEvent::key(KeyCode::Enter)),
        "kp-enter" => Ok(InputEvent::key(KeyCode::NumpadEnter)),
        "space" => Ok(InputEvent::from_char(' ')),
        "lt" => Ok(InputEvent::from_char('<')),
        _ => Err(KeySyntaxError::UnknownKey(name.to_string())),
    }
}

/// Parses a line into keystrokes (without the trailing Enter)
pub fn parse_line(line: &str) -> Result<Vec<InputEvent>, KeySyntaxError> {
    let mut events = Vec::new();
    let mut chars = line.char_indices();

    while let Some((column, ch)) = chars.next() {
        if ch != '<' {
            events.push(InputEvent::from_char(ch));
            continue;
        }

        let rest = &line[column + 1..];
        let end = rest.find('>').ok_or(KeySyntaxError::Unterminated(column))?;
        events.push(named_key(&rest[..end])?);

        // Skip past the name and the closing '>'
        for _ in 0..=rest[..end].chars().count() {
            chars.next();
        }
    }

    Ok(events)
}

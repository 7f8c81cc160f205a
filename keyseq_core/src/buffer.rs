//! Sequence buffer

use input_types::InputEvent;

use crate::error::{SequenceError, SequenceResult};

/// Ordered list of pending keystrokes
///
/// Append-only apart from a full `clear` or removing exactly one element from
/// either end. Never reordered.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SequenceBuffer {
    events: Vec<InputEvent>,
}

impl SequenceBuffer {
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    pub fn append(&mut self, event: InputEvent) {
        self.events.push(event);
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }

    /// Remove the oldest keystroke
    pub fn pop_first(&mut self) -> SequenceResult<InputEvent> {
        if self.events.is_empty() {
            return Err(SequenceError::EmptyBuffer);
        }
        Ok(self.events.remove(0))
    }

    /// Remove the newest keystroke
    pub fn pop_last(&mut self) -> SequenceResult<InputEvent> {
        self.events.pop().ok_or(SequenceError::EmptyBuffer)
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn first(&self) -> Option<&InputEvent> {
        self.events.first()
    }

    pub fn last(&self) -> Option<&InputEvent> {
        self.events.last()
    }

    pub fn get(&self, index: usize) -> Option<&InputEvent> {
        self.events.get(index)
    }

    pub fn events(&self) -> &[InputEvent] {
        &self.events
    }

    /// Character of the oldest keystroke, if it has one
    pub fn first_character(&self) -> Option<char> {
        self.first().and_then(InputEvent::character)
    }

    /// Concatenate the characters of every keystroke in typed order.
    ///
    /// An empty buffer renders as `placeholder`. A keystroke without a
    /// character is a contract violation of the event source.
    pub fn render_text(&self, placeholder: &str) -> SequenceResult<String> {
        if self.events.is_empty() {
            return Ok(placeholder.to_string());
        }
        self.characters()
    }

    /// The typed characters alone; empty for an empty buffer
    pub fn characters(&self) -> SequenceResult<String> {
        self.events
            .iter()
            .enumerate()
            .map(|(index, event)| {
                event.character().ok_or(SequenceError::MissingCharacter {
                    index,
                    code: event.code(),
                })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use input_types::KeyCode;

    fn typed(text: &str) -> SequenceBuffer {
        let mut buffer = SequenceBuffer::new();
        for ch in text.chars() {
            buffer.append(InputEvent::from_char(ch));
        }
        buffer
    }

    #[test]
    fn test_render_in_typed_order() {
        assert_eq!(typed("l42").render_text("-").unwrap(), "l42");
    }

    #[test]
    fn test_render_empty_is_placeholder() {
        let buffer = SequenceBuffer::new();
        assert_eq!(
            buffer.render_text("Press ? to show help.").unwrap(),
            "Press ? to show help."
        );
    }

    #[test]
    fn test_render_signal_key_is_violation() {
        let mut buffer = typed("g");
        buffer.append(InputEvent::key(KeyCode::Left));

        assert_eq!(
            buffer.render_text("-"),
            Err(SequenceError::MissingCharacter {
                index: 1,
                code: KeyCode::Left
            })
        );
    }

    #[test]
    fn test_characters_ignore_placeholder() {
        assert_eq!(SequenceBuffer::new().characters().unwrap(), "");
        assert_eq!(typed("l7").characters().unwrap(), "l7");
    }

    #[test]
    fn test_pop_both_ends() {
        let mut buffer = typed("abc");

        assert_eq!(buffer.pop_first().unwrap().character(), Some('a'));
        assert_eq!(buffer.pop_last().unwrap().character(), Some('c'));
        assert_eq!(buffer.len(), 1);
        assert_eq!(buffer.first_character(), Some('b'));
    }

    #[test]
    fn test_pop_empty_is_violation() {
        let mut buffer = SequenceBuffer::new();
        assert_eq!(buffer.pop_first(), Err(SequenceError::EmptyBuffer));
        assert_eq!(buffer.pop_last(), Err(SequenceError::EmptyBuffer));
    }

    #[test]
    fn test_clear() {
        let mut buffer = typed("gx");
        buffer.clear();
        assert!(buffer.is_empty());
        assert_eq!(buffer.first(), None);
    }
}

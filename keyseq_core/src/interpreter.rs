//! Interpreter
//!
//! Owns the sequence buffer, the dispatcher and the configuration. One
//! `feed` call per keystroke, strictly sequential.

use input_types::InputEvent;

use crate::buffer::SequenceBuffer;
use crate::command::Command;
use crate::config::InterpreterConfig;
use crate::dispatcher::Dispatcher;
use crate::error::SequenceResult;
use crate::rules::RuleContext;
use crate::tokens::TokenTable;

/// Key-sequence interpreter
#[derive(Debug)]
pub struct Interpreter {
    buffer: SequenceBuffer,
    dispatcher: Dispatcher,
    tokens: TokenTable,
    config: InterpreterConfig,
}

impl Interpreter {
    /// Create an interpreter with the default configuration
    pub fn new() -> Self {
        Self::with_config(InterpreterConfig::default())
    }

    pub fn with_config(config: InterpreterConfig) -> Self {
        Self {
            buffer: SequenceBuffer::new(),
            dispatcher: Dispatcher::standard(),
            tokens: TokenTable::standard(),
            config,
        }
    }

    /// Replace the token table
    pub fn with_tokens(mut self, tokens: TokenTable) -> Self {
        self.tokens = tokens;
        self
    }

    /// Append one keystroke and run a dispatch pass.
    ///
    /// Returns every command the pass emitted, in rule order: zero, one or
    /// two of them. An error means the event source broke its contract; the
    /// buffer is left as it was when the violation was detected.
    pub fn feed(&mut self, event: InputEvent) -> SequenceResult<Vec<Command>> {
        tracing::trace!(target: "keyseq.dispatch", key = %event, "keystroke");
        self.buffer.append(event);
        self.dispatch()
    }

    /// Run a dispatch pass over the current buffer without appending.
    /// Never emits on an empty buffer.
    pub fn dispatch(&mut self) -> SequenceResult<Vec<Command>> {
        if self.buffer.is_empty() {
            return Ok(Vec::new());
        }

        let ctx = RuleContext::new(&self.config, &self.tokens);
        self.dispatcher
            .run(&mut self.buffer, &ctx)
            .inspect_err(|err| {
                tracing::warn!(target: "keyseq.dispatch", error = %err, "event source contract violation");
            })
    }

    /// Discard every pending keystroke
    pub fn reset(&mut self) {
        self.buffer.clear();
    }

    pub fn buffer(&self) -> &SequenceBuffer {
        &self.buffer
    }

    pub fn config(&self) -> &InterpreterConfig {
        &self.config
    }

    /// Pending keys as text, or the placeholder when nothing is pending
    pub fn pending_text(&self) -> SequenceResult<String> {
        self.buffer.render_text(&self.config.placeholder)
    }
}

impl Default for Interpreter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command::CommandType;
    use crate::error::SequenceError;
    use input_types::KeyCode;

    #[test]
    fn test_empty_dispatch_is_noop() {
        let mut interpreter = Interpreter::new();
        assert_eq!(interpreter.dispatch().unwrap(), Vec::new());
        assert!(interpreter.buffer().is_empty());
    }

    #[test]
    fn test_pending_text() {
        let mut interpreter = Interpreter::new();
        assert_eq!(interpreter.pending_text().unwrap(), "Press ? to show help.");

        interpreter.feed(InputEvent::from_char('1')).unwrap();
        interpreter.feed(InputEvent::from_char('2')).unwrap();
        assert_eq!(interpreter.pending_text().unwrap(), "12");
    }

    #[test]
    fn test_custom_placeholder_flows_into_messages() {
        let config = InterpreterConfig {
            placeholder: "ready".to_string(),
            ..InterpreterConfig::default()
        };
        let mut interpreter = Interpreter::with_config(config);

        let out = interpreter.feed(InputEvent::from_char('G')).unwrap();
        assert_eq!(out, vec![Command::new(":ready", CommandType::LastPage)]);
    }

    #[test]
    fn test_violation_then_escape_recovers() {
        let mut interpreter = Interpreter::new();
        interpreter.feed(InputEvent::from_char('g')).unwrap();

        let err = interpreter.feed(InputEvent::key(KeyCode::PageDown)).unwrap_err();
        assert_eq!(
            err,
            SequenceError::MissingCharacter {
                index: 1,
                code: KeyCode::PageDown
            }
        );
        assert_eq!(interpreter.buffer().len(), 2);

        let out = interpreter.feed(InputEvent::key(KeyCode::Escape)).unwrap();
        assert_eq!(out.len(), 1);
        assert!(interpreter.buffer().is_empty());
    }

    #[test]
    fn test_reset() {
        let mut interpreter = Interpreter::new();
        interpreter.feed(InputEvent::from_char('4')).unwrap();
        interpreter.reset();
        assert!(interpreter.buffer().is_empty());
    }
}

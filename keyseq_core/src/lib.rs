//! # Key Sequence Core
//!
//! The modal key-sequence interpreter of the document viewer.
//!
//! ## Philosophy
//!
//! - **The buffer is the state**: No named modes; the typed keystrokes are the only state
//! - **Ordered rules**: Six independent grammar rules run in a fixed order on every keystroke
//! - **Zero, one or two commands per keystroke**: Callers never assume exactly one
//! - **No I/O**: Commands are returned to the host, which performs the side effects
//!
//! ## Design
//!
//! The core provides:
//! - SequenceBuffer: The ordered list of pending keystrokes
//! - Command: The structured output vocabulary
//! - GrammarRule: Escape, Enter, Mark-Set, Mark-Load, Text-Command, List-Preview
//! - Dispatcher: Runs the rules in priority order over the live buffer
//! - Interpreter: Owns buffer, dispatcher and configuration

pub mod buffer;
pub mod command;
pub mod config;
pub mod dispatcher;
pub mod error;
pub mod interpreter;
pub mod rules;
pub mod tokens;

pub use buffer::SequenceBuffer;
pub use command::{keys, Command, CommandType, Metadata, MetadataValue};
pub use config::{EscapePolicy, InterpreterConfig};
pub use dispatcher::Dispatcher;
pub use error::{SequenceError, SequenceResult};
pub use interpreter::Interpreter;
pub use rules::{
    EnterRule, EscapeRule, GrammarRule, ListPreviewRule, MarkLoadRule, MarkSetRule, RuleContext,
    TextCommandRule,
};
pub use tokens::{TokenTable, HELP_TEXT};

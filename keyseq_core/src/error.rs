//! Interpreter errors
//!
//! Only contract violations of the event source are errors. Bad user input
//! (an unparsable page number, an unknown key sequence) never is.

use input_types::KeyCode;
use thiserror::Error;

/// Sequence buffer contract violation
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum SequenceError {
    #[error("Cannot remove a keystroke from an empty sequence buffer")]
    EmptyBuffer,

    #[error("Keystroke {index} ({code}) carries no character but was read as text")]
    MissingCharacter { index: usize, code: KeyCode },
}

/// Sequence result
pub type SequenceResult<T> = Result<T, SequenceError>;

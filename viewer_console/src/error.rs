//! Console errors

use crate::keys::KeySyntaxError;
use keyseq_core::SequenceError;
use services_doc_store::StoreError;
use services_viewer::ViewerError;
use thiserror::Error;

/// Console error
#[derive(Debug, Error)]
pub enum ConsoleError {
    #[error("Key sequence error: {0}")]
    Sequence(#[from] SequenceError),

    #[error("Key syntax error: {0}")]
    KeySyntax(#[from] KeySyntaxError),

    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    #[error("Viewer error: {0}")]
    Viewer(#[from] ViewerError),

    #[error("Invalid config: {0}")]
    Config(String),

    #[error("Unsupported config version: {0}")]
    UnsupportedConfigVersion(u32),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Console result
pub type ConsoleResult<T> = Result<T, ConsoleError>;

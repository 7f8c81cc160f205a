//! # Viewer Service
//!
//! Executes the commands produced by the key-sequence interpreter against the
//! document viewer's navigation state.
//!
//! ## Philosophy
//!
//! - **Commands in, state out**: The viewer never looks at keystrokes
//! - **Any number of commands per keystroke**: Each command is applied on its own
//! - **Explicit file selection**: Opening a file goes through a `FileDialog` supplied by the host
//!
//! ## Non-Goals
//!
//! This is NOT:
//! - A page renderer
//! - A window or view manager
//!
//! ## Design
//!
//! - `ViewerState` holds the open document, current page, marks and jump history
//! - `Viewer` applies commands and records opens in the document store

pub mod dialog;
pub mod state;
pub mod viewer;

pub use dialog::{FileDialog, NoDialog, ScriptedDialog};
pub use state::{OpenDocument, ViewerState};
pub use viewer::{Viewer, ViewerAction, ViewerError, ViewerResult};

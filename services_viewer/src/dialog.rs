//! File selection

use std::collections::VecDeque;

/// Asks the user for a document to open
pub trait FileDialog {
    /// Returns the chosen URL, or None if the user cancelled
    fn pick(&mut self) -> Option<String>;
}

/// Dialog that always cancels
#[derive(Debug, Default, Clone, Copy)]
pub struct NoDialog;

impl FileDialog for NoDialog {
    fn pick(&mut self) -> Option<String> {
        None
    }
}

/// Dialog that answers from a fixed queue (for tests and scripted sessions)
#[derive(Debug, Default, Clone)]
pub struct ScriptedDialog {
    answers: VecDeque<Option<String>>,
}

impl ScriptedDialog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a chosen file
    pub fn choose(mut self, url: impl Into<String>) -> Self {
        self.answers.push_back(Some(url.into()));
        self
    }

    /// Queue a cancellation
    pub fn cancel(mut self) -> Self {
        self.answers.push_back(None);
        self
    }
}

impl FileDialog for ScriptedDialog {
    fn pick(&mut self) -> Option<String> {
        self.answers.pop_front().flatten()
    }
}

//! Token table and help text
//!
//! The fixed strings recognized by the text-command rule. Matching is exact
//! and case-sensitive.

use crate::command::CommandType;

/// Key-binding guide emitted with `Help`
pub const HELP_TEXT: &str = "Key bindings\n\
     \n\
     o            Open a file\n\
     gg / G       First / last page\n\
     j / d        Next page\n\
     k / u        Previous page\n\
     b / [        Back\n\
     w / ]        Forward\n\
     t            Toggle page layout\n\
     <n> Enter    Go to page n\n\
     m<c>         Set mark c\n\
     '<c>         Jump to mark c\n\
     l<n> Enter   Open the n-th recent document\n\
     Esc          Cancel the pending keys\n\
     ?            Show this help";

const STANDARD_TOKENS: &[(&str, CommandType)] = &[
    ("o", CommandType::OpenFile),
    ("gg", CommandType::FirstPage),
    ("G", CommandType::LastPage),
    ("t", CommandType::Toggle),
    ("d", CommandType::Down),
    ("j", CommandType::Down),
    ("u", CommandType::Up),
    ("k", CommandType::Up),
    ("[", CommandType::Back),
    ("b", CommandType::Back),
    ("]", CommandType::Forward),
    ("w", CommandType::Forward),
    ("?", CommandType::Help),
];

/// Static token -> command type lookup
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TokenTable {
    entries: &'static [(&'static str, CommandType)],
    help_text: &'static str,
}

impl TokenTable {
    pub const fn new(
        entries: &'static [(&'static str, CommandType)],
        help_text: &'static str,
    ) -> Self {
        Self { entries, help_text }
    }

    /// The viewer's key bindings
    pub const fn standard() -> Self {
        Self::new(STANDARD_TOKENS, HELP_TEXT)
    }

    pub fn lookup(&self, token: &str) -> Option<CommandType> {
        self.entries
            .iter()
            .find(|(t, _)| *t == token)
            .map(|(_, kind)| *kind)
    }

    pub fn entries(&self) -> &'static [(&'static str, CommandType)] {
        self.entries
    }

    pub fn help_text(&self) -> &'static str {
        self.help_text
    }
}

impl Default for TokenTable {
    fn default() -> Self {
        Self::standard()
    }
}

//! Command execution

use crate::dialog::FileDialog;
use crate::state::{OpenDocument, ViewerState};
use keyseq_core::{Command, CommandType};
use services_doc_store::{DocId, DocStore, StoreError};
use thiserror::Error;

/// Viewer error
#[derive(Debug, Error)]
pub enum ViewerError {
    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    #[error("No document is open")]
    NoDocument,

    #[error("Mark '{0}' is not set")]
    UnknownMark(char),

    #[error("Page {page} is out of range (1-{page_count})")]
    PageOutOfRange { page: i64, page_count: usize },

    #[error("No recent document number {0}")]
    NoRecentDocument(i64),

    #[error("{0} command is missing its argument")]
    MissingArgument(CommandType),
}

/// Viewer result
pub type ViewerResult<T> = Result<T, ViewerError>;

/// What a command did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewerAction {
    /// Nothing visible besides the status line
    Continue,
    /// Now showing this page
    Moved(usize),
    /// A document was opened
    Opened(DocId),
}

/// The document viewer's command sink
#[derive(Debug)]
pub struct Viewer {
    state: ViewerState,
    store: DocStore,
}

impl Viewer {
    /// Create a viewer with an empty document store
    pub fn new(page_count: usize) -> Self {
        Self::with_store(DocStore::new(), page_count)
    }

    pub fn with_store(store: DocStore, page_count: usize) -> Self {
        Self {
            state: ViewerState::new(page_count),
            store,
        }
    }

    pub fn state(&self) -> &ViewerState {
        &self.state
    }

    pub fn store(&self) -> &DocStore {
        &self.store
    }

    /// Apply a command; failures end up on the status line
    pub fn execute(&mut self, command: &Command, dialog: &mut dyn FileDialog) -> ViewerAction {
        match self.apply(command, dialog) {
            Ok(action) => action,
            Err(err) => {
                tracing::warn!(target: "viewer", kind = %command.kind, error = %err, "command failed");
                self.state.set_status_message(err.to_string());
                ViewerAction::Continue
            }
        }
    }

    /// Apply a command
    pub fn apply(
        &mut self,
        command: &Command,
        dialog: &mut dyn FileDialog,
    ) -> ViewerResult<ViewerAction> {
        tracing::debug!(target: "viewer", kind = %command.kind, "apply command");
        self.state.set_status_message(command.message.as_str());

        match command.kind {
            CommandType::Standstill | CommandType::Help => Ok(ViewerAction::Continue),

            CommandType::List => {
                let listing = self.recent_listing();
                self.state
                    .set_status_message(format!("{}\n{}", command.message, listing));
                Ok(ViewerAction::Continue)
            }

            CommandType::OpenFile => match dialog.pick() {
                Some(url) => Ok(ViewerAction::Opened(self.open_url(url))),
                None => Ok(ViewerAction::Continue),
            },

            CommandType::OpenRecentDoc => {
                let order = command
                    .order()
                    .ok_or(ViewerError::MissingArgument(command.kind))?;
                let url = self
                    .store
                    .nth_most_recent(order)
                    .map(|record| record.url.clone())
                    .ok_or(ViewerError::NoRecentDocument(order))?;
                Ok(ViewerAction::Opened(self.open_url(url)))
            }

            CommandType::Goto => {
                let page = command
                    .page_num()
                    .ok_or(ViewerError::MissingArgument(command.kind))?;
                self.require_document()?;
                let target = usize::try_from(page)
                    .ok()
                    .filter(|p| (1..=self.state.page_count()).contains(p))
                    .ok_or(ViewerError::PageOutOfRange {
                        page,
                        page_count: self.state.page_count(),
                    })?;
                self.state.jump_to(target);
                Ok(self.moved())
            }

            CommandType::FirstPage => {
                self.require_document()?;
                self.state.jump_to(1);
                Ok(self.moved())
            }

            CommandType::LastPage => {
                self.require_document()?;
                self.state.jump_to(self.state.page_count());
                Ok(self.moved())
            }

            CommandType::Down => {
                self.require_document()?;
                self.state.scroll_to(self.state.page() + 1);
                Ok(self.moved())
            }

            CommandType::Up => {
                self.require_document()?;
                self.state.scroll_to(self.state.page().saturating_sub(1));
                Ok(self.moved())
            }

            CommandType::Back => {
                self.require_document()?;
                self.state.go_back();
                Ok(self.moved())
            }

            CommandType::Forward => {
                self.require_document()?;
                self.state.go_forward();
                Ok(self.moved())
            }

            CommandType::Toggle => {
                self.state.toggle_layout();
                Ok(ViewerAction::Continue)
            }

            CommandType::Mark => {
                let label = command
                    .mark_character()
                    .ok_or(ViewerError::MissingArgument(command.kind))?;
                self.require_document()?;
                self.state.set_mark(label);
                Ok(ViewerAction::Continue)
            }

            CommandType::LoadMark => {
                let label = command
                    .mark_character()
                    .ok_or(ViewerError::MissingArgument(command.kind))?;
                self.require_document()?;
                let page = self.state.mark(label).ok_or(ViewerError::UnknownMark(label))?;
                self.state.jump_to(page);
                Ok(self.moved())
            }
        }
    }

    /// Record the open in the store and show the document
    pub fn open_url(&mut self, url: String) -> DocId {
        let id = self.store.upsert_opened(&url);
        tracing::info!(target: "viewer", url = %url, "document opened");
        self.state.open(OpenDocument { id, url });
        id
    }

    fn require_document(&self) -> ViewerResult<()> {
        self.state
            .document()
            .map(|_| ())
            .ok_or(ViewerError::NoDocument)
    }

    fn moved(&self) -> ViewerAction {
        ViewerAction::Moved(self.state.page())
    }

    fn recent_listing(&self) -> String {
        if self.store.is_empty() {
            return "(no recent documents)".to_string();
        }
        self.store
            .recently_opened()
            .iter()
            .enumerate()
            .map(|(i, record)| format!("{}. {}", i + 1, record.url))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

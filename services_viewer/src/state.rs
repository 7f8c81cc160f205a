//! Viewer navigation state

use services_doc_store::DocId;
use std::collections::BTreeMap;

/// The document on screen
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpenDocument {
    pub id: DocId,
    pub url: String,
}

/// Viewer state
///
/// Pages are 1-based. Marks and jump history belong to the open document and
/// are dropped when another document is opened.
#[derive(Debug, Clone)]
pub struct ViewerState {
    document: Option<OpenDocument>,
    page: usize,
    page_count: usize,
    two_page: bool,
    marks: BTreeMap<char, usize>,
    back: Vec<usize>,
    forward: Vec<usize>,
    status_message: String,
}

impl ViewerState {
    pub fn new(page_count: usize) -> Self {
        Self {
            document: None,
            page: 1,
            page_count: page_count.max(1),
            two_page: false,
            marks: BTreeMap::new(),
            back: Vec::new(),
            forward: Vec::new(),
            status_message: String::new(),
        }
    }

    pub fn document(&self) -> Option<&OpenDocument> {
        self.document.as_ref()
    }

    /// Show a new document from its first page
    pub fn open(&mut self, document: OpenDocument) {
        self.document = Some(document);
        self.page = 1;
        self.marks.clear();
        self.back.clear();
        self.forward.clear();
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn page_count(&self) -> usize {
        self.page_count
    }

    pub fn is_two_page(&self) -> bool {
        self.two_page
    }

    pub fn toggle_layout(&mut self) {
        self.two_page = !self.two_page;
    }

    /// Move without touching the jump history (scrolling)
    pub fn scroll_to(&mut self, page: usize) {
        self.page = page.clamp(1, self.page_count);
    }

    /// Move and remember where we came from
    pub fn jump_to(&mut self, page: usize) {
        let target = page.clamp(1, self.page_count);
        if target == self.page {
            return;
        }
        self.back.push(self.page);
        self.forward.clear();
        self.page = target;
    }

    /// Returns false when there is nothing to go back to
    pub fn go_back(&mut self) -> bool {
        match self.back.pop() {
            Some(page) => {
                self.forward.push(self.page);
                self.page = page;
                true
            }
            None => false,
        }
    }

    /// Returns false when there is nothing to go forward to
    pub fn go_forward(&mut self) -> bool {
        match self.forward.pop() {
            Some(page) => {
                self.back.push(self.page);
                self.page = page;
                true
            }
            None => false,
        }
    }

    pub fn set_mark(&mut self, label: char) {
        self.marks.insert(label, self.page);
    }

    pub fn mark(&self, label: char) -> Option<usize> {
        self.marks.get(&label).copied()
    }

    pub fn status_message(&self) -> &str {
        &self.status_message
    }

    pub fn set_status_message(&mut self, msg: impl Into<String>) {
        self.status_message = msg.into();
    }
}

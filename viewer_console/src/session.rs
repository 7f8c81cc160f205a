//! Console session
//!
//! Feeds keystrokes to the interpreter one at a time and forwards every
//! emitted command to the viewer, then renders the status line.

use crate::config::ConsoleConfig;
use crate::error::ConsoleResult;
use crate::keys::parse_line;
use input_types::{InputEvent, KeyCode};
use keyseq_core::Interpreter;
use services_doc_store::{load_or_default, save_store, DocStore};
use services_viewer::{FileDialog, Viewer, ViewerAction};
use std::io::{BufRead, Write};
use std::path::PathBuf;

/// File dialog that reads the next input line as the path
pub struct LineDialog<'a, R: BufRead> {
    reader: &'a mut R,
}

impl<'a, R: BufRead> LineDialog<'a, R> {
    pub fn new(reader: &'a mut R) -> Self {
        Self { reader }
    }
}

impl<R: BufRead> FileDialog for LineDialog<'_, R> {
    fn pick(&mut self) -> Option<String> {
        let mut line = String::new();
        match self.reader.read_line(&mut line) {
            Ok(0) => None,
            Ok(_) => {
                let path = line.trim();
                (!path.is_empty()).then(|| path.to_string())
            }
            Err(err) => {
                tracing::warn!(error = %err, "failed to read file path");
                None
            }
        }
    }
}

/// An interpreter wired to a viewer
#[derive(Debug)]
pub struct ConsoleSession {
    interpreter: Interpreter,
    viewer: Viewer,
    store_path: Option<PathBuf>,
}

impl ConsoleSession {
    /// Build a session from its config, loading the document store if one is
    /// configured
    pub fn from_config(config: &ConsoleConfig) -> ConsoleResult<Self> {
        let store = match &config.store_path {
            Some(path) => load_or_default(path)?,
            None => DocStore::new(),
        };

        Ok(Self {
            interpreter: Interpreter::with_config(config.interpreter.clone()),
            viewer: Viewer::with_store(store, config.page_count),
            store_path: config.store_path.clone(),
        })
    }

    pub fn interpreter(&self) -> &Interpreter {
        &self.interpreter
    }

    pub fn viewer(&self) -> &Viewer {
        &self.viewer
    }

    /// Feed one keystroke.
    ///
    /// A key sequence error leaves the interpreter reset so the next
    /// keystroke starts from an empty buffer.
    pub fn handle_key(
        &mut self,
        event: InputEvent,
        dialog: &mut dyn FileDialog,
    ) -> ConsoleResult<Vec<ViewerAction>> {
        let commands = match self.interpreter.feed(event) {
            Ok(commands) => commands,
            Err(err) => {
                self.interpreter.reset();
                return Err(err.into());
            }
        };

        let mut actions = Vec::with_capacity(commands.len());
        for command in &commands {
            let action = self.viewer.execute(command, dialog);
            if matches!(action, ViewerAction::Opened(_)) {
                self.save()?;
            }
            actions.push(action);
        }
        Ok(actions)
    }

    /// Feed one line of input: its keystrokes followed by Enter
    pub fn handle_line(
        &mut self,
        line: &str,
        dialog: &mut dyn FileDialog,
    ) -> ConsoleResult<Vec<ViewerAction>> {
        let mut events = parse_line(line)?;
        events.push(InputEvent::key(KeyCode::Enter));

        let mut actions = Vec::new();
        for event in events {
            actions.extend(self.handle_key(event, dialog)?);
        }
        Ok(actions)
    }

    /// The status line as the console prints it
    pub fn render_status(&self) -> String {
        let state = self.viewer.state();
        let location = match state.document() {
            Some(doc) => format!(
                "[{} {}/{}{}]",
                doc.url,
                state.page(),
                state.page_count(),
                if state.is_two_page() { " two-page" } else { "" }
            ),
            None => "[no document]".to_string(),
        };
        format!("{} {}", location, state.status_message())
    }

    /// Run until the input is exhausted
    pub fn run<R: BufRead, W: Write>(&mut self, mut input: R, mut output: W) -> ConsoleResult<()> {
        writeln!(output, "{}", self.interpreter.config().placeholder)?;

        let mut line = String::new();
        loop {
            line.clear();
            if input.read_line(&mut line)? == 0 {
                break;
            }
            let keys = line.trim_end_matches(['\r', '\n']).to_string();

            let mut dialog = LineDialog::new(&mut input);
            match self.handle_line(&keys, &mut dialog) {
                Ok(_) => writeln!(output, "{}", self.render_status())?,
                Err(err) => {
                    tracing::warn!(error = %err, "input rejected");
                    writeln!(output, "error: {}", err)?;
                }
            }
            output.flush()?;
        }
        Ok(())
    }

    fn save(&self) -> ConsoleResult<()> {
        if let Some(path) = &self.store_path {
            save_store(self.viewer.store(), path)?;
        }
        Ok(())
    }
}

//! Command model
//!
//! The interpreter's output vocabulary. Commands are plain values handed to
//! the host; the interpreter never executes them.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Metadata keys carried by commands
pub mod keys {
    /// Target page of `Goto`
    pub const PAGE_NUM: &str = "pageNum";
    /// Recency rank of `OpenRecentDoc`
    pub const ORDER: &str = "order";
    /// Mark label of `Mark` and `LoadMark`
    pub const CHARACTER: &str = "character";
}

/// Command type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CommandType {
    Goto,
    OpenFile,
    FirstPage,
    LastPage,
    Down,
    Up,
    Back,
    Forward,
    Toggle,
    Mark,
    LoadMark,
    List,
    OpenRecentDoc,
    Help,
    /// Nothing to execute; only the message changes
    Standstill,
}

impl CommandType {
    pub fn as_str(&self) -> &'static str {
        match self {
            CommandType::Goto => "goto",
            CommandType::OpenFile => "open-file",
            CommandType::FirstPage => "first-page",
            CommandType::LastPage => "last-page",
            CommandType::Down => "down",
            CommandType::Up => "up",
            CommandType::Back => "back",
            CommandType::Forward => "forward",
            CommandType::Toggle => "toggle",
            CommandType::Mark => "mark",
            CommandType::LoadMark => "load-mark",
            CommandType::List => "list",
            CommandType::OpenRecentDoc => "open-recent-doc",
            CommandType::Help => "help",
            CommandType::Standstill => "standstill",
        }
    }
}

impl fmt::Display for CommandType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Metadata value (strongly typed)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MetadataValue {
    Integer(i64),
    Character(char),
}

impl MetadataValue {
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            MetadataValue::Integer(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_character(&self) -> Option<char> {
        match self {
            MetadataValue::Character(v) => Some(*v),
            _ => None,
        }
    }
}

impl fmt::Display for MetadataValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MetadataValue::Integer(v) => write!(f, "{}", v),
            MetadataValue::Character(v) => write!(f, "{}", v),
        }
    }
}

/// Free-form key/value metadata, ordered by key
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Metadata(BTreeMap<String, MetadataValue>);

impl Metadata {
    pub fn new() -> Self {
        Self(BTreeMap::new())
    }

    /// Metadata holding a single entry
    pub fn single(key: impl Into<String>, value: MetadataValue) -> Self {
        Self::new().with(key, value)
    }

    pub fn with(mut self, key: impl Into<String>, value: MetadataValue) -> Self {
        self.insert(key, value);
        self
    }

    pub fn insert(&mut self, key: impl Into<String>, value: MetadataValue) {
        self.0.insert(key.into(), value);
    }

    pub fn get(&self, key: &str) -> Option<&MetadataValue> {
        self.0.get(key)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &MetadataValue)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }
}

/// A recognized (or echoed) key sequence
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Command {
    /// Text for the status line
    pub message: String,
    pub kind: CommandType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Metadata>,
}

impl Command {
    /// Command without metadata
    pub fn new(message: impl Into<String>, kind: CommandType) -> Self {
        Self {
            message: message.into(),
            kind,
            metadata: None,
        }
    }

    pub fn with_metadata(message: impl Into<String>, kind: CommandType, metadata: Metadata) -> Self {
        Self {
            message: message.into(),
            kind,
            metadata: Some(metadata),
        }
    }

    fn meta(&self, key: &str) -> Option<&MetadataValue> {
        self.metadata.as_ref().and_then(|m| m.get(key))
    }

    /// `pageNum` of a `Goto`
    pub fn page_num(&self) -> Option<i64> {
        self.meta(keys::PAGE_NUM).and_then(MetadataValue::as_integer)
    }

    /// `order` of an `OpenRecentDoc`
    pub fn order(&self) -> Option<i64> {
        self.meta(keys::ORDER).and_then(MetadataValue::as_integer)
    }

    /// `character` of a `Mark` or `LoadMark`
    pub fn mark_character(&self) -> Option<char> {
        self.meta(keys::CHARACTER)
            .and_then(MetadataValue::as_character)
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.kind)?;
        if let Some(metadata) = &self.metadata {
            for (key, value) in metadata.iter() {
                write!(f, " {}={}", key, value)?;
            }
        }
        Ok(())
    }
}

//! Interpreter configuration

use serde::{Deserialize, Serialize};

/// Placeholder shown for an empty sequence buffer
pub const DEFAULT_PLACEHOLDER: &str = "Press ? to show help.";

/// Suffix appended to the list preview
pub const DEFAULT_LIST_HINT: &str = " - Input number and Enter to open.";

/// What Escape reports after discarding the pending keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EscapePolicy {
    /// Emit a `Standstill` carrying the placeholder
    #[default]
    Acknowledge,
    /// Emit nothing
    Silent,
}

/// Interpreter configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InterpreterConfig {
    pub placeholder: String,
    pub escape_policy: EscapePolicy,
    pub list_hint: String,
}

impl Default for InterpreterConfig {
    fn default() -> Self {
        Self {
            placeholder: DEFAULT_PLACEHOLDER.to_string(),
            escape_policy: EscapePolicy::Acknowledge,
            list_hint: DEFAULT_LIST_HINT.to_string(),
        }
    }
}

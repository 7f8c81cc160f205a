//! Dispatcher
//!
//! Runs the grammar rules in priority order over the live buffer and collects
//! every emission of the pass, in rule order.

use crate::buffer::SequenceBuffer;
use crate::command::Command;
use crate::error::SequenceResult;
use crate::rules::{
    EnterRule, EscapeRule, GrammarRule, ListPreviewRule, MarkLoadRule, MarkSetRule, RuleContext,
    TextCommandRule,
};

/// Ordered rule list
pub struct Dispatcher {
    rules: Vec<Box<dyn GrammarRule>>,
}

impl Dispatcher {
    /// Dispatcher over an explicit rule order
    pub fn new(rules: Vec<Box<dyn GrammarRule>>) -> Self {
        Self { rules }
    }

    /// Escape, Enter, Mark-Set, Mark-Load, Text-Command, List-Preview
    pub fn standard() -> Self {
        Self::new(vec![
            Box::new(EscapeRule),
            Box::new(EnterRule),
            Box::new(MarkSetRule),
            Box::new(MarkLoadRule),
            Box::new(TextCommandRule),
            Box::new(ListPreviewRule),
        ])
    }

    /// Rule names in evaluation order
    pub fn rule_names(&self) -> Vec<&'static str> {
        self.rules.iter().map(|rule| rule.name()).collect()
    }

    /// One dispatch pass
    pub fn run(
        &self,
        buffer: &mut SequenceBuffer,
        ctx: &RuleContext<'_>,
    ) -> SequenceResult<Vec<Command>> {
        let mut commands = Vec::new();

        for rule in &self.rules {
            let emitted = rule.apply(buffer, ctx)?;
            for command in &emitted {
                tracing::trace!(
                    target: "keyseq.rule",
                    rule = rule.name(),
                    kind = %command.kind,
                    pending = buffer.len(),
                    "rule fired"
                );
            }
            commands.extend(emitted);
        }

        tracing::debug!(
            target: "keyseq.dispatch",
            emitted = commands.len(),
            pending = buffer.len(),
            "dispatch pass"
        );
        Ok(commands)
    }
}

impl Default for Dispatcher {
    fn default() -> Self {
        Self::standard()
    }
}

impl std::fmt::Debug for Dispatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Dispatcher")
            .field("rules", &self.rule_names())
            .finish()
    }
}

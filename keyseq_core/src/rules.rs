//! Grammar rules
//!
//! Each rule inspects the live buffer, may mutate it, and returns the
//! commands it emits. Rules do not know about each other: a rule that clears
//! the buffer simply makes the shape checks of later rules fail.

use input_types::InputEvent;

use crate::buffer::SequenceBuffer;
use crate::command::{keys, Command, CommandType, Metadata, MetadataValue};
use crate::config::{EscapePolicy, InterpreterConfig};
use crate::error::{SequenceError, SequenceResult};
use crate::tokens::TokenTable;

/// Read-only inputs shared by every rule of a dispatch pass
#[derive(Debug, Clone, Copy)]
pub struct RuleContext<'a> {
    pub config: &'a InterpreterConfig,
    pub tokens: &'a TokenTable,
}

impl<'a> RuleContext<'a> {
    pub fn new(config: &'a InterpreterConfig, tokens: &'a TokenTable) -> Self {
        Self { config, tokens }
    }

    pub fn placeholder(&self) -> &'a str {
        &self.config.placeholder
    }
}

/// A predicate -> effect rule over the sequence buffer
pub trait GrammarRule: Send + Sync {
    fn name(&self) -> &'static str;

    fn apply(
        &self,
        buffer: &mut SequenceBuffer,
        ctx: &RuleContext<'_>,
    ) -> SequenceResult<Vec<Command>>;
}

/// Escape discards everything pending
pub struct EscapeRule;

impl GrammarRule for EscapeRule {
    fn name(&self) -> &'static str {
        "escape"
    }

    fn apply(
        &self,
        buffer: &mut SequenceBuffer,
        ctx: &RuleContext<'_>,
    ) -> SequenceResult<Vec<Command>> {
        if !buffer.last().is_some_and(InputEvent::is_escape) {
            return Ok(Vec::new());
        }

        buffer.clear();
        match ctx.config.escape_policy {
            EscapePolicy::Acknowledge => Ok(vec![Command::new(
                buffer.render_text(ctx.placeholder())?,
                CommandType::Standstill,
            )]),
            EscapePolicy::Silent => Ok(Vec::new()),
        }
    }
}

/// Enter submits a numeric argument: `<n>` goes to a page, `l<n>` opens a
/// recent document
pub struct EnterRule;

impl EnterRule {
    /// Decimal parse of the remaining keys; failure is not an error and an
    /// empty remainder never parses
    fn parse_argument(buffer: &SequenceBuffer) -> SequenceResult<Option<i64>> {
        Ok(buffer.characters()?.parse::<i64>().ok())
    }
}

impl GrammarRule for EnterRule {
    fn name(&self) -> &'static str {
        "enter"
    }

    fn apply(
        &self,
        buffer: &mut SequenceBuffer,
        ctx: &RuleContext<'_>,
    ) -> SequenceResult<Vec<Command>> {
        if !buffer.last().is_some_and(InputEvent::is_enter) {
            return Ok(Vec::new());
        }
        buffer.pop_last()?;

        let (kind, key) = if buffer.first_character() == Some('l') {
            buffer.pop_first()?;
            (CommandType::OpenRecentDoc, keys::ORDER)
        } else {
            (CommandType::Goto, keys::PAGE_NUM)
        };

        let argument = Self::parse_argument(buffer)?;
        buffer.clear();

        let Some(n) = argument else {
            tracing::debug!(target: "keyseq.rule", rule = self.name(), "numeric argument discarded");
            return Ok(Vec::new());
        };

        Ok(vec![Command::with_metadata(
            buffer.render_text(ctx.placeholder())?,
            kind,
            Metadata::single(key, MetadataValue::Integer(n)),
        )])
    }
}

/// Shared shape of the two-keystroke mark rules: `<trigger><label>`
fn two_key_mark(
    buffer: &mut SequenceBuffer,
    ctx: &RuleContext<'_>,
    trigger: char,
    kind: CommandType,
) -> SequenceResult<Vec<Command>> {
    let label = match buffer.events() {
        [first, second] if first.character() == Some(trigger) => {
            second.character().ok_or(SequenceError::MissingCharacter {
                index: 1,
                code: second.code(),
            })?
        }
        _ => return Ok(Vec::new()),
    };

    buffer.clear();
    Ok(vec![Command::with_metadata(
        buffer.render_text(ctx.placeholder())?,
        kind,
        Metadata::single(keys::CHARACTER, MetadataValue::Character(label)),
    )])
}

/// `m<c>` binds mark `c`
pub struct MarkSetRule;

impl GrammarRule for MarkSetRule {
    fn name(&self) -> &'static str {
        "mark-set"
    }

    fn apply(
        &self,
        buffer: &mut SequenceBuffer,
        ctx: &RuleContext<'_>,
    ) -> SequenceResult<Vec<Command>> {
        two_key_mark(buffer, ctx, 'm', CommandType::Mark)
    }
}

/// `'<c>` jumps to mark `c`
pub struct MarkLoadRule;

impl GrammarRule for MarkLoadRule {
    fn name(&self) -> &'static str {
        "mark-load"
    }

    fn apply(
        &self,
        buffer: &mut SequenceBuffer,
        ctx: &RuleContext<'_>,
    ) -> SequenceResult<Vec<Command>> {
        two_key_mark(buffer, ctx, '\'', CommandType::LoadMark)
    }
}

/// Exact token match; anything else is echoed back and kept pending
pub struct TextCommandRule;

impl GrammarRule for TextCommandRule {
    fn name(&self) -> &'static str {
        "text-command"
    }

    fn apply(
        &self,
        buffer: &mut SequenceBuffer,
        ctx: &RuleContext<'_>,
    ) -> SequenceResult<Vec<Command>> {
        if buffer.is_empty() {
            return Ok(Vec::new());
        }

        let cmd = buffer.render_text(ctx.placeholder())?;
        let command = match ctx.tokens.lookup(&cmd) {
            Some(CommandType::Help) => {
                buffer.clear();
                Command::new(ctx.tokens.help_text(), CommandType::Help)
            }
            Some(kind) => {
                buffer.clear();
                Command::new(format!(":{}", buffer.render_text(ctx.placeholder())?), kind)
            }
            // Accumulation path: the buffer stays as typed
            None => Command::new(format!(":{}", cmd), CommandType::Standstill),
        };
        Ok(vec![command])
    }
}

/// Live preview while an `l<n>` entry is being typed
pub struct ListPreviewRule;

impl GrammarRule for ListPreviewRule {
    fn name(&self) -> &'static str {
        "list-preview"
    }

    fn apply(
        &self,
        buffer: &mut SequenceBuffer,
        ctx: &RuleContext<'_>,
    ) -> SequenceResult<Vec<Command>> {
        if buffer.first_character() != Some('l') {
            return Ok(Vec::new());
        }

        let text = buffer.render_text(ctx.placeholder())?;
        Ok(vec![Command::new(
            format!(":{}{}", text, ctx.config.list_hint),
            CommandType::List,
        )])
    }
}

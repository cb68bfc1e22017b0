//! Block aggregation
//!
//! A small state machine folded over classified lines. At most one buffer is
//! open at any time, either a paragraph or a list of one kind:
//!
//! ```text
//!            Plain                 Numbered/Bullet
//!   None ───────────▶ Paragraph ──────────────────▶ List(kind)
//!    ▲  ◀── Blank ───     │                          │  ▲
//!    │                    └──── Title: flush, emit ──┘  │ other kind:
//!    └──────────────── Blank / Plain closes list ───────┘ flush + reopen
//! ```
//!
//! Headings are never buffered; they flush whatever is open and are emitted
//! immediately. End of input flushes the open buffer.
//!
//! Emptiness is judged on the formatted runs, not the raw text: `****` is
//! non-empty text but formats to nothing, so it yields no block. The same
//! holds for list items, and a list whose items are all blank is dropped.

use super::classify::LineKind;
use super::inline::format_inline;
use crate::ir::nodes::{runs_are_blank, Block, ListKind};

/// The open buffer of an aggregation pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Mode {
    #[default]
    None,
    Paragraph(Vec<String>),
    List(ListKind, Vec<String>),
}

/// Working state of one aggregation pass. Never shared across calls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AggregatorState {
    heading_level: u8,
    mode: Mode,
    blocks: Vec<Block>,
}

impl AggregatorState {
    pub fn new(heading_level: u8) -> Self {
        Self {
            heading_level,
            mode: Mode::None,
            blocks: Vec::new(),
        }
    }

    pub fn mode(&self) -> &Mode {
        &self.mode
    }

    /// Consume one classified line. Suitable as a `fold` step.
    pub fn push(mut self, line: LineKind) -> Self {
        match line {
            LineKind::Blank => self.flush(),
            LineKind::NumberedItem(text) => self.push_item(ListKind::Ordered, text),
            LineKind::BulletItem(text) => self.push_item(ListKind::Unordered, text),
            LineKind::TitleCandidate(text) => {
                self.flush();
                let runs = format_inline(&text);
                if !runs_are_blank(&runs) {
                    self.blocks.push(Block::heading(self.heading_level, runs));
                }
            }
            LineKind::Plain(text) => {
                if matches!(self.mode, Mode::List(..)) {
                    self.flush();
                }
                if let Mode::Paragraph(lines) = &mut self.mode {
                    lines.push(text);
                } else {
                    self.mode = Mode::Paragraph(vec![text]);
                }
            }
        }
        self
    }

    /// Flush the open buffer and return the finished blocks.
    pub fn finish(mut self) -> Vec<Block> {
        self.flush();
        self.blocks
    }

    fn push_item(&mut self, kind: ListKind, text: String) {
        if let Mode::List(open, items) = &mut self.mode {
            if *open == kind {
                items.push(text);
                return;
            }
        }
        self.flush();
        self.mode = Mode::List(kind, vec![text]);
    }

    fn flush(&mut self) {
        match std::mem::take(&mut self.mode) {
            Mode::None => {}
            Mode::Paragraph(lines) => {
                let runs = format_inline(lines.join(" ").trim());
                if !runs_are_blank(&runs) {
                    self.blocks.push(Block::paragraph(runs));
                }
            }
            Mode::List(kind, items) => {
                let items: Vec<_> = items
                    .iter()
                    .map(|item| format_inline(item))
                    .filter(|runs| !runs_are_blank(runs))
                    .collect();
                if !items.is_empty() {
                    self.blocks.push(Block::List { kind, items });
                }
            }
        }
    }
}

/// Group an ordered sequence of classified lines into blocks.
pub fn aggregate<I>(lines: I, heading_level: u8) -> Vec<Block>
where
    I: IntoIterator<Item = LineKind>,
{
    lines
        .into_iter()
        .fold(AggregatorState::new(heading_level), AggregatorState::push)
        .finish()
}

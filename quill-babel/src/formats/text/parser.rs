//! Plain text parsing (plain text → IR)
//!
//! Pipeline: input → lines → classified lines (with neighbor context) → blocks
//!
//! The whole pass is a single left-to-right walk over the lines and only ever
//! buffers the block that is currently open.

use super::aggregate::aggregate;
use super::classify::{classify_line, LineKind};
use crate::ir::nodes::Document;

/// Heading level used for title candidates unless configured otherwise.
pub const DEFAULT_HEADING_LEVEL: u8 = 2;

/// Options that influence how plain text is interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseOptions {
    /// Level assigned to detected headings (1-6).
    pub heading_level: u8,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            heading_level: DEFAULT_HEADING_LEVEL,
        }
    }
}

impl ParseOptions {
    pub fn with_heading_level(mut self, level: u8) -> Self {
        self.heading_level = level.clamp(1, 6);
        self
    }
}

/// Classify every line of `source`, giving each one its neighbor context.
pub fn classify_lines(source: &str) -> Vec<LineKind> {
    let lines: Vec<&str> = source.split('\n').collect();
    let blank = |index: Option<usize>| match index.and_then(|i| lines.get(i)) {
        Some(line) => line.trim().is_empty(),
        None => true,
    };

    lines
        .iter()
        .enumerate()
        .map(|(i, line)| {
            let prev_blank = blank(i.checked_sub(1));
            let next_blank = blank(Some(i + 1));
            classify_line(line, prev_blank, next_blank)
        })
        .collect()
}

/// Parse plain text into a document. Never fails: any input yields a
/// (possibly empty) block sequence.
pub fn parse_plain_text(source: &str, options: ParseOptions) -> Document {
    if source.trim().is_empty() {
        return Document::default();
    }

    let blocks = aggregate(classify_lines(source), options.heading_level);
    tracing::debug!(
        lines = source.lines().count(),
        blocks = blocks.len(),
        "aggregated plain text"
    );
    Document::new(blocks)
}

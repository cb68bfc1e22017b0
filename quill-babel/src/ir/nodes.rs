//! Core data structures for the Intermediate Representation (IR).

use serde::Serialize;

/// The ordered sequence of blocks inferred from one input.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Document {
    pub blocks: Vec<Block>,
}

impl Document {
    pub fn new(blocks: Vec<Block>) -> Self {
        Self { blocks }
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }
}

/// A structural unit of the document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Block {
    Paragraph { runs: Vec<InlineRun> },
    Heading { level: u8, runs: Vec<InlineRun> },
    List { kind: ListKind, items: Vec<Vec<InlineRun>> },
}

impl Block {
    pub fn paragraph(runs: Vec<InlineRun>) -> Self {
        Block::Paragraph { runs }
    }

    pub fn heading(level: u8, runs: Vec<InlineRun>) -> Self {
        Block::Heading { level, runs }
    }

    pub fn ordered_list(items: Vec<Vec<InlineRun>>) -> Self {
        Block::List {
            kind: ListKind::Ordered,
            items,
        }
    }

    pub fn unordered_list(items: Vec<Vec<InlineRun>>) -> Self {
        Block::List {
            kind: ListKind::Unordered,
            items,
        }
    }

    /// Short name used by inspection output.
    pub fn name(&self) -> &'static str {
        match self {
            Block::Paragraph { .. } => "paragraph",
            Block::Heading { .. } => "heading",
            Block::List {
                kind: ListKind::Ordered,
                ..
            } => "ordered-list",
            Block::List {
                kind: ListKind::Unordered,
                ..
            } => "unordered-list",
        }
    }
}

/// Whether a list is numbered or bulleted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ListKind {
    Ordered,
    Unordered,
}

/// A contiguous span of text sharing one emphasis state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InlineRun {
    pub text: String,
    pub bold: bool,
}

impl InlineRun {
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            bold: false,
        }
    }

    pub fn bold(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            bold: true,
        }
    }
}

/// Concatenates the text of a run sequence, dropping emphasis.
pub fn runs_to_string(runs: &[InlineRun]) -> String {
    runs.iter().map(|run| run.text.as_str()).collect()
}

/// True when the runs would render no visible text. Blocks built from such
/// runs are dropped before rendering so every output sees the same blocks.
pub fn runs_are_blank(runs: &[InlineRun]) -> bool {
    runs.iter().all(|run| run.text.trim().is_empty())
}

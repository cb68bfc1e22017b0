//! Paste handling for rich text editors
//!
//! The editor engine is consumed only through [`EditorEngine`]: one call to turn
//! a node tree into the engine's own fragment type (this is where the engine's
//! schema may reject it) and one call to replace the current selection.
//!
//! [`handle_paste`] never panics and never mutates the editor unless the whole
//! tree was accepted. Every other outcome is reported as [`NotHandled`] so the
//! caller can fall back to its default paste behavior.

use super::schema::Schema;
use super::tree::{build_node_tree, Node};
use crate::error::{FormatError, SchemaError};
use crate::formats::text::{parse_plain_text, ParseOptions};
use std::fmt;
use std::ops::Range;

/// The capabilities of a rich text engine that pasting relies on.
pub trait EditorEngine {
    /// The engine's validated representation of a pasted document.
    type Fragment;

    /// Build an engine fragment from a `doc` node, validating it against the
    /// engine schema.
    fn node_from_json(&self, doc: &Node) -> Result<Self::Fragment, SchemaError>;

    /// Replace the current selection with a validated fragment.
    fn replace_selection(&mut self, fragment: Self::Fragment);
}

/// What a handled paste inserted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PasteSummary {
    /// Number of top-level blocks inserted.
    pub blocks: usize,
}

/// Why a paste was left to the caller's default handling.
#[derive(Debug, Clone, PartialEq)]
pub enum NotHandled {
    /// The clipboard carried no plain text payload.
    NoPlainText,
    /// The text produced no blocks (only whitespace).
    NothingToInsert,
    /// Building the node tree failed.
    Build(FormatError),
    /// The engine's schema rejected the tree.
    SchemaRejected(SchemaError),
}

impl fmt::Display for NotHandled {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NotHandled::NoPlainText => write!(f, "Clipboard has no plain text"),
            NotHandled::NothingToInsert => write!(f, "Pasted text has no content"),
            NotHandled::Build(err) => write!(f, "Could not build node tree: {err}"),
            NotHandled::SchemaRejected(err) => write!(f, "Editor schema rejected paste: {err}"),
        }
    }
}

impl std::error::Error for NotHandled {}

/// Convert clipboard text and insert it at the editor's selection.
///
/// `clipboard` is the `text/plain` payload of the paste event, if any.
pub fn handle_paste<E: EditorEngine>(
    engine: &mut E,
    clipboard: Option<&str>,
    options: ParseOptions,
) -> Result<PasteSummary, NotHandled> {
    let text = match clipboard {
        Some(text) if !text.is_empty() => text,
        _ => return Err(NotHandled::NoPlainText),
    };

    let doc = parse_plain_text(text, options);
    if doc.is_empty() {
        return Err(NotHandled::NothingToInsert);
    }

    let tree = build_node_tree(&doc).map_err(NotHandled::Build)?;
    let fragment = engine.node_from_json(&tree).map_err(|err| {
        tracing::warn!(error = %err, "editor rejected pasted content");
        NotHandled::SchemaRejected(err)
    })?;

    engine.replace_selection(fragment);
    tracing::debug!(blocks = doc.blocks.len(), "pasted structured content");

    Ok(PasteSummary {
        blocks: doc.blocks.len(),
    })
}

/// An in-memory editor: a schema, a `doc` node and a selection over its
/// top-level blocks.
#[derive(Debug, Clone, PartialEq)]
pub struct SchemaEditor {
    schema: Schema,
    doc: Node,
    selection: Range<usize>,
}

impl SchemaEditor {
    /// An editor holding one empty paragraph, selected so that a paste
    /// replaces it.
    pub fn new(schema: Schema) -> Self {
        Self {
            schema,
            doc: Node::doc(vec![Node::paragraph(Vec::new())]),
            selection: 0..1,
        }
    }

    /// An editor holding an existing document with the caret at its end.
    pub fn with_document(schema: Schema, doc: Node) -> Result<Self, SchemaError> {
        schema.validate_document(&doc)?;
        let end = doc.content.len();
        Ok(Self {
            schema,
            doc,
            selection: end..end,
        })
    }

    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    pub fn document(&self) -> &Node {
        &self.doc
    }

    pub fn into_document(self) -> Node {
        self.doc
    }

    pub fn selection(&self) -> Range<usize> {
        self.selection.clone()
    }

    /// Select a range of top-level blocks, clamped to the document.
    pub fn select(&mut self, range: Range<usize>) {
        let len = self.doc.content.len();
        let end = range.end.min(len);
        let start = range.start.min(end);
        self.selection = start..end;
    }
}

impl EditorEngine for SchemaEditor {
    type Fragment = Vec<Node>;

    fn node_from_json(&self, doc: &Node) -> Result<Self::Fragment, SchemaError> {
        self.schema.validate_document(doc)?;
        Ok(doc.content.clone())
    }

    fn replace_selection(&mut self, fragment: Self::Fragment) {
        let start = self.selection.start;
        let inserted = fragment.len();
        self.doc.content.splice(self.selection.clone(), fragment);
        self.selection = start + inserted..start + inserted;
    }
}

//! Editor node tree format implementation
//!
//! Exports the IR as the JSON node tree a rich text editor loads, and drives
//! structured pasting into such an editor.
//!
//! # Element Mapping Table
//!
//! | IR Block          | Node tree                                        |
//! |-------------------|--------------------------------------------------|
//! | Heading(level)    | `heading { level }` → `text`                     |
//! | Paragraph         | `paragraph` → `text`                             |
//! | List(Ordered)     | `orderedList` → `listItem` → `paragraph` → `text`|
//! | List(Unordered)   | `bulletList` → `listItem` → `paragraph` → `text` |
//! | InlineRun(bold)   | `text` with a `bold` mark                        |
//!
//! The tree is built from the same event stream as the HTML output, so both
//! always agree on structure.
//!
//! # Pasting
//!
//! See [`paste`]: clipboard text → IR → node tree → engine schema check →
//! replace selection. Failure at any step is returned as a value and leaves
//! the editor unchanged.

pub mod paste;
pub mod schema;
pub mod tree;

use crate::error::FormatError;
use crate::format::{bool_option, Format};
use crate::ir::nodes::Document;
use std::collections::HashMap;

pub use paste::{handle_paste, EditorEngine, NotHandled, PasteSummary, SchemaEditor};
pub use schema::Schema;
pub use tree::{build_node_tree, Mark, Node};

/// Format implementation for the editor node tree (JSON)
#[derive(Debug, Clone, Copy)]
pub struct NodesFormat {
    pretty: bool,
}

impl Default for NodesFormat {
    fn default() -> Self {
        Self { pretty: true }
    }
}

impl NodesFormat {
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }
}

/// Serialize a node tree as JSON.
pub fn node_tree_to_json(tree: &Node, pretty: bool) -> Result<String, FormatError> {
    let json = if pretty {
        serde_json::to_string_pretty(tree)
    } else {
        serde_json::to_string(tree)
    };
    json.map_err(|e| FormatError::SerializationError(format!("JSON serialization failed: {e}")))
}

impl Format for NodesFormat {
    fn name(&self) -> &str {
        "nodes"
    }

    fn description(&self) -> &str {
        "Rich text editor document tree as JSON"
    }

    fn file_extensions(&self) -> &[&str] {
        &["json"]
    }

    fn supports_serialization(&self) -> bool {
        true
    }

    fn serialize(&self, doc: &Document) -> Result<String, FormatError> {
        node_tree_to_json(&build_node_tree(doc)?, self.pretty)
    }

    fn serialize_with_options(
        &self,
        doc: &Document,
        options: &HashMap<String, String>,
    ) -> Result<String, FormatError> {
        let pretty = bool_option(options, "pretty", self.pretty)?;
        node_tree_to_json(&build_node_tree(doc)?, pretty)
    }
}

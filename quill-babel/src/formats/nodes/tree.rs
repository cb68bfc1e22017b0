//! Generic document node tree (IR → editor nodes)
//!
//! The tree mirrors the JSON document shape rich text editors exchange:
//!
//! ```json
//! { "type": "doc", "content": [
//!     { "type": "heading", "attrs": { "level": 2 },
//!       "content": [{ "type": "text", "text": "Title" }] },
//!     { "type": "bulletList", "content": [
//!         { "type": "listItem", "content": [
//!             { "type": "paragraph", "content": [
//!                 { "type": "text", "text": "item", "marks": [{ "type": "bold" }] }
//!             ] }
//!         ] }
//!     ] }
//! ] }
//! ```
//!
//! Node types are plain strings so that trees coming from outside (and trees
//! the schema must reject) can be represented too.

use crate::common::nested_to_flat::tree_to_events;
use crate::error::FormatError;
use crate::ir::events::Event;
use crate::ir::nodes::{Document, InlineRun};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// Node type names understood by the default schema.
pub mod node_type {
    pub const DOC: &str = "doc";
    pub const PARAGRAPH: &str = "paragraph";
    pub const HEADING: &str = "heading";
    pub const ORDERED_LIST: &str = "orderedList";
    pub const BULLET_LIST: &str = "bulletList";
    pub const LIST_ITEM: &str = "listItem";
    pub const TEXT: &str = "text";

    pub const ALL: &[&str] = &[
        DOC,
        PARAGRAPH,
        HEADING,
        ORDERED_LIST,
        BULLET_LIST,
        LIST_ITEM,
        TEXT,
    ];
}

/// Mark type names understood by the default schema.
pub mod mark_type {
    pub const BOLD: &str = "bold";

    pub const ALL: &[&str] = &[BOLD];
}

/// One node of the editor document tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    #[serde(rename = "type")]
    pub node_type: String,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub attrs: BTreeMap<String, Value>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub content: Vec<Node>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub marks: Vec<Mark>,
}

/// Inline formatting attached to a text node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Mark {
    #[serde(rename = "type")]
    pub mark_type: String,
}

impl Mark {
    pub fn new(mark_type: impl Into<String>) -> Self {
        Self {
            mark_type: mark_type.into(),
        }
    }
}

impl Node {
    /// An element node without attributes or children.
    pub fn new(node_type: impl Into<String>) -> Self {
        Self {
            node_type: node_type.into(),
            attrs: BTreeMap::new(),
            content: Vec::new(),
            text: None,
            marks: Vec::new(),
        }
    }

    pub fn doc(content: Vec<Node>) -> Self {
        Self::new(node_type::DOC).with_content(content)
    }

    pub fn paragraph(content: Vec<Node>) -> Self {
        Self::new(node_type::PARAGRAPH).with_content(content)
    }

    pub fn heading(level: u8, content: Vec<Node>) -> Self {
        Self::new(node_type::HEADING)
            .with_attr("level", Value::from(level))
            .with_content(content)
    }

    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            ..Self::new(node_type::TEXT)
        }
    }

    pub fn bold_text(text: impl Into<String>) -> Self {
        Self::text(text).with_mark(Mark::new(mark_type::BOLD))
    }

    pub fn with_attr(mut self, key: impl Into<String>, value: Value) -> Self {
        self.attrs.insert(key.into(), value);
        self
    }

    pub fn with_content(mut self, content: Vec<Node>) -> Self {
        self.content = content;
        self
    }

    pub fn with_mark(mut self, mark: Mark) -> Self {
        self.marks.push(mark);
        self
    }

    pub fn is(&self, node_type: &str) -> bool {
        self.node_type == node_type
    }
}

/// Build the editor node tree for a document.
///
/// Headings keep their runs unmarked: the heading node already conveys the
/// emphasis that the HTML output spells out with `<strong>`.
pub fn build_node_tree(doc: &Document) -> Result<Node, FormatError> {
    let events = tree_to_events(doc);
    events_to_nodes(&events)
}

fn events_to_nodes(events: &[Event]) -> Result<Node, FormatError> {
    let mut stack: Vec<Node> = vec![Node::doc(Vec::new())];
    let mut in_heading = false;

    for event in events {
        match event {
            Event::StartDocument | Event::EndDocument => {}
            Event::StartHeading(level) => {
                in_heading = true;
                stack.push(Node::heading(*level, Vec::new()));
            }
            Event::EndHeading(_) => {
                in_heading = false;
                close(&mut stack, node_type::HEADING)?;
            }
            Event::StartParagraph => stack.push(Node::paragraph(Vec::new())),
            Event::EndParagraph => close(&mut stack, node_type::PARAGRAPH)?,
            Event::StartList { ordered } => {
                let list_type = if *ordered {
                    node_type::ORDERED_LIST
                } else {
                    node_type::BULLET_LIST
                };
                stack.push(Node::new(list_type));
            }
            Event::EndList => {
                let list = pop(&mut stack)?;
                if !list.is(node_type::ORDERED_LIST) && !list.is(node_type::BULLET_LIST) {
                    return Err(unbalanced("list", &list));
                }
                append(&mut stack, list)?;
            }
            Event::StartListItem => {
                stack.push(Node::new(node_type::LIST_ITEM));
                stack.push(Node::paragraph(Vec::new()));
            }
            Event::EndListItem => {
                close(&mut stack, node_type::PARAGRAPH)?;
                close(&mut stack, node_type::LIST_ITEM)?;
            }
            Event::Inline(run) => {
                let text = if in_heading {
                    Node::text(run.text.clone())
                } else {
                    run_to_text(run)
                };
                append(&mut stack, text)?;
            }
        }
    }

    let root = pop(&mut stack)?;
    if !stack.is_empty() || !root.is(node_type::DOC) {
        return Err(unbalanced(node_type::DOC, &root));
    }
    Ok(root)
}

fn run_to_text(run: &InlineRun) -> Node {
    if run.bold {
        Node::bold_text(run.text.clone())
    } else {
        Node::text(run.text.clone())
    }
}

fn pop(stack: &mut Vec<Node>) -> Result<Node, FormatError> {
    stack.pop().ok_or_else(|| {
        FormatError::SerializationError("Node stack exhausted while building tree".to_string())
    })
}

fn append(stack: &mut [Node], node: Node) -> Result<(), FormatError> {
    let parent = stack.last_mut().ok_or_else(|| {
        FormatError::SerializationError(format!("No parent for {} node", node.node_type))
    })?;
    parent.content.push(node);
    Ok(())
}

fn close(stack: &mut Vec<Node>, expected: &str) -> Result<(), FormatError> {
    let node = pop(stack)?;
    if !node.is(expected) {
        return Err(unbalanced(expected, &node));
    }
    append(stack, node)
}

fn unbalanced(expected: &str, found: &Node) -> FormatError {
    FormatError::SerializationError(format!(
        "Unbalanced events: expected {expected}, found {}",
        found.node_type
    ))
}

//! Editor schema validation
//!
//! A schema names the node and mark types an editor has enabled and checks
//! the content rules between them:
//!
//! | Node          | Content             | Attributes                   |
//! |---------------|---------------------|------------------------------|
//! | doc           | block+              |                              |
//! | paragraph     | text*               |                              |
//! | heading       | text*               | level: 1..=max_heading_level |
//! | orderedList   | listItem+           | start: integer (optional)    |
//! | bulletList    | listItem+           |                              |
//! | listItem      | paragraph block*    |                              |
//! | text          | (leaf, non-empty)   |                              |
//!
//! where `block` is any of paragraph, heading, orderedList or bulletList.

use super::tree::{mark_type, node_type, Node};
use crate::error::SchemaError;
use std::collections::BTreeSet;

const BLOCK_TYPES: &[&str] = &[
    node_type::PARAGRAPH,
    node_type::HEADING,
    node_type::ORDERED_LIST,
    node_type::BULLET_LIST,
];

/// The set of node and mark types an editor accepts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Schema {
    nodes: BTreeSet<String>,
    marks: BTreeSet<String>,
    max_heading_level: u8,
}

impl Default for Schema {
    fn default() -> Self {
        Self::new(
            node_type::ALL.iter().copied(),
            mark_type::ALL.iter().copied(),
            6,
        )
    }
}

impl Schema {
    /// A schema enabling exactly the given types. `doc` and `text` are always
    /// enabled since no document can be built without them.
    pub fn new<'a>(
        nodes: impl IntoIterator<Item = &'a str>,
        marks: impl IntoIterator<Item = &'a str>,
        max_heading_level: u8,
    ) -> Self {
        let mut nodes: BTreeSet<String> = nodes.into_iter().map(str::to_string).collect();
        nodes.insert(node_type::DOC.to_string());
        nodes.insert(node_type::TEXT.to_string());
        Self {
            nodes,
            marks: marks.into_iter().map(str::to_string).collect(),
            max_heading_level: max_heading_level.clamp(1, 6),
        }
    }

    /// The same schema with one node type disabled.
    pub fn without_node(mut self, name: &str) -> Self {
        if name != node_type::DOC && name != node_type::TEXT {
            self.nodes.remove(name);
        }
        self
    }

    /// The same schema with one mark type disabled.
    pub fn without_mark(mut self, name: &str) -> Self {
        self.marks.remove(name);
        self
    }

    pub fn has_node(&self, name: &str) -> bool {
        self.nodes.contains(name)
    }

    pub fn has_mark(&self, name: &str) -> bool {
        self.marks.contains(name)
    }

    pub fn max_heading_level(&self) -> u8 {
        self.max_heading_level
    }

    /// Check a whole document: the root must be a `doc` node.
    pub fn validate_document(&self, root: &Node) -> Result<(), SchemaError> {
        if !root.is(node_type::DOC) {
            return Err(SchemaError::InvalidRoot(root.node_type.clone()));
        }
        self.validate(root)
    }

    /// Check a node and everything below it.
    pub fn validate(&self, node: &Node) -> Result<(), SchemaError> {
        if !self.has_node(&node.node_type) {
            return Err(SchemaError::UnknownNodeType(node.node_type.clone()));
        }
        if let Some(mark) = node.marks.iter().find(|mark| !self.has_mark(&mark.mark_type)) {
            return Err(SchemaError::UnknownMark(mark.mark_type.clone()));
        }

        self.check_attrs(node)?;
        self.check_content(node)?;

        node.content.iter().try_for_each(|child| self.validate(child))
    }

    fn check_attrs(&self, node: &Node) -> Result<(), SchemaError> {
        let invalid = |attribute: &str, reason: String| SchemaError::InvalidAttribute {
            node: node.node_type.clone(),
            attribute: attribute.to_string(),
            reason,
        };

        match node.node_type.as_str() {
            node_type::HEADING => {
                let level = node
                    .attrs
                    .get("level")
                    .ok_or_else(|| invalid("level", "missing".to_string()))?;
                match level.as_u64() {
                    Some(level) if (1..=u64::from(self.max_heading_level)).contains(&level) => {
                        Ok(())
                    }
                    _ => Err(invalid(
                        "level",
                        format!("expected 1..={}, found {level}", self.max_heading_level),
                    )),
                }
            }
            node_type::ORDERED_LIST => match node.attrs.get("start") {
                Some(start) if start.as_u64().is_none() => Err(invalid(
                    "start",
                    format!("expected a non-negative integer, found {start}"),
                )),
                _ => Ok(()),
            },
            _ => Ok(()),
        }
    }

    fn check_content(&self, node: &Node) -> Result<(), SchemaError> {
        let children = &node.content;
        let parent = node.node_type.as_str();
        let reject = |child: &Node| SchemaError::InvalidContent {
            parent: parent.to_string(),
            child: child.node_type.clone(),
        };

        match parent {
            node_type::TEXT => {
                if let Some(child) = children.first() {
                    return Err(reject(child));
                }
                match node.text.as_deref() {
                    Some(text) if !text.is_empty() => Ok(()),
                    _ => Err(SchemaError::EmptyText),
                }
            }
            node_type::DOC => {
                require_children(node)?;
                only(children, BLOCK_TYPES).map_err(reject)
            }
            node_type::PARAGRAPH | node_type::HEADING => {
                only(children, &[node_type::TEXT]).map_err(reject)
            }
            node_type::ORDERED_LIST | node_type::BULLET_LIST => {
                require_children(node)?;
                only(children, &[node_type::LIST_ITEM]).map_err(reject)
            }
            node_type::LIST_ITEM => {
                require_children(node)?;
                let (first, rest) = children.split_at(1);
                only(first, &[node_type::PARAGRAPH]).map_err(reject)?;
                only(rest, BLOCK_TYPES).map_err(reject)
            }
            _ => Ok(()),
        }
    }
}

fn require_children(node: &Node) -> Result<(), SchemaError> {
    if node.content.is_empty() {
        Err(SchemaError::MissingContent(node.node_type.clone()))
    } else {
        Ok(())
    }
}

/// Returns the first child whose type is not in `allowed`.
fn only<'a>(children: &'a [Node], allowed: &[&str]) -> Result<(), &'a Node> {
    match children
        .iter()
        .find(|child| !allowed.contains(&child.node_type.as_str()))
    {
        Some(child) => Err(child),
        None => Ok(()),
    }
}

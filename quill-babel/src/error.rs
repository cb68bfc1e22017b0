//! Error types for format operations

use std::fmt;

/// Errors that can occur during format operations
#[derive(Debug, Clone, PartialEq)]
pub enum FormatError {
    /// Format not found in registry
    FormatNotFound(String),
    /// Error during parsing
    ParseError(String),
    /// Error during serialization
    SerializationError(String),
    /// Format does not support the requested operation
    NotSupported(String),
    /// An option was passed with a value the format cannot use
    InvalidOption { key: String, value: String },
}

impl fmt::Display for FormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormatError::FormatNotFound(name) => write!(f, "Format '{name}' not found"),
            FormatError::ParseError(msg) => write!(f, "Parse error: {msg}"),
            FormatError::SerializationError(msg) => write!(f, "Serialization error: {msg}"),
            FormatError::NotSupported(msg) => write!(f, "Operation not supported: {msg}"),
            FormatError::InvalidOption { key, value } => {
                write!(f, "Invalid value '{value}' for option '{key}'")
            }
        }
    }
}

impl std::error::Error for FormatError {}

/// Errors raised when a node tree does not fit the editor schema
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SchemaError {
    /// The node type is not part of the schema
    UnknownNodeType(String),
    /// The mark type is not part of the schema
    UnknownMark(String),
    /// A required attribute is missing or out of range
    InvalidAttribute {
        node: String,
        attribute: String,
        reason: String,
    },
    /// A node holds a child its content expression does not allow
    InvalidContent { parent: String, child: String },
    /// A container that requires children has none
    MissingContent(String),
    /// Text nodes must carry at least one character
    EmptyText,
    /// The root of a pasted tree must be a `doc` node
    InvalidRoot(String),
}

impl fmt::Display for SchemaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SchemaError::UnknownNodeType(name) => write!(f, "Unknown node type: {name}"),
            SchemaError::UnknownMark(name) => write!(f, "Unknown mark type: {name}"),
            SchemaError::InvalidAttribute {
                node,
                attribute,
                reason,
            } => write!(f, "Invalid attribute '{attribute}' on {node}: {reason}"),
            SchemaError::InvalidContent { parent, child } => {
                write!(f, "Invalid content for node {parent}: {child}")
            }
            SchemaError::MissingContent(name) => {
                write!(f, "Node {name} requires at least one child")
            }
            SchemaError::EmptyText => write!(f, "Empty text nodes are not allowed"),
            SchemaError::InvalidRoot(name) => {
                write!(f, "Expected a doc node at the root, found {name}")
            }
        }
    }
}

impl std::error::Error for SchemaError {}

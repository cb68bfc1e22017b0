//! Functional entry points for plain text conversion
//!
//! These wrap the formats for callers that do not need the registry: the
//! editor's change handler wants HTML, the paste path wants a node tree.
//! Conversion itself never fails on input; only node tree building and JSON
//! serialization return errors.

use crate::error::FormatError;
use crate::formats::html::{serialize_to_html, HtmlOptions};
use crate::formats::nodes::{build_node_tree, node_tree_to_json, Node};
use crate::formats::text::{html_to_plain_text, parse_plain_text, ParseOptions};
use crate::stats::{validate_word_count, WordCountError};

/// Convert plain text to a sanitized HTML fragment with default options
///
/// # Example
///
/// ```ignore
/// use quill_babel::transforms::text_to_html;
///
/// let html = text_to_html("1. a\n2. b").unwrap();
/// assert_eq!(html, "<ol><li>a</li><li>b</li></ol>");
/// ```
pub fn text_to_html(input: &str) -> Result<String, FormatError> {
    text_to_html_with_options(input, ParseOptions::default(), HtmlOptions::default())
}

/// Convert plain text to HTML with explicit parse and render options
pub fn text_to_html_with_options(
    input: &str,
    parse: ParseOptions,
    render: HtmlOptions,
) -> Result<String, FormatError> {
    let doc = parse_plain_text(input, parse);
    serialize_to_html(&doc, render)
}

/// Convert plain text to an editor node tree
pub fn text_to_nodes(input: &str) -> Result<Node, FormatError> {
    text_to_nodes_with_options(input, ParseOptions::default())
}

pub fn text_to_nodes_with_options(input: &str, parse: ParseOptions) -> Result<Node, FormatError> {
    build_node_tree(&parse_plain_text(input, parse))
}

/// Convert plain text straight to the node tree's JSON text
pub fn text_to_nodes_json(input: &str, pretty: bool) -> Result<String, FormatError> {
    node_tree_to_json(&text_to_nodes(input)?, pretty)
}

/// Render plain text and read it back as the plain text debugging view
pub fn text_to_preview(input: &str) -> Result<String, FormatError> {
    Ok(html_to_plain_text(&text_to_html(input)?))
}

/// Render plain text and check the result reaches `minimum` words
pub fn check_length(input: &str, minimum: usize) -> Result<usize, String> {
    let html = text_to_html(input).map_err(|e| e.to_string())?;
    validate_word_count(&html, minimum).map_err(|e: WordCountError| e.to_string())
}

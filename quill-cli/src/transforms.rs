//! CLI-specific transforms
//!
//! This module defines all the transform combinations available to `quill inspect`.
//! Each transform is a stage + format combination (e.g., "lines-simple", "blocks-json").
//!
//! ## Transform Pipeline
//!
//! Plain text goes through three stages on its way to the renderers:
//!
//! 1. **Classification** - one kind per input line
//!    - `lines-simple`: line number, kind and carried text
//!
//! 2. **Aggregation** - lines folded into blocks
//!    - `blocks-json`: the block list as JSON
//!    - `blocks-treeviz`: tree visualization with Unicode icons
//!
//! 3. **Flattening** - blocks as the event stream both renderers consume
//!    - `events-json`: the event stream as JSON
//!    - `nodes-json`: the editor node tree built from those events
//!
//! ## Extra Parameters
//!
//! - `show-linum`: "false" hides line numbers in `lines-simple`
//! - `heading-level`: level given to titles (1-6)
//!
//! Example: `quill inspect article.txt lines-simple --extra-show-linum false`

use quill_babel::common::nested_to_flat::tree_to_events;
use quill_babel::formats::nodes::{build_node_tree, node_tree_to_json};
use quill_babel::formats::text::classify::LineKind;
use quill_babel::formats::text::parser::classify_lines;
use quill_babel::formats::text::{parse_plain_text, ParseOptions};
use quill_babel::formats::treeviz::to_treeviz_str;
use std::collections::HashMap;

/// All available CLI transforms (stage + format combinations)
pub const AVAILABLE_TRANSFORMS: &[&str] = &[
    "lines-simple",
    "blocks-json",
    "blocks-treeviz",
    "events-json",
    "nodes-json",
];

/// Transform used when none is named.
pub const DEFAULT_TRANSFORM: &str = "blocks-treeviz";

/// Execute a named transform on a source file with optional extra parameters
///
/// # Examples
///
/// ```ignore
/// let params = HashMap::new();
/// let output = execute_transform("- a\n- b", "blocks-treeviz", &params)?;
/// ```
pub fn execute_transform(
    source: &str,
    transform_name: &str,
    extra_params: &HashMap<String, String>,
) -> Result<String, String> {
    let options = parse_options(extra_params)?;

    match transform_name {
        "lines-simple" => {
            let show_linum = bool_param(extra_params, "show-linum", true)?;
            Ok(lines_to_simple(source, show_linum))
        }
        "blocks-json" => {
            let doc = parse_plain_text(source, options);
            serde_json::to_string_pretty(&doc)
                .map_err(|e| format!("JSON serialization failed: {e}"))
        }
        "blocks-treeviz" => Ok(to_treeviz_str(&parse_plain_text(source, options))),
        "events-json" => {
            let events = tree_to_events(&parse_plain_text(source, options));
            serde_json::to_string_pretty(&events)
                .map_err(|e| format!("JSON serialization failed: {e}"))
        }
        "nodes-json" => {
            let tree = build_node_tree(&parse_plain_text(source, options))
                .map_err(|e| format!("Transform failed: {e}"))?;
            node_tree_to_json(&tree, true).map_err(|e| e.to_string())
        }
        _ => Err(format!("Unknown transform: {transform_name}")),
    }
}

fn parse_options(params: &HashMap<String, String>) -> Result<ParseOptions, String> {
    let options = ParseOptions::default();
    match params.get("heading-level") {
        None => Ok(options),
        Some(raw) => match raw.parse::<u8>() {
            Ok(level) if (1..=6).contains(&level) => Ok(options.with_heading_level(level)),
            _ => Err(format!("Invalid heading level '{raw}', expected 1-6")),
        },
    }
}

fn bool_param(params: &HashMap<String, String>, key: &str, default: bool) -> Result<bool, String> {
    match params.get(key).map(|v| v.to_lowercase()) {
        None => Ok(default),
        Some(value) => match value.as_str() {
            "true" | "1" | "yes" => Ok(true),
            "false" | "0" | "no" => Ok(false),
            other => Err(format!("Invalid boolean value '{other}' for {key}")),
        },
    }
}

/// One row per input line: `  1 | title    Título`
fn lines_to_simple(source: &str, show_linum: bool) -> String {
    let source = source.strip_suffix('\n').unwrap_or(source);
    let mut output = String::new();
    for (index, kind) in classify_lines(source).iter().enumerate() {
        let row = format_line_kind(kind);
        if show_linum {
            output.push_str(&format!("{:>3} | {row}\n", index + 1));
        } else {
            output.push_str(&format!("{row}\n"));
        }
    }
    output
}

fn format_line_kind(kind: &LineKind) -> String {
    match kind.text() {
        Some(text) => format!("{:<8} {text}", kind.name()),
        None => kind.name().to_string(),
    }
}

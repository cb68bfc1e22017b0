//! HTML format implementation
//!
//! This module implements IR → HTML fragment export, the representation stored
//! for articles and sent to the page on every editor change.
//!
//! # Library Choice
//!
//! We use the `html5ever` + `markup5ever_rcdom` pair to build and serialize a DOM
//! instead of concatenating strings. Text escaping and tag balancing come from
//! the serializer, so the output is well formed by construction.
//!
//! # Element Mapping Table
//!
//! | IR Block          | HTML                              |
//! |-------------------|-----------------------------------|
//! | Heading(level)    | `<hN><strong>…</strong></hN>`     |
//! | Paragraph         | `<p>…</p>`                        |
//! | List(Ordered)     | `<ol><li>…</li>…</ol>`            |
//! | List(Unordered)   | `<ul><li>…</li>…</ul>`            |
//! | InlineRun(bold)   | `<strong>…</strong>`              |
//! | InlineRun(plain)  | escaped text                      |
//!
//! Inside a heading every run is already bold, so bold runs do not nest a
//! second `<strong>`.
//!
//! # Output Contract
//!
//! - A bare fragment: no `<html>`, no wrappers, no attributes, no whitespace
//!   between tags
//! - Never contains an empty block tag
//! - Never nests a list in a paragraph
//! - Empty input serializes to the empty string
//!
//! The last three are guaranteed by [`sanitize::sanitize_html`], which runs
//! after serialization unless disabled with the `sanitize` option.

pub mod sanitize;
mod serializer;

use crate::error::FormatError;
use crate::format::{bool_option, Format};
use crate::ir::nodes::Document;
use std::collections::HashMap;

pub use sanitize::sanitize_html;
pub use serializer::{serialize_to_html, HtmlOptions};

/// Format implementation for HTML
#[derive(Debug, Clone, Copy, Default)]
pub struct HtmlFormat {
    options: HtmlOptions,
}

impl HtmlFormat {
    /// Create a new HTML format with the specified options
    pub fn new(options: HtmlOptions) -> Self {
        Self { options }
    }

    /// Create an HTML format that skips the clean-up pass
    pub fn unsanitized() -> Self {
        Self::new(HtmlOptions { sanitize: false })
    }
}

impl Format for HtmlFormat {
    fn name(&self) -> &str {
        "html"
    }

    fn description(&self) -> &str {
        "HTML fragment for article bodies"
    }

    fn file_extensions(&self) -> &[&str] {
        &["html", "htm"]
    }

    fn supports_serialization(&self) -> bool {
        true
    }

    fn serialize(&self, doc: &Document) -> Result<String, FormatError> {
        serialize_to_html(doc, self.options)
    }

    fn serialize_with_options(
        &self,
        doc: &Document,
        options: &HashMap<String, String>,
    ) -> Result<String, FormatError> {
        let sanitize = bool_option(options, "sanitize", self.options.sanitize)?;
        serialize_to_html(doc, HtmlOptions { sanitize })
    }
}

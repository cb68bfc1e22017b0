//! Plain text format implementation
//!
//! This is where document structure is inferred. Authors type or paste plain
//! text following a handful of conventions, and the parser recovers blocks:
//!
//! | Input line                                   | Result                      |
//! |----------------------------------------------|-----------------------------|
//! | empty                                        | ends the open block         |
//! | `1. item`, `2) item`                         | ordered list item           |
//! | `- item`, `* item`, `• item`                 | unordered list item         |
//! | `**Title**` next to a blank line             | heading                     |
//! | anything else                                | paragraph text              |
//!
//! Inside any block, `**text**` becomes bold.
//!
//! # Stages
//!
//! - [`classify`]: one line → [`classify::LineKind`], pure and context-light
//!   (only whether the neighbors are blank)
//! - [`aggregate`]: folds classified lines into blocks
//! - [`inline`]: splits block text into inline runs
//! - [`parser`]: wires the stages together
//!
//! Serialization produces a readable plain text view of the rendered HTML
//! (see [`serializer`]); it is meant for debugging, not round-tripping.

pub mod aggregate;
pub mod classify;
pub mod inline;
pub mod parser;
pub mod serializer;

use crate::error::FormatError;
use crate::format::{heading_level_option, Format};
use crate::formats::html::HtmlFormat;
use crate::ir::nodes::Document;
use std::collections::HashMap;

pub use parser::{parse_plain_text, ParseOptions};
pub use serializer::html_to_plain_text;

/// Format implementation for plain text articles
#[derive(Debug, Clone, Copy, Default)]
pub struct TextFormat {
    options: ParseOptions,
}

impl TextFormat {
    pub fn new(options: ParseOptions) -> Self {
        Self { options }
    }
}

impl Format for TextFormat {
    fn name(&self) -> &str {
        "text"
    }

    fn description(&self) -> &str {
        "Plain text with lightweight list, title and bold conventions"
    }

    fn file_extensions(&self) -> &[&str] {
        &["txt", "text"]
    }

    fn supports_parsing(&self) -> bool {
        true
    }

    fn supports_serialization(&self) -> bool {
        true
    }

    fn parse(&self, source: &str) -> Result<Document, FormatError> {
        Ok(parse_plain_text(source, self.options))
    }

    fn parse_with_options(
        &self,
        source: &str,
        options: &HashMap<String, String>,
    ) -> Result<Document, FormatError> {
        let level = heading_level_option(options, self.options.heading_level)?;
        let options = self.options.with_heading_level(level);
        Ok(parse_plain_text(source, options))
    }

    fn serialize(&self, doc: &Document) -> Result<String, FormatError> {
        let html = HtmlFormat::default().serialize(doc)?;
        Ok(html_to_plain_text(&html))
    }

    fn serialize_with_options(
        &self,
        doc: &Document,
        _options: &HashMap<String, String>,
    ) -> Result<String, FormatError> {
        self.serialize(doc)
    }
}

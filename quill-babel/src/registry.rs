//! Format lookup by name or file extension
//!
//! The registry owns one instance of every format the cli can target. Names
//! are kept in a sorted map so listings are stable without extra work.

use crate::error::FormatError;
use crate::format::Format;
use crate::ir::nodes::Document;
use std::collections::{BTreeMap, HashMap};
use std::path::Path;

/// Named collection of formats
///
/// # Examples
///
/// ```ignore
/// let registry = FormatRegistry::default();
/// let none = HashMap::new();
/// let html = registry.convert("**Title**\n\nBody", "text", "html", &none, &none)?;
/// ```
pub struct FormatRegistry {
    formats: BTreeMap<String, Box<dyn Format>>,
}

impl FormatRegistry {
    pub fn new() -> Self {
        FormatRegistry {
            formats: BTreeMap::new(),
        }
    }

    /// Add a format, replacing any earlier one registered under the same name.
    pub fn register<F: Format + 'static>(&mut self, format: F) {
        self.formats
            .insert(format.name().to_string(), Box::new(format));
    }

    pub fn get(&self, name: &str) -> Result<&dyn Format, FormatError> {
        self.formats
            .get(name)
            .map(|f| f.as_ref())
            .ok_or_else(|| FormatError::FormatNotFound(name.to_string()))
    }

    pub fn has(&self, name: &str) -> bool {
        self.formats.contains_key(name)
    }

    /// Format names in alphabetical order
    pub fn list_formats(&self) -> Vec<String> {
        self.formats.keys().cloned().collect()
    }

    /// Pick a format from a file name's extension. Matching ignores case, so
    /// `ARTICLE.TXT` resolves like `article.txt`.
    pub fn detect_format_from_filename(&self, filename: &str) -> Option<String> {
        let extension = Path::new(filename)
            .extension()?
            .to_str()?
            .to_ascii_lowercase();

        self.formats
            .values()
            .find(|format| format.file_extensions().contains(&extension.as_str()))
            .map(|format| format.name().to_string())
    }

    pub fn parse(&self, source: &str, format: &str) -> Result<Document, FormatError> {
        self.parse_with_options(source, format, &HashMap::new())
    }

    pub fn parse_with_options(
        &self,
        source: &str,
        format: &str,
        options: &HashMap<String, String>,
    ) -> Result<Document, FormatError> {
        let fmt = self.get(format)?;
        if !fmt.supports_parsing() {
            return Err(FormatError::NotSupported(format!(
                "Format '{format}' cannot be read, only written"
            )));
        }
        fmt.parse_with_options(source, options)
    }

    pub fn serialize(&self, doc: &Document, format: &str) -> Result<String, FormatError> {
        self.serialize_with_options(doc, format, &HashMap::new())
    }

    pub fn serialize_with_options(
        &self,
        doc: &Document,
        format: &str,
        options: &HashMap<String, String>,
    ) -> Result<String, FormatError> {
        let fmt = self.get(format)?;
        if !fmt.supports_serialization() {
            return Err(FormatError::NotSupported(format!(
                "Format '{format}' cannot be written, only read"
            )));
        }
        fmt.serialize_with_options(doc, options)
    }

    /// Parse `source` as `from` and write it back out as `to`.
    ///
    /// Both names are checked before any work is done, so an unknown target
    /// is reported even when the source would not parse.
    pub fn convert(
        &self,
        source: &str,
        from: &str,
        to: &str,
        parse_options: &HashMap<String, String>,
        render_options: &HashMap<String, String>,
    ) -> Result<String, FormatError> {
        self.get(from)?;
        self.get(to)?;
        let doc = self.parse_with_options(source, from, parse_options)?;
        tracing::debug!(blocks = doc.blocks.len(), from, to, "converting");
        self.serialize_with_options(&doc, to, render_options)
    }

    /// Registry holding text, html, nodes and treeviz
    pub fn with_defaults() -> Self {
        use crate::formats::{html::HtmlFormat, nodes::NodesFormat, text::TextFormat};
        use crate::formats::treeviz::TreevizFormat;

        let mut registry = Self::new();
        registry.register(TextFormat::default());
        registry.register(HtmlFormat::default());
        registry.register(NodesFormat::default());
        registry.register(TreevizFormat);
        registry
    }
}

impl Default for FormatRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}

//! The `Format` trait and option helpers shared by its implementations
//!
//! A format reads plain text into the block IR, writes the IR out, or both.
//! Options arrive as string pairs from the cli or config and are validated by
//! the helpers at the bottom of this file.

use crate::error::FormatError;
use crate::ir::nodes::Document;
use std::collections::HashMap;

/// One input or output representation of an article
///
/// Every method except `name` has a default: a format opts in to reading or
/// writing by overriding the matching `supports_*` flag and method.
pub trait Format: Send + Sync {
    /// Registry key, such as "text" or "nodes"
    fn name(&self) -> &str;

    fn description(&self) -> &str {
        ""
    }

    /// Lowercase extensions without the dot, used to guess `--from`
    fn file_extensions(&self) -> &[&str] {
        &[]
    }

    fn supports_parsing(&self) -> bool {
        false
    }

    fn supports_serialization(&self) -> bool {
        false
    }

    fn parse(&self, _source: &str) -> Result<Document, FormatError> {
        Err(FormatError::NotSupported(format!(
            "Format '{}' cannot be read, only written",
            self.name()
        )))
    }

    /// Formats without options only accept an empty map.
    fn parse_with_options(
        &self,
        source: &str,
        options: &HashMap<String, String>,
    ) -> Result<Document, FormatError> {
        if options.is_empty() {
            self.parse(source)
        } else {
            Err(FormatError::NotSupported(format!(
                "Format '{}' takes no options",
                self.name()
            )))
        }
    }

    fn serialize(&self, _doc: &Document) -> Result<String, FormatError> {
        Err(FormatError::NotSupported(format!(
            "Format '{}' cannot be written, only read",
            self.name()
        )))
    }

    fn serialize_with_options(
        &self,
        doc: &Document,
        options: &HashMap<String, String>,
    ) -> Result<String, FormatError> {
        if options.is_empty() {
            self.serialize(doc)
        } else {
            Err(FormatError::NotSupported(format!(
                "Format '{}' takes no options",
                self.name()
            )))
        }
    }
}

/// Read a boolean option, accepting `true`/`false`/`yes`/`no`/`1`/`0`.
pub(crate) fn bool_option(
    options: &HashMap<String, String>,
    key: &str,
    default: bool,
) -> Result<bool, FormatError> {
    match options.get(key).map(|v| v.to_lowercase()) {
        None => Ok(default),
        Some(value) => match value.as_str() {
            "true" | "yes" | "1" => Ok(true),
            "false" | "no" | "0" => Ok(false),
            _ => Err(FormatError::InvalidOption {
                key: key.to_string(),
                value,
            }),
        },
    }
}

/// Read a heading level option (1-6).
pub(crate) fn heading_level_option(
    options: &HashMap<String, String>,
    default: u8,
) -> Result<u8, FormatError> {
    const KEY: &str = "heading-level";
    match options.get(KEY) {
        None => Ok(default),
        Some(raw) => match raw.parse::<u8>() {
            Ok(level) if (1..=6).contains(&level) => Ok(level),
            _ => Err(FormatError::InvalidOption {
                key: KEY.to_string(),
                value: raw.clone(),
            }),
        },
    }
}

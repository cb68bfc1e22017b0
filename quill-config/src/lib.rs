//! Settings for conversion, pasting and the word count.
//!
//! `defaults/quill.default.toml` is compiled in and always forms the bottom
//! layer. A `quill.toml`, an explicit `--config` file and single-key overrides
//! can be stacked on it with [`Loader`]; the result deserializes into
//! [`QuillConfig`].

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use quill_babel::formats::html::HtmlOptions;
use quill_babel::formats::nodes::Schema;
use quill_babel::formats::text::ParseOptions;
use serde::Deserialize;
use std::path::Path;

const DEFAULT_TOML: &str = include_str!("../defaults/quill.default.toml");

/// Top-level configuration consumed by quill applications.
#[derive(Debug, Clone, Deserialize)]
pub struct QuillConfig {
    pub convert: ConvertConfig,
    pub editor: EditorConfig,
    pub paste: PasteConfig,
    pub inspect: InspectConfig,
}

/// Plain text conversion knobs.
#[derive(Debug, Clone, Deserialize)]
pub struct ConvertConfig {
    pub heading_level: u8,
    pub html: HtmlConfig,
    pub nodes: NodesConfig,
}

impl From<&ConvertConfig> for ParseOptions {
    fn from(config: &ConvertConfig) -> Self {
        ParseOptions::default().with_heading_level(config.heading_level)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct HtmlConfig {
    pub sanitize: bool,
}

impl From<&HtmlConfig> for HtmlOptions {
    fn from(config: &HtmlConfig) -> Self {
        HtmlOptions {
            sanitize: config.sanitize,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct NodesConfig {
    pub pretty: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct EditorConfig {
    pub min_word_count: usize,
}

/// The schema of the editor pasted content is validated against.
#[derive(Debug, Clone, Deserialize)]
pub struct PasteConfig {
    pub nodes: Vec<String>,
    pub marks: Vec<String>,
    pub max_heading_level: u8,
}

impl From<&PasteConfig> for Schema {
    fn from(config: &PasteConfig) -> Self {
        Schema::new(
            config.nodes.iter().map(String::as_str),
            config.marks.iter().map(String::as_str),
            config.max_heading_level,
        )
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct InspectConfig {
    pub show_line_numbers: bool,
}

/// Builder that stacks config sources over the compiled-in defaults.
#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
}

impl Loader {
    /// Loader holding only the defaults.
    pub fn new() -> Self {
        let builder = Config::builder().add_source(File::from_str(DEFAULT_TOML, FileFormat::Toml));
        Self { builder }
    }

    /// Add a file that must exist.
    pub fn with_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(true);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Add a file that is skipped when absent, such as `./quill.toml`.
    pub fn with_optional_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(false);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Override one dotted key, e.g. `convert.heading_level`.
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    /// Merge every layer and deserialize.
    pub fn build(self) -> Result<QuillConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// The compiled-in defaults alone.
pub fn load_defaults() -> Result<QuillConfig, ConfigError> {
    Loader::new().build()
}

//! Treeviz formatter for inferred documents
//!
//! A visual, line based view of the block structure, meant for checking what
//! the plain text heuristics made of an input.
//!
//! The format is:
//! <connectors> <icon><space><label> (truncated to 30 characters)
//!
//! Example:
//!
//! ```text
//! ⧉ 3 blocks
//! ├─ § h2 Título
//! ├─ ¶ Texto normal con 𝐁 …
//! └─ ☰ ordered, 2 items
//!    ├─ • a
//!    └─ • b
//! ```
//!
//! Icons
//!     Document: ⧉
//!     Heading: §
//!     Paragraph: ¶
//!     List: ☰
//!     ListItem: •
//!     Bold run marker: 𝐁

use crate::error::FormatError;
use crate::format::Format;
use crate::ir::nodes::{Block, Document, InlineRun, ListKind};

const MAX_LABEL: usize = 30;

/// Render the document's block tree.
pub fn to_treeviz_str(doc: &Document) -> String {
    let mut output = format!("⧉ {} blocks\n", doc.blocks.len());
    let count = doc.blocks.len();
    for (index, block) in doc.blocks.iter().enumerate() {
        let is_last = index + 1 == count;
        let connector = if is_last { "└─" } else { "├─" };
        let child_prefix = if is_last { "   " } else { "│  " };
        match block {
            Block::Heading { level, runs } => {
                output.push_str(&format!("{connector} § h{level} {}\n", label(runs)));
            }
            Block::Paragraph { runs } => {
                output.push_str(&format!("{connector} ¶ {}\n", label(runs)));
            }
            Block::List { kind, items } => {
                let kind = match kind {
                    ListKind::Ordered => "ordered",
                    ListKind::Unordered => "unordered",
                };
                output.push_str(&format!("{connector} ☰ {kind}, {} items\n", items.len()));
                for (item_index, item) in items.iter().enumerate() {
                    let item_connector = if item_index + 1 == items.len() {
                        "└─"
                    } else {
                        "├─"
                    };
                    output.push_str(&format!(
                        "{child_prefix}{item_connector} • {}\n",
                        label(item)
                    ));
                }
            }
        }
    }
    output
}

fn label(runs: &[InlineRun]) -> String {
    let text: String = runs
        .iter()
        .map(|run| {
            if run.bold {
                format!("𝐁 {}", run.text)
            } else {
                run.text.clone()
            }
        })
        .collect();
    truncate(&text, MAX_LABEL)
}

fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        text.to_string()
    } else {
        let cut: String = text.chars().take(max - 1).collect();
        format!("{cut}…")
    }
}

/// Format implementation for the block tree view
#[derive(Debug, Clone, Copy, Default)]
pub struct TreevizFormat;

impl Format for TreevizFormat {
    fn name(&self) -> &str {
        "treeviz"
    }

    fn description(&self) -> &str {
        "Visual tree of the inferred blocks"
    }

    fn supports_serialization(&self) -> bool {
        true
    }

    fn serialize(&self, doc: &Document) -> Result<String, FormatError> {
        Ok(to_treeviz_str(doc))
    }

    fn serialize_with_options(
        &self,
        doc: &Document,
        _options: &std::collections::HashMap<String, String>,
    ) -> Result<String, FormatError> {
        self.serialize(doc)
    }
}

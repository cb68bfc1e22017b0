//! Defines the flat event stream representation of a document.

use crate::ir::nodes::InlineRun;
use serde::Serialize;

/// Represents a single event in the document stream.
///
/// Renderers walk this stream instead of matching on blocks directly, so every
/// output format sees exactly the same open/close structure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Event {
    StartDocument,
    EndDocument,
    StartHeading(u8),
    EndHeading(u8),
    StartParagraph,
    EndParagraph,
    StartList { ordered: bool },
    EndList,
    StartListItem,
    EndListItem,
    Inline(InlineRun),
}

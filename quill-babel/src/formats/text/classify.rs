//! Line classification
//!
//! Every input line is assigned exactly one [`LineKind`]. The rules are applied
//! in a fixed precedence order, which is how ambiguous lines are resolved:
//!
//! 1. empty after trimming → `Blank`
//! 2. `^\d+[.)]\s+(.*)` → `NumberedItem`
//! 3. `^[-*•]\s+(.*)` → `BulletItem`
//! 4. starts and ends with `**`, next to a blank line → `TitleCandidate`
//!    holding the text between the outer markers
//! 5. anything else → `Plain`
//!
//! List patterns are tested before titles, so `- **Tip**` is always a list item.

use once_cell::sync::Lazy;
use regex::Regex;

static NUMBERED_ITEM: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d+[.)]\s+(.*)$").expect("numbered item pattern"));
static BULLET_ITEM: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[-*•]\s+(.*)$").expect("bullet item pattern"));

pub(crate) const BOLD_MARKER: &str = "**";

/// The category of a single input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineKind {
    Blank,
    NumberedItem(String),
    BulletItem(String),
    /// Inner text with the surrounding bold markers stripped.
    TitleCandidate(String),
    Plain(String),
}

impl LineKind {
    /// Short name used by inspection output.
    pub fn name(&self) -> &'static str {
        match self {
            LineKind::Blank => "blank",
            LineKind::NumberedItem(_) => "numbered",
            LineKind::BulletItem(_) => "bullet",
            LineKind::TitleCandidate(_) => "title",
            LineKind::Plain(_) => "plain",
        }
    }

    /// The text carried by the line, if any.
    pub fn text(&self) -> Option<&str> {
        match self {
            LineKind::Blank => None,
            LineKind::NumberedItem(text)
            | LineKind::BulletItem(text)
            | LineKind::TitleCandidate(text)
            | LineKind::Plain(text) => Some(text),
        }
    }
}

/// Classify one line given whether its neighbors are blank.
///
/// The first line counts as having a blank predecessor and the last line a
/// blank successor.
pub fn classify_line(line: &str, prev_blank: bool, next_blank: bool) -> LineKind {
    let line = line.trim();
    if line.is_empty() {
        return LineKind::Blank;
    }

    if let Some(caps) = NUMBERED_ITEM.captures(line) {
        return LineKind::NumberedItem(caps[1].trim().to_string());
    }

    if let Some(caps) = BULLET_ITEM.captures(line) {
        return LineKind::BulletItem(caps[1].trim().to_string());
    }

    if prev_blank || next_blank {
        if let Some(title) = whole_line_bold(line) {
            return LineKind::TitleCandidate(title.to_string());
        }
    }

    LineKind::Plain(line.to_string())
}

/// Strips one `**` from each end. Inner markers are left for inline
/// formatting. An empty inner text is not a title.
fn whole_line_bold(line: &str) -> Option<&str> {
    let inner = line
        .strip_prefix(BOLD_MARKER)?
        .strip_suffix(BOLD_MARKER)?
        .trim();
    (!inner.is_empty()).then_some(inner)
}

//! Word counting over rendered article HTML
//!
//! Articles must reach a minimum length before publishing. Counting works on
//! the rendered HTML so that it sees exactly what readers will see: tags are
//! replaced by spaces, whitespace is collapsed and empty tokens are discarded.

use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;

/// Minimum number of words an article needs.
pub const DEFAULT_MIN_WORD_COUNT: usize = 1000;

static TAG: Lazy<Regex> = Lazy::new(|| Regex::new(r"<[^>]*>").expect("valid tag regex"));

/// Raised when an article is shorter than the required minimum
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WordCountError {
    BelowMinimum { count: usize, minimum: usize },
}

impl WordCountError {
    /// How many words are still missing.
    pub fn missing(&self) -> usize {
        match self {
            WordCountError::BelowMinimum { count, minimum } => minimum.saturating_sub(*count),
        }
    }
}

impl fmt::Display for WordCountError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WordCountError::BelowMinimum { count, minimum } => write!(
                f,
                "{count} / {minimum} words, {} missing to reach the minimum",
                self.missing()
            ),
        }
    }
}

impl std::error::Error for WordCountError {}

/// Count the words in an HTML fragment.
pub fn count_words_from_html(html: &str) -> usize {
    if html.is_empty() {
        return 0;
    }
    TAG.replace_all(html, " ").split_whitespace().count()
}

/// Count the words in `html` and check them against `minimum`.
///
/// Returns the count when the minimum is met.
pub fn validate_word_count(html: &str, minimum: usize) -> Result<usize, WordCountError> {
    let count = count_words_from_html(html);
    if count >= minimum {
        Ok(count)
    } else {
        Err(WordCountError::BelowMinimum { count, minimum })
    }
}

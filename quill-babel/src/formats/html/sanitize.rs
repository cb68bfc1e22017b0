//! Structural clean-up of HTML fragments
//!
//! Two repairs, applied until the fragment stops changing:
//!
//! - block-level tag pairs holding only whitespace are removed (along with
//!   empty `<strong></strong>` pairs, which would otherwise keep a heading alive)
//! - a `<p>` wrapped around an `<ol>`/`<ul>` is unwrapped
//!
//! Iterating to a fixpoint makes the pass idempotent: removing an empty `<li>`
//! may leave an empty `<ul>`, which the next round removes.
//!
//! This is not an HTML sanitizer in the security sense. Attributes, scripts
//! and entities are left alone.

use once_cell::sync::Lazy;
use regex::Regex;

static EMPTY_BLOCK: Lazy<Regex> = Lazy::new(|| {
    let pairs: Vec<String> = ["p", "li", "ul", "ol", "h1", "h2", "h3", "h4", "h5", "h6"]
        .iter()
        .map(|tag| format!(r"<{tag}>\s*</{tag}>"))
        .chain(std::iter::once("<strong></strong>".to_string()))
        .collect();
    Regex::new(&pairs.join("|")).expect("empty block pattern")
});

static PARAGRAPH_AROUND_LIST_OPEN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"<p>\s*(<ol>|<ul>)").expect("list open pattern"));

static PARAGRAPH_AROUND_LIST_CLOSE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(</ol>|</ul>)\s*</p>").expect("list close pattern"));

/// Remove empty block tags and unwrap lists nested in paragraphs.
pub fn sanitize_html(html: &str) -> String {
    let mut current = html.to_string();
    loop {
        let next = sanitize_once(&current);
        if next == current {
            return current;
        }
        current = next;
    }
}

fn sanitize_once(html: &str) -> String {
    let stripped = EMPTY_BLOCK.replace_all(html, "");
    let opened = PARAGRAPH_AROUND_LIST_OPEN.replace_all(&stripped, "${1}");
    PARAGRAPH_AROUND_LIST_CLOSE
        .replace_all(&opened, "${1}")
        .into_owned()
}

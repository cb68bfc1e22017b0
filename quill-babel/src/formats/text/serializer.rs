//! Plain text rendering (HTML → readable text)
//!
//! Turns rendered article HTML back into text that is easy to eyeball while
//! debugging. It is a view, not an inverse of the parser: bold comes back as
//! `*x*` and list items as `  • x`.

use once_cell::sync::Lazy;
use regex::Regex;

struct Rule {
    pattern: Lazy<Regex>,
    replacement: &'static str,
}

macro_rules! rule {
    ($pattern:expr, $replacement:expr) => {
        Rule {
            pattern: Lazy::new(|| Regex::new($pattern).expect("text view pattern")),
            replacement: $replacement,
        }
    };
}

static RULES: [Rule; 11] = [
    rule!(r"<h[1-6]>(.*?)</h[1-6]>", "\n\n$1\n\n"),
    rule!(r"<p>(.*?)</p>", "\n$1\n"),
    rule!(r"</?ol>", "\n"),
    rule!(r"</?ul>", "\n"),
    rule!(r"<li>(.*?)</li>", "  • $1\n"),
    rule!(r"<strong>(.*?)</strong>", "*$1*"),
    rule!(r"<br\s*/?>", "\n"),
    rule!(r"&nbsp;", " "),
    rule!(r"&lt;", "<"),
    rule!(r"&gt;", ">"),
    rule!(r"&amp;", "&"),
];

static BLANK_RUNS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\n\s*\n").expect("blank run pattern"));

/// Render HTML produced by the HTML format as readable plain text.
pub fn html_to_plain_text(html: &str) -> String {
    let mut text = html.to_string();
    for rule in &RULES {
        text = rule
            .pattern
            .replace_all(&text, rule.replacement)
            .into_owned();
    }
    // Only newlines are trimmed so a leading list item keeps its indent.
    BLANK_RUNS
        .replace_all(&text, "\n\n")
        .trim_matches('\n')
        .to_string()
}

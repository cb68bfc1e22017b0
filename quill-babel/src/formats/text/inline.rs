//! Inline emphasis
//!
//! Splits text on the non-greedy `**...**` pattern. Matched spans become bold
//! runs, everything else stays plain, and reading order is kept. Characters
//! outside a matched pair are never altered, so an unmatched `**` stays in the
//! text verbatim.

use crate::ir::nodes::InlineRun;
use once_cell::sync::Lazy;
use regex::Regex;

static BOLD_SPAN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\*\*(.*?)\*\*").expect("bold span pattern"));

/// Splits `text` into plain and bold runs. Empty spans produce no run.
pub fn format_inline(text: &str) -> Vec<InlineRun> {
    let mut runs = Vec::new();
    let mut last_end = 0;

    for caps in BOLD_SPAN.captures_iter(text) {
        let (Some(whole), Some(inner)) = (caps.get(0), caps.get(1)) else {
            continue;
        };
        push_run(&mut runs, &text[last_end..whole.start()], false);
        push_run(&mut runs, inner.as_str(), true);
        last_end = whole.end();
    }
    push_run(&mut runs, &text[last_end..], false);

    runs
}

fn push_run(runs: &mut Vec<InlineRun>, text: &str, bold: bool) {
    if text.is_empty() {
        return;
    }
    runs.push(InlineRun {
        text: text.to_string(),
        bold,
    });
}

//! Properties that hold for every input

use proptest::prelude::*;
use quill_babel::formats::html::sanitize_html;
use quill_babel::formats::nodes::{handle_paste, NotHandled, Schema, SchemaEditor};
use quill_babel::formats::text::ParseOptions;
use quill_babel::transforms::text_to_html;

const EMPTY_PAIRS: &[&str] = &[
    "<p></p>",
    "<li></li>",
    "<ul></ul>",
    "<ol></ol>",
    "<h1></h1>",
    "<h2></h2>",
    "<h3></h3>",
    "<h4></h4>",
    "<h5></h5>",
    "<h6></h6>",
    "<strong></strong>",
];

/// One line of article-like text, mixing every convention the parser knows.
fn article_line() -> impl Strategy<Value = String> {
    let word = "[a-zA-Záéíóúñ]{1,8}";
    prop_oneof![
        Just(String::new()),
        Just("   ".to_string()),
        word.prop_map(|w| format!("{w} más texto")),
        word.prop_map(|w| format!("1. {w}")),
        word.prop_map(|w| format!("2) {w}")),
        word.prop_map(|w| format!("- {w}")),
        word.prop_map(|w| format!("* {w}")),
        word.prop_map(|w| format!("• {w}")),
        word.prop_map(|w| format!("**{w}**")),
        word.prop_map(|w| format!("con **{w}** dentro")),
        word.prop_map(|w| format!("**{w}** y **{w}**")),
        Just("**".to_string()),
        Just("****".to_string()),
        Just("- ****".to_string()),
        Just("1. ** **".to_string()),
        Just("******".to_string()),
        Just("********".to_string()),
    ]
}

/// Top-level blocks in a rendered fragment. Block tags never nest in it.
fn top_level_blocks(html: &str) -> usize {
    ["<p>", "<ul>", "<ol>", "<h1>", "<h2>", "<h3>", "<h4>", "<h5>", "<h6>"]
        .iter()
        .map(|tag| html.matches(tag).count())
        .sum()
}

fn article() -> impl Strategy<Value = String> {
    prop::collection::vec(article_line(), 0..12).prop_map(|lines| lines.join("\n"))
}

proptest! {
    #[test]
    fn conversion_never_fails(input in ".*") {
        prop_assert!(text_to_html(&input).is_ok());
    }

    #[test]
    fn sanitizer_is_idempotent(input in "(<(p|li|ul|ol|h2|strong)>|</(p|li|ul|ol|h2|strong)>| |x){0,20}") {
        let once = sanitize_html(&input);
        prop_assert_eq!(sanitize_html(&once), once);
    }

    #[test]
    fn output_has_no_empty_blocks(input in article()) {
        let html = text_to_html(&input).unwrap();
        for pair in EMPTY_PAIRS {
            prop_assert!(!html.contains(pair), "{} in {}", pair, html);
        }
    }

    #[test]
    fn html_and_pasted_tree_agree_on_blocks(input in article()) {
        let html = text_to_html(&input).unwrap();
        let mut editor = SchemaEditor::new(Schema::default());
        let result = handle_paste(&mut editor, Some(&input), ParseOptions::default());

        if html.is_empty() {
            prop_assert!(
                matches!(result, Err(NotHandled::NoPlainText | NotHandled::NothingToInsert)),
                "{:?} pasted for {:?}", result, input
            );
        } else {
            let summary = result.unwrap();
            prop_assert_eq!(summary.blocks, top_level_blocks(&html), "html: {}", html);
            prop_assert_eq!(editor.document().content.len(), summary.blocks);
        }
    }

    #[test]
    fn output_never_nests_lists_in_paragraphs(input in article()) {
        let html = text_to_html(&input).unwrap();
        prop_assert!(!html.contains("<p><ol>"));
        prop_assert!(!html.contains("<p><ul>"));
        prop_assert!(!html.contains("</ol></p>"));
        prop_assert!(!html.contains("</ul></p>"));
    }

    #[test]
    fn numbered_lines_make_one_ordered_list(items in prop::collection::vec("[a-z]{1,8}", 1..8)) {
        let input = items
            .iter()
            .enumerate()
            .map(|(i, item)| format!("{}. {item}", i + 1))
            .collect::<Vec<_>>()
            .join("\n");
        let html = text_to_html(&input).unwrap();
        let expected = format!(
            "<ol>{}</ol>",
            items.iter().map(|item| format!("<li>{item}</li>")).collect::<String>()
        );
        prop_assert_eq!(html, expected);
    }

    #[test]
    fn bullet_lines_never_produce_an_ordered_list(items in prop::collection::vec("[a-z]{1,8}", 1..8)) {
        let input = items.iter().map(|item| format!("- {item}")).collect::<Vec<_>>().join("\n");
        let html = text_to_html(&input).unwrap();
        prop_assert!(!html.contains("<ol>"));
        prop_assert_eq!(html.matches("<ul>").count(), 1);
    }
}

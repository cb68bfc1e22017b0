//! Export tests for the editor node tree (plain text → JSON nodes)

use insta::assert_snapshot;
use quill_babel::formats::nodes::tree::node_type;
use quill_babel::formats::nodes::{node_tree_to_json, Node, Schema};
use quill_babel::transforms::{text_to_html, text_to_nodes};

fn compact(input: &str) -> String {
    node_tree_to_json(&text_to_nodes(input).unwrap(), false).unwrap()
}

#[test]
fn test_empty_input_is_an_empty_doc() {
    assert_snapshot!(compact(""), @r#"{"type":"doc"}"#);
}

#[test]
fn test_heading_and_paragraph() {
    assert_snapshot!(
        compact("**Título**\n\nTexto normal"),
        @r#"{"type":"doc","content":[{"type":"heading","attrs":{"level":2},"content":[{"type":"text","text":"Título"}]},{"type":"paragraph","content":[{"type":"text","text":"Texto normal"}]}]}"#
    );
}

#[test]
fn test_bold_run_carries_mark() {
    assert_snapshot!(
        compact("Esto es **importante**"),
        @r#"{"type":"doc","content":[{"type":"paragraph","content":[{"type":"text","text":"Esto es "},{"type":"text","text":"importante","marks":[{"type":"bold"}]}]}]}"#
    );
}

#[test]
fn test_list_items_wrap_a_paragraph() {
    assert_snapshot!(
        compact("1. a\n2. b"),
        @r#"{"type":"doc","content":[{"type":"orderedList","content":[{"type":"listItem","content":[{"type":"paragraph","content":[{"type":"text","text":"a"}]}]},{"type":"listItem","content":[{"type":"paragraph","content":[{"type":"text","text":"b"}]}]}]}]}"#
    );
}

#[test]
fn test_json_round_trips_through_serde() {
    let tree = text_to_nodes("**T**\n\n- **a** b").unwrap();
    let json = node_tree_to_json(&tree, true).unwrap();
    let back: Node = serde_json::from_str(&json).unwrap();
    assert_eq!(back, tree);
}

#[test]
fn test_tree_and_html_agree_on_block_order() {
    let input = "**T**\n\n1. a\n- b\n\ntexto";
    let tree = text_to_nodes(input).unwrap();
    let types: Vec<&str> = tree.content.iter().map(|n| n.node_type.as_str()).collect();
    assert_eq!(
        types,
        vec![
            node_type::HEADING,
            node_type::ORDERED_LIST,
            node_type::BULLET_LIST,
            node_type::PARAGRAPH
        ]
    );
    assert_eq!(
        text_to_html(input).unwrap(),
        "<h2><strong>T</strong></h2><ol><li>a</li></ol><ul><li>b</li></ul><p>texto</p>"
    );
}

#[test]
fn test_generated_trees_fit_the_default_schema() {
    for input in ["", "x", "**T**\n\n1. a\n- **b**", "a\n**b**\nc"] {
        let tree = text_to_nodes(input).unwrap();
        if tree.content.is_empty() {
            continue;
        }
        assert_eq!(Schema::default().validate_document(&tree), Ok(()));
    }
}

//! Paste handling against the in-memory editor

use quill_babel::formats::nodes::tree::{mark_type, node_type};
use quill_babel::formats::nodes::{
    handle_paste, Node, NotHandled, PasteSummary, Schema, SchemaEditor,
};
use quill_babel::formats::text::ParseOptions;
use quill_babel::SchemaError;

#[test]
fn test_paste_structured_text() {
    let mut editor = SchemaEditor::new(Schema::default());
    let summary = handle_paste(
        &mut editor,
        Some("**Receta**\n\n1. Harina\n2. Agua"),
        ParseOptions::default(),
    )
    .unwrap();

    assert_eq!(summary, PasteSummary { blocks: 2 });
    let doc = editor.document();
    assert!(doc.content[0].is(node_type::HEADING));
    assert!(doc.content[1].is(node_type::ORDERED_LIST));
    assert_eq!(doc.content[1].content.len(), 2);
}

#[test]
fn test_rejected_paste_leaves_editor_unchanged() {
    let schema = Schema::default().without_mark(mark_type::BOLD);
    let existing = Node::doc(vec![Node::paragraph(vec![Node::text("antes")])]);
    let mut editor = SchemaEditor::with_document(schema, existing).unwrap();
    let before = editor.clone();

    let result = handle_paste(&mut editor, Some("un **texto**"), ParseOptions::default());

    assert_eq!(
        result,
        Err(NotHandled::SchemaRejected(SchemaError::UnknownMark(
            "bold".to_string()
        )))
    );
    assert_eq!(editor, before);
}

#[test]
fn test_heading_level_above_schema_maximum_is_rejected() {
    let schema = Schema::new(node_type::ALL.iter().copied(), mark_type::ALL.iter().copied(), 2);
    let mut editor = SchemaEditor::new(schema);
    let before = editor.clone();

    let result = handle_paste(
        &mut editor,
        Some("**T**\n\nx"),
        ParseOptions::default().with_heading_level(3),
    );

    assert!(matches!(
        result,
        Err(NotHandled::SchemaRejected(SchemaError::InvalidAttribute { .. }))
    ));
    assert_eq!(editor, before);
}

#[test]
fn test_paste_replaces_selected_blocks() {
    let existing = Node::doc(vec![
        Node::paragraph(vec![Node::text("uno")]),
        Node::paragraph(vec![Node::text("dos")]),
        Node::paragraph(vec![Node::text("tres")]),
    ]);
    let mut editor = SchemaEditor::with_document(Schema::default(), existing).unwrap();
    editor.select(1..2);

    handle_paste(&mut editor, Some("- a\n- b"), ParseOptions::default()).unwrap();

    let doc = editor.into_document();
    assert_eq!(doc.content.len(), 3);
    assert!(doc.content[1].is(node_type::BULLET_LIST));
    assert_eq!(doc.content[2].content[0].text.as_deref(), Some("tres"));
}

#[test]
fn test_not_handled_messages() {
    assert_eq!(
        NotHandled::NoPlainText.to_string(),
        "Clipboard has no plain text"
    );
    assert_eq!(
        NotHandled::SchemaRejected(SchemaError::UnknownNodeType("heading".to_string()))
            .to_string(),
        "Editor schema rejected paste: Unknown node type: heading"
    );
}

#[test]
fn test_marker_only_text_is_nothing_to_insert() {
    for input in ["****", "- ****", "1. ****\n2. ** **", "**** ****"] {
        let mut editor = SchemaEditor::new(Schema::default());
        let before = editor.clone();
        assert_eq!(
            handle_paste(&mut editor, Some(input), ParseOptions::default()),
            Err(NotHandled::NothingToInsert),
            "input {input:?}"
        );
        assert_eq!(editor, before);
    }
}

#[test]
fn test_blank_list_items_are_not_pasted() {
    let mut editor = SchemaEditor::new(Schema::default());
    let summary = handle_paste(&mut editor, Some("- ****\n- uno"), ParseOptions::default()).unwrap();

    assert_eq!(summary, PasteSummary { blocks: 1 });
    let list = &editor.document().content[0];
    assert!(list.is(node_type::BULLET_LIST));
    assert_eq!(list.content.len(), 1);
}

//! Tests for the IR → event stream flattening shared by every renderer.

use quill_babel::common::nested_to_flat::tree_to_events;
use quill_babel::formats::text::{parse_plain_text, ParseOptions};
use quill_babel::ir::events::Event;
use quill_babel::ir::nodes::*;

fn events_for(input: &str) -> Vec<Event> {
    tree_to_events(&parse_plain_text(input, ParseOptions::default()))
}

#[test]
fn test_empty_document_is_bracketed() {
    assert_eq!(
        events_for(""),
        vec![Event::StartDocument, Event::EndDocument]
    );
}

#[test]
fn test_heading_then_paragraph() {
    assert_eq!(
        events_for("**Título**\n\nTexto normal"),
        vec![
            Event::StartDocument,
            Event::StartHeading(2),
            Event::Inline(InlineRun::plain("Título")),
            Event::EndHeading(2),
            Event::StartParagraph,
            Event::Inline(InlineRun::plain("Texto normal")),
            Event::EndParagraph,
            Event::EndDocument,
        ]
    );
}

#[test]
fn test_list_items_are_bracketed() {
    assert_eq!(
        events_for("- a\n- **b**"),
        vec![
            Event::StartDocument,
            Event::StartList { ordered: false },
            Event::StartListItem,
            Event::Inline(InlineRun::plain("a")),
            Event::EndListItem,
            Event::StartListItem,
            Event::Inline(InlineRun::bold("b")),
            Event::EndListItem,
            Event::EndList,
            Event::EndDocument,
        ]
    );
}

#[test]
fn test_starts_and_ends_balance() {
    let events = events_for("**T**\n\n1. a\n2. b\n- c\n\ntexto **x** fin\nmás");
    let mut depth: i32 = 0;
    for event in &events {
        match event {
            Event::StartDocument
            | Event::StartHeading(_)
            | Event::StartParagraph
            | Event::StartList { .. }
            | Event::StartListItem => depth += 1,
            Event::EndDocument
            | Event::EndHeading(_)
            | Event::EndParagraph
            | Event::EndList
            | Event::EndListItem => depth -= 1,
            Event::Inline(_) => assert!(depth > 0),
        }
        assert!(depth >= 0);
    }
    assert_eq!(depth, 0);
}

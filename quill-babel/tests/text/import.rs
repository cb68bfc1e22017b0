//! Import tests for the plain text format (text → IR)

use quill_babel::format::Format;
use quill_babel::formats::text::classify::LineKind;
use quill_babel::formats::text::parser::classify_lines;
use quill_babel::formats::text::{parse_plain_text, ParseOptions, TextFormat};
use quill_babel::ir::nodes::*;

fn parse(src: &str) -> Vec<Block> {
    parse_plain_text(src, ParseOptions::default()).blocks
}

#[test]
fn test_classification_uses_neighbors() {
    assert_eq!(
        classify_lines("**A**\n**B**\n**C**"),
        vec![
            LineKind::TitleCandidate("A".to_string()),
            LineKind::Plain("**B**".to_string()),
            LineKind::TitleCandidate("C".to_string()),
        ]
    );
}

#[test]
fn test_title_keeps_inner_markers_for_inline_formatting() {
    assert_eq!(
        parse("**a** y **b**"),
        vec![Block::heading(
            2,
            vec![
                InlineRun::plain("a"),
                InlineRun::bold(" y "),
                InlineRun::plain("b"),
            ]
        )]
    );
}

#[test]
fn test_bold_spans_inside_paragraph_stay_inline() {
    assert_eq!(
        parse("x
**a** y **b**
z"),
        vec![Block::paragraph(vec![
            InlineRun::plain("x "),
            InlineRun::bold("a"),
            InlineRun::plain(" y "),
            InlineRun::bold("b"),
            InlineRun::plain(" z"),
        ])]
    );
}

#[test]
fn test_heading_runs_are_plain() {
    assert_eq!(
        parse("**Título**"),
        vec![Block::heading(2, vec![InlineRun::plain("Título")])]
    );
}

#[test]
fn test_list_items_are_trimmed() {
    assert_eq!(
        parse("1.   uno  \n2.\tdos"),
        vec![Block::ordered_list(vec![
            vec![InlineRun::plain("uno")],
            vec![InlineRun::plain("dos")],
        ])]
    );
}

#[test]
fn test_marker_without_space_is_plain_text() {
    assert_eq!(
        parse("1.uno\n-dos"),
        vec![Block::paragraph(vec![InlineRun::plain("1.uno -dos")])]
    );
}

#[test]
fn test_bold_can_span_joined_lines() {
    assert_eq!(
        parse("un **texto\nlargo** aquí"),
        vec![Block::paragraph(vec![
            InlineRun::plain("un "),
            InlineRun::bold("texto largo"),
            InlineRun::plain(" aquí"),
        ])]
    );
}

#[test]
fn test_unmatched_marker_stays_literal() {
    assert_eq!(
        parse("precio **especial"),
        vec![Block::paragraph(vec![InlineRun::plain("precio **especial")])]
    );
}

#[test]
fn test_format_metadata() {
    let format = TextFormat::default();
    assert_eq!(format.name(), "text");
    assert!(format.supports_parsing());
    assert!(format.supports_serialization());
    assert_eq!(format.file_extensions(), &["txt", "text"]);
}

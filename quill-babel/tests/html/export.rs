//! Export tests for HTML format (plain text → HTML)
//!
//! These tests run the whole pipeline and check the exact fragment produced.

use insta::assert_snapshot;
use quill_babel::format::Format;
use quill_babel::formats::html::{HtmlFormat, HtmlOptions};
use quill_babel::formats::text::TextFormat;
use quill_babel::FormatRegistry;

/// Helper to convert plain text to HTML
fn text_to_html(src: &str) -> String {
    let doc = TextFormat::default().parse(src).unwrap();
    HtmlFormat::default().serialize(&doc).unwrap()
}

// ============================================================================
// BASIC ELEMENT TESTS
// ============================================================================

#[test]
fn test_empty_input() {
    assert_eq!(text_to_html(""), "");
    assert_eq!(text_to_html("\n\n   \n"), "");
}

#[test]
fn test_ordered_list() {
    assert_snapshot!(text_to_html("1. a\n2. b"), @"<ol><li>a</li><li>b</li></ol>");
}

#[test]
fn test_ordered_list_paren_markers() {
    assert_snapshot!(text_to_html("1) a\n10) b"), @"<ol><li>a</li><li>b</li></ol>");
}

#[test]
fn test_unordered_list() {
    assert_snapshot!(text_to_html("- a\n- b"), @"<ul><li>a</li><li>b</li></ul>");
}

#[test]
fn test_mixed_bullet_markers_share_one_list() {
    assert_snapshot!(
        text_to_html("- a\n* b\n• c"),
        @"<ul><li>a</li><li>b</li><li>c</li></ul>"
    );
}

#[test]
fn test_title_then_paragraph() {
    assert_snapshot!(
        text_to_html("**Título**\n\nTexto normal"),
        @"<h2><strong>Título</strong></h2><p>Texto normal</p>"
    );
}

#[test]
fn test_consecutive_lines_join() {
    assert_snapshot!(text_to_html("Línea uno\nLínea dos"), @"<p>Línea uno Línea dos</p>");
}

#[test]
fn test_inline_bold() {
    assert_snapshot!(
        text_to_html("Esto es **importante** y esto no"),
        @"<p>Esto es <strong>importante</strong> y esto no</p>"
    );
}

// ============================================================================
// STRUCTURE TESTS
// ============================================================================

#[test]
fn test_kind_switch_makes_sibling_lists() {
    assert_snapshot!(
        text_to_html("1. a\n- b\n2. c"),
        @"<ol><li>a</li></ol><ul><li>b</li></ul><ol><li>c</li></ol>"
    );
}

#[test]
fn test_blank_line_splits_lists() {
    assert_snapshot!(
        text_to_html("- a\n\n- b"),
        @"<ul><li>a</li></ul><ul><li>b</li></ul>"
    );
}

#[test]
fn test_plain_line_closes_list() {
    assert_snapshot!(
        text_to_html("- a\ntexto\n- b"),
        @"<ul><li>a</li></ul><p>texto</p><ul><li>b</li></ul>"
    );
}

#[test]
fn test_list_item_wins_over_title() {
    assert_snapshot!(
        text_to_html("- **Consejo**"),
        @"<ul><li><strong>Consejo</strong></li></ul>"
    );
}

#[test]
fn test_bold_line_inside_paragraph_is_not_a_title() {
    assert_snapshot!(
        text_to_html("antes\n**medio**\ndespués"),
        @"<p>antes <strong>medio</strong> después</p>"
    );
}

#[test]
fn test_title_flushes_open_paragraph() {
    assert_snapshot!(
        text_to_html("texto\n**Título**\n\nmás"),
        @"<p>texto</p><h2><strong>Título</strong></h2><p>más</p>"
    );
}

#[test]
fn test_title_with_several_bold_spans() {
    assert_snapshot!(
        text_to_html("**a** y **b**\n\ntexto"),
        @"<h2><strong>a y b</strong></h2><p>texto</p>"
    );
}

#[test]
fn test_marker_only_lines_render_nothing() {
    assert_eq!(text_to_html("****"), "");
    assert_eq!(text_to_html("- ****"), "");
    assert_snapshot!(
        text_to_html("- ****\n- uno\n\n****\n\nfin"),
        @"<ul><li>uno</li></ul><p>fin</p>"
    );
}

#[test]
fn test_kitchensink() {
    let src = "**Receta**\n\nUna receta **fácil** de\npreparar.\n\n1. Harina\n2. Agua\n- sal\n\n**Notas**\n\nfin";
    assert_snapshot!(
        text_to_html(src),
        @"<h2><strong>Receta</strong></h2><p>Una receta <strong>fácil</strong> de preparar.</p><ol><li>Harina</li><li>Agua</li></ol><ul><li>sal</li></ul><h2><strong>Notas</strong></h2><p>fin</p>"
    );
}

// ============================================================================
// ESCAPING AND OPTIONS
// ============================================================================

#[test]
fn test_text_is_escaped() {
    assert_snapshot!(
        text_to_html("a < b & <script>"),
        @"<p>a &lt; b &amp; &lt;script&gt;</p>"
    );
}

#[test]
fn test_crlf_input() {
    assert_snapshot!(
        text_to_html("**T**\r\n\r\n1. a\r\n2. b\r\n"),
        @"<h2><strong>T</strong></h2><ol><li>a</li><li>b</li></ol>"
    );
}

#[test]
fn test_heading_level_via_registry_options() {
    let registry = FormatRegistry::default();
    let mut options = std::collections::HashMap::new();
    options.insert("heading-level".to_string(), "4".to_string());
    let doc = registry
        .parse_with_options("**T**\n\nx", "text", &options)
        .unwrap();
    assert_snapshot!(
        registry.serialize(&doc, "html").unwrap(),
        @"<h4><strong>T</strong></h4><p>x</p>"
    );
}

#[test]
fn test_invalid_heading_level_is_rejected() {
    let registry = FormatRegistry::default();
    let mut options = std::collections::HashMap::new();
    options.insert("heading-level".to_string(), "9".to_string());
    assert!(registry
        .parse_with_options("x", "text", &options)
        .is_err());
}

#[test]
fn test_unsanitized_output_matches_on_regular_input() {
    let doc = TextFormat::default().parse("**T**\n\n- a").unwrap();
    let raw = HtmlFormat::new(HtmlOptions { sanitize: false })
        .serialize(&doc)
        .unwrap();
    assert_eq!(raw, "<h2><strong>T</strong></h2><ul><li>a</li></ul>");
}

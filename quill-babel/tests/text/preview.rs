//! Tests for the readable plain text view of rendered HTML

use insta::assert_snapshot;
use quill_babel::transforms::text_to_preview;
use quill_babel::FormatRegistry;

#[test]
fn test_preview_of_article() {
    let preview = text_to_preview("**Receta**\n\nUna receta **fácil**.\n\n- sal\n- agua").unwrap();
    assert_snapshot!(preview, @r"
    *Receta*

    Una receta *fácil*.

      • sal
      • agua
    ");
}

#[test]
fn test_preview_via_registry() {
    let registry = FormatRegistry::default();
    let doc = registry.parse("a & b", "text").unwrap();
    assert_eq!(registry.serialize(&doc, "text").unwrap(), "a & b");
}

#[test]
fn test_preview_of_empty_input() {
    assert_eq!(text_to_preview("").unwrap(), "");
}

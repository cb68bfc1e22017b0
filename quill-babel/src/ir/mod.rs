//! Intermediate Representation (IR) for inferred documents.
//!
//! This module defines the format-agnostic representation that the plain text
//! parser produces and that every output format consumes. Keeping one IR is what
//! keeps the HTML and node tree outputs structurally identical.

pub mod events;
pub mod nodes;

//! Converts the block sequence into a flat event stream.
//!
//! # The High-Level Concept
//!
//! Every block produces its own start/end markers with its inline runs in
//! between. Lists additionally wrap each item in list item markers. Renderers
//! then only need a stack of open containers to rebuild whatever tree shape
//! their target requires.
//!
//! # The Algorithm
//!
//! 1. Emit `StartDocument`
//! 2. For each block, in order:
//!    - Paragraph: `StartParagraph`, one `Inline` per run, `EndParagraph`
//!    - Heading: `StartHeading(level)`, runs, `EndHeading(level)`
//!    - List: `StartList`, then per item `StartListItem`, runs, `EndListItem`,
//!      then `EndList`
//! 3. Emit `EndDocument`
//!
//! Empty inline runs are skipped here so no renderer ever sees one.

use crate::ir::events::Event;
use crate::ir::nodes::{Block, Document, InlineRun, ListKind};

/// Converts a `Document` to a flat vector of `Event`s.
pub fn tree_to_events(doc: &Document) -> Vec<Event> {
    let mut events = vec![Event::StartDocument];
    for block in &doc.blocks {
        walk_block(block, &mut events);
    }
    events.push(Event::EndDocument);
    events
}

fn walk_block(block: &Block, events: &mut Vec<Event>) {
    match block {
        Block::Paragraph { runs } => {
            events.push(Event::StartParagraph);
            emit_inlines(runs, events);
            events.push(Event::EndParagraph);
        }
        Block::Heading { level, runs } => {
            events.push(Event::StartHeading(*level));
            emit_inlines(runs, events);
            events.push(Event::EndHeading(*level));
        }
        Block::List { kind, items } => {
            events.push(Event::StartList {
                ordered: *kind == ListKind::Ordered,
            });
            for item in items {
                events.push(Event::StartListItem);
                emit_inlines(item, events);
                events.push(Event::EndListItem);
            }
            events.push(Event::EndList);
        }
    }
}

fn emit_inlines(runs: &[InlineRun], events: &mut Vec<Event>) {
    events.extend(
        runs.iter()
            .filter(|run| !run.text.is_empty())
            .cloned()
            .map(Event::Inline),
    );
}

//! HTML serialization (IR → HTML fragment)
//!
//! Pipeline: IR → Events → RcDom → HTML string → sanitize

use super::sanitize::sanitize_html;
use crate::common::nested_to_flat::tree_to_events;
use crate::error::FormatError;
use crate::ir::events::Event;
use crate::ir::nodes::{Document, InlineRun};
use html5ever::{
    ns, serialize, serialize::SerializeOpts, serialize::TraversalScope, LocalName, QualName,
};
use markup5ever_rcdom::{Handle, Node, NodeData, RcDom, SerializableHandle};
use std::cell::{Cell, RefCell};
use std::default::Default;
use std::rc::Rc;

/// Options for HTML serialization
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HtmlOptions {
    /// Run the structural clean-up pass on the output
    pub sanitize: bool,
}

impl Default for HtmlOptions {
    fn default() -> Self {
        Self { sanitize: true }
    }
}

/// Serialize a document to an HTML fragment
pub fn serialize_to_html(doc: &Document, options: HtmlOptions) -> Result<String, FormatError> {
    // Step 1: IR → Events
    let events = tree_to_events(doc);

    // Step 2: Events → RcDom
    let dom = build_html_dom(&events)?;

    // Step 3: RcDom → HTML string
    let html = serialize_dom(&dom)?;

    // Step 4: structural clean-up
    if options.sanitize {
        Ok(sanitize_html(&html))
    } else {
        Ok(html)
    }
}

/// Build an HTML DOM tree from IR events
fn build_html_dom(events: &[Event]) -> Result<RcDom, FormatError> {
    let dom = RcDom::default();

    // Fragment container; only its children are serialized
    let container = create_element("div");
    let mut open = OpenElements::new(container.clone());

    // Heading text goes into the <strong> inside the heading
    let mut in_heading = false;

    for event in events {
        match event {
            Event::StartDocument | Event::EndDocument => {}

            Event::StartHeading(level) => {
                open.push(create_element(&format!("h{}", (*level).clamp(1, 6))));
                open.push(create_element("strong"));
                in_heading = true;
            }
            Event::EndHeading(_) => {
                open.pop("strong")?;
                open.pop("heading")?;
                in_heading = false;
            }

            Event::StartParagraph => open.push(create_element("p")),
            Event::EndParagraph => open.pop("paragraph")?,

            Event::StartList { ordered } => {
                open.push(create_element(if *ordered { "ol" } else { "ul" }))
            }
            Event::EndList => open.pop("list")?,

            Event::StartListItem => open.push(create_element("li")),
            Event::EndListItem => open.pop("list item")?,

            Event::Inline(run) if in_heading => {
                // Already inside <strong>
                append(open.current(), create_text(&run.text));
            }
            Event::Inline(run) => add_inline_to_node(open.current(), run),
        }
    }

    if open.depth() > 0 {
        return Err(FormatError::SerializationError(format!(
            "{} element(s) left open at end of document",
            open.depth()
        )));
    }

    dom.document.children.borrow_mut().push(container);

    Ok(dom)
}

/// The chain of elements from the fragment root to the insertion point.
struct OpenElements {
    root: Handle,
    stack: Vec<Handle>,
}

impl OpenElements {
    fn new(root: Handle) -> Self {
        OpenElements {
            root,
            stack: Vec::new(),
        }
    }

    fn current(&self) -> &Handle {
        self.stack.last().unwrap_or(&self.root)
    }

    /// Append `element` to the current node and descend into it.
    fn push(&mut self, element: Handle) {
        append(self.current(), element.clone());
        self.stack.push(element);
    }

    fn pop(&mut self, what: &str) -> Result<(), FormatError> {
        self.stack
            .pop()
            .map(|_| ())
            .ok_or_else(|| FormatError::SerializationError(format!("Unbalanced {what} end")))
    }

    fn depth(&self) -> usize {
        self.stack.len()
    }
}

fn append(parent: &Handle, child: Handle) {
    parent.children.borrow_mut().push(child);
}

/// Bold runs are wrapped in `<strong>`, plain runs become bare text.
fn add_inline_to_node(parent: &Handle, run: &InlineRun) {
    let text = create_text(&run.text);
    if run.bold {
        let strong = create_element("strong");
        append(&strong, text);
        append(parent, strong);
    } else {
        append(parent, text);
    }
}

/// Create an HTML element
fn create_element(tag: &str) -> Handle {
    let qual_name = QualName::new(None, ns!(html), LocalName::from(tag));

    Rc::new(Node {
        parent: Cell::new(None),
        children: RefCell::new(Vec::new()),
        data: NodeData::Element {
            name: qual_name,
            attrs: RefCell::new(Vec::new()),
            template_contents: Default::default(),
            mathml_annotation_xml_integration_point: false,
        },
    })
}

/// Create a text node
fn create_text(text: &str) -> Handle {
    Rc::new(Node {
        parent: Cell::new(None),
        children: RefCell::new(Vec::new()),
        data: NodeData::Text {
            contents: RefCell::new(text.to_string().into()),
        },
    })
}

/// Serialize the DOM to an HTML string (children of the fragment container only)
fn serialize_dom(dom: &RcDom) -> Result<String, FormatError> {
    let mut output = Vec::new();

    let container = dom
        .document
        .children
        .borrow()
        .first()
        .ok_or_else(|| FormatError::SerializationError("Empty document".to_string()))?
        .clone();

    let opts = SerializeOpts {
        traversal_scope: TraversalScope::IncludeNode,
        ..Default::default()
    };

    for child in container.children.borrow().iter() {
        let serializable = SerializableHandle::from(child.clone());
        serialize(&mut output, &serializable, opts.clone()).map_err(|e| {
            FormatError::SerializationError(format!("HTML serialization failed: {e}"))
        })?;
    }

    String::from_utf8(output)
        .map_err(|e| FormatError::SerializationError(format!("UTF-8 conversion failed: {e}")))
}

//! Plain text to structured document conversion for the article editor
//!
//!     Authors write articles as plain text, or paste it from elsewhere. This crate infers the
//!     structure they meant (titles, paragraphs, numbered and bulleted lists, bold spans) and
//!     renders it twice: as an HTML fragment that is stored and shown on the page, and as the
//!     JSON node tree a rich text editor inserts on paste.
//!
//!     This is a pure lib, that is, it powers the quill cli but is shell agnostic: no code should
//!     be written that supposes a shell environment, be it std print, env vars etc.
//!
//! Architecture
//!
//!     Plain text is parsed once into the IR (./ir/nodes.rs), a flat list of blocks. The IR is
//!     then flattened into an event stream (./common/nested_to_flat.rs) and every renderer
//!     consumes that same stream. HTML and the node tree can therefore never disagree on
//!     structure.
//!
//!     The file structure :
//!     .
//!     ├── error.rs
//!     ├── format.rs               # Format trait definition
//!     ├── registry.rs             # FormatRegistry for discovery and selection
//!     ├── stats.rs                # Word counting over rendered HTML
//!     ├── transforms.rs           # Functional entry points
//!     ├── formats
//!     │   ├── text                # classify → aggregate → inline, plus the text view
//!     │   ├── html                # DOM serializer and sanitizer
//!     │   ├── nodes               # node tree, schema, paste handling
//!     │   └── treeviz             # block tree for inspection
//!     ├── ir                      # Intermediate Representation
//!     └── common                  # IR → events
//!
//! Testing
//!     tests
//!     └── <format>
//!         └── <testname>.rs
//!
//!     Note that rust does not by default discover tests in subdirectories, so we need to include these
//!     in the mod.
//!
//! Inference Rules
//!
//!     Each line is classified on its own, looking only at whether its neighbors are blank. A
//!     fold then groups consecutive lines: list items of the same kind make one list, plain
//!     lines make one paragraph joined by spaces, and a blank line closes whatever is open. A
//!     line that starts and ends with `**` and touches a blank line is a title. Anything
//!     unrecognized is paragraph text, so conversion never fails on input.
//!
//! Formats
//!
//!     - text: parse (the inference above) and serialize (a readable view of the HTML)
//!     - html: serialize only
//!     - nodes: serialize only, JSON
//!     - treeviz: serialize only
//!
pub mod error;
pub mod format;
pub mod formats;
pub mod registry;
pub mod stats;
pub mod transforms;

pub mod common;
pub mod ir;

pub use error::{FormatError, SchemaError};
pub use format::Format;
pub use registry::FormatRegistry;
pub use stats::WordCountError;

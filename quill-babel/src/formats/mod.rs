//! Format implementations
//!
//! This module contains all format implementations that convert between
//! the IR and various text representations.

pub mod html;
pub mod nodes;
pub mod text;
pub mod treeviz;

pub use html::{HtmlFormat, HtmlOptions};
pub use nodes::NodesFormat;
pub use text::TextFormat;
pub use treeviz::TreevizFormat;

//! Parser for the Confluence wiki notation.
//!
//! Raw markup goes in one end ([`parse`]), an immutable [`Block`] tree comes
//! out, and renderers consume the tree through the neutral [`Sink`] event
//! interface. [`render_html`] and [`render_text`] are the built-in sinks.

pub mod io;
pub mod markup;
pub mod parsing;
pub mod render;
pub mod sink;
pub mod tree;

// Re-export key types for easier usage
pub use parsing::source::{LineSource, StringSource};
pub use parsing::{parse, parse_document};
pub use render::{render_html, render_text, HtmlRenderer, TextRenderer};
pub use sink::{Justification, Sink};
pub use tree::{Block, TableCell, TableRow};

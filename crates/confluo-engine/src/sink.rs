//! The event interface between the parsed tree and concrete renderers.

/// Column justification passed to [`Sink::table_rows_start`].
///
/// Tables carry one entry per column of the first row; the notation has no
/// alignment syntax, so every column is centered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Justification {
    Left,
    Center,
    Right,
}

/// Receiver for document events in strict document order.
///
/// [`Block::traverse`](crate::tree::Block::traverse) calls exactly one
/// matching start/end pair (or single-shot method) per node. All methods
/// default to no-ops so a renderer only implements the events it cares
/// about.
pub trait Sink {
    fn text(&mut self, _text: &str) {}

    fn bold_start(&mut self) {}
    fn bold_end(&mut self) {}

    fn italic_start(&mut self) {}
    fn italic_end(&mut self) {}

    fn monospace_start(&mut self) {}
    fn monospace_end(&mut self) {}

    /// Start of a link to `target`; the display text arrives via [`Sink::text`].
    fn link_start(&mut self, _target: &str) {}
    fn link_end(&mut self) {}

    fn anchor(&mut self, _name: &str) {}

    fn line_break(&mut self) {}

    fn paragraph_start(&mut self) {}
    fn paragraph_end(&mut self) {}

    fn heading_start(&mut self, _level: u8) {}
    fn heading_end(&mut self, _level: u8) {}

    fn list_start(&mut self, _ordered: bool) {}
    fn list_end(&mut self, _ordered: bool) {}

    fn list_item_start(&mut self) {}
    fn list_item_end(&mut self) {}

    fn table_start(&mut self) {}
    /// One [`Justification`] entry per column, sized from the first row.
    fn table_rows_start(&mut self, _justification: &[Justification]) {}
    fn table_row_start(&mut self) {}
    fn table_row_end(&mut self) {}
    fn table_cell_start(&mut self) {}
    fn table_cell_end(&mut self) {}
    fn table_header_cell_start(&mut self) {}
    fn table_header_cell_end(&mut self) {}
    fn table_rows_end(&mut self) {}
    fn table_end(&mut self) {}

    fn figure(&mut self, _source: &str, _caption: Option<&str>) {}

    fn verbatim(&mut self, _text: &str) {}

    fn horizontal_rule(&mut self) {}
}

//! The parsed document tree.
//!
//! Parsing produces an owned tree of [`Block`] values; rendering walks it
//! through a [`Sink`]. The tree is built once and never mutated afterwards —
//! no node is shared and nothing holds a back reference.

use crate::sink::{Justification, Sink};

/// A node in the parsed document tree.
///
/// Leaf variants emit a single event (or a fixed short sequence); container
/// variants emit a start event, their children in order, and an end event.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Block {
    /// Plain text run.
    Text(String),
    Bold(Vec<Block>),
    Italic(Vec<Block>),
    Monospace(Vec<Block>),
    /// A resolved link. Both fields are always populated; a link written
    /// without an alias carries the same string in both.
    Link { target: String, text: String },
    /// A named in-page anchor from `{anchor:NAME}`.
    Anchor(String),
    /// An explicit `\\` line break.
    LineBreak,
    Paragraph(Vec<Block>),
    /// An `h1.`–`h5.` heading; children are the inline-parsed title.
    Heading { level: u8, children: Vec<Block> },
    /// A bullet or numbered list. Items are [`Block::ListItem`]s; a nested
    /// list appears as the trailing child of the item it belongs to.
    List { ordered: bool, items: Vec<Block> },
    ListItem(Vec<Block>),
    /// A `{code}`/`{noformat}` fenced run, stored raw.
    Verbatim(String),
    /// An inline image `!source!`, optionally captioned.
    Figure {
        source: String,
        caption: Option<String>,
    },
    HorizontalRule,
    Table(Vec<TableRow>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TableRow {
    pub cells: Vec<TableCell>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TableCell {
    /// Header cells come from `||`-delimited rows and emit header events.
    pub header: bool,
    pub content: Vec<Block>,
}

impl Block {
    /// Emits this node and its children to `sink` in document order.
    ///
    /// Traversal cannot fail: malformed trees are prevented at construction,
    /// not checked here.
    pub fn traverse(&self, sink: &mut dyn Sink) {
        match self {
            Block::Text(text) => sink.text(text),
            Block::Bold(children) => {
                sink.bold_start();
                traverse_all(children, sink);
                sink.bold_end();
            }
            Block::Italic(children) => {
                sink.italic_start();
                traverse_all(children, sink);
                sink.italic_end();
            }
            Block::Monospace(children) => {
                sink.monospace_start();
                traverse_all(children, sink);
                sink.monospace_end();
            }
            Block::Link { target, text } => {
                sink.link_start(target);
                sink.text(text);
                sink.link_end();
            }
            Block::Anchor(name) => sink.anchor(name),
            Block::LineBreak => sink.line_break(),
            Block::Paragraph(children) => {
                sink.paragraph_start();
                traverse_all(children, sink);
                sink.paragraph_end();
            }
            Block::Heading { level, children } => {
                sink.heading_start(*level);
                traverse_all(children, sink);
                sink.heading_end(*level);
            }
            Block::List { ordered, items } => {
                sink.list_start(*ordered);
                traverse_all(items, sink);
                sink.list_end(*ordered);
            }
            Block::ListItem(children) => {
                sink.list_item_start();
                traverse_all(children, sink);
                sink.list_item_end();
            }
            Block::Verbatim(text) => sink.verbatim(text),
            Block::Figure { source, caption } => sink.figure(source, caption.as_deref()),
            Block::HorizontalRule => sink.horizontal_rule(),
            Block::Table(rows) => {
                sink.table_start();
                sink.table_rows_start(&justification(rows));
                for row in rows {
                    row.traverse(sink);
                }
                sink.table_rows_end();
                sink.table_end();
            }
        }
    }
}

impl TableRow {
    pub fn traverse(&self, sink: &mut dyn Sink) {
        sink.table_row_start();
        for cell in &self.cells {
            cell.traverse(sink);
        }
        sink.table_row_end();
    }
}

impl TableCell {
    pub fn traverse(&self, sink: &mut dyn Sink) {
        if self.header {
            sink.table_header_cell_start();
            traverse_all(&self.content, sink);
            sink.table_header_cell_end();
        } else {
            sink.table_cell_start();
            traverse_all(&self.content, sink);
            sink.table_cell_end();
        }
    }
}

/// Traverses a whole block sequence, e.g. a parsed document.
pub fn traverse_all(blocks: &[Block], sink: &mut dyn Sink) {
    for block in blocks {
        block.traverse(sink);
    }
}

/// Column count is taken from the first row alone; every column is centered.
fn justification(rows: &[TableRow]) -> Vec<Justification> {
    vec![Justification::Center; rows.first().map_or(0, |r| r.cells.len())]
}

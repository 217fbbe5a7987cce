//! Block-level parsers and their dispatch protocol.
//!
//! Each parser recognizes whole lines and turns one or more of them into a
//! single [`Block`]. The document driver tries parsers in priority order per
//! line; the paragraph parser is the fallback that accepts anything.

mod figure;
mod hrule;
mod list;
mod paragraph;
mod section;
mod table;
mod verbatim;

pub use figure::FigureBlockParser;
pub use hrule::HorizontalRuleBlockParser;
pub use list::ListBlockParser;
pub use paragraph::ParagraphBlockParser;
pub use section::SectionBlockParser;
pub use table::TableBlockParser;
pub use verbatim::VerbatimBlockParser;

use crate::parsing::source::LineSource;
use crate::tree::Block;

/// A parser for one kind of block-level construct.
pub trait BlockParser {
    /// Short name used in dispatch logging.
    fn name(&self) -> &'static str;

    /// Whether this parser recognizes `line` as the start of its construct.
    ///
    /// Must not consume from `source`; look-ahead goes through
    /// [`LineSource::peek_line`] only.
    fn accept(&self, line: &str, source: &dyn LineSource) -> bool;

    /// Consumes `line` (and possibly further lines from `source`) into one
    /// block.
    ///
    /// Only valid immediately after [`BlockParser::accept`] returned true
    /// for the same line; calling it otherwise is a caller defect and
    /// panics.
    fn consume(&self, line: &str, source: &mut dyn LineSource) -> Block;
}

/// The structural parsers in priority order. The paragraph parser is not
/// listed; it is the driver's fallback.
pub(crate) fn structural_parsers() -> [&'static dyn BlockParser; 6] {
    [
        &SectionBlockParser,
        &FigureBlockParser,
        &VerbatimBlockParser,
        &HorizontalRuleBlockParser,
        &TableBlockParser,
        &ListBlockParser,
    ]
}

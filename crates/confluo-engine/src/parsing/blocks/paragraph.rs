//! The fallback parser: any line no structural parser claims starts a
//! paragraph. Consecutive such lines join into one paragraph unit before
//! inline tokenization, so soft-wrapped source renders as one flow.

use super::{structural_parsers, BlockParser, FigureBlockParser, SectionBlockParser};
use crate::parsing::inline::parse_inline;
use crate::parsing::source::{LineSource, StringSource};
use crate::tree::Block;

pub struct ParagraphBlockParser;

impl BlockParser for ParagraphBlockParser {
    fn name(&self) -> &'static str {
        "paragraph"
    }

    fn accept(&self, line: &str, _source: &dyn LineSource) -> bool {
        !line.trim().is_empty()
    }

    fn consume(&self, line: &str, source: &mut dyn LineSource) -> Block {
        assert!(
            self.accept(line, source),
            "paragraph consume called without a prior accept"
        );

        let mut unit = line.trim().to_string();
        loop {
            let Some(next) = source.peek_line().map(str::to_owned) else {
                break;
            };
            if next.trim().is_empty() || claimed_by_structural(&next, &*source) {
                break;
            }
            source.next_line();
            unit.push(' ');
            unit.push_str(next.trim());
        }

        Block::Paragraph(parse_inline(&unit))
    }
}

fn claimed_by_structural(line: &str, source: &dyn LineSource) -> bool {
    structural_parsers()
        .iter()
        .any(|parser| parser.accept(line, source))
}

/// Parses one table cell's text.
///
/// Headings and figures are valid inside cells and delegate to their
/// parsers; everything else goes through the inline tokenizer without a
/// paragraph wrapper.
pub(crate) fn parse_cell(text: &str) -> Vec<Block> {
    let text = text.trim();
    let mut cell_source = StringSource::empty();
    let subparsers: [&dyn BlockParser; 2] = [&SectionBlockParser, &FigureBlockParser];
    for parser in subparsers {
        if parser.accept(text, &cell_source) {
            return vec![parser.consume(text, &mut cell_source)];
        }
    }
    parse_inline(text)
}

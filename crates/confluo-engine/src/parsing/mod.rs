//! Parsing: line source, block-level dispatch, and the inline tokenizer.

pub mod blocks;
pub mod inline;
pub mod source;

use log::debug;

use crate::tree::Block;
use blocks::{structural_parsers, BlockParser, ParagraphBlockParser};
use source::{LineSource, StringSource};

/// Parses a whole document from `source` into top-level blocks.
///
/// Each non-blank line is dispatched to the first accepting parser in
/// priority order; blank lines only separate blocks. Parsing is a single
/// synchronous pass and cannot fail on content — malformed markup always
/// degrades to literal text.
pub fn parse_document(source: &mut dyn LineSource) -> Vec<Block> {
    let paragraph = ParagraphBlockParser;
    let mut blocks = Vec::new();
    while let Some(line) = source.next_line() {
        if line.trim().is_empty() {
            continue;
        }
        let block = match structural_parsers()
            .into_iter()
            .find(|parser| parser.accept(&line, &*source))
        {
            Some(parser) => {
                debug!("line dispatched to {} parser", parser.name());
                parser.consume(&line, source)
            }
            None => paragraph.consume(&line, source),
        };
        blocks.push(block);
    }
    blocks
}

/// Convenience wrapper parsing an in-memory document.
pub fn parse(input: &str) -> Vec<Block> {
    let mut source = StringSource::new(input);
    parse_document(&mut source)
}

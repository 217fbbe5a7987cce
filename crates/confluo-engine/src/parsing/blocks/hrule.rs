//! Horizontal rules: a line of four or more dashes.

use super::BlockParser;
use crate::markup;
use crate::parsing::source::LineSource;
use crate::tree::Block;

pub struct HorizontalRuleBlockParser;

impl BlockParser for HorizontalRuleBlockParser {
    fn name(&self) -> &'static str {
        "rule"
    }

    fn accept(&self, line: &str, _source: &dyn LineSource) -> bool {
        let trimmed = line.trim();
        trimmed.len() >= markup::RULE_MIN_LEN && trimmed.chars().all(|c| c == markup::RULE)
    }

    fn consume(&self, line: &str, source: &mut dyn LineSource) -> Block {
        assert!(
            self.accept(line, source),
            "rule consume called without a prior accept"
        );
        Block::HorizontalRule
    }
}

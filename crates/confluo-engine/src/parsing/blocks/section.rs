//! Headings: `h1. Title` through `h5. Title`.

use std::sync::LazyLock;

use regex::Regex;

use super::BlockParser;
use crate::parsing::inline::parse_inline;
use crate::parsing::source::LineSource;
use crate::tree::Block;

static HEADING: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^h([1-5])\.\s*(.*)$").expect("heading pattern"));

pub struct SectionBlockParser;

impl BlockParser for SectionBlockParser {
    fn name(&self) -> &'static str {
        "section"
    }

    fn accept(&self, line: &str, _source: &dyn LineSource) -> bool {
        HEADING.is_match(line)
    }

    fn consume(&self, line: &str, source: &mut dyn LineSource) -> Block {
        assert!(
            self.accept(line, source),
            "section consume called without a prior accept"
        );

        let captures = HEADING.captures(line).expect("accept matched");
        let level = captures[1].parse().expect("level is a single digit");
        Block::Heading {
            level,
            children: parse_inline(captures[2].trim_end()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsing::source::StringSource;
    use pretty_assertions::assert_eq;

    fn consume(line: &str) -> Block {
        SectionBlockParser.consume(line, &mut StringSource::empty())
    }

    #[test]
    fn parses_each_level() {
        for level in 1..=5u8 {
            let block = consume(&format!("h{level}. Title"));
            assert_eq!(
                block,
                Block::Heading {
                    level,
                    children: vec![Block::Text("Title".to_string())],
                }
            );
        }
    }

    #[test]
    fn title_markup_is_inline_parsed() {
        assert_eq!(
            consume("h2. The *Point*"),
            Block::Heading {
                level: 2,
                children: vec![
                    Block::Text("The ".to_string()),
                    Block::Bold(vec![Block::Text("Point".to_string())]),
                ],
            }
        );
    }

    #[test]
    fn rejects_non_headings() {
        let source = StringSource::empty();
        for line in ["h6. too deep", "hello", "h1 no dot", "2h. backwards"] {
            assert!(!SectionBlockParser.accept(line, &source), "{line}");
        }
    }
}

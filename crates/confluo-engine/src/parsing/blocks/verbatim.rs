//! Fenced verbatim blocks: `{code}`/`{code:lang}` and `{noformat}`.
//!
//! Content between the fences is stored raw; the closing fence must match
//! the opening family. An unterminated fence runs to end of input.

use super::BlockParser;
use crate::markup;
use crate::parsing::source::LineSource;
use crate::tree::Block;

pub struct VerbatimBlockParser;

impl BlockParser for VerbatimBlockParser {
    fn name(&self) -> &'static str {
        "verbatim"
    }

    fn accept(&self, line: &str, _source: &dyn LineSource) -> bool {
        opening_tag(line).is_some()
    }

    fn consume(&self, line: &str, source: &mut dyn LineSource) -> Block {
        assert!(
            self.accept(line, source),
            "verbatim consume called without a prior accept"
        );

        let tag = opening_tag(line).expect("accept matched");
        let closer = format!("{{{tag}}}");
        let mut lines = Vec::new();
        while let Some(next) = source.next_line() {
            if next.trim() == closer {
                break;
            }
            lines.push(next);
        }
        Block::Verbatim(lines.join("\n"))
    }
}

fn opening_tag(line: &str) -> Option<&'static str> {
    let trimmed = line.trim_start();
    for tag in [markup::VERBATIM_CODE, markup::VERBATIM_NOFORMAT] {
        if trimmed.strip_prefix('{').is_some_and(|rest| {
            rest.strip_prefix(tag)
                .is_some_and(|after| after.starts_with('}') || after.starts_with(':'))
        }) {
            return Some(tag);
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsing::source::StringSource;
    use pretty_assertions::assert_eq;

    fn consume(input: &str) -> (Block, StringSource) {
        let mut source = StringSource::new(input);
        let line = source.next_line().unwrap();
        let block = VerbatimBlockParser.consume(&line, &mut source);
        (block, source)
    }

    #[test]
    fn code_fence_keeps_markup_raw() {
        let (block, _) = consume("{code}\nlet x = *ptr;\n[not a link]\n{code}\nafter");

        assert_eq!(
            block,
            Block::Verbatim("let x = *ptr;\n[not a link]".to_string())
        );
    }

    #[test]
    fn close_fence_is_consumed() {
        let (_, mut source) = consume("{code}\nbody\n{code}\nafter");
        assert_eq!(source.next_line(), Some("after".to_string()));
    }

    #[test]
    fn language_parameter_is_accepted() {
        let (block, _) = consume("{code:java}\nint i;\n{code}");
        assert_eq!(block, Block::Verbatim("int i;".to_string()));
    }

    #[test]
    fn noformat_fence() {
        let (block, _) = consume("{noformat}\n|not|a|table|\n{noformat}");
        assert_eq!(block, Block::Verbatim("|not|a|table|".to_string()));
    }

    #[test]
    fn unterminated_fence_runs_to_end_of_input() {
        let (block, mut source) = consume("{code}\nstill code");
        assert_eq!(block, Block::Verbatim("still code".to_string()));
        assert_eq!(source.next_line(), None);
    }

    #[test]
    fn rejects_inline_monospace_and_macros() {
        let source = StringSource::empty();
        assert!(!VerbatimBlockParser.accept("{{inline}}", &source));
        assert!(!VerbatimBlockParser.accept("{anchor:top}", &source));
        assert!(!VerbatimBlockParser.accept("{codex}", &source));
    }
}

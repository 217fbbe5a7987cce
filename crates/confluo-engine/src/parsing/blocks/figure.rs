//! Figures: `!image.png!` with an optional trailing caption.

use super::BlockParser;
use crate::markup;
use crate::parsing::source::LineSource;
use crate::tree::Block;

pub struct FigureBlockParser;

impl BlockParser for FigureBlockParser {
    fn name(&self) -> &'static str {
        "figure"
    }

    fn accept(&self, line: &str, _source: &dyn LineSource) -> bool {
        split_figure(line).is_some()
    }

    fn consume(&self, line: &str, source: &mut dyn LineSource) -> Block {
        assert!(
            self.accept(line, source),
            "figure consume called without a prior accept"
        );

        let (source_path, caption) = split_figure(line).expect("accept matched");
        Block::Figure {
            source: source_path.to_string(),
            caption: (!caption.is_empty()).then(|| caption.to_string()),
        }
    }
}

/// Splits `!source!caption` into its parts; caption text is trimmed.
fn split_figure(line: &str) -> Option<(&str, &str)> {
    let rest = line.strip_prefix(markup::FIGURE)?;
    let end = rest.find(markup::FIGURE)?;
    Some((&rest[..end], rest[end + 1..].trim()))
}

//! Bullet (`*`, `-`) and numbered (`#`) lists.
//!
//! Depth is the length of the marker run (`**` nests under `*`); the run's
//! last marker decides ordered vs. unordered. A nested list is attached as
//! the trailing child of the item it belongs to.

use super::BlockParser;
use crate::markup;
use crate::parsing::inline::parse_inline;
use crate::parsing::source::LineSource;
use crate::tree::Block;

pub struct ListBlockParser;

impl BlockParser for ListBlockParser {
    fn name(&self) -> &'static str {
        "list"
    }

    fn accept(&self, line: &str, _source: &dyn LineSource) -> bool {
        split_item(line).is_some()
    }

    fn consume(&self, line: &str, source: &mut dyn LineSource) -> Block {
        assert!(
            self.accept(line, source),
            "list consume called without a prior accept"
        );

        let mut stack: Vec<Level> = Vec::new();
        let mut line = line.to_string();
        loop {
            let (depth, ordered, text) = split_item(&line).expect("accepted line");
            // an over-deep jump clamps to one past the current nesting
            let depth = depth.min(stack.len() + 1);
            while stack.len() > depth {
                close_level(&mut stack);
            }
            if stack.len() < depth {
                stack.push(Level {
                    ordered,
                    items: Vec::new(),
                });
            }
            let level = stack.last_mut().expect("depth is at least one");
            level.items.push(Block::ListItem(parse_inline(text)));

            let Some(next) = source.peek_line().map(str::to_owned) else {
                break;
            };
            if !self.accept(&next, source) {
                break;
            }
            source.next_line();
            line = next;
        }

        while stack.len() > 1 {
            close_level(&mut stack);
        }
        let top = stack.pop().expect("at least one level");
        Block::List {
            ordered: top.ordered,
            items: top.items,
        }
    }
}

struct Level {
    ordered: bool,
    items: Vec<Block>,
}

/// Folds the deepest level into the last item of its parent.
fn close_level(stack: &mut Vec<Level>) {
    let done = stack.pop().expect("close with no open level");
    let list = Block::List {
        ordered: done.ordered,
        items: done.items,
    };
    let parent = stack.last_mut().expect("parent level exists");
    match parent.items.last_mut() {
        Some(Block::ListItem(children)) => children.push(list),
        _ => parent.items.push(Block::ListItem(vec![list])),
    }
}

/// Splits a list line into (depth, ordered, item text). The marker run must
/// be followed by a space, so `*bold*` paragraphs are not list items.
fn split_item(line: &str) -> Option<(usize, bool, &str)> {
    let depth = line
        .chars()
        .take_while(|c| {
            matches!(
                *c,
                markup::LIST_BULLET | markup::LIST_DASH | markup::LIST_NUMBERED
            )
        })
        .count();
    if depth == 0 {
        return None;
    }
    let text = line[depth..].strip_prefix(' ')?;
    let ordered = line[..depth].ends_with(markup::LIST_NUMBERED);
    Some((depth, ordered, text.trim()))
}

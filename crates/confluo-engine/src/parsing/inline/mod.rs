//! The inline tokenizer: one pass over one paragraph unit of raw text,
//! producing the ordered child blocks that render back to it.
//!
//! The scanner keeps a stack of open style frames instead of independent
//! toggle flags: opening a style pushes a frame that accumulates its own
//! children, closing pops it and appends the finished container to whatever
//! list is now current. Nesting is therefore well-formed by construction,
//! and a frame still open at end of input is closed implicitly rather than
//! dropping its content.
//!
//! Malformed markup never fails; every unmatched delimiter degrades to
//! literal text deterministically.

mod links;

use crate::markup;
use crate::tree::Block;

/// Parses one line (or joined paragraph unit) of wiki markup.
///
/// The scanner is cheap to build, so callers create one per unit instead of
/// resetting shared state; concurrent parses never interact.
pub fn parse_inline(input: &str) -> Vec<Block> {
    InlineScanner::new(input).run()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Style {
    Bold,
    Italic,
    Monospace,
}

/// An open style container accumulating its children.
struct Frame {
    style: Style,
    children: Vec<Block>,
}

struct InlineScanner {
    chars: Vec<char>,
    i: usize,
    /// Completed top-level blocks, in document order.
    out: Vec<Block>,
    /// Open style containers, innermost last.
    frames: Vec<Frame>,
    /// Plain text accumulated since the last flush.
    text: String,
    /// Link capture buffer; `Some` while between `[` and `]`.
    link: Option<String>,
}

/// Valid context characters around bold and italic markers. A marker only
/// opens after one of `open`/start-of-input and only closes before one of
/// `close`/end-of-input, so `a*b` and `snake_case` stay literal.
const BOLD_OPEN: &str = " _\t";
const BOLD_CLOSE: &str = " _\t.,";
const ITALIC_OPEN: &str = " *\t";
const ITALIC_CLOSE: &str = " *\t.,";

impl InlineScanner {
    fn new(input: &str) -> Self {
        Self {
            chars: input.chars().collect(),
            i: 0,
            out: Vec::new(),
            frames: Vec::new(),
            text: String::new(),
            link: None,
        }
    }

    fn run(mut self) -> Vec<Block> {
        while self.i < self.chars.len() {
            let c = self.chars[self.i];
            if self.link.is_some() {
                self.scan_link_char(c);
            } else if self.in_monospace() && c != markup::BRACE_CLOSE {
                // inside monospace nothing but the terminator is markup
                self.text.push(c);
            } else {
                self.scan_char(c);
            }
            self.i += 1;
        }
        self.finish()
    }

    fn scan_char(&mut self, c: char) {
        match c {
            markup::BOLD => self.toggle_style(Style::Bold, BOLD_OPEN, BOLD_CLOSE, c),
            markup::ITALIC => self.toggle_style(Style::Italic, ITALIC_OPEN, ITALIC_CLOSE, c),
            markup::LINK_START => {
                self.flush_text();
                self.link = Some(String::new());
            }
            // a stray `]` outside a link is dropped
            markup::LINK_END => {}
            markup::BRACE_OPEN => self.open_brace(),
            markup::BRACE_CLOSE => self.close_brace(),
            markup::ESCAPE => self.escape(),
            _ => self.text.push(c),
        }
    }

    fn scan_link_char(&mut self, c: char) {
        match c {
            markup::LINK_END => {
                if let Some(captured) = self.link.take() {
                    let link = links::build_link(&captured);
                    self.push_block(link);
                }
            }
            markup::LINK_START => {
                // a second `[` abandons the capture so far as plain text
                if let Some(dangling) = self.link.replace(String::new())
                    && !dangling.is_empty()
                {
                    self.push_block(Block::Text(dangling));
                }
            }
            _ => {
                if let Some(buf) = self.link.as_mut() {
                    buf.push(c);
                }
            }
        }
    }

    fn toggle_style(&mut self, style: Style, open_set: &str, close_set: &str, marker: char) {
        if self.style_open(style) {
            let at_top = self.frames.last().is_some_and(|f| f.style == style);
            if at_top && self.next_matches(close_set, true) {
                self.close_top();
            } else {
                self.text.push(marker);
            }
        } else if self.prev_matches(open_set, true) {
            self.open(style);
        } else {
            self.text.push(marker);
        }
    }

    fn open_brace(&mut self) {
        if self.escaped_brace() {
            self.text.pop();
            self.text.push(markup::BRACE_OPEN);
            return;
        }
        self.flush_text();
        if self.next_char() == Some(markup::BRACE_OPEN) {
            self.i += 1;
            self.frames.push(Frame {
                style: Style::Monospace,
                children: Vec::new(),
            });
        }
        // a single `{` starts a macro; the name accumulates in the buffer
    }

    fn close_brace(&mut self) {
        if self.in_monospace() {
            // greedy terminator: defer while more than one `}` follows, so a
            // run of braces keeps all but the last two inside the content
            let closes = self.next_char() == Some(markup::BRACE_CLOSE)
                && self.chars.get(self.i + 2).copied() != Some(markup::BRACE_CLOSE);
            if closes {
                self.i += 1;
                self.close_top();
            } else {
                self.text.push(markup::BRACE_CLOSE);
            }
            return;
        }
        if self.escaped_brace() {
            self.text.pop();
            self.text.push(markup::BRACE_CLOSE);
            return;
        }
        let name = std::mem::take(&mut self.text);
        let block = match name.strip_prefix(markup::ANCHOR_PREFIX) {
            Some(anchor) => Block::Anchor(anchor.to_string()),
            None => Block::Text(format!("{{{name}}}")),
        };
        self.push_block(block);
    }

    fn escape(&mut self) {
        if self.next_char() == Some(markup::ESCAPE) {
            self.i += 1;
            self.flush_text();
            self.push_block(Block::LineBreak);
        } else if self.next_matches("*_", false) {
            // eat the backslash, emit the escaped marker verbatim
            self.i += 1;
            self.text.push(self.chars[self.i]);
        } else {
            self.text.push(markup::ESCAPE);
        }
    }

    fn finish(mut self) -> Vec<Block> {
        if let Some(dangling) = self.link.take()
            && !dangling.is_empty()
        {
            self.push_block(Block::Text(dangling));
        }
        while !self.frames.is_empty() {
            self.close_top();
        }
        if !self.text.is_empty() {
            self.out.push(Block::Text(std::mem::take(&mut self.text)));
        }
        self.out
    }

    /// Pops the innermost frame and appends the finished container to the
    /// list that is now current. Buffered text joins the children trimmed.
    fn close_top(&mut self) {
        let Some(mut frame) = self.frames.pop() else {
            return;
        };
        let trimmed = self.text.trim();
        if !trimmed.is_empty() {
            frame.children.push(Block::Text(trimmed.to_string()));
        }
        self.text.clear();
        let block = match frame.style {
            Style::Bold => Block::Bold(frame.children),
            Style::Italic => Block::Italic(frame.children),
            Style::Monospace => Block::Monospace(frame.children),
        };
        self.push_block(block);
    }

    fn open(&mut self, style: Style) {
        self.flush_text();
        self.frames.push(Frame {
            style,
            children: Vec::new(),
        });
    }

    fn push_block(&mut self, block: Block) {
        match self.frames.last_mut() {
            Some(frame) => frame.children.push(block),
            None => self.out.push(block),
        }
    }

    fn flush_text(&mut self) {
        if !self.text.is_empty() {
            let text = std::mem::take(&mut self.text);
            self.push_block(Block::Text(text));
        }
    }

    fn in_monospace(&self) -> bool {
        self.frames
            .last()
            .is_some_and(|f| f.style == Style::Monospace)
    }

    fn style_open(&self, style: Style) -> bool {
        self.frames.iter().any(|f| f.style == style)
    }

    /// The escape look-back applies only when the backslash is still in the
    /// buffer; a backslash already consumed (say, by a line break) is gone.
    fn escaped_brace(&self) -> bool {
        self.prev_char() == Some(markup::ESCAPE) && self.text.ends_with(markup::ESCAPE)
    }

    fn next_char(&self) -> Option<char> {
        self.chars.get(self.i + 1).copied()
    }

    fn prev_char(&self) -> Option<char> {
        self.i.checked_sub(1).and_then(|j| self.chars.get(j)).copied()
    }

    fn next_matches(&self, set: &str, match_end: bool) -> bool {
        match self.next_char() {
            Some(c) => set.contains(c),
            None => match_end,
        }
    }

    fn prev_matches(&self, set: &str, match_start: bool) -> bool {
        match self.prev_char() {
            Some(c) => set.contains(c),
            None => match_start,
        }
    }
}

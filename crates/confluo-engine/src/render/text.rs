//! Plain-text rendering: markup stripped, structure flattened to lines.

use crate::sink::Sink;
use crate::tree::{traverse_all, Block};

/// Renders parsed blocks to markup-free plain text.
pub fn render_text(blocks: &[Block]) -> String {
    let mut renderer = TextRenderer::new();
    traverse_all(blocks, &mut renderer);
    renderer.finish()
}

/// A [`Sink`] keeping only the text content. Links render as their display
/// text, anchors disappear, table cells separate with tabs.
pub struct TextRenderer {
    out: String,
}

impl TextRenderer {
    pub fn new() -> Self {
        Self { out: String::new() }
    }

    pub fn finish(self) -> String {
        self.out
    }
}

impl Default for TextRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl Sink for TextRenderer {
    fn text(&mut self, text: &str) {
        self.out.push_str(text);
    }

    fn line_break(&mut self) {
        self.out.push('\n');
    }

    fn paragraph_end(&mut self) {
        self.out.push_str("\n\n");
    }

    fn heading_end(&mut self, _level: u8) {
        self.out.push_str("\n\n");
    }

    fn list_item_end(&mut self) {
        self.out.push('\n');
    }

    fn list_end(&mut self, _ordered: bool) {
        self.out.push('\n');
    }

    fn table_cell_end(&mut self) {
        self.out.push('\t');
    }

    fn table_header_cell_end(&mut self) {
        self.out.push('\t');
    }

    fn table_row_end(&mut self) {
        self.out.push('\n');
    }

    fn table_end(&mut self) {
        self.out.push('\n');
    }

    fn figure(&mut self, source: &str, caption: Option<&str>) {
        self.out.push_str(caption.unwrap_or(source));
        self.out.push('\n');
    }

    fn verbatim(&mut self, text: &str) {
        self.out.push_str(text);
        self.out.push_str("\n\n");
    }

    fn horizontal_rule(&mut self) {
        self.out.push('\n');
    }
}

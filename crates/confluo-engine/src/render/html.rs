//! HTML rendering.

use html_escape::{encode_double_quoted_attribute, encode_text};

use crate::sink::{Justification, Sink};
use crate::tree::{traverse_all, Block};

/// Renders parsed blocks to an HTML fragment.
pub fn render_html(blocks: &[Block]) -> String {
    let mut renderer = HtmlRenderer::new();
    traverse_all(blocks, &mut renderer);
    renderer.finish()
}

/// A [`Sink`] producing an HTML fragment. All text and attribute values are
/// escaped.
pub struct HtmlRenderer {
    out: String,
    justification: Vec<Justification>,
    column: usize,
}

impl HtmlRenderer {
    pub fn new() -> Self {
        Self {
            out: String::new(),
            justification: Vec::new(),
            column: 0,
        }
    }

    pub fn finish(self) -> String {
        self.out
    }

    fn cell_align(&self) -> &'static str {
        match self.justification.get(self.column) {
            Some(Justification::Left) => "left",
            Some(Justification::Right) => "right",
            _ => "center",
        }
    }
}

impl Default for HtmlRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl Sink for HtmlRenderer {
    fn text(&mut self, text: &str) {
        self.out.push_str(&encode_text(text));
    }

    fn bold_start(&mut self) {
        self.out.push_str("<b>");
    }

    fn bold_end(&mut self) {
        self.out.push_str("</b>");
    }

    fn italic_start(&mut self) {
        self.out.push_str("<i>");
    }

    fn italic_end(&mut self) {
        self.out.push_str("</i>");
    }

    fn monospace_start(&mut self) {
        self.out.push_str("<code>");
    }

    fn monospace_end(&mut self) {
        self.out.push_str("</code>");
    }

    fn link_start(&mut self, target: &str) {
        self.out.push_str("<a href=\"");
        self.out.push_str(&encode_double_quoted_attribute(target));
        self.out.push_str("\">");
    }

    fn link_end(&mut self) {
        self.out.push_str("</a>");
    }

    fn anchor(&mut self, name: &str) {
        self.out.push_str("<a id=\"");
        self.out.push_str(&encode_double_quoted_attribute(name));
        self.out.push_str("\"></a>");
    }

    fn line_break(&mut self) {
        self.out.push_str("<br />");
    }

    fn paragraph_start(&mut self) {
        self.out.push_str("<p>");
    }

    fn paragraph_end(&mut self) {
        self.out.push_str("</p>\n");
    }

    fn heading_start(&mut self, level: u8) {
        self.out.push_str(&format!("<h{level}>"));
    }

    fn heading_end(&mut self, level: u8) {
        self.out.push_str(&format!("</h{level}>\n"));
    }

    fn list_start(&mut self, ordered: bool) {
        self.out.push_str(if ordered { "<ol>\n" } else { "<ul>\n" });
    }

    fn list_end(&mut self, ordered: bool) {
        self.out
            .push_str(if ordered { "</ol>\n" } else { "</ul>\n" });
    }

    fn list_item_start(&mut self) {
        self.out.push_str("<li>");
    }

    fn list_item_end(&mut self) {
        self.out.push_str("</li>\n");
    }

    fn table_start(&mut self) {
        self.out.push_str("<table>\n");
    }

    fn table_rows_start(&mut self, justification: &[Justification]) {
        self.justification = justification.to_vec();
    }

    fn table_row_start(&mut self) {
        self.column = 0;
        self.out.push_str("<tr>");
    }

    fn table_row_end(&mut self) {
        self.out.push_str("</tr>\n");
    }

    fn table_cell_start(&mut self) {
        self.out
            .push_str(&format!("<td align=\"{}\">", self.cell_align()));
        self.column += 1;
    }

    fn table_cell_end(&mut self) {
        self.out.push_str("</td>");
    }

    fn table_header_cell_start(&mut self) {
        self.out
            .push_str(&format!("<th align=\"{}\">", self.cell_align()));
        self.column += 1;
    }

    fn table_header_cell_end(&mut self) {
        self.out.push_str("</th>");
    }

    fn table_rows_end(&mut self) {
        self.justification.clear();
    }

    fn table_end(&mut self) {
        self.out.push_str("</table>\n");
    }

    fn figure(&mut self, source: &str, caption: Option<&str>) {
        let src = encode_double_quoted_attribute(source);
        match caption {
            Some(caption) => {
                self.out.push_str(&format!(
                    "<figure><img src=\"{src}\" /><figcaption>{}</figcaption></figure>\n",
                    encode_text(caption)
                ));
            }
            None => self.out.push_str(&format!("<img src=\"{src}\" />\n")),
        }
    }

    fn verbatim(&mut self, text: &str) {
        self.out.push_str("<pre>");
        self.out.push_str(&encode_text(text));
        self.out.push_str("</pre>\n");
    }

    fn horizontal_rule(&mut self) {
        self.out.push_str("<hr />\n");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsing::parse;
    use pretty_assertions::assert_eq;

    #[test]
    fn renders_inline_styles() {
        let html = render_html(&parse("*b* _i_ {{m}}"));
        insta::assert_snapshot!(html.trim_end(), @"<p><b>b</b> <i>i</i> <code>m</code></p>");
    }

    #[test]
    fn renders_links_with_escaped_targets() {
        let html = render_html(&parse("[x|http://e.com/?a=1&b=2]"));
        assert_eq!(
            html,
            "<p><a href=\"http://e.com/?a=1&amp;b=2\">x</a></p>\n"
        );
    }

    #[test]
    fn escapes_text_content() {
        let html = render_html(&parse("a <tag> & more"));
        assert_eq!(html, "<p>a &lt;tag&gt; &amp; more</p>\n");
    }

    #[test]
    fn renders_tables_with_centered_columns() {
        let html = render_html(&parse("||H||\n|v|"));
        assert_eq!(
            html,
            "<table>\n<tr><th align=\"center\"><b>H</b></th></tr>\n\
             <tr><td align=\"center\">v</td></tr>\n</table>\n"
        );
    }

    #[test]
    fn renders_headings_and_rules() {
        let html = render_html(&parse("h2. Title\n\n----"));
        assert_eq!(html, "<h2>Title</h2>\n<hr />\n");
    }

    #[test]
    fn renders_verbatim_escaped() {
        let html = render_html(&parse("{code}\nif (a < b) {}\n{code}"));
        assert_eq!(html, "<pre>if (a &lt; b) {}</pre>\n");
    }
}

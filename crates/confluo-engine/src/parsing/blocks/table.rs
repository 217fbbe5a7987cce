//! The table parser: the most stateful of the block parsers.
//!
//! A table is a run of consecutive `|`-prefixed lines. Header rows use `||`
//! delimiters; their cells are bold-wrapped. Cell content is re-parsed
//! through the cell pipeline, so headings, figures and all inline markup
//! work inside cells.

use log::debug;

use super::paragraph::parse_cell;
use super::BlockParser;
use crate::markup;
use crate::parsing::source::LineSource;
use crate::tree::{Block, TableCell, TableRow};

pub struct TableBlockParser;

impl BlockParser for TableBlockParser {
    fn name(&self) -> &'static str {
        "table"
    }

    fn accept(&self, line: &str, _source: &dyn LineSource) -> bool {
        line.starts_with(markup::TABLE_CELL)
    }

    fn consume(&self, line: &str, source: &mut dyn LineSource) -> Block {
        assert!(
            self.accept(line, source),
            "table consume called without a prior accept"
        );

        let mut rows = Vec::new();
        let mut line = line.to_string();
        loop {
            rows.push(parse_row(&line));
            let Some(next) = source.peek_line().map(str::to_owned) else {
                break;
            };
            if !self.accept(&next, source) {
                break;
            }
            source.next_line();
            line = next;
        }

        // unreachable under the accept contract, asserted anyway
        assert!(!rows.is_empty(), "table consume produced no rows");
        debug!("table: {} rows, {} columns", rows.len(), rows[0].cells.len());
        Block::Table(rows)
    }
}

fn parse_row(line: &str) -> TableRow {
    // content after the last delimiter is not a cell
    let line = &line[..line.rfind(markup::TABLE_CELL).unwrap_or(0)];

    if line.starts_with(markup::TABLE_HEADER) {
        let cells = split_cells(line)
            .map(|text| TableCell {
                header: true,
                content: vec![Block::Bold(parse_cell(text))],
            })
            .collect();
        return TableRow { cells };
    }

    let pieces: Vec<&str> = split_cells(line).collect();
    let mut texts: Vec<String> = Vec::new();
    let mut i = 0;
    while i < pieces.len() {
        // A piece with an unclosed link opener was split inside a link's
        // display text; stitch the delimiter back and rejoin the two halves.
        if i + 1 < pieces.len()
            && pieces[i].contains(markup::LINK_START)
            && !pieces[i].contains(markup::LINK_END)
        {
            texts.push(format!(
                "{}{}{}",
                pieces[i],
                markup::TABLE_CELL,
                pieces[i + 1]
            ));
            i += 2;
            continue;
        }
        texts.push(pieces[i].to_string());
        i += 1;
    }

    TableRow {
        cells: texts
            .iter()
            .map(|text| TableCell {
                header: false,
                content: parse_cell(text),
            })
            .collect(),
    }
}

/// Splits on delimiter runs; empty pieces are discarded, so `|a||b|` has
/// two cells.
fn split_cells(line: &str) -> impl Iterator<Item = &str> {
    line.split(markup::TABLE_CELL)
        .filter(|piece| !piece.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsing::source::StringSource;
    use pretty_assertions::assert_eq;

    fn consume(input: &str) -> Block {
        let mut source = StringSource::new(input);
        let line = source.next_line().unwrap();
        TableBlockParser.consume(&line, &mut source)
    }

    fn cell_text(cell: &TableCell) -> String {
        fn collect(blocks: &[Block], out: &mut String) {
            for block in blocks {
                match block {
                    Block::Text(t) => out.push_str(t),
                    Block::Bold(c) | Block::Italic(c) | Block::Monospace(c) => collect(c, out),
                    _ => {}
                }
            }
        }
        let mut out = String::new();
        collect(&cell.content, &mut out);
        out
    }

    #[test]
    fn header_and_body_rows() {
        let block = consume("||H1||H2||\n|a|b|\n|c|d|");

        let Block::Table(rows) = block else {
            panic!("expected a table");
        };
        assert_eq!(rows.len(), 3);

        assert!(rows[0].cells.iter().all(|c| c.header));
        assert_eq!(cell_text(&rows[0].cells[0]), "H1");
        assert_eq!(cell_text(&rows[0].cells[1]), "H2");
        assert!(matches!(rows[0].cells[0].content[0], Block::Bold(_)));

        for (row, expected) in rows[1..].iter().zip([["a", "b"], ["c", "d"]]) {
            assert!(row.cells.iter().all(|c| !c.header));
            let texts: Vec<String> = row.cells.iter().map(cell_text).collect();
            assert_eq!(texts, expected);
        }
    }

    #[test]
    fn stops_before_the_first_non_table_line() {
        let mut source = StringSource::new("|a|\n|b|\nafterwards");
        let line = source.next_line().unwrap();

        let block = TableBlockParser.consume(&line, &mut source);

        let Block::Table(rows) = block else {
            panic!("expected a table");
        };
        assert_eq!(rows.len(), 2);
        // the non-table line is still available to the next parser
        assert_eq!(source.next_line(), Some("afterwards".to_string()));
    }

    #[test]
    fn pipe_inside_link_text_is_not_a_cell_delimiter() {
        let block = consume("|[alias|Target]|plain|");

        let Block::Table(rows) = block else {
            panic!("expected a table");
        };
        assert_eq!(rows[0].cells.len(), 2);
        assert_eq!(
            rows[0].cells[0].content,
            vec![Block::Link {
                target: "Target.html".to_string(),
                text: "alias".to_string(),
            }]
        );
        assert_eq!(cell_text(&rows[0].cells[1]), "plain");
    }

    #[test]
    fn cell_markup_is_inline_parsed() {
        let block = consume("|*bold* cell|{{mono}}|");

        let Block::Table(rows) = block else {
            panic!("expected a table");
        };
        assert_eq!(
            rows[0].cells[0].content,
            vec![
                Block::Bold(vec![Block::Text("bold".to_string())]),
                Block::Text(" cell".to_string()),
            ]
        );
        assert_eq!(
            rows[0].cells[1].content,
            vec![Block::Monospace(vec![Block::Text("mono".to_string())])]
        );
    }

    #[test]
    fn heading_inside_a_cell_delegates_to_the_section_parser() {
        let block = consume("|h2. Title|body|");

        let Block::Table(rows) = block else {
            panic!("expected a table");
        };
        assert!(matches!(
            rows[0].cells[0].content[0],
            Block::Heading { level: 2, .. }
        ));
    }

    #[test]
    fn empty_cells_are_discarded() {
        let block = consume("|a||b|");

        let Block::Table(rows) = block else {
            panic!("expected a table");
        };
        assert_eq!(rows[0].cells.len(), 2);
    }

    #[test]
    #[should_panic(expected = "without a prior accept")]
    fn consume_without_accept_is_a_caller_defect() {
        let mut source = StringSource::empty();
        TableBlockParser.consume("not a table line", &mut source);
    }
}

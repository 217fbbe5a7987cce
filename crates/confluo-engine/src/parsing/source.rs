//! Line sources feeding the block parsers.

/// Yields successive input lines with one-line look-ahead.
///
/// `peek_line` never consumes, so `accept` predicates can test the upcoming
/// line without disturbing the stream. End of input (`None`) is distinct
/// from an empty line (`Some("")`).
pub trait LineSource {
    fn next_line(&mut self) -> Option<String>;
    fn peek_line(&self) -> Option<&str>;
}

/// An in-memory [`LineSource`] over a string split into lines.
///
/// Line content is preserved exactly (minus the line terminator); an empty
/// input yields no lines at all.
pub struct StringSource {
    lines: Vec<String>,
    pos: usize,
}

impl StringSource {
    pub fn new(input: &str) -> Self {
        Self {
            lines: input.lines().map(str::to_string).collect(),
            pos: 0,
        }
    }

    /// A source that is already exhausted. Used when re-parsing content that
    /// has no following lines, such as a table cell.
    pub fn empty() -> Self {
        Self::new("")
    }
}

impl LineSource for StringSource {
    fn next_line(&mut self) -> Option<String> {
        let line = self.lines.get(self.pos).cloned();
        if line.is_some() {
            self.pos += 1;
        }
        line
    }

    fn peek_line(&self) -> Option<&str> {
        self.lines.get(self.pos).map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn yields_lines_in_order() {
        let mut source = StringSource::new("one\ntwo\nthree");

        assert_eq!(source.next_line(), Some("one".to_string()));
        assert_eq!(source.next_line(), Some("two".to_string()));
        assert_eq!(source.next_line(), Some("three".to_string()));
        assert_eq!(source.next_line(), None);
    }

    #[test]
    fn peek_does_not_consume() {
        let mut source = StringSource::new("a\nb");

        assert_eq!(source.peek_line(), Some("a"));
        assert_eq!(source.peek_line(), Some("a"));
        assert_eq!(source.next_line(), Some("a".to_string()));
        assert_eq!(source.peek_line(), Some("b"));
    }

    #[test]
    fn empty_line_is_distinct_from_end_of_input() {
        let mut source = StringSource::new("a\n\nb");

        assert_eq!(source.next_line(), Some("a".to_string()));
        assert_eq!(source.next_line(), Some(String::new()));
        assert_eq!(source.next_line(), Some("b".to_string()));
        assert_eq!(source.next_line(), None);
    }

    #[test]
    fn empty_input_has_no_lines() {
        let mut source = StringSource::empty();

        assert_eq!(source.peek_line(), None);
        assert_eq!(source.next_line(), None);
    }

    #[test]
    fn windows_line_endings_are_stripped() {
        let mut source = StringSource::new("a\r\nb\r\n");

        assert_eq!(source.next_line(), Some("a".to_string()));
        assert_eq!(source.next_line(), Some("b".to_string()));
        assert_eq!(source.next_line(), None);
    }
}

//! The literal token set of the Confluence wiki notation.
//!
//! Every recognizer in this crate pulls its delimiters from here so that the
//! notation is written down exactly once.

/// Bold toggle: `*`
pub const BOLD: char = '*';

/// Italic toggle: `_`
pub const ITALIC: char = '_';

/// Escape / line-break lead-in: `\`
pub const ESCAPE: char = '\\';

/// Link opener: `[`
pub const LINK_START: char = '[';

/// Separates link alias from link target: `|`
pub const LINK_MIDDLE: char = '|';

/// Link closer: `]`
pub const LINK_END: char = ']';

/// Marks a link target as verbatim (no suffixing): `^`
pub const LINK_VERBATIM: char = '^';

/// Marks a link target as an intra-document anchor reference: `#`
pub const LINK_ANCHOR: char = '#';

/// Suffix appended to bare page-name link targets.
pub const LINK_SUFFIX: &str = ".html";

/// Brace pair delimiting macros and monospace runs.
pub const BRACE_OPEN: char = '{';
pub const BRACE_CLOSE: char = '}';

/// Macro name prefix that produces an anchor: `{anchor:NAME}`
pub const ANCHOR_PREFIX: &str = "anchor:";

/// Table row lead-in and cell delimiter: `|`
pub const TABLE_CELL: char = '|';

/// Table header-row lead-in and header-cell delimiter: `||`
pub const TABLE_HEADER: &str = "||";

/// Figure delimiter: `!image.png!`
pub const FIGURE: char = '!';

/// List item markers. Depth is the length of the marker run.
pub const LIST_BULLET: char = '*';
pub const LIST_DASH: char = '-';
pub const LIST_NUMBERED: char = '#';

/// Horizontal rule: a line of four or more dashes.
pub const RULE: char = '-';
pub const RULE_MIN_LEN: usize = 4;

/// Fenced verbatim tags: `{code}` / `{code:java}` and `{noformat}`.
pub const VERBATIM_CODE: &str = "code";
pub const VERBATIM_NOFORMAT: &str = "noformat";

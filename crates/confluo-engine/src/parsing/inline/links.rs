//! Link capture resolution.
//!
//! The scanner hands over the raw text captured between `[` and `]`; this
//! module decides alias vs. target and applies the target normalization
//! heuristic: wiki page names map 1:1 to generated `.html` files, so bare
//! page targets get suffixed while external (`http`), already-suffixed,
//! fragment-only (`#`) and verbatim (`^`) targets pass through untouched.

use crate::markup;
use crate::tree::Block;

/// Resolves one captured `[...]` body into a [`Block::Link`].
pub fn build_link(captured: &str) -> Block {
    match captured.split_once(markup::LINK_MIDDLE) {
        Some((alias, target)) => {
            let target = match target.strip_prefix(markup::LINK_VERBATIM) {
                Some(stripped) => stripped.to_string(),
                None => normalize(target),
            };
            Block::Link {
                target,
                text: alias.to_string(),
            }
        }
        None => {
            if let Some(name) = captured.strip_prefix(markup::LINK_ANCHOR) {
                // anchor reference: the `#` stays on the target, not the alias
                return Block::Link {
                    target: captured.to_string(),
                    text: name.to_string(),
                };
            }
            if let Some(stripped) = captured.strip_prefix(markup::LINK_VERBATIM) {
                return Block::Link {
                    target: stripped.to_string(),
                    text: stripped.to_string(),
                };
            }
            Block::Link {
                target: normalize(captured),
                text: captured.to_string(),
            }
        }
    }
}

/// Appends `.html` to a target unless it is already suffixed or external.
/// A target with an in-page fragment gets the suffix spliced in before `#`.
fn normalize(target: &str) -> String {
    if target.ends_with(markup::LINK_SUFFIX) || target.contains("http") {
        return target.to_string();
    }
    match target.find(markup::LINK_ANCHOR) {
        None => format!("{target}{}", markup::LINK_SUFFIX),
        Some(0) => target.to_string(),
        Some(idx) => format!(
            "{}{}#{}",
            &target[..idx],
            markup::LINK_SUFFIX,
            &target[idx + 1..]
        ),
    }
}

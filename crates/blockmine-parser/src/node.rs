//! Helpers for inspecting tree-sitter nodes.

use blockmine_core::{ensure, Error, Result};
use tree_sitter::Node;

/// Fail with an invariant violation that embeds the node's S-expression.
pub fn ensure_node(condition: bool, message: impl AsRef<str>, node: &Node<'_>) -> Result<()> {
    if condition {
        return Ok(());
    }
    ensure(false, format!("{}{}", message.as_ref(), node.to_sexp()))
}

/// Source text covered by `node`.
///
/// Returns `None` if the node's byte range is outside `source` or does not
/// fall on UTF-8 boundaries.
pub fn block_text<'s>(node: &Node<'_>, source: &'s str) -> Option<&'s str> {
    let text = source.get(node.byte_range());
    if text.is_none() {
        log::trace!(
            "Node {} at {:?} does not map into the given source",
            node.kind(),
            node.byte_range()
        );
    }
    text
}

/// 1-based line and column of the node's first byte.
pub fn node_location(node: &Node<'_>) -> (usize, usize) {
    let point = node.start_position();
    (point.row + 1, point.column + 1)
}

/// First ERROR or MISSING node in pre-order, or `None` for a clean subtree.
pub fn first_error_node<'tree>(root: Node<'tree>) -> Option<Node<'tree>> {
    if !root.has_error() {
        return None;
    }

    let mut cursor = root.walk();
    loop {
        let node = cursor.node();
        if node.is_error() || node.is_missing() {
            return Some(node);
        }
        // Only descend into subtrees that contain an error.
        if node.has_error() && cursor.goto_first_child() {
            continue;
        }
        loop {
            if cursor.goto_next_sibling() {
                break;
            }
            if !cursor.goto_parent() {
                return None;
            }
        }
    }
}

/// Build the parse error reported for an offending node.
///
/// MISSING nodes are zero-width, so the enclosing construct is named instead.
pub(crate) fn parse_error_for(node: &Node<'_>, source: &str) -> Error {
    let (line, column) = node_location(node);
    let fragment = if node.is_missing() {
        let context = node
            .parent()
            .and_then(|parent| block_text(&parent, source))
            .unwrap_or_default();
        format!("{} (missing `{}`)", context.trim(), node.kind())
    } else {
        match block_text(node, source) {
            Some(text) => text.trim().to_string(),
            None => source
                .as_bytes()
                .get(node.byte_range())
                .map(|bytes| String::from_utf8_lossy(bytes).trim().to_string())
                .unwrap_or_default(),
        }
    };
    Error::parse(fragment, line, column)
}

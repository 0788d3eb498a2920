//! Code block collection.
//!
//! Walks a syntax tree in pre-order and appends every node the grammar's
//! binding marks as interesting. The output vector is never cleared, so one
//! vector can accumulate blocks from several trees.

use blockmine_core::{ensure, Grammar, Result};
use tree_sitter::Node;

use crate::grammar::{binding_for, Candidate, GrammarBinding};
use crate::node::ensure_node;
use crate::tree::ManagedTree;

/// Ordered sequence of collected nodes, in traversal order.
pub type CodeBlocks<'tree> = Vec<Node<'tree>>;

/// Append the code blocks of interest in the subtree rooted at `root`.
pub fn collect_blocks_of_interest<'tree>(
    grammar: Grammar,
    root: Node<'tree>,
    blocks: &mut CodeBlocks<'tree>,
) -> Result<()> {
    ensure_node(
        !root.is_missing(),
        format!("{} collection rooted at a MISSING node: ", grammar),
        &root,
    )?;

    let before = blocks.len();
    walk_candidates(binding_for(grammar), root, |node| blocks.push(node));
    log::debug!(
        "Collected {} {} code blocks under {}",
        blocks.len() - before,
        grammar,
        root.kind()
    );
    Ok(())
}

/// Append the code blocks of interest in a whole tree.
///
/// `grammar` must be the grammar the tree was parsed with.
pub fn collect_tree_blocks_of_interest<'tree>(
    grammar: Grammar,
    tree: &'tree ManagedTree,
    blocks: &mut CodeBlocks<'tree>,
) -> Result<()> {
    ensure(
        tree.grammar() == grammar,
        format!(
            "cannot collect {} code blocks from a {} syntax tree",
            grammar,
            tree.grammar()
        ),
    )?;
    let root = tree.root_node()?;
    collect_blocks_of_interest(grammar, root, blocks)
}

/// Number of code blocks of interest under `root`, without collecting them.
pub fn count_blocks_of_interest(grammar: Grammar, root: Node<'_>) -> usize {
    let mut count = 0;
    walk_candidates(binding_for(grammar), root, |_| count += 1);
    count
}

/// Pre-order walk calling `on_match` for every interesting node.
fn walk_candidates<'tree>(
    binding: &dyn GrammarBinding,
    root: Node<'tree>,
    mut on_match: impl FnMut(Node<'tree>),
) {
    // A fresh cursor knows nothing above its start node, so take the root's
    // context from its real parent.
    let (root_field, root_parent_kind) = match root.parent() {
        Some(parent) => (field_of_child(parent, root), Some(parent.kind())),
        None => (None, None),
    };

    let mut cursor = root.walk();
    let mut parent_kinds: Vec<&'static str> = Vec::new();
    loop {
        let node = cursor.node();
        let candidate = if parent_kinds.is_empty() {
            Candidate {
                node,
                field: root_field,
                parent_kind: root_parent_kind,
            }
        } else {
            Candidate {
                node,
                field: cursor.field_name(),
                parent_kind: parent_kinds.last().copied(),
            }
        };
        if binding.is_of_interest(&candidate) {
            on_match(node);
        }

        if cursor.goto_first_child() {
            parent_kinds.push(node.kind());
            continue;
        }
        loop {
            if cursor.goto_next_sibling() {
                break;
            }
            if !cursor.goto_parent() {
                return;
            }
            parent_kinds.pop();
        }
    }
}

fn field_of_child(parent: Node<'_>, child: Node<'_>) -> Option<&'static str> {
    let mut cursor = parent.walk();
    if !cursor.goto_first_child() {
        return None;
    }
    loop {
        if cursor.node() == child {
            return cursor.field_name();
        }
        if !cursor.goto_next_sibling() {
            return None;
        }
    }
}

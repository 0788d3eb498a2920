//! Owning wrapper around a tree-sitter syntax tree.

use blockmine_core::{Error, Grammar, Result};
use tree_sitter::{Node, Tree};

/// Sole owner of one engine-allocated syntax tree.
///
/// Only the parser constructs these. The wrapper is move-only: it is neither
/// `Clone` nor `Copy`, so two live owners of the same tree cannot exist. The
/// engine tree is deleted exactly once, either by [`ManagedTree::release`] or
/// on drop, and every [`Node`] borrowed from it is bounded by that borrow.
pub struct ManagedTree {
    tree: Option<Tree>,
    grammar: Grammar,
}

impl ManagedTree {
    pub(crate) fn new(tree: Tree, grammar: Grammar) -> Self {
        Self {
            tree: Some(tree),
            grammar,
        }
    }

    /// Grammar the tree was parsed with.
    pub fn grammar(&self) -> Grammar {
        self.grammar
    }

    pub fn is_released(&self) -> bool {
        self.tree.is_none()
    }

    /// Borrow the underlying engine tree, if still held.
    pub fn tree(&self) -> Option<&Tree> {
        self.tree.as_ref()
    }

    /// Root node of the tree. Fails once the tree has been released.
    pub fn root_node(&self) -> Result<Node<'_>> {
        self.tree
            .as_ref()
            .map(Tree::root_node)
            .ok_or_else(|| {
                Error::AssertFailed(format!("{} syntax tree used after release", self.grammar))
            })
    }

    /// Whether the tree holds any ERROR or MISSING node.
    pub fn has_error(&self) -> bool {
        self.tree
            .as_ref()
            .is_some_and(|tree| tree.root_node().has_error())
    }

    /// S-expression of the whole tree, for diagnostics.
    pub fn to_sexp(&self) -> Result<String> {
        Ok(self.root_node()?.to_sexp())
    }

    /// Delete the engine tree now.
    ///
    /// Returns `true` if a tree was deleted; releasing an already released
    /// holder does nothing and returns `false`.
    pub fn release(&mut self) -> bool {
        match self.tree.take() {
            Some(tree) => {
                drop(tree);
                log::trace!("Released {} syntax tree", self.grammar);
                true
            }
            None => false,
        }
    }
}

impl Drop for ManagedTree {
    fn drop(&mut self) {
        self.release();
    }
}

impl std::fmt::Debug for ManagedTree {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ManagedTree")
            .field("grammar", &self.grammar)
            .field("released", &self.is_released())
            .finish()
    }
}

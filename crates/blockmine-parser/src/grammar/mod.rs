//! Per-grammar bindings to the tree-sitter engine.
//!
//! Each supported grammar implements [`GrammarBinding`], which supplies the
//! tree-sitter language used for parsing and the predicate that decides which
//! nodes are code blocks of interest.
//!
//! ## Adding a Grammar
//!
//! 1. Add the variant to `Grammar` in `blockmine-core`
//! 2. Add a binding struct and its node kinds in `bindings.rs`
//! 3. Register it in [`binding_for`]

mod bindings;

use blockmine_core::Grammar;
use tree_sitter::Node;

pub use bindings::{
    CBinding, CppBinding, GoBinding, JavaBinding, JavaScriptBinding, PhpBinding, PythonBinding,
    RubyBinding, RustBinding, TypeScriptBinding,
};

/// A node seen during traversal, together with its position under its parent.
#[derive(Debug, Clone, Copy)]
pub struct Candidate<'tree> {
    pub node: Node<'tree>,
    /// Field name linking the node to its parent, if the grammar names one.
    pub field: Option<&'static str>,
    /// Kind of the parent node, `None` for the tree root.
    pub parent_kind: Option<&'static str>,
}

impl Candidate<'_> {
    pub fn kind(&self) -> &'static str {
        self.node.kind()
    }
}

/// Grammar-specific engine binding and interest policy.
pub trait GrammarBinding: Send + Sync {
    fn grammar(&self) -> Grammar;

    /// Get the tree-sitter language for parsing.
    fn tree_sitter_language(&self) -> tree_sitter::Language;

    /// Node kinds of the grammar's conditional statements.
    fn conditional_kinds(&self) -> &'static [&'static str];

    /// Field under which a conditional statement holds its condition.
    fn condition_field(&self) -> &'static str {
        "condition"
    }

    /// Whether `candidate` is a code block of interest.
    ///
    /// Must depend only on the candidate itself so that collection is
    /// reproducible for a given tree.
    fn is_of_interest(&self, candidate: &Candidate<'_>) -> bool {
        candidate.field == Some(self.condition_field())
            && candidate
                .parent_kind
                .is_some_and(|kind| self.conditional_kinds().contains(&kind))
    }
}

/// Get the binding for a grammar.
#[must_use]
pub fn binding_for(grammar: Grammar) -> &'static dyn GrammarBinding {
    match grammar {
        Grammar::C => &CBinding,
        Grammar::Cpp => &CppBinding,
        Grammar::Java => &JavaBinding,
        Grammar::JavaScript => &JavaScriptBinding,
        Grammar::TypeScript => &TypeScriptBinding,
        Grammar::Go => &GoBinding,
        Grammar::Rust => &RustBinding,
        Grammar::Python => &PythonBinding,
        Grammar::Ruby => &RubyBinding,
        Grammar::Php => &PhpBinding,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_grammar_has_a_matching_binding() {
        for grammar in Grammar::ALL {
            assert_eq!(binding_for(grammar).grammar(), grammar);
        }
    }

    #[test]
    fn every_binding_loads_into_the_engine() {
        for grammar in Grammar::ALL {
            let mut parser = tree_sitter::Parser::new();
            parser
                .set_language(&binding_for(grammar).tree_sitter_language())
                .unwrap_or_else(|e| panic!("{grammar}: {e}"));
        }
    }

    #[test]
    fn every_binding_declares_conditionals() {
        for grammar in Grammar::ALL {
            assert!(
                !binding_for(grammar).conditional_kinds().is_empty(),
                "{grammar} has no conditional kinds"
            );
        }
    }
}

//! Tree-sitter based parsing and code block collection.
//!
//! This crate provides:
//! - Parser entry points for files and in-memory source (SourceParser)
//! - Exactly-once ownership of engine syntax trees (ManagedTree)
//! - Per-grammar engine bindings and interest policies (GrammarBinding)
//! - Collection of code blocks of interest in traversal order

mod collector;
mod grammar;
mod node;
mod parser;
mod tree;

pub use collector::{
    collect_blocks_of_interest, collect_tree_blocks_of_interest, count_blocks_of_interest,
    CodeBlocks,
};
pub use grammar::{
    binding_for, CBinding, Candidate, CppBinding, GoBinding, GrammarBinding, JavaBinding,
    JavaScriptBinding, PhpBinding, PythonBinding, RubyBinding, RustBinding, TypeScriptBinding,
};
pub use node::{block_text, ensure_node, first_error_node, node_location};
pub use parser::{parse_file, parse_file_detect, parse_str, SourceParser};
pub use tree::ManagedTree;

// Re-export tree-sitter types for downstream crates
pub use tree_sitter::{Node, Tree};

//! Binding structs for the bundled tree-sitter grammars.
//!
//! Every bundled grammar selects the same construct: the condition of an
//! if-like statement. Only the node kinds differ between grammars.

use blockmine_core::Grammar;

use super::GrammarBinding;

/// Tree-sitter node kinds of the conditional statements per grammar.
///
/// These match the node types defined in each tree-sitter grammar.
mod node_kinds {
    pub const C: &[&str] = &["if_statement"];
    pub const CPP: &[&str] = &["if_statement"];
    pub const JAVA: &[&str] = &["if_statement"];
    pub const JAVASCRIPT: &[&str] = &["if_statement"];
    pub const TYPESCRIPT: &[&str] = &["if_statement"];
    pub const GO: &[&str] = &["if_statement"];
    pub const RUST: &[&str] = &["if_expression"];
    pub const PYTHON: &[&str] = &["if_statement", "elif_clause"];
    pub const RUBY: &[&str] = &["if", "elsif", "unless", "if_modifier", "unless_modifier"];
    pub const PHP: &[&str] = &["if_statement", "else_if_clause"];
}

pub struct CBinding;

impl GrammarBinding for CBinding {
    fn grammar(&self) -> Grammar {
        Grammar::C
    }

    fn tree_sitter_language(&self) -> tree_sitter::Language {
        tree_sitter_c::LANGUAGE.into()
    }

    fn conditional_kinds(&self) -> &'static [&'static str] {
        node_kinds::C
    }
}

/// Collects the parenthesised `condition_clause`, including
/// `if (init; cond)` forms.
pub struct CppBinding;

impl GrammarBinding for CppBinding {
    fn grammar(&self) -> Grammar {
        Grammar::Cpp
    }

    fn tree_sitter_language(&self) -> tree_sitter::Language {
        tree_sitter_cpp::LANGUAGE.into()
    }

    fn conditional_kinds(&self) -> &'static [&'static str] {
        node_kinds::CPP
    }
}

pub struct JavaBinding;

impl GrammarBinding for JavaBinding {
    fn grammar(&self) -> Grammar {
        Grammar::Java
    }

    fn tree_sitter_language(&self) -> tree_sitter::Language {
        tree_sitter_java::LANGUAGE.into()
    }

    fn conditional_kinds(&self) -> &'static [&'static str] {
        node_kinds::JAVA
    }
}

pub struct JavaScriptBinding;

impl GrammarBinding for JavaScriptBinding {
    fn grammar(&self) -> Grammar {
        Grammar::JavaScript
    }

    fn tree_sitter_language(&self) -> tree_sitter::Language {
        tree_sitter_javascript::LANGUAGE.into()
    }

    fn conditional_kinds(&self) -> &'static [&'static str] {
        node_kinds::JAVASCRIPT
    }
}

/// Plain TypeScript only; `.tsx` sources are not routed here.
pub struct TypeScriptBinding;

impl GrammarBinding for TypeScriptBinding {
    fn grammar(&self) -> Grammar {
        Grammar::TypeScript
    }

    fn tree_sitter_language(&self) -> tree_sitter::Language {
        tree_sitter_typescript::LANGUAGE_TYPESCRIPT.into()
    }

    fn conditional_kinds(&self) -> &'static [&'static str] {
        node_kinds::TYPESCRIPT
    }
}

pub struct GoBinding;

impl GrammarBinding for GoBinding {
    fn grammar(&self) -> Grammar {
        Grammar::Go
    }

    fn tree_sitter_language(&self) -> tree_sitter::Language {
        tree_sitter_go::LANGUAGE.into()
    }

    fn conditional_kinds(&self) -> &'static [&'static str] {
        node_kinds::GO
    }
}

pub struct RustBinding;

impl GrammarBinding for RustBinding {
    fn grammar(&self) -> Grammar {
        Grammar::Rust
    }

    fn tree_sitter_language(&self) -> tree_sitter::Language {
        tree_sitter_rust::LANGUAGE.into()
    }

    fn conditional_kinds(&self) -> &'static [&'static str] {
        node_kinds::RUST
    }
}

pub struct PythonBinding;

impl GrammarBinding for PythonBinding {
    fn grammar(&self) -> Grammar {
        Grammar::Python
    }

    fn tree_sitter_language(&self) -> tree_sitter::Language {
        tree_sitter_python::LANGUAGE.into()
    }

    fn conditional_kinds(&self) -> &'static [&'static str] {
        node_kinds::PYTHON
    }
}

pub struct RubyBinding;

impl GrammarBinding for RubyBinding {
    fn grammar(&self) -> Grammar {
        Grammar::Ruby
    }

    fn tree_sitter_language(&self) -> tree_sitter::Language {
        tree_sitter_ruby::LANGUAGE.into()
    }

    fn conditional_kinds(&self) -> &'static [&'static str] {
        node_kinds::RUBY
    }
}

/// Parses full PHP files (with the `<?php` open tag), not bare snippets.
pub struct PhpBinding;

impl GrammarBinding for PhpBinding {
    fn grammar(&self) -> Grammar {
        Grammar::Php
    }

    fn tree_sitter_language(&self) -> tree_sitter::Language {
        tree_sitter_php::LANGUAGE_PHP.into()
    }

    fn conditional_kinds(&self) -> &'static [&'static str] {
        node_kinds::PHP
    }
}

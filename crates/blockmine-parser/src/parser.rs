//! Parser entry points using tree-sitter.

use std::fs;
use std::path::Path;

use blockmine_core::{Error, Grammar, Result, Timer};
use tree_sitter::Parser;

use crate::grammar::binding_for;
use crate::node::{first_error_node, parse_error_for};
use crate::tree::ManagedTree;

/// Tree-sitter parser bound to one grammar.
///
/// The engine parser is reused across calls, so parsing many files of the
/// same grammar should go through one `SourceParser`.
pub struct SourceParser {
    grammar: Grammar,
    parser: Parser,
    report_parse_errors: bool,
}

impl SourceParser {
    /// Create a tolerant parser for `grammar`.
    pub fn new(grammar: Grammar) -> Result<Self> {
        let mut parser = Parser::new();
        parser
            .set_language(&binding_for(grammar).tree_sitter_language())
            .map_err(|e| Error::message(format!("Failed to load {} grammar: {}", grammar, e)))?;

        Ok(Self {
            grammar,
            parser,
            report_parse_errors: false,
        })
    }

    /// Fail on trees containing ERROR or MISSING nodes instead of returning them.
    #[must_use]
    pub fn report_parse_errors(mut self, enabled: bool) -> Self {
        self.report_parse_errors = enabled;
        self
    }

    pub fn grammar(&self) -> Grammar {
        self.grammar
    }

    pub fn reports_parse_errors(&self) -> bool {
        self.report_parse_errors
    }

    /// Parse source text held in memory.
    pub fn parse_str(&mut self, source: &str) -> Result<ManagedTree> {
        // Timing is best-effort; a clock failure never fails the parse.
        let mut timer = Timer::new();
        if let Err(e) = timer.start() {
            log::debug!("Parse timing unavailable: {}", e);
        }
        let parsed = self.parser.parse(source, None);
        if let Err(e) = timer.stop() {
            log::debug!("Parse timing unavailable: {}", e);
        }

        let tree = match parsed {
            Some(tree) => ManagedTree::new(tree, self.grammar),
            None => return Err(Error::parse(source, 1, 1)),
        };

        if tree.has_error() {
            if self.report_parse_errors {
                let root = tree.root_node()?;
                let error = first_error_node(root)
                    .map(|node| parse_error_for(&node, source))
                    .unwrap_or_else(|| Error::parse(source, 1, 1));
                return Err(error);
            }
            log::warn!(
                "{} source parsed with errors; returning partial tree",
                self.grammar
            );
        }

        log_parse_timing(&timer, source.len(), self.grammar);
        Ok(tree)
    }

    /// Read a file fully and parse it, returning the tree and the file contents.
    ///
    /// Bytes that are not valid UTF-8 are replaced with U+FFFD before parsing,
    /// so the returned contents always match the tree's byte ranges.
    pub fn parse_file(&mut self, path: impl AsRef<Path>) -> Result<(ManagedTree, String)> {
        let path = path.as_ref();
        let bytes = fs::read(path).map_err(|e| Error::file_access(path, e))?;
        log::debug!("Read {} ({} bytes)", path.display(), bytes.len());

        let contents = match String::from_utf8(bytes) {
            Ok(contents) => contents,
            Err(e) => {
                log::warn!(
                    "{} is not valid UTF-8 (first bad byte at offset {}); decoding lossily",
                    path.display(),
                    e.utf8_error().valid_up_to()
                );
                String::from_utf8_lossy(e.as_bytes()).into_owned()
            }
        };

        let tree = self.parse_str(&contents)?;
        Ok((tree, contents))
    }
}

fn log_parse_timing(timer: &Timer, bytes: usize, grammar: Grammar) {
    match timer.formatted_diff() {
        Ok(diff) => log::debug!("Parsed {} bytes of {} in {}s", bytes, grammar, diff),
        Err(e) => log::debug!("Parsed {} bytes of {} (timing unavailable: {})", bytes, grammar, e),
    }
}

/// Parse `source` with `grammar`.
///
/// With `report_parse_errors` unset the tree is returned even when it holds
/// error nodes.
pub fn parse_str(source: &str, grammar: Grammar, report_parse_errors: bool) -> Result<ManagedTree> {
    SourceParser::new(grammar)?
        .report_parse_errors(report_parse_errors)
        .parse_str(source)
}

/// Parse the file at `path` with `grammar`, tolerating parse errors.
pub fn parse_file(path: impl AsRef<Path>, grammar: Grammar) -> Result<(ManagedTree, String)> {
    SourceParser::new(grammar)?.parse_file(path)
}

/// Like [`parse_file`], picking the grammar from the file extension.
pub fn parse_file_detect(path: impl AsRef<Path>) -> Result<(ManagedTree, String)> {
    let path = path.as_ref();
    let grammar = Grammar::from_path(path).ok_or_else(|| {
        Error::message(format!("No grammar for file extension: {}", path.display()))
    })?;
    parse_file(path, grammar)
}

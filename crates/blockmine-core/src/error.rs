//! Error taxonomy shared by every blockmine crate.
//!
//! Failures fall into two groups:
//!
//! - **Input problems**: the caller handed us something unreadable or
//!   unparsable (`FileAccess`, `Parse`).
//! - **Internal problems**: a precondition the implementation relies on did
//!   not hold (`AssertFailed`, `Clock`, `Timer`, `Message`).
//!
//! Nothing in this layer retries; every error goes straight back to the caller.

use std::path::PathBuf;

use thiserror::Error;

/// Result type for blockmine operations.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// Free-form failure
    #[error("{0}")]
    Message(String),

    /// Reading source text from disk failed
    #[error("File access failed: {}: {source}", .path.display())]
    FileAccess {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The parsing engine rejected the source, or strict mode found an error node
    #[error("Parse error in expression: {fragment} (line {line}, column {column})")]
    Parse {
        fragment: String,
        line: usize,
        column: usize,
    },

    /// An internal invariant did not hold
    #[error("Assert failed: {0}")]
    AssertFailed(String),

    /// The system clock could not be read
    #[error("Clock read failed: {0}")]
    Clock(String),

    /// Elapsed time was requested before a complete start/stop pair
    #[error("Timer misuse: {0}")]
    Timer(String),
}

impl Error {
    /// Create a free-form error.
    #[must_use]
    pub fn message(message: impl Into<String>) -> Self {
        Self::Message(message.into())
    }

    /// Create a file access error for `path`.
    #[must_use]
    pub fn file_access(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::FileAccess {
            path: path.into(),
            source,
        }
    }

    /// Create a parse error. `line` and `column` are 1-based.
    #[must_use]
    pub fn parse(fragment: impl Into<String>, line: usize, column: usize) -> Self {
        Self::Parse {
            fragment: fragment.into(),
            line,
            column,
        }
    }

    /// Returns `true` if the caller's input caused this error.
    #[must_use]
    pub fn is_input_error(&self) -> bool {
        matches!(self, Self::FileAccess { .. } | Self::Parse { .. })
    }

    /// Returns `true` if this error signals a defect or environment problem.
    #[must_use]
    pub fn is_internal_error(&self) -> bool {
        !self.is_input_error()
    }
}

/// Fail with [`Error::AssertFailed`] unless `condition` holds.
///
/// This is the only assertion mechanism in blockmine and it is active in
/// every build profile.
pub fn ensure(condition: bool, message: impl AsRef<str>) -> Result<()> {
    if condition {
        Ok(())
    } else {
        Err(Error::AssertFailed(message.as_ref().to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ensure_passes_on_true() {
        assert!(ensure(true, "never shown").is_ok());
    }

    #[test]
    fn ensure_fails_with_message() {
        let err = ensure(1 + 1 == 3, "arithmetic is broken").unwrap_err();
        assert!(matches!(err, Error::AssertFailed(_)));
        assert_eq!(err.to_string(), "Assert failed: arithmetic is broken");
    }

    #[test]
    fn file_access_display_includes_path_and_cause() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "No such file or directory");
        let err = Error::file_access("src/missing.c", io);

        let display = err.to_string();
        assert!(display.starts_with("File access failed: "));
        assert!(display.contains("src/missing.c"));
        assert!(display.contains("No such file or directory"));
    }

    #[test]
    fn parse_display_includes_fragment_and_location() {
        let err = Error::parse("if (x ==) {", 3, 5);
        assert_eq!(
            err.to_string(),
            "Parse error in expression: if (x ==) { (line 3, column 5)"
        );
    }

    #[test]
    fn error_categorization() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        assert!(Error::file_access("a.c", io).is_input_error());
        assert!(Error::parse("x", 1, 1).is_input_error());

        assert!(Error::AssertFailed("x".into()).is_internal_error());
        assert!(Error::Clock("x".into()).is_internal_error());
        assert!(Error::Timer("x".into()).is_internal_error());
        assert!(Error::message("x").is_internal_error());
    }
}

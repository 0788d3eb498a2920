//! Source-language grammar identifiers.

use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Grammars the parser front end can dispatch on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Grammar {
    C,
    Cpp,
    Java,
    JavaScript,
    TypeScript,
    Go,
    Rust,
    Python,
    Ruby,
    Php,
}

impl Grammar {
    /// Every supported grammar, in a stable order.
    pub const ALL: [Grammar; 10] = [
        Grammar::C,
        Grammar::Cpp,
        Grammar::Java,
        Grammar::JavaScript,
        Grammar::TypeScript,
        Grammar::Go,
        Grammar::Rust,
        Grammar::Python,
        Grammar::Ruby,
        Grammar::Php,
    ];

    /// Pick a grammar from a file extension (without the leading dot).
    #[must_use]
    pub fn from_extension(ext: &str) -> Option<Self> {
        let ext = ext.to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|grammar| grammar.extensions().contains(&ext.as_str()))
    }

    /// Pick a grammar from a path's extension.
    #[must_use]
    pub fn from_path(path: &Path) -> Option<Self> {
        path.extension()
            .and_then(|e| e.to_str())
            .and_then(Self::from_extension)
    }

    /// File extensions handled by this grammar.
    #[must_use]
    pub fn extensions(&self) -> &'static [&'static str] {
        match self {
            Grammar::C => &["c", "h"],
            Grammar::Cpp => &["cpp", "cxx", "cc", "hpp", "hxx"],
            Grammar::Java => &["java"],
            Grammar::JavaScript => &["js", "mjs", "cjs", "jsx"],
            Grammar::TypeScript => &["ts", "mts", "cts"],
            Grammar::Go => &["go"],
            Grammar::Rust => &["rs"],
            Grammar::Python => &["py", "pyi"],
            Grammar::Ruby => &["rb"],
            Grammar::Php => &["php", "php3", "php4", "php5", "phtml"],
        }
    }

    /// Canonical lowercase name, as used in configuration files.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Grammar::C => "c",
            Grammar::Cpp => "cpp",
            Grammar::Java => "java",
            Grammar::JavaScript => "javascript",
            Grammar::TypeScript => "typescript",
            Grammar::Go => "go",
            Grammar::Rust => "rust",
            Grammar::Python => "python",
            Grammar::Ruby => "ruby",
            Grammar::Php => "php",
        }
    }

    /// Get the display name for this grammar.
    #[must_use]
    pub fn display_name(&self) -> &'static str {
        match self {
            Grammar::C => "C",
            Grammar::Cpp => "C++",
            Grammar::Java => "Java",
            Grammar::JavaScript => "JavaScript",
            Grammar::TypeScript => "TypeScript",
            Grammar::Go => "Go",
            Grammar::Rust => "Rust",
            Grammar::Python => "Python",
            Grammar::Ruby => "Ruby",
            Grammar::Php => "PHP",
        }
    }
}

impl std::fmt::Display for Grammar {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl FromStr for Grammar {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s_lower = s.trim().to_lowercase();
        match s_lower.as_str() {
            "c" => Ok(Grammar::C),
            "cpp" | "c++" | "cxx" => Ok(Grammar::Cpp),
            "java" => Ok(Grammar::Java),
            "javascript" | "js" => Ok(Grammar::JavaScript),
            "typescript" | "ts" => Ok(Grammar::TypeScript),
            "go" | "golang" => Ok(Grammar::Go),
            "rust" | "rs" => Ok(Grammar::Rust),
            "python" | "py" => Ok(Grammar::Python),
            "ruby" | "rb" => Ok(Grammar::Ruby),
            "php" => Ok(Grammar::Php),
            _ => Err(format!(
                "Unknown grammar: '{}'. Supported grammars: c, cpp, java, javascript, typescript, go, rust, python, ruby, php",
                s
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_from_extension() {
        assert_eq!(Grammar::from_extension("c"), Some(Grammar::C));
        assert_eq!(Grammar::from_extension("H"), Some(Grammar::C));
        assert_eq!(Grammar::from_extension("py"), Some(Grammar::Python));
        assert_eq!(Grammar::from_extension("phtml"), Some(Grammar::Php));
        assert_eq!(Grammar::from_extension("yaml"), None);
    }

    #[test]
    fn test_from_path() {
        assert_eq!(Grammar::from_path(&PathBuf::from("src/main.rs")), Some(Grammar::Rust));
        assert_eq!(Grammar::from_path(&PathBuf::from("lib/util.hpp")), Some(Grammar::Cpp));
        assert_eq!(Grammar::from_path(&PathBuf::from("Makefile")), None);
    }

    #[test]
    fn test_extensions_do_not_overlap() {
        for grammar in Grammar::ALL {
            for ext in grammar.extensions() {
                assert_eq!(Grammar::from_extension(ext), Some(grammar), "extension {ext}");
            }
        }
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Grammar::C), "C");
        assert_eq!(format!("{}", Grammar::Cpp), "C++");
        assert_eq!(format!("{}", Grammar::Php), "PHP");
    }

    #[test]
    fn test_from_str() {
        assert_eq!(Grammar::from_str("c").unwrap(), Grammar::C);
        assert_eq!(Grammar::from_str("PYTHON").unwrap(), Grammar::Python);
        assert_eq!(Grammar::from_str(" JavaScript ").unwrap(), Grammar::JavaScript);

        // Aliases
        assert_eq!(Grammar::from_str("c++").unwrap(), Grammar::Cpp);
        assert_eq!(Grammar::from_str("ts").unwrap(), Grammar::TypeScript);
        assert_eq!(Grammar::from_str("golang").unwrap(), Grammar::Go);

        let err = Grammar::from_str("verilog").unwrap_err();
        assert!(err.contains("Unknown grammar"));
        assert!(err.contains("Supported grammars"));
    }

    #[test]
    fn test_name_round_trips_through_from_str() {
        for grammar in Grammar::ALL {
            assert_eq!(Grammar::from_str(grammar.name()).unwrap(), grammar);
        }
    }

    #[test]
    fn test_serde_uses_lowercase_names() {
        let json = serde_json::to_string(&Grammar::JavaScript).unwrap();
        assert_eq!(json, "\"javascript\"");
        let grammar: Grammar = serde_json::from_str("\"php\"").unwrap();
        assert_eq!(grammar, Grammar::Php);
    }
}

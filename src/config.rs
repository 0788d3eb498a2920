use anyhow::{anyhow, Result};
use blockmine_core::Grammar;
use blockmine_parser::SourceParser;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;
use std::str::FromStr;

#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
pub struct BlockmineConfig {
    #[serde(default)]
    pub parser: ParserConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Parser front-end configuration
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
pub struct ParserConfig {
    /// Grammar used when the caller does not name one
    pub grammar: Option<Grammar>,

    /// Reject sources whose trees contain error nodes
    #[serde(default)]
    pub report_parse_errors: bool,
}

/// Logging configuration
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct LoggingConfig {
    /// Default filter when RUST_LOG is unset
    #[serde(default = "default_log_level")]
    pub level: String,
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("Invalid value for {field}: {value}")]
    InvalidValue { field: String, value: String },

    #[error("No grammar given and no default grammar configured")]
    MissingGrammar,

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

impl BlockmineConfig {
    pub fn generate_default_config() -> String {
        let default_config = Self::default();
        toml::to_string_pretty(&default_config).unwrap_or_else(|_| {
            r#"# blockmine configuration

[parser]
# grammar = "c"
report_parse_errors = false

[logging]
level = "warn"
"#
            .to_string()
        })
    }

    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let config: BlockmineConfig = toml::from_str(&content)?;
        Ok(config)
    }

    /// Load `path` if it exists, otherwise fall back to defaults.
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if path.exists() {
            log::debug!("Loading config from: {}", path.display());
            Self::load_from_file(path)
        } else {
            Ok(Self::default())
        }
    }

    pub fn apply_env_vars(&mut self, env_vars: &HashMap<String, String>) -> Result<()> {
        for (key, value) in env_vars {
            if let Some(config_key) = key.strip_prefix("BLOCKMINE_") {
                match config_key {
                    "PARSER_GRAMMAR" => {
                        self.parser.grammar = Some(
                            Grammar::from_str(value).map_err(|e| anyhow!(e))?,
                        );
                    }
                    "PARSER_REPORT_PARSE_ERRORS" => {
                        self.parser.report_parse_errors = value
                            .parse()
                            .map_err(|_| anyhow!("Invalid report_parse_errors value: {}", value))?;
                    }
                    "LOGGING_LEVEL" => self.logging.level = value.clone(),
                    _ => {} // Ignore unknown environment variables
                }
            }
        }
        Ok(())
    }

    /// Apply `BLOCKMINE_*` variables from the process environment.
    pub fn apply_process_env(&mut self) -> Result<()> {
        let env_vars: HashMap<String, String> = std::env::vars()
            .filter(|(key, _)| key.starts_with("BLOCKMINE_"))
            .collect();
        self.apply_env_vars(&env_vars)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let level = self.logging.level.to_lowercase();
        let known = ["off", "error", "warn", "info", "debug", "trace"];
        // Full env_logger directives ("blockmine=debug") are passed through as is.
        if !level.contains('=') && !known.contains(&level.as_str()) {
            return Err(ConfigError::InvalidValue {
                field: "logging.level".to_string(),
                value: self.logging.level.clone(),
            });
        }
        Ok(())
    }

    /// Grammar to use for a call, preferring the explicit one.
    pub fn resolve_grammar(&self, grammar: Option<Grammar>) -> Result<Grammar, ConfigError> {
        grammar
            .or(self.parser.grammar)
            .ok_or(ConfigError::MissingGrammar)
    }

    /// Build a parser configured from `[parser]`.
    pub fn source_parser(&self, grammar: Option<Grammar>) -> Result<SourceParser> {
        let grammar = self.resolve_grammar(grammar)?;
        let parser = SourceParser::new(grammar)?
            .report_parse_errors(self.parser.report_parse_errors);
        Ok(parser)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_default_config() {
        let config = BlockmineConfig::default();
        assert_eq!(config.parser.grammar, None);
        assert!(!config.parser.report_parse_errors);
        assert_eq!(config.logging.level, "warn");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_toml_parsing() {
        let toml_content = r#"
[parser]
grammar = "python"
report_parse_errors = true

[logging]
level = "debug"
"#;

        let config: BlockmineConfig = toml::from_str(toml_content).unwrap();
        assert_eq!(config.parser.grammar, Some(Grammar::Python));
        assert!(config.parser.report_parse_errors);
        assert_eq!(config.logging.level, "debug");
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config: BlockmineConfig = toml::from_str("[parser]\ngrammar = \"c\"\n").unwrap();
        assert_eq!(config.parser.grammar, Some(Grammar::C));
        assert!(!config.parser.report_parse_errors);
        assert_eq!(config.logging.level, "warn");
    }

    #[test]
    fn test_unknown_grammar_is_rejected() {
        let result: Result<BlockmineConfig, _> = toml::from_str("[parser]\ngrammar = \"cobol\"\n");
        assert!(result.is_err());
    }

    #[test]
    fn test_env_var_application() {
        let mut config = BlockmineConfig::default();
        let mut env_vars = HashMap::new();
        env_vars.insert("BLOCKMINE_PARSER_GRAMMAR".to_string(), "rs".to_string());
        env_vars.insert("BLOCKMINE_PARSER_REPORT_PARSE_ERRORS".to_string(), "true".to_string());
        env_vars.insert("BLOCKMINE_LOGGING_LEVEL".to_string(), "info".to_string());
        env_vars.insert("UNRELATED".to_string(), "x".to_string());

        config.apply_env_vars(&env_vars).unwrap();

        assert_eq!(config.parser.grammar, Some(Grammar::Rust));
        assert!(config.parser.report_parse_errors);
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_env_var_invalid_values() {
        let mut config = BlockmineConfig::default();
        let mut env_vars = HashMap::new();
        env_vars.insert("BLOCKMINE_PARSER_REPORT_PARSE_ERRORS".to_string(), "maybe".to_string());
        assert!(config.apply_env_vars(&env_vars).is_err());

        let mut env_vars = HashMap::new();
        env_vars.insert("BLOCKMINE_PARSER_GRAMMAR".to_string(), "verilog".to_string());
        assert!(config.apply_env_vars(&env_vars).is_err());
    }

    #[test]
    fn test_config_file_loading() {
        let mut temp_file = NamedTempFile::new().unwrap();
        writeln!(
            temp_file,
            r#"
[parser]
grammar = "php"
"#
        )
        .unwrap();

        let config = BlockmineConfig::load_from_file(temp_file.path()).unwrap();
        assert_eq!(config.parser.grammar, Some(Grammar::Php));
    }

    #[test]
    fn test_load_or_default_without_file() {
        let config = BlockmineConfig::load_or_default("/no/such/blockmine.toml").unwrap();
        assert_eq!(config, BlockmineConfig::default());
    }

    #[test]
    fn test_generate_default_config() {
        let config_string = BlockmineConfig::generate_default_config();
        assert!(config_string.contains("[parser]"));
        assert!(config_string.contains("[logging]"));

        let parsed: BlockmineConfig = toml::from_str(&config_string).unwrap();
        assert_eq!(parsed, BlockmineConfig::default());
    }

    #[test]
    fn test_validate_rejects_unknown_level() {
        let mut config = BlockmineConfig::default();
        config.logging.level = "loud".to_string();
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidValue { .. })
        ));

        config.logging.level = "blockmine_parser=trace".to_string();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_source_parser_from_config() {
        let mut config = BlockmineConfig::default();
        assert!(config.source_parser(None).is_err());

        config.parser.grammar = Some(Grammar::C);
        config.parser.report_parse_errors = true;
        let parser = config.source_parser(None).unwrap();
        assert_eq!(parser.grammar(), Grammar::C);
        assert!(parser.reports_parse_errors());

        let parser = config.source_parser(Some(Grammar::Go)).unwrap();
        assert_eq!(parser.grammar(), Grammar::Go);
    }
}

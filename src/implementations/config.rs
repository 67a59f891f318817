use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

use crate::errors::CompileError;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    FileReadError(#[from] std::io::Error),

    #[error("Failed to parse config file: {0}")]
    ParseError(#[from] serde_yaml::Error),

    #[error("Invalid naming configuration: {0}")]
    InvalidNaming(String),
}

impl From<ConfigError> for CompileError {
    fn from(err: ConfigError) -> Self {
        CompileError::Config(err.to_string())
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct NamingConfig {
    /// Prefix of base property identifiers
    pub property_prefix: String,

    /// Prefix of alias identifiers
    pub alias_prefix: String,

    /// Name prefix marking a property as internal to the engine
    pub internal_prefix: String,

    /// Initialisms lower-cased as a unit when building lowerCamel names.
    /// Longer entries must precede their own prefixes (`CSSOM` before `CSS`).
    pub initialisms: Vec<String>,
}

impl Default for NamingConfig {
    fn default() -> Self {
        let initialisms = [
            "CSSOM", "CSS", "DNS", "FE", "FTP", "HTML", "IME", "JS", "SMIL", "SVG", "URL", "WOFF",
            "XML", "XSLT", "XSS", "YUV",
        ];
        NamingConfig {
            property_prefix: "CSSProperty".to_string(),
            alias_prefix: "CSSPropertyAlias".to_string(),
            internal_prefix: "-internal-".to_string(),
            initialisms: initialisms.iter().map(|s| s.to_string()).collect(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(default)]
pub struct CompilerConfig {
    /// Identifier and casing conventions
    pub naming: NamingConfig,
}

impl CompilerConfig {
    /// Load configuration from a YAML file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path)?;
        Self::from_yaml(&contents)
    }

    pub fn from_yaml(contents: &str) -> Result<Self, ConfigError> {
        let config: CompilerConfig = serde_yaml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject settings that would make base and alias identifiers overlap
    pub fn validate(&self) -> Result<(), ConfigError> {
        let naming = &self.naming;
        if naming.property_prefix.is_empty() || naming.alias_prefix.is_empty() {
            return Err(ConfigError::InvalidNaming(
                "identifier prefixes must not be empty".to_string(),
            ));
        }
        if naming.property_prefix == naming.alias_prefix {
            return Err(ConfigError::InvalidNaming(format!(
                "property and alias prefixes are both '{}'",
                naming.property_prefix
            )));
        }
        if naming.internal_prefix.is_empty() {
            return Err(ConfigError::InvalidNaming(
                "internal prefix must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

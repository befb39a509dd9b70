//! Configuration schema types for `spritegrid.toml`
//!
//! Every section and field is optional; missing values fall back to the
//! built-in defaults.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::encode::DEFAULT_DESCRIPTION;

/// Encode settings
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EncodeConfig {
    /// Description written into documents when `-d` isn't given
    #[serde(default)]
    pub description: Option<String>,
}

/// Split settings
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SplitConfig {
    /// Directory for tile files; tiles go beside the source when unset
    #[serde(default)]
    pub out_dir: Option<PathBuf>,
}

/// Complete spritegrid.toml configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SpritegridConfig {
    #[serde(default)]
    pub encode: EncodeConfig,
    #[serde(default)]
    pub split: SplitConfig,
}

/// Configuration validation error
#[derive(Debug, Clone)]
pub struct ConfigValidationError {
    /// Path to the invalid field (e.g., "encode.description")
    pub field: String,
    /// Error message
    pub message: String,
}

impl std::fmt::Display for ConfigValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "spritegrid.toml: '{}' {}", self.field, self.message)
    }
}

/// Config section a command reads
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigSection {
    Encode,
    Split,
}

/// Whether a description is empty or whitespace only.
///
/// Applies to both `[encode] description` and the `-d` flag.
pub fn is_blank_description(description: &str) -> bool {
    description.trim().is_empty()
}

impl SpritegridConfig {
    /// Validate one section and return any errors
    ///
    /// Commands only check the section they read, so a bad `[encode]` table
    /// doesn't stop a split.
    pub fn validate_section(&self, section: ConfigSection) -> Vec<ConfigValidationError> {
        match section {
            ConfigSection::Encode => self.validate_encode(),
            ConfigSection::Split => self.validate_split(),
        }
    }

    fn validate_encode(&self) -> Vec<ConfigValidationError> {
        let mut errors = Vec::new();

        if let Some(ref description) = self.encode.description {
            if is_blank_description(description) {
                errors.push(ConfigValidationError {
                    field: "encode.description".to_string(),
                    message: "must be a non-empty string".to_string(),
                });
            }
        }

        errors
    }

    fn validate_split(&self) -> Vec<ConfigValidationError> {
        let mut errors = Vec::new();

        if let Some(ref out_dir) = self.split.out_dir {
            if out_dir.as_os_str().is_empty() {
                errors.push(ConfigValidationError {
                    field: "split.out_dir".to_string(),
                    message: "must be a non-empty path".to_string(),
                });
            }
        }

        errors
    }

    /// Description to use for encoded documents
    pub fn description(&self) -> &str {
        self.encode.description.as_deref().unwrap_or(DEFAULT_DESCRIPTION)
    }

    /// Output directory for tiles, if one is configured
    pub fn out_dir(&self) -> Option<&std::path::Path> {
        self.split.out_dir.as_deref()
    }
}

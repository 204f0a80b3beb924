//! Settings file

use crate::error::{ConvertError, Result};
use crate::formats::Format;
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Defaults for a conversion run, read from a TOML file
///
/// ```toml
/// input-format = "tsv"
/// output-format = "conllx"
/// input-charset = "latin1"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct Settings {
    pub input_format: Option<Format>,
    pub output_format: Option<Format>,
    pub input_charset: Option<String>,
    pub output_charset: Option<String>,
}

impl Settings {
    /// Load settings from the given file
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path).map_err(|e| {
            ConvertError::Config(format!("Cannot read {}: {}", path.display(), e))
        })?;

        log::debug!("Loaded settings from {}", path.display());
        toml::from_str(&contents).map_err(|e| {
            ConvertError::Config(format!("Failed to parse {}: {}", path.display(), e))
        })
    }
}

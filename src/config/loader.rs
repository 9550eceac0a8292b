//! Reading and parsing config files.

use super::{Document, value_kind};
use crate::error::{InjectError, Result};
use clap::ValueEnum;
use serde_json::Value;
use std::path::Path;

/// Syntax of a config file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ConfigFormat {
    Json,
    Yaml,
}

impl ConfigFormat {
    /// Pick a format from the file extension.
    ///
    /// `.yaml` and `.yml` (any case) are YAML; everything else is JSON.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml") => {
                Self::Yaml
            }
            _ => Self::Json,
        }
    }
}

/// Load a config document from disk.
///
/// # Arguments
///
/// * `path` - Path to the config file
/// * `format` - Forced syntax; `None` detects it from the extension
///
/// # Returns
///
/// * `Ok(Document)` - The top-level object, keys in file order
/// * `Err(InjectError::ConfigRead)` - The file could not be read
/// * `Err(InjectError::ConfigParse)` - The contents are not valid JSON/YAML
/// * `Err(InjectError::NotADocument)` - The top level is not an object
pub fn load_document(path: &Path, format: Option<ConfigFormat>) -> Result<Document> {
    let format = format.unwrap_or_else(|| ConfigFormat::from_path(path));

    let content = std::fs::read_to_string(path).map_err(|source| InjectError::ConfigRead {
        path: path.to_path_buf(),
        source,
    })?;

    let doc = parse_document(&content, format)?;
    tracing::info!(
        path = %path.display(),
        ?format,
        keys = doc.len(),
        "loaded config"
    );
    Ok(doc)
}

/// Parse config text into a document.
pub fn parse_document(text: &str, format: ConfigFormat) -> Result<Document> {
    let value: Value = match format {
        ConfigFormat::Json => serde_json::from_str(text)
            .map_err(|e| InjectError::ConfigParse(format!("invalid JSON: {}", e)))?,
        ConfigFormat::Yaml => serde_yaml::from_str(text)
            .map_err(|e| InjectError::ConfigParse(format!("invalid YAML: {}", e)))?,
    };

    match value {
        Value::Object(doc) => Ok(doc),
        other => Err(InjectError::NotADocument(value_kind(&other))),
    }
}

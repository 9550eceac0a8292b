//! Config document model and loading.
//!
//! A config document is an insertion-ordered JSON object. YAML files are
//! accepted too and are read into the same shape, so the flattener only ever
//! sees one document type.

mod loader;


use serde_json::{Map, Value};

pub use loader::{ConfigFormat, load_document, parse_document};

/// Default config location, relative to the working directory.
pub const DEFAULT_CONFIG_PATH: &str = "config.json";

/// An ordered key/value config document.
pub type Document = Map<String, Value>;

/// Human-readable name of a value's kind, used in error messages.
pub fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

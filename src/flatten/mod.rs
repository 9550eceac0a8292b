//! Flattening of a nested config document into `-D` flag entries.
//!
//! Keys are visited in document order at every level and joined root-to-leaf
//! with `_`. Leaf values are encoded by kind:
//! - empty string: bare flag (`-DNAME`)
//! - string starting with a backtick: raw token, regex-escaped, unquoted
//! - other string: `\"value\"`
//! - boolean: `true` / `false`
//! - number: its text exactly as written in the file
//!
//! Arrays and null have no encoding and are rejected.

mod encode;


use crate::config::{Document, value_kind};
use crate::error::{InjectError, Result};
use crate::flags::FlagEntry;
use serde_json::Value;

/// Flatten `doc` into an ordered list of flag entries.
///
/// `prefix` is prepended (with a `_` separator) to every name; pass `""` for
/// the document root. The document is only read.
pub fn flatten(doc: &Document, prefix: &str) -> Result<Vec<FlagEntry>> {
    let mut entries = Vec::new();
    flatten_into(doc, prefix, &mut entries)?;
    Ok(entries)
}

fn flatten_into(doc: &Document, prefix: &str, out: &mut Vec<FlagEntry>) -> Result<()> {
    let separator = if prefix.is_empty() {
        String::new()
    } else {
        format!("{}_", prefix)
    };

    for (key, value) in doc {
        let name = format!("{}{}", separator, key);

        let entry = match value {
            Value::Object(nested) => {
                flatten_into(nested, &name, out)?;
                continue;
            }
            Value::String(s) if s.is_empty() => FlagEntry::bare(name),
            Value::String(s) if encode::is_raw_token(s) => {
                FlagEntry::define(name, encode::encode_raw(s))
            }
            Value::String(s) => FlagEntry::define(name, encode::encode_quoted(s)),
            Value::Bool(b) => FlagEntry::define(name, encode::encode_bool(*b)),
            Value::Number(n) => FlagEntry::define(name, n.to_string()),
            Value::Array(_) | Value::Null => {
                return Err(InjectError::UnsupportedValue {
                    name,
                    kind: value_kind(value),
                });
            }
        };

        tracing::debug!(name = entry.name(), value = ?entry.value(), "flattened");
        out.push(entry);
    }

    Ok(())
}

//! Flag entries and the `-D` line emitter.
//!
//! A flattened config is a list of [`FlagEntry`] values. Each renders to a
//! single toolchain token; the whole list renders to one space-joined line.

use std::fmt;

/// One compile-time definition produced by flattening.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FlagEntry {
    /// A definition with no value (`-DNAME`).
    Bare(String),
    /// A definition with an already-encoded value (`-DNAME=VALUE`).
    Define { name: String, value: String },
}

impl FlagEntry {
    pub fn bare(name: impl Into<String>) -> Self {
        Self::Bare(name.into())
    }

    pub fn define(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self::Define {
            name: name.into(),
            value: value.into(),
        }
    }

    /// The flag name, without `-D`.
    pub fn name(&self) -> &str {
        match self {
            Self::Bare(name) => name,
            Self::Define { name, .. } => name,
        }
    }

    /// The encoded value, if this is not a bare flag.
    pub fn value(&self) -> Option<&str> {
        match self {
            Self::Bare(_) => None,
            Self::Define { value, .. } => Some(value),
        }
    }
}

impl fmt::Display for FlagEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bare(name) => write!(f, "-D{}", name),
            Self::Define { name, value } => write!(f, "-D{}={}", name, value),
        }
    }
}

/// Render entries as one space-separated line.
///
/// Returns `None` when there is nothing to emit, so callers print no line at
/// all rather than an empty one.
pub fn render_line(entries: &[FlagEntry]) -> Option<String> {
    if entries.is_empty() {
        return None;
    }

    let tokens: Vec<String> = entries.iter().map(ToString::to_string).collect();
    Some(tokens.join(" "))
}

//! Error types for the inject-config CLI.
//!
//! Uses thiserror for derive macros. The flattening core itself never fails on
//! the value kinds it knows how to encode; everything here comes from loading
//! the document or from value kinds that have no flag encoding.

use crate::exit_codes;
use std::path::PathBuf;
use thiserror::Error;

/// Main error type for inject-config operations.
#[derive(Error, Debug)]
pub enum InjectError {
    /// The config file could not be read from disk.
    #[error("failed to read config file '{}': {source}", .path.display())]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The config file was read but is not valid JSON/YAML.
    #[error("failed to parse config: {0}")]
    ConfigParse(String),

    /// The top level of the config is not a key/value mapping.
    #[error("config root must be an object, found {0}")]
    NotADocument(&'static str),

    /// A value has no flag encoding (arrays and null).
    #[error("unsupported {kind} value for '{name}': only objects, strings, booleans and numbers can be flattened")]
    UnsupportedValue { name: String, kind: &'static str },
}

impl InjectError {
    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            InjectError::ConfigRead { .. } => exit_codes::USER_ERROR,
            InjectError::ConfigParse(_) => exit_codes::CONFIG_FAILURE,
            InjectError::NotADocument(_) => exit_codes::CONFIG_FAILURE,
            InjectError::UnsupportedValue { .. } => exit_codes::CONFIG_FAILURE,
        }
    }
}

/// Result type alias for inject-config operations.
pub type Result<T> = std::result::Result<T, InjectError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn read_error_has_user_exit_code() {
        let err = InjectError::ConfigRead {
            path: PathBuf::from("config.json"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
        };
        assert_eq!(err.exit_code(), exit_codes::USER_ERROR);
    }

    #[test]
    fn config_errors_have_config_exit_code() {
        assert_eq!(
            InjectError::ConfigParse("bad".to_string()).exit_code(),
            exit_codes::CONFIG_FAILURE
        );
        assert_eq!(
            InjectError::NotADocument("array").exit_code(),
            exit_codes::CONFIG_FAILURE
        );
        let err = InjectError::UnsupportedValue {
            name: "PINS".to_string(),
            kind: "array",
        };
        assert_eq!(err.exit_code(), exit_codes::CONFIG_FAILURE);
    }

    #[test]
    fn error_messages_are_descriptive() {
        let err = InjectError::ConfigRead {
            path: PathBuf::from("missing.json"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "no such file"),
        };
        assert_eq!(
            err.to_string(),
            "failed to read config file 'missing.json': no such file"
        );

        let err = InjectError::NotADocument("string");
        assert_eq!(err.to_string(), "config root must be an object, found string");

        let err = InjectError::UnsupportedValue {
            name: "LED_PINS".to_string(),
            kind: "array",
        };
        assert!(err.to_string().starts_with("unsupported array value for 'LED_PINS'"));
    }
}

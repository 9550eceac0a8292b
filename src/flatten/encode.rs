//! Per-kind value encoding for flag values.

use regex::Regex;
use std::sync::LazyLock;

/// Marks a string value as a raw token that is emitted without quotes.
const RAW_MARKER: char = '`';

/// Characters with meaning to a regular-expression engine.
static REGEX_META: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[.^$*+?{}\[\]\\|()]").expect("Invalid regex metacharacter class")
});

/// Returns true if the value starts with the raw-token marker.
pub fn is_raw_token(value: &str) -> bool {
    value.starts_with(RAW_MARKER)
}

/// Encode a raw token: drop the first and last character, then escape the
/// interior so it can be dropped into the flag unquoted.
pub fn encode_raw(value: &str) -> String {
    let mut chars = value.chars();
    chars.next();
    chars.next_back();
    escape_regex(chars.as_str())
}

/// Backslash-escape every regex metacharacter in `text`.
pub fn escape_regex(text: &str) -> String {
    REGEX_META.replace_all(text, r"\$0").into_owned()
}

/// Wrap a plain string in escaped double quotes (`\"value\"`).
pub fn encode_quoted(value: &str) -> String {
    format!(r#"\"{}\""#, value)
}

/// Lowercase boolean literal.
pub fn encode_bool(value: bool) -> String {
    value.to_string()
}

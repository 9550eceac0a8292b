//! Exit code constants for the inject-config CLI.
//!
//! - 0: Success (including "no flags to print")
//! - 1: User error (config file missing or unreadable)
//! - 2: Config failure (syntax error, bad root, unsupported value)

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// User error: the config file could not be read.
pub const USER_ERROR: i32 = 1;

/// Config failure: the file was read but cannot be turned into flags.
pub const CONFIG_FAILURE: i32 = 2;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exit_codes_are_distinct() {
        let codes = [SUCCESS, USER_ERROR, CONFIG_FAILURE];
        for (i, &a) in codes.iter().enumerate() {
            for (j, &b) in codes.iter().enumerate() {
                if i != j {
                    assert_ne!(a, b, "Exit codes must be distinct");
                }
            }
        }
    }

    #[test]
    fn exit_codes_have_expected_values() {
        assert_eq!(SUCCESS, 0);
        assert_eq!(USER_ERROR, 1);
        assert_eq!(CONFIG_FAILURE, 2);
    }
}

//! Custom validation functions for configuration.

use lazy_static::lazy_static;
use regex::Regex;
use validator::ValidationError;

lazy_static! {
    static ref LOGGER_NAME: Regex = Regex::new(r"^[A-Za-z0-9_:.\-]+$").expect("static regex");
}

/// Validate that a logger name only uses target-style characters (`a::b.c-d`).
pub fn validate_logger_name(name: &str) -> Result<(), ValidationError> {
    if LOGGER_NAME.is_match(name) {
        Ok(())
    } else {
        Err(ValidationError::new("invalid_logger_name"))
    }
}

/// Validate a `tracing` level name.
pub fn validate_log_level(level: &str) -> Result<(), ValidationError> {
    let valid = ["trace", "debug", "info", "warn", "error"]
        .contains(&level.to_lowercase().as_str());
    if valid {
        Ok(())
    } else {
        Err(ValidationError::new("invalid_log_level"))
    }
}

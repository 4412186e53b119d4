//! Traffic logger configuration.

use serde::{Deserialize, Serialize};
use validator::{self, Validate};

use crate::validation;

#[derive(Debug, Serialize, Deserialize, Validate, Clone)]
pub struct LoggerConfig {
    /// Name attached to every traffic record, e.g. `edge::proxy`.
    #[serde(default = "default_name")]
    #[validate(length(min = 1, max = 128))]
    #[validate(custom(function = validation::validate_logger_name))]
    pub name: String,
}

fn default_name() -> String {
    "wiretap::traffic".into()
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            name: default_name(),
        }
    }
}

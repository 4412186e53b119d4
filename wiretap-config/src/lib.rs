//! # Wiretap Configuration
//!
//! Layered configuration for the traffic logger and its telemetry.
//!
//! ## Features
//! - **Layering**: defaults, then YAML files, then `WIRETAP_*` environment variables
//! - **Validation**: every loaded value is checked before it is handed out
//!
//! Traffic records are always emitted at WARN; nothing here changes that.

#![warn(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use std::path::Path;

use figment::{
    providers::{Env, Format, Serialized, Yaml},
    Figment,
};
use serde::{Deserialize, Serialize};
use validator::Validate;

mod error;
mod logger;
mod telemetry;
mod validation;

pub use error::ConfigError;
pub use logger::LoggerConfig;
pub use telemetry::{LogFormat, TelemetryConfig};

const BASE_FILE: &str = "config/wiretap.yaml";
const ENV_PREFIX: &str = "WIRETAP_";

/// Top‑level configuration container.
#[derive(Debug, Serialize, Deserialize, Validate, Default, Clone)]
pub struct WiretapConfig {
    /// Traffic logger settings.
    #[serde(default)]
    #[validate(nested)]
    pub logger: LoggerConfig,

    /// Subscriber settings for the process.
    #[serde(default)]
    #[validate(nested)]
    pub telemetry: TelemetryConfig,
}

impl WiretapConfig {
    /// Load configuration from default files and environment.
    ///
    /// Hierarchy:
    /// 1. Default values
    /// 2. `config/wiretap.yaml`, when present
    /// 3. `config/<WIRETAP_ENV>.yaml`, when present (`WIRETAP_ENV` defaults to `production`)
    /// 4. `WIRETAP_*` environment variables, `__` separating nested keys
    pub fn load() -> Result<Self, ConfigError> {
        let mut figment = Figment::from(Serialized::defaults(WiretapConfig::default()));

        if Path::new(BASE_FILE).exists() {
            figment = figment.merge(Yaml::file(BASE_FILE));
        }

        let env = std::env::var("WIRETAP_ENV").unwrap_or_else(|_| "production".into());
        let env_file = format!("config/{}.yaml", env);
        if Path::new(&env_file).exists() {
            figment = figment.merge(Yaml::file(env_file));
        }

        Self::extract(figment.merge(Env::prefixed(ENV_PREFIX).split("__")))
    }

    /// Load configuration from a specific file, still honouring environment overrides.
    pub fn load_from_path<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(ConfigError::FileNotFound(path.to_path_buf()));
        }

        Self::extract(
            Figment::from(Serialized::defaults(WiretapConfig::default()))
                .merge(Yaml::file(path))
                .merge(Env::prefixed(ENV_PREFIX).split("__")),
        )
    }

    fn extract(figment: Figment) -> Result<Self, ConfigError> {
        let config: Self = figment.extract()?;
        config.validate()?;
        Ok(config)
    }
}

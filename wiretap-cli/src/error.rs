use thiserror::Error;
use wiretap_config::ConfigError;
use wiretap_core::PipelineError;
use wiretap_hexdump::DumpError;
use wiretap_telemetry::MetricsError;

use crate::scenario::ScenarioError;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Scenario(#[from] ScenarioError),

    #[error("cannot dump input: {0}")]
    Dump(#[from] DumpError),

    #[error(transparent)]
    Pipeline(#[from] PipelineError),

    #[error(transparent)]
    Metrics(#[from] MetricsError),
}

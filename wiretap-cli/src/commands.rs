use std::path::{Path, PathBuf};
use std::sync::Arc;

use bytes::Bytes;
use clap::{Args, Parser, Subcommand};
use tokio::io::AsyncReadExt;
use wiretap_config::WiretapConfig;
use wiretap_core::{ChannelId, LogSink, Pipeline, TracingSink, TrafficLogger};
use wiretap_hexdump::{render_view, ByteView};
use wiretap_telemetry::{MeteredHandler, MeteredSink, MetricsRecorder};

use crate::error::CliError;
use crate::scenario::Scenario;

#[derive(Parser)]
#[command(version, about)]
pub struct Cli {
    /// Configuration file to use instead of `config/wiretap.yaml`
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print a hex dump of a file, or of stdin with `-`
    Dump(DumpArgs),
    /// Feed a YAML scenario of channel events through the traffic logger
    Replay(ReplayArgs),
}

#[derive(Args, Debug, Clone)]
pub struct DumpArgs {
    pub input: PathBuf,
    /// Label printed in front of the dump
    #[arg(short, long, default_value = "RECEIVED")]
    pub label: String,
    /// Bytes to skip before the dumped range
    #[arg(long, default_value_t = 0)]
    pub skip: usize,
    /// Number of bytes to dump (default: up to the end)
    #[arg(long)]
    pub length: Option<usize>,
}

#[derive(Args, Debug, Clone)]
pub struct ReplayArgs {
    pub scenario: PathBuf,
    /// Print Prometheus metrics after the replay
    #[arg(long)]
    pub metrics: bool,
}

pub async fn run_dump(args: DumpArgs) -> Result<(), CliError> {
    let bytes = read_input(&args.input).await?;
    let dump = dump_bytes(bytes, &args.label, args.skip, args.length)?;
    println!("{dump}");
    Ok(())
}

pub async fn run_replay(args: ReplayArgs, config: &WiretapConfig) -> Result<(), CliError> {
    let source = tokio::fs::read_to_string(&args.scenario).await?;
    let metrics = MetricsRecorder::new()?;
    let fired = replay(&source, config, Arc::new(TracingSink), &metrics)?;
    tracing::info!(
        scenario = %args.scenario.display(),
        events = fired,
        "replay finished"
    );

    if args.metrics {
        print!("{}", metrics.gather_metrics()?);
    }
    Ok(())
}

/// Runs every scenario event through a fresh pipeline and returns how many were fired.
pub fn replay(
    source: &str,
    config: &WiretapConfig,
    sink: Arc<dyn LogSink>,
    metrics: &MetricsRecorder,
) -> Result<usize, CliError> {
    let scenario = Scenario::from_yaml(source)?;
    let pipeline = build_pipeline(scenario.channel.channel_id(), config, sink, metrics)?;
    let events = scenario.into_events()?;
    let fired = events.len();

    for event in events {
        if let Some(reached) = pipeline.fire(event) {
            tracing::trace!(direction = ?reached.direction(), "event left the pipeline");
        }
    }
    Ok(fired)
}

pub fn build_pipeline(
    channel: ChannelId,
    config: &WiretapConfig,
    sink: Arc<dyn LogSink>,
    metrics: &MetricsRecorder,
) -> Result<Pipeline, CliError> {
    let logger = TrafficLogger::builder()
        .name(config.logger.name.clone())
        .sink(Arc::new(MeteredSink::new(sink, metrics.clone())))
        .build();

    let mut pipeline = Pipeline::new(channel);
    let handler = Arc::new(MeteredHandler::new(logger, metrics.clone()));
    pipeline.add_last("logger", handler)?;
    Ok(pipeline)
}

pub fn dump_bytes(
    bytes: Bytes,
    label: &str,
    skip: usize,
    length: Option<usize>,
) -> Result<String, CliError> {
    let end = match length {
        Some(length) => skip.saturating_add(length),
        None => bytes.len().max(skip),
    };
    let view = ByteView::with_indices(bytes, skip, end);
    Ok(render_view(label, &view)?)
}

async fn read_input(path: &Path) -> Result<Bytes, CliError> {
    if path == Path::new("-") {
        let mut buf = Vec::new();
        tokio::io::stdin().read_to_end(&mut buf).await?;
        return Ok(Bytes::from(buf));
    }
    Ok(Bytes::from(tokio::fs::read(path).await?))
}

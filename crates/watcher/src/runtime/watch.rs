//! Watch — pump the line source through the record filter to the sink.

use std::sync::Arc;
use std::time::Duration;

use thiserror::Error;
use tokio_stream::StreamExt;
use tracing::info;

use crate::conf::WatchConfig;
use crate::filter::engine::DisplayFilter;
use crate::filter::FilterError;
use crate::parser::level::LevelLocalizer;
use crate::parser::metrics::ParserMetrics;
use crate::parser::select::{self, FilterKind};
use crate::parser::traits::LogFilter;
use crate::sink::{DisplaySink, StdoutSink};
use crate::source::{self, LineStream, SourceError};

#[derive(Debug, Error)]
pub enum WatchError {
    #[error("Invalid display filter: {0}")]
    Filter(#[from] FilterError),

    #[error("Log source failed: {0}")]
    Source(#[from] SourceError),

    #[error("Display sink failed: {0}")]
    Sink(#[from] std::io::Error),
}

/// Assemble the pipeline described by `config` and run it until the
/// source ends or fails.
pub async fn run(config: WatchConfig) -> Result<(), WatchError> {
    let metrics = Arc::new(ParserMetrics::new());

    let version = (!config.server_version.is_empty()).then_some(config.server_version.as_str());
    let kind = FilterKind::for_version(version);
    info!(?kind, version = %config.server_version, "selected record filter");

    let mut filter = select::create_filter(
        kind,
        LevelLocalizer::new(&config.locale),
        config.display.formatter(),
        &config.delimiter,
        Arc::clone(&metrics),
    );

    let display = match &config.filter_pattern {
        Some(pattern) => Some(DisplayFilter::new(
            pattern,
            config.filter_case_sensitive,
            config.filter_mode,
        )?),
        None => None,
    };

    let lines = source::tail_file(
        config.log_file.clone().into(),
        config.from_start,
        Duration::from_millis(config.poll_interval_ms),
    );
    let mut sink = StdoutSink::new();

    pump(lines, filter.as_mut(), display.as_ref(), &mut sink, &metrics).await
}

/// Drive `lines` through the filter chain into the sink. Factored out of
/// `run` so any source/sink combination can be exercised directly.
pub async fn pump(
    mut lines: LineStream,
    filter: &mut dyn LogFilter,
    display: Option<&DisplayFilter>,
    sink: &mut dyn DisplaySink,
    metrics: &ParserMetrics,
) -> Result<(), WatchError> {
    while let Some(line) = lines.next().await {
        let line = line?;
        for unit in filter.process(&line) {
            if let Some(display) = display {
                if !display.should_display(&unit) {
                    continue;
                }
            }
            sink.display(&unit)?;
        }
    }

    let snapshot = metrics.snapshot();
    info!(
        records = snapshot.records,
        passthrough = snapshot.passthrough,
        malformed = snapshot.malformed,
        "log stream ended"
    );
    Ok(())
}

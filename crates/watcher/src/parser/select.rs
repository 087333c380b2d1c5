//! Select — choose the record grammar for a server release.

use std::sync::Arc;

use super::formats::{BracketLogFilter, UniformLogFilter};
use super::level::LevelLocalizer;
use super::metrics::ParserMetrics;
use super::traits::{LogFilter, RecordFormatter};

/// The two interchangeable parsing strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterKind {
    /// One-block-per-record bracket grammar.
    Bracket,
    /// Character-oriented `[#|…|#]` uniform stream.
    Uniform,
}

impl FilterKind {
    /// Map a reported server version to the grammar its `server.log` uses.
    ///
    /// Only a major version of exactly 4 selects the bracket grammar;
    /// 3.x, 5.x and later, absent and unparseable versions all fall
    /// through to the uniform state machine. Deployed consumers depend on
    /// this exact mapping — do not widen the bracket branch without
    /// product confirmation.
    pub fn for_version(version: Option<&str>) -> Self {
        match version.and_then(major_version) {
            Some(4) => FilterKind::Bracket,
            _ => FilterKind::Uniform,
        }
    }
}

fn major_version(version: &str) -> Option<u64> {
    version.trim().split(['.', '-', '_']).next()?.parse().ok()
}

/// Assemble the filter for `kind`. The delimiter only matters to the
/// bracket variant; the uniform stream carries its own record markers.
pub fn create_filter(
    kind: FilterKind,
    localizer: LevelLocalizer,
    formatter: Box<dyn RecordFormatter>,
    delimiter: &str,
    metrics: Arc<ParserMetrics>,
) -> Box<dyn LogFilter> {
    match kind {
        FilterKind::Bracket => Box::new(BracketLogFilter::new(
            localizer,
            formatter,
            delimiter.to_string(),
            metrics,
        )),
        FilterKind::Uniform => Box::new(UniformLogFilter::new(localizer, formatter, metrics)),
    }
}

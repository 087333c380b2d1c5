use std::sync::atomic::{AtomicU64, Ordering};

use grep_matcher::Matcher;
use grep_regex::{RegexMatcher, RegexMatcherBuilder};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum FilterError {
    #[error("Invalid filter pattern: {0}")]
    InvalidPattern(String),
}

/// Whether a matching unit is kept or dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchMode {
    Include,
    Exclude,
}

#[derive(Debug, Default)]
struct FilterStats {
    units_scanned: AtomicU64,
    units_displayed: AtomicU64,
}

/// Operator-supplied regex applied to completed display units before they
/// reach the sink. A unit may span several lines (multi-line messages,
/// embedded stack traces), so the matcher runs in multi-line mode and a
/// hit anywhere inside the unit counts.
pub struct DisplayFilter {
    matcher: RegexMatcher,
    mode: MatchMode,
    stats: FilterStats,
}

impl DisplayFilter {
    pub fn new(pattern: &str, case_sensitive: bool, mode: MatchMode) -> Result<Self, FilterError> {
        let matcher = RegexMatcherBuilder::new()
            .case_insensitive(!case_sensitive)
            .multi_line(true)
            .build(pattern)
            .map_err(|e| FilterError::InvalidPattern(e.to_string()))?;

        Ok(Self {
            matcher,
            mode,
            stats: FilterStats::default(),
        })
    }

    #[inline]
    pub fn should_display(&self, unit: &str) -> bool {
        self.stats.units_scanned.fetch_add(1, Ordering::Relaxed);

        let matched = self.matcher.is_match(unit.as_bytes()).unwrap_or(false);

        let display = match self.mode {
            MatchMode::Include => matched,
            MatchMode::Exclude => !matched,
        };

        if display {
            self.stats.units_displayed.fetch_add(1, Ordering::Relaxed);
        }

        display
    }

    /// (scanned, displayed)
    pub fn stats(&self) -> (u64, u64) {
        (
            self.stats.units_scanned.load(Ordering::Relaxed),
            self.stats.units_displayed.load(Ordering::Relaxed),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_include_mode() {
        let filter = DisplayFilter::new("deploy", false, MatchMode::Include)
            .expect("Failed to create filter");

        assert!(filter.should_display("2024-01-01 [Info] deploy finished"));
        assert!(!filter.should_display("2024-01-01 [Info] health check"));
        assert!(filter.should_display("DEPLOY started"));
    }

    #[test]
    fn test_exclude_mode() {
        let filter = DisplayFilter::new("health", true, MatchMode::Exclude)
            .expect("Failed to create filter");

        assert!(!filter.should_display("health probe ok"));
        assert!(filter.should_display("request served"));
    }

    #[test]
    fn test_case_sensitive() {
        let filter = DisplayFilter::new("Severe", true, MatchMode::Include)
            .expect("Failed to create filter");

        assert!(filter.should_display("t [Severe] boom"));
        assert!(!filter.should_display("t [severe] boom"));
        assert!(!filter.should_display("t [SEVERE] boom"));
    }

    #[test]
    fn test_multiline_unit_matches_inner_line() {
        let filter = DisplayFilter::new("^caused by", false, MatchMode::Include)
            .expect("Failed to create filter");

        let unit = "t [Severe] boom\nCaused by: java.io.IOException";
        assert!(filter.should_display(unit));
        assert!(!filter.should_display("t [Info] all fine"));
    }

    #[test]
    fn test_invalid_pattern() {
        let result = DisplayFilter::new("[invalid", true, MatchMode::Include);
        assert!(result.is_err());
    }

    #[test]
    fn test_stats_tracking() {
        let filter = DisplayFilter::new("keep", false, MatchMode::Include)
            .expect("Failed to create filter");

        filter.should_display("keep this");
        filter.should_display("drop this");
        filter.should_display("keep that too");

        let (scanned, displayed) = filter.stats();
        assert_eq!(scanned, 3);
        assert_eq!(displayed, 2);
    }
}

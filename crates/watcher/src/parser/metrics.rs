use std::sync::atomic::{AtomicU64, Ordering};

/// Counters for one watch pipeline.
///
/// All operations use `Ordering::Relaxed` — these are observability
/// counters, eventual consistency is enough. Shared with the filters via
/// `Arc` and reported when the stream ends.
#[derive(Debug, Default)]
pub struct ParserMetrics {
    records: AtomicU64,
    passthrough: AtomicU64,
    malformed: AtomicU64,
}

impl ParserMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    /// One completed record handed to the formatter.
    #[inline]
    pub fn record_emitted(&self) {
        self.records.fetch_add(1, Ordering::Relaxed);
    }

    /// One free-text unit forwarded untouched.
    #[inline]
    pub fn passthrough_emitted(&self) {
        self.passthrough.fetch_add(1, Ordering::Relaxed);
    }

    /// One buffered block that failed to match its grammar.
    #[inline]
    pub fn malformed_block(&self) {
        self.malformed.fetch_add(1, Ordering::Relaxed);
    }

    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            records: self.records.load(Ordering::Relaxed),
            passthrough: self.passthrough.load(Ordering::Relaxed),
            malformed: self.malformed.load(Ordering::Relaxed),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MetricsSnapshot {
    pub records: u64,
    pub passthrough: u64,
    pub malformed: u64,
}

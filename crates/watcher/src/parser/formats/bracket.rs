//! Bracket — line-oriented filter for the one-block-per-record grammar.
//!
//! 4.x servers write each record as a run of bracketed fields closed by a
//! doubled-bracket message:
//!
//! ```text
//! [<timestamp>] [<server>] [<level>] [<key>] [<logger>] [<thread>] [<millis>] [<value>] [[<message>]]
//! ```
//!
//! Lines accumulate until the configured delimiter line arrives (empty by
//! default), then the whole block is matched at once with `.` spanning
//! newlines so multi-line messages survive. Blocks that fail to match are
//! logged and dropped; the stream keeps flowing.

use std::sync::{Arc, OnceLock};

use regex::Regex;
use tracing::warn;

use crate::parser::level::LevelLocalizer;
use crate::parser::metrics::ParserMetrics;
use crate::parser::record::{assign, LogRecord};
use crate::parser::traits::{LogFilter, RecordFormatter};
use crate::parser::MAX_BUFFER_BYTES;

// Nine capture groups: eight single-bracket fields and the doubled-bracket
// message. Group 2 feeds `version` and group 3 `level` — the mapping the
// published output has always used; groups 4, 7 and 8 are matched but
// unused.
const RECORD_PATTERN: &str = r"(?s)\[([^\]]*)\] \[([^\]]*)\] \[([^\]]*)\] \[([^\]]*)\] \[([^\]]*)\] \[([^\]]*)\] \[([^\]]*)\] \[([^\]]*)\] \[\[(.*)\]\]\s*";

fn record_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(RECORD_PATTERN).unwrap())
}

pub struct BracketLogFilter {
    buffer: String,
    delimiter: String,
    record: LogRecord,
    localizer: LevelLocalizer,
    formatter: Box<dyn RecordFormatter>,
    metrics: Arc<ParserMetrics>,
}

impl BracketLogFilter {
    pub fn new(
        localizer: LevelLocalizer,
        formatter: Box<dyn RecordFormatter>,
        delimiter: String,
        metrics: Arc<ParserMetrics>,
    ) -> Self {
        Self {
            buffer: String::new(),
            delimiter,
            record: LogRecord::new(),
            localizer,
            formatter,
            metrics,
        }
    }

    /// Match the accumulated block and, on success, format the record and
    /// clear both the block buffer and the record.
    fn try_match(&mut self) -> Option<String> {
        let caps = record_pattern().captures(&self.buffer)?;
        assign(&mut self.record.time, &caps[1]);
        assign(&mut self.record.version, &caps[2]);
        let label = self.localizer.resolve(&caps[3]);
        assign(&mut self.record.level, label);
        assign(&mut self.record.class_info, &caps[5]);
        assign(&mut self.record.thread_info, &caps[6]);
        assign(&mut self.record.message, caps[9].trim());

        let formatted = self.formatter.format(&self.record);
        self.metrics.record_emitted();
        self.record.clear();
        self.buffer.clear();
        Some(formatted)
    }
}

impl LogFilter for BracketLogFilter {
    fn process(&mut self, line: &str) -> Vec<String> {
        if line == self.delimiter {
            if let Some(formatted) = self.try_match() {
                return vec![formatted];
            }
            // The buffer is kept: a block that has not reached its closing
            // `]]` is still accumulating, and anything else is absorbed by
            // the next successful match or an external reset.
            if !self.in_message() {
                self.metrics.malformed_block();
                warn!("log record does not match the expected format");
            }
            Vec::new()
        } else {
            if self.buffer.len() + line.len() >= MAX_BUFFER_BYTES {
                warn!("block buffer exceeded size cap, discarding");
                self.buffer.clear();
            }
            self.buffer.push_str(line);
            self.buffer.push('\n');
            Vec::new()
        }
    }

    fn reset(&mut self) {
        self.buffer.clear();
        self.record.clear();
    }

    fn in_message(&self) -> bool {
        !self.buffer.trim_end().ends_with("]]")
    }
}

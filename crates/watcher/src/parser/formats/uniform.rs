//! Uniform — character-oriented filter for the `[#|…|#]` record stream.
//!
//! The uniform log format interleaves structured records with free text:
//! startup banners, stack traces and anything an application prints
//! straight to stdout land on the same stream as
//! `[#|time|level|version|logger|thread|message|#]` records, and the
//! message field may itself span lines. The filter therefore walks the
//! stream one character at a time: free text is passed through at newline
//! boundaries, a `[#|` opener switches to field accumulation, and any
//! sequence that stops looking like a record is re-absorbed as literal
//! text. Malformed input degrades to pass-through instead of failing.

use std::mem;
use std::sync::Arc;

use tracing::warn;

use crate::parser::level::LevelLocalizer;
use crate::parser::metrics::ParserMetrics;
use crate::parser::record::{assign, LogRecord};
use crate::parser::traits::{LogFilter, RecordFormatter};
use crate::parser::MAX_BUFFER_BYTES;

/// Machine position within one record. Exactly one state is active; the
/// shared accumulation buffer holds only the current field (or, outside a
/// record, pending free text) and is cleared on field boundaries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    /// Outside any record, accumulating free text.
    AwaitOpen,
    /// Saw `[`, expecting `#`.
    AwaitHash,
    /// Saw `[#`, expecting the first `|`.
    AwaitPipe,
    Time,
    Level,
    Version,
    ClassInfo,
    ThreadInfo,
    Message,
    /// Saw `|` inside the message, expecting `#`.
    AwaitCloseHash,
    /// Saw `|#` inside the message, expecting `]`.
    AwaitCloseBracket,
}

pub struct UniformLogFilter {
    state: State,
    buffer: String,
    record: LogRecord,
    localizer: LevelLocalizer,
    formatter: Box<dyn RecordFormatter>,
    metrics: Arc<ParserMetrics>,
}

impl UniformLogFilter {
    pub fn new(
        localizer: LevelLocalizer,
        formatter: Box<dyn RecordFormatter>,
        metrics: Arc<ParserMetrics>,
    ) -> Self {
        Self {
            state: State::AwaitOpen,
            buffer: String::new(),
            record: LogRecord::new(),
            localizer,
            formatter,
            metrics,
        }
    }

    /// Feed a single character. Display units it completes are pushed onto
    /// `out` in emission order. `process` is a line-oriented convenience
    /// over this entry point.
    pub fn feed_char(&mut self, c: char, out: &mut Vec<String>) {
        let mut next = Some(c);
        while let Some(c) = next.take() {
            next = self.step(c, out);
        }
    }

    /// One transition. Returns a character to re-process when the machine
    /// backs out of a partial delimiter; the delimiter characters consumed
    /// so far are re-inserted into the buffer as literal text first.
    fn step(&mut self, c: char, out: &mut Vec<String>) -> Option<char> {
        match self.state {
            State::AwaitOpen => match c {
                '[' => self.state = State::AwaitHash,
                '\n' => {
                    if !self.buffer.is_empty() {
                        self.metrics.passthrough_emitted();
                        out.push(mem::take(&mut self.buffer));
                    }
                }
                '\r' => {}
                _ => self.accumulate(c),
            },
            State::AwaitHash => {
                if c == '#' {
                    self.state = State::AwaitPipe;
                } else {
                    // "[x" was literal text after all
                    self.buffer.push('[');
                    self.state = State::AwaitOpen;
                    return Some(c);
                }
            }
            State::AwaitPipe => {
                if c == '|' {
                    self.buffer.clear();
                    self.state = State::Time;
                } else {
                    self.buffer.push_str("[#");
                    self.state = State::AwaitOpen;
                    return Some(c);
                }
            }
            State::Time => {
                if c == '|' {
                    assign(&mut self.record.time, &self.buffer);
                    self.buffer.clear();
                    self.state = State::Level;
                } else {
                    self.accumulate(c);
                }
            }
            State::Level => {
                if c == '|' {
                    let label = self.localizer.resolve(&self.buffer);
                    assign(&mut self.record.level, label);
                    self.buffer.clear();
                    self.state = State::Version;
                } else {
                    self.accumulate(c);
                }
            }
            State::Version => {
                if c == '|' {
                    assign(&mut self.record.version, &self.buffer);
                    self.buffer.clear();
                    self.state = State::ClassInfo;
                } else {
                    self.accumulate(c);
                }
            }
            State::ClassInfo => {
                if c == '|' {
                    assign(&mut self.record.class_info, &self.buffer);
                    self.buffer.clear();
                    self.state = State::ThreadInfo;
                } else {
                    self.accumulate(c);
                }
            }
            State::ThreadInfo => {
                if c == '|' {
                    assign(&mut self.record.thread_info, &self.buffer);
                    self.buffer.clear();
                    self.state = State::Message;
                } else {
                    self.accumulate(c);
                }
            }
            State::Message => match c {
                '|' => self.state = State::AwaitCloseHash,
                '\n' => {
                    // Keep embedded newlines, collapse blank runs.
                    if !self.buffer.is_empty() && !self.buffer.ends_with('\n') {
                        self.accumulate('\n');
                    }
                }
                '\r' => {}
                _ => self.accumulate(c),
            },
            State::AwaitCloseHash => {
                if c == '#' {
                    self.state = State::AwaitCloseBracket;
                } else {
                    // a lone pipe is message content
                    self.buffer.push('|');
                    self.state = State::Message;
                    return Some(c);
                }
            }
            State::AwaitCloseBracket => {
                if c == ']' {
                    assign(&mut self.record.message, &self.buffer);
                    self.buffer.clear();
                    let formatted = self.formatter.format(&self.record);
                    self.metrics.record_emitted();
                    out.push(formatted);
                    self.record.clear();
                    self.state = State::AwaitOpen;
                } else {
                    self.buffer.push_str("|#");
                    self.state = State::Message;
                    return Some(c);
                }
            }
        }
        None
    }

    fn accumulate(&mut self, c: char) {
        if self.buffer.len() >= MAX_BUFFER_BYTES {
            warn!(state = ?self.state, "accumulation buffer exceeded size cap, discarding");
            self.buffer.clear();
        }
        self.buffer.push(c);
    }
}

impl LogFilter for UniformLogFilter {
    fn process(&mut self, line: &str) -> Vec<String> {
        let mut out = Vec::new();
        for c in line.chars() {
            self.feed_char(c, &mut out);
        }
        self.feed_char('\n', &mut out);
        out
    }

    fn reset(&mut self) {
        self.state = State::AwaitOpen;
        self.buffer.clear();
        self.record.clear();
    }

    fn in_message(&self) -> bool {
        self.state == State::Message
    }
}

//! Sink module — consumers of completed display units.

use std::io::{self, Write};

/// Receives one display unit per call, in emission order. A unit is
/// either a formatted record or a pass-through line and may itself span
/// several lines.
pub trait DisplaySink: Send {
    fn display(&mut self, unit: &str) -> io::Result<()>;
}

/// Writes each unit to stdout followed by a newline.
pub struct StdoutSink {
    out: io::Stdout,
}

impl StdoutSink {
    pub fn new() -> Self {
        Self { out: io::stdout() }
    }
}

impl Default for StdoutSink {
    fn default() -> Self {
        Self::new()
    }
}

impl DisplaySink for StdoutSink {
    fn display(&mut self, unit: &str) -> io::Result<()> {
        let mut lock = self.out.lock();
        writeln!(lock, "{}", unit)?;
        lock.flush()
    }
}

/// Collects units in memory; used by tests and diagnostics.
#[derive(Debug, Default)]
pub struct MemorySink {
    pub units: Vec<String>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }
}

impl DisplaySink for MemorySink {
    fn display(&mut self, unit: &str) -> io::Result<()> {
        self.units.push(unit.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_sink_keeps_order() {
        let mut sink = MemorySink::new();
        sink.display("first").unwrap();
        sink.display("second\nwith more").unwrap();
        assert_eq!(sink.units, vec!["first", "second\nwith more"]);
    }
}

pub use super::record::LogRecord;

/// A filter variant: one of the two interchangeable strategies that turn
/// raw server-log lines into display units.
pub trait LogFilter: Send {
    /// Feed one line (terminator already stripped). Returns every display
    /// unit the line completed, in emission order: formatted records and,
    /// for variants that support it, pass-through text. Empty means "no
    /// complete unit yet", not an error.
    fn process(&mut self, line: &str) -> Vec<String>;

    /// Discard any in-flight partial record and return to the initial
    /// state, as if freshly constructed.
    fn reset(&mut self);

    /// True while the filter is inside a multi-line user message; used to
    /// suppress mismatch diagnostics for text that is still accumulating.
    fn in_message(&self) -> bool;
}

/// Renders a completed record as a single display unit. Never fails;
/// empty fields render as empty.
pub trait RecordFormatter: Send {
    fn format(&self, record: &LogRecord) -> String;
}

/// One structured server-log entry, accumulated field by field while a
/// filter walks the raw stream.
///
/// A record lives as long as its owning filter and is reused: fields fill
/// in as parsing progresses, the formatter reads it exactly once when the
/// record completes, then `clear` readies it for the next entry. It is
/// never shared between two logical entries.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LogRecord {
    pub time: String,
    pub level: String,
    pub version: String,
    pub class_info: String,
    pub thread_info: String,
    pub message: String,
}

impl LogRecord {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clear every field in place, keeping allocations.
    pub fn clear(&mut self) {
        self.time.clear();
        self.level.clear();
        self.version.clear();
        self.class_info.clear();
        self.thread_info.clear();
        self.message.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.time.is_empty()
            && self.level.is_empty()
            && self.version.is_empty()
            && self.class_info.is_empty()
            && self.thread_info.is_empty()
            && self.message.is_empty()
    }
}

/// Field-boundary commit: replace `dst` with `src`, reusing `dst`'s
/// allocation.
pub(crate) fn assign(dst: &mut String, src: &str) {
    dst.clear();
    dst.push_str(src);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_record_is_empty() {
        let record = LogRecord::new();
        assert!(record.is_empty());
    }

    #[test]
    fn test_clear_resets_every_field() {
        let mut record = LogRecord {
            time: "2024-01-01T10:00:00".to_string(),
            level: "Info".to_string(),
            version: "Payara 5.201".to_string(),
            class_info: "com.acme.Boot".to_string(),
            thread_info: "Thread-1".to_string(),
            message: "started".to_string(),
        };
        record.clear();
        assert!(record.is_empty());
    }

    #[test]
    fn test_assign_replaces_content() {
        let mut field = "old".to_string();
        assign(&mut field, "new value");
        assert_eq!(field, "new value");
        assign(&mut field, "");
        assert!(field.is_empty());
    }
}

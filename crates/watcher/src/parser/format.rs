//! Format — display renderings of a completed record.

use serde::{Deserialize, Serialize};

use super::record::LogRecord;
use super::traits::RecordFormatter;

/// Rendering style selected in configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DisplayFormat {
    Compact,
    Detailed,
}

impl DisplayFormat {
    pub fn formatter(self) -> Box<dyn RecordFormatter> {
        match self {
            DisplayFormat::Compact => Box::new(CompactFormatter),
            DisplayFormat::Detailed => Box::new(DetailedFormatter),
        }
    }
}

/// `<time> [<level>] <message>` — the terse console rendering.
pub struct CompactFormatter;

impl RecordFormatter for CompactFormatter {
    fn format(&self, record: &LogRecord) -> String {
        format!("{} [{}] {}", record.time, record.level, record.message)
    }
}

/// Adds the product tag, logger and thread fields when present.
pub struct DetailedFormatter;

impl RecordFormatter for DetailedFormatter {
    fn format(&self, record: &LogRecord) -> String {
        let mut out = format!("{} [{}]", record.time, record.level);
        if !record.version.is_empty() {
            out.push_str(&format!(" [{}]", record.version));
        }
        if !record.class_info.is_empty() || !record.thread_info.is_empty() {
            out.push_str(&format!(" [{}|{}]", record.class_info, record.thread_info));
        }
        out.push(' ');
        out.push_str(&record.message);
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_record() -> LogRecord {
        LogRecord {
            time: "2024-01-01T10:00:00".to_string(),
            level: "Info".to_string(),
            version: "Payara 5.201".to_string(),
            class_info: "com.acme.Boot".to_string(),
            thread_info: "Thread-1".to_string(),
            message: "server started".to_string(),
        }
    }

    #[test]
    fn test_compact_rendering() {
        let rendered = CompactFormatter.format(&sample_record());
        assert_eq!(rendered, "2024-01-01T10:00:00 [Info] server started");
    }

    #[test]
    fn test_compact_preserves_multiline_message() {
        let mut record = sample_record();
        record.message = "first\nsecond".to_string();
        let rendered = CompactFormatter.format(&record);
        assert_eq!(rendered, "2024-01-01T10:00:00 [Info] first\nsecond");
    }

    #[test]
    fn test_detailed_rendering() {
        let rendered = DetailedFormatter.format(&sample_record());
        assert_eq!(
            rendered,
            "2024-01-01T10:00:00 [Info] [Payara 5.201] [com.acme.Boot|Thread-1] server started"
        );
    }

    #[test]
    fn test_detailed_omits_empty_optional_fields() {
        let mut record = sample_record();
        record.version.clear();
        record.class_info.clear();
        record.thread_info.clear();
        let rendered = DetailedFormatter.format(&record);
        assert_eq!(rendered, "2024-01-01T10:00:00 [Info] server started");
    }

    #[test]
    fn test_empty_record_renders_without_panic() {
        let record = LogRecord::new();
        assert_eq!(CompactFormatter.format(&record), " [] ");
        assert_eq!(DetailedFormatter.format(&record), " [] ");
    }

    #[test]
    fn test_display_format_toml_names() {
        #[derive(serde::Deserialize)]
        struct Holder {
            display: DisplayFormat,
        }
        let holder: Holder = toml::from_str("display = \"compact\"").unwrap();
        assert_eq!(holder.display, DisplayFormat::Compact);
        let holder: Holder = toml::from_str("display = \"detailed\"").unwrap();
        assert_eq!(holder.display, DisplayFormat::Detailed);
    }
}

//! JSONL file sink for audit records.
//!
//! Each [`AuditRecord`] is serialized as a single JSON line with a
//! `timestamp` field and appended to the file in one unbuffered write.

use async_trait::async_trait;
use dual_ai_application::{AuditError, AuditLog};
use dual_ai_domain::AuditRecord;
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::Path;
use std::sync::Mutex;

/// Appends whole lines to a writer.
///
/// Nothing is buffered between records. If a write fails partway, the next
/// line starts with a newline so the torn fragment cannot swallow it.
struct LineAppender<W> {
    out: W,
    torn: bool,
}

impl<W: Write> LineAppender<W> {
    fn new(out: W) -> Self {
        Self { out, torn: false }
    }

    fn append(&mut self, line: &str) -> std::io::Result<()> {
        let mut buf = Vec::with_capacity(line.len() + 2);
        if self.torn {
            buf.push(b'\n');
        }
        buf.extend_from_slice(line.as_bytes());
        buf.push(b'\n');

        let result = self.out.write_all(&buf).and_then(|()| self.out.flush());
        self.torn = result.is_err();
        result
    }
}

/// Audit log that appends one JSON object per line.
///
/// Thread-safe via `Mutex`; each record is a single `write_all` on a file
/// opened in append mode.
pub struct JsonlAuditLog {
    appender: Mutex<LineAppender<File>>,
}

impl JsonlAuditLog {
    /// Open `path` for appending, creating it and its parent directories.
    ///
    /// Existing records are kept across restarts.
    pub fn open(path: impl AsRef<Path>) -> std::io::Result<Self> {
        let path = path.as_ref();

        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)?;
        }

        let file = OpenOptions::new().create(true).append(true).open(path)?;

        Ok(Self {
            appender: Mutex::new(LineAppender::new(file)),
        })
    }

    fn to_line(record: &AuditRecord) -> Result<String, AuditError> {
        let timestamp = chrono::Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Millis, true);

        let mut value =
            serde_json::to_value(record).map_err(|e| AuditError::Serialization(e.to_string()))?;
        if let serde_json::Value::Object(map) = &mut value {
            map.insert(
                "timestamp".to_string(),
                serde_json::Value::String(timestamp),
            );
        }

        serde_json::to_string(&value).map_err(|e| AuditError::Serialization(e.to_string()))
    }
}

#[async_trait]
impl AuditLog for JsonlAuditLog {
    fn name(&self) -> &'static str {
        "jsonl"
    }

    async fn record(&self, record: &AuditRecord) -> Result<(), AuditError> {
        let line = Self::to_line(record)?;

        let mut appender = self
            .appender
            .lock()
            .map_err(|_| AuditError::Io(std::io::Error::other("audit writer lock poisoned")))?;
        appender.append(&line)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(prompt: &str, chatgpt: Option<&str>) -> AuditRecord {
        AuditRecord {
            user_prompt: prompt.to_string(),
            chatgpt_reply: chatgpt.map(str::to_string),
            gemini_reply: Some("g".to_string()),
            source_ip: Some("198.51.100.4".to_string()),
        }
    }

    fn read_lines(path: &Path) -> Vec<serde_json::Value> {
        std::fs::read_to_string(path)
            .unwrap()
            .lines()
            .map(|l| serde_json::from_str(l).unwrap())
            .collect()
    }

    #[tokio::test]
    async fn writes_one_line_per_record() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("audit.jsonl");
        let log = JsonlAuditLog::open(&path).unwrap();

        log.record(&record("first", Some("a"))).await.unwrap();
        log.record(&record("second\nline", None)).await.unwrap();

        let lines = read_lines(&path);
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0]["user_prompt"], "first");
        assert_eq!(lines[0]["chatgpt_reply"], "a");
        assert_eq!(lines[1]["user_prompt"], "second\nline");
        assert!(lines[1]["chatgpt_reply"].is_null());
        assert_eq!(lines[1]["source_ip"], "198.51.100.4");
        assert!(lines[0]["timestamp"].as_str().unwrap().ends_with('Z'));
    }

    #[tokio::test]
    async fn reopening_appends() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("audit.jsonl");

        {
            let log = JsonlAuditLog::open(&path).unwrap();
            log.record(&record("before restart", None)).await.unwrap();
        }
        let log = JsonlAuditLog::open(&path).unwrap();
        log.record(&record("after restart", None)).await.unwrap();

        let lines = read_lines(&path);
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0]["user_prompt"], "before restart");
    }

    /// Accepts `budget` bytes, then fails a single write.
    struct FlakyWriter {
        data: Vec<u8>,
        budget: Option<usize>,
    }

    impl Write for FlakyWriter {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            match self.budget.take() {
                Some(0) => Err(std::io::Error::other("disk full")),
                Some(left) => {
                    let n = left.min(buf.len());
                    self.data.extend_from_slice(&buf[..n]);
                    self.budget = Some(left - n);
                    Ok(n)
                }
                None => {
                    self.data.extend_from_slice(buf);
                    Ok(buf.len())
                }
            }
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn torn_write_does_not_corrupt_next_line() {
        let mut appender = LineAppender::new(FlakyWriter {
            data: Vec::new(),
            budget: Some(5),
        });

        assert!(appender.append(r#"{"user_prompt":"lost"}"#).is_err());
        appender.append(r#"{"user_prompt":"kept"}"#).unwrap();
        appender.append(r#"{"user_prompt":"next"}"#).unwrap();

        let text = String::from_utf8(appender.out.data).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(
            lines,
            vec![r#"{"use"#, r#"{"user_prompt":"kept"}"#, r#"{"user_prompt":"next"}"#]
        );
    }

    #[test]
    fn open_fails_for_directory() {
        let dir = tempfile::tempdir().unwrap();
        assert!(JsonlAuditLog::open(dir.path()).is_err());
    }
}

//! JSONL file writer for debate events.
//!
//! Each [`ConversationEvent`] becomes one JSON line with `type` and
//! `timestamp` fields merged into its payload. The file is opened in append
//! mode so several sessions can share one log.

use arena_application::{ConversationEvent, ConversationLogger};
use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing::warn;

/// JSONL conversation logger that writes one JSON object per line.
///
/// Thread-safe via `Mutex<BufWriter<File>>`. Flushes after every line.
pub struct JsonlConversationLogger {
    writer: Mutex<BufWriter<File>>,
    path: PathBuf,
}

impl JsonlConversationLogger {
    /// Open (or create) the log at `path`, creating parent directories.
    ///
    /// Returns `None` if the file cannot be opened; the caller falls back to
    /// no conversation logging.
    pub fn open(path: impl AsRef<Path>) -> Option<Self> {
        let path = path.as_ref();

        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
            && let Err(e) = std::fs::create_dir_all(parent)
        {
            warn!(
                "Could not create conversation log directory {}: {}",
                parent.display(),
                e
            );
            return None;
        }

        let file = match OpenOptions::new().create(true).append(true).open(path) {
            Ok(f) => f,
            Err(e) => {
                warn!(
                    "Could not open conversation log file {}: {}",
                    path.display(),
                    e
                );
                return None;
            }
        };

        Some(Self {
            writer: Mutex::new(BufWriter::new(file)),
            path: path.to_path_buf(),
        })
    }

    /// Get the path to the log file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn record(event: ConversationEvent) -> serde_json::Value {
        let timestamp = chrono::Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Millis, true);

        match event.payload {
            serde_json::Value::Object(mut map) => {
                map.insert("type".to_string(), event.event_type.into());
                map.insert("timestamp".to_string(), timestamp.into());
                serde_json::Value::Object(map)
            }
            other => serde_json::json!({
                "type": event.event_type,
                "timestamp": timestamp,
                "data": other,
            }),
        }
    }
}

impl ConversationLogger for JsonlConversationLogger {
    fn log(&self, event: ConversationEvent) {
        let Ok(line) = serde_json::to_string(&Self::record(event)) else {
            return;
        };

        if let Ok(mut writer) = self.writer.lock() {
            let _ = writeln!(writer, "{}", line);
            let _ = writer.flush();
        }
    }
}

impl Drop for JsonlConversationLogger {
    fn drop(&mut self) {
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writer.flush();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn read_lines(path: &Path) -> Vec<serde_json::Value> {
        std::fs::read_to_string(path)
            .unwrap()
            .lines()
            .map(|l| serde_json::from_str(l).unwrap())
            .collect()
    }

    #[test]
    fn test_writes_one_object_per_event() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("logs").join("debate.jsonl");
        let logger = JsonlConversationLogger::open(&path).unwrap();

        logger.log(ConversationEvent::new(
            "round_started",
            serde_json::json!({"topic": "Remote work", "stance": "For"}),
        ));
        logger.log(ConversationEvent::new(
            "feedback",
            serde_json::json!({"rating": 6.0, "strength": "a", "suggestion": "b"}),
        ));
        drop(logger);

        let lines = read_lines(&path);
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0]["type"], "round_started");
        assert_eq!(lines[0]["topic"], "Remote work");
        assert!(lines[0]["timestamp"].is_string());
        assert_eq!(lines[1]["type"], "feedback");
        assert_eq!(lines[1]["rating"], 6.0);
    }

    #[test]
    fn test_appends_across_sessions() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("debate.jsonl");

        for _ in 0..2 {
            let logger = JsonlConversationLogger::open(&path).unwrap();
            logger.log(ConversationEvent::new("round_reset", serde_json::json!({})));
        }

        assert_eq!(read_lines(&path).len(), 2);
    }

    #[test]
    fn test_non_object_payload_is_wrapped() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("debate.jsonl");
        let logger = JsonlConversationLogger::open(&path).unwrap();

        logger.log(ConversationEvent::new(
            "turn_failed",
            serde_json::json!("timeout"),
        ));
        drop(logger);

        let lines = read_lines(&path);
        assert_eq!(lines[0]["type"], "turn_failed");
        assert_eq!(lines[0]["data"], "timeout");
    }

    #[test]
    fn test_unopenable_path_returns_none() {
        let dir = tempfile::tempdir().unwrap();
        // A directory cannot be opened as a log file
        assert!(JsonlConversationLogger::open(dir.path()).is_none());
    }
}

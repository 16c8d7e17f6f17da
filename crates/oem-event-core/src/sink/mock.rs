//! In-memory sink for testing and summaries.

use std::sync::{Arc, Mutex};

use super::traits::{EventSink, SinkError};
use crate::events::LogEntry;

/// Sink that records every entry it receives.
pub struct MemorySink {
    /// Captured entries.
    entries: Arc<Mutex<Vec<LogEntry>>>,
    /// Whether sends should fail.
    failing: Arc<Mutex<bool>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self {
            entries: Arc::new(Mutex::new(Vec::new())),
            failing: Arc::new(Mutex::new(false)),
        }
    }

    /// Get all captured entries.
    pub fn entries(&self) -> Vec<LogEntry> {
        self.entries.lock().map(|e| e.clone()).unwrap_or_default()
    }

    /// Number of entries received.
    pub fn len(&self) -> usize {
        self.entries.lock().map(|e| e.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Clear captured entries.
    pub fn clear(&self) {
        if let Ok(mut entries) = self.entries.lock() {
            entries.clear();
        }
    }

    /// Make subsequent sends fail.
    pub fn set_failing(&self, failing: bool) {
        if let Ok(mut f) = self.failing.lock() {
            *f = failing;
        }
    }
}

impl Default for MemorySink {
    fn default() -> Self {
        Self::new()
    }
}

impl EventSink for MemorySink {
    fn send(&self, entry: &LogEntry) -> Result<(), SinkError> {
        if self.failing.lock().map(|f| *f).unwrap_or(false) {
            return Err(SinkError::Unavailable("memory sink set to fail".into()));
        }
        self.entries
            .lock()
            .map_err(|e| SinkError::WriteFailed(e.to_string()))?
            .push(entry.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::LogLevel;

    #[test]
    fn test_memory_capture() {
        let sink = MemorySink::new();
        sink.send(&LogEntry::new("one", LogLevel::Ok)).unwrap();
        sink.send(&LogEntry::new("two", LogLevel::BiosFwPanic)).unwrap();

        let entries = sink.entries();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[1].description, "two");

        sink.clear();
        assert!(sink.is_empty());
    }

    #[test]
    fn test_memory_failing() {
        let sink = MemorySink::new();
        sink.set_failing(true);
        assert!(sink.send(&LogEntry::new("lost", LogLevel::Ok)).is_err());
        assert!(sink.is_empty());
    }
}

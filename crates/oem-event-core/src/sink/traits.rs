//! Logging sink abstraction.
//!
//! Defines the `EventSink` trait that receives finished diagnostic records,
//! allowing different backends (journal, in-memory, etc.).

use crate::events::LogEntry;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SinkError {
    #[error("Sink unavailable: {0}")]
    Unavailable(String),

    #[error("Write failed: {0}")]
    WriteFailed(String),
}

/// Destination for diagnostic records.
///
/// Implementations must not block; a failing sink reports the error and the
/// caller drops it.
pub trait EventSink: Send + Sync {
    fn send(&self, entry: &LogEntry) -> Result<(), SinkError>;
}

/// Sink that discards all records.
pub struct NullSink;

impl EventSink for NullSink {
    fn send(&self, _entry: &LogEntry) -> Result<(), SinkError> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::LogLevel;

    #[test]
    fn test_null_sink_discards() {
        assert!(NullSink.send(&LogEntry::new("dropped", LogLevel::BiosFwPanic)).is_ok());
    }
}

//! Journal / Redfish sink.

use tracing::{error, info};

use super::traits::{EventSink, SinkError};
use crate::events::{LogEntry, LogLevel};

/// Emits each record as a structured `tracing` event carrying the Redfish
/// message id and arguments, for a journald layer to pick up.
pub struct JournalSink;

impl EventSink for JournalSink {
    fn send(&self, entry: &LogEntry) -> Result<(), SinkError> {
        let message_id = entry.level.redfish_message_id();
        match entry.level {
            LogLevel::Ok => {
                info!(
                    REDFISH_MESSAGE_ID = message_id,
                    REDFISH_MESSAGE_ARGS = %entry.description,
                    "{}",
                    entry.description
                );
            }
            LogLevel::BiosFwPanic => {
                error!(
                    REDFISH_MESSAGE_ID = message_id,
                    REDFISH_MESSAGE_ARGS = %entry.description,
                    "{}",
                    entry.description
                );
            }
        }
        Ok(())
    }
}

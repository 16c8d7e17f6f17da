//! Diagnostic records handed to the logging sink.

use std::fmt;

use crate::protocol::constants::{REDFISH_MSG_ID_BIOS_FW_PANIC, REDFISH_MSG_ID_OK};

/// Severity of a diagnostic record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    /// Informational.
    Ok,
    /// Boot firmware reported a failure.
    BiosFwPanic,
}

impl LogLevel {
    /// Redfish message registry id used for this level.
    pub fn redfish_message_id(&self) -> &'static str {
        match self {
            LogLevel::Ok => REDFISH_MSG_ID_OK,
            LogLevel::BiosFwPanic => REDFISH_MSG_ID_BIOS_FW_PANIC,
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogLevel::Ok => write!(f, "OK"),
            LogLevel::BiosFwPanic => write!(f, "BIOSFWPANIC"),
        }
    }
}

/// One diagnostic record produced per classified event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogEntry {
    pub description: String,
    pub level: LogLevel,
}

impl LogEntry {
    pub fn new(description: impl Into<String>, level: LogLevel) -> Self {
        Self {
            description: description.into(),
            level,
        }
    }
}

impl fmt::Display for LogEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.level, self.description)
    }
}

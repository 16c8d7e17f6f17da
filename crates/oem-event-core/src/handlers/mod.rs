//! Sensor event handlers - one processor per sensor event class.
//!
//! This module is split into submodules by event class:
//! - `numeric`: numeric sensor readings, dispatched per sensor id
//! - `state`: discrete state sensor transitions
//! - `op_state`: sensor operational state transitions

mod numeric;
mod op_state;
mod state;

use crate::events::{LogEntry, LogLevel};
use crate::manager::OemEventManager;
use crate::protocol::constants::BOOT_OVERALL;
use crate::sink::EventSink;

pub use numeric::process_numeric_sensor_event;
pub use op_state::process_sensor_op_state_event;
pub use state::process_state_sensor_event;

/// Per-event context shared by the processors.
pub struct HandlerContext<'a, S: EventSink> {
    pub manager: &'a OemEventManager<S>,
    pub tid: u8,
    pub sensor_id: u16,
}

impl<'a, S: EventSink> HandlerContext<'a, S> {
    /// `"<source>: <sensor>: "` for this event.
    pub(crate) fn prefix(&self) -> String {
        self.manager.prefix_msg_str_creation(self.tid, self.sensor_id)
    }

    /// Forward a finished record to the sink.
    pub(crate) fn forward(&self, entry: LogEntry) {
        self.manager.send_journal_redfish(&entry.description, entry.level);
    }

    pub(crate) fn log(&self, level: LogLevel, message: impl AsRef<str>) {
        let description = format!("{}{}", self.prefix(), message.as_ref());
        self.manager.send_journal_redfish(&description, level);
    }
}

/// OEM numeric sensors with dedicated handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumericSensorHandler {
    BootOverall,
}

/// Sensor id to handler table.
const NUMERIC_SENSOR_HANDLERS: &[(u16, NumericSensorHandler)] =
    &[(BOOT_OVERALL, NumericSensorHandler::BootOverall)];

impl NumericSensorHandler {
    /// Handler registered for `sensor_id`, if any.
    pub fn lookup(sensor_id: u16) -> Option<Self> {
        NUMERIC_SENSOR_HANDLERS
            .iter()
            .find(|(id, _)| *id == sensor_id)
            .map(|(_, handler)| *handler)
    }

    /// Known display name of the sensor.
    pub fn sensor_name(&self) -> &'static str {
        match self {
            NumericSensorHandler::BootOverall => "BOOT_OVERALL",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_handler_lookup() {
        assert_eq!(
            NumericSensorHandler::lookup(BOOT_OVERALL),
            Some(NumericSensorHandler::BootOverall)
        );
        assert_eq!(NumericSensorHandler::lookup(1), None);
        assert_eq!(NumericSensorHandler::BootOverall.sensor_name(), "BOOT_OVERALL");
    }
}

//! OEM event manager - entry point for sensor event messages.

use std::sync::Arc;

use tracing::{debug, instrument, trace, warn};

use crate::config::ManagerConfig;
use crate::events::{LogEntry, LogLevel};
use crate::handlers::{
    HandlerContext, NumericSensorHandler, process_numeric_sensor_event,
    process_sensor_op_state_event, process_state_sensor_event,
};
use crate::protocol::constants::PLDM_SUCCESS;
use crate::protocol::header::ensure_len;
use crate::protocol::{DecodeError, SensorEventClass, SensorEventHeader};
use crate::sink::{EventSink, JournalSink};

/// Decodes OEM sensor events and forwards the resulting records to a sink.
///
/// The manager holds no per-event state, so one instance can serve
/// concurrent callers.
pub struct OemEventManager<S: EventSink> {
    config: ManagerConfig,
    sink: Arc<S>,
}

impl OemEventManager<JournalSink> {
    /// Create a manager that logs to the journal.
    pub fn new(config: ManagerConfig) -> Self {
        Self::with_sink(config, Arc::new(JournalSink))
    }
}

impl<S: EventSink> OemEventManager<S> {
    /// Create a manager with a custom sink.
    pub fn with_sink(config: ManagerConfig, sink: Arc<S>) -> Self {
        Self { config, sink }
    }

    pub fn sink(&self) -> &Arc<S> {
        &self.sink
    }

    /// Decode a sensor event message and handle it.
    ///
    /// `payload_length` is the declared length of `payload`; only the
    /// smaller of the two is ever read. Sensor event data starts at
    /// `event_data_offset`. Returns a PLDM completion code: 0 when the
    /// event was handled or intentionally ignored, non-zero when it could
    /// not be decoded.
    #[instrument(skip(self, payload), fields(len = payload_length))]
    pub fn handle_sensor_event(
        &self,
        payload: &[u8],
        payload_length: usize,
        format_version: u8,
        tid: u8,
        event_data_offset: usize,
    ) -> i32 {
        trace!(format_version, "Sensor event received");
        let payload = &payload[..payload_length.min(payload.len())];
        match self.try_handle_sensor_event(payload, tid, event_data_offset) {
            Ok(()) => PLDM_SUCCESS as i32,
            Err(e) => {
                warn!(tid, error = %e, "Rejected sensor event");
                e.completion_code() as i32
            }
        }
    }

    fn try_handle_sensor_event(
        &self,
        payload: &[u8],
        tid: u8,
        event_data_offset: usize,
    ) -> Result<(), DecodeError> {
        ensure_len(payload, event_data_offset)?;
        let (header, sensor_data) = SensorEventHeader::from_bytes(&payload[event_data_offset..])?;
        debug!(
            tid,
            sensor_id = header.sensor_id,
            class = %header.event_class,
            "Dispatching sensor event"
        );

        let ctx = HandlerContext {
            manager: self,
            tid,
            sensor_id: header.sensor_id,
        };

        match header.event_class {
            SensorEventClass::NumericSensor => process_numeric_sensor_event(&ctx, sensor_data),
            SensorEventClass::StateSensor => process_state_sensor_event(&ctx, sensor_data),
            SensorEventClass::SensorOpState => process_sensor_op_state_event(&ctx, sensor_data),
        }
    }

    /// Build the `"<source>: <sensor>: "` prefix for a log message.
    pub fn prefix_msg_str_creation(&self, tid: u8, sensor_id: u16) -> String {
        let source = match self.config.socket_name(tid) {
            Some(name) => name.to_string(),
            None => format!("TID {}", tid),
        };
        let sensor = match NumericSensorHandler::lookup(sensor_id) {
            Some(handler) => handler.sensor_name().to_string(),
            None => format!("Sensor ID {}", sensor_id),
        };
        format!("{}: {}: ", source, sensor)
    }

    /// Forward a record to the sink. Sink failures are logged and dropped.
    pub fn send_journal_redfish(&self, description: &str, level: LogLevel) {
        let entry = LogEntry::new(description, level);
        if let Err(e) = self.sink.send(&entry) {
            warn!(error = %e, level = %level, "Failed to forward log entry");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::protocol::constants::*;
    use crate::sink::MemorySink;

    const EVENT_DATA_OFFSET: usize = 3;

    fn manager() -> OemEventManager<MemorySink> {
        OemEventManager::with_sink(ManagerConfig::default(), Arc::new(MemorySink::new()))
    }

    /// formatVersion, TID, eventClass, then the sensor event data.
    fn message(tid: u8, sensor_id: u16, class: u8, body: &[u8]) -> Vec<u8> {
        let mut msg = vec![0x01, tid, 0x00];
        msg.extend_from_slice(&sensor_id.to_le_bytes());
        msg.push(class);
        msg.extend_from_slice(body);
        msg
    }

    fn numeric_body(reading: u32) -> Vec<u8> {
        let mut body = vec![0x00, 0x00, PLDM_SENSOR_DATA_SIZE_UINT32];
        body.extend_from_slice(&reading.to_le_bytes());
        body
    }

    fn handle(mgr: &OemEventManager<MemorySink>, tid: u8, msg: &[u8]) -> i32 {
        mgr.handle_sensor_event(msg, msg.len(), 0x01, tid, EVENT_DATA_OFFSET)
    }

    #[test]
    fn test_empty_payload() {
        let mgr = manager();
        let rc = mgr.handle_sensor_event(&[], 0, 0x01, 1, EVENT_DATA_OFFSET);
        assert_ne!(rc, 0);
        assert_eq!(rc, PLDM_ERROR_INVALID_LENGTH as i32);
        assert!(mgr.sink().is_empty());
    }

    #[test]
    fn test_boot_failure_reported_as_panic() {
        let mgr = manager();
        let reading = u32::from_le_bytes([BOOT_STATUS_FAILURE, 0x96, 0b1010, 0x00]);
        let msg = message(1, BOOT_OVERALL, PLDM_NUMERIC_SENSOR_STATE, &numeric_body(reading));

        assert_eq!(handle(&mgr, 1, &msg), 0);
        let entries = mgr.sink().entries();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].level, LogLevel::BiosFwPanic);
        assert_eq!(
            entries[0].description,
            "SOCKET 0: BOOT_OVERALL: S0 DDR training failure boot failed, DIMM fault: 1, 3"
        );
    }

    #[test]
    fn test_boot_success_reported_as_ok() {
        let mgr = manager();
        let reading = u32::from_le_bytes([BOOT_STATUS_SUCCESS, 0x97, 0xFF, 0xFF]);
        let msg = message(2, BOOT_OVERALL, PLDM_NUMERIC_SENSOR_STATE, &numeric_body(reading));

        assert_eq!(handle(&mgr, 2, &msg), 0);
        let entries = mgr.sink().entries();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].level, LogLevel::Ok);
        assert_eq!(entries[0].description, "SOCKET 1: BOOT_OVERALL: ATF BL31 booted");
    }

    #[test]
    fn test_signed_boot_reading_has_no_dimm_faults() {
        let mgr = manager();
        let body = [0x00, 0x00, PLDM_SENSOR_DATA_SIZE_SINT16, BOOT_STATUS_FAILURE, 0x93];
        let msg = message(1, BOOT_OVERALL, PLDM_NUMERIC_SENSOR_STATE, &body);

        assert_eq!(handle(&mgr, 1, &msg), 0);
        let entries = mgr.sink().entries();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].level, LogLevel::BiosFwPanic);
        assert_eq!(entries[0].description, "SOCKET 0: BOOT_OVERALL: ATF BL2 boot failed");
        assert!(!entries[0].description.contains("DIMM fault"));
    }

    #[test]
    fn test_unknown_numeric_sensor_ignored() {
        let mgr = manager();
        let reading = u32::from_le_bytes([BOOT_STATUS_FAILURE, 0x90, 0x01, 0x00]);
        let msg = message(1, 1, PLDM_NUMERIC_SENSOR_STATE, &numeric_body(reading));

        assert_eq!(handle(&mgr, 1, &msg), 0);
        assert!(mgr.sink().is_empty());
    }

    #[test]
    fn test_truncated_numeric_reading() {
        let mgr = manager();
        let body = [0x00, 0x00, PLDM_SENSOR_DATA_SIZE_UINT32, 0x81];
        let msg = message(1, BOOT_OVERALL, PLDM_NUMERIC_SENSOR_STATE, &body);

        assert_eq!(handle(&mgr, 1, &msg), PLDM_ERROR_INVALID_LENGTH as i32);
        assert!(mgr.sink().is_empty());
    }

    #[test]
    fn test_declared_length_bounds_the_read() {
        let mgr = manager();
        let reading = u32::from_le_bytes([BOOT_STATUS_FAILURE, 0x90, 0x00, 0x00]);
        let msg = message(1, BOOT_OVERALL, PLDM_NUMERIC_SENSOR_STATE, &numeric_body(reading));

        let rc = mgr.handle_sensor_event(&msg, msg.len() - 1, 0x01, 1, EVENT_DATA_OFFSET);
        assert_eq!(rc, PLDM_ERROR_INVALID_LENGTH as i32);
        assert!(mgr.sink().is_empty());
    }

    #[test]
    fn test_offset_past_payload() {
        let mgr = manager();
        let msg = [0x01, 0x01, 0x00];
        let rc = mgr.handle_sensor_event(&msg, msg.len(), 0x01, 1, 16);
        assert_eq!(rc, PLDM_ERROR_INVALID_LENGTH as i32);
    }

    #[test]
    fn test_unknown_event_class() {
        let mgr = manager();
        let msg = message(1, BOOT_OVERALL, 0x05, &[0x00, 0x00]);

        assert_eq!(handle(&mgr, 1, &msg), PLDM_ERROR_INVALID_DATA as i32);
        assert!(mgr.sink().is_empty());
    }

    #[test]
    fn test_state_sensor_event() {
        let mgr = manager();
        let msg = message(1, 42, PLDM_STATE_SENSOR_STATE, &[0x02, 0x01]);
        assert_eq!(handle(&mgr, 1, &msg), 0);
        assert!(mgr.sink().is_empty());

        let msg = message(1, 42, PLDM_STATE_SENSOR_STATE, &[0x02]);
        assert_eq!(handle(&mgr, 1, &msg), PLDM_ERROR_INVALID_LENGTH as i32);
    }

    #[test]
    fn test_op_state_leaving_enabled() {
        let mgr = manager();
        let msg = message(
            7,
            BOOT_OVERALL,
            PLDM_SENSOR_OP_STATE,
            &[PLDM_SENSOR_FAILED, PLDM_SENSOR_ENABLED],
        );

        assert_eq!(handle(&mgr, 7, &msg), 0);
        let entries = mgr.sink().entries();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].level, LogLevel::Ok);
        assert_eq!(
            entries[0].description,
            "TID 7: BOOT_OVERALL: operational state changed from enabled to failed"
        );
    }

    #[test]
    fn test_op_state_entering_enabled_not_reported() {
        let mgr = manager();
        let msg = message(
            1,
            9,
            PLDM_SENSOR_OP_STATE,
            &[PLDM_SENSOR_ENABLED, PLDM_SENSOR_INITIALIZING],
        );
        assert_eq!(handle(&mgr, 1, &msg), 0);
        assert!(mgr.sink().is_empty());
    }

    #[test]
    fn test_sink_failure_not_propagated() {
        let mgr = manager();
        mgr.sink().set_failing(true);
        let reading = u32::from_le_bytes([BOOT_STATUS_FAILURE, 0x93, 0x00, 0x00]);
        let msg = message(1, BOOT_OVERALL, PLDM_NUMERIC_SENSOR_STATE, &numeric_body(reading));

        assert_eq!(handle(&mgr, 1, &msg), 0);
        assert!(mgr.sink().is_empty());
    }

    #[test]
    fn test_prefix() {
        let mgr = manager();
        assert_eq!(mgr.prefix_msg_str_creation(1, BOOT_OVERALL), "SOCKET 0: BOOT_OVERALL: ");
        assert_eq!(mgr.prefix_msg_str_creation(5, 12), "TID 5: Sensor ID 12: ");
    }

    #[test]
    fn test_same_event_twice_is_identical() {
        let mgr = manager();
        let reading = u32::from_le_bytes([BOOT_STATUS_FAILURE, 0x99, 0x0F, 0xF0]);
        let msg = message(2, BOOT_OVERALL, PLDM_NUMERIC_SENSOR_STATE, &numeric_body(reading));

        handle(&mgr, 2, &msg);
        handle(&mgr, 2, &msg);
        let entries = mgr.sink().entries();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0], entries[1]);
    }

    #[test]
    fn test_concurrent_callers() {
        let mgr = Arc::new(manager());
        let handles: Vec<_> = (1..=4u8)
            .map(|tid| {
                let mgr = Arc::clone(&mgr);
                std::thread::spawn(move || {
                    let reading = u32::from_le_bytes([BOOT_STATUS_SUCCESS, 0x91, 0, 0]);
                    let msg = message(
                        tid,
                        BOOT_OVERALL,
                        PLDM_NUMERIC_SENSOR_STATE,
                        &numeric_body(reading),
                    );
                    handle(&mgr, tid, &msg)
                })
            })
            .collect();
        for h in handles {
            assert_eq!(h.join().unwrap(), 0);
        }
        assert_eq!(mgr.sink().len(), 4);
    }
}

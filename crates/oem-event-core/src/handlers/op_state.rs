//! Sensor operational state event processing.

use tracing::debug;

use super::HandlerContext;
use crate::events::LogLevel;
use crate::protocol::{DecodeError, SensorOpStateChange};
use crate::sink::EventSink;

/// Decode an operational state transition and report sensors that stop
/// being enabled.
pub fn process_sensor_op_state_event<S: EventSink>(
    ctx: &HandlerContext<'_, S>,
    sensor_data: &[u8],
) -> Result<(), DecodeError> {
    let change = SensorOpStateChange::from_bytes(sensor_data)?;
    debug!(
        tid = ctx.tid,
        sensor_id = ctx.sensor_id,
        current = %change.current_op_state,
        previous = %change.previous_op_state,
        "Sensor op state event"
    );

    if change.left_enabled() {
        ctx.log(
            LogLevel::Ok,
            format!(
                "operational state changed from {} to {}",
                change.previous_op_state, change.current_op_state
            ),
        );
    }
    Ok(())
}

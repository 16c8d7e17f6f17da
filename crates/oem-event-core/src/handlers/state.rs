//! State sensor event processing.

use tracing::debug;

use super::HandlerContext;
use crate::protocol::{DecodeError, StateSensorReading};
use crate::sink::EventSink;

/// Decode a state sensor transition. No OEM state sensor is handled yet, so
/// a well-formed event is only traced.
pub fn process_state_sensor_event<S: EventSink>(
    ctx: &HandlerContext<'_, S>,
    sensor_data: &[u8],
) -> Result<(), DecodeError> {
    let reading = StateSensorReading::from_bytes(sensor_data)?;
    debug!(
        tid = ctx.tid,
        sensor_id = ctx.sensor_id,
        current_state = reading.current_state,
        previous_state = reading.previous_state,
        "State sensor event"
    );
    Ok(())
}

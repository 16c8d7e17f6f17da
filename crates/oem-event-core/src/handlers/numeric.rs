//! Numeric sensor event processing.

use tracing::debug;

use super::{HandlerContext, NumericSensorHandler};
use crate::boot::classify_boot_overall;
use crate::protocol::{DecodeError, NumericSensorReading};
use crate::sink::EventSink;

/// Decode a numeric sensor body and run the handler registered for the
/// sensor id. Sensors without a handler are accepted and ignored.
pub fn process_numeric_sensor_event<S: EventSink>(
    ctx: &HandlerContext<'_, S>,
    sensor_data: &[u8],
) -> Result<(), DecodeError> {
    let reading = NumericSensorReading::from_bytes(sensor_data)?;
    debug!(
        tid = ctx.tid,
        sensor_id = ctx.sensor_id,
        event_state = reading.event_state,
        previous_event_state = reading.previous_event_state,
        present_reading = %format!("0x{:08X}", reading.present_reading),
        "Numeric sensor event"
    );

    match NumericSensorHandler::lookup(ctx.sensor_id) {
        Some(NumericSensorHandler::BootOverall) => {
            handle_boot_overall_event(ctx, reading.raw_reading);
        }
        None => {
            debug!(sensor_id = ctx.sensor_id, "No handler for numeric sensor");
        }
    }
    Ok(())
}

/// Classify a boot overall reading and forward the record. The reading is
/// a packed bitfield, so it takes the raw wire bits.
fn handle_boot_overall_event<S: EventSink>(ctx: &HandlerContext<'_, S>, present_reading: u32) {
    let entry = classify_boot_overall(&ctx.prefix(), present_reading);
    ctx.forward(entry);
}

//! Protocol module - PLDM sensor event definitions.

pub mod constants;
pub mod header;
pub mod sensor_data;

pub use constants::*;
pub use header::{DecodeError, SensorEventClass, SensorEventHeader};
pub use sensor_data::{
    NumericSensorReading, OpState, SensorDataSize, SensorOpStateChange, StateSensorReading,
};

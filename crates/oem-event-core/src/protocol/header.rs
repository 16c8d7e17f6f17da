//! Generic sensor event header.

use byteorder::{LittleEndian, ReadBytesExt};
use std::fmt;
use std::io::Cursor;
use thiserror::Error;

use super::constants::*;

#[derive(Error, Debug)]
pub enum DecodeError {
    #[error("Buffer too small: expected {expected}, got {actual}")]
    BufferTooSmall { expected: usize, actual: usize },
    #[error("Unknown sensor event class: 0x{0:02X}")]
    UnknownEventClass(u8),
    #[error("Invalid sensor data size code: {0}")]
    InvalidDataSize(u8),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl DecodeError {
    /// PLDM completion code reported back to the transport.
    pub fn completion_code(&self) -> u8 {
        match self {
            DecodeError::BufferTooSmall { .. } | DecodeError::Io(_) => PLDM_ERROR_INVALID_LENGTH,
            DecodeError::UnknownEventClass(_) | DecodeError::InvalidDataSize(_) => {
                PLDM_ERROR_INVALID_DATA
            }
        }
    }
}

/// Fail with `BufferTooSmall` unless `data` holds at least `expected` bytes.
pub(crate) fn ensure_len(data: &[u8], expected: usize) -> Result<(), DecodeError> {
    if data.len() < expected {
        return Err(DecodeError::BufferTooSmall {
            expected,
            actual: data.len(),
        });
    }
    Ok(())
}

/// sensorEventClassType
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SensorEventClass {
    SensorOpState,
    StateSensor,
    NumericSensor,
}

impl SensorEventClass {
    pub fn from_u8(v: u8) -> Result<Self, DecodeError> {
        match v {
            PLDM_SENSOR_OP_STATE => Ok(Self::SensorOpState),
            PLDM_STATE_SENSOR_STATE => Ok(Self::StateSensor),
            PLDM_NUMERIC_SENSOR_STATE => Ok(Self::NumericSensor),
            other => Err(DecodeError::UnknownEventClass(other)),
        }
    }
}

impl fmt::Display for SensorEventClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SensorEventClass::SensorOpState => write!(f, "SENSOR_OP_STATE"),
            SensorEventClass::StateSensor => write!(f, "STATE_SENSOR_STATE"),
            SensorEventClass::NumericSensor => write!(f, "NUMERIC_SENSOR_STATE"),
        }
    }
}

/// Sensor event header (3 bytes) preceding the class-specific data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SensorEventHeader {
    pub sensor_id: u16,
    pub event_class: SensorEventClass,
}

impl SensorEventHeader {
    pub const SIZE: usize = SENSOR_EVENT_HEADER_SIZE;

    /// Parse the header and return it with the remaining class data.
    pub fn from_bytes(data: &[u8]) -> Result<(Self, &[u8]), DecodeError> {
        ensure_len(data, Self::SIZE)?;
        let mut cursor = Cursor::new(data);
        let sensor_id = cursor.read_u16::<LittleEndian>()?;
        let event_class = SensorEventClass::from_u8(cursor.read_u8()?)?;
        Ok((
            Self {
                sensor_id,
                event_class,
            },
            &data[Self::SIZE..],
        ))
    }
}

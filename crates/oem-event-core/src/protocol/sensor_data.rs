//! Class-specific sensor event bodies.
//!
//! Each body is decoded from the bytes that follow the [`SensorEventHeader`]
//! and is checked against its declared size before any field is read.
//!
//! [`SensorEventHeader`]: super::header::SensorEventHeader

use byteorder::{LittleEndian, ReadBytesExt};
use std::fmt;
use std::io::Cursor;

use super::constants::*;
use super::header::{DecodeError, ensure_len};

/// Declared width of a numeric sensor's present reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SensorDataSize {
    Uint8,
    Sint8,
    Uint16,
    Sint16,
    Uint32,
    Sint32,
}

impl SensorDataSize {
    pub fn from_u8(v: u8) -> Result<Self, DecodeError> {
        match v {
            PLDM_SENSOR_DATA_SIZE_UINT8 => Ok(Self::Uint8),
            PLDM_SENSOR_DATA_SIZE_SINT8 => Ok(Self::Sint8),
            PLDM_SENSOR_DATA_SIZE_UINT16 => Ok(Self::Uint16),
            PLDM_SENSOR_DATA_SIZE_SINT16 => Ok(Self::Sint16),
            PLDM_SENSOR_DATA_SIZE_UINT32 => Ok(Self::Uint32),
            PLDM_SENSOR_DATA_SIZE_SINT32 => Ok(Self::Sint32),
            other => Err(DecodeError::InvalidDataSize(other)),
        }
    }

    /// Width of the reading in bytes.
    pub fn width(&self) -> usize {
        match self {
            SensorDataSize::Uint8 | SensorDataSize::Sint8 => 1,
            SensorDataSize::Uint16 | SensorDataSize::Sint16 => 2,
            SensorDataSize::Uint32 | SensorDataSize::Sint32 => 4,
        }
    }
}

/// Numeric sensor event body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NumericSensorReading {
    pub event_state: u8,
    pub previous_event_state: u8,
    pub data_size: SensorDataSize,
    /// Reading widened to 32 bits; signed readings are sign-extended.
    pub present_reading: u32,
    /// Wire bits of the reading, zero-extended.
    pub raw_reading: u32,
}

impl NumericSensorReading {
    pub fn from_bytes(data: &[u8]) -> Result<Self, DecodeError> {
        ensure_len(data, NUMERIC_SENSOR_FIXED_SIZE)?;
        let mut cursor = Cursor::new(data);
        let event_state = cursor.read_u8()?;
        let previous_event_state = cursor.read_u8()?;
        let data_size = SensorDataSize::from_u8(cursor.read_u8()?)?;

        ensure_len(data, NUMERIC_SENSOR_FIXED_SIZE + data_size.width())?;
        let raw_reading = match data_size.width() {
            1 => cursor.read_u8()? as u32,
            2 => cursor.read_u16::<LittleEndian>()? as u32,
            _ => cursor.read_u32::<LittleEndian>()?,
        };
        let present_reading = match data_size {
            SensorDataSize::Sint8 => raw_reading as u8 as i8 as i32 as u32,
            SensorDataSize::Sint16 => raw_reading as u16 as i16 as i32 as u32,
            _ => raw_reading,
        };

        Ok(Self {
            event_state,
            previous_event_state,
            data_size,
            present_reading,
            raw_reading,
        })
    }
}

/// State sensor event body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StateSensorReading {
    pub current_state: u8,
    pub previous_state: u8,
}

impl StateSensorReading {
    pub fn from_bytes(data: &[u8]) -> Result<Self, DecodeError> {
        ensure_len(data, STATE_SENSOR_DATA_SIZE)?;
        Ok(Self {
            current_state: data[0],
            previous_state: data[1],
        })
    }
}

/// Sensor operational state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpState {
    Enabled,
    Disabled,
    Unavailable,
    StatusUnknown,
    Failed,
    Initializing,
    ShuttingDown,
    InTest,
    Unknown(u8),
}

impl From<u8> for OpState {
    fn from(v: u8) -> Self {
        match v {
            PLDM_SENSOR_ENABLED => OpState::Enabled,
            PLDM_SENSOR_DISABLED => OpState::Disabled,
            PLDM_SENSOR_UNAVAILABLE => OpState::Unavailable,
            PLDM_SENSOR_STATUSUNKOWN => OpState::StatusUnknown,
            PLDM_SENSOR_FAILED => OpState::Failed,
            PLDM_SENSOR_INITIALIZING => OpState::Initializing,
            PLDM_SENSOR_SHUTTINGDOWN => OpState::ShuttingDown,
            PLDM_SENSOR_INTEST => OpState::InTest,
            other => OpState::Unknown(other),
        }
    }
}

impl fmt::Display for OpState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OpState::Enabled => write!(f, "enabled"),
            OpState::Disabled => write!(f, "disabled"),
            OpState::Unavailable => write!(f, "unavailable"),
            OpState::StatusUnknown => write!(f, "status unknown"),
            OpState::Failed => write!(f, "failed"),
            OpState::Initializing => write!(f, "initializing"),
            OpState::ShuttingDown => write!(f, "shutting down"),
            OpState::InTest => write!(f, "in test"),
            OpState::Unknown(v) => write!(f, "unknown (0x{:02X})", v),
        }
    }
}

/// Sensor operational state transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SensorOpStateChange {
    pub current_op_state: OpState,
    pub previous_op_state: OpState,
}

impl SensorOpStateChange {
    pub fn from_bytes(data: &[u8]) -> Result<Self, DecodeError> {
        ensure_len(data, OP_STATE_DATA_SIZE)?;
        Ok(Self {
            current_op_state: data[0].into(),
            previous_op_state: data[1].into(),
        })
    }

    /// Sensor was enabled and no longer is.
    pub fn left_enabled(&self) -> bool {
        self.previous_op_state == OpState::Enabled && self.current_op_state != OpState::Enabled
    }
}

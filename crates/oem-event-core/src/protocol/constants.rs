//! Protocol constants for PLDM platform sensor events.
//!
//! Values follow DSP0248 (PLDM for Platform Monitoring and Control) plus the
//! OEM boot-progress encoding used by the boot overall sensor.

// ============================================================================
// Completion Codes
// ============================================================================

pub const PLDM_SUCCESS: u8 = 0x00;
pub const PLDM_ERROR_INVALID_DATA: u8 = 0x02;
pub const PLDM_ERROR_INVALID_LENGTH: u8 = 0x03;

// ============================================================================
// Sensor Event Envelope
// ============================================================================

/// sensorID (2) + sensorEventClassType (1)
pub const SENSOR_EVENT_HEADER_SIZE: usize = 3;

/// Sensor operational state change
pub const PLDM_SENSOR_OP_STATE: u8 = 0x00;
/// State sensor state change
pub const PLDM_STATE_SENSOR_STATE: u8 = 0x01;
/// Numeric sensor state change
pub const PLDM_NUMERIC_SENSOR_STATE: u8 = 0x02;

/// eventState (1) + previousEventState (1) + sensorDataSize (1)
pub const NUMERIC_SENSOR_FIXED_SIZE: usize = 3;
/// currentState (1) + previousState (1)
pub const STATE_SENSOR_DATA_SIZE: usize = 2;
/// currentOpState (1) + previousOpState (1)
pub const OP_STATE_DATA_SIZE: usize = 2;

// ============================================================================
// Numeric Sensor Data Size Codes
// ============================================================================

pub const PLDM_SENSOR_DATA_SIZE_UINT8: u8 = 0;
pub const PLDM_SENSOR_DATA_SIZE_SINT8: u8 = 1;
pub const PLDM_SENSOR_DATA_SIZE_UINT16: u8 = 2;
pub const PLDM_SENSOR_DATA_SIZE_SINT16: u8 = 3;
pub const PLDM_SENSOR_DATA_SIZE_UINT32: u8 = 4;
pub const PLDM_SENSOR_DATA_SIZE_SINT32: u8 = 5;

// ============================================================================
// Sensor Operational States
// ============================================================================

pub const PLDM_SENSOR_ENABLED: u8 = 0;
pub const PLDM_SENSOR_DISABLED: u8 = 1;
pub const PLDM_SENSOR_UNAVAILABLE: u8 = 2;
pub const PLDM_SENSOR_STATUSUNKOWN: u8 = 3;
pub const PLDM_SENSOR_FAILED: u8 = 4;
pub const PLDM_SENSOR_INITIALIZING: u8 = 5;
pub const PLDM_SENSOR_SHUTTINGDOWN: u8 = 6;
pub const PLDM_SENSOR_INTEST: u8 = 7;

// ============================================================================
// OEM Sensor IDs
// ============================================================================

/// Boot progress summary sensor
pub const BOOT_OVERALL: u16 = 175;

// ============================================================================
// Boot Overall Reading
// ============================================================================

pub const BOOT_STATUS_SUCCESS: u8 = 0x80;
pub const BOOT_STATUS_FAILURE: u8 = 0x81;

pub const UEFI_STATUS_CLASS_CODE_MIN: u8 = 0x00;
pub const UEFI_STATUS_CLASS_CODE_MAX: u8 = 0x7F;

pub const BOOT_STAGE_SECPRO: u8 = 0x90;
pub const BOOT_STAGE_MPRO: u8 = 0x91;
pub const BOOT_STAGE_ATF_BL1: u8 = 0x92;
pub const BOOT_STAGE_ATF_BL2: u8 = 0x93;
pub const BOOT_STAGE_DDR_INITIALIZATION: u8 = 0x94;
pub const BOOT_STAGE_DDR_TRAINING: u8 = 0x95;
pub const BOOT_STAGE_S0_DDR_TRAINING_FAILURE: u8 = 0x96;
pub const BOOT_STAGE_ATF_BL31: u8 = 0x97;
pub const BOOT_STAGE_ATF_BL32: u8 = 0x98;
pub const BOOT_STAGE_S1_DDR_TRAINING_FAILURE: u8 = 0x99;

/// Bit offset of the DIMM fault mask within the present reading
pub const DIMM_MASK_SHIFT: u32 = 16;

// ============================================================================
// Redfish Message IDs
// ============================================================================

pub const REDFISH_MSG_ID_OK: &str = "OpenBMC.0.1.AmpereEvent.OK";
pub const REDFISH_MSG_ID_BIOS_FW_PANIC: &str = "OpenBMC.0.1.BIOSFirmwarePanicReason.Warning";

//! Boot overall sensor classification.
//!
//! The boot overall sensor packs boot progress into its 32-bit present
//! reading:
//!
//! | Bits   | Field                               |
//! |--------|-------------------------------------|
//! | 0..8   | status (0x80 success, 0x81 failure) |
//! | 8..16  | boot stage                          |
//! | 16..32 | DIMM fault mask, bit N = slot N     |

pub mod dimm;

pub use dimm::dimm_idxs_to_string;

use std::fmt;

use crate::events::{LogEntry, LogLevel};
use crate::protocol::constants::*;

/// Status byte of a boot overall reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BootStatus {
    Success,
    Failure,
    Unknown(u8),
}

impl From<u8> for BootStatus {
    fn from(v: u8) -> Self {
        match v {
            BOOT_STATUS_SUCCESS => BootStatus::Success,
            BOOT_STATUS_FAILURE => BootStatus::Failure,
            other => BootStatus::Unknown(other),
        }
    }
}

impl fmt::Display for BootStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BootStatus::Success => write!(f, "booted"),
            BootStatus::Failure => write!(f, "boot failed"),
            BootStatus::Unknown(v) => write!(f, "unknown status (0x{:02X})", v),
        }
    }
}

/// Firmware boot stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BootStage {
    /// UEFI status code class, 0x00..=0x7F.
    Uefi(u8),
    SecPro,
    MPro,
    AtfBl1,
    AtfBl2,
    DdrInitialization,
    DdrTraining,
    S0DdrTrainingFailure,
    AtfBl31,
    AtfBl32,
    S1DdrTrainingFailure,
    Unknown(u8),
}

impl From<u8> for BootStage {
    fn from(v: u8) -> Self {
        match v {
            UEFI_STATUS_CLASS_CODE_MIN..=UEFI_STATUS_CLASS_CODE_MAX => BootStage::Uefi(v),
            BOOT_STAGE_SECPRO => BootStage::SecPro,
            BOOT_STAGE_MPRO => BootStage::MPro,
            BOOT_STAGE_ATF_BL1 => BootStage::AtfBl1,
            BOOT_STAGE_ATF_BL2 => BootStage::AtfBl2,
            BOOT_STAGE_DDR_INITIALIZATION => BootStage::DdrInitialization,
            BOOT_STAGE_DDR_TRAINING => BootStage::DdrTraining,
            BOOT_STAGE_S0_DDR_TRAINING_FAILURE => BootStage::S0DdrTrainingFailure,
            BOOT_STAGE_ATF_BL31 => BootStage::AtfBl31,
            BOOT_STAGE_ATF_BL32 => BootStage::AtfBl32,
            BOOT_STAGE_S1_DDR_TRAINING_FAILURE => BootStage::S1DdrTrainingFailure,
            other => BootStage::Unknown(other),
        }
    }
}

impl fmt::Display for BootStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BootStage::Uefi(class) => write!(f, "UEFI status class 0x{:02X}", class),
            BootStage::SecPro => write!(f, "SECpro"),
            BootStage::MPro => write!(f, "Mpro"),
            BootStage::AtfBl1 => write!(f, "ATF BL1"),
            BootStage::AtfBl2 => write!(f, "ATF BL2"),
            BootStage::DdrInitialization => write!(f, "DDR initialization"),
            BootStage::DdrTraining => write!(f, "DDR training"),
            BootStage::S0DdrTrainingFailure => write!(f, "S0 DDR training failure"),
            BootStage::AtfBl31 => write!(f, "ATF BL31"),
            BootStage::AtfBl32 => write!(f, "ATF BL32"),
            BootStage::S1DdrTrainingFailure => write!(f, "S1 DDR training failure"),
            BootStage::Unknown(v) => write!(f, "unknown stage (0x{:02X})", v),
        }
    }
}

/// Interpreted boot overall present reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BootStatusCode {
    pub status: BootStatus,
    pub stage: BootStage,
    pub dimm_fault_mask: u32,
}

impl BootStatusCode {
    pub fn from_reading(present_reading: u32) -> Self {
        let [status, stage, ..] = present_reading.to_le_bytes();
        Self {
            status: status.into(),
            stage: stage.into(),
            dimm_fault_mask: present_reading >> DIMM_MASK_SHIFT,
        }
    }

    pub fn level(&self) -> LogLevel {
        match self.status {
            BootStatus::Failure => LogLevel::BiosFwPanic,
            _ => LogLevel::Ok,
        }
    }

    /// Stage and status text, with the faulty DIMMs on a failed boot.
    pub fn describe(&self) -> String {
        let mut description = format!("{} {}", self.stage, self.status);
        if self.status == BootStatus::Failure && self.dimm_fault_mask != 0 {
            description.push_str(", DIMM fault: ");
            description.push_str(&dimm_idxs_to_string(self.dimm_fault_mask));
        }
        description
    }
}

/// Classify a boot overall reading into a record, prefixed with `prefix`.
pub fn classify_boot_overall(prefix: &str, present_reading: u32) -> LogEntry {
    let code = BootStatusCode::from_reading(present_reading);
    LogEntry::new(format!("{}{}", prefix, code.describe()), code.level())
}

//! OEM-Event-Core: PLDM OEM sensor event decoding in Rust.
//!
//! This crate decodes vendor-specific PLDM sensor event messages raised by
//! the host processor sockets and turns them into human-readable diagnostic
//! records for the boot-health monitoring path of a management controller.
//!
//! # Architecture
//!
//! The crate is organized into layers:
//!
//! - **Protocol**: Constants, sensor event header and class bodies
//! - **Handlers**: One processor per sensor event class
//! - **Boot**: Boot overall reading classification and DIMM fault formatting
//! - **Sink**: Logging sink abstraction (journal, in-memory)
//! - **Manager**: Entry point tying decode, classification and logging together
//!
//! # Example
//!
//! ```no_run
//! use oem_event_core::{ManagerConfig, OemEventManager};
//!
//! let manager = OemEventManager::new(ManagerConfig::default());
//! // formatVersion, TID, eventClass, sensorID (175), numeric class, body
//! let msg = [
//!     0x01, 0x01, 0x00, 0xAF, 0x00, 0x02, 0x00, 0x00, 0x04, 0x81, 0x93, 0x00, 0x00,
//! ];
//! let rc = manager.handle_sensor_event(&msg, msg.len(), 0x01, 1, 3);
//! assert_eq!(rc, 0);
//! ```

pub mod boot;
pub mod config;
pub mod events;
pub mod handlers;
pub mod manager;
pub mod protocol;
pub mod sink;

// Re-exports for convenience
pub use boot::{BootStage, BootStatus, BootStatusCode, classify_boot_overall, dimm_idxs_to_string};
pub use config::{ManagerConfig, SocketName};
pub use events::{LogEntry, LogLevel};
pub use handlers::NumericSensorHandler;
pub use manager::OemEventManager;
pub use protocol::{DecodeError, SensorEventClass, SensorEventHeader};
pub use sink::{EventSink, JournalSink, MemorySink, NullSink, SinkError};

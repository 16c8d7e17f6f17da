//! Logging sink layer.

pub mod journal;
pub mod mock;
pub mod traits;

pub use journal::JournalSink;
pub use mock::MemorySink;
pub use traits::{EventSink, NullSink, SinkError};

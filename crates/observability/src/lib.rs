//! Logging setup shared by the EventGate binaries.

/// Subscriber configuration (filter, output format).
pub mod tracing;

pub use crate::tracing::{LogFormat, LogSettings, UnknownLogFormat, init, init_with};

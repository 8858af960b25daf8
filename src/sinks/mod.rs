//! Synchronous output sinks
//!
//! The console echo and the system-log passthrough write on the caller's
//! thread, independent of the queued file channels. The system log doubles
//! as the facility's own fallback when a channel stream fails.

pub(crate) mod console;
pub mod syslog;

pub use syslog::Priority;

//! # Channel Logger System
//!
//! A process-local logging facility that routes records to three independent
//! channels (application, debug, event), each drained to its own file by a
//! dedicated background thread.
//!
//! ## Features
//!
//! - **Asynchronous**: Callers enqueue records; writer threads handle file IO
//! - **Three Channels**: Leveled application log plus debug and event streams
//! - **Severity Threshold**: Runtime-adjustable filter for application records
//! - **Console Echo**: Optional colored mirror of every record to stdout
//! - **Self-Reporting**: Internal failures go to the system log, never panic

pub mod core;
pub mod global;
pub mod macros;
mod permissions;
pub mod scope;
pub mod sinks;

pub mod prelude {
    pub use crate::core::{
        ChannelKind, LogPaths, Logger, LoggerError, Record, RecordQueue, Result, Severity,
        CODE_APP_START, CODE_APP_STOP, DEFAULT_APL_LOG_PATH, DEFAULT_DBG_LOG_PATH,
        DEFAULT_EVNT_LOG_PATH, DEFAULT_MESSAGE_CODE, DEFAULT_SHUTDOWN_TIMEOUT, POLL_INTERVAL,
        SHUTDOWN_DRAIN_DELAY,
    };
    pub use crate::global::{global, try_global};
    pub use crate::scope::ScopeTrace;
    pub use crate::sinks::Priority;
}

pub use crate::core::{
    ChannelKind, LogPaths, Logger, LoggerError, Record, RecordQueue, Result, Severity,
    CODE_APP_START, CODE_APP_STOP, DEFAULT_APL_LOG_PATH, DEFAULT_DBG_LOG_PATH,
    DEFAULT_EVNT_LOG_PATH, DEFAULT_MESSAGE_CODE, DEFAULT_SHUTDOWN_TIMEOUT, POLL_INTERVAL,
    SHUTDOWN_DRAIN_DELAY,
};
pub use crate::global::{global, try_global};
pub use crate::scope::ScopeTrace;
pub use crate::sinks::Priority;

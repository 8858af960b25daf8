//! Core logger types: severity, records, channels, and the logger itself

pub mod channel;
pub mod error;
pub mod logger;
pub mod queue;
pub mod record;
pub mod severity;
pub mod timestamp;
pub(crate) mod writer;

pub use channel::{
    ChannelKind, DEFAULT_APL_LOG_PATH, DEFAULT_DBG_LOG_PATH, DEFAULT_EVNT_LOG_PATH,
};
pub use error::{LoggerError, Result};
pub use logger::{
    LogPaths, Logger, DEFAULT_SHUTDOWN_TIMEOUT, SHUTDOWN_DRAIN_DELAY,
};
pub use queue::RecordQueue;
pub use record::{Record, CODE_APP_START, CODE_APP_STOP, DEFAULT_MESSAGE_CODE};
pub use severity::Severity;
pub use timestamp::{format_timestamp, now_string, TIMESTAMP_FORMAT};
pub use writer::POLL_INTERVAL;

//! Per-channel state
//!
//! Each of the three channels owns its destination path, enable flag, record
//! queue, and lazily opened append stream. Stream access is guarded by a
//! channel mutex separate from the queue's internal synchronization: call
//! sites only ever touch the queue, the writer task only ever touches the
//! stream.

use super::error::{LoggerError, Result};
use super::queue::RecordQueue;
use super::record::Record;
use crate::sinks::syslog;
use parking_lot::{Mutex, RwLock};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};

/// Default application log destination when `init` receives an empty path.
pub const DEFAULT_APL_LOG_PATH: &str = "/var/log/channel_logger/apl.log";
/// Default debug log destination.
pub const DEFAULT_DBG_LOG_PATH: &str = "/var/log/channel_logger/debug.log";
/// Default event log destination.
pub const DEFAULT_EVNT_LOG_PATH: &str = "/var/log/channel_logger/event.log";

/// The three independent delivery channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ChannelKind {
    Application,
    Debug,
    Event,
}

impl ChannelKind {
    pub const ALL: [ChannelKind; 3] = [
        ChannelKind::Application,
        ChannelKind::Debug,
        ChannelKind::Event,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            ChannelKind::Application => "application",
            ChannelKind::Debug => "debug",
            ChannelKind::Event => "event",
        }
    }

    /// Destination used when `init` is handed an empty path for this channel.
    pub const fn default_path(self) -> &'static str {
        match self {
            ChannelKind::Application => DEFAULT_APL_LOG_PATH,
            ChannelKind::Debug => DEFAULT_DBG_LOG_PATH,
            ChannelKind::Event => DEFAULT_EVNT_LOG_PATH,
        }
    }
}

impl fmt::Display for ChannelKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One channel: destination, enable flag, queue, and append stream.
pub(crate) struct Channel {
    kind: ChannelKind,
    path: RwLock<PathBuf>,
    enabled: AtomicBool,
    queue: RecordQueue,
    stream: Mutex<Option<File>>,
}

impl Channel {
    /// A channel starts disabled, with no path and no open stream.
    pub(crate) fn new(kind: ChannelKind) -> Self {
        Self {
            kind,
            path: RwLock::new(PathBuf::new()),
            enabled: AtomicBool::new(false),
            queue: RecordQueue::new(),
            stream: Mutex::new(None),
        }
    }

    pub(crate) fn kind(&self) -> ChannelKind {
        self.kind
    }

    pub(crate) fn path(&self) -> PathBuf {
        self.path.read().clone()
    }

    pub(crate) fn set_path(&self, path: &Path) {
        *self.path.write() = path.to_path_buf();
    }

    pub(crate) fn is_enabled(&self) -> bool {
        self.enabled.load(Ordering::Relaxed)
    }

    pub(crate) fn set_enabled(&self, enabled: bool) {
        self.enabled.store(enabled, Ordering::Relaxed);
    }

    pub(crate) fn queue(&self) -> &RecordQueue {
        &self.queue
    }

    pub(crate) fn push(&self, record: Record) {
        self.queue.push(record);
    }

    /// Append one record, opening the stream on first use.
    ///
    /// Failures never propagate out of the writer: the record is rerouted to
    /// the system log, and a broken handle is dropped so the next record
    /// retries the open.
    pub(crate) fn write_record(&self, record: &Record) {
        let path = self.path();
        let mut stream = self.stream.lock();
        if stream.is_none() {
            match OpenOptions::new().create(true).append(true).open(&path) {
                Ok(file) => *stream = Some(file),
                Err(err) => {
                    syslog::err(format!(
                        "failed to open {} log file '{}': {}",
                        self.kind,
                        path.display(),
                        err
                    ));
                    syslog::info(record.as_str());
                    return;
                }
            }
        }
        if let Some(file) = stream.as_mut() {
            // File writes are unbuffered; each record reaches the OS here.
            if let Err(err) = writeln!(file, "{}", record.as_str()) {
                syslog::err(format!(
                    "failed to write {} log file '{}': {}",
                    self.kind,
                    path.display(),
                    err
                ));
                syslog::info(record.as_str());
                *stream = None;
            }
        }
    }

    /// Close the stream if one is open, surfacing errors a plain drop would
    /// swallow. Harmless when nothing was ever opened.
    pub(crate) fn close(&self) -> Result<()> {
        let mut stream = self.stream.lock();
        if let Some(file) = stream.take() {
            file.sync_all().map_err(|err| {
                LoggerError::stream(self.path().display().to_string(), "closing", err)
            })?;
        }
        Ok(())
    }
}

//! Logger facade and lifecycle controller
//!
//! [`Logger`] is an explicitly constructed context object: call sites hold a
//! reference (or use the process-wide handle in [`crate::global`]) and log
//! through leveled operations that format on the calling thread and push to
//! the per-channel queues. `init` validates destinations and starts the
//! three writer tasks; `drop_all` drains, stops, and closes them.

use super::channel::{Channel, ChannelKind};
use super::error::{LoggerError, Result};
use super::record::{Record, DEFAULT_MESSAGE_CODE};
use super::severity::Severity;
use super::writer::WriterTask;
use crate::permissions;
use crate::sinks::console::Console;
use crate::sinks::syslog;
use parking_lot::{Mutex, RwLock};
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

/// Per-writer join timeout during shutdown (5 seconds).
///
/// Also used when the logger is dropped without an explicit `drop_all`.
pub const DEFAULT_SHUTDOWN_TIMEOUT: Duration = Duration::from_secs(5);

/// Pause before the interrupt flags go up during shutdown, giving writers a
/// window to drain queued records. Twice the writer poll interval.
pub const SHUTDOWN_DRAIN_DELAY: Duration = Duration::from_millis(200);

/// Resolved log destinations returned by a successful [`Logger::init`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogPaths {
    pub application: PathBuf,
    pub debug: PathBuf,
    pub event: PathBuf,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Idle,
    Running,
    Closed,
}

pub struct Logger {
    threshold: RwLock<Severity>,
    console_echo: AtomicBool,
    console: Console,
    channels: [Arc<Channel>; 3],
    writers: Mutex<Vec<WriterTask>>,
    phase: Mutex<Phase>,
}

impl Logger {
    /// Create a logger with everything off: all channels disabled, console
    /// echo disabled, severity threshold at `Critical`, no writers running.
    #[must_use]
    pub fn new() -> Self {
        Self {
            threshold: RwLock::new(Severity::Critical),
            console_echo: AtomicBool::new(false),
            console: Console::new(),
            channels: [
                Arc::new(Channel::new(ChannelKind::Application)),
                Arc::new(Channel::new(ChannelKind::Debug)),
                Arc::new(Channel::new(ChannelKind::Event)),
            ],
            writers: Mutex::new(Vec::new()),
            phase: Mutex::new(Phase::Idle),
        }
    }

    pub(crate) fn channel(&self, kind: ChannelKind) -> &Arc<Channel> {
        match kind {
            ChannelKind::Application => &self.channels[0],
            ChannelKind::Debug => &self.channels[1],
            ChannelKind::Event => &self.channels[2],
        }
    }

    /// Resolve and validate the three log destinations, then start one
    /// writer task per channel.
    ///
    /// Empty or all-whitespace paths fall back to the channel defaults, and
    /// the substitution is reported to the system log. Each parent directory
    /// must exist and be readable and writable; an already existing target
    /// file must be readable and writable too. Validation failures return a
    /// [`LoggerError::Permission`] naming the offending path, before any
    /// writer starts.
    ///
    /// Calling `init` on a running or already shut down logger fails.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use channel_logger_system::Logger;
    ///
    /// let logger = Logger::new();
    /// let paths = logger.init("/tmp/app/apl.log", "/tmp/app/debug.log", "/tmp/app/event.log")?;
    /// println!("application records go to {}", paths.application.display());
    /// logger.enable_file_logging(true);
    /// logger.drop_all()?;
    /// # Ok::<(), channel_logger_system::LoggerError>(())
    /// ```
    pub fn init(&self, apl_path: &str, dbg_path: &str, evnt_path: &str) -> Result<LogPaths> {
        let mut phase = self.phase.lock();
        match *phase {
            Phase::Idle => {}
            Phase::Running => {
                return Err(LoggerError::init("logger", "already running"));
            }
            Phase::Closed => {
                return Err(LoggerError::init("logger", "already shut down"));
            }
        }

        let resolved = LogPaths {
            application: permissions::resolve_path(ChannelKind::Application, apl_path),
            debug: permissions::resolve_path(ChannelKind::Debug, dbg_path),
            event: permissions::resolve_path(ChannelKind::Event, evnt_path),
        };
        // Recorded before validation so the caller can observe the resolved
        // destination even when a later check fails.
        self.channel(ChannelKind::Application)
            .set_path(&resolved.application);
        self.channel(ChannelKind::Debug).set_path(&resolved.debug);
        self.channel(ChannelKind::Event).set_path(&resolved.event);

        for kind in ChannelKind::ALL {
            permissions::validate_target(kind, &self.channel(kind).path())?;
        }

        let mut spawned: Vec<WriterTask> = Vec::with_capacity(ChannelKind::ALL.len());
        for kind in ChannelKind::ALL {
            match WriterTask::spawn(Arc::clone(self.channel(kind))) {
                Ok(task) => spawned.push(task),
                Err(err) => {
                    syslog::err(err.to_string());
                    for task in &spawned {
                        task.interrupt();
                    }
                    for task in spawned {
                        task.join(DEFAULT_SHUTDOWN_TIMEOUT);
                    }
                    return Err(err);
                }
            }
        }
        *self.writers.lock() = spawned;
        *phase = Phase::Running;
        Ok(resolved)
    }

    /// Stop the writer tasks and close the log streams. Idempotent.
    ///
    /// When the logger is running this waits [`SHUTDOWN_DRAIN_DELAY`] so the
    /// writers can drain queued records, raises every interrupt flag, and
    /// joins each writer with a bounded wait. All three streams are then
    /// closed independently; failures are collected and returned as one
    /// aggregated [`LoggerError::Exit`] after every close has been
    /// attempted. Finally all enable flags are cleared, so later logging
    /// calls are no-ops. A repeated call returns `Ok(())` without delay.
    pub fn drop_all(&self) -> Result<()> {
        let mut phase = self.phase.lock();

        if *phase == Phase::Running {
            thread::sleep(SHUTDOWN_DRAIN_DELAY);
            let writers = std::mem::take(&mut *self.writers.lock());
            for writer in &writers {
                writer.interrupt();
            }
            for writer in writers {
                writer.join(DEFAULT_SHUTDOWN_TIMEOUT);
            }
        }

        let mut failures = Vec::new();
        for kind in ChannelKind::ALL {
            if let Err(err) = self.channel(kind).close() {
                syslog::err(err.to_string());
                failures.push(err.to_string());
            }
        }

        for kind in ChannelKind::ALL {
            self.channel(kind).set_enabled(false);
        }
        self.console_echo.store(false, Ordering::Relaxed);
        *phase = Phase::Closed;

        if failures.is_empty() {
            Ok(())
        } else {
            Err(LoggerError::exit(failures))
        }
    }

    pub fn is_running(&self) -> bool {
        *self.phase.lock() == Phase::Running
    }

    /// Resolved destination for one channel. Empty until `init` resolves
    /// the supplied paths.
    pub fn log_path(&self, kind: ChannelKind) -> PathBuf {
        self.channel(kind).path()
    }

    /// Set the application-channel severity threshold.
    ///
    /// Application records with `rank < level.rank()` are discarded at the
    /// call site. Debug and event records are never affected.
    pub fn set_severity_level(&self, level: Severity) {
        *self.threshold.write() = level;
    }

    pub fn severity_level(&self) -> Severity {
        *self.threshold.read()
    }

    /// Enable or disable all three file channels at once.
    pub fn enable_file_logging(&self, enabled: bool) {
        for kind in ChannelKind::ALL {
            self.channel(kind).set_enabled(enabled);
        }
    }

    /// Enable or disable the console echo of queued records.
    pub fn enable_console_logging(&self, enabled: bool) {
        self.console_echo.store(enabled, Ordering::Relaxed);
    }

    pub fn enable_apl_logging(&self, enabled: bool) {
        self.channel(ChannelKind::Application).set_enabled(enabled);
    }

    pub fn enable_dbg_logging(&self, enabled: bool) {
        self.channel(ChannelKind::Debug).set_enabled(enabled);
    }

    pub fn enable_evnt_logging(&self, enabled: bool) {
        self.channel(ChannelKind::Event).set_enabled(enabled);
    }

    /// Log a critical application record with the default message code.
    #[inline]
    pub fn crit(&self, message: impl Into<String>) {
        self.log_application(Severity::Critical, DEFAULT_MESSAGE_CODE, message.into());
    }

    /// Log a critical application record with an explicit message code.
    #[inline]
    pub fn crit_with_code(&self, code: u32, message: impl Into<String>) {
        self.log_application(Severity::Critical, code, message.into());
    }

    #[inline]
    pub fn error(&self, message: impl Into<String>) {
        self.log_application(Severity::Error, DEFAULT_MESSAGE_CODE, message.into());
    }

    #[inline]
    pub fn error_with_code(&self, code: u32, message: impl Into<String>) {
        self.log_application(Severity::Error, code, message.into());
    }

    #[inline]
    pub fn warn(&self, message: impl Into<String>) {
        self.log_application(Severity::Warning, DEFAULT_MESSAGE_CODE, message.into());
    }

    #[inline]
    pub fn warn_with_code(&self, code: u32, message: impl Into<String>) {
        self.log_application(Severity::Warning, code, message.into());
    }

    #[inline]
    pub fn info(&self, message: impl Into<String>) {
        self.log_application(Severity::Info, DEFAULT_MESSAGE_CODE, message.into());
    }

    #[inline]
    pub fn info_with_code(&self, code: u32, message: impl Into<String>) {
        self.log_application(Severity::Info, code, message.into());
    }

    /// Log to the debug channel. Gated only by the debug enable flag, never
    /// by the severity threshold.
    #[inline]
    pub fn debug(&self, message: impl Into<String>) {
        if !self.channel(ChannelKind::Debug).is_enabled() {
            return;
        }
        self.submit(ChannelKind::Debug, Record::new(Severity::Debug, 0, message.into()));
    }

    /// Log to the event channel. Gated only by the event enable flag.
    #[inline]
    pub fn event(&self, message: impl Into<String>) {
        if !self.channel(ChannelKind::Event).is_enabled() {
            return;
        }
        self.submit(ChannelKind::Event, Record::new(Severity::Event, 0, message.into()));
    }

    fn log_application(&self, severity: Severity, code: u32, message: String) {
        if !self.channel(ChannelKind::Application).is_enabled() {
            return;
        }
        if severity.rank() < self.threshold.read().rank() {
            return;
        }
        self.submit(
            ChannelKind::Application,
            Record::new(severity, code, message),
        );
    }

    fn submit(&self, kind: ChannelKind, record: Record) {
        if self.console_echo.load(Ordering::Relaxed) {
            self.console.echo(record.severity(), record.as_str());
        }
        self.channel(kind).push(record);
    }

    /// Write directly to the console and the system log at critical
    /// priority.
    ///
    /// The syslog passthroughs bypass the queues and writer tasks entirely,
    /// so they keep working before `init` and after `drop_all`.
    pub fn syslog_crit(message: impl AsRef<str>) {
        syslog::crit(message);
    }

    /// Direct console and system log write at error priority.
    pub fn syslog_error(message: impl AsRef<str>) {
        syslog::err(message);
    }

    /// Direct console and system log write at warning priority.
    pub fn syslog_warn(message: impl AsRef<str>) {
        syslog::warning(message);
    }

    /// Direct console and system log write at info priority.
    pub fn syslog_info(message: impl AsRef<str>) {
        syslog::info(message);
    }

    /// Direct console and system log write at debug priority.
    pub fn syslog_debug(message: impl AsRef<str>) {
        syslog::debug(message);
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for Logger {
    fn drop(&mut self) {
        // Close failures are reported to the system log inside drop_all.
        let _ = self.drop_all();
    }
}

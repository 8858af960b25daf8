//! Background writer tasks
//!
//! One named thread per channel drains that channel's queue into its file.
//! The drain loop waits on the queue with a bounded timeout, so a raised
//! interrupt flag is noticed within [`POLL_INTERVAL`] even when no records
//! arrive, while an arriving record wakes the writer immediately.

use super::channel::{Channel, ChannelKind};
use super::error::{LoggerError, Result};
use crate::sinks::syslog;
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

/// Upper bound on how long a writer waits for a record before rechecking its
/// interrupt flag.
pub const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Handle to one spawned writer task.
pub(crate) struct WriterTask {
    kind: ChannelKind,
    interrupt: Arc<AtomicBool>,
    handle: JoinHandle<()>,
}

impl WriterTask {
    /// Spawn the writer thread for `channel` with a cleared interrupt flag.
    pub(crate) fn spawn(channel: Arc<Channel>) -> Result<Self> {
        let kind = channel.kind();
        let interrupt = Arc::new(AtomicBool::new(false));
        let flag = Arc::clone(&interrupt);
        let handle = thread::Builder::new()
            .name(format!("{}-log-writer", kind.as_str()))
            .spawn(move || {
                // A panic ends this writer only; the other channels and the
                // synchronous sinks keep running.
                let outcome = catch_unwind(AssertUnwindSafe(|| drain_loop(&channel, &flag)));
                if outcome.is_err() {
                    syslog::err(format!("{} log writer terminated by panic", kind));
                }
            })
            .map_err(|err| LoggerError::init(format!("{} writer", kind), err.to_string()))?;
        Ok(Self {
            kind,
            interrupt,
            handle,
        })
    }

    /// Ask the writer to stop after its current wait.
    pub(crate) fn interrupt(&self) {
        self.interrupt.store(true, Ordering::Relaxed);
    }

    /// Wait for the thread to finish, giving up after `timeout`.
    pub(crate) fn join(self, timeout: Duration) -> bool {
        let start = Instant::now();
        while !self.handle.is_finished() {
            if start.elapsed() > timeout {
                syslog::err(format!(
                    "{} log writer did not stop within {:?}",
                    self.kind, timeout
                ));
                return false;
            }
            thread::sleep(Duration::from_millis(10));
        }
        let _ = self.handle.join();
        true
    }
}

fn drain_loop(channel: &Channel, interrupt: &AtomicBool) {
    while !interrupt.load(Ordering::Relaxed) {
        if let Some(record) = channel.queue().pop_timeout(POLL_INTERVAL) {
            channel.write_record(&record);
        }
    }
}

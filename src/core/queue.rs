//! Per-channel record queues
//!
//! Each channel owns one [`RecordQueue`]: any number of producers push from
//! call sites, exactly one writer task consumes. Pushing never blocks and
//! never fails; capacity is bounded only by available memory.

use super::record::Record;
use crossbeam_channel::{unbounded, Receiver, Sender};
use std::time::Duration;

/// Unbounded multi-producer, single-consumer FIFO of formatted records.
pub struct RecordQueue {
    tx: Sender<Record>,
    rx: Receiver<Record>,
}

impl RecordQueue {
    pub fn new() -> Self {
        let (tx, rx) = unbounded();
        Self { tx, rx }
    }

    /// Append a record. Never blocks the caller.
    pub fn push(&self, record: Record) {
        // The receiver lives in this struct, so the channel cannot be
        // disconnected while `self` exists.
        let _ = self.tx.send(record);
    }

    /// Remove the oldest record without waiting.
    pub fn try_pop(&self) -> Option<Record> {
        self.rx.try_recv().ok()
    }

    /// Remove the oldest record, waiting up to `timeout` for one to arrive.
    ///
    /// Backed by the channel's internal condition variable, so a pushed
    /// record wakes the consumer immediately rather than on the next poll.
    pub fn pop_timeout(&self, timeout: Duration) -> Option<Record> {
        self.rx.recv_timeout(timeout).ok()
    }

    pub fn len(&self) -> usize {
        self.rx.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rx.is_empty()
    }
}

impl Default for RecordQueue {
    fn default() -> Self {
        Self::new()
    }
}

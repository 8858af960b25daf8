//! System log passthrough
//!
//! Writes synchronously on the caller's thread: the plain message is echoed
//! to stdout and handed to `syslog(3)`. This sink backs the
//! `Logger::syslog_*` passthroughs, the facility's self-diagnostics, and the
//! reroute target for records whose channel stream is failing. It never
//! touches the queues or writer tasks, so it stays usable while they are
//! down.
//!
//! Test builds swap the `syslog(3)` call for an in-process mock that captures
//! `(priority, message)` events; non-unix builds fall back to stderr.

/// Subset of `syslog(3)` priorities this facility emits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Priority {
    Crit,
    Err,
    Warning,
    Info,
    Debug,
}

impl Priority {
    #[cfg(all(unix, not(test)))]
    const fn as_libc(self) -> libc::c_int {
        match self {
            Priority::Crit => libc::LOG_CRIT,
            Priority::Err => libc::LOG_ERR,
            Priority::Warning => libc::LOG_WARNING,
            Priority::Info => libc::LOG_INFO,
            Priority::Debug => libc::LOG_DEBUG,
        }
    }

    #[cfg(not(unix))]
    pub(crate) const fn name(self) -> &'static str {
        match self {
            Priority::Crit => "crit",
            Priority::Err => "err",
            Priority::Warning => "warning",
            Priority::Info => "info",
            Priority::Debug => "debug",
        }
    }
}

/// Echo `message` to stdout and submit it to the system log.
pub fn write(priority: Priority, message: &str) {
    println!("{}", message);
    emit(priority, message);
}

pub fn crit(message: impl AsRef<str>) {
    write(Priority::Crit, message.as_ref());
}

pub fn err(message: impl AsRef<str>) {
    write(Priority::Err, message.as_ref());
}

pub fn warning(message: impl AsRef<str>) {
    write(Priority::Warning, message.as_ref());
}

pub fn info(message: impl AsRef<str>) {
    write(Priority::Info, message.as_ref());
}

pub fn debug(message: impl AsRef<str>) {
    write(Priority::Debug, message.as_ref());
}

#[cfg(all(unix, not(test)))]
fn emit(priority: Priority, message: &str) {
    use std::ffi::{CStr, CString};

    // syslog takes a C string; interior NULs cannot cross that boundary.
    let sanitized;
    let text = if message.as_bytes().contains(&0) {
        sanitized = message.replace('\0', " ");
        sanitized.as_str()
    } else {
        message
    };
    if let Ok(text) = CString::new(text) {
        unsafe {
            libc::syslog(
                priority.as_libc(),
                CStr::from_bytes_with_nul_unchecked(b"%s\0").as_ptr(),
                text.as_ptr(),
            );
        }
    }
}

#[cfg(test)]
fn emit(priority: Priority, message: &str) {
    mock::push_event(priority, message);
}

#[cfg(all(not(unix), not(test)))]
fn emit(priority: Priority, message: &str) {
    eprintln!("[syslog:{}] {}", priority.name(), message);
}

/// Captures syslog submissions during tests.
#[cfg(test)]
pub(crate) mod mock {
    use super::Priority;
    use std::sync::{Condvar, Mutex, OnceLock};
    use std::time::{Duration, Instant};

    #[derive(Debug, Clone, PartialEq, Eq)]
    pub(crate) struct Event {
        pub priority: Priority,
        pub message: String,
    }

    fn state() -> &'static (Mutex<Vec<Event>>, Condvar) {
        static STATE: OnceLock<(Mutex<Vec<Event>>, Condvar)> = OnceLock::new();
        STATE.get_or_init(|| (Mutex::new(Vec::new()), Condvar::new()))
    }

    pub(crate) fn push_event(priority: Priority, message: &str) {
        let (lock, cv) = state();
        lock.lock()
            .unwrap()
            .push(Event {
                priority,
                message: message.to_string(),
            });
        cv.notify_all();
    }

    /// Block until a captured event matches, or the timeout passes.
    ///
    /// The store is shared by all tests in the binary and is never drained,
    /// so assertions must match on unique message content rather than on
    /// counts.
    pub(crate) fn wait_for_matching(
        timeout: Duration,
        matching: impl Fn(&Event) -> bool,
    ) -> bool {
        let (lock, cv) = state();
        let deadline = Instant::now() + timeout;
        let mut events = lock.lock().unwrap();
        loop {
            if events.iter().any(&matching) {
                return true;
            }
            let now = Instant::now();
            if now >= deadline {
                return false;
            }
            let (guard, _) = cv.wait_timeout(events, deadline - now).unwrap();
            events = guard;
        }
    }
}

//! Process-wide logger handle
//!
//! The facade itself is an ordinary value; this module is the one place a
//! shared instance lives, for programs that want a single logger wired at
//! their outermost composition point. Libraries should take a `&Logger`
//! instead of reaching for this.
//!
//! Statics are never dropped, so a process using the global handle must call
//! `global().drop_all()` on its way out to flush and close the log files.

use crate::core::logger::Logger;
use std::sync::OnceLock;

static GLOBAL_LOGGER: OnceLock<Logger> = OnceLock::new();

/// The process-wide logger, created unconfigured on first use.
pub fn global() -> &'static Logger {
    GLOBAL_LOGGER.get_or_init(Logger::new)
}

/// The process-wide logger, if something has already touched it.
pub fn try_global() -> Option<&'static Logger> {
    GLOBAL_LOGGER.get()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_global_returns_same_instance() {
        let first = global() as *const Logger;
        let second = global() as *const Logger;
        assert_eq!(first, second);
    }

    #[test]
    fn test_try_global_after_touch() {
        let _ = global();
        assert!(try_global().is_some());
    }
}

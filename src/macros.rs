//! Logging macros for ergonomic message formatting.
//!
//! These macros provide a `println!`-style interface over the logger's
//! leveled operations. The application-channel macros accept an optional
//! leading `code = <expr>,` argument for coded records; without it the
//! default message code is used.
//!
//! # Examples
//!
//! ```
//! use channel_logger_system::prelude::*;
//! use channel_logger_system::{error, info};
//!
//! let logger = Logger::new();
//!
//! info!(logger, "server listening on port {}", 8080);
//! error!(logger, code = 503, "backend {} unavailable", "auth");
//! ```

/// Log a critical application record.
///
/// # Examples
///
/// ```
/// # use channel_logger_system::prelude::*;
/// # let logger = Logger::new();
/// use channel_logger_system::crit;
/// crit!(logger, "out of descriptors");
/// crit!(logger, code = 90001, "shutting down after {} failures", 3);
/// ```
#[macro_export]
macro_rules! crit {
    ($logger:expr, code = $code:expr, $($arg:tt)+) => {
        $logger.crit_with_code($code, format!($($arg)+))
    };
    ($logger:expr, $($arg:tt)+) => {
        $logger.crit(format!($($arg)+))
    };
}

/// Log an error application record.
///
/// # Examples
///
/// ```
/// # use channel_logger_system::prelude::*;
/// # let logger = Logger::new();
/// use channel_logger_system::error;
/// error!(logger, "failed to connect to database");
/// error!(logger, code = 500, "request {} aborted", 17);
/// ```
#[macro_export]
macro_rules! error {
    ($logger:expr, code = $code:expr, $($arg:tt)+) => {
        $logger.error_with_code($code, format!($($arg)+))
    };
    ($logger:expr, $($arg:tt)+) => {
        $logger.error(format!($($arg)+))
    };
}

/// Log a warning application record.
///
/// # Examples
///
/// ```
/// # use channel_logger_system::prelude::*;
/// # let logger = Logger::new();
/// use channel_logger_system::warn;
/// warn!(logger, "low disk space");
/// warn!(logger, code = 70012, "retry {} of {}", 3, 5);
/// ```
#[macro_export]
macro_rules! warn {
    ($logger:expr, code = $code:expr, $($arg:tt)+) => {
        $logger.warn_with_code($code, format!($($arg)+))
    };
    ($logger:expr, $($arg:tt)+) => {
        $logger.warn(format!($($arg)+))
    };
}

/// Log an info application record.
///
/// # Examples
///
/// ```
/// # use channel_logger_system::prelude::*;
/// # let logger = Logger::new();
/// use channel_logger_system::info;
/// info!(logger, "application started");
/// info!(logger, code = 2, "processing {} items", 100);
/// ```
#[macro_export]
macro_rules! info {
    ($logger:expr, code = $code:expr, $($arg:tt)+) => {
        $logger.info_with_code($code, format!($($arg)+))
    };
    ($logger:expr, $($arg:tt)+) => {
        $logger.info(format!($($arg)+))
    };
}

/// Log a record to the debug channel.
///
/// # Examples
///
/// ```
/// # use channel_logger_system::prelude::*;
/// # let logger = Logger::new();
/// use channel_logger_system::debug;
/// debug!(logger, "cache warmed with {} entries", 1024);
/// ```
#[macro_export]
macro_rules! debug {
    ($logger:expr, $($arg:tt)+) => {
        $logger.debug(format!($($arg)+))
    };
}

/// Log a record to the event channel.
///
/// # Examples
///
/// ```
/// # use channel_logger_system::prelude::*;
/// # let logger = Logger::new();
/// use channel_logger_system::event;
/// event!(logger, "user {} logged in", "alice");
/// ```
#[macro_export]
macro_rules! event {
    ($logger:expr, $($arg:tt)+) => {
        $logger.event(format!($($arg)+))
    };
}

/// Trace a scope on the debug channel: logs `<label> Enter` immediately and
/// `<label> Leave` when the returned guard drops.
///
/// Bind the result to a named variable so the guard lives to the end of the
/// scope.
///
/// # Examples
///
/// ```
/// # use channel_logger_system::prelude::*;
/// # let logger = Logger::new();
/// use channel_logger_system::trace_scope;
/// let _trace = trace_scope!(logger, "Worker::run(id={})", 7);
/// ```
#[macro_export]
macro_rules! trace_scope {
    ($logger:expr, $($arg:tt)+) => {
        $crate::ScopeTrace::new(&$logger, format!($($arg)+))
    };
}

/// Trace a scope with the call site's file and line: logs
/// `<file> [<function>():<line>] START` immediately and
/// `<function>()[<file>:<line>] END` when the guard drops.
///
/// # Examples
///
/// ```
/// # use channel_logger_system::prelude::*;
/// # let logger = Logger::new();
/// use channel_logger_system::trace_location;
/// let _trace = trace_location!(logger, "handle_request");
/// ```
#[macro_export]
macro_rules! trace_location {
    ($logger:expr, $function:expr) => {
        $crate::ScopeTrace::at(&$logger, file!(), $function, line!())
    };
}

/// Write directly to the console and system log at critical priority.
///
/// # Examples
///
/// ```no_run
/// use channel_logger_system::syslog_crit;
/// syslog_crit!("logger offline, {} records unflushed", 12);
/// ```
#[macro_export]
macro_rules! syslog_crit {
    ($($arg:tt)+) => {
        $crate::Logger::syslog_crit(format!($($arg)+))
    };
}

/// Write directly to the console and system log at error priority.
///
/// # Examples
///
/// ```no_run
/// use channel_logger_system::syslog_error;
/// syslog_error!("cannot open {}", "/var/log/app/apl.log");
/// ```
#[macro_export]
macro_rules! syslog_error {
    ($($arg:tt)+) => {
        $crate::Logger::syslog_error(format!($($arg)+))
    };
}

/// Write directly to the console and system log at warning priority.
#[macro_export]
macro_rules! syslog_warn {
    ($($arg:tt)+) => {
        $crate::Logger::syslog_warn(format!($($arg)+))
    };
}

/// Write directly to the console and system log at info priority.
#[macro_export]
macro_rules! syslog_info {
    ($($arg:tt)+) => {
        $crate::Logger::syslog_info(format!($($arg)+))
    };
}

/// Write directly to the console and system log at debug priority.
#[macro_export]
macro_rules! syslog_debug {
    ($($arg:tt)+) => {
        $crate::Logger::syslog_debug(format!($($arg)+))
    };
}

#[cfg(test)]
mod tests {
    use crate::core::channel::ChannelKind;
    use crate::core::severity::Severity;
    use crate::core::logger::Logger;

    fn open_logger() -> Logger {
        let logger = Logger::new();
        logger.enable_file_logging(true);
        logger.set_severity_level(Severity::Info);
        logger
    }

    #[test]
    fn test_plain_macros_use_default_code() {
        let logger = open_logger();
        info!(logger, "items: {}", 100);
        let record = logger
            .channel(ChannelKind::Application)
            .queue()
            .try_pop()
            .expect("record");
        assert!(record.as_str().contains("I000001, items: 100"));
    }

    #[test]
    fn test_code_form_overrides_default() {
        let logger = open_logger();
        error!(logger, code = 42, "request {} aborted", 17);
        let record = logger
            .channel(ChannelKind::Application)
            .queue()
            .try_pop()
            .expect("record");
        assert!(record.as_str().contains("E800042, request 17 aborted"));
    }

    #[test]
    fn test_crit_and_warn_macros() {
        let logger = open_logger();
        crit!(logger, "fail {}", 1);
        warn!(logger, code = 7, "warn {}", 2);
        let queue = logger.channel(ChannelKind::Application).queue();
        assert!(queue.try_pop().expect("crit").as_str().contains("C900001, fail 1"));
        assert!(queue.try_pop().expect("warn").as_str().contains("W700007, warn 2"));
    }

    #[test]
    fn test_debug_and_event_macros() {
        let logger = open_logger();
        debug!(logger, "counter: {}", 5);
        event!(logger, "session {} opened", "abc");
        let debug_record = logger
            .channel(ChannelKind::Debug)
            .queue()
            .try_pop()
            .expect("debug record");
        assert!(debug_record.as_str().ends_with("counter: 5"));
        let event_record = logger
            .channel(ChannelKind::Event)
            .queue()
            .try_pop()
            .expect("event record");
        assert!(event_record.as_str().ends_with("session abc opened"));
    }

    #[test]
    fn test_message_that_mentions_code_is_not_misparsed() {
        let logger = open_logger();
        info!(logger, "code = {} accepted", 9);
        let record = logger
            .channel(ChannelKind::Application)
            .queue()
            .try_pop()
            .expect("record");
        assert!(record.as_str().contains("I000001, code = 9 accepted"));
    }

    #[test]
    fn test_trace_scope_macro_pairs_markers() {
        let logger = Logger::new();
        logger.enable_dbg_logging(true);
        {
            let _trace = trace_scope!(logger, "job {}", 3);
        }
        let queue = logger.channel(ChannelKind::Debug).queue();
        assert!(queue.try_pop().expect("enter").as_str().contains("job 3 Enter"));
        assert!(queue.try_pop().expect("leave").as_str().contains("job 3 Leave"));
    }

    #[test]
    fn test_trace_location_macro_uses_call_site() {
        let logger = Logger::new();
        logger.enable_dbg_logging(true);
        {
            let _trace = trace_location!(logger, "test_fn");
        }
        let queue = logger.channel(ChannelKind::Debug).queue();
        let start = queue.try_pop().expect("start");
        assert!(start.as_str().contains("[test_fn():"));
        assert!(start.as_str().contains("macros.rs"));
        assert!(start.as_str().ends_with("START"));
        let end = queue.try_pop().expect("end");
        assert!(end.as_str().ends_with("END"));
    }

    #[test]
    fn test_syslog_macros_format() {
        use crate::sinks::syslog::{mock, Priority};
        use std::time::Duration;

        syslog_info!("macro-syslog-info-{}", 11);
        syslog_warn!("macro-syslog-warn-{}", 12);
        assert!(mock::wait_for_matching(Duration::from_secs(1), |e| {
            e.message == "macro-syslog-info-11" && e.priority == Priority::Info
        }));
        assert!(mock::wait_for_matching(Duration::from_secs(1), |e| {
            e.message == "macro-syslog-warn-12" && e.priority == Priority::Warning
        }));
    }
}

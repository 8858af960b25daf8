//! Scoped enter/leave tracing
//!
//! A [`ScopeTrace`] logs a marker to the debug channel when constructed and
//! the matching marker when dropped, so a scope's entry and exit always
//! appear as a pair, early returns included. Both markers go through
//! [`Logger::debug`] and therefore obey the debug enable flag.

use crate::core::logger::Logger;

enum Style {
    Plain,
    Location,
}

/// Guard that logs scope entry on construction and exit on drop.
///
/// Bind it to a named variable: `let _ = trace_scope!(...)` drops the guard
/// immediately and logs both markers back to back.
pub struct ScopeTrace<'a> {
    logger: &'a Logger,
    label: String,
    style: Style,
}

impl<'a> ScopeTrace<'a> {
    /// Log `"<label> Enter"` now and `"<label> Leave"` on drop.
    pub fn new(logger: &'a Logger, label: impl Into<String>) -> Self {
        let label = label.into();
        logger.debug(format!("{} Enter", label));
        Self {
            logger,
            label,
            style: Style::Plain,
        }
    }

    /// Source-location form: logs `"<file> [<function>():<line>] START"` now
    /// and `"<function>()[<file>:<line>] END"` on drop.
    pub fn at(logger: &'a Logger, file: &str, function: &str, line: u32) -> Self {
        logger.debug(format!("{} [{}():{}] START", file, function, line));
        Self {
            logger,
            label: format!("{}()[{}:{}]", function, file, line),
            style: Style::Location,
        }
    }
}

impl Drop for ScopeTrace<'_> {
    fn drop(&mut self) {
        match self.style {
            Style::Plain => self.logger.debug(format!("{} Leave", self.label)),
            Style::Location => self.logger.debug(format!("{} END", self.label)),
        }
    }
}

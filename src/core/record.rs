//! Formatted log records
//!
//! A [`Record`] is one fully formatted line, built on the caller's thread at
//! push time so the background writers only ever append text. Layouts:
//!
//! - application: `<timestamp> [<tag>]: <prefix><code:05>, <message>`
//! - debug:       `<timestamp> [DEBUG]: <message>`
//! - event:       `<timestamp> [EVENT]: <message>`

use super::severity::Severity;
use super::timestamp;

/// Code attached to application records logged without an explicit one.
pub const DEFAULT_MESSAGE_CODE: u32 = 1;
/// Conventional code for a process start marker.
pub const CODE_APP_START: u32 = 2;
/// Conventional code for a process stop marker.
pub const CODE_APP_STOP: u32 = 3;

/// One immutable log line plus the severity it was logged at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    severity: Severity,
    line: String,
}

impl Record {
    /// Format a record for `severity` with the current local timestamp.
    ///
    /// `code` is rendered (zero-padded to five digits) only for application
    /// severities; the debug and event layouts ignore it. The message is
    /// sanitized so one record is always exactly one physical line.
    pub fn new(severity: Severity, code: u32, message: impl Into<String>) -> Self {
        let message = sanitize_message(&message.into());
        let line = match severity.code_prefix() {
            Some(prefix) => format!(
                "{} [{}]: {}{:05}, {}",
                timestamp::now_string(),
                severity.tag(),
                prefix,
                code,
                message
            ),
            None => format!(
                "{} [{}]: {}",
                timestamp::now_string(),
                severity.tag(),
                message
            ),
        };
        Self { severity, line }
    }

    pub fn severity(&self) -> Severity {
        self.severity
    }

    pub fn as_str(&self) -> &str {
        &self.line
    }

    pub fn into_line(self) -> String {
        self.line
    }
}

impl std::fmt::Display for Record {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.line)
    }
}

/// Replace newlines, carriage returns, and tabs with escape sequences so a
/// crafted message cannot forge additional records in the file.
fn sanitize_message(message: &str) -> String {
    message
        .replace('\n', "\\n")
        .replace('\r', "\\r")
        .replace('\t', "\\t")
}

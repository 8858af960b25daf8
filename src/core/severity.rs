//! Severity definitions for the three log channels
//!
//! Application records carry one of `Critical`, `Error`, `Warning` or `Info`
//! and are subject to the logger's severity threshold. `Debug` and `Event`
//! each feed their own channel and are controlled only by that channel's
//! enable flag, never by the threshold.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Log severity with explicit wire ranks.
///
/// The numeric gaps are intentional: ranks 0..=1 and 6..=9 are part of the
/// on-disk record format (the digit after the level letter in coded
/// application records) and must stay stable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Severity {
    Info = 0,
    Event = 1,
    Debug = 6,
    Warning = 7,
    Error = 8,
    Critical = 9,
}

impl Severity {
    /// Numeric rank used for threshold comparison and coded prefixes.
    pub const fn rank(self) -> u8 {
        self as u8
    }

    /// Full level name, used by `Display` and `FromStr`.
    pub const fn name(self) -> &'static str {
        match self {
            Severity::Info => "INFO",
            Severity::Event => "EVENT",
            Severity::Debug => "DEBUG",
            Severity::Warning => "WARNING",
            Severity::Error => "ERROR",
            Severity::Critical => "CRITICAL",
        }
    }

    /// Bracket tag as it appears in formatted records.
    ///
    /// Application tags are four characters wide; `ERR ` keeps its trailing
    /// space so columns line up across severities.
    pub const fn tag(self) -> &'static str {
        match self {
            Severity::Info => "INFO",
            Severity::Event => "EVENT",
            Severity::Debug => "DEBUG",
            Severity::Warning => "WARN",
            Severity::Error => "ERR ",
            Severity::Critical => "CRIT",
        }
    }

    /// Coded-record prefix (level letter + rank digit) for application
    /// severities; `None` for the debug and event channels, whose records
    /// carry no code.
    pub const fn code_prefix(self) -> Option<&'static str> {
        match self {
            Severity::Info => Some("I0"),
            Severity::Warning => Some("W7"),
            Severity::Error => Some("E8"),
            Severity::Critical => Some("C9"),
            Severity::Event | Severity::Debug => None,
        }
    }

    /// Whether this severity belongs to the application channel and is
    /// therefore subject to the severity threshold.
    pub const fn is_application(self) -> bool {
        matches!(
            self,
            Severity::Info | Severity::Warning | Severity::Error | Severity::Critical
        )
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Severity {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "INFO" => Ok(Severity::Info),
            "EVENT" => Ok(Severity::Event),
            "DEBUG" => Ok(Severity::Debug),
            "WARN" | "WARNING" => Ok(Severity::Warning),
            "ERR" | "ERROR" => Ok(Severity::Error),
            "CRIT" | "CRITICAL" => Ok(Severity::Critical),
            _ => Err(format!("Invalid severity: '{}'", s)),
        }
    }
}

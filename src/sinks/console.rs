//! Console echo sink
//!
//! Echoes records on the caller's thread at push time. A dedicated mutex
//! serializes output so lines from concurrent callers never interleave;
//! ordering relative to the file write of the same record is unspecified.

use crate::core::severity::Severity;
use colored::Colorize;
use parking_lot::Mutex;

pub(crate) struct Console {
    gate: Mutex<()>,
}

impl Console {
    pub(crate) fn new() -> Self {
        Self {
            gate: Mutex::new(()),
        }
    }

    /// Print one formatted record line, styled by severity.
    ///
    /// Critical lines render bold reverse-video red on white, errors bold
    /// red, warnings bold yellow, events bold green; info and debug lines
    /// stay unstyled.
    pub(crate) fn echo(&self, severity: Severity, line: &str) {
        let _guard = self.gate.lock();
        match severity {
            Severity::Critical => println!("{}", line.red().on_white().bold().reversed()),
            Severity::Error => println!("{}", line.red().bold()),
            Severity::Warning => println!("{}", line.yellow().bold()),
            Severity::Event => println!("{}", line.green().bold()),
            Severity::Info | Severity::Debug => println!("{}", line),
        }
    }
}

impl Default for Console {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_echo_handles_every_severity() {
        let console = Console::new();
        for severity in [
            Severity::Critical,
            Severity::Error,
            Severity::Warning,
            Severity::Info,
            Severity::Debug,
            Severity::Event,
        ] {
            console.echo(severity, "styled line");
        }
    }

    #[test]
    fn test_concurrent_echo_is_serialized() {
        use std::sync::Arc;
        let console = Arc::new(Console::new());
        let handles: Vec<_> = (0..4)
            .map(|t| {
                let console = Arc::clone(&console);
                std::thread::spawn(move || {
                    for i in 0..25 {
                        console.echo(Severity::Info, &format!("t{} line {}", t, i));
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().expect("echo thread");
        }
    }
}
